use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();

    let exif = civetta::identify(&data).and_then(|image| image.exif());
    match exif {
        Ok(exif) => println!("{}", exif.debug_dump()),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
