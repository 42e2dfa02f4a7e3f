use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    for path in std::env::args().skip(1) {
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(err) => {
                println!("{path}: {err}");
                continue;
            }
        };

        let image = match civetta::identify(&data) {
            Ok(image) => image,
            Err(err) => {
                println!("{path}: {err}");
                continue;
            }
        };

        let exif = match image.exif_range() {
            Ok(range) => format!("Exif at {range}"),
            Err(err) => format!("{} ({err})", err.kind()),
        };

        println!("{path}: {} ({}), {exif}", image.name(), image.media_type());
    }
}
