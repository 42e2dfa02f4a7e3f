use std::fmt::Display;

pub fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First argument must be a path.");
    let data = std::fs::read(path).unwrap();

    let image = match civetta::identify(&data) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Format: {} ({})", image.name(), image.media_type());

    let exif = match image.exif() {
        Ok(exif) => exif,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    p("Make", exif.make().ok());
    p("Model", exif.model().ok());
    p("F-Number", exif.f_number().ok().map(|x| format!("f/{x}")));
    p(
        "Exposure Time",
        exif.exposure_time().ok().map(|x| format!("{x:?}")),
    );
    p("ISO", exif.iso().ok());
    p("Orientation", exif.orientation().ok().map(|x| format!("{x:?}")));
    p("Date", exif.time_original().ok());
}

pub fn p(label: &str, s: Option<impl Display>) {
    if let Some(s) = s {
        println!("{label}: {s}");
    } else {
        println!("{label}: –");
    }
}
