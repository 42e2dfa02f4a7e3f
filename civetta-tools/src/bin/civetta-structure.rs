use civetta::Image;
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let image = match civetta::identify(&data) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("{} ({})", image.name(), image.media_type());

    let result = match &image {
        Image::Jpeg(jpeg) => show_jpeg(jpeg),
        Image::Png(png) => show_png(png),
        Image::Webp(webp) => show_webp(webp),
        Image::Heic(heic) => show_heic(heic),
        Image::Crw(crw) => show_crw(crw),
        Image::Cr2(_) | Image::Tif(_) => show_tiff(&image),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn show_jpeg(jpeg: &civetta_jpeg::Jpeg) -> Result<(), civetta::Error> {
    println!("Segments:");
    for segment in jpeg.segments_iter() {
        let segment = segment?;
        println!(
            " - {:?} at {} ({} bytes)",
            segment.marker(),
            segment.pos(),
            segment.data().len()
        );
    }

    Ok(())
}

fn show_png(png: &civetta_png::Png) -> Result<(), civetta::Error> {
    fn show_repeats(n: &mut u32, chunk_type: &civetta_png::ChunkType) {
        if *n > 1 {
            println!(" - {chunk_type:?} ({n}x)");
            *n = 1;
        } else {
            println!(" - {chunk_type:?}");
        }
    }

    println!("Chunks:");
    let chunks = png.chunks()?;
    let mut n_repeats: u32 = 1;
    let mut last_type = None;
    for chunk in chunks {
        match last_type {
            Some(chunk_type) if chunk_type == chunk.chunk_type() => {
                n_repeats = n_repeats.saturating_add(1);
            }
            Some(chunk_type) => {
                show_repeats(&mut n_repeats, &chunk_type);
                last_type = Some(chunk.chunk_type());
            }
            None => last_type = Some(chunk.chunk_type()),
        }
    }
    if let Some(chunk_type) = last_type {
        show_repeats(&mut n_repeats, &chunk_type);
    }

    Ok(())
}

fn show_webp(webp: &civetta_webp::WebP) -> Result<(), civetta::Error> {
    let riff = webp.riff()?;
    println!("Form type: {}", civetta::common::utils::FourCc(riff.form_type()?));
    println!("Chunks:");
    for chunk in riff.sub_chunks()? {
        println!(
            " - {} at {} ({} bytes)",
            chunk.four_cc(),
            chunk.pos(),
            chunk.len()
        );
    }

    Ok(())
}

fn show_heic(heic: &civetta_heic::Heic) -> Result<(), civetta::Error> {
    let bmff = heic.bmff()?;

    println!("Boxes:");
    for object_box in bmff.boxes() {
        println!(
            " {:indent$}- {:?} at {} ({} bytes)",
            "",
            object_box.box_type(),
            object_box.pos(),
            object_box.data().len(),
            indent = object_box.depth().saturating_mul(2),
        );
    }

    println!("Items:");
    for item in bmff.items() {
        let item_type = item
            .item_type
            .map_or_else(|| String::from("–"), |x| x.to_string());
        let location = item
            .location
            .map_or_else(|| String::from("–"), |x| x.to_string());
        println!(" - {}: {item_type} at {location}", item.number);
    }

    Ok(())
}

fn show_crw(crw: &civetta_crw::Crw) -> Result<(), civetta::Error> {
    println!("Heaps:");
    for heap in crw.walk()? {
        let indent = heap.depth().saturating_mul(2);
        println!(
            " {:indent$}Heap at {} ({} bytes)",
            "",
            heap.start(),
            heap.len()
        );
        for record in heap.records() {
            println!(
                " {:indent$}- {:?} ({:#06x}, {:?})",
                "",
                record.record_type(),
                record.raw_type(),
                record.storage()
            );
        }
    }

    if let Ok((make, model)) = crw.make_model() {
        println!("Camera: {make} {model}");
    }

    Ok(())
}

fn show_tiff(image: &Image) -> Result<(), civetta::Error> {
    let exif = image.exif()?;

    println!("Directories:");
    for (i, directory) in exif.raw().directories().iter().enumerate() {
        println!(
            " - {i}: at {} with {} entries",
            directory.offset,
            directory.len()
        );
    }

    Ok(())
}
