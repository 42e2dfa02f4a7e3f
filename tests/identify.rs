mod utils;

use civetta::{Error, ErrorKind, Format, Image, Limits};

#[test]
fn not_recognized() {
    assert_eq!(civetta::identify(&[]).unwrap_err(), Error::NotRecognized);
    assert_eq!(
        civetta::identify(b"GIF89a\x01\0\x01\0\0\0\0\0\0\0")
            .unwrap_err()
            .kind(),
        ErrorKind::NotRecognized
    );
    // Too short for JPEG
    assert!(civetta::identify(&[0xFF, 0xD8, 0xFF, 0xE0]).is_err());
    // WebP magic with a different form type
    assert!(civetta::identify(b"RIFF\x04\0\0\0WAVE").is_err());
}

#[test]
fn cr2_needs_size() {
    let cr2 = utils::cr2();
    assert_eq!(civetta::identify(&cr2).unwrap().format(), Format::Cr2);

    // Small files with the CR2 signature are plain TIFF
    let small = &cr2[..1024];
    assert_eq!(civetta::identify(small).unwrap().format(), Format::Tif);
}

#[test]
fn tiff_byte_orders() {
    for big_endian in [false, true] {
        let tiff = utils::tiff(big_endian, &[]);
        let image = civetta::identify(&tiff).unwrap();
        assert_eq!(image.format(), Format::Tif);
        assert_eq!(image.exif_range().unwrap().length as usize, tiff.len());
    }
}

#[test]
fn image_variants() {
    for (format, data, _) in utils::samples() {
        let image = civetta::identify(&data).unwrap();
        let matches = match image {
            Image::Jpeg(_) => format == Format::Jpeg,
            Image::Png(_) => format == Format::Png,
            Image::Webp(_) => format == Format::Webp,
            Image::Heic(_) => format == Format::Heic,
            Image::Cr2(_) => format == Format::Cr2,
            Image::Crw(_) => format == Format::Crw,
            Image::Tif(_) => format == Format::Tif,
        };
        assert!(matches, "{format}");
        assert_eq!(image.data(), data.as_slice());
    }
}

#[test]
fn limits_passed_on() {
    let limits = Limits {
        max_structures: 2,
        ..Limits::default()
    };

    let data = utils::heic(&utils::tiff(true, &[]));
    let image = Image::with_limits(&data, limits).unwrap();
    assert_eq!(image.limits(), limits);
    assert_eq!(
        image.exif_range().unwrap_err().kind(),
        ErrorKind::StructuralInconsistency
    );

    let limits = Limits {
        max_directories: 0,
        ..Limits::default()
    };
    let data = utils::tiff(false, &[]);
    let image = Image::with_limits(&data, limits).unwrap();
    assert!(image.exif_range().is_ok());
    assert_eq!(
        image.exif().unwrap_err().kind(),
        ErrorKind::StructuralInconsistency
    );
}
