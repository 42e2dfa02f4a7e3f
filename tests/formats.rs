mod utils;

use civetta::{ErrorKind, Exif, Format};
use civetta_common::orientation::Orientation;
use std::time::Duration;

#[test]
fn exif_in_all_formats() {
    for (format, data, tiff) in utils::samples() {
        let image = civetta::identify(&data).unwrap();
        assert_eq!(image.format(), format);
        assert_eq!(image.exif_data().unwrap(), tiff, "{format}");

        let exif = image.exif().unwrap();
        assert_eq!(exif.make().unwrap(), utils::MAKE, "{format}");
        assert_eq!(exif.model().unwrap(), "EOS 10D", "{format}");
        assert_eq!(exif.iso().unwrap(), 200, "{format}");
        assert_eq!(exif.orientation().unwrap(), Orientation::Rotate90);
        assert_eq!(exif.exposure_time().unwrap(), Duration::from_millis(8));
    }
}

#[test]
fn wrapped_decodes_like_direct() {
    for (format, data, tiff) in utils::samples() {
        let wrapped = civetta::identify(&data).unwrap().exif().unwrap();
        let direct = Exif::new(&tiff).unwrap();
        assert_eq!(wrapped.debug_dump(), direct.debug_dump(), "{format}");
    }
}

#[test]
fn exif_range_in_file() {
    let tiff = utils::tiff(true, &[]);

    let data = utils::jpeg(&tiff);
    let range = civetta::identify(&data).unwrap().exif_range().unwrap();
    // SOI, APP0, APP1 header, "Exif\0\0"
    assert_eq!(range.offset, 2 + 18 + 4 + 6);
    assert_eq!(range.length as usize, tiff.len());

    let data = utils::png(&tiff);
    let range = civetta::identify(&data).unwrap().exif_range().unwrap();
    assert_eq!(&data[range.range().unwrap()], tiff.as_slice());
}

#[test]
fn names() {
    let expected = [
        (Format::Jpeg, "JPEG", "image/jpeg"),
        (Format::Png, "PNG", "image/png"),
        (Format::Webp, "WebP", "image/webp"),
        (Format::Heic, "HEIC", "image/heic"),
        (Format::Cr2, "CR2", "image/x-canon-cr2"),
        (Format::Crw, "CRW", "image/x-canon-crw"),
        (Format::Tif, "TIFF", "image/tiff"),
    ];

    for (format, name, media_type) in expected {
        assert_eq!(format.name(), name);
        assert_eq!(format.media_type(), media_type);
        assert_eq!(format.to_string(), name);
    }

    for (format, data, _) in utils::samples() {
        let image = civetta::identify(&data).unwrap();
        assert_eq!(image.name(), format.name());
        assert_eq!(image.media_type(), format.media_type());
    }
}

#[test]
fn crw_structure() {
    let data = utils::crw(&utils::tiff(false, &[]));
    let civetta::Image::Crw(crw) = civetta::identify(&data).unwrap() else {
        panic!("Not recognized as CRW");
    };

    assert_eq!(
        crw.make_model().unwrap(),
        (String::from("Canon"), String::from("Canon EOS 10D"))
    );
    assert_eq!(crw.walk().unwrap().len(), 4);
}

#[test]
fn heic_structure() {
    let data = utils::heic(&utils::tiff(true, &[]));
    let civetta::Image::Heic(heic) = civetta::identify(&data).unwrap() else {
        panic!("Not recognized as HEIC");
    };

    let bmff = heic.bmff().unwrap();
    assert_eq!(bmff.items().len(), 1);
    assert_eq!(bmff.boxes().len(), 7);
}

#[test]
fn no_exif() {
    let data = utils::png(&[]);
    // Remove the empty eXIf chunk
    let data = [&data[..8 + 25 + 29], &data[8 + 25 + 29 + 12..]].concat();

    let image = civetta::identify(&data).unwrap();
    assert_eq!(image.format(), Format::Png);
    let err = image.exif().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoExifFound);
}
