use civetta_common::error::ErrorKind;
use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::range::ByteRange;
use civetta_common::utils::FourCc;
use civetta_heic::*;

const TIFF: &[u8] = b"MM\0*\0\0\0\x08\0\0\0\0\0";

fn boxed(box_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(box_type);
    out.extend_from_slice(payload);
    out
}

fn full(box_type: &[u8; 4], version: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![version, 0, 0, 0];
    data.extend_from_slice(payload);
    boxed(box_type, &data)
}

fn infe(number: u16, item_type: &[u8; 4]) -> Vec<u8> {
    let mut payload = number.to_be_bytes().to_vec();
    payload.extend_from_slice(&[0, 0]);
    payload.extend_from_slice(item_type);
    payload.push(0);
    full(b"infe", 2, &payload)
}

fn iinf(entries: &[(u16, &[u8; 4])]) -> Vec<u8> {
    let mut payload = (entries.len() as u16).to_be_bytes().to_vec();
    for (number, item_type) in entries {
        payload.extend(infe(*number, item_type));
    }
    full(b"iinf", 0, &payload)
}

fn iloc(version: u8, locations: &[(u16, u32, u32)]) -> Vec<u8> {
    // Offset and length with 4 bytes, no base offset and index
    let mut payload = vec![0x44, 0x00];
    payload.extend_from_slice(&(locations.len() as u16).to_be_bytes());
    for (number, offset, length) in locations {
        payload.extend_from_slice(&number.to_be_bytes());
        // Construction method and data reference
        payload.extend_from_slice(&[0, 0, 0, 0]);
        // One extent
        payload.extend_from_slice(&[0, 1]);
        payload.extend_from_slice(&offset.to_be_bytes());
        payload.extend_from_slice(&length.to_be_bytes());
    }
    full(b"iloc", version, &payload)
}

fn ftyp() -> Vec<u8> {
    boxed(b"ftyp", b"heic\0\0\0\0mif1heic")
}

fn exif_item() -> Vec<u8> {
    let mut item = vec![0, 0, 0, 6];
    item.extend_from_slice(b"Exif\0\0");
    item.extend_from_slice(TIFF);
    item
}

/// File with a single Exif item stored in `mdat`
///
/// Returns the data and the offset of the item.
fn heic_with(extra: &[u8], locations: impl Fn(u32) -> Vec<u8>) -> (Vec<u8>, u32) {
    let item = exif_item();

    let meta = |offset| {
        let mut payload = iinf(&[(1, b"Exif")]);
        payload.extend(locations(offset));
        full(b"meta", 0, &payload)
    };

    let offset = (ftyp().len() + extra.len() + meta(0).len() + 8) as u32;

    let mut data = ftyp();
    data.extend_from_slice(extra);
    data.extend(meta(offset));
    data.extend(boxed(b"mdat", &item));

    (data, offset)
}

fn heic() -> (Vec<u8>, u32) {
    let len = exif_item().len() as u32;
    heic_with(&[], |offset| iloc(1, &[(1, offset, len)]))
}

#[test]
fn filetype() {
    let (data, _) = heic();
    assert!(Heic::is_filetype(&data));
    assert!(!Heic::is_filetype(b"\0\0\0\x18ftypavif"));
    assert!(!Heic::is_filetype(b"\0\0\0\x18ftyp"));
    assert_eq!(
        Heic::new(b"\0\0\0\x18ftypmp42").unwrap_err().kind(),
        ErrorKind::NotRecognized
    );
}

#[test]
fn exif() {
    let (mut data, offset) = heic();
    let heic = Heic::new(&data).unwrap();

    // The range would reach 10 bytes behind the item and is cut at the end
    assert_eq!(
        heic.exif_range(),
        Ok(ByteRange::new(offset + 10, TIFF.len() as u32))
    );
    assert_eq!(heic.exif_data().unwrap(), TIFF);

    // With enough data behind the item, the range has the item length
    data.extend_from_slice(&[0; 32]);
    let heic = Heic::new(&data).unwrap();
    assert_eq!(
        heic.exif_range(),
        Ok(ByteRange::new(offset + 10, exif_item().len() as u32))
    );
}

#[test]
fn structure() {
    let (data, offset) = heic();
    let bmff = Heic::new(&data).unwrap().bmff().unwrap();

    let boxes = bmff
        .boxes()
        .iter()
        .map(|x| (x.box_type(), x.depth()))
        .collect::<Vec<_>>();
    assert_eq!(
        boxes,
        [
            (BoxType::File, 0),
            (BoxType::Meta, 0),
            (BoxType::ItemInfo, 1),
            (BoxType::ItemInfoEntry, 2),
            (BoxType::ItemLocation, 1),
            (BoxType::MediaData, 0),
        ]
    );

    assert_eq!(
        bmff.items(),
        [Item {
            number: 1,
            item_type: Some(FourCc(*b"Exif")),
            location: Some(ByteRange::new(offset, exif_item().len() as u32)),
        }]
    );

    let mdat = bmff.boxes_type(BoxType::MediaData).next().unwrap();
    assert_eq!(mdat.data_pos(), offset as usize);
    assert_eq!(mdat.end(), data.len());
    assert_eq!(format!("{:?}", BoxType::from(0x6876_6331)), "hvc1");
}

#[test]
fn item_count_mismatch() {
    let len = exif_item().len() as u32;
    let (data, _) = heic_with(&[], |offset| {
        iloc(1, &[(1, offset, len), (2, offset, len)])
    });

    let err = Heic::new(&data).unwrap().exif_range().unwrap_err();
    assert_eq!(err, Error::ItemCountMismatch(1, 2));
    assert_eq!(err.kind(), ErrorKind::StructuralInconsistency);
}

#[test]
fn invalid_item_number() {
    let len = exif_item().len() as u32;
    let (data, _) = heic_with(&[], |offset| iloc(1, &[(5, offset, len)]));

    let heic = Heic::new(&data).unwrap();
    assert_eq!(heic.bmff().unwrap().items()[0].location, None);
    assert_eq!(heic.exif_range(), Err(Error::NoExifFound));
}

#[test]
fn unsupported_iloc_version() {
    let len = exif_item().len() as u32;
    let (data, _) = heic_with(&[], |offset| iloc(0, &[(1, offset, len)]));

    assert_eq!(
        Heic::new(&data).unwrap().exif_range(),
        Err(Error::NoExifFound)
    );
}

#[test]
fn large_size() {
    // 'free' box using the 64 bit size field
    let mut free = 1_u32.to_be_bytes().to_vec();
    free.extend_from_slice(b"free");
    free.extend_from_slice(&20_u64.to_be_bytes());
    free.extend_from_slice(&[0; 4]);

    let len = exif_item().len() as u32;
    let (data, offset) = heic_with(&free, |offset| iloc(1, &[(1, offset, len)]));

    let heic = Heic::new(&data).unwrap();
    let bmff = heic.bmff().unwrap();
    let free = bmff.boxes_type(BoxType::Free).next().unwrap();
    assert_eq!(free.data_pos(), 24 + 16);
    assert_eq!(free.data().len(), 4);
    assert_eq!(heic.exif_data().unwrap(), TIFF);
    assert_eq!(heic.exif_range().unwrap().offset, offset + 10);
}

#[test]
fn size_to_end() {
    let (mut data, _) = heic();
    let mdat = data.len() - exif_item().len() - 8;
    data[mdat..mdat + 4].copy_from_slice(&[0; 4]);
    data.extend_from_slice(&[0; 7]);

    let bmff = Bmff::parse(&data).unwrap();
    let mdat = bmff.boxes_type(BoxType::MediaData).next().unwrap();
    assert_eq!(mdat.end(), data.len());
    assert_eq!(mdat.data().len(), exif_item().len() + 7);
}

#[test]
fn invalid_box_size() {
    let (mut data, _) = heic();
    // Size of the meta box smaller than its header
    data[24..28].copy_from_slice(&4_u32.to_be_bytes());

    let err = Heic::new(&data).unwrap().exif_range().unwrap_err();
    assert!(matches!(err, Error::InvalidBoxSize { size: 4, .. }));
    assert_eq!(err.kind(), ErrorKind::StructuralInconsistency);
}

#[test]
fn truncated() {
    let (data, offset) = heic();

    for len in 12..data.len() {
        let heic = Heic::new(&data[..len]).unwrap();
        let kind = heic.exif_range().unwrap_err().kind();
        assert!(
            matches!(kind, ErrorKind::Truncated | ErrorKind::NoExifFound),
            "{len}: {kind:?}"
        );
    }

    // Cut inside of the Exif item
    let heic = Heic::new(&data[..offset as usize + 12]).unwrap();
    assert_eq!(heic.exif_range().unwrap_err().kind(), ErrorKind::Truncated);
}

#[test]
fn item_outside_of_file() {
    let (data, _) = heic_with(&[], |offset| iloc(1, &[(1, offset, 0xFFFF)]));

    let err = Heic::new(&data).unwrap().exif_range().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated);
}

#[test]
fn box_limit() {
    let (data, _) = heic();
    let limits = Limits {
        max_structures: 3,
        ..Limits::default()
    };

    let heic = Heic::with_limits(&data, limits).unwrap();
    assert_eq!(heic.exif_range(), Err(Error::TooManyBoxes(3)));
}

/// `iloc` without field sizes where every item claims `extent_count` extents
fn iloc_empty_extents(items: u16, extent_count: u16) -> Vec<u8> {
    let mut payload = vec![0x00, 0x00];
    payload.extend_from_slice(&items.to_be_bytes());
    for number in 1..=items {
        payload.extend_from_slice(&number.to_be_bytes());
        payload.extend_from_slice(&[0, 0, 0, 0]);
        payload.extend_from_slice(&extent_count.to_be_bytes());
    }
    full(b"iloc", 1, &payload)
}

#[test]
fn extent_limit() {
    // Extents without field sizes occupy no bytes
    let mut meta = iloc_empty_extents(2000, 0xFFFF);
    meta.splice(0..0, full(b"hdlr", 0, &[0; 21]));
    let mut data = ftyp();
    data.extend(full(b"meta", 0, &meta));

    let err = Heic::new(&data).unwrap().exif_range().unwrap_err();
    assert_eq!(err, Error::TooManyExtents(Limits::default().max_structures));
    assert_eq!(err.kind(), ErrorKind::StructuralInconsistency);

    let limits = Limits {
        max_structures: 10,
        ..Limits::default()
    };
    let (data, _) = heic_with(&[], |_| iloc_empty_extents(1, 11));
    let heic = Heic::with_limits(&data, limits).unwrap();
    assert_eq!(heic.exif_range(), Err(Error::TooManyExtents(10)));

    // Within the limit, the first extent is used
    let (data, _) = heic_with(&[], |_| iloc_empty_extents(1, 10));
    let heic = Heic::with_limits(&data, limits).unwrap();
    assert_eq!(heic.exif_range(), Ok(ByteRange::new(10, 0)));
}
