use civetta_common::error::ErrorKind;
use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::range::ByteRange;
use civetta_webp::*;

const TIFF: &[u8] = b"MM\0*\0\0\0\x08\0\0\0\0\0";

fn chunk(out: &mut Vec<u8>, four_cc: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(four_cc);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        // Padding
        out.push(0);
    }
}

fn webp(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut payload = b"WEBP".to_vec();
    for (four_cc, data) in chunks {
        chunk(&mut payload, four_cc, data);
    }

    let mut data = Vec::new();
    chunk(&mut data, b"RIFF", &payload);
    data
}

fn exif_payload() -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(TIFF);
    payload
}

#[test]
fn filetype() {
    let data = webp(&[(b"VP8 ", &[0; 10])]);
    assert!(WebP::is_filetype(&data));
    assert!(!WebP::is_filetype(b"RIFF\0\0\0\0WAVE"));
    assert_eq!(WebP::new(b"RIFF").unwrap_err().kind(), ErrorKind::NotRecognized);
}

#[test]
fn exif() {
    let payload = exif_payload();
    let data = webp(&[
        (b"VP8X", &[0; 10]),
        (b"ICCP", b"odd"),
        (b"VP8 ", &[0; 10]),
        (b"EXIF", payload.as_slice()),
    ]);
    let webp = WebP::new(&data).unwrap();

    let four_ccs = webp
        .chunks()
        .unwrap()
        .iter()
        .map(|x| x.four_cc())
        .collect::<Vec<_>>();
    assert_eq!(
        four_ccs,
        [FourCC::VP8X, FourCC::ICCP, FourCC::VP8, FourCC::EXIF]
    );

    // RIFF header (8) + WEBP (4) + VP8X (18) + ICCP (12) + VP8 (18) + EXIF
    // header (8) + "Exif\0\0"
    assert_eq!(
        webp.exif_range(),
        Ok(ByteRange::new(74, TIFF.len() as u32))
    );
    assert_eq!(webp.exif_data().unwrap(), TIFF);
}

#[test]
fn exif_without_identifier() {
    let data = webp(&[(b"VP8L", &[0; 5]), (b"EXIF", TIFF)]);
    let webp = WebP::new(&data).unwrap();
    assert_eq!(webp.exif_data().unwrap(), TIFF);
}

#[test]
fn no_exif() {
    let data = webp(&[(b"VP8L", &[0; 5]), (b"XMP ", b"<x:xmpmeta/>")]);
    let webp = WebP::new(&data).unwrap();
    assert_eq!(webp.exif_range(), Err(Error::NoExifFound));
}

#[test]
fn riff_chunk_count() {
    let mut data = webp(&[(b"VP8L", &[0; 5])]);
    let second = data.clone();
    data.extend_from_slice(&second);

    let err = WebP::new(&data).unwrap().exif_range().unwrap_err();
    assert_eq!(err, Error::RiffChunkCount(2));
    assert_eq!(err.kind(), ErrorKind::StructuralInconsistency);

    // No RIFF chunk at the top level at all
    let mut data = Vec::new();
    chunk(&mut data, b"LIST", b"WEBP");
    assert_eq!(Riff::new(&data).unwrap_err(), Error::RiffChunkCount(0));
}

#[test]
fn truncated() {
    let payload = exif_payload();
    let data = webp(&[(b"VP8 ", &[0; 10]), (b"EXIF", payload.as_slice())]);

    for len in 12..data.len() {
        let webp = WebP::new(&data[..len]).unwrap();
        assert_eq!(webp.exif_range().unwrap_err().kind(), ErrorKind::Truncated);
    }
}

#[test]
fn sub_chunk_exceeds_riff() {
    let mut data = webp(&[(b"VP8 ", &[0; 10])]);
    // Some trailing data behind the RIFF chunk
    chunk(&mut data, b"JUNK", &[0; 32]);
    // VP8 chunk claims more than the RIFF chunk holds
    data[16..20].copy_from_slice(&20_u32.to_le_bytes());

    let webp = WebP::new(&data).unwrap();
    assert_eq!(webp.chunks().unwrap_err().kind(), ErrorKind::Truncated);
}
