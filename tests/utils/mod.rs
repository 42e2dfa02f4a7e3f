#![allow(dead_code)]

//! Synthetic images that all carry the same Exif data

pub const MAKE: &str = "Canon";
pub const MODEL: &str = "Canon EOS 10D";

/// TIFF blob with make, model, orientation and an Exif directory
///
/// `pad` bytes are inserted between header and first directory.
pub fn tiff(big_endian: bool, pad: &[u8]) -> Vec<u8> {
    let u16b = |v: u16| {
        if big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    };
    let u32b = |v: u32| {
        if big_endian {
            v.to_be_bytes()
        } else {
            v.to_le_bytes()
        }
    };
    let entry = |out: &mut Vec<u8>, tag: u16, data_type: u16, count: u32, value: [u8; 4]| {
        out.extend_from_slice(&u16b(tag));
        out.extend_from_slice(&u16b(data_type));
        out.extend_from_slice(&u32b(count));
        out.extend_from_slice(&value);
    };
    let short = |v: u16| {
        let [a, b] = u16b(v);
        [a, b, 0, 0]
    };

    let ifd0 = 8 + pad.len() as u32;
    let make = ifd0 + 2 + 4 * 12 + 4;
    let model = make + MAKE.len() as u32 + 1;
    let exif = model + MODEL.len() as u32 + 1;
    let exposure = exif + 2 + 2 * 12 + 4;

    let mut out = Vec::new();
    out.extend_from_slice(if big_endian { b"MM" } else { b"II" });
    out.extend_from_slice(&u16b(42));
    out.extend_from_slice(&u32b(ifd0));
    out.extend_from_slice(pad);

    out.extend_from_slice(&u16b(4));
    entry(&mut out, 0x010F, 2, MAKE.len() as u32 + 1, u32b(make));
    entry(&mut out, 0x0110, 2, MODEL.len() as u32 + 1, u32b(model));
    entry(&mut out, 0x0112, 3, 1, short(6));
    entry(&mut out, 0x8769, 4, 1, u32b(exif));
    out.extend_from_slice(&u32b(0));

    out.extend_from_slice(MAKE.as_bytes());
    out.push(0);
    out.extend_from_slice(MODEL.as_bytes());
    out.push(0);

    out.extend_from_slice(&u16b(2));
    entry(&mut out, 0x829A, 5, 1, u32b(exposure));
    entry(&mut out, 0x8827, 3, 1, short(200));
    out.extend_from_slice(&u32b(0));

    out.extend_from_slice(&u32b(8));
    out.extend_from_slice(&u32b(1000));

    out
}

pub fn jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];

    // JFIF
    out.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    out.extend_from_slice(b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0");

    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&(tiff.len() as u16 + 8).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);

    // Start of scan followed by entropy-coded data
    out.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02]);
    out.extend_from_slice(&[0x12, 0x34, 0xFF, 0x00, 0x56]);
    out.extend_from_slice(&[0xFF, 0xD9]);

    out
}

pub fn png(tiff: &[u8]) -> Vec<u8> {
    fn chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(chunk_type);
        out.extend_from_slice(data);
        // CRC is not checked
        out.extend_from_slice(&[0; 4]);
    }

    let mut out = b"\x89PNG\r\n\x1a\n".to_vec();
    chunk(&mut out, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]);
    chunk(&mut out, b"tEXt", b"Comment\0synthetic");
    chunk(&mut out, b"eXIf", tiff);
    chunk(&mut out, b"IDAT", &[0; 12]);
    chunk(&mut out, b"IEND", &[]);
    out
}

pub fn webp(tiff: &[u8]) -> Vec<u8> {
    fn chunk(out: &mut Vec<u8>, four_cc: &[u8; 4], data: &[u8]) {
        out.extend_from_slice(four_cc);
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(data);
        if data.len() & 1 == 1 {
            out.push(0);
        }
    }

    let mut exif = b"Exif\0\0".to_vec();
    exif.extend_from_slice(tiff);

    let mut payload = b"WEBP".to_vec();
    chunk(&mut payload, b"VP8X", &[0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    chunk(&mut payload, b"VP8 ", &[0; 15]);
    chunk(&mut payload, b"EXIF", &exif);

    let mut out = Vec::new();
    chunk(&mut out, b"RIFF", &payload);
    out
}

pub fn heic(tiff: &[u8]) -> Vec<u8> {
    fn boxed(box_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = (payload.len() as u32 + 8).to_be_bytes().to_vec();
        out.extend_from_slice(box_type);
        out.extend_from_slice(payload);
        out
    }

    fn full(box_type: &[u8; 4], version: u8, payload: &[u8]) -> Vec<u8> {
        let mut data = vec![version, 0, 0, 0];
        data.extend_from_slice(payload);
        boxed(box_type, &data)
    }

    let mut item = vec![0, 0, 0, 6];
    item.extend_from_slice(b"Exif\0\0");
    item.extend_from_slice(tiff);

    let meta = |offset: u32| {
        let mut infe = vec![0, 1, 0, 0];
        infe.extend_from_slice(b"Exif\0");
        let mut iinf = vec![0, 1];
        iinf.extend(full(b"infe", 2, &infe));

        let mut iloc = vec![0x44, 0x00, 0, 1];
        iloc.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 1]);
        iloc.extend_from_slice(&offset.to_be_bytes());
        iloc.extend_from_slice(&(item.len() as u32).to_be_bytes());

        let mut hdlr = vec![0; 4];
        hdlr.extend_from_slice(b"pict");
        hdlr.extend_from_slice(&[0; 13]);

        let mut payload = full(b"hdlr", 0, &hdlr);
        payload.extend(full(b"iinf", 0, &iinf));
        payload.extend(full(b"iloc", 1, &iloc));
        full(b"meta", 0, &payload)
    };

    let ftyp = boxed(b"ftyp", b"heic\0\0\0\0mif1heic");
    let offset = (ftyp.len() + meta(0).len() + 8) as u32;

    let mut out = ftyp;
    out.extend(meta(offset));
    out.extend(boxed(b"mdat", &item));
    out
}

pub fn crw(tiff: &[u8]) -> Vec<u8> {
    /// Heap with values stored in the heap
    fn heap(records: &[(u16, Vec<u8>)]) -> Vec<u8> {
        let mut data = Vec::new();
        let mut table = (records.len() as u16).to_le_bytes().to_vec();
        for (record_type, value) in records {
            table.extend_from_slice(&record_type.to_le_bytes());
            table.extend_from_slice(&(value.len() as u32).to_le_bytes());
            table.extend_from_slice(&(data.len() as u32).to_le_bytes());
            data.extend_from_slice(value);
        }
        let table_offset = data.len() as u32;
        data.extend(table);
        data.extend_from_slice(&table_offset.to_le_bytes());
        data
    }

    let exif_information = heap(&[(0x1810, vec![0; 8]), (0x2008, tiff.to_vec())]);
    let camera = heap(&[(0x080A, b"Canon\0Canon EOS 10D\0".to_vec())]);
    let image_properties = heap(&[(0x2807, camera), (0x300B, exif_information)]);
    let root = heap(&[(0x2005, vec![0x55; 32]), (0x300A, image_properties)]);

    let mut out = b"II".to_vec();
    out.extend_from_slice(&26_u32.to_le_bytes());
    out.extend_from_slice(b"HEAPCCDR");
    out.extend_from_slice(&[2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    out.extend(root);
    out
}

/// Little endian TIFF with the first directory at 16, padded to 10 KiB
pub fn cr2() -> Vec<u8> {
    let mut out = tiff(false, b"CR\x02\0\0\0\0\0");
    out.resize(10 * 1024, 0);
    out
}

/// All supported formats with the expected format and the TIFF blob inside
pub fn samples() -> Vec<(civetta::Format, Vec<u8>, Vec<u8>)> {
    use civetta::Format;

    let be = tiff(true, &[]);
    let le = tiff(false, &[]);
    let cr2 = cr2();

    vec![
        (Format::Jpeg, jpeg(&be), be.clone()),
        (Format::Png, png(&le), le.clone()),
        (Format::Webp, webp(&le), le.clone()),
        (Format::Heic, heic(&be), be.clone()),
        (Format::Cr2, cr2.clone(), cr2),
        (Format::Crw, crw(&le), le.clone()),
        (Format::Tif, be.clone(), be),
    ]
}
