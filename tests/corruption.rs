mod utils;

/// Decodes as much as possible and ignores all errors
fn decode(data: &[u8]) {
    let Ok(image) = civetta::identify(data) else {
        return;
    };

    let _ = image.exif_range();
    if let Ok(exif) = image.exif() {
        let _ = exif.debug_dump();
        let _ = exif.make_model();
        let _ = exif.iso();
        let _ = exif.exposure_time();
        let _ = exif.orientation();
        let _ = exif.gps_info();
        let _ = exif.time_original();
    }
}

#[test]
fn truncated() {
    for (_, data, _) in utils::samples() {
        // CR2 is only recognized with at least 10 KiB
        for len in 0..data.len().min(1024) {
            decode(&data[..len]);
        }
    }
}

#[test]
fn modified_bytes() {
    for (_, data, _) in utils::samples() {
        for i in 0..data.len().min(512) {
            for byte in [0x00, 0x01, 0x7F, 0x80, 0xFF] {
                let mut data = data.clone();
                data[i] = byte;
                decode(&data);
            }
        }
    }
}

#[test]
fn patterns() {
    let mut seed = 0x2545_F491_u32;
    for len in [0, 1, 8, 16, 64, 256, 1024] {
        for _ in 0..64 {
            let mut data = (0..len)
                .map(|_| {
                    // xorshift
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    seed as u8
                })
                .collect::<Vec<_>>();

            // Valid signatures with random content
            for signature in [
                &b"\xFF\xD8\xFF"[..],
                b"\x89PNG\r\n\x1a\n",
                b"\0\0\0\x18ftypheic",
                b"II\x1a\0\0\0HEAPCCDR",
                b"MM\0*",
                b"II*\0",
            ] {
                if data.len() >= signature.len() {
                    data[..signature.len()].copy_from_slice(signature);
                }
                decode(&data);
            }
        }
    }
}
