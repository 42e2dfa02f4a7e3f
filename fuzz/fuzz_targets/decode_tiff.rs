#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(exif) = civetta_exif::Exif::new(data) {
        let _ = exif.debug_dump();
        let _ = exif.gps_info().and_then(|x| x.date());
        let _ = exif.interoperability();
    }
});
