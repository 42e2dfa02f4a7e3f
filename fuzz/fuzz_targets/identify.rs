#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(image) = civetta::identify(data) else {
        return;
    };

    let _ = image.exif_range();
    if let Ok(exif) = image.exif() {
        let _ = exif.debug_dump();
        let _ = exif.make_model();
        let _ = exif.time_original();
    }
});
