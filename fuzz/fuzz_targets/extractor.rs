#![no_main]

use libfuzzer_sys::fuzz_target;

use relister::extractor::extract;
use relister::transformer::transform;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // Extraction may reject the input but must never panic, and whatever it
    // accepts must transform cleanly.
    if let Ok(record) = extract(&html, "B000000000") {
        let listing = transform(&record);
        assert!(listing.item_name.chars().count() <= 128);
        assert!(record.images.len() <= 5);
    }
});
