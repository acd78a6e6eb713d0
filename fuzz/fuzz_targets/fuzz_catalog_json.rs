#![no_main]

use libfuzzer_sys::fuzz_target;
use melodyx_core::melody::MelodyCatalog;

// Content-pack parsing must reject malformed input with an error, never a
// panic or an out-of-invariant catalog.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(catalog) = MelodyCatalog::from_json(text) {
            assert!(!catalog.is_empty());
        }
    }
});
