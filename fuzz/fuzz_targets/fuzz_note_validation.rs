#![no_main]

use libfuzzer_sys::fuzz_target;
use melodyx_core::validation::validate_melody_notes;

// Validation must be total: arbitrary symbol lists may produce errors and
// warnings but never a panic, and is_valid must track errors exactly.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let symbols: Vec<&str> = text.split(',').collect();
        let result = validate_melody_notes(&symbols, 3, 32);
        assert_eq!(result.is_valid, result.errors.is_empty());
    }
});
