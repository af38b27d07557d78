#![no_main]

use libfuzzer_sys::fuzz_target;
use skiff::domain::value_objects::ReleaseLabel;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(label) = ReleaseLabel::parse(s) {
            assert_eq!(label.as_str(), s);
        }
    }
});
