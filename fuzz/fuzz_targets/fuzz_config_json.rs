#![no_main]

use libfuzzer_sys::fuzz_target;
use skiff::DeployConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // App config parsing and validation should never panic
        if let Ok(config) = serde_json::from_str::<DeployConfig>(content) {
            let _ = config.validate();
            let _ = config.layout().current();
        }
    }
});
