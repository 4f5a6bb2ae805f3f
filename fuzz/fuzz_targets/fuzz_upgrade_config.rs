#![no_main]

use libfuzzer_sys::fuzz_target;
use uplift_semver::UpgradeConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = UpgradeConfig::from_json(s)
    {
        // Should not panic
        let _ = config.validate();
        let _ = config.constraint();
        let _ = config.to_json();
    }
});
