#![no_main]

use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use uplift_semver::{Version, compare, is_valid_format, normalize};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");

        assert_eq!(compare(s, s), Ordering::Equal);
        let _ = is_valid_format(s, None);

        if let Some(version) = Version::parse(s) {
            // Canonical text parses back to the same segments
            let reparsed = Version::parse(&version.to_string()).unwrap();
            assert_eq!(reparsed.segments(), version.segments());
            assert_eq!(reparsed.metadata(), version.metadata());
        }
    }
});
