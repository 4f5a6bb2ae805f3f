#![no_main]

use libfuzzer_sys::fuzz_target;
use uplift_semver::{Constraint, Error, RangeContext};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let context = RangeContext::new().with_current_version("1.2.3");
        match Constraint::parse(s, &context) {
            Ok(constraint) => {
                let test_versions = [
                    "0.0.0",
                    "0.0.1",
                    "0.1.0",
                    "1",
                    "1.0",
                    "1.2.3",
                    "1.2.3.RELEASE",
                    "2.0.0",
                    "29.0-jre",
                    "99.99.99.99",
                    "",
                    "1.x",
                ];

                // Should not panic
                for version in &test_versions {
                    let _ = constraint.is_valid(version);
                }
                let _ = constraint.compare("1.2", "1.2.0");

                // Display round-trips through the dispatcher
                let reparsed = Constraint::parse(&constraint.to_string(), &context).unwrap();
                assert_eq!(reparsed.kind(), constraint.kind());
            }
            Err(Error::UnrecognizedSyntax { .. } | Error::MalformedConstraint { .. }) => {}
            Err(other) => panic!("unexpected error for {s:?}: {other}"),
        }
    }
});
