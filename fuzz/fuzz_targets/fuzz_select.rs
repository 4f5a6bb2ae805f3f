#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use uplift_semver::{parse, select_best};

#[derive(Arbitrary, Debug)]
struct Input {
    constraint: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: Input| {
    let Ok(constraint) = parse(&input.constraint, Some("1.0.0")) else {
        return;
    };

    if let Some(best) = select_best(&constraint, &input.candidates) {
        assert!(constraint.is_valid(best));
        for candidate in input.candidates.iter().filter(|c| constraint.is_valid(c)) {
            assert_ne!(constraint.compare(candidate, best), Ordering::Greater);
        }
    }
});
