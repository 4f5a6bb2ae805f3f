//! Proptest strategies for Uplift types.
//!
//! Versions come in the shapes seen on real artifact repositories: one to
//! four numeric segments, optional release tokens and vendor suffixes.

use proptest::prelude::*;

/// Strategy for generating `major.minor.patch` versions.
pub fn semver_strategy() -> impl Strategy<Value = String> {
    (0u32..100, 0u32..100, 0u32..1000)
        .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
}

/// Strategy for generating plain versions with one to four segments.
pub fn segments_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..50, 1..=4)
}

/// Strategy for generating plain numeric versions of varying precision.
pub fn plain_version_strategy() -> impl Strategy<Value = String> {
    segments_strategy().prop_map(|segments| join(&segments))
}

/// Strategy for generating versions with a release token (`.RELEASE`, `.Final`).
pub fn release_version_strategy() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("RELEASE"),
        Just("FINAL"),
        Just("Final"),
        Just("release"),
    ];
    (plain_version_strategy(), token).prop_map(|(v, token)| format!("{v}.{token}"))
}

/// Strategy for generating vendor suffixes such as `-jre`.
pub fn vendor_suffix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-jre".to_string()),
        Just("-android".to_string()),
        (8u32..22).prop_map(|n| format!("-jdk{n}")),
        "[a-z]{2,8}".prop_map(|s| format!("-{s}")),
    ]
}

/// Strategy for generating pre-release suffixes.
pub fn pre_release_suffix_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-SNAPSHOT".to_string()),
        Just("-alpha".to_string()),
        Just("-beta".to_string()),
        (1u32..10).prop_map(|n| format!("-rc{n}")),
        (1u32..10).prop_map(|n| format!("-M{n}")),
        (1u32..20).prop_map(|n| format!("-beta.{n}")),
    ]
}

/// Strategy for generating any well-formed version string.
pub fn version_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => plain_version_strategy(),
        2 => release_version_strategy(),
        1 => (plain_version_strategy(), vendor_suffix_strategy()).prop_map(|(v, s)| format!("{v}{s}")),
        1 => (plain_version_strategy(), pre_release_suffix_strategy()).prop_map(|(v, s)| format!("{v}{s}")),
    ]
}

/// Strategy for generating strings that should never pass validation.
pub fn malformed_version_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("1..2".to_string()),
        Just(".1".to_string()),
        (0u32..10).prop_map(|n| format!("{n}.a")),
        (0u32..10).prop_map(|n| format!("{n}.1.")),
        "[a-z]{1,6}",
    ]
}

/// Strategy for generating caret constraints (`^x.y.z`).
pub fn caret_constraint_strategy() -> impl Strategy<Value = String> {
    semver_strategy().prop_map(|v| format!("^{v}"))
}

/// Strategy for generating tilde constraints (`~x.y.z`).
pub fn tilde_constraint_strategy() -> impl Strategy<Value = String> {
    semver_strategy().prop_map(|v| format!("~{v}"))
}

/// Strategy for generating exact version constraints.
pub fn exact_constraint_strategy() -> impl Strategy<Value = String> {
    semver_strategy()
}

/// Strategy for generating hyphen constraints (`a - b`).
pub fn hyphen_constraint_strategy() -> impl Strategy<Value = String> {
    (semver_strategy(), semver_strategy()).prop_map(|(lower, upper)| format!("{lower} - {upper}"))
}

/// Strategy for generating wildcard constraints.
pub fn wildcard_constraint_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u32..20).prop_map(|major| format!("{major}.x")),
        (0u32..20, 0u32..50).prop_map(|(major, minor)| format!("{major}.{minor}.*")),
    ]
}

/// Strategy for generating bracketed set constraints.
pub fn set_constraint_strategy() -> impl Strategy<Value = String> {
    (semver_strategy(), any::<bool>()).prop_map(|(lower, inclusive)| {
        let open = if inclusive { '[' } else { '(' };
        format!("{open}{lower},)")
    })
}

/// Strategy for generating any constraint that parses.
pub fn single_constraint_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => caret_constraint_strategy(),
        2 => tilde_constraint_strategy(),
        2 => exact_constraint_strategy(),
        1 => hyphen_constraint_strategy(),
        1 => wildcard_constraint_strategy(),
        1 => set_constraint_strategy(),
        1 => Just("latest.release".to_string()),
    ]
}

fn join(segments: &[u64]) -> String {
    segments
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
