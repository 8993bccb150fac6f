//! Shared helpers for in-crate tests.

/// Reads a `u32` from the environment, ignoring unset or malformed values.
pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

/// Case count for property tests.
///
/// `PROPTEST_CASES` wins when set. CI runs the full `default`; local runs are
/// capped so the opt-in suite stays quick.
pub fn proptest_cases(default: u32) -> u32 {
    if let Some(value) = env_u32("PROPTEST_CASES") {
        return value.max(1);
    }
    if is_ci() {
        return default.max(1);
    }
    default.clamp(1, 16)
}
