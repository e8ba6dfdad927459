//! Defaults and environment-driven configuration.

/// Cap on generated lines when none is given.
pub const DEFAULT_MAX_OUTPUT_COUNT: u64 = 1_000_000;

/// Generated candidates shorter than this (in characters) are dropped.
pub const DEFAULT_MIN_OUTPUT_LENGTH: usize = 6;

/// Special characters affixed when nothing else is configured.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%";

/// Environment variable overriding [`DEFAULT_SPECIAL_CHARS`].
pub const SPECIALS_ENV_VAR: &str = "PWD_WORDLIST_SPECIALS";

/// Returns the default special characters.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_SPECIALS` (if non-empty)
/// 2. `!@#$%`
pub fn default_special_chars() -> Vec<char> {
    std::env::var(SPECIALS_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SPECIAL_CHARS.to_string())
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
