//! Pattern sections - detects repeated characters and common sequences.

use super::SectionOutcome;

const COMMON_SEQUENCES: [&str; 5] = ["123", "abc", "qwerty", "password", "admin"];

/// Penalizes any run of three identical consecutive characters.
pub fn repetition_section(password: &str) -> SectionOutcome {
    let chars: Vec<char> = password.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return SectionOutcome::note(-1, "character repetition");
    }
    SectionOutcome::default()
}

/// Penalizes well-known sequences, matched case-insensitively.
pub fn common_sequence_section(password: &str) -> SectionOutcome {
    let lowered = password.to_lowercase();
    if COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        return SectionOutcome::note(-1, "contains common sequence");
    }
    SectionOutcome::default()
}
