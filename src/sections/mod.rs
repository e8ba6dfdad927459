//! Password scoring sections
//!
//! Each section checks one aspect of a password and reports a score delta
//! plus an optional diagnostic comment.

mod entropy;
mod length;
mod pattern;
mod variety;

pub use entropy::{entropy_bits, entropy_section, pool_size};
pub use length::length_section;
pub use pattern::{common_sequence_section, repetition_section};
pub use variety::{case_mix_section, digit_section, special_section};

/// Result of a single section.
/// - `delta` - amount added to (or subtracted from) the running score
/// - `comment` - diagnostic appended to the result, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub delta: i64,
    pub comment: Option<String>,
}

impl SectionOutcome {
    pub fn pass(delta: i64) -> Self {
        Self { delta, comment: None }
    }

    pub fn note(delta: i64, comment: impl Into<String>) -> Self {
        Self {
            delta,
            comment: Some(comment.into()),
        }
    }
}
