//! Length section - rewards long passwords, flags short ones.

use super::SectionOutcome;

const MIN_LENGTH: usize = 8;
const GOOD_LENGTH: usize = 12;

/// Scores the password length, counted in characters.
///
/// # Returns
/// - `+0` and "too short" below 8 characters
/// - `+2` and "good length" from 12 characters
/// - `+1` without comment otherwise
pub fn length_section(password: &str) -> SectionOutcome {
    let len = password.chars().count();
    if len < MIN_LENGTH {
        SectionOutcome::note(0, "too short")
    } else if len >= GOOD_LENGTH {
        SectionOutcome::note(2, "good length")
    } else {
        SectionOutcome::pass(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(length_section("Short1!"), SectionOutcome::note(0, "too short"));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678"), SectionOutcome::pass(1));
    }

    #[test]
    fn test_length_section_good_length() {
        assert_eq!(
            length_section("LongEnough123"),
            SectionOutcome::note(2, "good length")
        );
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(length_section("ééééééé").comment.as_deref(), Some("too short"));
    }
}
