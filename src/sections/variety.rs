//! Character variety sections - case mixing, digits, special characters.

use super::SectionOutcome;
use crate::types::CharsetClass;

pub fn case_mix_section(password: &str) -> SectionOutcome {
    if CharsetClass::Lower.present_in(password) && CharsetClass::Upper.present_in(password) {
        SectionOutcome::pass(1)
    } else {
        SectionOutcome::note(0, "lacks case variation")
    }
}

pub fn digit_section(password: &str) -> SectionOutcome {
    if CharsetClass::Digit.present_in(password) {
        SectionOutcome::pass(1)
    } else {
        SectionOutcome::note(0, "no digits")
    }
}

/// Any character outside `[A-Za-z0-9]` is special.
pub fn special_section(password: &str) -> SectionOutcome {
    if CharsetClass::Special.present_in(password) {
        SectionOutcome::pass(1)
    } else {
        SectionOutcome::note(0, "no special characters")
    }
}
