//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    case_mix_section, common_sequence_section, digit_section, entropy_bits, entropy_section,
    length_section, repetition_section, special_section, SectionOutcome,
};
use crate::types::{ScoreResult, Strength};

/// Scores a password and classifies its strength.
///
/// Sections run in a fixed order so that comments come out the same way
/// for the same password; the order has no effect on the numeric score.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `ScoreResult` with score, strength, diagnostics and entropy estimate.
pub fn evaluate_password(password: &SecretString) -> ScoreResult {
    let pwd = password.expose_secret();

    let sections: [(&str, fn(&str) -> SectionOutcome); 6] = [
        ("length", length_section),
        ("case", case_mix_section),
        ("digits", digit_section),
        ("special", special_section),
        ("repetition", repetition_section),
        ("sequence", common_sequence_section),
    ];

    let mut score = 0i64;
    let mut comments = Vec::new();

    for (_section_name, section_fn) in sections {
        let outcome = section_fn(pwd);
        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, delta = outcome.delta, "section scored");
        score += outcome.delta;
        comments.extend(outcome.comment);
    }

    let entropy = entropy_bits(pwd);
    let outcome = entropy_section(entropy);
    score += outcome.delta;
    comments.extend(outcome.comment);

    ScoreResult {
        score,
        strength: Strength::from_score(score),
        comments,
        entropy_bits: entropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pwd: &str) -> ScoreResult {
        evaluate_password(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_short_repetitive_password() {
        let result = evaluate("aaa1111");

        // digits +1, repetition -1
        assert_eq!(result.score, 0);
        assert_eq!(result.strength, Strength::Weak);
        assert!((result.entropy_bits - 7.0 * 36f64.log2()).abs() < 1e-9);
        assert_eq!(
            result.comments,
            vec![
                "too short",
                "lacks case variation",
                "no special characters",
                "character repetition",
                "low entropy (36.2 bits)",
            ]
        );
    }

    #[test]
    fn test_evaluate_eight_char_repetitive_password() {
        let result = evaluate("aaaa1111");

        // length +1, digits +1, repetition -1
        assert_eq!(result.score, 1);
        assert_eq!(result.strength, Strength::Weak);
        assert_eq!(result.comments.last().unwrap(), "medium entropy (41.4 bits)");
    }

    #[test]
    fn test_evaluate_strong_password_with_common_sequence() {
        let result = evaluate("P@ssw0rd123!");

        assert_eq!(result.score, 5);
        assert_eq!(result.strength, Strength::Strong);
        assert!((result.entropy_bits - 12.0 * 95f64.log2()).abs() < 1e-9);
        assert_eq!(
            result.comments,
            vec![
                "good length",
                "contains common sequence",
                "high entropy (78.8 bits)",
            ]
        );
    }

    #[test]
    fn test_evaluate_medium_password() {
        // length +1, case +1, digit +1, no special, entropy 10*log2(62) ~ 59.5
        let result = evaluate("Tomato7Kiw");
        assert_eq!(result.score, 3);
        assert_eq!(result.strength, Strength::Medium);
    }

    #[test]
    fn test_evaluate_negative_score() {
        // too short, no case mix, no digits, no specials, repetition, sequence
        let result = evaluate("aaabc");
        assert_eq!(result.score, -2);
        assert_eq!(result.strength, Strength::Weak);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        assert_eq!(evaluate("Tr0ub4dor&3"), evaluate("Tr0ub4dor&3"));
    }
}
