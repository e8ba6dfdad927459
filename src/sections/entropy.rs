//! Entropy section - estimates the character-pool entropy of a password.

use super::SectionOutcome;
use crate::types::CharsetClass;

const FALLBACK_POOL: u32 = 10;
const LOW_ENTROPY_BITS: f64 = 40.0;
const HIGH_ENTROPY_BITS: f64 = 60.0;

/// Sum of the pool contributions of every class present in the password.
///
/// Falls back to 10 when no class matches, which only happens for the
/// empty string.
pub fn pool_size(password: &str) -> u32 {
    let pool: u32 = CharsetClass::ALL
        .iter()
        .filter(|class| class.present_in(password))
        .map(|class| class.pool_contribution())
        .sum();
    if pool == 0 { FALLBACK_POOL } else { pool }
}

/// `log2(pool) * length`, length counted in characters.
pub fn entropy_bits(password: &str) -> f64 {
    f64::from(pool_size(password)).log2() * password.chars().count() as f64
}

/// Scores a precomputed entropy value.
pub fn entropy_section(bits: f64) -> SectionOutcome {
    if bits < LOW_ENTROPY_BITS {
        SectionOutcome::note(0, format!("low entropy ({:.1} bits)", bits))
    } else if bits > HIGH_ENTROPY_BITS {
        SectionOutcome::note(1, format!("high entropy ({:.1} bits)", bits))
    } else {
        SectionOutcome::note(0, format!("medium entropy ({:.1} bits)", bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_by_class() {
        assert_eq!(pool_size("abc"), 26);
        assert_eq!(pool_size("aB"), 52);
        assert_eq!(pool_size("a1"), 36);
        assert_eq!(pool_size("aB1!"), 95);
        assert_eq!(pool_size(""), 10);
    }

    #[test]
    fn test_entropy_is_length_times_log2_pool() {
        let bits = entropy_bits("aaa1111");
        assert!((bits - 7.0 * 36f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_grows_with_length() {
        let mut previous = 0.0;
        for len in 1..=20 {
            let bits = entropy_bits(&"a".repeat(len));
            assert!(bits >= previous);
            previous = bits;
        }
    }

    #[test]
    fn test_entropy_section_bands() {
        assert_eq!(entropy_section(36.19).delta, 0);
        assert_eq!(
            entropy_section(36.19).comment.as_deref(),
            Some("low entropy (36.2 bits)")
        );
        assert_eq!(
            entropy_section(40.0).comment.as_deref(),
            Some("medium entropy (40.0 bits)")
        );
        assert_eq!(entropy_section(60.0).delta, 0);
        assert_eq!(entropy_section(78.84), SectionOutcome::note(1, "high entropy (78.8 bits)"));
    }
}
