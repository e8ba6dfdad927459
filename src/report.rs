//! Plain-text analysis report, shared by console and file output.

use std::fmt;
use std::path::Path;

use secrecy::ExposeSecret;

use crate::aggregator::AggregateStats;
use crate::error::{Result, WordlistError};

const RULE_WIDTH: usize = 80;
const DEFAULT_ISSUE_LIMIT: usize = 5;

/// Renders [`AggregateStats`] through `Display`.
pub struct Report<'a> {
    stats: &'a AggregateStats,
    issue_limit: usize,
}

impl<'a> Report<'a> {
    pub fn new(stats: &'a AggregateStats) -> Self {
        Self {
            stats,
            issue_limit: DEFAULT_ISSUE_LIMIT,
        }
    }

    /// Number of most frequent issues listed (5 by default).
    pub fn with_issue_limit(mut self, limit: usize) -> Self {
        self.issue_limit = limit;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{:^width$}", "WORDLIST ANALYSIS REPORT", width = RULE_WIDTH)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Total passwords analyzed: {}", stats.total)?;
        writeln!(f, "Analysis time: {:.2} seconds", stats.elapsed.as_secs_f64())?;
        writeln!(f, "{light}")?;

        writeln!(f, "STRENGTH DISTRIBUTION:")?;
        writeln!(f, "  - Weak   : {} ({:.1}%)", stats.weak, stats.weak_percent())?;
        writeln!(f, "  - Medium : {} ({:.1}%)", stats.medium, stats.medium_percent())?;
        writeln!(f, "  - Strong : {} ({:.1}%)", stats.strong, stats.strong_percent())?;
        writeln!(f, "{light}")?;

        writeln!(f, "Mean length: {:.1} characters", stats.mean_length)?;
        writeln!(f, "Mean entropy: {:.1} bits", stats.mean_entropy)?;
        writeln!(f, "{light}")?;

        writeln!(f, "FREQUENT ISSUES:")?;
        for issue in stats.issues.iter().take(self.issue_limit) {
            writeln!(
                f,
                "  - {} : {} occurrences ({:.1}%)",
                issue.comment,
                issue.count,
                stats.percent_of_total(issue.count)
            )?;
        }
        writeln!(f, "{light}")?;

        if !stats.top_passwords.is_empty() {
            writeln!(f, "BEST PASSWORDS (score + entropy):")?;
            for (rank, entry) in stats.top_passwords.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {} (Score: {}, Entropy: {:.1} bits)",
                    rank + 1,
                    entry.password.expose_secret(),
                    entry.score,
                    entry.entropy_bits
                )?;
            }
        }
        writeln!(f, "{heavy}")
    }
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_report<P: AsRef<Path>>(stats: &AggregateStats, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, Report::new(stats).to_string()).map_err(|source| {
        WordlistError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    #[cfg(feature = "tracing")]
    tracing::info!("Report saved to {:?}", path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Aggregator;

    fn sample_stats() -> AggregateStats {
        let mut aggregator = Aggregator::new();
        for pwd in ["aaa1111", "Tomato7Kiw", "P@ssw0rd123!", "abc"] {
            aggregator.feed(pwd);
        }
        aggregator.finalize()
    }

    #[test]
    fn test_report_sections() {
        let text = Report::new(&sample_stats()).to_string();

        assert!(text.contains("Total passwords analyzed: 4"));
        assert!(text.contains("  - Weak   : 2 (50.0%)"));
        assert!(text.contains("  - Medium : 1 (25.0%)"));
        assert!(text.contains("  - Strong : 1 (25.0%)"));
        assert!(text.contains("  - too short : 2 occurrences (50.0%)"));
        assert!(text.contains("  1. P@ssw0rd123! (Score: 5, Entropy: 78.8 bits)"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(RULE_WIDTH))));
    }

    #[test]
    fn test_report_lists_top_five_issues() {
        let text = Report::new(&sample_stats()).to_string();
        let issue_lines = text.lines().filter(|l| l.contains(" occurrences (")).count();
        assert_eq!(issue_lines, 5);

        let all = Report::new(&sample_stats()).with_issue_limit(usize::MAX).to_string();
        assert!(all.lines().filter(|l| l.contains(" occurrences (")).count() > 5);
    }

    #[test]
    fn test_empty_report_has_no_leaderboard() {
        let stats = Aggregator::new().finalize();
        let text = Report::new(&stats).to_string();
        assert!(text.contains("Total passwords analyzed: 0"));
        assert!(text.contains("(0.0%)"));
        assert!(!text.contains("BEST PASSWORDS"));
    }

    #[test]
    fn test_write_report_matches_display() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.txt");
        let stats = sample_stats();

        write_report(&stats, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), Report::new(&stats).to_string());
    }

    #[test]
    fn test_write_report_unwritable() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("report.txt");
        let result = write_report(&sample_stats(), &path);
        assert!(matches!(result, Err(WordlistError::OutputUnwritable { .. })));
    }
}
