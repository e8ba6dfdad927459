//! Streaming wordlist analysis.
//!
//! The [`Aggregator`] keeps constant-size running totals plus a bounded
//! [`Leaderboard`], so inputs of any size can be analyzed line by line.

use std::cmp::Reverse;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use secrecy::SecretString;

use crate::error::{Result, WordlistError};
use crate::evaluator::evaluate_password;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::types::Strength;

/// How often a diagnostic comment occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCount {
    pub comment: String,
    pub count: u64,
}

/// Finalized analysis results.
#[derive(Debug)]
pub struct AggregateStats {
    pub total: u64,
    pub weak: u64,
    pub medium: u64,
    pub strong: u64,
    pub mean_length: f64,
    pub mean_entropy: f64,
    /// Most frequent first; equal counts keep first-seen order.
    pub issues: Vec<IssueCount>,
    pub top_passwords: Vec<LeaderboardEntry>,
    pub elapsed: Duration,
}

impl AggregateStats {
    /// Share of `count` in the total, 0 when nothing was analyzed.
    pub fn percent_of_total(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn weak_percent(&self) -> f64 {
        self.percent_of_total(self.weak)
    }

    pub fn medium_percent(&self) -> f64 {
        self.percent_of_total(self.medium)
    }

    pub fn strong_percent(&self) -> f64 {
        self.percent_of_total(self.strong)
    }
}

/// Running accumulator fed one line at a time.
#[derive(Debug)]
pub struct Aggregator {
    total: u64,
    weak: u64,
    medium: u64,
    strong: u64,
    length_sum: u64,
    entropy_sum: f64,
    issues: IndexMap<String, u64>,
    leaderboard: Leaderboard,
    sample_limit: Option<usize>,
    started: Instant,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            total: 0,
            weak: 0,
            medium: 0,
            strong: 0,
            length_sum: 0,
            entropy_sum: 0.0,
            issues: IndexMap::new(),
            leaderboard: Leaderboard::new(),
            sample_limit: None,
            started: Instant::now(),
        }
    }

    /// Stops accepting passwords after `limit` non-empty lines.
    pub fn with_sample_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Number of passwords scored so far.
    pub fn processed(&self) -> u64 {
        self.total
    }

    /// `true` once the sample limit has been reached.
    pub fn is_saturated(&self) -> bool {
        self.sample_limit
            .is_some_and(|limit| self.total >= limit as u64)
    }

    /// Scores one input line.
    ///
    /// The line is trimmed; blank lines are skipped, as is everything once
    /// the sample limit is reached. Returns whether the line was scored.
    pub fn feed(&mut self, line: &str) -> bool {
        if self.is_saturated() {
            return false;
        }
        let password = line.trim();
        if password.is_empty() {
            return false;
        }

        let secret = SecretString::new(password.to_string().into());
        let result = evaluate_password(&secret);

        self.total += 1;
        self.length_sum += password.chars().count() as u64;
        self.entropy_sum += result.entropy_bits;

        match result.strength {
            Strength::Weak => self.weak += 1,
            Strength::Medium => self.medium += 1,
            Strength::Strong => self.strong += 1,
        }

        for comment in result.comments {
            *self.issues.entry(comment).or_insert(0) += 1;
        }

        self.leaderboard
            .offer(secret, result.score, result.entropy_bits);

        true
    }

    /// Computes means and sorts issues. Consumes the accumulator.
    pub fn finalize(self) -> AggregateStats {
        let (mean_length, mean_entropy) = if self.total == 0 {
            (0.0, 0.0)
        } else {
            (
                self.length_sum as f64 / self.total as f64,
                self.entropy_sum / self.total as f64,
            )
        };

        let mut issues: Vec<IssueCount> = self
            .issues
            .into_iter()
            .map(|(comment, count)| IssueCount { comment, count })
            .collect();
        // Stable: ties stay in first-seen order.
        issues.sort_by_key(|issue| Reverse(issue.count));

        AggregateStats {
            total: self.total,
            weak: self.weak,
            medium: self.medium,
            strong: self.strong,
            mean_length,
            mean_entropy,
            issues,
            top_passwords: self.leaderboard.into_entries(),
            elapsed: self.started.elapsed(),
        }
    }
}

/// Analyzes a lazy sequence of lines.
///
/// Stops pulling from `lines` as soon as the sample limit is reached, and
/// propagates the first read error.
pub fn analyze_lines<I, E>(lines: I, sample_limit: Option<usize>) -> std::result::Result<AggregateStats, E>
where
    I: IntoIterator<Item = std::result::Result<String, E>>,
{
    let mut aggregator = Aggregator::new().with_sample_limit(sample_limit);
    let mut lines = lines.into_iter();

    // Check the limit before pulling so no line past the sample is read.
    while !aggregator.is_saturated() {
        let Some(line) = lines.next() else {
            break;
        };
        aggregator.feed(&line?);

        #[cfg(feature = "tracing")]
        {
            let processed = aggregator.processed();
            if processed > 0 && processed.is_multiple_of(100_000) {
                tracing::debug!("{} passwords analyzed", processed);
            }
        }
    }
    Ok(aggregator.finalize())
}

/// Analyzes a buffered reader line by line.
pub fn analyze_reader<R: BufRead>(reader: R, sample_limit: Option<usize>) -> io::Result<AggregateStats> {
    analyze_lines(reader.lines(), sample_limit)
}

/// Analyzes a UTF-8 wordlist file, one password per line.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File is not valid UTF-8
/// - File cannot be read
pub fn analyze_file<P: AsRef<Path>>(path: P, sample_limit: Option<usize>) -> Result<AggregateStats> {
    let path = path.as_ref();
    if !path.is_file() {
        #[cfg(feature = "tracing")]
        tracing::error!("Analysis FAILED: file not found {:?}", path);
        return Err(WordlistError::InputNotFound(path.to_path_buf()));
    }

    #[cfg(feature = "tracing")]
    {
        match sample_limit {
            Some(limit) => tracing::info!("Analyzing a sample of {} passwords from {:?}", limit, path),
            None => tracing::info!("Analyzing all passwords from {:?}", path),
        }
    }

    let reader = BufReader::new(File::open(path)?);
    analyze_reader(reader, sample_limit).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => WordlistError::InputDecodeError(path.to_path_buf()),
        _ => WordlistError::Io(e),
    })
}
