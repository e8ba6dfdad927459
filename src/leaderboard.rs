//! Bounded top-K ranking of the best passwords seen during an analysis.

use std::cmp::Ordering;

use secrecy::SecretString;

/// Number of entries kept by [`Leaderboard::new`].
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Candidates scoring below this are never ranked.
pub const MIN_LEADERBOARD_SCORE: i64 = 4;

#[derive(Debug)]
pub struct LeaderboardEntry {
    pub password: SecretString,
    pub score: i64,
    pub entropy_bits: f64,
}

impl LeaderboardEntry {
    /// How a candidate ranks against this entry: higher score first, then
    /// higher entropy.
    fn candidate_cmp(&self, score: i64, entropy_bits: f64) -> Ordering {
        score
            .cmp(&self.score)
            .then_with(|| entropy_bits.total_cmp(&self.entropy_bits))
    }
}

/// Sorted, bounded vector ordered by `(score, entropy)` descending.
///
/// Entries with an equal key keep their arrival order.
#[derive(Debug)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::with_capacity(LEADERBOARD_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Offers a candidate; returns whether it was ranked.
    ///
    /// No-op when `score < 4` or when the board is full and the candidate
    /// does not outrank the last entry.
    pub fn offer(&mut self, password: SecretString, score: i64, entropy_bits: f64) -> bool {
        if score < MIN_LEADERBOARD_SCORE {
            return false;
        }

        // First index whose entry ranks strictly below the candidate.
        let position = self
            .entries
            .partition_point(|e| e.candidate_cmp(score, entropy_bits) != Ordering::Greater);
        if position >= self.capacity {
            return false;
        }

        self.entries.insert(
            position,
            LeaderboardEntry {
                password,
                score,
                entropy_bits,
            },
        );
        self.entries.truncate(self.capacity);
        true
    }

    /// Highest rank first.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
