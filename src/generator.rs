//! Combination engine - expands a token set into a candidate wordlist.
//!
//! Candidates are produced lazily by [`Candidates`]: combinations of each
//! size are enumerated in lexicographic index order, joined, expanded into
//! case variants and special-character affixes, then filtered by length.
//! [`generate`] drains that stream into a [`Sink`] until it is exhausted or
//! the output cap is reached.

use std::collections::VecDeque;
use std::path::Path;

use crate::config::{DEFAULT_MAX_OUTPUT_COUNT, DEFAULT_MIN_OUTPUT_LENGTH};
use crate::error::{Result, WordlistError};
use crate::sink::{BufferedSink, Sink};
use crate::tokens::TokenSet;

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub tokens: TokenSet,
    /// Smallest number of tokens per combination; must be at least 1.
    pub min_combination_size: usize,
    /// Largest number of tokens per combination; `None` means all tokens.
    pub max_combination_size: Option<usize>,
    /// Placed between joined tokens; empty means plain concatenation.
    pub separator: String,
    /// Emit lowercase, capitalized and uppercase forms of each combination.
    pub case_variants: bool,
    pub special_chars: Vec<char>,
    /// Prefix and suffix every candidate with each special character.
    pub append_special: bool,
    pub max_output_count: u64,
    /// Minimum candidate length, in characters.
    pub min_output_length: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tokens: TokenSet::new(),
            min_combination_size: 1,
            max_combination_size: None,
            separator: String::new(),
            case_variants: false,
            special_chars: Vec::new(),
            append_special: false,
            max_output_count: DEFAULT_MAX_OUTPUT_COUNT,
            min_output_length: DEFAULT_MIN_OUTPUT_LENGTH,
        }
    }
}

impl GenerationConfig {
    pub fn new(tokens: TokenSet) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// Checks the configuration before any output is produced.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - there are neither tokens nor special characters
    /// - the minimum combination size is 0
    /// - the maximum combination size is below the minimum
    /// - the output cap is 0
    pub fn validate(&self) -> Result<()> {
        if self.tokens.is_empty() && self.special_chars.is_empty() {
            return Err(WordlistError::InvalidConfig(
                "no tokens or special characters to combine".to_string(),
            ));
        }
        if self.min_combination_size == 0 {
            return Err(WordlistError::InvalidConfig(
                "minimum combination size must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_combination_size
            && max < self.min_combination_size
        {
            return Err(WordlistError::InvalidConfig(format!(
                "maximum combination size {} is below minimum {}",
                max, self.min_combination_size
            )));
        }
        if self.max_output_count == 0 {
            return Err(WordlistError::InvalidConfig(
                "maximum output count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Largest combination size actually enumerated, clamped to the token count.
    pub fn effective_max(&self) -> usize {
        let count = self.tokens.len();
        self.max_combination_size.unwrap_or(count).min(count)
    }

    fn affixing(&self) -> bool {
        self.append_special && !self.special_chars.is_empty()
    }

    /// Expected combination count for every size that will be enumerated.
    pub fn planned_sizes(&self) -> Vec<SizePlan> {
        let count = self.tokens.len();
        (self.min_combination_size.max(1)..=self.effective_max())
            .map(|size| SizePlan {
                size,
                expected: binomial(count, size),
            })
            .collect()
    }

    /// Upper bound on the candidates produced before the output cap and the
    /// length filter apply; `None` if it does not fit in a `u128`.
    pub fn expected_candidates(&self) -> Option<u128> {
        let variants: u128 = if self.case_variants { 3 } else { 1 };
        let affixes = if self.affixing() {
            2 * self.special_chars.len() as u128 + 1
        } else {
            1
        };
        let per_combination = variants * affixes;
        self.planned_sizes().iter().try_fold(0u128, |total, plan| {
            plan.expected?
                .checked_mul(per_combination)
                .and_then(|n| total.checked_add(n))
        })
    }
}

/// Number of combinations of one size, computed in closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePlan {
    pub size: usize,
    /// `None` when `C(n, k)` does not fit in a `u128`.
    pub expected: Option<u128>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub written: u64,
    /// The output cap stopped generation.
    pub limit_reached: bool,
    pub planned: Vec<SizePlan>,
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc == C(n, i) here, so the division is exact.
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(acc)
}

/// Lexicographic `k`-subsets of the indices `0..n`.
///
/// For `n = 4, k = 2` this yields `[0,1], [0,2], [0,3], [1,2], [1,3], [2,3]`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that has not reached its final value.
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

impl std::iter::FusedIterator for Combinations {}

/// Lazy stream of filtered candidates for a configuration.
///
/// Nothing beyond the current combination's expansions is held in memory.
#[derive(Debug)]
pub struct Candidates<'a> {
    config: &'a GenerationConfig,
    pool: Vec<&'a str>,
    next_size: usize,
    max_size: usize,
    combos: Option<Combinations>,
    pending: VecDeque<String>,
}

/// Starts the candidate stream. The configuration is not validated here.
pub fn candidates(config: &GenerationConfig) -> Candidates<'_> {
    Candidates {
        config,
        pool: config.tokens.as_strs(),
        next_size: config.min_combination_size.max(1),
        max_size: config.effective_max(),
        combos: None,
        pending: VecDeque::new(),
    }
}

impl<'a> Candidates<'a> {
    fn next_combination(&mut self) -> Option<Vec<usize>> {
        loop {
            if let Some(combo) = self.combos.as_mut().and_then(|c| c.next()) {
                return Some(combo);
            }
            if self.next_size > self.max_size {
                self.combos = None;
                return None;
            }
            let size = self.next_size;
            self.next_size += 1;

            #[cfg(feature = "tracing")]
            tracing::info!(
                "Generating combinations of {} element(s): {} expected",
                size,
                binomial(self.pool.len(), size)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "too many to count".to_string())
            );

            self.combos = Some(Combinations::new(self.pool.len(), size));
        }
    }

    fn expand(&mut self, combo: &[usize]) {
        let config = self.config;
        let parts: Vec<&str> = combo.iter().map(|&i| self.pool[i]).collect();
        let base = parts.join(&config.separator);

        let variants = if config.case_variants {
            vec![base.to_lowercase(), capitalize(&base), base.to_uppercase()]
        } else {
            vec![base]
        };

        if config.affixing() {
            for variant in &variants {
                for &special in &config.special_chars {
                    self.push(format!("{variant}{special}"));
                    self.push(format!("{special}{variant}"));
                }
            }
        }
        for variant in variants {
            self.push(variant);
        }
    }

    fn push(&mut self, candidate: String) {
        if candidate.chars().count() >= self.config.min_output_length {
            self.pending.push_back(candidate);
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(candidate) = self.pending.pop_front() {
                return Some(candidate);
            }
            let combo = self.next_combination()?;
            self.expand(&combo);
        }
    }
}

/// Upper-cases the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Writes every candidate of `config` to `sink`, stopping at the output cap.
///
/// The sink is flushed before returning on every path, so lines already
/// produced are never lost.
pub fn generate<S: Sink>(config: &GenerationConfig, sink: &mut S) -> Result<GenerationSummary> {
    config.validate()?;

    let planned = config.planned_sizes();
    let limit = config.max_output_count;
    let mut written = 0u64;
    let mut limit_reached = false;

    for candidate in candidates(config) {
        if let Err(e) = sink.write_line(&candidate) {
            let _ = sink.flush();
            return Err(e.into());
        }
        written += 1;
        if written >= limit {
            limit_reached = true;
            #[cfg(feature = "tracing")]
            tracing::info!("Limit of {} combinations reached", limit);
            break;
        }
    }
    sink.flush()?;

    Ok(GenerationSummary {
        written,
        limit_reached,
        planned,
    })
}

/// Generates into a newly created file at `path`.
///
/// The configuration is validated before the file is touched.
pub fn generate_to_file<P: AsRef<Path>>(
    config: &GenerationConfig,
    path: P,
) -> Result<GenerationSummary> {
    config.validate()?;
    let mut sink = BufferedSink::create(path)?;
    let summary = generate(config, &mut sink)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Wordlist written: {} lines (at least {} characters)",
        summary.written,
        config.min_output_length
    );

    Ok(summary)
}
