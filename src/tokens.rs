//! Generation tokens: an insertion-ordered, duplicate-free set of words,
//! dates and extra strings.

use std::path::Path;

use indexmap::IndexSet;

use crate::error::{Result, WordlistError};

const MIN_DATE_YEAR: u32 = 1900;
const MAX_DATE_YEAR: u32 = 2025;
const DAYS_PER_MONTH: u32 = 28;

/// Deduplicated tokens in first-occurrence order.
///
/// Matching is exact and case-sensitive. Iteration order is the order in
/// which tokens were first inserted, so enumeration over a set built from
/// the same input is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: IndexSet<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trimmed token; blank input is ignored.
    ///
    /// Returns `true` if the token was not already present.
    pub fn insert(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token.to_string())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Borrowed view used by the combination enumerator.
    pub fn as_strs(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Loads tokens from a UTF-8 file, one per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File is not valid UTF-8
    /// - File cannot be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            #[cfg(feature = "tracing")]
            tracing::error!("Token loading FAILED: file not found {:?}", path);
            return Err(WordlistError::InputNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|_| WordlistError::InputDecodeError(path.to_path_buf()))?;

        let set: TokenSet = content.lines().collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Loaded {} unique tokens from {:?}", set.len(), path);

        Ok(set)
    }

    /// Like [`TokenSet::load`], but a file that is not valid UTF-8 is
    /// reported and yields an empty set instead of an error.
    ///
    /// The caller decides whether generation should continue with what it
    /// has, e.g. special characters alone.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path) {
            Err(WordlistError::InputDecodeError(_path)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Encoding problem in {:?}, continuing with no tokens", _path);
                Ok(Self::new())
            }
            other => other,
        }
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        set.extend(iter);
        set
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<&'a str> for TokenSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl Extend<String> for TokenSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.insert(&token);
        }
    }
}

/// Every year in `start..=end` as a token.
pub fn year_tokens(start: u32, end: u32) -> Result<Vec<String>> {
    if start > end {
        return Err(WordlistError::InvalidConfig(format!(
            "start year {} is after end year {}",
            start, end
        )));
    }
    Ok((start..=end).map(|year| year.to_string()).collect())
}

/// `DD/MM/YYYY` dates for the years in `start..=end`, clamped to 1900-2025.
///
/// Days stop at 28 so every month yields the same valid set.
pub fn full_date_tokens(start: u32, end: u32) -> Result<Vec<String>> {
    if start > end {
        return Err(WordlistError::InvalidConfig(format!(
            "start year {} is after end year {}",
            start, end
        )));
    }
    let first = start.max(MIN_DATE_YEAR);
    let last = end.min(MAX_DATE_YEAR);

    let mut dates = Vec::new();
    for year in first..=last {
        for month in 1..=12 {
            for day in 1..=DAYS_PER_MONTH {
                dates.push(format!("{:02}/{:02}/{}", day, month, year));
            }
        }
    }
    Ok(dates)
}
