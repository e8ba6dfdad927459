//! Password strength analysis and combinatorial wordlist generation
//!
//! This library provides two engines:
//!
//! - a scorer that classifies a password and estimates its entropy, driven
//!   over arbitrarily large wordlists by a streaming aggregator
//! - a combination engine that expands words, dates and symbols into a
//!   candidate wordlist under size, format and volume constraints
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-wordlist` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_SPECIALS`: Default special characters for affixing
//!   (default: `!@#$%`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_wordlist::{evaluate_password, generate_to_file, GenerationConfig, TokenSet};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate_password(&password);
//! println!("Score: {} ({})", result.score, result.strength);
//!
//! let tokens = TokenSet::load("words.txt").expect("Failed to load tokens");
//! let mut config = GenerationConfig::new(tokens);
//! config.separator = "_".to_string();
//! let summary = generate_to_file(&config, "wordlist.txt").expect("Generation failed");
//! println!("{} candidates written", summary.written);
//! ```

// Internal modules
mod aggregator;
mod config;
mod error;
mod evaluator;
mod generator;
mod leaderboard;
mod report;
mod sections;
mod sink;
mod tokens;
mod types;

// Public API
pub use aggregator::{analyze_file, analyze_lines, analyze_reader, AggregateStats, Aggregator, IssueCount};
pub use config::{
    default_special_chars, DEFAULT_MAX_OUTPUT_COUNT, DEFAULT_MIN_OUTPUT_LENGTH,
    DEFAULT_SPECIAL_CHARS, SPECIALS_ENV_VAR,
};
pub use error::{Result, WordlistError};
pub use evaluator::evaluate_password;
pub use generator::{
    binomial, candidates, generate, generate_to_file, Candidates, Combinations, GenerationConfig,
    GenerationSummary, SizePlan,
};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LEADERBOARD_CAPACITY, MIN_LEADERBOARD_SCORE};
pub use report::{write_report, Report};
pub use sections::{entropy_bits, pool_size};
pub use sink::{BufferedSink, Sink, FLUSH_THRESHOLD};
pub use tokens::{full_date_tokens, year_tokens, TokenSet};
pub use types::{CharsetClass, ScoreResult, Strength};
