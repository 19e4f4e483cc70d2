//! Frequency models used to score candidate texts.
//!
//! This module provides:
//! - A smoothed n-gram count table (`FrequencyModel`)
//! - The `ProbabilisticModel` capability shared by every model
//! - Letter bigrams built from a word list (`LetterBigrams`)
//! - Word unigrams built from a word-count table (`WordUnigrams`)
//! - An optional on-disk cache for built models

/// Smoothed count table and the `ProbabilisticModel` trait.
pub mod frequency_model;

/// Letter-bigram model over a closed alphabet.
///
/// Every bigram of the alphabet is present, even with a zero count.
pub mod letter_bigrams;

/// Word-unigram model over an open vocabulary.
pub mod word_unigrams;

/// Load-if-exists-else-build cache for serialized models.
pub mod cache;

/// Default Lidstone smoothing constant (Laplace smoothing).
pub const DEFAULT_SMOOTHING: f64 = 1.0;
