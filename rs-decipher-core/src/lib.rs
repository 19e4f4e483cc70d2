//! Statistical text reconstruction library.
//!
//! This crate breaks rotation ciphers and reorders column-shuffled texts
//! by scoring candidates against corpus frequency models:
//! - Letter-bigram and word-unigram models with Lidstone smoothing
//! - Rotation cipher over a fixed ordered alphabet, with a shift ranker
//! - Column grids and a greedy column-order reconstructor
//! - Corpus loading and an optional on-disk model cache
//!
//! All scores are natural-log probabilities. A score of `-inf` marks a
//! sequence the model considers impossible (only reachable with `k = 0`).

/// Frequency models (letter bigrams, word unigrams) and their cache.
pub mod model;

/// Rotation cipher and the shift decoder.
pub mod cipher;

/// Column grids and the greedy reconstructor.
pub mod shuffle;

/// Corpus readers (word lists, word-count tables).
pub mod corpus;

/// Error types shared by every module.
pub mod error;

mod candidate;

/// Path helpers.
///
/// Not exposed
pub(crate) mod io;

pub use candidate::{rank, Candidate};
pub use cipher::alphabet::Alphabet;
pub use cipher::decoder::{decode_rotation, CipherDecoder};
pub use cipher::rotation_cipher::RotationCipher;
pub use error::{AlphabetError, Error, ModelBuildError, ShapeError};
pub use model::frequency_model::{FrequencyModel, Lookup, NGramEntry, ProbabilisticModel};
pub use model::letter_bigrams::{build_bigram_model, LetterBigrams};
pub use model::word_unigrams::{build_unigram_model, WordUnigrams};
pub use shuffle::column_grid::{Column, ColumnGrid};
pub use shuffle::reconstructor::{reconstruct_columns, StartFilter, TextReconstructor};
