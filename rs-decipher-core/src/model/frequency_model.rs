use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelBuildError;

/// Count and smoothed probability of a single n-gram.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NGramEntry {
	pub count: u64,
	pub probability: f64,
}

/// Result of a probability lookup.
///
/// Keeps "the token is in the vocabulary" apart from "the token fell back
/// to the unknown-class probability".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup {
	Known(f64),
	Fallback(f64),
}

impl Lookup {
	pub fn probability(self) -> f64 {
		match self {
			Lookup::Known(p) | Lookup::Fallback(p) => p,
		}
	}

	/// Natural log of the probability; `ln(0)` is `-inf`.
	pub fn log_probability(self) -> f64 {
		let p = self.probability();
		if p > 0.0 { p.ln() } else { f64::NEG_INFINITY }
	}

	pub fn is_known(self) -> bool {
		matches!(self, Lookup::Known(_))
	}
}

/// Table of n-gram counts with Lidstone-smoothed probabilities.
///
/// # Responsibilities
/// - Accumulate counts during construction (`add_count`)
/// - Compute `p = (count + k) / (total + k * V)` for every entry
/// - Cache the unknown-token probability `k / (total + k * V)`
///
/// # Invariants
/// - `total_count` is the sum of all entry counts
/// - After `calculate_probabilities`, entry probabilities sum to 1
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FrequencyModel {
	entries: HashMap<String, NGramEntry>,
	total_count: u64,
	smoothing: f64,
	default_probability: f64,
}

impl FrequencyModel {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a table holding every token of a closed vocabulary with a zero count.
	pub fn with_vocabulary<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let entries = tokens
			.into_iter()
			.map(|token| (token.into(), NGramEntry { count: 0, probability: 0.0 }))
			.collect();
		Self { entries, ..Self::default() }
	}

	/// Adds `count` occurrences of `token`, inserting it if needed.
	///
	/// Probabilities are stale until `calculate_probabilities` runs again.
	pub fn add_count(&mut self, token: &str, count: u64) {
		match self.entries.get_mut(token) {
			Some(entry) => entry.count += count,
			None => {
				self.entries.insert(token.to_owned(), NGramEntry { count, probability: 0.0 });
			}
		}
		self.total_count += count;
	}

	/// Adds one occurrence of `token` only if it already belongs to the vocabulary.
	///
	/// Returns `false` when the token is outside the table.
	pub fn increment_known(&mut self, token: &str) -> bool {
		match self.entries.get_mut(token) {
			Some(entry) => {
				entry.count += 1;
				self.total_count += 1;
				true
			}
			None => false,
		}
	}

	/// Recomputes every probability with smoothing constant `k`.
	///
	/// `k = 0` is maximum likelihood: unseen tokens get probability 0.
	///
	/// # Errors
	/// - `InvalidSmoothing` if `k` is negative or not finite
	/// - `EmptyCorpus` if `total + k * V` is zero
	pub fn calculate_probabilities(&mut self, k: f64) -> Result<(), ModelBuildError> {
		if !k.is_finite() || k < 0.0 {
			return Err(ModelBuildError::InvalidSmoothing(k));
		}

		let denominator = self.total_count as f64 + k * self.entries.len() as f64;
		if denominator <= 0.0 {
			return Err(ModelBuildError::EmptyCorpus);
		}

		for entry in self.entries.values_mut() {
			entry.probability = (entry.count as f64 + k) / denominator;
		}
		self.default_probability = k / denominator;
		self.smoothing = k;

		Ok(())
	}

	pub fn lookup(&self, token: &str) -> Lookup {
		match self.entries.get(token) {
			Some(entry) => Lookup::Known(entry.probability),
			None => Lookup::Fallback(self.default_probability),
		}
	}

	pub fn count(&self, token: &str) -> Option<u64> {
		self.entries.get(token).map(|entry| entry.count)
	}

	pub fn total_count(&self) -> u64 {
		self.total_count
	}

	pub fn vocabulary_size(&self) -> usize {
		self.entries.len()
	}

	/// Smoothing constant used by the last `calculate_probabilities` pass.
	pub fn smoothing(&self) -> f64 {
		self.smoothing
	}

	/// Probability assigned to tokens outside the vocabulary.
	pub fn default_probability(&self) -> f64 {
		self.default_probability
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &NGramEntry)> {
		self.entries.iter().map(|(token, entry)| (token.as_str(), entry))
	}
}

/// Capability shared by every scoring model.
///
/// Variants are concrete types (`LetterBigrams`, `WordUnigrams`) chosen by
/// the caller; scorers are generic over this trait.
pub trait ProbabilisticModel {
	/// Raw material the model is built from.
	type Corpus: ?Sized;

	/// Counts the corpus and computes probabilities with the default smoothing.
	fn build(corpus: &Self::Corpus) -> Result<Self, ModelBuildError>
	where
		Self: Sized;

	/// Underlying count table.
	fn frequencies(&self) -> &FrequencyModel;

	/// Rescores the model under a new smoothing constant.
	fn calculate_probabilities(&mut self, k: f64) -> Result<(), ModelBuildError>;

	fn lookup(&self, token: &str) -> Lookup {
		self.frequencies().lookup(token)
	}

	fn probability(&self, token: &str) -> f64 {
		self.lookup(token).probability()
	}

	fn log_probability(&self, token: &str) -> f64 {
		self.lookup(token).log_probability()
	}
}
