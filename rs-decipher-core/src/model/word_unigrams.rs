use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::frequency_model::{FrequencyModel, ProbabilisticModel};
use super::DEFAULT_SMOOTHING;
use crate::corpus::read_word_counts;
use crate::error::ModelBuildError;

/// Word-unigram model built from a word-count table.
///
/// The vocabulary is open: words missing from the table score the cached
/// unknown-word probability `k / (total + k * V)`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordUnigrams {
	frequencies: FrequencyModel,
}

impl WordUnigrams {
	/// Reads a `word count` table and builds the model.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelBuildError> {
		let counts = read_word_counts(path)?;
		Self::build(counts.as_slice())
	}
}

impl ProbabilisticModel for WordUnigrams {
	type Corpus = [(String, u64)];

	/// Words are lower-cased; repeated words have their counts summed.
	///
	/// # Errors
	/// `EmptyCorpus` if the table is empty or every count is zero.
	fn build(word_counts: &[(String, u64)]) -> Result<Self, ModelBuildError> {
		if word_counts.is_empty() {
			return Err(ModelBuildError::EmptyCorpus);
		}

		let start = Instant::now();
		let mut frequencies = FrequencyModel::new();
		for (word, count) in word_counts {
			frequencies.add_count(&word.to_lowercase(), *count);
		}

		if frequencies.total_count() == 0 {
			return Err(ModelBuildError::EmptyCorpus);
		}
		frequencies.calculate_probabilities(DEFAULT_SMOOTHING)?;

		log::info!(
			"Built word unigram model: {} words, total count {} in {:?}",
			frequencies.vocabulary_size(),
			frequencies.total_count(),
			start.elapsed()
		);

		Ok(Self { frequencies })
	}

	fn frequencies(&self) -> &FrequencyModel {
		&self.frequencies
	}

	fn calculate_probabilities(&mut self, k: f64) -> Result<(), ModelBuildError> {
		self.frequencies.calculate_probabilities(k)
	}
}

/// Builds a word-unigram model from `(word, count)` pairs.
pub fn build_unigram_model<I, S>(word_counts: I) -> Result<WordUnigrams, ModelBuildError>
where
	I: IntoIterator<Item = (S, u64)>,
	S: Into<String>,
{
	let word_counts: Vec<(String, u64)> = word_counts
		.into_iter()
		.map(|(word, count)| (word.into(), count))
		.collect();
	WordUnigrams::build(word_counts.as_slice())
}
