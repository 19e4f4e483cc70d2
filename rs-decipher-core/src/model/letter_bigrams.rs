use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::frequency_model::{FrequencyModel, ProbabilisticModel};
use super::DEFAULT_SMOOTHING;
use crate::cipher::alphabet::Alphabet;
use crate::corpus::read_word_list;
use crate::error::ModelBuildError;

/// Letter-bigram model built from a word list.
///
/// The vocabulary is closed: every pair of alphabet symbols is present,
/// including pairs never seen in the corpus. Occurrences are counted with
/// overlapping windows inside each word; words never join across their
/// boundaries, so `"ab cd"` contributes `ab` and `cd` but not `bc`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LetterBigrams {
	alphabet: Alphabet,
	frequencies: FrequencyModel,
}

impl LetterBigrams {
	/// Builds the model over a custom alphabet.
	///
	/// # Errors
	/// `EmptyCorpus` if `words` is empty or contains no pair of alphabet symbols.
	pub fn with_alphabet<S: AsRef<str>>(alphabet: Alphabet, words: &[S]) -> Result<Self, ModelBuildError> {
		if words.is_empty() {
			return Err(ModelBuildError::EmptyCorpus);
		}

		let start = Instant::now();
		let mut frequencies = FrequencyModel::with_vocabulary(alphabet.bigrams());
		let mut token = String::with_capacity(8);

		for word in words {
			let chars: Vec<char> = word.as_ref().to_lowercase().chars().collect();
			for window in chars.windows(2) {
				token.clear();
				token.extend(window);
				frequencies.increment_known(&token);
			}
		}

		if frequencies.total_count() == 0 {
			return Err(ModelBuildError::EmptyCorpus);
		}
		frequencies.calculate_probabilities(DEFAULT_SMOOTHING)?;

		log::info!(
			"Built letter bigram model: {} words, {} bigrams counted in {:?}",
			words.len(),
			frequencies.total_count(),
			start.elapsed()
		);

		Ok(Self { alphabet, frequencies })
	}

	/// Reads a word list (one word per line) and builds the model over the English alphabet.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelBuildError> {
		let words = read_word_list(path)?;
		Self::build(words.as_slice())
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}
}

impl ProbabilisticModel for LetterBigrams {
	type Corpus = [String];

	fn build(words: &[String]) -> Result<Self, ModelBuildError> {
		Self::with_alphabet(Alphabet::english(), words)
	}

	fn frequencies(&self) -> &FrequencyModel {
		&self.frequencies
	}

	fn calculate_probabilities(&mut self, k: f64) -> Result<(), ModelBuildError> {
		self.frequencies.calculate_probabilities(k)
	}
}

/// Builds a letter-bigram model over the English alphabet.
pub fn build_bigram_model<S: AsRef<str>>(words: &[S]) -> Result<LetterBigrams, ModelBuildError> {
	LetterBigrams::with_alphabet(Alphabet::english(), words)
}
