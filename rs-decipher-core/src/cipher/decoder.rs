use crate::candidate::{rank, Candidate};
use crate::model::frequency_model::ProbabilisticModel;

use super::alphabet::Alphabet;
use super::rotation_cipher::RotationCipher;

/// Ranks the rotations of a ciphertext with a letter-bigram model.
///
/// Each candidate is scored under a naive Bayes assumption:
/// `log P(phrase) = Σ log P(bigram)` over its whitespace-free bigrams.
/// Summing logs instead of multiplying probabilities keeps long texts
/// from underflowing (scores below `1e-200` are common).
#[derive(Debug)]
pub struct CipherDecoder<'m, M> {
	model: &'m M,
	cipher: RotationCipher,
}

impl<'m, M: ProbabilisticModel> CipherDecoder<'m, M> {
	/// Decoder over the English alphabet.
	pub fn new(model: &'m M) -> Self {
		Self { model, cipher: RotationCipher::default() }
	}

	pub fn with_cipher(model: &'m M, cipher: RotationCipher) -> Self {
		Self { model, cipher }
	}

	/// Log-probability of a phrase; `0.0` when it has no bigram.
	pub fn score(&self, phrase: &str) -> f64 {
		phrase_bigrams(phrase)
			.iter()
			.map(|bigram| self.model.log_probability(bigram))
			.sum()
	}

	/// Scores candidate phrases and returns them best first.
	///
	/// `origin` is the position of the phrase in the input, which is the
	/// shift when the input comes from `RotationCipher::rotations`.
	/// Equal scores keep input order.
	pub fn rank<I, S>(&self, phrases: I) -> Vec<Candidate>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut results: Vec<Candidate> = phrases
			.into_iter()
			.enumerate()
			.map(|(origin, phrase)| {
				let phrase: String = phrase.into();
				let score = self.score(&phrase);
				log::debug!("Phrase {origin}: {phrase} (log-probability {score:.4})");
				Candidate::new(score, phrase, origin)
			})
			.collect();

		rank(&mut results);
		results
	}

	/// Cleans a ciphertext, tries every shift and ranks the results.
	///
	/// Text is lower-cased and stripped of everything but alphabet symbols
	/// and spaces before rotating.
	pub fn decode(&self, ciphertext: &str) -> Vec<Candidate> {
		let text = clean_text(ciphertext, self.cipher.alphabet());
		self.rank(self.cipher.rotations(&text))
	}
}

/// All overlapping 2-character windows of `phrase` that contain no whitespace.
pub fn phrase_bigrams(phrase: &str) -> Vec<String> {
	let chars: Vec<char> = phrase.chars().collect();
	chars
		.windows(2)
		.filter(|window| !window.iter().any(|c| c.is_whitespace()))
		.map(|window| window.iter().collect())
		.collect()
}

/// Lower-cases `text` and keeps only alphabet symbols and spaces.
pub fn clean_text(text: &str, alphabet: &Alphabet) -> String {
	text.to_lowercase()
		.chars()
		.filter(|c| *c == ' ' || alphabet.contains(*c))
		.collect()
}

/// Ranks already-rotated candidates with a bigram model.
pub fn decode_rotation<M, S>(candidates: &[S], model: &M) -> Vec<Candidate>
where
	M: ProbabilisticModel,
	S: AsRef<str>,
{
	CipherDecoder::new(model).rank(candidates.iter().map(|c| c.as_ref().to_owned()))
}
