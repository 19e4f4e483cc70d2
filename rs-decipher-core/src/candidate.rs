use serde::{Deserialize, Serialize};

/// A scored candidate text.
///
/// `score` is a natural-log probability and may be `-inf` for sequences the
/// model considers impossible. `origin` is the shift (decoder) or the start
/// column (reconstructor) that produced the text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Candidate {
	pub score: f64,
	pub text: String,
	pub origin: usize,
}

impl Candidate {
	pub fn new(score: f64, text: String, origin: usize) -> Self {
		Self { score, text, origin }
	}

	/// Linear-space probability, `exp(score)`.
	///
	/// Underflows to `0.0` for long texts; use `score` for comparisons.
	pub fn probability(&self) -> f64 {
		self.score.exp()
	}
}

/// Sorts candidates by descending score.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank(candidates: &mut [Candidate]) {
	candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
