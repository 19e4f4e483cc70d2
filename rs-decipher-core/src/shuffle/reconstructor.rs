use crate::candidate::{rank, Candidate};
use crate::error::ShapeError;
use crate::model::frequency_model::ProbabilisticModel;

use super::column_grid::ColumnGrid;

/// Policy deciding which columns may open a reconstructed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartFilter {
	/// Rejects a column if any of its fragments starts with whitespace:
	/// lines are assumed not to start mid-word after a space.
	#[default]
	RejectLeadingWhitespace,
	/// Every column is tried as a start.
	AcceptAll,
}

impl StartFilter {
	pub fn accepts(self, column: &[String]) -> bool {
		match self {
			StartFilter::AcceptAll => true,
			StartFilter::RejectLeadingWhitespace => !column
				.iter()
				.any(|fragment| fragment.chars().next().is_some_and(char::is_whitespace)),
		}
	}
}

/// Reorders shuffled columns with a word-unigram model.
///
/// For every accepted start column, the remaining columns are appended one
/// at a time, each time picking the column that gives the assembled text the
/// highest log-probability. This is a greedy local search with
/// `O(n²)` evaluations per start; it is not guaranteed to find the best
/// permutation.
#[derive(Debug)]
pub struct TextReconstructor<'m, M> {
	model: &'m M,
	start_filter: StartFilter,
}

impl<'m, M: ProbabilisticModel> TextReconstructor<'m, M> {
	pub fn new(model: &'m M) -> Self {
		Self { model, start_filter: StartFilter::default() }
	}

	pub fn with_start_filter(mut self, start_filter: StartFilter) -> Self {
		self.start_filter = start_filter;
		self
	}

	pub fn start_filter(&self) -> StartFilter {
		self.start_filter
	}

	/// Log-probability of a text under a naive Bayes word model.
	///
	/// The text is lower-cased and split on non-alphabetic characters; every
	/// piece, complete word or not, is scored. A zero-probability word makes
	/// the score `-inf`.
	pub fn score_text(&self, text: &str) -> f64 {
		text.to_lowercase()
			.split(|c: char| !c.is_alphabetic())
			.filter(|word| !word.is_empty())
			.map(|word| self.model.log_probability(word))
			.sum()
	}

	/// Reconstructs the grid from every start column.
	///
	/// Returns one candidate per column, best first; `origin` is the start
	/// column. A start rejected by the filter is not searched: it is recorded
	/// with an empty text and a score of `-inf`, so it ranks last.
	pub fn reconstruct(&self, grid: &ColumnGrid) -> Result<Vec<Candidate>, ShapeError> {
		let mut results = Vec::with_capacity(grid.column_count());

		for start in 0..grid.column_count() {
			if self.start_filter.accepts(grid.column(start)?) {
				results.push(self.reconstruct_from(grid, start)?);
			} else {
				log::debug!("Start column {start} rejected by {:?}", self.start_filter);
				results.push(Candidate::new(f64::NEG_INFINITY, String::new(), start));
			}
		}

		rank(&mut results);
		Ok(results)
	}

	/// Greedily reconstructs the grid with column `start` in first position.
	///
	/// The start filter is not applied. Ties between pool columns go to the
	/// one that comes first in the source grid.
	pub fn reconstruct_from(&self, grid: &ColumnGrid, start: usize) -> Result<Candidate, ShapeError> {
		let mut remaining = grid.clone();
		let mut working = ColumnGrid::empty(grid.row_count());
		working.append_column(remaining.remove_column(start)?)?;

		while !remaining.is_empty() {
			let mut best: Option<(usize, f64)> = None;

			for index in 0..remaining.column_count() {
				working.append_column(remaining.column(index)?.to_vec())?;
				let score = self.score_text(&working.to_text());
				working.remove_column(working.column_count() - 1)?;

				if best.is_none_or(|(_, best_score)| score > best_score) {
					best = Some((index, score));
				}
			}

			if let Some((index, score)) = best {
				log::trace!("Start {start}: appending column {index} (log-probability {score:.4})");
				working.append_column(remaining.remove_column(index)?)?;
			}
		}

		let text = working.to_text();
		let score = self.score_text(&text);
		log::debug!("Start column {start}: log-probability {score:.4}");

		Ok(Candidate::new(score, text, start))
	}
}

/// Reorders a shuffled grid with the default start filter; best candidate first.
pub fn reconstruct_columns<M: ProbabilisticModel>(
	grid: &ColumnGrid,
	model: &M,
) -> Result<Vec<Candidate>, ShapeError> {
	TextReconstructor::new(model).reconstruct(grid)
}
