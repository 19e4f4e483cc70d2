use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AlphabetError;

/// Ordered set of distinct symbols.
///
/// # Invariants
/// - Never empty
/// - No symbol appears twice
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
	symbols: Vec<char>,
}

impl Alphabet {
	/// Creates an alphabet from an ordered symbol sequence.
	///
	/// # Errors
	/// Returns an error if the sequence is empty or repeats a symbol.
	pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self, AlphabetError> {
		let symbols: Vec<char> = symbols.into_iter().collect();
		if symbols.is_empty() {
			return Err(AlphabetError::Empty);
		}

		let mut seen = HashSet::with_capacity(symbols.len());
		for symbol in &symbols {
			if !seen.insert(*symbol) {
				return Err(AlphabetError::Duplicate(*symbol));
			}
		}

		Ok(Self { symbols })
	}

	/// The 26 lowercase latin letters, `a` to `z`.
	pub fn english() -> Self {
		Self { symbols: ('a'..='z').collect() }
	}

	/// Number of symbols; never zero.
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn symbols(&self) -> &[char] {
		&self.symbols
	}

	/// Position of `symbol`, or `None` if it is not part of the alphabet.
	pub fn index_of(&self, symbol: char) -> Option<usize> {
		self.symbols.iter().position(|s| *s == symbol)
	}

	pub fn contains(&self, symbol: char) -> bool {
		self.index_of(symbol).is_some()
	}

	/// Every ordered pair of symbols, in alphabet order (`aa`, `ab`, ... `zz`).
	pub fn bigrams(&self) -> impl Iterator<Item = String> + '_ {
		self.symbols
			.iter()
			.flat_map(move |x| self.symbols.iter().map(move |y| [*x, *y].iter().collect()))
	}
}

impl Default for Alphabet {
	fn default() -> Self {
		Self::english()
	}
}
