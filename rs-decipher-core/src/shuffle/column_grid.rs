use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Fragment separator in shuffled texts (`|th|is| i|`).
pub const DEFAULT_DELIMITER: char = '|';

/// One column of a grid: a fragment per row, top to bottom.
pub type Column = Vec<String>;

/// Grid of text fragments stored column by column.
///
/// # Invariants
/// - Every column holds exactly `row_count` fragments
/// - `row_count` is fixed at construction
///
/// Deserialization goes through the same row-count check as `append_column`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawGrid")]
pub struct ColumnGrid {
	row_count: usize,
	columns: Vec<Column>,
}

#[derive(Deserialize)]
struct RawGrid {
	row_count: usize,
	columns: Vec<Column>,
}

impl TryFrom<RawGrid> for ColumnGrid {
	type Error = ShapeError;

	fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
		let mut grid = Self::empty(raw.row_count);
		for column in raw.columns {
			grid.append_column(column)?;
		}
		Ok(grid)
	}
}

impl ColumnGrid {
	/// Creates a grid with no columns and a fixed row count.
	pub fn empty(row_count: usize) -> Self {
		Self { row_count, columns: Vec::new() }
	}

	/// Creates a grid from column-major fragments.
	///
	/// The row count is taken from the first column; an empty list gives an
	/// empty grid with zero rows.
	///
	/// # Errors
	/// `RowCountMismatch` if the columns differ in length.
	pub fn from_columns(columns: Vec<Column>) -> Result<Self, ShapeError> {
		let row_count = columns.first().map_or(0, Vec::len);
		let mut grid = Self::empty(row_count);
		for column in columns {
			grid.append_column(column)?;
		}
		Ok(grid)
	}

	/// Parses a shuffled text using `DEFAULT_DELIMITER`.
	pub fn from_text(text: &str) -> Result<Self, ShapeError> {
		Self::parse(text, DEFAULT_DELIMITER)
	}

	/// Parses a shuffled text into a grid.
	///
	/// # Behavior
	/// - Each non-blank line is a row; blank lines are ignored.
	/// - A row is split on `delimiter`. The empty piece produced by a leading
	///   or trailing delimiter is dropped, so `|th|is|` and `th|is|` both
	///   give `["th", "is"]`.
	/// - Fragments are kept verbatim, spaces included.
	///
	/// # Errors
	/// `RaggedRow` if a row does not have as many fragments as the first one.
	pub fn parse(text: &str, delimiter: char) -> Result<Self, ShapeError> {
		let rows: Vec<Vec<&str>> = text
			.lines()
			.map(|line| line.trim_end_matches('\r'))
			.filter(|line| !line.trim().is_empty())
			.map(|line| split_row(line, delimiter))
			.collect();

		let width = rows.first().map_or(0, Vec::len);
		let mut columns: Vec<Column> = vec![Vec::with_capacity(rows.len()); width];

		for (row_index, row) in rows.iter().enumerate() {
			if row.len() != width {
				return Err(ShapeError::RaggedRow { row: row_index, expected: width, found: row.len() });
			}
			for (column, fragment) in columns.iter_mut().zip(row) {
				column.push((*fragment).to_owned());
			}
		}

		Ok(Self { row_count: rows.len(), columns })
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Read-only view of column `index`.
	pub fn column(&self, index: usize) -> Result<&[String], ShapeError> {
		self.columns
			.get(index)
			.map(Vec::as_slice)
			.ok_or(ShapeError::ColumnOutOfRange { index, len: self.columns.len() })
	}

	/// Adds a column after the last one.
	pub fn append_column(&mut self, column: Column) -> Result<(), ShapeError> {
		self.check_rows(&column)?;
		self.columns.push(column);
		Ok(())
	}

	/// Inserts a column at `index`, shifting later columns right.
	///
	/// `index == column_count()` appends.
	pub fn insert_column(&mut self, index: usize, column: Column) -> Result<(), ShapeError> {
		if index > self.columns.len() {
			return Err(ShapeError::ColumnOutOfRange { index, len: self.columns.len() });
		}
		self.check_rows(&column)?;
		self.columns.insert(index, column);
		Ok(())
	}

	/// Removes and returns column `index`, shifting later columns left.
	pub fn remove_column(&mut self, index: usize) -> Result<Column, ShapeError> {
		if index >= self.columns.len() {
			return Err(ShapeError::ColumnOutOfRange { index, len: self.columns.len() });
		}
		Ok(self.columns.remove(index))
	}

	/// Randomly permutes the columns.
	pub fn shuffle_columns<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		self.columns.shuffle(rng);
	}

	/// Concatenates columns row by row, one `\n`-terminated line per row.
	pub fn to_text(&self) -> String {
		let width: usize = self.columns.iter().filter_map(|c| c.first()).map(String::len).sum();
		let mut text = String::with_capacity((width + 1) * self.row_count);
		for row in 0..self.row_count {
			for column in &self.columns {
				text.push_str(&column[row]);
			}
			text.push('\n');
		}
		text
	}

	/// Renders the grid back to the shuffled-text format (`|th|is|\n`).
	pub fn to_delimited(&self, delimiter: char) -> String {
		let mut text = String::new();
		for row in 0..self.row_count {
			text.push(delimiter);
			for column in &self.columns {
				text.push_str(&column[row]);
				text.push(delimiter);
			}
			text.push('\n');
		}
		text
	}

	fn check_rows(&self, column: &[String]) -> Result<(), ShapeError> {
		if column.len() != self.row_count {
			return Err(ShapeError::RowCountMismatch { expected: self.row_count, found: column.len() });
		}
		Ok(())
	}
}

impl fmt::Display for ColumnGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text())
	}
}

fn split_row(line: &str, delimiter: char) -> Vec<&str> {
	let mut pieces: Vec<&str> = line.split(delimiter).collect();
	if pieces.len() > 1 && pieces.first() == Some(&"") {
		pieces.remove(0);
	}
	if pieces.len() > 1 && pieces.last() == Some(&"") {
		pieces.pop();
	}
	pieces
}
