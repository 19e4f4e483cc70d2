use thiserror::Error;

/// Failures while building or rescoring a frequency model.
#[derive(Error, Debug)]
pub enum ModelBuildError {
	/// The corpus has no entries, or none of them yields a countable n-gram.
	#[error("corpus is empty or yields no n-grams")]
	EmptyCorpus,

	/// Smoothing constant is negative, NaN or infinite.
	#[error("smoothing constant must be finite and >= 0, got {0}")]
	InvalidSmoothing(f64),

	/// A word-count line could not be parsed.
	#[error("malformed corpus line {line}: {content:?}")]
	MalformedLine { line: usize, content: String },

	/// Propagated I/O error while reading a corpus.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Grid shape violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
	/// A column does not have the grid's row count.
	#[error("column has {found} rows, grid expects {expected}")]
	RowCountMismatch { expected: usize, found: usize },

	/// A text row does not split into the same number of fragments as the first row.
	#[error("row {row} has {found} fragments, expected {expected}")]
	RaggedRow { row: usize, expected: usize, found: usize },

	#[error("column {index} out of range (grid has {len} columns)")]
	ColumnOutOfRange { index: usize, len: usize },
}

/// Invalid cipher alphabets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
	#[error("alphabet is empty")]
	Empty,

	#[error("alphabet contains '{0}' more than once")]
	Duplicate(char),
}

/// Umbrella error for the corpus, cache and binary layers.
#[derive(Error, Debug)]
pub enum Error {
	#[error("model build error: {0}")]
	ModelBuild(#[from] ModelBuildError),

	#[error("shape error: {0}")]
	Shape(#[from] ShapeError),

	#[error("alphabet error: {0}")]
	Alphabet(#[from] AlphabetError),

	/// Model cache could not be encoded or decoded.
	#[error("cache error: {0}")]
	Cache(#[from] postcard::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
