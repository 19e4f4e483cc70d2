//! Column-shuffled texts and their reconstruction.

/// Grid of fixed-width fragments stored column by column.
pub mod column_grid;

/// Greedy column-order search driven by a word-unigram model.
pub mod reconstructor;
