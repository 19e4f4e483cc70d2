use std::path::PathBuf;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_decipher_core::corpus::read_word_counts;
use rs_decipher_core::{
	build_unigram_model, reconstruct_columns, ColumnGrid, StartFilter, TextReconstructor, WordUnigrams,
};

const EXPECTED: &str = "this is a \ntest for  \nthis class\n";

const SHUFFLED: &str = "
|is|a |s | i|th|
|st|  |or| f|te|
|is|ss|la| c|th|
";

fn counts_path() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/count_1w.txt")
}

fn unigrams() -> WordUnigrams {
	WordUnigrams::from_file(counts_path()).unwrap()
}

#[test]
fn most_probable() {
	let grid = ColumnGrid::from_text(SHUFFLED).unwrap();
	let results = reconstruct_columns(&grid, &unigrams()).unwrap();

	assert_eq!(results.len(), 5);
	assert_eq!(results[0].text, EXPECTED);
	assert_eq!(results[0].origin, 4);
	assert!(results[0].score > results[1].score);

	// Columns 1 (`a `/`  `) and 3 (` i`) open with a space: not searched.
	assert_eq!(results[3].origin, 1);
	assert_eq!(results[4].origin, 3);
	assert!(results[3..].iter().all(|c| c.score == f64::NEG_INFINITY));
	assert!(results[..3].iter().all(|c| c.score.is_finite()));
}

#[test]
fn reconstruction_is_deterministic() {
	let grid = ColumnGrid::from_text(SHUFFLED).unwrap();
	let model = unigrams();

	let first = reconstruct_columns(&grid, &model).unwrap();
	for _ in 0..3 {
		assert_eq!(reconstruct_columns(&grid, &model).unwrap(), first);
	}
}

#[test]
fn accept_all_still_finds_the_text() {
	let grid = ColumnGrid::from_text(SHUFFLED).unwrap();
	let model = unigrams();
	let results = TextReconstructor::new(&model)
		.with_start_filter(StartFilter::AcceptAll)
		.reconstruct(&grid)
		.unwrap();

	assert_eq!(results.len(), 5);
	assert!(results.iter().all(|c| c.score.is_finite()));
	assert_eq!(results[0].text, EXPECTED);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(24))]

	#[test]
	fn any_column_order_reconstructs(seed in any::<u64>()) {
		let mut grid = ColumnGrid::from_text("th|is| i|s |a |\nte|st| f|or|  |\nth|is| c|la|ss|\n").unwrap();
		grid.shuffle_columns(&mut StdRng::seed_from_u64(seed));

		let results = reconstruct_columns(&grid, &unigrams()).unwrap();
		prop_assert_eq!(&results[0].text, EXPECTED);
	}

	// Only the most frequent words carry exact counts; the result must not
	// hinge on how often the rarer ones occur.
	#[test]
	fn rare_word_counts_do_not_decide(
		c in 100u64..3_000_000_000,
		f in 100u64..3_000_000_000,
		test in 100u64..3_000_000_000,
		class in 100u64..3_000_000_000
	) {
		let counts = read_word_counts(counts_path()).unwrap().into_iter().map(|(word, count)| {
			let count = match word.as_str() {
				"c" => c,
				"f" => f,
				"test" => test,
				"class" => class,
				_ => count,
			};
			(word, count)
		});
		let model = build_unigram_model(counts).unwrap();

		let grid = ColumnGrid::from_text(SHUFFLED).unwrap();
		let results = reconstruct_columns(&grid, &model).unwrap();
		prop_assert_eq!(&results[0].text, EXPECTED);
	}
}
