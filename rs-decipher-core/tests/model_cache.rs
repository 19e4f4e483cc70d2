use std::fs;

use rs_decipher_core::model::cache::{cache_path, load_or_build};
use rs_decipher_core::{Error, LetterBigrams, ModelBuildError, ProbabilisticModel, WordUnigrams};

#[test]
fn builds_then_loads_from_cache() {
	let dir = tempfile::tempdir().unwrap();
	let source = dir.path().join("words.txt");
	fs::write(&source, "Parrot\nministry\n\nwalks\n").unwrap();

	let built: LetterBigrams = load_or_build(&source, |path| LetterBigrams::from_file(path)).unwrap();
	let cache = cache_path(&source).unwrap();
	assert!(cache.exists());
	assert_eq!(cache, dir.path().join("words.bin"));
	assert!(!dir.path().join("words.bin.tmp").exists());

	// The cache wins even once the source is gone.
	fs::remove_file(&source).unwrap();
	let loaded: LetterBigrams = load_or_build(&source, |path| LetterBigrams::from_file(path)).unwrap();

	assert_eq!(loaded.alphabet(), built.alphabet());
	assert_eq!(loaded.frequencies().total_count(), built.frequencies().total_count());
	for bigram in ["pa", "ar", "rr", "ry", "zz"] {
		assert_eq!(loaded.lookup(bigram), built.lookup(bigram));
	}
}

#[test]
fn unigram_cache_keeps_smoothing() {
	let dir = tempfile::tempdir().unwrap();
	let source = dir.path().join("count_1w.txt");
	fs::write(&source, "cheese\t16704436\nshop\t212793848\n").unwrap();

	let build = |path: &std::path::Path| -> Result<WordUnigrams, ModelBuildError> {
		let mut model = WordUnigrams::from_file(path)?;
		model.calculate_probabilities(2.0)?;
		Ok(model)
	};
	let built = load_or_build(&source, build).unwrap();
	let loaded: WordUnigrams = load_or_build(&source, |_| -> Result<WordUnigrams, ModelBuildError> {
		Err(ModelBuildError::EmptyCorpus)
	})
	.unwrap();

	assert_eq!(loaded.frequencies().smoothing(), 2.0);
	assert_eq!(loaded.probability("cheese"), built.probability("cheese"));
	assert_eq!(loaded.lookup("parrot"), built.lookup("parrot"));
}

#[test]
fn missing_corpus_is_a_build_error() {
	let dir = tempfile::tempdir().unwrap();
	let result: Result<WordUnigrams, Error> =
		load_or_build(dir.path().join("missing.txt"), |path| WordUnigrams::from_file(path));

	assert!(matches!(result, Err(Error::ModelBuild(ModelBuildError::Io(_)))));
	assert!(!dir.path().join("missing.bin").exists());
}

#[test]
fn corrupt_cache_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let source = dir.path().join("words.txt");
	fs::write(dir.path().join("words.bin"), [0xff, 0xff, 0xff]).unwrap();

	let result: Result<LetterBigrams, Error> = load_or_build(&source, |path| LetterBigrams::from_file(path));
	assert!(matches!(result, Err(Error::Cache(_))));
}

#[test]
fn stale_partial_write_is_ignored() {
	let dir = tempfile::tempdir().unwrap();
	let source = dir.path().join("words.txt");
	fs::write(&source, "parrot\n").unwrap();
	// Left behind by an interrupted write.
	fs::write(dir.path().join("words.bin.tmp"), [0xff]).unwrap();

	let built: LetterBigrams = load_or_build(&source, |path| LetterBigrams::from_file(path)).unwrap();
	let loaded: LetterBigrams = load_or_build(&source, |path| LetterBigrams::from_file(path)).unwrap();

	assert_eq!(loaded.lookup("pa"), built.lookup("pa"));
	assert!(!dir.path().join("words.bin.tmp").exists());
}
