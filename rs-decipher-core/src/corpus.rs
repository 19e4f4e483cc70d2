use std::path::Path;

use crate::error::ModelBuildError;
use crate::io;

/// Reads a word list, one word per line.
///
/// Words are lower-cased and right-trimmed; blank lines are skipped.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ModelBuildError> {
	let words = io::read_file(path)?
		.into_iter()
		.map(|line| line.trim_end().to_lowercase())
		.filter(|word| !word.is_empty())
		.collect();
	Ok(words)
}

/// Reads a word-count table.
///
/// Each non-blank line holds a word and its count separated by whitespace
/// (`the\t23135851162`). Line numbers in errors are 1-based.
pub fn read_word_counts<P: AsRef<Path>>(path: P) -> Result<Vec<(String, u64)>, ModelBuildError> {
	parse_word_counts(&io::read_file(path)?)
}

pub(crate) fn parse_word_counts(lines: &[String]) -> Result<Vec<(String, u64)>, ModelBuildError> {
	let mut counts = Vec::with_capacity(lines.len());

	for (index, line) in lines.iter().enumerate() {
		if line.trim().is_empty() {
			continue;
		}

		let malformed = || ModelBuildError::MalformedLine { line: index + 1, content: line.clone() };
		let mut fields = line.split_whitespace();
		let (Some(word), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
			return Err(malformed());
		};
		let count = count.parse::<u64>().map_err(|_| malformed())?;

		counts.push((word.to_lowercase(), count));
	}

	Ok(counts)
}

/// Names of the `.txt` corpora available in a folder, without the extension.
pub fn list_corpora<P: AsRef<Path>>(dir: P) -> std::io::Result<Vec<String>> {
	let files = io::list_files(dir, "txt")?;
	Ok(files
		.iter()
		.filter_map(|name| Path::new(name).file_stem())
		.map(|stem| stem.to_string_lossy().into_owned())
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lines(text: &str) -> Vec<String> {
		text.lines().map(str::to_owned).collect()
	}

	#[test]
	fn parses_tab_separated_counts() {
		let counts = parse_word_counts(&lines("the\t23135851162\nOf 13151942776\n\n")).unwrap();
		assert_eq!(
			counts,
			vec![("the".to_owned(), 23135851162), ("of".to_owned(), 13151942776)]
		);
	}

	#[test]
	fn rejects_missing_count() {
		match parse_word_counts(&lines("the\t1\nparrot\n")) {
			Err(ModelBuildError::MalformedLine { line, content }) => {
				assert_eq!(line, 2);
				assert_eq!(content, "parrot");
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn rejects_non_numeric_count() {
		assert!(matches!(
			parse_word_counts(&lines("cheese lots")),
			Err(ModelBuildError::MalformedLine { line: 1, .. })
		));
	}

	#[test]
	fn rejects_extra_fields() {
		assert!(matches!(
			parse_word_counts(&lines("dead parrot 3")),
			Err(ModelBuildError::MalformedLine { line: 1, .. })
		));
	}

	#[test]
	fn corpora_are_listed_by_name() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["sowpods.txt", "count_1w.txt", "notes.txt.old.txt", "sowpods.bin"] {
			std::fs::write(dir.path().join(name), "the\t1\n").unwrap();
		}

		let corpora = list_corpora(dir.path()).unwrap();
		assert_eq!(corpora, ["count_1w", "notes.txt.old", "sowpods"]);
	}
}
