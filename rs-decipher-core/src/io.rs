use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds a sibling path with a new extension.
///
/// Example:
/// `data/count_1w.txt` + `"bin"` → `data/count_1w.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Writes `data` to a sibling temporary file, then renames it over `path`.
///
/// Readers see either the previous file or the complete new one, never a
/// truncated write.
pub(crate) fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
	let path = path.as_ref();
	let mut temp_path = path.as_os_str().to_owned();
	temp_path.push(".tmp");
	let temp_path = PathBuf::from(temp_path);

	let mut file = File::create(&temp_path)?;
	file.write_all(data)?;
	file.sync_all()?;
	drop(file);

	fs::rename(&temp_path, path)
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns file names only (no paths).
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
