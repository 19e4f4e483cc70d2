use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::io::{build_output_path, write_atomic};

/// Path of the binary cache for a corpus file (`words.txt` → `words.bin`).
pub fn cache_path<P: AsRef<Path>>(source: P) -> Result<PathBuf, Error> {
	Ok(build_output_path(source, "bin")?)
}

/// Loads a model from its binary cache if one exists,
/// otherwise builds it from `source` and writes the cache.
///
/// - The cache sits next to `source`, with a `.bin` extension.
/// - Uses `postcard` for compact serialization/deserialization.
/// - The cache is written to `<name>.bin.tmp` first and renamed into place,
///   so an interrupted write never leaves a truncated `.bin` behind.
/// - The cache is never invalidated: delete the `.bin` file after editing the corpus.
pub fn load_or_build<M, P, F, E>(source: P, build: F) -> Result<M, Error>
where
	M: Serialize + DeserializeOwned,
	P: AsRef<Path>,
	F: FnOnce(&Path) -> Result<M, E>,
	Error: From<E>,
{
	let source = source.as_ref();
	let binary_data_path = cache_path(source)?;

	if binary_data_path.exists() {
		log::debug!("Loading cached model from {}", binary_data_path.display());
		let bytes = std::fs::read(&binary_data_path)?;
		return Ok(postcard::from_bytes(&bytes)?);
	}

	let model = build(source)?;
	let bytes = postcard::to_stdvec(&model)?;
	write_atomic(&binary_data_path, &bytes)?;
	log::debug!("Cached model to {}", binary_data_path.display());

	Ok(model)
}
