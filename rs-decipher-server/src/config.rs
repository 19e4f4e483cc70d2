use std::env;
use std::path::PathBuf;

use rs_decipher_core::model::DEFAULT_SMOOTHING;

/// Server settings, read from `RS_DECIPHER_*` environment variables.
///
/// | Variable                | Default     |
/// |-------------------------|-------------|
/// | `RS_DECIPHER_DATA`      | `./data`    |
/// | `RS_DECIPHER_HOST`      | `127.0.0.1` |
/// | `RS_DECIPHER_PORT`      | `5000`      |
/// | `RS_DECIPHER_SMOOTHING` | `1.0`       |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	/// Folder holding `sowpods.txt`, `count_1w.txt` and their `.bin` caches.
	pub data_dir: PathBuf,
	pub host: String,
	pub port: u16,
	smoothing: f64,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			data_dir: PathBuf::from("./data"),
			host: "127.0.0.1".to_owned(),
			port: 5000,
			smoothing: DEFAULT_SMOOTHING,
		}
	}
}

impl ServerConfig {
	pub fn from_env() -> Result<Self, String> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds the configuration from any key/value source.
	pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
		let mut config = Self::default();

		if let Some(data_dir) = lookup("RS_DECIPHER_DATA") {
			config.data_dir = PathBuf::from(data_dir);
		}
		if let Some(host) = lookup("RS_DECIPHER_HOST") {
			config.host = host;
		}
		if let Some(port) = lookup("RS_DECIPHER_PORT") {
			config.port = port
				.parse()
				.map_err(|_| format!("RS_DECIPHER_PORT must be a port number, got {port:?}"))?;
		}
		if let Some(smoothing) = lookup("RS_DECIPHER_SMOOTHING") {
			let k = smoothing
				.parse()
				.map_err(|_| format!("RS_DECIPHER_SMOOTHING must be a number, got {smoothing:?}"))?;
			config.set_smoothing(k)?;
		}

		Ok(config)
	}

	pub fn smoothing(&self) -> f64 {
		self.smoothing
	}

	/// Sets the smoothing constant (finite, >= 0).
	pub fn set_smoothing(&mut self, smoothing: f64) -> Result<(), String> {
		if !smoothing.is_finite() || smoothing < 0.0 {
			return Err(format!("Smoothing must be finite and >= 0, got {smoothing}"));
		}
		self.smoothing = smoothing;
		Ok(())
	}

	pub fn words_path(&self) -> PathBuf {
		self.data_dir.join("sowpods.txt")
	}

	pub fn counts_path(&self) -> PathBuf {
		self.data_dir.join("count_1w.txt")
	}
}
