//! Configuration error types.
//!
//! This module defines the error types that can occur while loading and
//! validating reference data files.

use std::path::Path;
use thiserror::Error;
use tracing::error;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A file was read and parsed but its contents are not acceptable
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// A file is not valid JSON for the expected shape
	#[error("Parse error: {0}")]
	ParseError(String),

	/// File system error during configuration loading
	#[error("File error: {0}")]
	FileError(String),
}

impl ConfigError {
	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!(%error, "configuration rejected");
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!(%error, "configuration rejected");
		error
	}

	/// Create a new file error and log it
	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!(%error, "configuration rejected");
		error
	}

	/// Prefix the message with the file it came from
	pub fn in_file(self, path: &Path) -> Self {
		let located = |msg: String| format!("{}: {}", path.display(), msg);
		match self {
			Self::ValidationError(msg) => Self::ValidationError(located(msg)),
			Self::ParseError(msg) => Self::ParseError(located(msg)),
			Self::FileError(msg) => Self::FileError(located(msg)),
		}
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
