//! Error types for repository operations.
//!
//! Covers loading reference data into a repository and runtime registration
//! of new entries.

use thiserror::Error;
use tracing::error;

use crate::models::ConfigError;

/// Errors that can occur during repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
	/// An entry was rejected (invalid fields, duplicate identifier)
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// Loading entries from configuration files failed
	#[error("Load error: {0}")]
	LoadError(String),
}

impl RepositoryError {
	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!(%error, "repository operation failed");
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!(%error, "repository operation failed");
		error
	}
}

impl From<ConfigError> for RepositoryError {
	fn from(err: ConfigError) -> Self {
		match err {
			ConfigError::ValidationError(msg) => Self::validation_error(msg),
			other => Self::load_error(other.to_string()),
		}
	}
}
