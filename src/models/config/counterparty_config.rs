use std::path::Path;

use tracing::warn;

use crate::{
	models::{ConfigLoader, Counterparty},
	utils::constants::DEFAULT_COUNTERPARTIES_DIR,
};

use super::error::ConfigError;

/// Characters allowed in a counterparty identifier besides ASCII alphanumerics
const IDENTIFIER_PUNCTUATION: [char; 3] = ['_', '-', '.'];

impl ConfigLoader for Counterparty {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let counterparty_dir = path.unwrap_or(Path::new(DEFAULT_COUNTERPARTIES_DIR));
		let mut pairs = Vec::new();

		if !counterparty_dir.is_dir() {
			return Err(ConfigError::file_error(format!(
				"counterparties directory not found: {}",
				counterparty_dir.display()
			)));
		}

		let mut paths = std::fs::read_dir(counterparty_dir)?
			.map(|entry| entry.map(|e| e.path()))
			.collect::<Result<Vec<_>, _>>()?;
		// Directory order is platform dependent; later files win on duplicate ids
		paths.sort();

		for path in paths {
			if !Self::is_json_file(&path) {
				continue;
			}

			match Self::load_from_path(&path) {
				Ok(counterparty) => {
					pairs.push((counterparty.identifier.to_lowercase(), counterparty));
				}
				Err(e) => {
					warn!(path = %path.display(), error = %e, "skipping counterparty file");
				}
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path).map_err(|e| ConfigError::from(e).in_file(path))?;
		let config: Counterparty =
			serde_json::from_reader(file).map_err(|e| ConfigError::from(e).in_file(path))?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error).in_file(path));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.identifier.is_empty() {
			return Err("Counterparty identifier must not be empty".to_string());
		}

		if !self
			.identifier
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || IDENTIFIER_PUNCTUATION.contains(&c))
		{
			return Err(format!(
				"Counterparty identifier '{}' must contain only letters, numbers, '_', '-' and '.'",
				self.identifier
			));
		}

		if self.label.trim().is_empty() {
			return Err(format!(
				"Counterparty '{}' must have a non-empty label",
				self.identifier
			));
		}

		if self.image.as_deref().is_some_and(|image| image.trim().is_empty()) {
			return Err(format!(
				"Counterparty '{}' has an empty image reference",
				self.identifier
			));
		}

		if self.icon.as_deref().is_some_and(|icon| icon.trim().is_empty()) {
			return Err(format!(
				"Counterparty '{}' has an empty icon reference",
				self.identifier
			));
		}

		Ok(())
	}
}
