//! Counterparty registry.
//!
//! The registry starts from the built-in counterparties the classification
//! tables depend on (the network gas counterparty) and adds every valid JSON
//! file found in the counterparties directory. Entries may be registered at
//! runtime: a writer builds a new map and swaps it in whole, so readers only
//! ever see complete snapshots.

use std::{
	collections::HashMap,
	path::Path,
	sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, info};

use crate::{
	models::{ConfigLoader, Counterparty},
	repositories::error::RepositoryError,
	utils::constants::{CPT_GAS, DEFAULT_COUNTERPARTIES_DIR},
};

type Snapshot = Arc<HashMap<String, Counterparty>>;

/// Counterparties every registry contains regardless of configuration
pub fn builtin_counterparties() -> Vec<Counterparty> {
	vec![Counterparty::new(CPT_GAS, "Gas").with_icon("fire-line")]
}

/// Registry keys are case-insensitive
fn registry_key(identifier: &str) -> String {
	identifier.to_lowercase()
}

/// Repository for storing and retrieving counterparties
#[derive(Debug)]
pub struct CounterpartyRepository {
	counterparties: RwLock<Snapshot>,
}

impl CounterpartyRepository {
	/// Create a new counterparty repository from the given path
	///
	/// With an explicit path the directory must exist. Without one, the default
	/// directory is used when present and the built-in entries otherwise.
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let loaded = match path {
			Some(path) => Self::load_all(Some(path))?,
			None if Path::new(DEFAULT_COUNTERPARTIES_DIR).is_dir() => Self::load_all(None)?,
			None => {
				debug!(
					dir = DEFAULT_COUNTERPARTIES_DIR,
					"no counterparties directory, using built-in counterparties only"
				);
				HashMap::new()
			}
		};

		let mut counterparties: HashMap<String, Counterparty> = builtin_counterparties()
			.into_iter()
			.map(|c| (registry_key(&c.identifier), c))
			.collect();
		let loaded_count = loaded.len();
		counterparties.extend(loaded);

		info!(
			loaded = loaded_count,
			total = counterparties.len(),
			"counterparty registry ready"
		);
		Ok(Self::from_map(counterparties))
	}

	/// Build a repository holding exactly the given counterparties
	pub fn from_counterparties(counterparties: impl IntoIterator<Item = Counterparty>) -> Self {
		Self::from_map(
			counterparties
				.into_iter()
				.map(|c| (registry_key(&c.identifier), c))
				.collect(),
		)
	}

	fn from_map(counterparties: HashMap<String, Counterparty>) -> Self {
		Self {
			counterparties: RwLock::new(Arc::new(counterparties)),
		}
	}

	/// Load all counterparty definitions from the given directory
	pub fn load_all(path: Option<&Path>) -> Result<HashMap<String, Counterparty>, RepositoryError> {
		Counterparty::load_all(path).map_err(|e| {
			RepositoryError::load_error(format!("Failed to load counterparties: {}", e))
		})
	}

	/// Current snapshot of the registry
	///
	/// The returned map never changes; later registrations produce a new one.
	pub fn snapshot(&self) -> Snapshot {
		// A writer that panicked never swapped in a partial map, so the
		// guarded value is still a complete snapshot.
		self.counterparties
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}
}

/// Interface for counterparty repository implementations
pub trait CounterpartyRepositoryTrait: Send + Sync {
	/// Get a counterparty by identifier (case-insensitive)
	fn get(&self, identifier: &str) -> Option<Counterparty>;

	/// Get all counterparties, keyed by lowercased identifier
	fn get_all(&self) -> HashMap<String, Counterparty>;

	/// Add a counterparty to the registry
	///
	/// Fails if the counterparty is invalid or its identifier is taken.
	fn register(&self, counterparty: Counterparty) -> Result<(), RepositoryError>;
}

impl CounterpartyRepositoryTrait for CounterpartyRepository {
	fn get(&self, identifier: &str) -> Option<Counterparty> {
		self.snapshot().get(&registry_key(identifier)).cloned()
	}

	fn get_all(&self) -> HashMap<String, Counterparty> {
		self.snapshot().as_ref().clone()
	}

	fn register(&self, counterparty: Counterparty) -> Result<(), RepositoryError> {
		counterparty
			.validate()
			.map_err(RepositoryError::validation_error)?;

		let key = registry_key(&counterparty.identifier);
		let mut guard = self
			.counterparties
			.write()
			.unwrap_or_else(PoisonError::into_inner);

		if guard.contains_key(&key) {
			return Err(RepositoryError::validation_error(format!(
				"Counterparty '{}' is already registered",
				counterparty.identifier
			)));
		}

		let mut next = guard.as_ref().clone();
		debug!(identifier = %counterparty.identifier, "registering counterparty");
		next.insert(key, counterparty);
		*guard = Arc::new(next);
		Ok(())
	}
}

/// Service layer for counterparty repository operations
pub struct CounterpartyService<T: CounterpartyRepositoryTrait> {
	repository: T,
}

impl<T: CounterpartyRepositoryTrait> CounterpartyService<T> {
	/// Create a new counterparty service with the default repository implementation
	pub fn new(
		path: Option<&Path>,
	) -> Result<CounterpartyService<CounterpartyRepository>, RepositoryError> {
		let repository = CounterpartyRepository::new(path)?;
		Ok(CounterpartyService { repository })
	}

	/// Create a new counterparty service with a custom repository implementation
	pub fn new_with_repository(repository: T) -> Self {
		CounterpartyService { repository }
	}

	pub fn get(&self, identifier: &str) -> Option<Counterparty> {
		self.repository.get(identifier)
	}

	pub fn get_all(&self) -> HashMap<String, Counterparty> {
		self.repository.get_all()
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.repository.get(identifier).is_some()
	}

	pub fn register(&self, counterparty: Counterparty) -> Result<(), RepositoryError> {
		self.repository.register(counterparty)
	}
}
