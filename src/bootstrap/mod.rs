//! Bootstrap module for initializing services.
//!
//! Builds the counterparty registry and the event category resolver once at
//! startup and validates the classification tables before anything is served.
//! A table problem is reported here rather than on individual lookups.

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use tracing::{info, instrument};

use crate::{
	repositories::{CounterpartyRepository, CounterpartyRepositoryTrait, CounterpartyService},
	services::resolver::{EventCategoryResolver, ResolverError},
	utils::constants::COUNTERPARTIES_PATH_ENV,
};

/// Type alias for bootstrap results
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Counterparties directory from the environment, if set and non-empty
pub fn counterparties_path_from_env() -> Option<PathBuf> {
	std::env::var_os(COUNTERPARTIES_PATH_ENV)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Initializes the resolver over the default counterparty repository.
///
/// # Arguments
/// * `counterparties_path` - Directory of counterparty JSON files; the default
///   directory is used when `None`
///
/// # Errors
/// Returns an error if the counterparty directory cannot be loaded or the
/// classification tables fail validation
#[instrument(skip_all)]
pub fn initialize_services(
	counterparties_path: Option<&Path>,
) -> Result<Arc<EventCategoryResolver<CounterpartyRepository>>> {
	let counterparty_service =
		CounterpartyService::<CounterpartyRepository>::new(counterparties_path)?;
	initialize_services_with(counterparty_service)
}

/// Initializes the resolver over a caller-provided counterparty service.
///
/// # Errors
/// Returns an error if the classification tables fail validation
pub fn initialize_services_with<T: CounterpartyRepositoryTrait>(
	counterparty_service: CounterpartyService<T>,
) -> Result<Arc<EventCategoryResolver<T>>> {
	let resolver = EventCategoryResolver::new(counterparty_service);
	resolver.validate()?;

	info!(
		combinations = resolver.mapped_combinations().len(),
		counterparties = resolver.counterparties().get_all().len(),
		"event category resolver initialized"
	);
	Ok(Arc::new(resolver))
}
