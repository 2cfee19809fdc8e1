//! Resolver error types.

use thiserror::Error;

use crate::{
	models::{EventCategory, EventSubtype, EventType},
	repositories::RepositoryError,
};

/// Errors returned by the event category resolver
///
/// Lookup misses are recoverable and left to the caller's policy;
/// `Validation` means the tables themselves are inconsistent.
#[derive(Debug, Error)]
pub enum ResolverError {
	/// The (type, subtype) pair has no entry in the category mapping
	#[error("No category mapped for event type '{event_type}' with subtype '{event_subtype}'")]
	UnmappedEventCombination {
		event_type: EventType,
		event_subtype: EventSubtype,
	},

	/// The category has no details entry
	#[error("No details registered for event category '{0}'")]
	UnknownCategory(EventCategory),

	/// The identifier is not in the counterparty registry
	#[error("Unknown counterparty '{0}'")]
	UnknownCounterparty(String),

	/// Startup validation found problems in the tables
	#[error("Category tables are inconsistent: {}", .0.join("; "))]
	Validation(Vec<String>),

	#[error(transparent)]
	Repository(#[from] RepositoryError),
}
