//! Repositories for reference data.
//!
//! A repository owns the in-memory copy of one kind of reference data and
//! hides where it came from. Services wrap a repository behind its trait so
//! callers can substitute their own implementation.

mod counterparty;
mod error;

pub use counterparty::{
	builtin_counterparties, CounterpartyRepository, CounterpartyRepositoryTrait,
	CounterpartyService,
};
pub use error::RepositoryError;
