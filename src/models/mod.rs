//! Domain models and data structures for ledger event classification.
//!
//! - `config`: Loading and validation of reference data files
//! - `core`: Event tags, category details, counterparties

mod config;
mod core;

pub use core::{
	AccountingEventType, CategoryColor, CategoryDetails, Counterparty, EventCategory,
	EventDirection, EventSubtype, EventType, ParseTagError,
};

pub use config::{ConfigError, ConfigLoader};
