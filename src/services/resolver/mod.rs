//! Event category resolver service.
//!
//! - `tables`: the built-in category mapping and category details tables
//! - `service`: the resolver operations and startup validation
//! - `export`: serializable snapshot of the tables
//! - `error`: resolver error types

mod error;
mod export;
mod service;
mod tables;

pub use error::ResolverError;
pub use export::{CategoryDetailsExport, TypeMappings, DEFAULT_DETAILS_KEY};
pub use service::{EventCategoryResolver, ResolvedEvent};
pub use tables::{
	accounting_event_icon, CategoryDetailsTable, CategoryMapping, CategoryPresentation,
	SubtypeMapping, CATEGORY_MAPPING_TABLE, EVENT_CATEGORY_DETAILS, EVENT_CATEGORY_MAPPINGS,
};
