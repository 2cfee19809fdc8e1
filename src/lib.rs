//! Ledger event category resolution.
//!
//! Translates the (event type, event subtype) tags a decoder attaches to a
//! ledger entry into a display category, and resolves the label, icon and
//! color shown for that category, optionally specialised for a counterparty.
//!
//! # Architecture
//! - `models`: event tags, category details, counterparties, config loading
//! - `repositories`: the counterparty registry
//! - `services`: the event category resolver and its built-in tables
//! - `bootstrap`: one-time construction and validation at startup
//! - `utils`: logging and shared constants
//!
//! # Example
//! ```no_run
//! use event_category_resolver::{
//! 	bootstrap::initialize_services,
//! 	models::{EventSubtype, EventType},
//! };
//!
//! let resolver = initialize_services(None)?;
//! let event = resolver.resolve_event(EventType::Spend, EventSubtype::Fee, Some("gas"))?;
//! assert_eq!(event.details.label, "gas fee");
//! # Ok::<(), event_category_resolver::services::resolver::ResolverError>(())
//! ```

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
