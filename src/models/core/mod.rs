//! Core domain models for ledger event classification.
//!
//! This module contains the fundamental data structures that represent:
//! - Event tags: the type/subtype pair attached to a ledger entry and the
//!   display category derived from it
//! - Category details: label, icon and color shown for a category
//! - Counterparties: external entities referenced by ledger entries
//! - Accounting event types: the event kinds of the PnL pipeline

mod accounting;
mod counterparty;
mod details;
mod event;

pub use accounting::AccountingEventType;
pub use counterparty::Counterparty;
pub use details::{CategoryColor, CategoryDetails};
pub use event::{EventCategory, EventDirection, EventSubtype, EventType, ParseTagError};
