//! Core services.
//!
//! - `resolver`: classifies ledger events into display categories and
//!   resolves their presentation details

pub mod resolver;
