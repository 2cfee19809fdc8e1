//! Serializable snapshot of the classification tables.
//!
//! Presentation clients fetch the tables once and resolve events locally. The
//! layout keys default details by the string `"null"` and overrides by
//! counterparty identifier, so a client can look up
//! `counterparty_mappings[counterparty ?? "null"]`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
	models::{
		AccountingEventType, CategoryDetails, EventCategory, EventDirection, EventSubtype,
		EventType,
	},
	repositories::CounterpartyRepositoryTrait,
	services::resolver::EventCategoryResolver,
};

/// Key used for the default (no counterparty) details
pub const DEFAULT_DETAILS_KEY: &str = "null";

/// Details of one category as exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetailsExport {
	pub direction: EventDirection,
	pub counterparty_mappings: BTreeMap<String, CategoryDetails>,
}

/// Every classification table in one serializable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMappings {
	pub global_mappings: BTreeMap<EventType, BTreeMap<EventSubtype, EventCategory>>,
	pub event_category_details: BTreeMap<EventCategory, CategoryDetailsExport>,
	pub accounting_events_icons: BTreeMap<AccountingEventType, String>,
}

impl<T: CounterpartyRepositoryTrait> EventCategoryResolver<T> {
	/// Snapshot the tables for serialization
	pub fn export(&self) -> TypeMappings {
		let global_mappings = self
			.category_mappings()
			.iter()
			.map(|(event_type, subtypes)| {
				(
					*event_type,
					subtypes.iter().map(|(s, c)| (*s, *c)).collect(),
				)
			})
			.collect();

		let event_category_details = self
			.category_details()
			.iter()
			.map(|(category, presentation)| {
				let mut counterparty_mappings: BTreeMap<String, CategoryDetails> = presentation
					.overrides
					.iter()
					.map(|(counterparty, details)| (counterparty.clone(), details.clone()))
					.collect();
				counterparty_mappings
					.insert(DEFAULT_DETAILS_KEY.to_string(), presentation.default.clone());
				(
					*category,
					CategoryDetailsExport {
						direction: self.category_direction(*category),
						counterparty_mappings,
					},
				)
			})
			.collect();

		let accounting_events_icons = AccountingEventType::ALL
			.iter()
			.map(|event_type| {
				(
					*event_type,
					self.accounting_event_icon(*event_type).to_string(),
				)
			})
			.collect();

		TypeMappings {
			global_mappings,
			event_category_details,
			accounting_events_icons,
		}
	}
}
