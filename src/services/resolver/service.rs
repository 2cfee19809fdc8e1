//! Event category resolver.
//!
//! Resolves the (event type, event subtype, counterparty) triple of a ledger
//! entry into a display category and its presentation details. All lookups
//! are pure reads of tables that are fixed once the resolver is built.

use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
	models::{
		AccountingEventType, CategoryColor, CategoryDetails, Counterparty, EventCategory,
		EventDirection, EventSubtype, EventType,
	},
	repositories::{CounterpartyRepository, CounterpartyRepositoryTrait, CounterpartyService},
	services::resolver::{
		error::ResolverError,
		tables::{
			accounting_event_icon, CategoryDetailsTable, CategoryMapping, CATEGORY_MAPPING_TABLE,
			EVENT_CATEGORY_DETAILS, EVENT_CATEGORY_MAPPINGS,
		},
	},
	utils::constants::UNKNOWN_ICON,
};

/// Fully resolved presentation of a single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
	/// Counterparty id when one was given, the category name otherwise, empty
	/// for the unknown placeholder
	pub identifier: String,
	/// `None` only for the unknown placeholder
	pub category: Option<EventCategory>,
	pub direction: EventDirection,
	#[serde(flatten)]
	pub details: CategoryDetails,
}

impl ResolvedEvent {
	/// Placeholder shown for entries the tables cannot classify
	///
	/// The label is the subtype tag, `none` included.
	pub fn unknown(event_subtype: EventSubtype) -> Self {
		let label = event_subtype.as_str();
		Self {
			identifier: String::new(),
			category: None,
			direction: EventDirection::Neutral,
			details: CategoryDetails::new(label, UNKNOWN_ICON).with_color(CategoryColor::Error),
		}
	}
}

/// Resolves event tags into categories and presentation details
pub struct EventCategoryResolver<T: CounterpartyRepositoryTrait = CounterpartyRepository> {
	mappings: Arc<CategoryMapping>,
	details: Arc<CategoryDetailsTable>,
	counterparties: CounterpartyService<T>,
}

impl<T: CounterpartyRepositoryTrait> EventCategoryResolver<T> {
	/// Create a resolver over the built-in tables
	pub fn new(counterparties: CounterpartyService<T>) -> Self {
		Self::with_tables(
			EVENT_CATEGORY_MAPPINGS.clone(),
			EVENT_CATEGORY_DETAILS.clone(),
			counterparties,
		)
	}

	/// Create a resolver over custom tables
	pub fn with_tables(
		mappings: Arc<CategoryMapping>,
		details: Arc<CategoryDetailsTable>,
		counterparties: CounterpartyService<T>,
	) -> Self {
		Self {
			mappings,
			details,
			counterparties,
		}
	}

	pub fn counterparties(&self) -> &CounterpartyService<T> {
		&self.counterparties
	}

	pub fn category_mappings(&self) -> &CategoryMapping {
		&self.mappings
	}

	pub fn category_details(&self) -> &CategoryDetailsTable {
		&self.details
	}

	/// Category for an (event type, event subtype) pair
	pub fn resolve_category(
		&self,
		event_type: EventType,
		event_subtype: EventSubtype,
	) -> Result<EventCategory, ResolverError> {
		self.mappings
			.get(&event_type)
			.and_then(|subtypes| subtypes.get(&event_subtype))
			.copied()
			.ok_or(ResolverError::UnmappedEventCombination {
				event_type,
				event_subtype,
			})
	}

	/// Details for a category, with the counterparty override when one exists
	///
	/// An unknown or absent counterparty falls back to the category default.
	pub fn resolve_details(
		&self,
		category: EventCategory,
		counterparty: Option<&str>,
	) -> Result<CategoryDetails, ResolverError> {
		let presentation = self
			.details
			.get(&category)
			.ok_or(ResolverError::UnknownCategory(category))?;
		Ok(presentation.select(counterparty).clone())
	}

	/// Registered counterparty for an identifier
	pub fn lookup_counterparty(&self, identifier: &str) -> Result<Counterparty, ResolverError> {
		self.counterparties
			.get(identifier)
			.ok_or_else(|| ResolverError::UnknownCounterparty(identifier.to_string()))
	}

	/// Registered counterparty, or a placeholder labelled with the identifier
	pub fn counterparty_or_placeholder(&self, identifier: &str) -> Counterparty {
		self.lookup_counterparty(identifier).unwrap_or_else(|_| {
			debug!(identifier, "unknown counterparty, using placeholder");
			Counterparty::new(identifier, identifier).with_icon(UNKNOWN_ICON)
		})
	}

	/// Category, direction and details for a ledger entry
	pub fn resolve_event(
		&self,
		event_type: EventType,
		event_subtype: EventSubtype,
		counterparty: Option<&str>,
	) -> Result<ResolvedEvent, ResolverError> {
		let category = self.resolve_category(event_type, event_subtype)?;
		let presentation = self
			.details
			.get(&category)
			.ok_or(ResolverError::UnknownCategory(category))?;

		Ok(ResolvedEvent {
			identifier: counterparty.unwrap_or(category.as_str()).to_string(),
			category: Some(category),
			direction: self.category_direction(category),
			details: presentation.select(counterparty).clone(),
		})
	}

	/// Like `resolve_event`, but unresolvable entries get the unknown placeholder
	#[instrument(skip(self), level = "debug")]
	pub fn describe_event(
		&self,
		event_type: EventType,
		event_subtype: EventSubtype,
		counterparty: Option<&str>,
	) -> ResolvedEvent {
		match self.resolve_event(event_type, event_subtype, counterparty) {
			Ok(resolved) => resolved,
			Err(error) => {
				warn!(%error, "falling back to unknown event presentation");
				ResolvedEvent::unknown(event_subtype)
			}
		}
	}

	pub fn category_direction(&self, category: EventCategory) -> EventDirection {
		category.direction()
	}

	pub fn accounting_event_icon(&self, event_type: AccountingEventType) -> &'static str {
		accounting_event_icon(event_type)
	}

	/// Every (type, subtype) pair this resolver can classify
	///
	/// Built-in pairs come in table order; pairs only present in custom tables
	/// follow, sorted.
	pub fn mapped_combinations(&self) -> Vec<(EventType, EventSubtype, EventCategory)> {
		let mut combinations: Vec<_> = CATEGORY_MAPPING_TABLE
			.iter()
			.flat_map(|(event_type, entries)| {
				entries
					.iter()
					.map(move |(subtype, _)| (*event_type, *subtype))
			})
			.filter_map(|(event_type, subtype)| {
				self.resolve_category(event_type, subtype)
					.ok()
					.map(|category| (event_type, subtype, category))
			})
			.collect();

		let known: BTreeSet<_> = combinations.iter().map(|(t, s, _)| (*t, *s)).collect();
		let mut extra: Vec<_> = self
			.mappings
			.iter()
			.flat_map(|(event_type, subtypes)| {
				subtypes
					.iter()
					.map(move |(subtype, category)| (*event_type, *subtype, *category))
			})
			.filter(|(t, s, _)| !known.contains(&(*t, *s)))
			.collect();
		extra.sort();
		combinations.extend(extra);
		combinations
	}

	/// Check the tables for consistency
	///
	/// Meant to run once at startup. Collects every problem found:
	/// - a category without details (mapped or not)
	/// - details with an empty label or icon
	/// - an override keyed by a counterparty that is not registered
	pub fn validate(&self) -> Result<(), ResolverError> {
		let mut problems = Vec::new();

		let mapped: BTreeSet<EventCategory> = self
			.mappings
			.values()
			.flat_map(|subtypes| subtypes.values().copied())
			.collect();
		for category in &mapped {
			if !self.details.contains_key(category) {
				problems.push(format!(
					"category '{}' is produced by the mapping but has no details",
					category
				));
			}
		}
		for category in EventCategory::ALL {
			if !mapped.contains(&category) && !self.details.contains_key(&category) {
				problems.push(format!("category '{}' has no details", category));
			}
		}

		let mut categories: Vec<_> = self.details.keys().copied().collect();
		categories.sort();
		for category in categories {
			let presentation = &self.details[&category];
			if presentation.default.label.trim().is_empty()
				|| presentation.default.icon.trim().is_empty()
			{
				problems.push(format!(
					"category '{}' has an empty default label or icon",
					category
				));
			}

			let mut overrides: Vec<_> = presentation.overrides.iter().collect();
			overrides.sort_by(|a, b| a.0.cmp(b.0));
			for (counterparty, details) in overrides {
				if details.label.trim().is_empty() || details.icon.trim().is_empty() {
					problems.push(format!(
						"category '{}' override for '{}' has an empty label or icon",
						category, counterparty
					));
				}
				if !self.counterparties.contains(counterparty) {
					problems.push(format!(
						"category '{}' override references unknown counterparty '{}'",
						category, counterparty
					));
				}
			}
		}

		if problems.is_empty() {
			debug!(
				combinations = mapped.len(),
				categories = self.details.len(),
				"category tables validated"
			);
			Ok(())
		} else {
			Err(ResolverError::Validation(problems))
		}
	}
}
