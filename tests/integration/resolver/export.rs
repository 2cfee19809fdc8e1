use event_category_resolver::{
	bootstrap::initialize_services_with,
	models::{CategoryDetails, EventCategory},
	repositories::{builtin_counterparties, CounterpartyRepository, CounterpartyService},
	services::resolver::DEFAULT_DETAILS_KEY,
};
use std::collections::HashMap;

fn export_json() -> serde_json::Value {
	let resolver = initialize_services_with(CounterpartyService::new_with_repository(
		CounterpartyRepository::from_counterparties(builtin_counterparties()),
	))
	.unwrap();
	serde_json::to_value(resolver.export()).unwrap()
}

#[test]
fn test_every_category_exports_a_default() {
	let json = export_json();
	let details = json["event_category_details"].as_object().unwrap();
	assert_eq!(details.len(), EventCategory::ALL.len());

	for (category, entry) in details {
		let mappings: HashMap<String, CategoryDetails> =
			serde_json::from_value(entry["counterparty_mappings"].clone()).unwrap();
		assert!(
			mappings.contains_key(DEFAULT_DETAILS_KEY),
			"{} has no default details",
			category
		);
	}
}

#[test]
fn test_export_is_deterministic() {
	let first = serde_json::to_string(&export_json()).unwrap();
	let second = serde_json::to_string(&export_json()).unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_exported_directions() {
	let json = export_json();
	let details = &json["event_category_details"];
	assert_eq!(details["receive"]["direction"], "in");
	assert_eq!(details["send"]["direction"], "out");
	assert_eq!(details["approval"]["direction"], "neutral");
}
