use crate::properties::strategies::counterparty_strategy;

use event_category_resolver::{
	models::{ConfigLoader, Counterparty},
	repositories::{CounterpartyRepository, CounterpartyRepositoryTrait},
};
use proptest::{prelude::*, test_runner::Config};
use std::collections::HashMap;

const MIN_TEST_CASES: usize = 1;
const MAX_TEST_CASES: usize = 10;

fn unique_by_key(counterparties: Vec<Counterparty>) -> HashMap<String, Counterparty> {
	let mut map = HashMap::new();
	for counterparty in counterparties {
		map.entry(counterparty.identifier.to_lowercase())
			.or_insert(counterparty);
	}
	map
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_roundtrip(
		counterparties in proptest::collection::vec(
			counterparty_strategy(),
			MIN_TEST_CASES..MAX_TEST_CASES
		)
	) {
		let expected = unique_by_key(counterparties);
		let repo = CounterpartyRepository::from_counterparties(expected.values().cloned());

		prop_assert_eq!(expected, repo.get_all());
	}

	#[test]
	fn test_lookup_ignores_case(
		counterparties in proptest::collection::vec(
			counterparty_strategy(),
			MIN_TEST_CASES..MAX_TEST_CASES
		)
	) {
		let expected = unique_by_key(counterparties);
		let repo = CounterpartyRepository::from_counterparties(expected.values().cloned());

		for counterparty in expected.values() {
			let identifier = &counterparty.identifier;
			let found = repo.get(identifier);
			prop_assert_eq!(Some(counterparty), found.as_ref());
			let found_upper = repo.get(&identifier.to_uppercase());
			prop_assert_eq!(Some(counterparty), found_upper.as_ref());
		}
		prop_assert_eq!(None, repo.get("not a valid identifier"));
	}

	#[test]
	fn test_register_then_get(
		counterparties in proptest::collection::vec(
			counterparty_strategy(),
			MIN_TEST_CASES..MAX_TEST_CASES
		)
	) {
		let repo = CounterpartyRepository::from_counterparties(Vec::new());
		let mut registered: HashMap<String, Counterparty> = HashMap::new();

		for counterparty in counterparties {
			let key = counterparty.identifier.to_lowercase();
			let result = repo.register(counterparty.clone());
			if registered.contains_key(&key) {
				prop_assert!(result.is_err());
			} else {
				prop_assert!(result.is_ok());
				registered.insert(key, counterparty);
			}
		}
		prop_assert_eq!(registered, repo.get_all());
	}

	#[test]
	fn test_config_validation(
		counterparties in proptest::collection::vec(
			counterparty_strategy(),
			MIN_TEST_CASES..MAX_TEST_CASES
		)
	) {
		for counterparty in counterparties {
			prop_assert!(counterparty.validate().is_ok());

			let mut invalid = counterparty.clone();
			invalid.identifier = "".to_string();
			prop_assert!(invalid.validate().is_err());

			let mut invalid = counterparty.clone();
			invalid.identifier = format!("{} x", counterparty.identifier);
			prop_assert!(invalid.validate().is_err());

			let mut invalid = counterparty.clone();
			invalid.label = "  ".to_string();
			prop_assert!(invalid.validate().is_err());

			let mut invalid = counterparty.clone();
			invalid.image = Some("".to_string());
			prop_assert!(invalid.validate().is_err());

			let repo = CounterpartyRepository::from_counterparties(Vec::new());
			let mut invalid = counterparty;
			invalid.label = "".to_string();
			prop_assert!(repo.register(invalid).is_err());
			prop_assert!(repo.get_all().is_empty());
		}
	}
}
