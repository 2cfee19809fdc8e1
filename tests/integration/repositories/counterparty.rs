use crate::integration::mocks::write_counterparty_file;

use event_category_resolver::{
	models::Counterparty,
	repositories::{
		CounterpartyRepository, CounterpartyRepositoryTrait, CounterpartyService, RepositoryError,
	},
};
use std::{sync::Arc, thread};
use tempfile::TempDir;

#[test]
fn test_loaded_counterparty_overrides_builtin() {
	let dir = TempDir::new().unwrap();
	write_counterparty_file(
		dir.path(),
		"gas.json",
		r#"{"identifier": "gas", "label": "Network gas", "icon": "gas-station-line"}"#,
	);

	let repository = CounterpartyRepository::new(Some(dir.path())).unwrap();
	let gas = repository.get("gas").unwrap();
	assert_eq!(gas.label, "Network gas");
	assert_eq!(gas.icon.as_deref(), Some("gas-station-line"));
	assert_eq!(repository.get_all().len(), 1);
}

#[test]
fn test_identifier_comes_from_contents_not_file_name() {
	let dir = TempDir::new().unwrap();
	write_counterparty_file(
		dir.path(),
		"whatever.json",
		r#"{"identifier": "Balancer", "label": "Balancer"}"#,
	);

	let service = CounterpartyService::<CounterpartyRepository>::new(Some(dir.path())).unwrap();
	assert!(service.get("whatever").is_none());
	assert_eq!(service.get("balancer").unwrap().identifier, "Balancer");
}

#[test]
fn test_registration_is_visible_to_other_threads() {
	let repository = Arc::new(CounterpartyRepository::from_counterparties([Counterparty::new(
		"gas", "Gas",
	)]));

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let repository = repository.clone();
			thread::spawn(move || {
				repository
					.register(Counterparty::new(format!("dex-{}", i), format!("Dex {}", i)))
					.unwrap();
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	let all = repository.get_all();
	assert_eq!(all.len(), 9);
	for i in 0..8 {
		assert_eq!(all[&format!("dex-{}", i)].label, format!("Dex {}", i));
	}
}

#[test]
fn test_duplicate_registration_keeps_first_entry() {
	let repository =
		CounterpartyRepository::from_counterparties([Counterparty::new("aave", "Aave")]);
	let result = repository.register(Counterparty::new("AAVE", "Aave again"));
	assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
	assert_eq!(repository.get("aave").unwrap().label, "Aave");
}
