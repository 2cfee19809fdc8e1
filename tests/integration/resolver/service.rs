use event_category_resolver::{
	bootstrap::initialize_services_with,
	models::{
		CategoryColor, CategoryDetails, Counterparty, EventCategory, EventDirection,
		EventSubtype, EventType,
	},
	repositories::{builtin_counterparties, CounterpartyRepository, CounterpartyService},
	services::resolver::{EventCategoryResolver, ResolvedEvent, ResolverError},
	utils::constants::{CPT_GAS, UNKNOWN_ICON},
};
use std::{collections::HashSet, sync::Arc};
use tracing_test::traced_test;

fn resolver() -> Arc<EventCategoryResolver> {
	initialize_services_with(CounterpartyService::new_with_repository(
		CounterpartyRepository::from_counterparties(builtin_counterparties()),
	))
	.unwrap()
}

#[test]
fn test_every_mapped_pair_resolves() {
	let resolver = resolver();
	let combinations = resolver.mapped_combinations();
	assert!(!combinations.is_empty());
	for (event_type, subtype, category) in combinations {
		assert_eq!(
			resolver.resolve_category(event_type, subtype).unwrap(),
			category,
			"{}/{}",
			event_type,
			subtype
		);
	}
}

#[test]
fn test_every_category_has_default_details() {
	let resolver = resolver();
	for category in EventCategory::ALL {
		let details = resolver.resolve_details(category, None).unwrap();
		assert!(!details.label.is_empty(), "{} has no label", category);
		assert!(!details.icon.is_empty(), "{} has no icon", category);
	}
}

#[test]
fn test_mapped_categories_have_details() {
	let resolver = resolver();
	let mapped: HashSet<EventCategory> = resolver
		.mapped_combinations()
		.into_iter()
		.map(|(_, _, category)| category)
		.collect();
	for category in mapped {
		assert!(resolver.category_details().contains_key(&category));
	}
}

#[test]
fn test_fee_details_by_counterparty() {
	let resolver = resolver();
	let gas = resolver.resolve_details(EventCategory::Fee, Some(CPT_GAS)).unwrap();
	let default = resolver.resolve_details(EventCategory::Fee, None).unwrap();
	let unrelated = resolver
		.resolve_details(EventCategory::Fee, Some("unrelated-counterparty-id"))
		.unwrap();

	assert_eq!(gas.label, "gas fee");
	assert_eq!(default.label, "fee");
	assert_ne!(gas, default);
	assert_eq!(unrelated, default);
}

#[test]
fn test_fee_override_needs_exact_identifier() {
	let resolver = resolver();
	for id in ["GAS", "Gas", " gas"] {
		let details = resolver.resolve_details(EventCategory::Fee, Some(id)).unwrap();
		assert_eq!(details.label, "fee", "override applied for {:?}", id);
	}
	// The registry itself still matches case-insensitively
	assert_eq!(resolver.lookup_counterparty("GAS").unwrap().identifier, CPT_GAS);
}

#[test]
fn test_identifier_is_the_given_counterparty() {
	let resolver = resolver();
	let with_override = resolver
		.resolve_event(EventType::Spend, EventSubtype::Fee, Some(CPT_GAS))
		.unwrap();
	let without_override = resolver
		.resolve_event(EventType::Receive, EventSubtype::None, Some("uniswap"))
		.unwrap();
	let no_counterparty = resolver
		.resolve_event(EventType::Receive, EventSubtype::None, None)
		.unwrap();

	assert_eq!(with_override.identifier, "gas");
	assert_eq!(without_override.identifier, "uniswap");
	assert_eq!(without_override.details.label, "receive");
	assert_eq!(no_counterparty.identifier, "receive");
}

#[test]
fn test_claim_reward_scenario() {
	let resolver = resolver();
	let category = resolver
		.resolve_category(EventType::Receive, EventSubtype::Reward)
		.unwrap();
	assert_eq!(category, EventCategory::ClaimReward);
	assert_eq!(
		resolver.resolve_details(category, None).unwrap(),
		CategoryDetails::new("claim reward", "gift-2-line")
	);
}

#[test]
fn test_bridge_deposit_scenario() {
	let resolver = resolver();
	let category = resolver
		.resolve_category(EventType::Deposit, EventSubtype::Bridge)
		.unwrap();
	assert_eq!(category, EventCategory::BridgeDeposit);
	assert_eq!(
		resolver.resolve_details(category, None).unwrap(),
		CategoryDetails::new("bridge", "skip-up-line").with_color(CategoryColor::Error)
	);
}

#[test]
fn test_repeated_calls_are_identical() {
	let resolver = resolver();
	let first = resolver
		.resolve_event(EventType::Staking, EventSubtype::Fee, Some(CPT_GAS))
		.unwrap();
	for _ in 0..10 {
		assert_eq!(
			resolver
				.resolve_event(EventType::Staking, EventSubtype::Fee, Some(CPT_GAS))
				.unwrap(),
			first
		);
	}
}

#[test]
fn test_unmapped_pairs_are_rejected() {
	let resolver = resolver();
	let known: HashSet<(EventType, EventSubtype)> = resolver
		.mapped_combinations()
		.into_iter()
		.map(|(t, s, _)| (t, s))
		.collect();

	for event_type in EventType::ALL {
		for subtype in EventSubtype::ALL {
			let result = resolver.resolve_category(event_type, subtype);
			if known.contains(&(event_type, subtype)) {
				assert!(result.is_ok());
			} else {
				assert!(matches!(
					result,
					Err(ResolverError::UnmappedEventCombination { .. })
				));
			}
		}
	}
}

#[test]
#[traced_test]
fn test_describe_event_logs_fallback() {
	let resolver = resolver();
	let described = resolver.describe_event(EventType::Adjustment, EventSubtype::Fee, None);

	assert_eq!(described, ResolvedEvent::unknown(EventSubtype::Fee));
	assert_eq!(described.details.icon, UNKNOWN_ICON);
	assert_eq!(described.direction, EventDirection::Neutral);
	assert!(logs_contain("falling back to unknown event presentation"));
}

#[test]
fn test_describe_event_matches_resolve_event_when_mapped() {
	let resolver = resolver();
	let described = resolver.describe_event(EventType::Migrate, EventSubtype::Receive, None);
	let resolved = resolver
		.resolve_event(EventType::Migrate, EventSubtype::Receive, None)
		.unwrap();
	assert_eq!(described, resolved);
	assert_eq!(resolved.identifier, "migrate_in");
}

#[test]
fn test_counterparty_registered_after_startup() {
	let resolver = resolver();
	assert!(matches!(
		resolver.lookup_counterparty("yearn"),
		Err(ResolverError::UnknownCounterparty(_))
	));

	resolver
		.counterparties()
		.register(Counterparty::new("yearn", "Yearn").with_image("yearn.svg"))
		.unwrap();
	assert_eq!(resolver.lookup_counterparty("Yearn").unwrap().label, "Yearn");
}
