use event_category_resolver::models::{Counterparty, EventSubtype, EventType};
use proptest::{option, prelude::*};

pub fn event_type_strategy() -> impl Strategy<Value = EventType> {
	prop::sample::select(EventType::ALL.to_vec())
}

pub fn event_subtype_strategy() -> impl Strategy<Value = EventSubtype> {
	prop::sample::select(EventSubtype::ALL.to_vec())
}

pub fn counterparty_strategy() -> impl Strategy<Value = Counterparty> {
	(
		"[a-z0-9][a-z0-9_.-]{0,15}".prop_map(|s| s.to_string()),
		"[A-Za-z][A-Za-z0-9 ]{0,20}".prop_map(|s| s.to_string()),
		option::of("[a-z0-9_]{1,10}\\.(svg|png)".prop_map(|s| s.to_string())),
		option::of("[a-z0-9]{1,10}-line".prop_map(|s| s.to_string())),
	)
		.prop_map(|(identifier, label, image, icon)| Counterparty {
			identifier,
			label,
			image,
			icon,
		})
}

/// Counterparty ids as decoders pass them: known ones in any case, or noise
pub fn counterparty_id_strategy() -> impl Strategy<Value = Option<String>> {
	option::of(prop_oneof![
		prop::sample::select(vec!["gas", "Gas", "GAS"]).prop_map(|s| s.to_string()),
		"[a-zA-Z0-9_-]{1,12}".prop_map(|s| s.to_string()),
	])
}
