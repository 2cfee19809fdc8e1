//! Event category resolver command line entry point.
//!
//! Resolves a single (type, subtype, counterparty) triple, or exports every
//! classification table as JSON for presentation clients.
//!
//! # Flow
//! 1. Loads environment variables from `.env`
//! 2. Applies CLI options that are not already set in the environment
//! 3. Builds and validates the resolver
//! 4. Prints the requested JSON to stdout; logs go to stderr

use event_category_resolver::{
	bootstrap::{counterparties_path_from_env, initialize_services},
	models::{EventSubtype, EventType},
	services::resolver::EventCategoryResolver,
	utils::{
		constants::{COUNTERPARTIES_PATH_ENV, LOG_LEVEL_ENV},
		logging::setup_logging_with_writer,
	},
};

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use tracing::{error, info};

fn build_cli() -> Command {
	Command::new("event-category-resolver")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Resolves ledger event type/subtype pairs into display categories and their \
			 presentation details.",
		)
		.arg(
			Arg::new("type")
				.long("type")
				.help("Event type, e.g. receive, spend, trade")
				.value_name("TYPE")
				.required_unless_present("export"),
		)
		.arg(
			Arg::new("subtype")
				.long("subtype")
				.help("Event subtype (default: none)")
				.value_name("SUBTYPE"),
		)
		.arg(
			Arg::new("counterparty")
				.long("counterparty")
				.help("Counterparty identifier, e.g. gas")
				.value_name("ID"),
		)
		.arg(
			Arg::new("export")
				.long("export")
				.help("Print every classification table as JSON")
				.action(ArgAction::SetTrue)
				.conflicts_with_all(["type", "subtype", "counterparty"]),
		)
		.arg(
			Arg::new("counterparties-path")
				.long("counterparties-path")
				.help("Directory of counterparty JSON files (default: config/counterparties)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
}

/// Produce the JSON output for the parsed command line
fn run<T>(matches: &ArgMatches, resolver: &EventCategoryResolver<T>) -> anyhow::Result<String>
where
	T: event_category_resolver::repositories::CounterpartyRepositoryTrait,
{
	if matches.get_flag("export") {
		return serde_json::to_string_pretty(&resolver.export())
			.context("Failed to serialize type mappings");
	}

	let event_type: EventType = matches
		.get_one::<String>("type")
		.context("--type is required")?
		.parse()?;
	let event_subtype: EventSubtype = matches
		.get_one::<String>("subtype")
		.map(|s| s.parse::<EventSubtype>())
		.transpose()?
		.unwrap_or(EventSubtype::None);
	let counterparty = matches.get_one::<String>("counterparty").map(String::as_str);

	let event = resolver.resolve_event(event_type, event_subtype, counterparty)?;
	let output = serde_json::json!({
		"event": event,
		"counterparty": counterparty.map(|id| resolver.counterparty_or_placeholder(id)),
	});
	serde_json::to_string_pretty(&output).context("Failed to serialize resolved event")
}

fn main() -> anyhow::Result<()> {
	let matches = build_cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var(LOG_LEVEL_ENV).is_err() {
			set_var(LOG_LEVEL_ENV, level);
		}
	}

	if let Some(path) = matches.get_one::<String>("counterparties-path") {
		if var(COUNTERPARTIES_PATH_ENV).is_err() {
			set_var(COUNTERPARTIES_PATH_ENV, path);
		}
	}

	setup_logging_with_writer(std::io::stderr).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let counterparties_path = counterparties_path_from_env();
	let resolver = initialize_services(counterparties_path.as_deref())
		.context("Failed to initialize the event category resolver")?;

	match run(&matches, resolver.as_ref()) {
		Ok(output) => {
			println!("{}", output);
			info!("done");
			Ok(())
		}
		Err(e) => {
			error!(error = %e, "resolution failed");
			Err(e)
		}
	}
}
