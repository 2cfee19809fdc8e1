//! Constants shared across the crate.

/// Reserved counterparty identifier for the network's native gas fee
pub const CPT_GAS: &str = "gas";

/// Directory scanned for counterparty definitions when no path is given
pub const DEFAULT_COUNTERPARTIES_DIR: &str = "config/counterparties";

/// Environment variable that overrides the counterparties directory
pub const COUNTERPARTIES_PATH_ENV: &str = "COUNTERPARTIES_PATH";

/// Environment variable holding the log level used when `RUST_LOG` is unset
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Icon shown for anything the tables cannot resolve
pub const UNKNOWN_ICON: &str = "question-line";
