use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of events produced by the accounting (PnL) pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountingEventType {
	Trade,
	Fee,
	AssetMovement,
	MarginPosition,
	Loan,
	PreforkAcquisition,
	Staking,
	HistoryEvent,
	TransactionEvent,
}

impl AccountingEventType {
	pub const ALL: [AccountingEventType; 9] = [
		AccountingEventType::Trade,
		AccountingEventType::Fee,
		AccountingEventType::AssetMovement,
		AccountingEventType::MarginPosition,
		AccountingEventType::Loan,
		AccountingEventType::PreforkAcquisition,
		AccountingEventType::Staking,
		AccountingEventType::HistoryEvent,
		AccountingEventType::TransactionEvent,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			AccountingEventType::Trade => "trade",
			AccountingEventType::Fee => "fee",
			AccountingEventType::AssetMovement => "asset_movement",
			AccountingEventType::MarginPosition => "margin_position",
			AccountingEventType::Loan => "loan",
			AccountingEventType::PreforkAcquisition => "prefork_acquisition",
			AccountingEventType::Staking => "staking",
			AccountingEventType::HistoryEvent => "history_event",
			AccountingEventType::TransactionEvent => "transaction_event",
		}
	}
}

impl fmt::Display for AccountingEventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
