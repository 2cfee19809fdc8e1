//! Built-in classification tables.
//!
//! The tables are plain constant slices; the lookup maps are built from them
//! once, on first use, and shared read-only for the rest of the process.

use std::{collections::HashMap, sync::Arc};

use lazy_static::lazy_static;

use crate::{
	models::{
		AccountingEventType, CategoryColor, CategoryDetails, EventCategory, EventSubtype,
		EventType,
	},
	utils::constants::CPT_GAS,
};

/// Subtype level of the category mapping
pub type SubtypeMapping = HashMap<EventSubtype, EventCategory>;

/// Two-level mapping from (event type, event subtype) to event category
pub type CategoryMapping = HashMap<EventType, SubtypeMapping>;

/// Details for every category, with optional per-counterparty overrides
pub type CategoryDetailsTable = HashMap<EventCategory, CategoryPresentation>;

/// Presentation of a single category
///
/// The default entry is mandatory; overrides are keyed by the exact
/// counterparty identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPresentation {
	pub default: CategoryDetails,
	pub overrides: HashMap<String, CategoryDetails>,
}

impl CategoryPresentation {
	pub fn new(default: CategoryDetails) -> Self {
		Self {
			default,
			overrides: HashMap::new(),
		}
	}

	pub fn with_override(mut self, counterparty: &str, details: CategoryDetails) -> Self {
		self.overrides.insert(counterparty.to_string(), details);
		self
	}

	/// Override for the counterparty when one is keyed by exactly that
	/// identifier, the default otherwise
	pub fn select(&self, counterparty: Option<&str>) -> &CategoryDetails {
		counterparty
			.and_then(|cp| self.overrides.get(cp))
			.unwrap_or(&self.default)
	}
}

use EventCategory as C;
use EventSubtype as S;
use EventType as T;

/// Every (type, subtype) pair the decoders emit and the category it maps to
pub const CATEGORY_MAPPING_TABLE: &[(EventType, &[(EventSubtype, EventCategory)])] = &[
	(
		T::Informational,
		&[
			(S::None, C::Informational),
			(S::Governance, C::Governance),
			(S::RemoveAsset, C::Informational),
			(S::PlaceOrder, C::PlaceOrder),
			(S::Create, C::CreateProject),
			(S::Update, C::UpdateProject),
			(S::Apply, C::Apply),
			(S::Approve, C::Approval),
		],
	),
	(
		T::Receive,
		&[
			(S::Reward, C::ClaimReward),
			(S::ReceiveWrapped, C::Receive),
			(S::GenerateDebt, C::Borrow),
			(S::ReturnWrapped, C::Receive),
			(S::Airdrop, C::Airdrop),
			(S::Donate, C::ReceiveDonation),
			(S::None, C::Receive),
			(S::Liquidate, C::LiquidationReward),
		],
	),
	(
		T::Deposit,
		&[
			(S::DepositAsset, C::Deposit),
			(S::Bridge, C::BridgeDeposit),
			(S::PlaceOrder, C::Deposit),
			(S::Fee, C::Fee),
		],
	),
	(
		T::Spend,
		&[
			(S::ReturnWrapped, C::Send),
			(S::Liquidate, C::LiquidationLoss),
			(S::PaybackDebt, C::Repay),
			(S::Fee, C::Fee),
			(S::Donate, C::Donate),
			(S::None, C::Send),
		],
	),
	(
		T::Withdrawal,
		&[
			(S::RemoveAsset, C::Withdraw),
			(S::Bridge, C::BridgeWithdrawal),
			(S::CancelOrder, C::CancelOrder),
			(S::Refund, C::Refund),
			(S::GenerateDebt, C::Borrow),
			(S::Fee, C::Fee),
		],
	),
	(
		T::Trade,
		&[
			(S::Spend, C::SwapOut),
			(S::Receive, C::SwapIn),
			// Provisional: pending review of whether a bare trade should be informational
			(S::None, C::Informational),
			(S::Fee, C::Fee),
		],
	),
	(T::Renew, &[(S::Nft, C::Renew)]),
	(
		T::Staking,
		&[
			(S::DepositAsset, C::Deposit),
			(S::Reward, C::StakingReward),
			(S::RemoveAsset, C::Withdraw),
			(S::BlockProduction, C::CreateBlock),
			(S::MevReward, C::MevReward),
			(S::ReceiveWrapped, C::Receive),
			(S::Fee, C::Fee),
		],
	),
	(T::Transfer, &[(S::Donate, C::Donate), (S::None, C::Transfer)]),
	(T::Adjustment, &[(S::Spend, C::Send), (S::Receive, C::Receive)]),
	(
		T::Deploy,
		&[
			(S::None, C::Deploy),
			(S::Spend, C::DeployWithSpend),
			(S::Nft, C::Deploy),
		],
	),
	(T::Migrate, &[(S::Spend, C::MigrateOut), (S::Receive, C::MigrateIn)]),
];

/// Default details per category: (category, label, icon, color)
const CATEGORY_DETAILS_TABLE: &[(EventCategory, &str, &str, Option<CategoryColor>)] = &[
	(C::Send, "send", "arrow-up-line", None),
	(C::Receive, "receive", "arrow-down-line", Some(CategoryColor::Success)),
	(C::SwapOut, "swap", "arrow-go-forward-line", None),
	(C::SwapIn, "swap", "arrow-go-back-line", Some(CategoryColor::Success)),
	(C::MigrateOut, "migrate", "arrow-right-circle-line", None),
	(C::MigrateIn, "migrate", "arrow-left-circle-line", Some(CategoryColor::Success)),
	(C::Approval, "approval", "lock-unlock-line", None),
	(C::Deposit, "deposit", "skip-up-line", Some(CategoryColor::Success)),
	(C::Withdraw, "withdraw", "skip-down-line", None),
	(C::Airdrop, "airdrop", "gift-line", None),
	(C::Borrow, "borrow", "hand-coin-line", None),
	(C::Repay, "repay", "history-line", None),
	(C::Deploy, "deploy", "rocket-line", None),
	(C::DeployWithSpend, "deploy with spend", "rocket-2-line", None),
	(C::BridgeDeposit, "bridge", "skip-up-line", Some(CategoryColor::Error)),
	(C::BridgeWithdrawal, "bridge", "skip-down-line", Some(CategoryColor::Success)),
	(C::Governance, "governance", "government-line", None),
	(C::Donate, "donate", "hand-heart-line", None),
	(C::ReceiveDonation, "receive donation", "heart-2-line", None),
	(C::Renew, "renew", "loop-right-line", None),
	(C::PlaceOrder, "place order", "auction-line", None),
	(C::Transfer, "transfer", "swap-box-line", None),
	(C::StakingReward, "staking reward", "inbox-archive-line", None),
	(C::ClaimReward, "claim reward", "gift-2-line", None),
	(C::LiquidationReward, "liquidation reward", "drop-fill", None),
	(C::LiquidationLoss, "liquidation loss", "contrast-drop-fill", None),
	(C::Informational, "informational", "information-line", None),
	(C::CancelOrder, "cancel order", "file-close-line", Some(CategoryColor::Error)),
	(C::Refund, "refund", "refund-2-line", None),
	(C::Fee, "fee", "price-tag-line", None),
	(C::MevReward, "mev", "medal-line", None),
	(C::CreateBlock, "new block", "box-3-line", None),
	(C::CreateProject, "new project", "file-add-line", None),
	(C::UpdateProject, "update project", "file-edit-line", None),
	(C::Apply, "apply", "save-line", None),
];

/// Counterparty specific details: (category, counterparty, label, icon)
const CATEGORY_DETAILS_OVERRIDES: &[(EventCategory, &str, &str, &str)] =
	&[(C::Fee, CPT_GAS, "gas fee", "fire-line")];

lazy_static! {
	/// Built-in (type, subtype) -> category mapping
	pub static ref EVENT_CATEGORY_MAPPINGS: Arc<CategoryMapping> =
		Arc::new(build_category_mappings());

	/// Built-in category details
	pub static ref EVENT_CATEGORY_DETAILS: Arc<CategoryDetailsTable> =
		Arc::new(build_category_details());
}

fn build_category_mappings() -> CategoryMapping {
	CATEGORY_MAPPING_TABLE
		.iter()
		.map(|(event_type, entries)| (*event_type, entries.iter().copied().collect()))
		.collect()
}

fn build_category_details() -> CategoryDetailsTable {
	let mut table: CategoryDetailsTable = CATEGORY_DETAILS_TABLE
		.iter()
		.map(|&(category, label, icon, color)| {
			let details = CategoryDetails {
				label: label.to_string(),
				icon: icon.to_string(),
				color,
			};
			(category, CategoryPresentation::new(details))
		})
		.collect();

	for &(category, counterparty, label, icon) in CATEGORY_DETAILS_OVERRIDES {
		if let Some(presentation) = table.get_mut(&category) {
			presentation
				.overrides
				.insert(counterparty.to_string(), CategoryDetails::new(label, icon));
		}
	}
	table
}

/// Icon for an accounting (PnL) event type
pub fn accounting_event_icon(event_type: AccountingEventType) -> &'static str {
	match event_type {
		AccountingEventType::Trade => "swap-box-line",
		AccountingEventType::Fee => "price-tag-line",
		AccountingEventType::AssetMovement => "token-swap-line",
		AccountingEventType::MarginPosition => "percent-line",
		AccountingEventType::Loan => "shake-hands-line",
		AccountingEventType::PreforkAcquisition => "git-branch-line",
		AccountingEventType::Staking => "seedling-line",
		AccountingEventType::HistoryEvent => "exchange-box-line",
		AccountingEventType::TransactionEvent => "arrow-left-right-line",
	}
}
