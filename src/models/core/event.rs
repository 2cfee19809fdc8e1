//! History event classification tags.
//!
//! `EventType` and `EventSubtype` are attached to every decoded ledger entry;
//! `EventCategory` is the display-oriented classification derived from the
//! pair. All three are closed sets and serialize in `snake_case`, matching the
//! tags used on the wire by the decoders.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Error returned when a string does not name a known tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
	/// Kind of tag that was being parsed (e.g. "event type")
	pub kind: &'static str,
	/// The rejected input
	pub value: String,
}

impl fmt::Display for ParseTagError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown {}: '{}'", self.kind, self.value)
	}
}

impl std::error::Error for ParseTagError {}

/// Broad nature of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
	Informational,
	Receive,
	Deposit,
	Spend,
	Withdrawal,
	Trade,
	Renew,
	Staking,
	Transfer,
	Adjustment,
	Deploy,
	Migrate,
}

impl EventType {
	/// Every event type, in declaration order
	pub const ALL: [EventType; 12] = [
		EventType::Informational,
		EventType::Receive,
		EventType::Deposit,
		EventType::Spend,
		EventType::Withdrawal,
		EventType::Trade,
		EventType::Renew,
		EventType::Staking,
		EventType::Transfer,
		EventType::Adjustment,
		EventType::Deploy,
		EventType::Migrate,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Informational => "informational",
			EventType::Receive => "receive",
			EventType::Deposit => "deposit",
			EventType::Spend => "spend",
			EventType::Withdrawal => "withdrawal",
			EventType::Trade => "trade",
			EventType::Renew => "renew",
			EventType::Staking => "staking",
			EventType::Transfer => "transfer",
			EventType::Adjustment => "adjustment",
			EventType::Deploy => "deploy",
			EventType::Migrate => "migrate",
		}
	}
}

/// Refinement of an `EventType`
///
/// Not every (type, subtype) pair is meaningful; see the category mapping
/// table for the pairs that are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSubtype {
	None,
	Governance,
	RemoveAsset,
	PlaceOrder,
	Create,
	Update,
	Apply,
	Approve,
	Reward,
	ReceiveWrapped,
	GenerateDebt,
	ReturnWrapped,
	Airdrop,
	Donate,
	Liquidate,
	DepositAsset,
	Bridge,
	Fee,
	PaybackDebt,
	CancelOrder,
	Refund,
	Spend,
	Receive,
	Nft,
	BlockProduction,
	MevReward,
}

impl EventSubtype {
	/// Every event subtype, in declaration order
	pub const ALL: [EventSubtype; 26] = [
		EventSubtype::None,
		EventSubtype::Governance,
		EventSubtype::RemoveAsset,
		EventSubtype::PlaceOrder,
		EventSubtype::Create,
		EventSubtype::Update,
		EventSubtype::Apply,
		EventSubtype::Approve,
		EventSubtype::Reward,
		EventSubtype::ReceiveWrapped,
		EventSubtype::GenerateDebt,
		EventSubtype::ReturnWrapped,
		EventSubtype::Airdrop,
		EventSubtype::Donate,
		EventSubtype::Liquidate,
		EventSubtype::DepositAsset,
		EventSubtype::Bridge,
		EventSubtype::Fee,
		EventSubtype::PaybackDebt,
		EventSubtype::CancelOrder,
		EventSubtype::Refund,
		EventSubtype::Spend,
		EventSubtype::Receive,
		EventSubtype::Nft,
		EventSubtype::BlockProduction,
		EventSubtype::MevReward,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			EventSubtype::None => "none",
			EventSubtype::Governance => "governance",
			EventSubtype::RemoveAsset => "remove_asset",
			EventSubtype::PlaceOrder => "place_order",
			EventSubtype::Create => "create",
			EventSubtype::Update => "update",
			EventSubtype::Apply => "apply",
			EventSubtype::Approve => "approve",
			EventSubtype::Reward => "reward",
			EventSubtype::ReceiveWrapped => "receive_wrapped",
			EventSubtype::GenerateDebt => "generate_debt",
			EventSubtype::ReturnWrapped => "return_wrapped",
			EventSubtype::Airdrop => "airdrop",
			EventSubtype::Donate => "donate",
			EventSubtype::Liquidate => "liquidate",
			EventSubtype::DepositAsset => "deposit_asset",
			EventSubtype::Bridge => "bridge",
			EventSubtype::Fee => "fee",
			EventSubtype::PaybackDebt => "payback_debt",
			EventSubtype::CancelOrder => "cancel_order",
			EventSubtype::Refund => "refund",
			EventSubtype::Spend => "spend",
			EventSubtype::Receive => "receive",
			EventSubtype::Nft => "nft",
			EventSubtype::BlockProduction => "block_production",
			EventSubtype::MevReward => "mev_reward",
		}
	}
}

/// Which way value moves for a category, relative to the tracked account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDirection {
	In,
	Out,
	Neutral,
}

/// Display category derived from an (event type, event subtype) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
	Send,
	Receive,
	SwapOut,
	SwapIn,
	MigrateOut,
	MigrateIn,
	Approval,
	Deposit,
	Withdraw,
	Airdrop,
	Borrow,
	Repay,
	Deploy,
	DeployWithSpend,
	BridgeDeposit,
	BridgeWithdrawal,
	Governance,
	Donate,
	ReceiveDonation,
	Renew,
	PlaceOrder,
	Transfer,
	StakingReward,
	ClaimReward,
	LiquidationReward,
	LiquidationLoss,
	Informational,
	CancelOrder,
	Refund,
	Fee,
	MevReward,
	CreateBlock,
	CreateProject,
	UpdateProject,
	Apply,
}

impl EventCategory {
	/// Every event category, in declaration order
	pub const ALL: [EventCategory; 35] = [
		EventCategory::Send,
		EventCategory::Receive,
		EventCategory::SwapOut,
		EventCategory::SwapIn,
		EventCategory::MigrateOut,
		EventCategory::MigrateIn,
		EventCategory::Approval,
		EventCategory::Deposit,
		EventCategory::Withdraw,
		EventCategory::Airdrop,
		EventCategory::Borrow,
		EventCategory::Repay,
		EventCategory::Deploy,
		EventCategory::DeployWithSpend,
		EventCategory::BridgeDeposit,
		EventCategory::BridgeWithdrawal,
		EventCategory::Governance,
		EventCategory::Donate,
		EventCategory::ReceiveDonation,
		EventCategory::Renew,
		EventCategory::PlaceOrder,
		EventCategory::Transfer,
		EventCategory::StakingReward,
		EventCategory::ClaimReward,
		EventCategory::LiquidationReward,
		EventCategory::LiquidationLoss,
		EventCategory::Informational,
		EventCategory::CancelOrder,
		EventCategory::Refund,
		EventCategory::Fee,
		EventCategory::MevReward,
		EventCategory::CreateBlock,
		EventCategory::CreateProject,
		EventCategory::UpdateProject,
		EventCategory::Apply,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			EventCategory::Send => "send",
			EventCategory::Receive => "receive",
			EventCategory::SwapOut => "swap_out",
			EventCategory::SwapIn => "swap_in",
			EventCategory::MigrateOut => "migrate_out",
			EventCategory::MigrateIn => "migrate_in",
			EventCategory::Approval => "approval",
			EventCategory::Deposit => "deposit",
			EventCategory::Withdraw => "withdraw",
			EventCategory::Airdrop => "airdrop",
			EventCategory::Borrow => "borrow",
			EventCategory::Repay => "repay",
			EventCategory::Deploy => "deploy",
			EventCategory::DeployWithSpend => "deploy_with_spend",
			EventCategory::BridgeDeposit => "bridge_deposit",
			EventCategory::BridgeWithdrawal => "bridge_withdrawal",
			EventCategory::Governance => "governance",
			EventCategory::Donate => "donate",
			EventCategory::ReceiveDonation => "receive_donation",
			EventCategory::Renew => "renew",
			EventCategory::PlaceOrder => "place_order",
			EventCategory::Transfer => "transfer",
			EventCategory::StakingReward => "staking_reward",
			EventCategory::ClaimReward => "claim_reward",
			EventCategory::LiquidationReward => "liquidation_reward",
			EventCategory::LiquidationLoss => "liquidation_loss",
			EventCategory::Informational => "informational",
			EventCategory::CancelOrder => "cancel_order",
			EventCategory::Refund => "refund",
			EventCategory::Fee => "fee",
			EventCategory::MevReward => "mev_reward",
			EventCategory::CreateBlock => "create_block",
			EventCategory::CreateProject => "create_project",
			EventCategory::UpdateProject => "update_project",
			EventCategory::Apply => "apply",
		}
	}

	/// Direction of value flow for this category
	pub fn direction(&self) -> EventDirection {
		use EventCategory::*;
		match self {
			Receive | SwapIn | MigrateIn | Withdraw | Airdrop | Borrow | BridgeWithdrawal
			| ReceiveDonation | StakingReward | ClaimReward | LiquidationReward | CancelOrder
			| Refund | MevReward | CreateBlock => EventDirection::In,
			Send | SwapOut | MigrateOut | Deposit | Repay | DeployWithSpend | BridgeDeposit
			| Donate | Renew | LiquidationLoss | Fee => EventDirection::Out,
			Approval | Deploy | Governance | PlaceOrder | Transfer | Informational
			| CreateProject | UpdateProject | Apply => EventDirection::Neutral,
		}
	}
}

fn parse_tag<T: Copy>(
	kind: &'static str,
	all: &[T],
	as_str: impl Fn(&T) -> &'static str,
	s: &str,
) -> Result<T, ParseTagError> {
	let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
	all.iter()
		.find(|tag| as_str(*tag) == normalized)
		.copied()
		.ok_or_else(|| ParseTagError {
			kind,
			value: s.to_string(),
		})
}

impl FromStr for EventType {
	type Err = ParseTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag("event type", &Self::ALL, Self::as_str, s)
	}
}

impl FromStr for EventSubtype {
	type Err = ParseTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag("event subtype", &Self::ALL, Self::as_str, s)
	}
}

impl FromStr for EventCategory {
	type Err = ParseTagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_tag("event category", &Self::ALL, Self::as_str, s)
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl fmt::Display for EventSubtype {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl fmt::Display for EventCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
