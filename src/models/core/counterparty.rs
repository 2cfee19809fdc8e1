use serde::{Deserialize, Serialize};

/// An external protocol, contract or entity referenced by ledger entries
///
/// Loaded once as reference data; the identifier is the registry key and is
/// shared with the category details overrides (e.g. the network gas
/// counterparty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counterparty {
	pub identifier: String,
	pub label: String,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub icon: Option<String>,
}

impl Counterparty {
	pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			identifier: identifier.into(),
			label: label.into(),
			image: None,
			icon: None,
		}
	}

	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}
}
