use serde::{Deserialize, Serialize};

/// Color tag a presentation layer applies to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
	Success,
	Error,
}

/// Presentation metadata attached to an event category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryDetails {
	pub label: String,
	pub icon: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<CategoryColor>,
}

impl CategoryDetails {
	pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			icon: icon.into(),
			color: None,
		}
	}

	pub fn with_color(mut self, color: CategoryColor) -> Self {
		self.color = Some(color);
		self
	}
}
