//! A typed piece of tutorial content.

use serde::{Deserialize, Serialize};

use super::asset::AssetType;

/// `(type, content)` pair derived from an asset. Not persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub item_type: AssetType,
    pub content: String,
}

impl ContentItem {
    pub fn new(item_type: AssetType, content: impl Into<String>) -> Self {
        Self {
            item_type,
            content: content.into(),
        }
    }
}
