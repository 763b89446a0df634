use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The string a QR code encodes for an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrPayload(String);

impl QrPayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for QrPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the content handed to the encoder for an item.
///
/// Without a base URL the content is the bare item id. With one, it is
/// `<base>/items/<id>` so a phone camera lands on the item page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadContent {
    base_url: Option<String>,
}

impl PayloadContent {
    pub fn item_id_only() -> Self {
        Self { base_url: None }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::item_id_only();
        }
        Self {
            base_url: Some(trimmed.to_string()),
        }
    }

    pub fn for_item(&self, item: &Item) -> String {
        match &self.base_url {
            Some(base) => format!("{}/items/{}", base, item.id),
            None => item.id.to_string(),
        }
    }
}
