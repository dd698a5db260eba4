use serde::{Deserialize, Serialize};

use crate::domain::collection::{CONFIGS, CollectionSpec, ListEntity};
use crate::domain::types::ConfigKey;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub id: i64,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListEntity for ConfigEntry {
    const COLLECTION: &'static CollectionSpec = &CONFIGS;
}

/// Validated payload for creating or replacing a config entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewConfigEntry {
    pub key: ConfigKey,
    pub value: String,
    pub remark: Option<String>,
}

impl NewConfigEntry {
    #[must_use]
    pub fn new(key: ConfigKey, value: String, remark: Option<String>) -> Self {
        Self {
            key,
            value: value.trim().to_string(),
            remark: remark
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
