use serde::{Deserialize, Serialize};

use crate::domain::collection::{CollectionSpec, DEPOSITS, ListEntity, lenient_string};

/// On-chain transfer credited to a user wallet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub block_number: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListEntity for Deposit {
    const COLLECTION: &'static CollectionSpec = &DEPOSITS;
}
