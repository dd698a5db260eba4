use serde::{Deserialize, Serialize};

use crate::domain::collection::{CollectionSpec, ListEntity, WALLET_LOGS, lenient_string};

/// One balance movement in a user's wallet ledger.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletLedgerEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default)]
    pub log_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub before_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub after_amount: Option<String>,
    #[serde(rename = "otherID", default, deserialize_with = "lenient_string")]
    pub other_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ListEntity for WalletLedgerEntry {
    const COLLECTION: &'static CollectionSpec = &WALLET_LOGS;
}
