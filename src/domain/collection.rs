//! Descriptors of the remote collection endpoints and the mapping from raw
//! rows to typed entities.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Static description of one remote collection endpoint.
#[derive(Debug, PartialEq, Eq)]
pub struct CollectionSpec {
    /// Short name used in logs and on the command line.
    pub name: &'static str,
    /// Path of the `POST .../list` endpoint.
    pub endpoint: &'static str,
    /// Key of the rows array inside the response payload.
    pub items_key: &'static str,
    /// Columns matched by the free-text search.
    pub searchable_fields: &'static [&'static str],
    pub sort_field: &'static str,
}

pub const USERS: CollectionSpec = CollectionSpec {
    name: "users",
    endpoint: "/dpi/v1/users/list",
    items_key: "userss",
    searchable_fields: &["name", "email", "userCode", "uid"],
    sort_field: "id",
};

pub const CARDS: CollectionSpec = CollectionSpec {
    name: "cards",
    endpoint: "/dpi/v1/card/list",
    items_key: "cards",
    searchable_fields: &["title", "description", "type"],
    sort_field: "id",
};

pub const CARD_APPLICATIONS: CollectionSpec = CollectionSpec {
    name: "card-applications",
    endpoint: "/dpi/v1/cardApply/list",
    items_key: "cardApplys",
    searchable_fields: &["userId", "cardId", "status"],
    sort_field: "id",
};

pub const ADMINS: CollectionSpec = CollectionSpec {
    name: "admins",
    endpoint: "/dpi/v1/admin/list",
    items_key: "admins",
    searchable_fields: &["username", "email", "role"],
    sort_field: "id",
};

pub const KYC: CollectionSpec = CollectionSpec {
    name: "kyc",
    endpoint: "/dpi/v1/usersKyc/list",
    items_key: "usersKycs",
    searchable_fields: &["uid"],
    sort_field: "id",
};

pub const WALLET_LOGS: CollectionSpec = CollectionSpec {
    name: "wallet-logs",
    endpoint: "/dpi/v1/walletLog/list",
    items_key: "walletLogs",
    searchable_fields: &["uid"],
    sort_field: "",
};

pub const WITHDRAWALS: CollectionSpec = CollectionSpec {
    name: "withdrawals",
    endpoint: "/dpi/v1/withdraw/list",
    items_key: "withdraws",
    searchable_fields: &["uid", "address", "hash"],
    sort_field: "id",
};

pub const DEPOSITS: CollectionSpec = CollectionSpec {
    name: "deposits",
    endpoint: "/dpi/v1/deposit/list",
    items_key: "deposits",
    searchable_fields: &["from", "to", "hash", "contract"],
    sort_field: "created_at",
};

pub const CONFIGS: CollectionSpec = CollectionSpec {
    name: "configs",
    endpoint: "/dpi/v1/config/list",
    items_key: "configs",
    searchable_fields: &["key", "value", "remark"],
    sort_field: "id",
};

pub const ALL_COLLECTIONS: [&CollectionSpec; 9] = [
    &USERS,
    &CARDS,
    &CARD_APPLICATIONS,
    &ADMINS,
    &KYC,
    &WALLET_LOGS,
    &WITHDRAWALS,
    &DEPOSITS,
    &CONFIGS,
];

/// Looks a collection up by its short name.
pub fn find_collection(name: &str) -> Option<&'static CollectionSpec> {
    ALL_COLLECTIONS
        .into_iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
}

/// Entity rendered by a list screen.
pub trait ListEntity: Sized + DeserializeOwned {
    const COLLECTION: &'static CollectionSpec;

    /// Maps one raw row into the entity.
    fn from_record(record: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }
}

/// Accepts a string, a number or null for columns the API is loose about.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_collections_by_name() {
        assert_eq!(find_collection("admins"), Some(&ADMINS));
        assert_eq!(find_collection(" Wallet-Logs "), Some(&WALLET_LOGS));
        assert_eq!(find_collection("orders"), None);
    }

    #[test]
    fn every_collection_lists_through_a_list_endpoint() {
        for spec in ALL_COLLECTIONS {
            assert!(spec.endpoint.ends_with("/list"), "{}", spec.name);
            assert!(!spec.searchable_fields.is_empty(), "{}", spec.name);
        }
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_string")]
        uid: Option<String>,
    }

    #[test]
    fn lenient_string_accepts_numbers_and_null() {
        let row: Row = serde_json::from_value(serde_json::json!({"uid": 42})).unwrap();
        assert_eq!(row.uid.as_deref(), Some("42"));
        let row: Row = serde_json::from_value(serde_json::json!({"uid": null})).unwrap();
        assert_eq!(row.uid, None);
        let row: Row = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(row.uid, None);
    }
}
