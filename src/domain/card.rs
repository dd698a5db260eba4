use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::collection::{CARDS, CollectionSpec, ListEntity, lenient_string};

/// Lifecycle state of an issued card, decoded from `cardStatus`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "Option<i64>")]
pub enum CardStatus {
    #[default]
    Applying,
    InProduction,
    Shipped,
    Activated,
    Cancelling,
    Cancelled,
    Frozen,
    Locked,
    Expired,
    AwaitingBinding,
    PendingActivation,
}

impl From<Option<i64>> for CardStatus {
    fn from(code: Option<i64>) -> Self {
        match code {
            Some(2) => Self::InProduction,
            Some(3) => Self::Shipped,
            Some(4) => Self::Activated,
            Some(5) => Self::Cancelling,
            Some(6) => Self::Cancelled,
            Some(7) => Self::Frozen,
            Some(8) => Self::Locked,
            Some(9) => Self::Expired,
            Some(10) => Self::AwaitingBinding,
            Some(11) => Self::PendingActivation,
            _ => Self::Applying,
        }
    }
}

impl Display for CardStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Applying => "applying",
            Self::InProduction => "in production",
            Self::Shipped => "shipped",
            Self::Activated => "activated",
            Self::Cancelling => "cancelling",
            Self::Cancelled => "cancelled",
            Self::Frozen => "frozen",
            Self::Locked => "locked",
            Self::Expired => "expired",
            Self::AwaitingBinding => "awaiting binding",
            Self::PendingActivation => "pending activation",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "Option<i64>")]
pub enum CardKind {
    Physical,
    #[default]
    Virtual,
}

impl From<Option<i64>> for CardKind {
    fn from(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Physical,
            _ => Self::Virtual,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    #[serde(rename = "cardID", default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "cardType", default)]
    pub kind: CardKind,
    #[serde(rename = "cardStatus", default)]
    pub status: CardStatus,
    #[serde(rename = "uid", default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ListEntity for Card {
    const COLLECTION: &'static CollectionSpec = &CARDS;
}
