use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::collection::{CollectionSpec, ListEntity, WITHDRAWALS, lenient_string};
use crate::domain::types::WithdrawalId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "Option<i64>")]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    #[default]
    Unknown,
}

impl From<Option<i64>> for WithdrawalStatus {
    fn from(code: Option<i64>) -> Self {
        match code {
            Some(0) => Self::Pending,
            Some(1) => Self::Processing,
            Some(2) => Self::Completed,
            Some(3) => Self::Failed,
            Some(4) => Self::Cancelled,
            _ => Self::Unknown,
        }
    }
}

impl Display for WithdrawalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fee: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub status: WithdrawalStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Withdrawal {
    /// Only requests that have not been picked up yet can be audited.
    pub fn is_auditable(&self) -> bool {
        self.status == WithdrawalStatus::Pending
    }
}

impl ListEntity for Withdrawal {
    const COLLECTION: &'static CollectionSpec = &WITHDRAWALS;
}

/// Operator decision on a pending withdrawal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalAudit {
    pub id: WithdrawalId,
    pub approve: bool,
    /// Required when rejecting.
    pub remark: Option<String>,
}
