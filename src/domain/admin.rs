use serde::{Deserialize, Serialize};

use crate::domain::collection::{ADMINS, CollectionSpec, ListEntity};
use crate::domain::user::AccountStatus;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListEntity for AdminAccount {
    const COLLECTION: &'static CollectionSpec = &ADMINS;
}
