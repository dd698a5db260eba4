use serde::{Deserialize, Serialize};

use crate::domain::collection::{CollectionSpec, ListEntity, USERS, lenient_string};

/// Activation state of a user or admin account.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "Option<i64>")]
pub enum AccountStatus {
    Active,
    #[default]
    Inactive,
}

impl From<Option<i64>> for AccountStatus {
    fn from(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Active,
            _ => Self::Inactive,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default)]
    pub user_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Role shown in the table; rows without one are plain users.
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("user")
    }

    /// Name shown in the table, falling back to the login name.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.username.as_deref())
            .unwrap_or("-")
    }
}

impl ListEntity for User {
    const COLLECTION: &'static CollectionSpec = &USERS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_raw_user_row() {
        let user = User::from_record(json!({
            "id": 3,
            "email": "a@b.c",
            "username": "alice",
            "status": 1,
            "uid": 100200,
            "userCode": "U01",
            "phone": 5551234
        }))
        .unwrap();

        assert_eq!(user.status, AccountStatus::Active);
        assert_eq!(user.role(), "user");
        assert_eq!(user.display_name(), "alice");
        assert_eq!(user.uid.as_deref(), Some("100200"));
        assert_eq!(user.phone.as_deref(), Some("5551234"));
    }

    #[test]
    fn non_one_status_is_inactive() {
        let user = User::from_record(json!({"id": 1, "status": 0})).unwrap();
        assert_eq!(user.status, AccountStatus::Inactive);
        let user = User::from_record(json!({"id": 1, "status": null})).unwrap();
        assert_eq!(user.status, AccountStatus::Inactive);
    }
}
