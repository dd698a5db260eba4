use serde::{Deserialize, Serialize};

use crate::domain::collection::{CARD_APPLICATIONS, CollectionSpec, ListEntity, lenient_string};

/// Review outcome shared by card applications and KYC submissions.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl From<Option<String>> for ReviewStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("approved") => Self::Approved,
            Some(s) if s.eq_ignore_ascii_case("rejected") => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BillingAddress {
    #[serde(rename = "billingAddress", default)]
    pub address: Option<String>,
    #[serde(rename = "billingCity", default)]
    pub city: Option<String>,
    #[serde(rename = "billingCountryArea", default)]
    pub country_area: Option<String>,
    #[serde(rename = "billingPostCode", default, deserialize_with = "lenient_string")]
    pub post_code: Option<String>,
    #[serde(rename = "billingCardID", default)]
    pub card_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PostalAddress {
    #[serde(rename = "postalAddress", default)]
    pub address: Option<String>,
    #[serde(rename = "postalCity", default)]
    pub city: Option<String>,
    #[serde(rename = "postalCountryArea", default)]
    pub country_area: Option<String>,
    #[serde(rename = "postalPostCode", default, deserialize_with = "lenient_string")]
    pub post_code: Option<String>,
    #[serde(rename = "postalFirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "postalLastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "postalRecipientTitle", default)]
    pub recipient_title: Option<String>,
    #[serde(rename = "postalOrderNo", default)]
    pub order_no: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardApplication {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_id: Option<String>,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub user_code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dial_code: Option<String>,
    #[serde(default)]
    pub card_type: Option<i64>,
    #[serde(flatten)]
    pub billing: BillingAddress,
    #[serde(flatten)]
    pub postal: PostalAddress,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListEntity for CardApplication {
    const COLLECTION: &'static CollectionSpec = &CARD_APPLICATIONS;
}
