//! Wire shapes of the `POST .../list` collection endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::query::{FilterClause, ListQuery};
use crate::repository::errors::RepositoryError;

/// Untyped row as returned by a collection endpoint.
pub type RawRecord = Value;

/// Request body `{columns, limit, page, sort}`.
#[derive(Debug, Serialize)]
pub struct ListRequestDto<'a> {
    pub columns: &'a [FilterClause],
    pub limit: usize,
    pub page: usize,
    pub sort: &'a str,
}

impl<'a> From<&'a ListQuery> for ListRequestDto<'a> {
    fn from(query: &'a ListQuery) -> Self {
        Self {
            columns: &query.filters,
            limit: query.page_size,
            page: query.page_index,
            sort: &query.sort_field,
        }
    }
}

/// One page of rows and the size of the whole filtered set.
#[derive(Clone, Debug, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    /// Independent of the page size.
    pub total_count: u64,
}

pub type RawPage = ListResult<RawRecord>;

impl RawPage {
    /// Picks the rows array named `items_key` and `total` out of an unwrapped
    /// `{<items_key>: [...], total, page, limit}` payload.
    ///
    /// A `null` rows array is read as an empty page.
    pub fn from_payload(payload: Value, items_key: &str) -> Result<Self, RepositoryError> {
        let mut object: Map<String, Value> = match payload {
            Value::Object(object) => object,
            other => {
                return Err(RepositoryError::Decode(format!(
                    "expected an object payload, got {other}"
                )));
            }
        };

        let items = match object.remove(items_key) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(_) => {
                return Err(RepositoryError::Decode(format!(
                    "`{items_key}` is not an array"
                )));
            }
            None => {
                return Err(RepositoryError::Decode(format!(
                    "missing `{items_key}` in list payload"
                )));
            }
        };

        let total_count = object
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| RepositoryError::Decode("missing or invalid `total`".to_string()))?;

        Ok(Self { items, total_count })
    }
}
