//! Building of filtered, sorted, paginated list queries for the remote
//! collection endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::FieldName;
use crate::pagination::PaginationState;

pub mod encode;

pub use encode::{encode, encode_search_value};

/// Comparison applied by a single filter clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "eq")]
    Equals,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "gte")]
    GreaterOrEqual,
    #[serde(rename = "lte")]
    LessOrEqual,
}

/// How a clause joins the predicate accumulated from the clauses before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    And,
    Or,
}

/// One `{name, exp, logic, value}` tuple narrowing a collection.
///
/// `value` is already encoded. Clauses are folded left to right, each with its
/// own combinator; there is no grouping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    #[serde(rename = "name")]
    pub field: String,
    #[serde(rename = "exp")]
    pub operator: FilterOperator,
    #[serde(rename = "logic")]
    pub combinator: Combinator,
    pub value: String,
}

impl FilterClause {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        combinator: Combinator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            combinator,
            value: value.into(),
        }
    }
}

/// Filter selected through a dedicated control rather than the search box.
///
/// Always joined with `and`, independently of the free-text search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructuredFilter {
    /// Exact match, e.g. a chain or log type picked from a select.
    Equals { field: FieldName, value: String },
    /// Inclusive date range on a date column.
    DateRange {
        field: FieldName,
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl StructuredFilter {
    pub fn equals(field: FieldName, value: impl Into<String>) -> Self {
        Self::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn date_range(field: FieldName, from: NaiveDate, to: NaiveDate) -> Self {
        Self::DateRange { field, from, to }
    }

    /// Expands the filter into encoded `and` clauses.
    ///
    /// An equality filter with a blank value contributes nothing.
    pub fn clauses(&self) -> Vec<FilterClause> {
        match self {
            Self::Equals { field, value } => {
                let value = encode(value);
                if value.is_empty() {
                    return Vec::new();
                }
                vec![FilterClause::new(
                    field.as_str(),
                    FilterOperator::Equals,
                    Combinator::And,
                    value,
                )]
            }
            Self::DateRange { field, from, to } => vec![
                FilterClause::new(
                    field.as_str(),
                    FilterOperator::GreaterOrEqual,
                    Combinator::And,
                    encode(&from.format(DATE_FORMAT).to_string()),
                ),
                FilterClause::new(
                    field.as_str(),
                    FilterOperator::LessOrEqual,
                    Combinator::And,
                    encode(&to.format(DATE_FORMAT).to_string()),
                ),
            ],
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request for one page of a collection. Built fresh for every fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<FilterClause>,
    /// 0-based page index.
    pub page_index: usize,
    pub page_size: usize,
    pub sort_field: String,
}

impl ListQuery {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            filters: Vec::new(),
            page_index,
            page_size,
            sort_field: String::new(),
        }
    }

    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort_field = field.into();
        self
    }

    pub fn filters(mut self, filters: Vec<FilterClause>) -> Self {
        self.filters = filters;
        self
    }
}

/// Produces one `like`/`or` clause per searchable field for a non-blank term.
pub fn search_clauses(search_term: &str, searchable_fields: &[&str]) -> Vec<FilterClause> {
    let value = encode(search_term);
    if value.is_empty() {
        return Vec::new();
    }

    searchable_fields
        .iter()
        .map(|field| {
            FilterClause::new(*field, FilterOperator::Like, Combinator::Or, value.clone())
        })
        .collect()
}

/// Translates search input, structured filters and the pager position into a
/// [`ListQuery`].
///
/// Search clauses come first, structured clauses follow in the order given.
/// The 1-based current page becomes a 0-based page index.
pub fn build_list_query(
    search_term: &str,
    searchable_fields: &[&str],
    structured: &[StructuredFilter],
    pagination: &PaginationState,
    sort_field: &str,
) -> ListQuery {
    let mut filters = search_clauses(search_term, searchable_fields);
    filters.extend(structured.iter().flat_map(StructuredFilter::clauses));

    ListQuery::new(pagination.page_index(), pagination.page_size().get())
        .sort(sort_field)
        .filters(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PageSize;

    fn field(name: &str) -> FieldName {
        FieldName::new(name).unwrap()
    }

    #[test]
    fn admin_search_produces_three_or_like_clauses() {
        let pagination = PaginationState::default();
        let query = build_list_query(
            "alice",
            &["username", "email", "role"],
            &[],
            &pagination,
            "id",
        );

        assert_eq!(query.filters.len(), 3);
        let names: Vec<_> = query.filters.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(names, vec!["username", "email", "role"]);
        for clause in &query.filters {
            assert_eq!(clause.operator, FilterOperator::Like);
            assert_eq!(clause.combinator, Combinator::Or);
            assert_eq!(clause.value, "\"alice\"");
        }
    }

    #[test]
    fn blank_search_yields_no_clauses() {
        let pagination = PaginationState::default();
        let query = build_list_query("   ", &["uid"], &[], &pagination, "id");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn page_index_is_zero_based() {
        let mut pagination = PaginationState::new(PageSize::new(20).unwrap());
        pagination.set_page(3).unwrap();

        let query = build_list_query("", &[], &[], &pagination, "id");

        assert_eq!(query.page_index, 2);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.sort_field, "id");
    }

    #[test]
    fn structured_filters_follow_search_with_and() {
        let pagination = PaginationState::default();
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let structured = vec![
            StructuredFilter::equals(field("chain"), "tron"),
            StructuredFilter::date_range(field("created_at"), from, to),
        ];

        let query = build_list_query("0xab", &["from", "to"], &structured, &pagination, "created_at");

        assert_eq!(query.filters.len(), 5);
        assert_eq!(query.filters[0].combinator, Combinator::Or);
        assert_eq!(
            query.filters[2],
            FilterClause::new("chain", FilterOperator::Equals, Combinator::And, "\"tron\"")
        );
        assert_eq!(
            query.filters[3],
            FilterClause::new(
                "created_at",
                FilterOperator::GreaterOrEqual,
                Combinator::And,
                "\"2024-01-01\""
            )
        );
        assert_eq!(query.filters[4].operator, FilterOperator::LessOrEqual);
        assert_eq!(query.filters[4].value, "\"2024-01-31\"");
    }

    #[test]
    fn blank_equality_filter_is_skipped() {
        let filter = StructuredFilter::equals(field("logType"), " ");
        assert!(filter.clauses().is_empty());
    }

    #[test]
    fn clause_serializes_with_wire_names() {
        let clause = FilterClause::new("uid", FilterOperator::Like, Combinator::Or, "\"7\"");
        let json = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "uid", "exp": "like", "logic": "or", "value": "\"7\""})
        );
    }
}
