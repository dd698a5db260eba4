//! Fetching one filtered, sorted page of a remote collection.

use crate::domain::collection::{CollectionSpec, ListEntity};
use crate::dto::list::{ListResult, RawPage};
use crate::pagination::PaginationState;
use crate::query::{ListQuery, StructuredFilter, build_list_query};
use crate::repository::CollectionReader;
use crate::services::{ServiceError, ServiceResult};

/// Builds the query for the given search input and pager position and
/// fetches the page.
///
/// Pure with respect to caller state: the caller applies the returned
/// `total_count` to its own [`PaginationState`].
pub fn fetch_page<R>(
    repo: &R,
    collection: &CollectionSpec,
    search_term: &str,
    structured: &[StructuredFilter],
    pagination: &PaginationState,
    sort_field: &str,
) -> ServiceResult<RawPage>
where
    R: CollectionReader + ?Sized,
{
    let query = build_list_query(
        search_term,
        collection.searchable_fields,
        structured,
        pagination,
        sort_field,
    );
    run_query(repo, collection, &query)
}

/// Sends an already built query. Every failure becomes
/// [`ServiceError::ListLoad`]; nothing is retried.
pub fn run_query<R>(
    repo: &R,
    collection: &CollectionSpec,
    query: &ListQuery,
) -> ServiceResult<RawPage>
where
    R: CollectionReader + ?Sized,
{
    repo.list_records(collection, query).map_err(|err| {
        log::error!("Failed to load {}: {err}", collection.name);
        ServiceError::ListLoad(err.to_string())
    })
}

/// Maps raw rows into entities. A row that does not fit fails the page.
pub fn decode_page<E: ListEntity>(page: RawPage) -> ServiceResult<ListResult<E>> {
    let items = page
        .items
        .into_iter()
        .map(E::from_record)
        .collect::<Result<Vec<E>, _>>()
        .map_err(|err| {
            log::error!("Malformed {} row: {err}", E::COLLECTION.name);
            ServiceError::ListLoad(format!("malformed row: {err}"))
        })?;

    Ok(ListResult {
        items,
        total_count: page.total_count,
    })
}

/// Typed variant of [`fetch_page`] using the entity's collection and sort.
pub fn fetch_entities<E, R>(
    repo: &R,
    search_term: &str,
    structured: &[StructuredFilter],
    pagination: &PaginationState,
) -> ServiceResult<ListResult<E>>
where
    E: ListEntity,
    R: CollectionReader + ?Sized,
{
    let collection = E::COLLECTION;
    let page = fetch_page(
        repo,
        collection,
        search_term,
        structured,
        pagination,
        collection.sort_field,
    )?;
    decode_page(page)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::admin::AdminAccount;
    use crate::domain::collection::{ADMINS, WITHDRAWALS};
    use crate::domain::withdrawal::Withdrawal;
    use crate::query::{Combinator, FilterOperator};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use serde_json::json;

    /// Admin search by "alice" sends three OR-joined like clauses.
    #[test]
    fn admin_search_sends_or_like_clauses() {
        let mut repo = MockRepository::new();
        repo.expect_list_records()
            .withf(|collection, query| {
                collection == &ADMINS
                    && query.page_index == 0
                    && query.sort_field == "id"
                    && query.filters.len() == 3
                    && query.filters.iter().all(|c| {
                        c.operator == FilterOperator::Like
                            && c.combinator == Combinator::Or
                            && c.value == "\"alice\""
                    })
            })
            .times(1)
            .returning(|_, _| {
                Ok(RawPage {
                    items: vec![json!({"id": 1, "username": "alice", "status": 1})],
                    total_count: 1,
                })
            });

        let result: ListResult<AdminAccount> =
            fetch_entities(&repo, "alice", &[], &PaginationState::default()).unwrap();

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].username.as_deref(), Some("alice"));
    }

    /// The reported total is the filtered total, not the page length.
    #[test]
    fn partial_last_page_reports_true_total() {
        let mut repo = MockRepository::new();
        repo.expect_list_records().times(1).returning(|_, _| {
            Ok(RawPage {
                items: vec![json!({"id": 21, "status": 2})],
                total_count: 21,
            })
        });
        let mut pagination = PaginationState::default();
        pagination.set_page(3).unwrap();

        let result: ListResult<Withdrawal> =
            fetch_entities(&repo, "", &[], &pagination).unwrap();

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_count, 21);
    }

    /// Transport failures collapse into the generic list-load condition.
    #[test]
    fn failures_become_list_load_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_records()
            .times(1)
            .returning(|_, _| Err(RepositoryError::Transport("connection refused".into())));

        let result = fetch_page(
            &repo,
            &WITHDRAWALS,
            "",
            &[],
            &PaginationState::default(),
            "id",
        );

        match result {
            Err(ServiceError::ListLoad(message)) => {
                assert!(message.contains("connection refused"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// A row that cannot be mapped fails the whole page.
    #[test]
    fn malformed_rows_fail_the_page() {
        let page = RawPage {
            items: vec![json!({"username": "no id"})],
            total_count: 1,
        };

        let result = decode_page::<AdminAccount>(page);

        assert!(matches!(result, Err(ServiceError::ListLoad(_))));
    }
}
