//! Generic list screen controller shared by every collection.
//!
//! The controller owns the pager, search and filter state of one screen. A
//! user action produces a [`FetchTicket`]; the caller runs the query (now or
//! on another thread) and hands the outcome back through
//! [`EntityListController::complete`]. Tickets carry a sequence number and
//! only the most recently issued one is applied, so a slow response can never
//! overwrite a newer page.

use std::time::{Duration, Instant};

use crate::domain::collection::{CollectionSpec, ListEntity};
use crate::domain::types::PageSize;
use crate::dto::list::RawPage;
use crate::dto::notification::Notification;
use crate::pagination::{Paginated, PaginationState};
use crate::query::{ListQuery, StructuredFilter, build_list_query};
use crate::repository::CollectionReader;
use crate::services::ServiceResult;
use crate::services::debounce::SearchDebounce;
use crate::services::list::{decode_page, run_query};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Previous rows stay on screen.
    Failed(String),
}

/// A query issued by the controller, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer ticket was issued; the outcome was dropped.
    Stale,
}

pub struct EntityListController<E: ListEntity> {
    search_term: String,
    structured: Vec<StructuredFilter>,
    pagination: PaginationState,
    sort_field: String,
    state: LoadState,
    rows: Vec<E>,
    latest_seq: u64,
    debounce: SearchDebounce,
    notification: Option<Notification>,
}

impl<E: ListEntity> EntityListController<E> {
    pub fn new(page_size: PageSize, search_delay: Duration) -> Self {
        Self {
            search_term: String::new(),
            structured: Vec::new(),
            pagination: PaginationState::new(page_size),
            sort_field: E::COLLECTION.sort_field.to_string(),
            state: LoadState::Idle,
            rows: Vec::new(),
            latest_seq: 0,
            debounce: SearchDebounce::new(search_delay),
            notification: None,
        }
    }

    /// Overrides the collection's default sort column.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_field = field.into();
        self
    }

    pub fn collection(&self) -> &'static CollectionSpec {
        E::COLLECTION
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &[StructuredFilter] {
        &self.structured
    }

    /// Rows and pager data for rendering.
    pub fn view(&self) -> Paginated<&E> {
        Paginated::new(self.rows.iter().collect(), &self.pagination)
    }

    /// Pops the pending notification, if any.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Re-fetches the current page with the current inputs.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn change_page(&mut self, page: usize) -> ServiceResult<FetchTicket> {
        self.pagination.set_page(page)?;
        Ok(self.issue())
    }

    pub fn change_page_size(&mut self, page_size: PageSize) -> FetchTicket {
        self.pagination.set_page_size(page_size);
        self.issue()
    }

    /// Searches immediately, dropping any debounced input.
    pub fn submit_search(&mut self, term: &str) -> FetchTicket {
        self.debounce.cancel();
        self.search_term = term.trim().to_string();
        self.pagination.reset_to_first_page();
        self.issue()
    }

    /// Records a keystroke in the search box; [`Self::poll_search`] fires it
    /// once the input has been quiet for the debounce delay.
    pub fn input_search(&mut self, term: &str, now: Instant) {
        self.debounce.schedule(term, now);
    }

    pub fn poll_search(&mut self, now: Instant) -> Option<FetchTicket> {
        let term = self.debounce.take_due(now)?;
        Some(self.submit_search(&term))
    }

    /// Replaces the structured filters and goes back to the first page.
    pub fn set_filters(&mut self, filters: Vec<StructuredFilter>) -> FetchTicket {
        self.structured = filters;
        self.pagination.reset_to_first_page();
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state = LoadState::Loading;

        let query = build_list_query(
            &self.search_term,
            E::COLLECTION.searchable_fields,
            &self.structured,
            &self.pagination,
            &self.sort_field,
        );
        log::debug!(
            "Issuing {} fetch #{} for page {}",
            E::COLLECTION.name,
            self.latest_seq,
            self.pagination.current_page()
        );

        FetchTicket {
            seq: self.latest_seq,
            query,
        }
    }

    /// Applies the outcome of ticket `seq` unless a newer ticket exists.
    ///
    /// Failures keep the displayed rows and queue an error notification.
    pub fn complete(&mut self, seq: u64, result: ServiceResult<RawPage>) -> Completion {
        if seq != self.latest_seq {
            log::warn!(
                "Discarding stale {} response #{seq}, latest is #{}",
                E::COLLECTION.name,
                self.latest_seq
            );
            return Completion::Stale;
        }

        match result.and_then(decode_page::<E>) {
            Ok(page) => {
                self.rows = page.items;
                self.pagination.apply_total(page.total_count);
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                let message = err.to_string();
                self.notification = Some(Notification::error(message.clone()));
                self.state = LoadState::Failed(message);
            }
        }

        Completion::Applied
    }

    /// Runs a ticket synchronously against `repo` and applies the outcome.
    pub fn load<R>(&mut self, repo: &R, ticket: FetchTicket) -> Completion
    where
        R: CollectionReader + ?Sized,
    {
        let result = run_query(repo, E::COLLECTION, &ticket.query);
        self.complete(ticket.seq, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admin::AdminAccount;
    use crate::domain::config_entry::ConfigEntry;
    use crate::domain::types::FieldName;
    use crate::query::{Combinator, FilterOperator};
    use crate::services::ServiceError;
    use serde_json::json;

    fn controller<E: ListEntity>() -> EntityListController<E> {
        EntityListController::new(PageSize::default(), Duration::from_millis(300))
    }

    fn admins_page(ids: &[i64], total: u64) -> RawPage {
        RawPage {
            items: ids
                .iter()
                .map(|id| json!({"id": id, "username": format!("admin{id}"), "status": 1}))
                .collect(),
            total_count: total,
        }
    }

    #[test]
    fn starts_idle_and_loads() {
        let mut list = controller::<AdminAccount>();
        assert_eq!(list.state(), &LoadState::Idle);

        let ticket = list.refresh();
        assert_eq!(list.state(), &LoadState::Loading);
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.sort_field, "id");

        let outcome = list.complete(ticket.seq, Ok(admins_page(&[1, 2], 2)));
        assert_eq!(outcome, Completion::Applied);
        assert_eq!(list.state(), &LoadState::Loaded);
        assert_eq!(list.rows().len(), 2);
        assert_eq!(list.pagination().total_count(), 2);
    }

    #[test]
    fn late_response_for_older_page_is_discarded() {
        let mut list = controller::<AdminAccount>();
        let page_one = list.change_page(1).unwrap();
        let page_two = list.change_page(2).unwrap();
        assert_eq!(page_two.query.page_index, 1);

        assert_eq!(
            list.complete(page_two.seq, Ok(admins_page(&[11, 12], 40))),
            Completion::Applied
        );
        assert_eq!(
            list.complete(page_one.seq, Ok(admins_page(&[1, 2], 39))),
            Completion::Stale
        );

        let ids: Vec<_> = list.rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(list.pagination().current_page(), 2);
        assert_eq!(list.pagination().total_count(), 40);
    }

    #[test]
    fn failure_keeps_rows_and_notifies() {
        let mut list = controller::<AdminAccount>();
        let first = list.refresh();
        list.complete(first.seq, Ok(admins_page(&[1], 1)));

        let second = list.refresh();
        list.complete(
            second.seq,
            Err(ServiceError::ListLoad("Request failed: 500".to_string())),
        );

        assert!(matches!(list.state(), LoadState::Failed(_)));
        assert_eq!(list.rows().len(), 1);
        let notification = list.take_notification().unwrap();
        assert!(notification.message.contains("Request failed: 500"));
        assert!(list.take_notification().is_none());

        let retry = list.refresh();
        assert_eq!(list.state(), &LoadState::Loading);
        assert!(retry.seq > second.seq);
    }

    #[test]
    fn clearing_search_refetches_unfiltered_first_page() {
        let mut list = controller::<AdminAccount>();
        let searched = list.submit_search("alice");
        assert_eq!(searched.query.filters.len(), 3);
        list.change_page(3).unwrap();

        let start = Instant::now();
        list.input_search("", start);
        assert!(list.poll_search(start + Duration::from_millis(100)).is_none());

        let cleared = list
            .poll_search(start + Duration::from_millis(300))
            .unwrap();

        assert!(cleared.query.filters.is_empty());
        assert_eq!(cleared.query.page_index, 0);
        assert_eq!(list.search_term(), "");
    }

    #[test]
    fn submit_search_cancels_debounced_input() {
        let mut list = controller::<ConfigEntry>();
        let start = Instant::now();
        list.input_search("fee", start);

        let ticket = list.submit_search("limit");
        assert!(ticket.query.filters.iter().all(|c| c.value == "\"limit\""));
        assert!(list.poll_search(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn filters_and_page_size_reset_to_first_page() {
        let mut list = controller::<ConfigEntry>();
        list.change_page(4).unwrap();

        let ticket = list.set_filters(vec![StructuredFilter::equals(
            FieldName::new("key").unwrap(),
            "fee_rate",
        )]);
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(
            ticket.query.filters[0].operator,
            FilterOperator::Equals
        );
        assert_eq!(ticket.query.filters[0].combinator, Combinator::And);

        list.change_page(2).unwrap();
        let ticket = list.change_page_size(PageSize::new(50).unwrap());
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.page_size, 50);
    }

    #[test]
    fn zero_page_is_rejected_without_issuing() {
        let mut list = controller::<ConfigEntry>();
        let before = list.refresh();
        assert!(matches!(
            list.change_page(0),
            Err(ServiceError::TypeConstraint(_))
        ));
        assert_eq!(
            list.complete(before.seq, Ok(RawPage { items: vec![], total_count: 0 })),
            Completion::Applied
        );
    }

    #[test]
    fn view_reports_server_total() {
        let mut list = controller::<AdminAccount>();
        let ticket = list.change_page(3).unwrap();
        list.complete(ticket.seq, Ok(admins_page(&[21], 21)));

        let view = list.view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.total, 21);
        assert_eq!(view.page, 3);
    }
}
