//! Pager state owned by a list controller and the page-link window rendered
//! from it.

use serde::Serialize;

use crate::domain::types::{PageSize, TypeConstraintError};

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Position of a list view within its collection.
///
/// `current_page` is 1-based. It is not clamped against `total_count`, so a
/// page past the end stays selected until the user moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: usize,
    page_size: PageSize,
    total_count: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// 0-based index sent to the remote endpoint.
    pub fn page_index(&self) -> usize {
        self.current_page - 1
    }

    pub fn set_page(&mut self, page: usize) -> Result<(), TypeConstraintError> {
        if page == 0 {
            return Err(TypeConstraintError::ZeroPage);
        }
        self.current_page = page;
        Ok(())
    }

    /// Changing the page size goes back to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }

    /// Records the filtered total reported by the server.
    pub fn apply_total(&mut self, total_count: u64) {
        self.total_count = total_count;
    }

    pub fn total_pages(&self) -> usize {
        let total = usize::try_from(self.total_count).unwrap_or(usize::MAX);
        total.div_ceil(self.page_size.get())
    }

    /// Page links with `None` marking a gap.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        get_pages(self.total_pages(), self.current_page, 2, 2, 4, 2)
    }
}

/// One page of rows together with the data a pager needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: &PaginationState) -> Self {
        Self {
            items,
            pages: pagination.page_links(),
            page: pagination.current_page(),
            total: pagination.total_count(),
        }
    }
}
