//! Back-office console client for the UCard platform.
//!
//! The crate is split the usual way: `domain` holds validated values and the
//! collection catalogue, `query` and `pagination` turn operator input into list
//! requests, `repository` talks to the REST API and persists the session, and
//! `services` ties it together behind the console actions.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod services;

/// Role recorded for operators signed in through the console.
pub const OPERATOR_ROLE: &str = "admin";

/// Rows per page until the operator picks another size.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Quiet period after the last keystroke before a search fires.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
