//! DTO modules that bridge services with the remote API and the UI.

pub mod auth;
pub mod list;
pub mod mutation;
pub mod notification;
