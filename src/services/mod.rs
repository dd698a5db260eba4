//! Operations behind the console screens: list fetching, the generic list
//! controller, mutations and sign-in.

use crate::domain::session::Session;
use crate::dto::notification::Notification;

pub mod auth;
pub mod configs;
pub mod controller;
pub mod debounce;
pub mod errors;
pub mod list;
pub mod users;
pub mod withdrawals;

pub use errors::{ServiceError, ServiceResult};

/// Rejects calls made without a signed-in operator.
pub fn ensure_signed_in(session: &Session) -> ServiceResult<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Converts a mutation outcome into the notification shown to the operator.
pub fn notify<T>(result: &ServiceResult<T>, success: &str) -> Notification {
    match result {
        Ok(_) => Notification::success(success),
        Err(err) => Notification::error(err.to_string()),
    }
}
