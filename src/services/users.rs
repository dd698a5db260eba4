//! Platform user administration.

use crate::domain::session::Session;
use crate::domain::types::UserId;
use crate::repository::UserWriter;
use crate::services::{ServiceError, ServiceResult, ensure_signed_in};

/// Permanently removes a platform user.
pub fn delete_user<R>(repo: &R, session: &Session, user_id: i64) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    ensure_signed_in(session)?;

    let user_id = UserId::new(user_id)?;

    repo.delete_user(user_id).map_err(|err| {
        log::error!("Failed to delete user {user_id}: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Deleted user {user_id}");
    Ok(())
}
