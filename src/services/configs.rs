//! Key/value config administration.

use crate::domain::session::Session;
use crate::forms::config::{ConfigForm, ConfigPayload};
use crate::repository::ConfigWriter;
use crate::services::{ServiceError, ServiceResult, ensure_signed_in};

/// Validates the form and creates or replaces the entry.
pub fn save_config<R>(repo: &R, session: &Session, form: ConfigForm) -> ServiceResult<()>
where
    R: ConfigWriter + ?Sized,
{
    ensure_signed_in(session)?;

    let payload = ConfigPayload::try_from(form)?;

    let result = match payload.id {
        Some(config_id) => repo.update_config(config_id, &payload.entry),
        None => repo.create_config(&payload.entry),
    };

    result.map_err(|err| {
        log::error!("Failed to save config {}: {err}", payload.entry.key);
        ServiceError::from(err)
    })
}
