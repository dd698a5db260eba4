//! Withdrawal review.

use crate::domain::session::Session;
use crate::domain::withdrawal::WithdrawalAudit;
use crate::forms::withdrawal::AuditWithdrawalForm;
use crate::repository::WithdrawalWriter;
use crate::services::{ServiceError, ServiceResult, ensure_signed_in};

/// Approves or rejects a withdrawal. Rejections must carry a remark; the
/// form is checked before anything is sent.
pub fn audit_withdrawal<R>(
    repo: &R,
    session: &Session,
    form: AuditWithdrawalForm,
) -> ServiceResult<WithdrawalAudit>
where
    R: WithdrawalWriter + ?Sized,
{
    ensure_signed_in(session)?;

    let audit = WithdrawalAudit::try_from(form)?;

    repo.audit_withdrawal(&audit).map_err(|err| {
        log::error!("Failed to audit withdrawal {}: {err}", audit.id);
        ServiceError::from(err)
    })?;

    log::info!(
        "Withdrawal {} {}",
        audit.id,
        if audit.approve { "approved" } else { "rejected" }
    );
    Ok(audit)
}
