use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::WithdrawalId;
use crate::domain::withdrawal::WithdrawalAudit;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_rejection_remark"))]
/// Approve or reject a pending withdrawal.
pub struct AuditWithdrawalForm {
    pub id: i64,
    pub approve: bool,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub remark: Option<String>,
}

fn validate_rejection_remark(form: &AuditWithdrawalForm) -> Result<(), ValidationError> {
    let has_remark = form
        .remark
        .as_deref()
        .is_some_and(|remark| !remark.trim().is_empty());
    if form.approve || has_remark {
        Ok(())
    } else {
        Err(ValidationError::new("remark_required")
            .with_message("A remark is required when rejecting".into()))
    }
}

impl TryFrom<AuditWithdrawalForm> for WithdrawalAudit {
    type Error = FormError;

    fn try_from(form: AuditWithdrawalForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            id: WithdrawalId::new(form.id).map_err(|_| FormError::InvalidWithdrawalId)?,
            approve: form.approve,
            remark: form
                .remark
                .map(|remark| remark.trim().to_string())
                .filter(|remark| !remark.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_needs_no_remark() {
        let audit = WithdrawalAudit::try_from(AuditWithdrawalForm {
            id: 5,
            approve: true,
            remark: None,
        })
        .unwrap();
        assert!(audit.approve);
        assert_eq!(audit.remark, None);
    }

    #[test]
    fn rejection_requires_remark() {
        let result = WithdrawalAudit::try_from(AuditWithdrawalForm {
            id: 5,
            approve: false,
            remark: Some("  ".to_string()),
        });
        assert!(matches!(result, Err(FormError::Validation(_))));

        let audit = WithdrawalAudit::try_from(AuditWithdrawalForm {
            id: 5,
            approve: false,
            remark: Some(" address flagged ".to_string()),
        })
        .unwrap();
        assert_eq!(audit.remark.as_deref(), Some("address flagged"));
    }
}
