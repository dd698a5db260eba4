//! Request bodies of the config and withdrawal mutation endpoints.

use serde::Serialize;

use crate::domain::config_entry::NewConfigEntry;
use crate::domain::withdrawal::WithdrawalAudit;

#[derive(Debug, Serialize)]
pub struct ConfigPayloadDto<'a> {
    pub key: &'a str,
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<&'a str>,
}

impl<'a> From<&'a NewConfigEntry> for ConfigPayloadDto<'a> {
    fn from(entry: &'a NewConfigEntry) -> Self {
        Self {
            key: entry.key.as_str(),
            value: &entry.value,
            remark: entry.remark.as_deref(),
        }
    }
}

/// Body `{id, status, remark}` where `status` is the approve flag.
#[derive(Debug, Serialize)]
pub struct AuditRequestDto<'a> {
    pub id: i64,
    pub status: bool,
    pub remark: &'a str,
}

impl<'a> From<&'a WithdrawalAudit> for AuditRequestDto<'a> {
    fn from(audit: &'a WithdrawalAudit) -> Self {
        Self {
            id: audit.id.get(),
            status: audit.approve,
            remark: audit.remark.as_deref().unwrap_or_default(),
        }
    }
}
