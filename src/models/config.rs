//! Configuration model loaded from external sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::types::{PageSize, TypeConstraintError};

const DEFAULT_BASE_URL: &str = "https://api.ucard.techpulse.pro";
const DEFAULT_SESSION_FILE: &str = ".ucard-admin/session.json";

#[derive(Clone, Debug, Deserialize)]
/// Settings for talking to the back-office API.
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// Request timeout; the transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Validated initial page size.
    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.page_size)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
            session_file: default_session_file(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    crate::DEFAULT_PAGE_SIZE
}

fn default_search_debounce_ms() -> u64 {
    crate::DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_session_file() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size().unwrap().get(), 50);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn rejects_unsupported_page_size() {
        let config = ClientConfig {
            page_size: 15,
            ..ClientConfig::default()
        };
        assert_eq!(
            config.page_size(),
            Err(TypeConstraintError::InvalidPageSize(15))
        );
    }
}
