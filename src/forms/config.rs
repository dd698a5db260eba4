//! Create and edit form for key/value config entries.

use serde::Deserialize;
use validator::Validate;

use crate::domain::config_entry::NewConfigEntry;
use crate::domain::types::{ConfigId, ConfigKey};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct ConfigForm {
    /// Present when editing an existing entry.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 128))]
    pub key: String,
    #[validate(length(min = 1))]
    pub value: String,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Validated config form.
pub struct ConfigPayload {
    /// `None` creates a new entry.
    pub id: Option<ConfigId>,
    pub entry: NewConfigEntry,
}

impl TryFrom<ConfigForm> for ConfigPayload {
    type Error = FormError;

    fn try_from(mut form: ConfigForm) -> Result<Self, Self::Error> {
        form.key = form.key.trim().to_string();
        form.value = form.value.trim().to_string();
        form.validate()?;

        let id = form
            .id
            .map(ConfigId::new)
            .transpose()
            .map_err(|_| FormError::InvalidConfigId)?;
        let key = ConfigKey::new(form.key).map_err(|_| FormError::InvalidConfigKey)?;

        Ok(Self {
            id,
            entry: NewConfigEntry::new(key, form.value, form.remark),
        })
    }
}
