//! Operator input for the console actions.
//!
//! Forms arrive as loose strings, are checked with `validator` and then
//! converted into validated domain payloads.

use thiserror::Error;
use validator::ValidationErrors;

pub mod config;
pub mod filters;
pub mod login;
pub mod withdrawal;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid username")]
    InvalidUsername,

    #[error("invalid captcha key")]
    InvalidCaptchaKey,

    #[error("invalid config key")]
    InvalidConfigKey,

    #[error("invalid config id")]
    InvalidConfigId,

    #[error("invalid withdrawal id")]
    InvalidWithdrawalId,

    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}
