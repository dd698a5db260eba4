use serde::Deserialize;
use validator::Validate;

use crate::domain::session::LoginCredentials;
use crate::domain::types::{CaptchaKey, Username};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Sign-in form. The captcha key comes from the challenge being answered.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub captcha_key: String,
    #[validate(length(min = 1))]
    pub captcha_code: String,
}

impl TryFrom<LoginForm> for LoginCredentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            username: Username::new(form.username).map_err(|_| FormError::InvalidUsername)?,
            password: form.password,
            captcha_key: CaptchaKey::new(form.captcha_key)
                .map_err(|_| FormError::InvalidCaptchaKey)?,
            captcha_code: form.captcha_code.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            captcha_key: "k-1".to_string(),
            captcha_code: " 7f3a ".to_string(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let credentials = LoginCredentials::try_from(form(" ops ", "secret")).unwrap();
        assert_eq!(credentials.username.as_str(), "ops");
        assert_eq!(credentials.password, "secret");
        assert_eq!(credentials.captcha_code, "7f3a");
    }

    #[test]
    fn rejects_empty_password() {
        let result = LoginCredentials::try_from(form("ops", ""));
        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn rejects_blank_username() {
        let result = LoginCredentials::try_from(form("   ", "secret"));
        assert!(matches!(result, Err(FormError::InvalidUsername)));
    }
}
