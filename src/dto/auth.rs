//! Wire shapes of the captcha and login endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::session::{Captcha, LoginCredentials};
use crate::domain::types::{CaptchaKey, TypeConstraintError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaDto {
    pub captcha_base64: String,
    pub captcha_key: String,
}

impl TryFrom<CaptchaDto> for Captcha {
    type Error = TypeConstraintError;

    fn try_from(dto: CaptchaDto) -> Result<Self, Self::Error> {
        let image = if dto.captcha_base64.starts_with("data:") {
            dto.captcha_base64
        } else {
            format!("data:image/png;base64,{}", dto.captcha_base64)
        };

        Ok(Self {
            key: CaptchaKey::new(dto.captcha_key)?,
            image,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub captcha_key: &'a str,
    pub captcha_code: &'a str,
}

impl<'a> From<&'a LoginCredentials> for LoginRequestDto<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            username: credentials.username.as_str(),
            password: &credentials.password,
            captcha_key: credentials.captcha_key.as_str(),
            captcha_code: &credentials.captcha_code,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginDto {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_base64_gets_data_uri_prefix() {
        let captcha = Captcha::try_from(CaptchaDto {
            captcha_base64: "iVBORw0".to_string(),
            captcha_key: "k1".to_string(),
        })
        .unwrap();
        assert_eq!(captcha.image, "data:image/png;base64,iVBORw0");
        assert_eq!(captcha.key.as_str(), "k1");
    }

    #[test]
    fn existing_data_uri_is_kept() {
        let captcha = Captcha::try_from(CaptchaDto {
            captcha_base64: "data:image/gif;base64,R0lG".to_string(),
            captcha_key: "k2".to_string(),
        })
        .unwrap();
        assert_eq!(captcha.image, "data:image/gif;base64,R0lG");
    }
}
