//! Signed-in operator state shared between the auth flow and the transport.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthToken, CaptchaKey, Username};

/// Profile shown for the signed-in operator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: Username,
    pub role: String,
    pub signed_in_at: DateTime<Utc>,
}

impl UserProfile {
    /// The login endpoint only returns a token, so the profile is derived
    /// from the submitted username.
    pub fn for_login(username: Username, signed_in_at: DateTime<Utc>) -> Self {
        Self {
            username,
            role: crate::OPERATOR_ROLE.to_string(),
            signed_in_at,
        }
    }
}

/// Captcha challenge shown on the login screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captcha {
    pub key: CaptchaKey,
    /// Image as a `data:` URI ready for an `<img>` tag.
    pub image: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: Username,
    pub password: String,
    pub captcha_key: CaptchaKey,
    pub captcha_code: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("captcha_key", &self.captcha_key)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<AuthToken>,
    pub profile: Option<UserProfile>,
}

impl Session {
    pub fn signed_in(token: AuthToken, profile: UserProfile) -> Self {
        Self {
            token: Some(token),
            profile: Some(profile),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared, swappable view of the current [`Session`].
///
/// Cloned into the transport at construction; login and logout replace the
/// inner value so every holder sees the change.
#[derive(Clone, Debug, Default)]
pub struct SessionHandle(Arc<RwLock<Session>>);

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self(Arc::new(RwLock::new(session)))
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn snapshot(&self) -> Session {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, session: Session) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    pub fn clear(&self) {
        self.replace(Session::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_clones_share_state() {
        let handle = SessionHandle::default();
        let transport_view = handle.clone();
        assert!(transport_view.token().is_none());

        let username = Username::new("ops").unwrap();
        let token = AuthToken::new("t-1").unwrap();
        handle.replace(Session::signed_in(
            token.clone(),
            UserProfile::for_login(username, Utc::now()),
        ));

        assert_eq!(transport_view.token(), Some(token));
        assert!(transport_view.snapshot().is_authenticated());

        handle.clear();
        assert!(!transport_view.snapshot().is_authenticated());
    }
}
