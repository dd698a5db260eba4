//! Captcha-protected sign-in and session persistence.

use chrono::Utc;

use crate::domain::session::{Captcha, LoginCredentials, Session, SessionHandle, UserProfile};
use crate::domain::types::AuthToken;
use crate::forms::login::LoginForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{AuthGateway, PROFILE_KEY, SessionStore, TOKEN_KEY};
use crate::services::{ServiceError, ServiceResult};

/// Restores the session persisted by a previous [`login`].
///
/// A profile that no longer parses is dropped; the token alone still counts
/// as signed in.
pub fn load_session<S>(store: &S) -> ServiceResult<Session>
where
    S: SessionStore + ?Sized,
{
    let Some(token) = store.get(TOKEN_KEY)? else {
        return Ok(Session::default());
    };
    let token = match AuthToken::new(token) {
        Ok(token) => token,
        Err(_) => {
            log::warn!("Ignoring empty stored token");
            return Ok(Session::default());
        }
    };

    let profile = store
        .get(PROFILE_KEY)?
        .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("Ignoring unreadable stored profile: {err}");
                None
            }
        });

    Ok(Session {
        token: Some(token),
        profile,
    })
}

pub fn fetch_captcha<R>(repo: &R) -> ServiceResult<Captcha>
where
    R: AuthGateway + ?Sized,
{
    repo.fetch_captcha().map_err(|err| {
        log::error!("Failed to fetch captcha: {err}");
        ServiceError::from(err)
    })
}

/// Exchanges the form for a token, persists it with the profile and swaps it
/// into the shared handle.
pub fn login<R, S>(
    repo: &R,
    store: &S,
    handle: &SessionHandle,
    form: LoginForm,
) -> ServiceResult<UserProfile>
where
    R: AuthGateway + ?Sized,
    S: SessionStore + ?Sized,
{
    let credentials = LoginCredentials::try_from(form)?;

    let token = repo.login(&credentials).map_err(|err| {
        log::error!("Login failed for {}: {err}", credentials.username);
        ServiceError::from(err)
    })?;

    let profile = UserProfile::for_login(credentials.username, Utc::now());
    let profile_json = serde_json::to_string(&profile).map_err(RepositoryError::from)?;

    store.set(TOKEN_KEY, token.as_str())?;
    store.set(PROFILE_KEY, &profile_json)?;
    handle.replace(Session::signed_in(token, profile.clone()));

    log::info!("Signed in as {}", profile.username);
    Ok(profile)
}

/// Clears the in-memory session first, then the persisted keys.
pub fn logout<S>(store: &S, handle: &SessionHandle) -> ServiceResult<()>
where
    S: SessionStore + ?Sized,
{
    handle.clear();
    store.remove(TOKEN_KEY)?;
    store.remove(PROFILE_KEY)?;
    Ok(())
}
