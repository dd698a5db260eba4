//! Reqwest-backed adapter for the back-office REST API.
//!
//! Owns transport details only: URL building, bearer authentication, JSON
//! bodies and envelope unwrapping.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::collection::CollectionSpec;
use crate::domain::config_entry::NewConfigEntry;
use crate::domain::session::{Captcha, LoginCredentials, SessionHandle};
use crate::domain::types::{AuthToken, ConfigId, UserId};
use crate::domain::withdrawal::WithdrawalAudit;
use crate::dto::auth::{CaptchaDto, LoginDto, LoginRequestDto};
use crate::dto::list::{ListRequestDto, RawPage};
use crate::dto::mutation::{AuditRequestDto, ConfigPayloadDto};
use crate::models::config::ClientConfig;
use crate::query::ListQuery;
use crate::repository::envelope::{decode_ack, decode_envelope};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AuthGateway, CollectionReader, ConfigWriter, UserWriter, WithdrawalWriter};

const CAPTCHA_PATH: &str = "/dpi/v1/auth/captcha";
const LOGIN_PATH: &str = "/dpi/v1/auth/login";
const USERS_PATH: &str = "/dpi/v1/users";
const CONFIG_CREATE_PATH: &str = "/dpi/v1/config/create";
const CONFIG_PATH: &str = "/dpi/v1/config";
const WITHDRAW_AUDIT_PATH: &str = "/dpi/v1/withdraw/audit";

/// HTTP repository talking to one API host.
///
/// The session handle is read on every request, so signing in or out through
/// another clone of the handle takes effect immediately. Everything except
/// captcha and login needs a token.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl HttpRepository {
    /// Builds the adapter. Without a configured timeout the reqwest default
    /// applies.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &ClientConfig, session: SessionHandle) -> RepositoryResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).header(ACCEPT, "application/json")
    }

    /// Request carrying the bearer token. Fails before sending when signed out.
    fn authorized(&self, method: Method, path: &str) -> RepositoryResult<RequestBuilder> {
        let token = self.session.token().ok_or(RepositoryError::Unauthenticated)?;
        Ok(self
            .request(method, path)
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str())))
    }

    fn send(&self, builder: RequestBuilder) -> RepositoryResult<(u16, Vec<u8>)> {
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        Ok((status, body.to_vec()))
    }

    fn call<T: DeserializeOwned>(&self, builder: RequestBuilder) -> RepositoryResult<T> {
        let (status, body) = self.send(builder)?;
        decode_envelope(status, &body)
    }

    fn call_ack(&self, builder: RequestBuilder) -> RepositoryResult<()> {
        let (status, body) = self.send(builder)?;
        decode_ack(status, &body)
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> RepositoryResult<RequestBuilder> {
        Ok(self.authorized(Method::POST, path)?.json(body))
    }
}

impl CollectionReader for HttpRepository {
    fn list_records(
        &self,
        collection: &CollectionSpec,
        query: &ListQuery,
    ) -> RepositoryResult<RawPage> {
        log::debug!(
            "Listing {} page {} ({} filters)",
            collection.name,
            query.page_index,
            query.filters.len()
        );
        let payload: Value =
            self.call(self.post_json(collection.endpoint, &ListRequestDto::from(query))?)?;
        RawPage::from_payload(payload, collection.items_key)
    }
}

impl UserWriter for HttpRepository {
    fn delete_user(&self, user_id: UserId) -> RepositoryResult<()> {
        let path = format!("{USERS_PATH}/{user_id}");
        self.call_ack(self.authorized(Method::DELETE, &path)?)
    }
}

impl ConfigWriter for HttpRepository {
    fn create_config(&self, entry: &NewConfigEntry) -> RepositoryResult<()> {
        self.call_ack(self.post_json(CONFIG_CREATE_PATH, &ConfigPayloadDto::from(entry))?)
    }

    fn update_config(&self, config_id: ConfigId, entry: &NewConfigEntry) -> RepositoryResult<()> {
        let path = format!("{CONFIG_PATH}/{config_id}");
        self.call_ack(
            self.authorized(Method::PUT, &path)?
                .json(&ConfigPayloadDto::from(entry)),
        )
    }
}

impl WithdrawalWriter for HttpRepository {
    fn audit_withdrawal(&self, audit: &WithdrawalAudit) -> RepositoryResult<()> {
        self.call_ack(self.post_json(WITHDRAW_AUDIT_PATH, &AuditRequestDto::from(audit))?)
    }
}

impl AuthGateway for HttpRepository {
    fn fetch_captcha(&self) -> RepositoryResult<Captcha> {
        let dto: CaptchaDto = self.call(self.request(Method::GET, CAPTCHA_PATH))?;
        Captcha::try_from(dto).map_err(RepositoryError::from)
    }

    fn login(&self, credentials: &LoginCredentials) -> RepositoryResult<AuthToken> {
        let dto: LoginDto = self.call(
            self.request(Method::POST, LOGIN_PATH)
                .json(&LoginRequestDto::from(credentials)),
        )?;
        AuthToken::new(dto.token).map_err(RepositoryError::from)
    }
}
