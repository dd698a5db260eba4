//! Seams between the services and the remote back-office API.

use crate::{
    domain::{
        collection::CollectionSpec,
        config_entry::NewConfigEntry,
        session::{Captcha, LoginCredentials},
        types::{AuthToken, ConfigId, UserId},
        withdrawal::WithdrawalAudit,
    },
    dto::list::RawPage,
    query::ListQuery,
    repository::errors::RepositoryResult,
};

pub mod envelope;
pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod session_store;

#[cfg(feature = "client")]
pub use http::HttpRepository;
pub use session_store::{FileSessionStore, MemorySessionStore};

/// Key of the persisted bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Key of the persisted, JSON-serialized operator profile.
pub const PROFILE_KEY: &str = "user_info";

pub trait CollectionReader {
    /// Fetches one page of raw rows from a collection endpoint.
    fn list_records(&self, collection: &CollectionSpec, query: &ListQuery)
    -> RepositoryResult<RawPage>;
}

pub trait UserWriter {
    fn delete_user(&self, user_id: UserId) -> RepositoryResult<()>;
}

pub trait ConfigWriter {
    fn create_config(&self, entry: &NewConfigEntry) -> RepositoryResult<()>;
    fn update_config(&self, config_id: ConfigId, entry: &NewConfigEntry) -> RepositoryResult<()>;
}

pub trait WithdrawalWriter {
    fn audit_withdrawal(&self, audit: &WithdrawalAudit) -> RepositoryResult<()>;
}

pub trait AuthGateway {
    fn fetch_captcha(&self) -> RepositoryResult<Captcha>;
    fn login(&self, credentials: &LoginCredentials) -> RepositoryResult<AuthToken>;
}

/// String-keyed persistent client state.
pub trait SessionStore {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;
    fn remove(&self, key: &str) -> RepositoryResult<()>;
}
