//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::collection::CollectionSpec;
use crate::domain::config_entry::NewConfigEntry;
use crate::domain::session::{Captcha, LoginCredentials};
use crate::domain::types::{AuthToken, ConfigId, UserId};
use crate::domain::withdrawal::WithdrawalAudit;
use crate::dto::list::RawPage;
use crate::query::ListQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AuthGateway, CollectionReader, ConfigWriter, SessionStore, UserWriter, WithdrawalWriter,
};

mock! {
    pub Repository {}

    impl CollectionReader for Repository {
        fn list_records(
            &self,
            collection: &CollectionSpec,
            query: &ListQuery,
        ) -> RepositoryResult<RawPage>;
    }

    impl UserWriter for Repository {
        fn delete_user(&self, user_id: UserId) -> RepositoryResult<()>;
    }

    impl ConfigWriter for Repository {
        fn create_config(&self, entry: &NewConfigEntry) -> RepositoryResult<()>;
        fn update_config(&self, config_id: ConfigId, entry: &NewConfigEntry) -> RepositoryResult<()>;
    }

    impl WithdrawalWriter for Repository {
        fn audit_withdrawal(&self, audit: &WithdrawalAudit) -> RepositoryResult<()>;
    }

    impl AuthGateway for Repository {
        fn fetch_captcha(&self) -> RepositoryResult<Captcha>;
        fn login(&self, credentials: &LoginCredentials) -> RepositoryResult<AuthToken>;
    }
}

mock! {
    pub Store {}

    impl SessionStore for Store {
        fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
        fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;
        fn remove(&self, key: &str) -> RepositoryResult<()>;
    }
}
