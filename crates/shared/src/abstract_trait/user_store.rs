use crate::domain::response::AuthUser;
use async_trait::async_trait;
use std::sync::Arc;

/// A user kept in the database-less fallback store.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password_hash: String,
}

pub type DynUserStore = Arc<dyn UserStoreTrait + Send + Sync>;

/// Fallback credential store used when the cashier table is unreachable.
/// Injected rather than process-global so tests get a fresh store each run.
#[async_trait]
pub trait UserStoreTrait: Send + Sync {
    async fn get(&self, identifier: &str) -> Option<StoredUser>;
    async fn put(&self, identifier: &str, user: StoredUser);
}
