use crate::abstract_trait::{StoredUser, UserStoreTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory fallback credential store. One instance is owned by the DI
/// container, so its lifetime is the process, not a global.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, StoredUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStoreTrait for InMemoryUserStore {
    async fn get(&self, identifier: &str) -> Option<StoredUser> {
        self.users.read().await.get(identifier).cloned()
    }

    async fn put(&self, identifier: &str, user: StoredUser) {
        self.users.write().await.insert(identifier.to_string(), user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::AuthUser;

    #[tokio::test]
    async fn stores_and_returns_users_by_identifier() {
        let store = InMemoryUserStore::new();

        assert!(store.get("budi").await.is_none());

        store
            .put(
                "budi",
                StoredUser {
                    user: AuthUser {
                        sub: "abc123".into(),
                        email: None,
                        name: Some("Budi".into()),
                        picture: None,
                        role: Some("customer".into()),
                    },
                    password_hash: "$2b$04$hash".into(),
                },
            )
            .await;

        let stored = store.get("budi").await.expect("user should exist");
        assert_eq!(stored.user.name.as_deref(), Some("Budi"));
    }
}
