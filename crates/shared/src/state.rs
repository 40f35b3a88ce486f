use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserStore},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::InMemoryUserStore,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub cookie_name: String,
    pub google_client_id: Option<String>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let user_store = Arc::new(InMemoryUserStore::new()) as DynUserStore;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            user_store,
            default_cashier_id: config.default_cashier_id.clone(),
            default_method_id: config.default_method_id.clone(),
        };

        let di_container = DependenciesInject::new(deps);

        Self {
            di_container,
            jwt_config,
            cookie_name: config.cookie_name.clone(),
            google_client_id: config.google_client_id.clone(),
        }
    }
}
