use crate::{domain::response::AuthUser, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync {
    fn sign_session(&self, user: &AuthUser) -> Result<String, ServiceError>;
    fn verify_session(&self, token: &str) -> Result<AuthUser, ServiceError>;
}
