use crate::{abstract_trait::JwtServiceTrait, domain::response::AuthUser, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const TOKEN_ISSUER: &str = "atk-web-backend";
pub const TOKEN_AUDIENCE: &str = "atk-web-frontend";

/// Cookie session payload. Mirrors what the frontend needs to render the
/// logged-in state without another round-trip.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
    pub aud: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn sign_session(&self, user: &AuthUser) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.sub.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
            role: user.role.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(7)).timestamp() as usize,
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_session(&self, token: &str) -> Result<AuthUser, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        let mut validation = Validation::default();
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        let token_data =
            decode::<SessionClaims>(token, &decoding_key, &validation).map_err(ServiceError::Jwt)?;

        let claims = token_data.claims;
        Ok(AuthUser {
            sub: claims.sub,
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
            role: claims.role,
        })
    }
}
