use crate::{
    abstract_trait::{DynCashierRepository, DynHashing, DynJwtService, DynUserStore, StoredUser},
    domain::{
        requests::{LoginRequest, RegisterCashierRecord, RegisterRequest},
        response::AuthUser,
    },
    errors::ServiceError,
    model::Cashier,
    utils::generate_digit_id,
};
use chrono::NaiveDate;
use tracing::{error, info, warn};

pub struct AuthService {
    cashiers: DynCashierRepository,
    users: DynUserStore,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(
        cashiers: DynCashierRepository,
        users: DynUserStore,
        hashing: DynHashing,
        jwt: DynJwtService,
    ) -> Self {
        Self {
            cashiers,
            users,
            hashing,
            jwt,
        }
    }

    fn clip(value: &str, max: usize) -> String {
        value.chars().take(max).collect()
    }

    fn cashier_user(cashier: &Cashier) -> AuthUser {
        AuthUser {
            sub: cashier.id.clone(),
            email: Some(cashier.email.clone()),
            name: Some(cashier.username.clone()),
            picture: None,
            role: Some("cashier".to_string()),
        }
    }

    async fn build_cashier_record(
        &self,
        req: &RegisterRequest,
    ) -> Result<RegisterCashierRecord, ServiceError> {
        let id = generate_digit_id(8).map_err(|err| ServiceError::Internal(err.to_string()))?;

        let email = if req.identifier.contains('@') {
            Self::clip(&req.identifier, 40)
        } else {
            Self::clip(&format!("{}@example.local", req.identifier), 40)
        };

        let password_hash = self.hashing.hash_password(&req.password).await?;

        Ok(RegisterCashierRecord {
            id,
            username: Self::clip(&req.name, 45),
            email,
            contact_number: "080000000000".to_string(),
            address: "-".to_string(),
            place_of_birth: "-".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            gender_id: "L".to_string(),
            password_hash,
        })
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<(AuthUser, String), ServiceError> {
        match self.cashiers.find_by_identifier(&req.identifier).await {
            Ok(Some(_)) => Err(ServiceError::Conflict(
                "An account with this identifier already exists".to_string(),
            )),
            Ok(None) => {
                let record = self.build_cashier_record(req).await?;
                let cashier = self.cashiers.create(&record).await?;

                let user = Self::cashier_user(&cashier);
                let token = self.jwt.sign_session(&user)?;

                info!("🧾 Registered cashier {}", user.sub);
                Ok((user, token))
            }
            Err(err) => {
                warn!("⚠️ Cashier table unreachable, registering in the fallback store: {err:?}");
                self.register_fallback(req).await
            }
        }
    }

    /// Database-less path: the account lives only in the injected store and
    /// signs in with the customer role.
    async fn register_fallback(
        &self,
        req: &RegisterRequest,
    ) -> Result<(AuthUser, String), ServiceError> {
        if self.users.get(&req.identifier).await.is_some() {
            return Err(ServiceError::Conflict(
                "An account with this identifier already exists".to_string(),
            ));
        }

        let sub = generate_digit_id(8).map_err(|err| ServiceError::Internal(err.to_string()))?;
        let email = if req.identifier.contains('@') {
            Some(req.identifier.clone())
        } else {
            None
        };

        let user = AuthUser {
            sub,
            email,
            name: Some(req.name.clone()),
            picture: None,
            role: Some("customer".to_string()),
        };

        let password_hash = self.hashing.hash_password(&req.password).await?;
        self.users
            .put(
                &req.identifier,
                StoredUser {
                    user: user.clone(),
                    password_hash,
                },
            )
            .await;

        let token = self.jwt.sign_session(&user)?;
        Ok((user, token))
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<(AuthUser, String), ServiceError> {
        match self.cashiers.find_by_identifier(&req.identifier).await {
            Ok(Some(cashier)) => {
                self.hashing
                    .compare_password(&cashier.password, &req.password)
                    .await?;

                let user = Self::cashier_user(&cashier);
                let token = self.jwt.sign_session(&user)?;

                info!("🔓 Cashier {} signed in", user.sub);
                Ok((user, token))
            }
            Ok(None) => self.login_fallback(req).await,
            Err(err) => {
                error!("⚠️ Cashier lookup failed, trying the fallback store: {err:?}");
                self.login_fallback(req).await
            }
        }
    }

    async fn login_fallback(&self, req: &LoginRequest) -> Result<(AuthUser, String), ServiceError> {
        let Some(stored) = self.users.get(&req.identifier).await else {
            return Err(ServiceError::InvalidCredentials);
        };

        self.hashing
            .compare_password(&stored.password_hash, &req.password)
            .await?;

        let token = self.jwt.sign_session(&stored.user)?;
        Ok((stored.user, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CashierRepositoryTrait, HashingTrait, JwtServiceTrait},
        domain::requests::FindAllCashiers,
        errors::RepositoryError,
        repository::InMemoryUserStore,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Cashier table fake. `unreachable` simulates the database being down.
    struct FakeCashierRepository {
        rows: Mutex<Vec<Cashier>>,
        unreachable: bool,
    }

    impl FakeCashierRepository {
        fn reachable() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                unreachable: false,
            }
        }

        fn down() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                unreachable: true,
            }
        }

        fn check(&self) -> Result<(), RepositoryError> {
            if self.unreachable {
                Err(RepositoryError::Custom("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl CashierRepositoryTrait for FakeCashierRepository {
        async fn find_all(&self, _req: &FindAllCashiers) -> Result<Vec<Cashier>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Cashier>, RepositoryError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_identifier(
            &self,
            identifier: &str,
        ) -> Result<Option<Cashier>, RepositoryError> {
            self.check()?;
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.username == identifier || c.email == identifier)
                .cloned())
        }

        async fn create(&self, record: &RegisterCashierRecord) -> Result<Cashier, RepositoryError> {
            self.check()?;
            let cashier = Cashier {
                id: record.id.clone(),
                username: record.username.clone(),
                email: record.email.clone(),
                contact_number: record.contact_number.clone(),
                address: record.address.clone(),
                place_of_birth: record.place_of_birth.clone(),
                date_of_birth: record.date_of_birth,
                gender_id: record.gender_id.clone(),
                password: record.password_hash.clone(),
                created_at: None,
                updated_at: None,
            };
            self.rows.lock().unwrap().push(cashier.clone());
            Ok(cashier)
        }
    }

    /// Deterministic hasher so tests never pay the bcrypt cost.
    struct FakeHashing;

    #[async_trait]
    impl HashingTrait for FakeHashing {
        async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
            Ok(format!("hashed:{password}"))
        }

        async fn compare_password(
            &self,
            hashed_password: &str,
            password: &str,
        ) -> Result<(), ServiceError> {
            if hashed_password == format!("hashed:{password}") {
                Ok(())
            } else {
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    struct FakeJwt;

    impl JwtServiceTrait for FakeJwt {
        fn sign_session(&self, user: &AuthUser) -> Result<String, ServiceError> {
            Ok(format!("token:{}", user.sub))
        }

        fn verify_session(&self, token: &str) -> Result<AuthUser, ServiceError> {
            let sub = token
                .strip_prefix("token:")
                .ok_or(ServiceError::InvalidCredentials)?;
            Ok(AuthUser {
                sub: sub.to_string(),
                email: None,
                name: None,
                picture: None,
                role: None,
            })
        }
    }

    fn service(cashiers: FakeCashierRepository) -> AuthService {
        AuthService::new(
            Arc::new(cashiers),
            Arc::new(InMemoryUserStore::new()),
            Arc::new(FakeHashing),
            Arc::new(FakeJwt),
        )
    }

    fn register_request(identifier: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Dina Kartika".to_string(),
            identifier: identifier.to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_against_the_cashier_table() {
        let svc = service(FakeCashierRepository::reachable());

        let (user, token) = svc.register(&register_request("dina")).await.unwrap();
        assert_eq!(user.sub.len(), 8);
        assert_eq!(user.role.as_deref(), Some("cashier"));
        assert!(token.starts_with("token:"));

        let (logged_in, _) = svc
            .login(&LoginRequest {
                identifier: "Dina Kartika".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.sub, user.sub);
    }

    #[tokio::test]
    async fn duplicate_identifier_is_a_conflict() {
        let svc = service(FakeCashierRepository::reachable());

        svc.register(&register_request("dina@example.com"))
            .await
            .unwrap();
        let err = svc
            .register(&register_request("dina@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let svc = service(FakeCashierRepository::reachable());
        svc.register(&register_request("dina")).await.unwrap();

        let err = svc
            .login(&LoginRequest {
                identifier: "Dina Kartika".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unreachable_database_falls_back_to_the_injected_store() {
        let svc = service(FakeCashierRepository::down());

        let (user, _) = svc.register(&register_request("dina")).await.unwrap();
        assert_eq!(user.role.as_deref(), Some("customer"));

        let (logged_in, token) = svc
            .login(&LoginRequest {
                identifier: "dina".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.sub, user.sub);
        assert_eq!(token, format!("token:{}", user.sub));
    }

    #[tokio::test]
    async fn unknown_identifier_is_invalid_credentials() {
        let svc = service(FakeCashierRepository::reachable());

        let err = svc
            .login(&LoginRequest {
                identifier: "nobody".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
