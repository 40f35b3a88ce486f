use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_pool_size: u32,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub cookie_name: String,
    pub default_cashier_id: String,
    pub default_method_id: String,
    pub google_client_id: Option<String>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let database_pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(value) => value
                .parse::<u32>()
                .context("DATABASE_POOL_SIZE must be a valid u32 integer")?,
            Err(_) => 5,
        };

        let cookie_name = std::env::var("AUTH_COOKIE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "atk_web_session".to_string());

        // Fallback parties used when an incoming sale omits them. The seed
        // migration guarantees both rows exist.
        let default_cashier_id = std::env::var("DEFAULT_CASHIER_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "12345678".to_string());
        let default_method_id = std::env::var("DEFAULT_METHOD_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "1".to_string());

        let google_client_id = std::env::var("GOOGLE_CLIENT_ID")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            database_url,
            database_pool_size,
            jwt_secret,
            run_migrations,
            port,
            cookie_name,
            default_cashier_id,
            default_method_id,
            google_client_id,
        })
    }
}
