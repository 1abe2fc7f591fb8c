//! Process configuration from the environment.

/// Startup configuration. The database connection string is the only
/// required piece; the bind address has a sensible default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/commerce_records";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

impl AppConfig {
    /// Read `DATABASE_URL` and `BIND_ADDR` from the environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("BIND_ADDR").ok(),
        )
    }

    fn from_vars(database_url: Option<String>, bind_addr: Option<String>) -> Self {
        AppConfig {
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_vars(None, None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn env_values_win() {
        let config = AppConfig::from_vars(
            Some("postgres://db.internal/shop".into()),
            Some("127.0.0.1:8080".into()),
        );
        assert_eq!(config.database_url, "postgres://db.internal/shop");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }
}
