use std::env;

/// Runtime configuration, loaded once from the environment at startup and
/// passed to the server via `web::Data`. Nothing in the application reads
/// environment variables after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    /// HMAC secret for signing session tokens.
    pub secret_key: String,
    /// Session token lifetime in hours.
    pub jwt_expiration_hours: i64,
    /// bcrypt cost factor used when hashing passwords.
    pub salt_rounds: u32,
    /// `development` or `production`; governs the `Secure` flag on the
    /// session cookie.
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            secret_key: env::var("SECRET_KEY").expect("SECRET_KEY must be set"),
            jwt_expiration_hours: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a number of hours"),
            salt_rounds: env::var("SALT_ROUNDS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .expect("SALT_ROUNDS must be a number"),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Session cookies are marked `Secure` everywhere except local development.
    pub fn cookie_secure(&self) -> bool {
        !self.is_development()
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        // Environment variables are process-global; serialize tests that touch them.
        static ref ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();

        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var("SECRET_KEY", "test-secret");
        env::remove_var("PORT");
        env::remove_var("SERVER_HOST");
        env::remove_var("JWT_EXPIRATION");
        env::remove_var("SALT_ROUNDS");
        env::remove_var("APP_ENV");

        let config = Config::from_env();

        assert_eq!(config.database_url, "postgres://test");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.salt_rounds, 12);
        assert!(config.is_development());
        assert!(!config.cookie_secure());
    }

    #[test]
    fn test_config_from_env_custom_values() {
        let _guard = ENV_LOCK.lock().unwrap();

        env::set_var("DATABASE_URL", "postgres://test");
        env::set_var("SECRET_KEY", "test-secret");
        env::set_var("PORT", "3000");
        env::set_var("SERVER_HOST", "0.0.0.0");
        env::set_var("JWT_EXPIRATION", "1");
        env::set_var("SALT_ROUNDS", "4");
        env::set_var("APP_ENV", "production");

        let config = Config::from_env();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.jwt_expiration_hours, 1);
        assert_eq!(config.salt_rounds, 4);
        assert!(config.cookie_secure());

        env::remove_var("PORT");
        env::remove_var("SERVER_HOST");
        env::remove_var("JWT_EXPIRATION");
        env::remove_var("SALT_ROUNDS");
        env::remove_var("APP_ENV");
    }
}
