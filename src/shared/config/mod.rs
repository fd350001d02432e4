//! Application configuration module
//!
//! Configuration is read once at startup, either from the process
//! environment (`AppConfig::from_env`) or assembled with `AppConfig::builder`
//! in tests. After that it is shared read-only through the application state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Signing secret used in development when `JWT_SECRET` is not set.
pub const DEV_JWT_SECRET: &str = "palabrator-development-secret";

const DEFAULT_ISSUER: &str = "palabrator";
const DEFAULT_AUDIENCE: &str = "palabrator-users";
const DEFAULT_REALM: &str = "palabrator";
const DEFAULT_TTL_HOURS: u64 = 24;
const DEFAULT_PORT: u16 = 3000;

/// Deployment environment. Only CORS and log verbosity depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "info",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: value.to_string(),
            }),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// PostgreSQL connection URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// HMAC secret for signing tokens
    pub jwt_secret: String,
    /// `iss` claim written into and required from tokens
    pub jwt_issuer: String,
    /// `aud` claim written into and required from tokens
    pub jwt_audience: String,
    /// Realm announced in `WWW-Authenticate` challenges
    pub jwt_realm: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// Listen port
    pub port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("environment", &self.environment)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("jwt_realm", &self.jwt_realm)
            .field("token_ttl", &self.token_ttl)
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// # Variables
    ///
    /// - `APP_ENV` - `development` (default) or `production`
    /// - `DATABASE_URL`, falling back to `PALABRATOR_DB_URL`
    /// - `JWT_SECRET` - required in production
    /// - `JWT_ISSUER`, `JWT_AUDIENCE`, `JWT_REALM`, `JWT_TTL_HOURS`
    /// - `SERVER_PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let mut builder = Self::builder().environment(environment);

        if let Some(url) = lookup("DATABASE_URL").or_else(|| lookup("PALABRATOR_DB_URL")) {
            builder = builder.database_url(url);
        }

        match lookup("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None if environment == Environment::Production => {
                return Err(ConfigError::MissingValue("JWT_SECRET"));
            }
            None => {}
        }

        if let Some(issuer) = lookup("JWT_ISSUER") {
            builder = builder.jwt_issuer(issuer);
        }
        if let Some(audience) = lookup("JWT_AUDIENCE") {
            builder = builder.jwt_audience(audience);
        }
        if let Some(realm) = lookup("JWT_REALM") {
            builder = builder.jwt_realm(realm);
        }
        if let Some(hours) = lookup("JWT_TTL_HOURS") {
            let hours = parse_value::<u64>("JWT_TTL_HOURS", &hours)?;
            builder = builder.token_ttl(Duration::from_secs(hours.saturating_mul(3600)));
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }

        builder.build()
    }

    /// True when tokens are signed with the built-in development secret
    pub fn uses_development_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptyValue("JWT_SECRET"));
        }
        if self.environment == Environment::Production && self.uses_development_secret() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET",
                value: "<development secret>".to_string(),
            });
        }
        if self.jwt_issuer.trim().is_empty() {
            return Err(ConfigError::EmptyValue("JWT_ISSUER"));
        }
        if self.jwt_audience.trim().is_empty() {
            return Err(ConfigError::EmptyValue("JWT_AUDIENCE"));
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_HOURS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    environment: Option<Environment>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_issuer: Option<String>,
    jwt_audience: Option<String>,
    jwt_realm: Option<String>,
    token_ttl: Option<Duration>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt_issuer = Some(issuer.into());
        self
    }

    pub fn jwt_audience(mut self, audience: impl Into<String>) -> Self {
        self.jwt_audience = Some(audience.into());
        self
    }

    pub fn jwt_realm(mut self, realm: impl Into<String>) -> Self {
        self.jwt_realm = Some(realm.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration, filling defaults and validating the result
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            environment: self.environment.unwrap_or_default(),
            database_url: self.database_url.filter(|url| !url.trim().is_empty()),
            jwt_secret: self.jwt_secret.unwrap_or_else(|| DEV_JWT_SECRET.to_string()),
            jwt_issuer: self.jwt_issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            jwt_audience: self.jwt_audience.unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            jwt_realm: self.jwt_realm.unwrap_or_else(|| DEFAULT_REALM.to_string()),
            token_ttl: self
                .token_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_TTL_HOURS * 3600)),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("empty value: {0}")]
    EmptyValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
