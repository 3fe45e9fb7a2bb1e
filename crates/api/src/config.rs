use std::path::PathBuf;

/// Development fallback for `SECRET_KEY`.
pub const DEFAULT_SECRET_KEY: &str = "your_default_secret_key";

/// Development fallback for `DATABASE_URL`.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/comicshelf";

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5555`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Application secret.
    pub secret_key: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Root of the static file tree; uploaded images live in `images/` under it.
    pub static_dir: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size, which bounds image uploads.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `5555`                                  |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/comicshelf`  |
    /// | `SECRET_KEY`           | `your_default_secret_key`               |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`                 |
    /// | `STATIC_DIR`           | `static`                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", var("PORT", "5555"), "u16")?;
        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);
        let secret_key = var("SECRET_KEY", DEFAULT_SECRET_KEY);

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let static_dir = PathBuf::from(var("STATIC_DIR", "static"));
        let request_timeout_secs =
            parse("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"), "u64")?;
        let max_upload_bytes =
            parse("MAX_UPLOAD_BYTES", var("MAX_UPLOAD_BYTES", "10485760"), "usize")?;

        Ok(Self {
            host,
            port,
            database_url,
            secret_key,
            cors_origins,
            static_dir,
            request_timeout_secs,
            max_upload_bytes,
        })
    }

    /// Whether the secret is still the hardcoded development value.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        key,
        expected,
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5555);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.uses_default_secret());
    }

    #[test]
    fn env_overrides_defaults() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("SECRET_KEY", "s3cret"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://db/catalog");
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.to_string(), "PORT must be a valid u16, got 'eighty'");
    }
}
