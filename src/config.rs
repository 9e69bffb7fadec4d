use std::net::{IpAddr, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    /// Allowed CORS origin in production, validated as a header value at load time
    pub frontend_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    /// When `false`, user listings and update responses omit the stored password hash.
    pub expose_password_hash: bool,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `SERVER_HOST`, `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`,
    /// `FRONTEND_URL`, `EXPOSE_PASSWORD_HASH`, `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`
    ///
    /// `PORT` overrides `SERVER_PORT` and the host defaults to `0.0.0.0` in production.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, if `FRONTEND_URL` is not a valid
    /// origin, if the pool bounds are invalid, or if `SERVER_HOST` / `SERVER_PORT` /
    /// `EXPOSE_PASSWORD_HASH` contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let environment = parse_environment(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());
        validate_origin(&frontend_url)?;

        let (db_max_connections, db_min_connections) = parse_pool_bounds(
            std::env::var("DB_MAX_CONNECTIONS").ok().as_deref(),
            std::env::var("DB_MIN_CONNECTIONS").ok().as_deref(),
        )?;

        let expose_password_hash = match std::env::var("EXPOSE_PASSWORD_HASH") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                anyhow::anyhow!("EXPOSE_PASSWORD_HASH must be true/false, got {raw:?}")
            })?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
            db_max_connections,
            db_min_connections,
            expose_password_hash,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_environment(raw: &str) -> Environment {
    match raw {
        "production" => Environment::Production,
        "staging" => Environment::Staging,
        _ => Environment::Development,
    }
}

/// Check that `origin` is an `http(s)://` URL usable as an `Access-Control-Allow-Origin` value.
fn validate_origin(origin: &str) -> anyhow::Result<()> {
    let has_scheme = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .is_some_and(|host| !host.is_empty() && !host.contains('/'));
    if !has_scheme || origin.parse::<axum::http::HeaderValue>().is_err() {
        anyhow::bail!("FRONTEND_URL must be an origin like https://example.com, got {origin:?}");
    }
    Ok(())
}

/// Resolve `(max, min)` pool sizes, defaulting to 20 and 2.
fn parse_pool_bounds(max: Option<&str>, min: Option<&str>) -> anyhow::Result<(u32, u32)> {
    let max = max.map_or(Ok(20), str::parse::<u32>).map_err(|_| {
        anyhow::anyhow!("DB_MAX_CONNECTIONS must be a positive integer")
    })?;
    let min = min.map_or(Ok(2), str::parse::<u32>).map_err(|_| {
        anyhow::anyhow!("DB_MIN_CONNECTIONS must be a non-negative integer")
    })?;
    if max == 0 {
        anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
    }
    if min > max {
        anyhow::bail!("DB_MIN_CONNECTIONS ({min}) exceeds DB_MAX_CONNECTIONS ({max})");
    }
    Ok((max, min))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
