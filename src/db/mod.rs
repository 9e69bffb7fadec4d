use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::Config;

/// Open the connection pool shared by every service.
///
/// Pool bounds come from `Config`; statement logging is left to the `sea_orm` tracing target.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(config)).await?;
    tracing::debug!(
        max_connections = config.db_max_connections,
        min_connections = config.db_min_connections,
        "database pool ready"
    );
    Ok(db)
}

fn connect_options(config: &Config) -> ConnectOptions {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);
    opts
}
