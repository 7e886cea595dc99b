//! Database connection pool

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::{info, instrument};

use menu_shared::config::{DatabaseSettings, DatabaseTarget};

static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors raised while setting up the catalog database.
#[derive(Debug, thiserror::Error)]
pub enum ConnError {
    #[error("Invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Error connecting to catalog db: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Error running migrations: {0}")]
    MigrationFailed(#[source] MigrateError),
}

pub fn connect_options(target: &DatabaseTarget) -> Result<PgConnectOptions, ConnError> {
    match target {
        DatabaseTarget::Url(url) => PgConnectOptions::from_str(url).map_err(ConnError::InvalidUrl),
        DatabaseTarget::Parts { host, port, username, password, database } => {
            Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(username)
                .password(password)
                .database(database))
        }
    }
}

/// Connections are checked out per query or transaction and returned to the
/// pool when dropped, whichever way the operation exits.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, ConnError> {
    let options = connect_options(&settings.target())?;

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(ConnError::ConnectionError)
}

/// Applies `migrations/`; sqlx locks the database and skips applied versions.
#[instrument(skip_all, err)]
pub async fn run_migrations(pool: &PgPool) -> Result<(), ConnError> {
    MIGRATOR.run(pool).await.map_err(ConnError::MigrationFailed)
}

/// Pool plus migrations, as configured.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, ConnError> {
    let target = settings.target();
    info!("Connecting to database at {}...", target.redacted());

    let pool = create_pool(settings).await?;
    if settings.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied.");
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_become_connect_options() {
        let target = DatabaseTarget::Parts {
            host: "db".to_string(),
            port: 6543,
            username: "chef".to_string(),
            password: "s3cret".to_string(),
            database: "restaurant".to_string(),
        };
        let options = connect_options(&target).unwrap();

        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "chef");
        assert_eq!(options.get_database(), Some("restaurant"));
    }

    #[test]
    fn url_is_parsed() {
        let target = DatabaseTarget::Url("postgres://u:p@db:5433/menus".to_string());
        let options = connect_options(&target).unwrap();

        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("menus"));
    }

    #[test]
    fn bad_url_is_rejected() {
        let target = DatabaseTarget::Url("not a url".to_string());
        assert!(matches!(connect_options(&target), Err(ConnError::InvalidUrl(_))));
    }
}
