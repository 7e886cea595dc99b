//! PostgreSQL repository implementations

pub mod menu_repo_impl;
pub mod submenu_repo_impl;
pub mod dish_repo_impl;

pub use menu_repo_impl::PgMenuRepository;
pub use submenu_repo_impl::PgSubmenuRepository;
pub use dish_repo_impl::PgDishRepository;

use tracing::error;

use menu_core::error::DomainError;

/// Maps a driver error, turning unique-constraint violations into
/// [`DomainError::DuplicateRecord`].
pub(crate) fn map_db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::DuplicateRecord
        }
        _ => DomainError::Database(e.to_string()),
    }
}
