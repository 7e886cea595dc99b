//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{connect, create_pool, run_migrations, ConnError};
pub use postgres::{PgDishRepository, PgMenuRepository, PgSubmenuRepository};
