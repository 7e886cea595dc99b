//! # Menu Infrastructure
//! 
//! PostgreSQL implementations (adapters) of the catalog repository ports.

pub mod database;

pub use database::{
    connect, create_pool, run_migrations, ConnError, PgDishRepository, PgMenuRepository,
    PgSubmenuRepository,
};
