// ============================================================================
// Menu Infrastructure - PostgreSQL Dish Repository
// File: crates/menu-infrastructure/src/database/postgres/dish_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use menu_core::domain::{Dish, Price};
use menu_core::error::DomainError;
use menu_core::repositories::DishRepository;

use super::map_db_error;

pub struct PgDishRepository {
    pool: PgPool,
}

impl PgDishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct DishRow {
    pub id: Uuid,
    pub submenu_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Dish {
            id: row.id,
            submenu_id: row.submenu_id,
            title: row.title,
            description: row.description,
            price: Price::new(row.price),
        }
    }
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn list(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<Vec<Dish>, DomainError> {
        let rows: Vec<DishRow> = sqlx::query_as(
            r#"
            SELECT d.id, d.submenu_id, d.title, d.description, d.price
            FROM dishes d
            JOIN submenus s ON s.id = d.submenu_id
            WHERE s.menu_id = $1 AND d.submenu_id = $2
            ORDER BY d.title
            "#
        )
        .bind(menu_id)
        .bind(submenu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing dishes", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            SELECT d.id, d.submenu_id, d.title, d.description, d.price
            FROM dishes d
            JOIN submenus s ON s.id = d.submenu_id
            WHERE d.id = $3 AND d.submenu_id = $2 AND s.menu_id = $1
            "#
        )
        .bind(menu_id)
        .bind(submenu_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding dish by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            SELECT id, submenu_id, title, description, price
            FROM dishes
            WHERE title = $1
            "#
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding dish by title", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError> {
        info!("Creating dish: {}", dish.title);

        let row: DishRow = sqlx::query_as(
            r#"
            INSERT INTO dishes (id, submenu_id, title, description, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, submenu_id, title, description, price
            "#
        )
        .bind(dish.id)
        .bind(dish.submenu_id)
        .bind(&dish.title)
        .bind(&dish.description)
        .bind(dish.price.as_decimal())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating dish", e))?;

        Ok(row.into())
    }

    async fn update(&self, dish: &Dish) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            UPDATE dishes
            SET title = $3, description = $4, price = $5
            WHERE id = $1 AND submenu_id = $2
            RETURNING id, submenu_id, title, description, price
            "#
        )
        .bind(dish.id)
        .bind(dish.submenu_id)
        .bind(&dish.title)
        .bind(&dish.description)
        .bind(dish.price.as_decimal())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating dish", e))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, submenu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM dishes WHERE id = $1 AND submenu_id = $2")
            .bind(id)
            .bind(submenu_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting dish", e))?;

        Ok(deleted.rows_affected() > 0)
    }
}
