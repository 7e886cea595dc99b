// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use menu_core::domain::{Menu, MenuView};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;

use super::map_db_error;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn view_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: &Uuid,
    ) -> Result<Option<MenuView>, DomainError> {
        let row: Option<MenuViewRow> = sqlx::query_as(&menu_view_query("WHERE m.id = $1"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| map_db_error("reading menu projection", e))?;

        Ok(row.map(Into::into))
    }
}

/// Menus joined with their descendant counts.
///
/// `submenus_count` comes from the outer join so childless menus count 0.
/// `dishes_count` walks dishes → submenus → menu and is coalesced to 0.
fn menu_view_query(filter: &str) -> String {
    format!(
        r#"
        SELECT
            m.id, m.title, m.description,
            COUNT(s.id) AS submenus_count,
            COALESCE((
                SELECT COUNT(d.id)
                FROM dishes d
                JOIN submenus ds ON ds.id = d.submenu_id
                WHERE ds.menu_id = m.id
            ), 0) AS dishes_count
        FROM menus m
        LEFT OUTER JOIN submenus s ON s.menu_id = m.id
        {filter}
        GROUP BY m.id, m.title, m.description
        ORDER BY m.title
        "#
    )
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
struct MenuViewRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

impl From<MenuViewRow> for MenuView {
    fn from(row: MenuViewRow) -> Self {
        MenuView {
            id: row.id,
            title: row.title,
            description: row.description,
            submenus_count: row.submenus_count,
            dishes_count: row.dishes_count,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_views(&self) -> Result<Vec<MenuView>, DomainError> {
        let rows: Vec<MenuViewRow> = sqlx::query_as(&menu_view_query(""))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("listing menus", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_view(&self, id: &Uuid) -> Result<Option<MenuView>, DomainError> {
        let row: Option<MenuViewRow> = sqlx::query_as(&menu_view_query("WHERE m.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("finding menu projection", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, title, description
            FROM menus
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, title, description
            FROM menus
            WHERE title = $1
            "#
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu by title", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, menu: &Menu) -> Result<MenuView, DomainError> {
        info!("Creating menu: {}", menu.title);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("starting transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO menus (id, title, description)
            VALUES ($1, $2, $3)
            "#
        )
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("creating menu", e))?;

        let view = Self::view_in_tx(&mut tx, &menu.id)
            .await?
            .ok_or_else(|| DomainError::Database("created menu vanished".to_string()))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("committing menu", e))?;

        Ok(view)
    }

    async fn update(&self, menu: &Menu) -> Result<Option<MenuView>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("starting transaction", e))?;

        let updated = sqlx::query(
            r#"
            UPDATE menus
            SET title = $2, description = $3
            WHERE id = $1
            "#
        )
        .bind(menu.id)
        .bind(&menu.title)
        .bind(&menu.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("updating menu", e))?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let view = Self::view_in_tx(&mut tx, &menu.id).await?;
        tx.commit()
            .await
            .map_err(|e| map_db_error("committing menu", e))?;

        Ok(view)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting menu", e))?;

        Ok(deleted.rows_affected() > 0)
    }
}
