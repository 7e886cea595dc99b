// ============================================================================
// Menu Infrastructure - PostgreSQL Submenu Repository
// File: crates/menu-infrastructure/src/database/postgres/submenu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use menu_core::domain::{Submenu, SubmenuView};
use menu_core::error::DomainError;
use menu_core::repositories::SubmenuRepository;

use super::map_db_error;

/// Submenus of one menu with the count of their dishes; a submenu without
/// dishes counts 0 straight from the aggregate.
const SUBMENU_VIEW_SELECT: &str = r#"
    SELECT
        s.id, s.title, s.description,
        (
            SELECT COUNT(d.id)
            FROM dishes d
            WHERE d.submenu_id = s.id
        ) AS dishes_count
    FROM submenus s
    WHERE s.menu_id = $1
"#;

pub struct PgSubmenuRepository {
    pool: PgPool,
}

impl PgSubmenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn view_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        menu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<SubmenuView>, DomainError> {
        let sql = format!("{SUBMENU_VIEW_SELECT} AND s.id = $2");
        let row: Option<SubmenuViewRow> = sqlx::query_as(&sql)
            .bind(menu_id)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| map_db_error("reading submenu projection", e))?;

        Ok(row.map(Into::into))
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct SubmenuRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub title: String,
    pub description: String,
}

impl From<SubmenuRow> for Submenu {
    fn from(row: SubmenuRow) -> Self {
        Submenu {
            id: row.id,
            menu_id: row.menu_id,
            title: row.title,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
struct SubmenuViewRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub dishes_count: i64,
}

impl From<SubmenuViewRow> for SubmenuView {
    fn from(row: SubmenuViewRow) -> Self {
        SubmenuView {
            id: row.id,
            title: row.title,
            description: row.description,
            dishes_count: row.dishes_count,
        }
    }
}

#[async_trait]
impl SubmenuRepository for PgSubmenuRepository {
    async fn list_views(&self, menu_id: &Uuid) -> Result<Vec<SubmenuView>, DomainError> {
        let sql = format!("{SUBMENU_VIEW_SELECT} ORDER BY s.title");
        let rows: Vec<SubmenuViewRow> = sqlx::query_as(&sql)
            .bind(menu_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("listing submenus", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_view(
        &self,
        menu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<SubmenuView>, DomainError> {
        let sql = format!("{SUBMENU_VIEW_SELECT} AND s.id = $2");
        let row: Option<SubmenuViewRow> = sqlx::query_as(&sql)
            .bind(menu_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("finding submenu projection", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, menu_id: &Uuid, id: &Uuid) -> Result<Option<Submenu>, DomainError> {
        let row: Option<SubmenuRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, title, description
            FROM submenus
            WHERE id = $1 AND menu_id = $2
            "#
        )
        .bind(id)
        .bind(menu_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding submenu by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Submenu>, DomainError> {
        let row: Option<SubmenuRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, title, description
            FROM submenus
            WHERE title = $1
            "#
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding submenu by title", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, submenu: &Submenu) -> Result<SubmenuView, DomainError> {
        info!("Creating submenu: {}", submenu.title);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("starting transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO submenus (id, menu_id, title, description)
            VALUES ($1, $2, $3, $4)
            "#
        )
        .bind(submenu.id)
        .bind(submenu.menu_id)
        .bind(&submenu.title)
        .bind(&submenu.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("creating submenu", e))?;

        let view = Self::view_in_tx(&mut tx, &submenu.menu_id, &submenu.id)
            .await?
            .ok_or_else(|| DomainError::Database("created submenu vanished".to_string()))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("committing submenu", e))?;

        Ok(view)
    }

    async fn update(&self, submenu: &Submenu) -> Result<Option<SubmenuView>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("starting transaction", e))?;

        let updated = sqlx::query(
            r#"
            UPDATE submenus
            SET title = $3, description = $4
            WHERE id = $1 AND menu_id = $2
            "#
        )
        .bind(submenu.id)
        .bind(submenu.menu_id)
        .bind(&submenu.title)
        .bind(&submenu.description)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("updating submenu", e))?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let view = Self::view_in_tx(&mut tx, &submenu.menu_id, &submenu.id).await?;
        tx.commit()
            .await
            .map_err(|e| map_db_error("committing submenu", e))?;

        Ok(view)
    }

    async fn delete(&self, menu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let deleted = sqlx::query("DELETE FROM submenus WHERE id = $1 AND menu_id = $2")
            .bind(id)
            .bind(menu_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting submenu", e))?;

        Ok(deleted.rows_affected() > 0)
    }
}
