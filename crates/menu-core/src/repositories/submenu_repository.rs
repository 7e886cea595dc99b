//! Submenu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Submenu, SubmenuView};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmenuRepository: Send + Sync {
    async fn list_views(&self, menu_id: &Uuid) -> Result<Vec<SubmenuView>, DomainError>;
    async fn find_view(
        &self,
        menu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<SubmenuView>, DomainError>;
    /// Lookup scoped to the owning menu.
    async fn find_by_id(&self, menu_id: &Uuid, id: &Uuid) -> Result<Option<Submenu>, DomainError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Submenu>, DomainError>;
    async fn create(&self, submenu: &Submenu) -> Result<SubmenuView, DomainError>;
    async fn update(&self, submenu: &Submenu) -> Result<Option<SubmenuView>, DomainError>;
    /// Delete the submenu and, by cascade, its dishes.
    async fn delete(&self, menu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError>;
}
