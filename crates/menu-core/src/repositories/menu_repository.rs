//! Menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{Menu, MenuView};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menus with `submenus_count` and `dishes_count`, zero when childless.
    async fn list_views(&self) -> Result<Vec<MenuView>, DomainError>;
    async fn find_view(&self, id: &Uuid) -> Result<Option<MenuView>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Menu>, DomainError>;
    /// Insert and return the projection of the new row.
    async fn create(&self, menu: &Menu) -> Result<MenuView, DomainError>;
    /// Overwrite title/description; `None` if the row is gone.
    async fn update(&self, menu: &Menu) -> Result<Option<MenuView>, DomainError>;
    /// Delete the menu and, by cascade, its submenus and their dishes.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
