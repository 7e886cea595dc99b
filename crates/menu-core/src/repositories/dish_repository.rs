//! Dish repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Dish;
use crate::error::DomainError;

/// Dish lookups are scoped by both ancestors: the submenu must belong to the menu.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn list(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<Vec<Dish>, DomainError>;
    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Dish>, DomainError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Dish>, DomainError>;
    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError>;
    async fn update(&self, dish: &Dish) -> Result<Option<Dish>, DomainError>;
    async fn delete(&self, submenu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError>;
}
