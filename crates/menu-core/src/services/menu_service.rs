// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Record operations for menus

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DeleteStatus, Entity, Menu, MenuPatch, MenuView};
use crate::error::DomainError;
use crate::ids::parse_id;
use crate::repositories::MenuRepository;

/// Input for creating a menu.
#[derive(Debug, Clone, Default)]
pub struct NewMenu {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
}

pub struct MenuService {
    menus: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(menus: Arc<dyn MenuRepository>) -> Self {
        Self { menus }
    }

    pub async fn list(&self) -> Result<Vec<MenuView>, DomainError> {
        self.menus.list_views().await
    }

    pub async fn get(&self, menu_id: &str) -> Result<Option<MenuView>, DomainError> {
        let menu_id = parse_id(menu_id)?;
        self.menus.find_view(&menu_id).await
    }

    pub async fn create(&self, input: NewMenu) -> Result<MenuView, DomainError> {
        let menu = Menu::new(input.id, input.title, input.description)?;

        if self.menus.find_by_title(&menu.title).await?.is_some() {
            warn!("Menu creation rejected: title already registered: {}", menu.title);
            return Err(DomainError::TitleAlreadyRegistered(Entity::Menu));
        }

        let created = self.menus.create(&menu).await?;
        info!("Menu created: {}", created.id);
        Ok(created)
    }

    pub async fn update(&self, menu_id: &str, patch: MenuPatch) -> Result<MenuView, DomainError> {
        let menu_id = parse_id(menu_id)?;
        let menu = self
            .menus
            .find_by_id(&menu_id)
            .await?
            .ok_or(DomainError::NotFound(Entity::Menu))?;

        if let Some(title) = patch.new_title(&menu) {
            if self.menus.find_by_title(title).await?.is_some_and(|other| other.id != menu.id) {
                warn!("Menu update rejected: title already registered: {}", title);
                return Err(DomainError::TitleAlreadyRegistered(Entity::Menu));
            }
        }

        let merged = patch.merge(&menu)?;
        self.menus
            .update(&merged)
            .await?
            .ok_or(DomainError::NotFound(Entity::Menu))
    }

    pub async fn delete(&self, menu_id: &str) -> Result<DeleteStatus, DomainError> {
        let menu_id = parse_id(menu_id)?;

        if self.menus.find_by_id(&menu_id).await?.is_none() {
            return Err(DomainError::NotFound(Entity::Menu));
        }
        if !self.menus.delete(&menu_id).await? {
            return Err(DomainError::NotFound(Entity::Menu));
        }

        info!("Menu deleted with its submenus and dishes: {}", menu_id);
        Ok(DeleteStatus::deleted(Entity::Menu))
    }
}
