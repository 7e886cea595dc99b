// ============================================================================
// Menu Core - Submenu Service
// File: crates/menu-core/src/services/submenu_service.rs
// ============================================================================
//! Record operations for submenus

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DeleteStatus, Entity, Submenu, SubmenuPatch, SubmenuView};
use crate::error::DomainError;
use crate::ids::{parse_id, parse_ids};
use crate::repositories::{MenuRepository, SubmenuRepository};

#[derive(Debug, Clone, Default)]
pub struct NewSubmenu {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
}

pub struct SubmenuService {
    menus: Arc<dyn MenuRepository>,
    submenus: Arc<dyn SubmenuRepository>,
}

impl SubmenuService {
    pub fn new(menus: Arc<dyn MenuRepository>, submenus: Arc<dyn SubmenuRepository>) -> Self {
        Self { menus, submenus }
    }

    pub async fn list(&self, menu_id: &str) -> Result<Vec<SubmenuView>, DomainError> {
        let menu_id = parse_id(menu_id)?;
        self.submenus.list_views(&menu_id).await
    }

    pub async fn get(
        &self,
        menu_id: &str,
        submenu_id: &str,
    ) -> Result<Option<SubmenuView>, DomainError> {
        let [menu_id, submenu_id] = parse_ids([menu_id, submenu_id])?;
        self.submenus.find_view(&menu_id, &submenu_id).await
    }

    pub async fn create(
        &self,
        menu_id: &str,
        input: NewSubmenu,
    ) -> Result<SubmenuView, DomainError> {
        let menu_id = parse_id(menu_id)?;

        if self.menus.find_by_id(&menu_id).await?.is_none() {
            warn!("Submenu creation rejected: menu not registered: {}", menu_id);
            return Err(DomainError::ParentNotRegistered(Entity::Menu));
        }

        let submenu = Submenu::new(input.id, menu_id, input.title, input.description)?;

        if self.submenus.find_by_title(&submenu.title).await?.is_some() {
            warn!("Submenu creation rejected: title already registered: {}", submenu.title);
            return Err(DomainError::TitleAlreadyRegistered(Entity::Submenu));
        }

        let created = self.submenus.create(&submenu).await?;
        info!("Submenu created: {} (menu {})", created.id, menu_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        menu_id: &str,
        submenu_id: &str,
        patch: SubmenuPatch,
    ) -> Result<SubmenuView, DomainError> {
        let [menu_id, submenu_id] = parse_ids([menu_id, submenu_id])?;
        let submenu = self.existing(&menu_id, &submenu_id).await?;

        if let Some(title) = patch.new_title(&submenu) {
            let taken = self.submenus.find_by_title(title).await?;
            if taken.is_some_and(|other| other.id != submenu.id) {
                warn!("Submenu update rejected: title already registered: {}", title);
                return Err(DomainError::TitleAlreadyRegistered(Entity::Submenu));
            }
        }

        let merged = patch.merge(&submenu)?;
        self.submenus
            .update(&merged)
            .await?
            .ok_or(DomainError::NotFound(Entity::Submenu))
    }

    pub async fn delete(
        &self,
        menu_id: &str,
        submenu_id: &str,
    ) -> Result<DeleteStatus, DomainError> {
        let [menu_id, submenu_id] = parse_ids([menu_id, submenu_id])?;
        self.existing(&menu_id, &submenu_id).await?;

        if !self.submenus.delete(&menu_id, &submenu_id).await? {
            return Err(DomainError::NotFound(Entity::Submenu));
        }

        info!("Submenu deleted with its dishes: {}", submenu_id);
        Ok(DeleteStatus::deleted(Entity::Submenu))
    }

    /// Checks the path from the menu down, failing at the first missing level.
    async fn existing(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<Submenu, DomainError> {
        if self.menus.find_by_id(menu_id).await?.is_none() {
            return Err(DomainError::NotFound(Entity::Menu));
        }
        self.submenus
            .find_by_id(menu_id, submenu_id)
            .await?
            .ok_or(DomainError::NotFound(Entity::Submenu))
    }
}
