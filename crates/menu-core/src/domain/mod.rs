//! # Menu Core - Domain Module
//! 
//! Domain entities for the restaurant menu catalog.

pub mod entity;
pub mod menu;
pub mod submenu;
pub mod dish;
pub mod price;

use serde::Serialize;

pub use entity::Entity;
pub use menu::{Menu, MenuPatch, MenuView};
pub use submenu::{Submenu, SubmenuPatch, SubmenuView};
pub use dish::{Dish, DishPatch, DishView};
pub use price::Price;

/// Body returned by successful deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatus {
    pub status: bool,
    pub message: String,
}

impl DeleteStatus {
    pub fn deleted(entity: Entity) -> Self {
        Self {
            status: true,
            message: format!("The {} has been deleted", entity.lowercase()),
        }
    }
}

pub(crate) fn clean_description(description: Option<String>) -> String {
    description.map(|d| d.trim().to_string()).unwrap_or_default()
}
