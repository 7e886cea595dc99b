//! Catalog hierarchy levels

use std::fmt;

/// Level of the Menu → Submenu → Dish hierarchy, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Menu,
    Submenu,
    Dish,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Menu => "Menu",
            Entity::Submenu => "Submenu",
            Entity::Dish => "Dish",
        }
    }

    pub fn lowercase(&self) -> &'static str {
        match self {
            Entity::Menu => "menu",
            Entity::Submenu => "submenu",
            Entity::Dish => "dish",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
