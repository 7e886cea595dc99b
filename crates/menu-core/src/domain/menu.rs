// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Top level of the catalog hierarchy
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use menu_shared::new_id;

use super::clean_description;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: String,
}

impl Menu {
    /// Create a new menu, generating an id unless the caller supplied one.
    pub fn new(
        id: Option<Uuid>,
        title: String,
        description: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id: id.unwrap_or_else(new_id),
            title: title.trim().to_string(),
            description: clean_description(description),
        };

        menu.validate()?;
        Ok(menu)
    }
}

/// Fields a menu update may carry; `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl MenuPatch {
    pub fn merge(&self, menu: &Menu) -> Result<Menu, validator::ValidationErrors> {
        let merged = Menu {
            id: menu.id,
            title: self
                .title
                .as_deref()
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| menu.title.clone()),
            description: match &self.description {
                Some(d) => d.trim().to_string(),
                None => menu.description.clone(),
            },
        };

        merged.validate()?;
        Ok(merged)
    }

    /// The trimmed title, if the patch changes it.
    pub fn new_title<'a>(&'a self, menu: &Menu) -> Option<&'a str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| *t != menu.title)
    }
}

/// Menu read projection with live descendant counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(None, "Lunch".to_string(), Some("Weekdays".to_string())).unwrap()
    }

    #[test]
    fn test_create_menu() {
        let m = Menu::new(None, "  Dinner ".to_string(), None).unwrap();
        assert_eq!(m.title, "Dinner");
        assert_eq!(m.description, "");
    }

    #[test]
    fn test_create_menu_keeps_caller_id() {
        let id = Uuid::new_v4();
        let m = Menu::new(Some(id), "Dinner".to_string(), None).unwrap();
        assert_eq!(m.id, id);
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(Menu::new(None, "   ".to_string(), None).is_err());
        assert!(Menu::new(None, "x".repeat(256), None).is_err());
    }

    #[test]
    fn test_merge_only_present_fields() {
        let original = menu();
        let patch = MenuPatch {
            title: None,
            description: Some("Every day".to_string()),
        };

        let merged = patch.merge(&original).unwrap();
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.title, "Lunch");
        assert_eq!(merged.description, "Every day");
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let original = menu();
        assert_eq!(MenuPatch::default().merge(&original).unwrap(), original);
    }

    #[test]
    fn test_new_title_ignores_unchanged() {
        let original = menu();
        let same = MenuPatch { title: Some(" Lunch ".to_string()), description: None };
        let renamed = MenuPatch { title: Some("Brunch".to_string()), description: None };

        assert_eq!(same.new_title(&original), None);
        assert_eq!(renamed.new_title(&original), Some("Brunch"));
    }
}
