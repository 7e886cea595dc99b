// ============================================================================
// Menu Core - Submenu Entity
// File: crates/menu-core/src/domain/submenu.rs
// Description: Second level of the catalog hierarchy, owned by a menu
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use menu_shared::new_id;

use super::clean_description;

/// Submenu entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Submenu {
    pub id: Uuid,
    pub menu_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: String,
}

impl Submenu {
    pub fn new(
        id: Option<Uuid>,
        menu_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let submenu = Self {
            id: id.unwrap_or_else(new_id),
            menu_id,
            title: title.trim().to_string(),
            description: clean_description(description),
        };

        submenu.validate()?;
        Ok(submenu)
    }
}

/// Fields a submenu update may carry; `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmenuPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SubmenuPatch {
    pub fn merge(&self, submenu: &Submenu) -> Result<Submenu, validator::ValidationErrors> {
        let merged = Submenu {
            id: submenu.id,
            menu_id: submenu.menu_id,
            title: self
                .title
                .as_deref()
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| submenu.title.clone()),
            description: match &self.description {
                Some(d) => d.trim().to_string(),
                None => submenu.description.clone(),
            },
        };

        merged.validate()?;
        Ok(merged)
    }

    pub fn new_title<'a>(&'a self, submenu: &Submenu) -> Option<&'a str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| *t != submenu.title)
    }
}

/// Submenu read projection with its live dish count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub dishes_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_submenu() {
        let menu_id = Uuid::new_v4();
        let s = Submenu::new(None, menu_id, "Soups".to_string(), Some(" hot ".to_string()))
            .unwrap();
        assert_eq!(s.menu_id, menu_id);
        assert_eq!(s.description, "hot");
    }

    #[test]
    fn test_merge_keeps_owner_and_absent_fields() {
        let original =
            Submenu::new(None, Uuid::new_v4(), "Soups".to_string(), Some("hot".to_string()))
                .unwrap();
        let patch = SubmenuPatch { title: Some("Broths".to_string()), description: None };

        let merged = patch.merge(&original).unwrap();
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.menu_id, original.menu_id);
        assert_eq!(merged.title, "Broths");
        assert_eq!(merged.description, "hot");
    }

    #[test]
    fn test_merge_validates_result() {
        let original = Submenu::new(None, Uuid::new_v4(), "Soups".to_string(), None).unwrap();
        let patch = SubmenuPatch { title: Some(String::new()), description: None };
        assert!(patch.merge(&original).is_err());
    }
}
