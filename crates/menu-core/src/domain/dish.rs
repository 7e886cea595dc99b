// ============================================================================
// Menu Core - Dish Entity
// File: crates/menu-core/src/domain/dish.rs
// Description: Leaf of the catalog hierarchy, owned by a submenu
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use menu_shared::new_id;

use super::clean_description;
use super::price::{validate_price, Price};

/// Dish entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Dish {
    pub id: Uuid,
    pub submenu_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    pub description: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Price,
}

impl Dish {
    pub fn new(
        id: Option<Uuid>,
        submenu_id: Uuid,
        title: String,
        description: Option<String>,
        price: Option<Price>,
    ) -> Result<Self, validator::ValidationErrors> {
        let dish = Self {
            id: id.unwrap_or_else(new_id),
            submenu_id,
            title: title.trim().to_string(),
            description: clean_description(description),
            price: price.unwrap_or_default(),
        };

        dish.validate()?;
        Ok(dish)
    }

    pub fn view(&self) -> DishView {
        DishView::from(self)
    }
}

/// Fields a dish update may carry; `None` leaves the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DishPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
}

impl DishPatch {
    pub fn merge(&self, dish: &Dish) -> Result<Dish, validator::ValidationErrors> {
        let merged = Dish {
            id: dish.id,
            submenu_id: dish.submenu_id,
            title: self
                .title
                .as_deref()
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| dish.title.clone()),
            description: match &self.description {
                Some(d) => d.trim().to_string(),
                None => dish.description.clone(),
            },
            price: self.price.clone().unwrap_or_else(|| dish.price.clone()),
        };

        merged.validate()?;
        Ok(merged)
    }

    pub fn new_title<'a>(&'a self, dish: &Dish) -> Option<&'a str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| *t != dish.title)
    }
}

/// Dish read projection; the owning submenu is implied by the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Price,
}

impl From<&Dish> for DishView {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id,
            title: dish.title.clone(),
            description: dish.description.clone(),
            price: dish.price.clone(),
        }
    }
}

impl From<Dish> for DishView {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            title: dish.title,
            description: dish.description,
            price: dish.price,
        }
    }
}
