// ============================================================================
// Menu API - Request Payloads
// File: crates/menu-api/src/dto.rs
// ============================================================================
//! Request bodies for the catalog endpoints.
//!
//! Update bodies are the domain patch types (`MenuPatch`, `SubmenuPatch`,
//! `DishPatch`) deserialized directly; only creation has its own shape.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use uuid::Uuid;

use menu_core::domain::Price;
use menu_core::services::{NewDish, NewMenu, NewSubmenu};

use crate::error::ApiError;

/// Create menu request payload
#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create submenu request payload
#[derive(Debug, Deserialize)]
pub struct CreateSubmenuRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create dish request payload; a missing price is stored as 0.00
#[derive(Debug, Deserialize)]
pub struct CreateDishRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

impl From<CreateMenuRequest> for NewMenu {
    fn from(req: CreateMenuRequest) -> Self {
        NewMenu {
            id: req.id,
            title: req.title,
            description: req.description,
        }
    }
}

impl From<CreateSubmenuRequest> for NewSubmenu {
    fn from(req: CreateSubmenuRequest) -> Self {
        NewSubmenu {
            id: req.id,
            title: req.title,
            description: req.description,
        }
    }
}

impl From<CreateDishRequest> for NewDish {
    fn from(req: CreateDishRequest) -> Self {
        NewDish {
            id: req.id,
            title: req.title,
            description: req.description,
            price: req.price,
        }
    }
}

/// Unwraps a JSON body, turning a rejection into a 422.
pub fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(err) => {
            tracing::debug!(error = %err, "invalid JSON in request body");
            Err(err.into())
        }
    }
}
