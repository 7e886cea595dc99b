// ============================================================================
// Menu API - Dish Handlers
// File: crates/menu-api/src/handlers/dishes.rs
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use menu_core::domain::{DeleteStatus, DishPatch, DishView, Entity};

use crate::dto::{payload, CreateDishRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/
pub async fn list_dishes(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<Vec<DishView>>, ApiError> {
    Ok(Json(state.dishes.list(&menu_id, &submenu_id).await?))
}

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}/
pub async fn get_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
) -> Result<Json<DishView>, ApiError> {
    state
        .dishes
        .get(&menu_id, &submenu_id, &dish_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} not found", Entity::Dish.lowercase())))
}

/// POST /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/
pub async fn create_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
    body: Result<Json<CreateDishRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DishView>), ApiError> {
    let request = payload(body)?;
    let created = state.dishes.create(&menu_id, &submenu_id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}/
pub async fn update_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
    body: Result<Json<DishPatch>, JsonRejection>,
) -> Result<Json<DishView>, ApiError> {
    let patch = payload(body)?;
    Ok(Json(state.dishes.update(&menu_id, &submenu_id, &dish_id, patch).await?))
}

/// DELETE /api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}/
pub async fn delete_dish(
    State(state): State<AppState>,
    Path((menu_id, submenu_id, dish_id)): Path<(String, String, String)>,
) -> Result<Json<DeleteStatus>, ApiError> {
    Ok(Json(state.dishes.delete(&menu_id, &submenu_id, &dish_id).await?))
}
