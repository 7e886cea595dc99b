// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menus.rs
// ============================================================================
//! Top-level menu endpoints under `/api/v1/menus`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use menu_core::domain::{DeleteStatus, Entity, MenuPatch, MenuView};

use crate::dto::{payload, CreateMenuRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/menus/
pub async fn list_menus(State(state): State<AppState>) -> Result<Json<Vec<MenuView>>, ApiError> {
    Ok(Json(state.menus.list().await?))
}

/// GET /api/v1/menus/{menu_id}/
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<MenuView>, ApiError> {
    state
        .menus
        .get(&menu_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} not found", Entity::Menu.lowercase())))
}

/// POST /api/v1/menus/
pub async fn create_menu(
    State(state): State<AppState>,
    body: Result<Json<CreateMenuRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuView>), ApiError> {
    let request = payload(body)?;
    let created = state.menus.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/v1/menus/{menu_id}/
pub async fn update_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    body: Result<Json<MenuPatch>, JsonRejection>,
) -> Result<Json<MenuView>, ApiError> {
    let patch = payload(body)?;
    Ok(Json(state.menus.update(&menu_id, patch).await?))
}

/// DELETE /api/v1/menus/{menu_id}/
///
/// Submenus and dishes of the menu go with it.
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<DeleteStatus>, ApiError> {
    Ok(Json(state.menus.delete(&menu_id).await?))
}
