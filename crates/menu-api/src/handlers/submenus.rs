// ============================================================================
// Menu API - Submenu Handlers
// File: crates/menu-api/src/handlers/submenus.rs
// ============================================================================

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use menu_core::domain::{DeleteStatus, Entity, SubmenuPatch, SubmenuView};

use crate::dto::{payload, CreateSubmenuRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/menus/{menu_id}/submenus/
pub async fn list_submenus(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> Result<Json<Vec<SubmenuView>>, ApiError> {
    Ok(Json(state.submenus.list(&menu_id).await?))
}

/// GET /api/v1/menus/{menu_id}/submenus/{submenu_id}/
pub async fn get_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<SubmenuView>, ApiError> {
    state
        .submenus
        .get(&menu_id, &submenu_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} not found", Entity::Submenu.lowercase())))
}

/// POST /api/v1/menus/{menu_id}/submenus/
pub async fn create_submenu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    body: Result<Json<CreateSubmenuRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmenuView>), ApiError> {
    let request = payload(body)?;
    let created = state.submenus.create(&menu_id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/v1/menus/{menu_id}/submenus/{submenu_id}/
pub async fn update_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
    body: Result<Json<SubmenuPatch>, JsonRejection>,
) -> Result<Json<SubmenuView>, ApiError> {
    let patch = payload(body)?;
    Ok(Json(state.submenus.update(&menu_id, &submenu_id, patch).await?))
}

/// DELETE /api/v1/menus/{menu_id}/submenus/{submenu_id}/
pub async fn delete_submenu(
    State(state): State<AppState>,
    Path((menu_id, submenu_id)): Path<(String, String)>,
) -> Result<Json<DeleteStatus>, ApiError> {
    Ok(Json(state.submenus.delete(&menu_id, &submenu_id).await?))
}
