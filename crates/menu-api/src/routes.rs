// ============================================================================
// Menu API - Router
// File: crates/menu-api/src/routes.rs
// ============================================================================

use axum::{routing::get, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use menu_shared::constants::API_PREFIX;

use crate::error::ApiError;
use crate::handlers::{dishes, health, menus, submenus};
use crate::state::AppState;

/// Catalog routes plus `/health`, registered without a trailing slash.
///
/// Serve it through [`normalize`] so `/api/v1/menus/` and `/api/v1/menus`
/// reach the same handler.
pub fn router(state: AppState) -> Router {
    let menu = format!("{API_PREFIX}/{{menu_id}}");
    let submenu = format!("{menu}/submenus/{{submenu_id}}");
    let dish = format!("{submenu}/dishes/{{dish_id}}");

    Router::new()
        .route("/health", get(health::health_check))
        // Menus
        .route(API_PREFIX, get(menus::list_menus).post(menus::create_menu))
        .route(
            &menu,
            get(menus::get_menu).patch(menus::update_menu).delete(menus::delete_menu),
        )
        // Submenus
        .route(
            &format!("{menu}/submenus"),
            get(submenus::list_submenus).post(submenus::create_submenu),
        )
        .route(
            &submenu,
            get(submenus::get_submenu)
                .patch(submenus::update_submenu)
                .delete(submenus::delete_submenu),
        )
        // Dishes
        .route(
            &format!("{submenu}/dishes"),
            get(dishes::list_dishes).post(dishes::create_dish),
        )
        .route(
            &dish,
            get(dishes::get_dish).patch(dishes::update_dish).delete(dishes::delete_dish),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Trims a trailing slash before routing. Wraps the whole router because
/// `Router::layer` only runs after a route has matched.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
