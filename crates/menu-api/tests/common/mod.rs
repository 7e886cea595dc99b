//! In-memory catalog backing the HTTP tests.
//!
//! One store shared by the three repositories, with the same uniqueness and
//! cascade rules as the PostgreSQL schema.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;
use uuid::Uuid;

use menu_api::{normalize, router, AppState};
use menu_core::domain::{Dish, Menu, MenuView, Submenu, SubmenuView};
use menu_core::error::DomainError;
use menu_core::repositories::{DishRepository, MenuRepository, SubmenuRepository};

#[derive(Default)]
struct Store {
    menus: Vec<Menu>,
    submenus: Vec<Submenu>,
    dishes: Vec<Dish>,
}

impl Store {
    fn menu_view(&self, menu: &Menu) -> MenuView {
        let submenu_ids: Vec<Uuid> = self
            .submenus
            .iter()
            .filter(|s| s.menu_id == menu.id)
            .map(|s| s.id)
            .collect();
        let dishes_count = self
            .dishes
            .iter()
            .filter(|d| submenu_ids.contains(&d.submenu_id))
            .count();

        MenuView {
            id: menu.id,
            title: menu.title.clone(),
            description: menu.description.clone(),
            submenus_count: submenu_ids.len() as i64,
            dishes_count: dishes_count as i64,
        }
    }

    fn submenu_view(&self, submenu: &Submenu) -> SubmenuView {
        SubmenuView {
            id: submenu.id,
            title: submenu.title.clone(),
            description: submenu.description.clone(),
            dishes_count: self.dishes.iter().filter(|d| d.submenu_id == submenu.id).count() as i64,
        }
    }

    fn submenu_in_menu(&self, menu_id: &Uuid, submenu_id: &Uuid) -> bool {
        self.submenus.iter().any(|s| s.id == *submenu_id && s.menu_id == *menu_id)
    }
}

#[derive(Clone, Default)]
pub struct MemoryCatalog {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl MenuRepository for MemoryCatalog {
    async fn list_views(&self) -> Result<Vec<MenuView>, DomainError> {
        let store = self.store.lock().unwrap();
        let mut views: Vec<MenuView> = store.menus.iter().map(|m| store.menu_view(m)).collect();
        views.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(views)
    }

    async fn find_view(&self, id: &Uuid) -> Result<Option<MenuView>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store.menus.iter().find(|m| m.id == *id).map(|m| store.menu_view(m)))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store.menus.iter().find(|m| m.id == *id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Menu>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store.menus.iter().find(|m| m.title == title).cloned())
    }

    async fn create(&self, menu: &Menu) -> Result<MenuView, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.menus.iter().any(|m| m.id == menu.id || m.title == menu.title) {
            return Err(DomainError::DuplicateRecord);
        }
        store.menus.push(menu.clone());
        Ok(store.menu_view(menu))
    }

    async fn update(&self, menu: &Menu) -> Result<Option<MenuView>, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.menus.iter().any(|m| m.id != menu.id && m.title == menu.title) {
            return Err(DomainError::DuplicateRecord);
        }
        let Some(slot) = store.menus.iter_mut().find(|m| m.id == menu.id) else {
            return Ok(None);
        };
        *slot = menu.clone();
        Ok(Some(store.menu_view(menu)))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut store = self.store.lock().unwrap();
        let before = store.menus.len();
        store.menus.retain(|m| m.id != *id);
        if store.menus.len() == before {
            return Ok(false);
        }

        let orphaned: Vec<Uuid> = store
            .submenus
            .iter()
            .filter(|s| s.menu_id == *id)
            .map(|s| s.id)
            .collect();
        store.submenus.retain(|s| s.menu_id != *id);
        store.dishes.retain(|d| !orphaned.contains(&d.submenu_id));
        Ok(true)
    }
}

#[async_trait]
impl SubmenuRepository for MemoryCatalog {
    async fn list_views(&self, menu_id: &Uuid) -> Result<Vec<SubmenuView>, DomainError> {
        let store = self.store.lock().unwrap();
        let mut views: Vec<SubmenuView> = store
            .submenus
            .iter()
            .filter(|s| s.menu_id == *menu_id)
            .map(|s| store.submenu_view(s))
            .collect();
        views.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(views)
    }

    async fn find_view(
        &self,
        menu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<SubmenuView>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .submenus
            .iter()
            .find(|s| s.id == *id && s.menu_id == *menu_id)
            .map(|s| store.submenu_view(s)))
    }

    async fn find_by_id(&self, menu_id: &Uuid, id: &Uuid) -> Result<Option<Submenu>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .submenus
            .iter()
            .find(|s| s.id == *id && s.menu_id == *menu_id)
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Submenu>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store.submenus.iter().find(|s| s.title == title).cloned())
    }

    async fn create(&self, submenu: &Submenu) -> Result<SubmenuView, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.submenus.iter().any(|s| s.id == submenu.id || s.title == submenu.title) {
            return Err(DomainError::DuplicateRecord);
        }
        if !store.menus.iter().any(|m| m.id == submenu.menu_id) {
            return Err(DomainError::Database("foreign key violation".to_string()));
        }
        store.submenus.push(submenu.clone());
        Ok(store.submenu_view(submenu))
    }

    async fn update(&self, submenu: &Submenu) -> Result<Option<SubmenuView>, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.submenus.iter().any(|s| s.id != submenu.id && s.title == submenu.title) {
            return Err(DomainError::DuplicateRecord);
        }
        let Some(slot) = store
            .submenus
            .iter_mut()
            .find(|s| s.id == submenu.id && s.menu_id == submenu.menu_id)
        else {
            return Ok(None);
        };
        *slot = submenu.clone();
        Ok(Some(store.submenu_view(submenu)))
    }

    async fn delete(&self, menu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let mut store = self.store.lock().unwrap();
        if !store.submenu_in_menu(menu_id, id) {
            return Ok(false);
        }
        store.submenus.retain(|s| s.id != *id);
        store.dishes.retain(|d| d.submenu_id != *id);
        Ok(true)
    }
}

#[async_trait]
impl DishRepository for MemoryCatalog {
    async fn list(&self, menu_id: &Uuid, submenu_id: &Uuid) -> Result<Vec<Dish>, DomainError> {
        let store = self.store.lock().unwrap();
        if !store.submenu_in_menu(menu_id, submenu_id) {
            return Ok(Vec::new());
        }
        let mut dishes: Vec<Dish> = store
            .dishes
            .iter()
            .filter(|d| d.submenu_id == *submenu_id)
            .cloned()
            .collect();
        dishes.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(dishes)
    }

    async fn find_by_id(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Dish>, DomainError> {
        let store = self.store.lock().unwrap();
        if !store.submenu_in_menu(menu_id, submenu_id) {
            return Ok(None);
        }
        Ok(store
            .dishes
            .iter()
            .find(|d| d.id == *id && d.submenu_id == *submenu_id)
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Dish>, DomainError> {
        let store = self.store.lock().unwrap();
        Ok(store.dishes.iter().find(|d| d.title == title).cloned())
    }

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.dishes.iter().any(|d| d.id == dish.id || d.title == dish.title) {
            return Err(DomainError::DuplicateRecord);
        }
        store.dishes.push(dish.clone());
        Ok(dish.clone())
    }

    async fn update(&self, dish: &Dish) -> Result<Option<Dish>, DomainError> {
        let mut store = self.store.lock().unwrap();
        if store.dishes.iter().any(|d| d.id != dish.id && d.title == dish.title) {
            return Err(DomainError::DuplicateRecord);
        }
        let Some(slot) = store
            .dishes
            .iter_mut()
            .find(|d| d.id == dish.id && d.submenu_id == dish.submenu_id)
        else {
            return Ok(None);
        };
        *slot = dish.clone();
        Ok(Some(dish.clone()))
    }

    async fn delete(&self, submenu_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let mut store = self.store.lock().unwrap();
        let before = store.dishes.len();
        store.dishes.retain(|d| !(d.id == *id && d.submenu_id == *submenu_id));
        Ok(store.dishes.len() < before)
    }
}

pub type App = NormalizePath<Router>;

pub fn app() -> App {
    let catalog = MemoryCatalog::default();
    let state = AppState::new(
        Arc::new(catalog.clone()),
        Arc::new(catalog.clone()),
        Arc::new(catalog),
    );
    normalize(router(state))
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(
    app: &App,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &App, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &App, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn id_of(body: &Value) -> String {
    body["id"].as_str().unwrap().to_string()
}
