// ============================================================================
// Menu Core - Dish Service
// File: crates/menu-core/src/services/dish_service.rs
// ============================================================================
//! Record operations for dishes

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{DeleteStatus, Dish, DishPatch, DishView, Entity, Price};
use crate::error::DomainError;
use crate::ids::{parse_id, parse_ids};
use crate::repositories::{DishRepository, MenuRepository, SubmenuRepository};

#[derive(Debug, Clone, Default)]
pub struct NewDish {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Price>,
}

pub struct DishService {
    menus: Arc<dyn MenuRepository>,
    submenus: Arc<dyn SubmenuRepository>,
    dishes: Arc<dyn DishRepository>,
}

impl DishService {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        submenus: Arc<dyn SubmenuRepository>,
        dishes: Arc<dyn DishRepository>,
    ) -> Self {
        Self { menus, submenus, dishes }
    }

    pub async fn list(
        &self,
        menu_id: &str,
        submenu_id: &str,
    ) -> Result<Vec<DishView>, DomainError> {
        let [menu_id, submenu_id] = parse_ids([menu_id, submenu_id])?;
        let dishes = self.dishes.list(&menu_id, &submenu_id).await?;
        Ok(dishes.into_iter().map(DishView::from).collect())
    }

    pub async fn get(
        &self,
        menu_id: &str,
        submenu_id: &str,
        dish_id: &str,
    ) -> Result<Option<DishView>, DomainError> {
        let [menu_id, submenu_id, dish_id] = parse_ids([menu_id, submenu_id, dish_id])?;
        let dish = self.dishes.find_by_id(&menu_id, &submenu_id, &dish_id).await?;
        Ok(dish.map(DishView::from))
    }

    pub async fn create(
        &self,
        menu_id: &str,
        submenu_id: &str,
        input: NewDish,
    ) -> Result<DishView, DomainError> {
        let menu_id = parse_id(menu_id)?;
        let submenu_id = parse_id(submenu_id)?;

        if self.menus.find_by_id(&menu_id).await?.is_none() {
            warn!("Dish creation rejected: menu not registered: {}", menu_id);
            return Err(DomainError::ParentNotRegistered(Entity::Menu));
        }
        if self.submenus.find_by_id(&menu_id, &submenu_id).await?.is_none() {
            warn!("Dish creation rejected: submenu not registered: {}", submenu_id);
            return Err(DomainError::ParentNotRegistered(Entity::Submenu));
        }

        let dish = Dish::new(input.id, submenu_id, input.title, input.description, input.price)?;

        if self.dishes.find_by_title(&dish.title).await?.is_some() {
            warn!("Dish creation rejected: title already registered: {}", dish.title);
            return Err(DomainError::TitleAlreadyRegistered(Entity::Dish));
        }

        let created = self.dishes.create(&dish).await?;
        info!("Dish created: {} (submenu {})", created.id, submenu_id);
        Ok(created.into())
    }

    pub async fn update(
        &self,
        menu_id: &str,
        submenu_id: &str,
        dish_id: &str,
        patch: DishPatch,
    ) -> Result<DishView, DomainError> {
        let [menu_id, submenu_id, dish_id] = parse_ids([menu_id, submenu_id, dish_id])?;
        let dish = self.existing(&menu_id, &submenu_id, &dish_id).await?;

        if let Some(title) = patch.new_title(&dish) {
            if self.dishes.find_by_title(title).await?.is_some_and(|other| other.id != dish.id) {
                warn!("Dish update rejected: title already registered: {}", title);
                return Err(DomainError::TitleAlreadyRegistered(Entity::Dish));
            }
        }

        let merged = patch.merge(&dish)?;
        self.dishes
            .update(&merged)
            .await?
            .map(DishView::from)
            .ok_or(DomainError::NotFound(Entity::Dish))
    }

    pub async fn delete(
        &self,
        menu_id: &str,
        submenu_id: &str,
        dish_id: &str,
    ) -> Result<DeleteStatus, DomainError> {
        let [menu_id, submenu_id, dish_id] = parse_ids([menu_id, submenu_id, dish_id])?;
        self.existing(&menu_id, &submenu_id, &dish_id).await?;

        if !self.dishes.delete(&submenu_id, &dish_id).await? {
            return Err(DomainError::NotFound(Entity::Dish));
        }

        info!("Dish deleted: {}", dish_id);
        Ok(DeleteStatus::deleted(Entity::Dish))
    }

    /// Checks menu, then submenu, then dish, failing at the first missing level.
    async fn existing(
        &self,
        menu_id: &Uuid,
        submenu_id: &Uuid,
        dish_id: &Uuid,
    ) -> Result<Dish, DomainError> {
        if self.menus.find_by_id(menu_id).await?.is_none() {
            return Err(DomainError::NotFound(Entity::Menu));
        }
        if self.submenus.find_by_id(menu_id, submenu_id).await?.is_none() {
            return Err(DomainError::NotFound(Entity::Submenu));
        }
        self.dishes
            .find_by_id(menu_id, submenu_id, dish_id)
            .await?
            .ok_or(DomainError::NotFound(Entity::Dish))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Menu, Submenu};
    use crate::repositories::{MockDishRepository, MockMenuRepository, MockSubmenuRepository};

    struct Fixture {
        menu: Menu,
        submenu: Submenu,
    }

    impl Fixture {
        fn new() -> Self {
            let menu = Menu::new(None, "menu1".to_string(), None).unwrap();
            let submenu = Submenu::new(None, menu.id, "submenu1".to_string(), None).unwrap();
            Self { menu, submenu }
        }

        fn menus(&self) -> MockMenuRepository {
            let menu = self.menu.clone();
            let mut repo = MockMenuRepository::new();
            repo.expect_find_by_id().returning(move |_| Ok(Some(menu.clone())));
            repo
        }

        fn submenus(&self) -> MockSubmenuRepository {
            let submenu = self.submenu.clone();
            let mut repo = MockSubmenuRepository::new();
            repo.expect_find_by_id().returning(move |_, _| Ok(Some(submenu.clone())));
            repo
        }

        fn dish(&self) -> Dish {
            Dish::new(
                None,
                self.submenu.id,
                "dish".to_string(),
                Some("about dish".to_string()),
                Some("115.455".parse().unwrap()),
            )
            .unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_under_unknown_submenu() {
        let fx = Fixture::new();
        let mut submenus = MockSubmenuRepository::new();
        submenus.expect_find_by_id().returning(|_, _| Ok(None));
        let mut dishes = MockDishRepository::new();
        dishes.expect_create().never();

        let service = DishService::new(Arc::new(fx.menus()), Arc::new(submenus), Arc::new(dishes));
        let result = service
            .create(
                &fx.menu.id.to_string(),
                &Uuid::new_v4().to_string(),
                NewDish { title: "dish".to_string(), ..Default::default() },
            )
            .await;

        assert_eq!(result, Err(DomainError::ParentNotRegistered(Entity::Submenu)));
    }

    #[tokio::test]
    async fn test_create_rounds_price() {
        let fx = Fixture::new();
        let mut dishes = MockDishRepository::new();
        dishes.expect_find_by_title().returning(|_| Ok(None));
        dishes.expect_create().returning(|d| Ok(d.clone()));

        let service =
            DishService::new(Arc::new(fx.menus()), Arc::new(fx.submenus()), Arc::new(dishes));
        let view = service
            .create(
                &fx.menu.id.to_string(),
                &fx.submenu.id.to_string(),
                NewDish {
                    title: "dish".to_string(),
                    price: Some("115.455".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(view.price.to_string(), "115.46");
    }

    #[tokio::test]
    async fn test_update_price_keeps_other_fields() {
        let fx = Fixture::new();
        let stored = fx.dish();
        let dish_id = stored.id;
        let mut dishes = MockDishRepository::new();
        dishes.expect_find_by_id().returning(move |_, _, _| Ok(Some(stored.clone())));
        dishes.expect_update().returning(|d| Ok(Some(d.clone())));

        let service =
            DishService::new(Arc::new(fx.menus()), Arc::new(fx.submenus()), Arc::new(dishes));
        let view = service
            .update(
                &fx.menu.id.to_string(),
                &fx.submenu.id.to_string(),
                &dish_id.to_string(),
                DishPatch { price: Some("7.777".parse().unwrap()), ..Default::default() },
            )
            .await
            .unwrap();

        assert_eq!(view.price.to_string(), "7.78");
        assert_eq!(view.title, "dish");
        assert_eq!(view.description, "about dish");
    }

    #[tokio::test]
    async fn test_delete_reports_first_missing_level() {
        let fx = Fixture::new();
        let mut dishes = MockDishRepository::new();
        dishes.expect_find_by_id().returning(|_, _, _| Ok(None));
        dishes.expect_delete().never();

        let service =
            DishService::new(Arc::new(fx.menus()), Arc::new(fx.submenus()), Arc::new(dishes));
        let result = service
            .delete(
                &fx.menu.id.to_string(),
                &fx.submenu.id.to_string(),
                &Uuid::new_v4().to_string(),
            )
            .await;

        assert_eq!(result, Err(DomainError::NotFound(Entity::Dish)));
    }

    #[tokio::test]
    async fn test_delete_malformed_ids() {
        let service = DishService::new(
            Arc::new(MockMenuRepository::new()),
            Arc::new(MockSubmenuRepository::new()),
            Arc::new(MockDishRepository::new()),
        );
        let result = service
            .delete("11111", &Uuid::new_v4().to_string(), &Uuid::new_v4().to_string())
            .await;

        assert_eq!(result, Err(DomainError::WrongIdTypes));
    }

    #[tokio::test]
    async fn test_delete_dish() {
        let fx = Fixture::new();
        let stored = fx.dish();
        let dish_id = stored.id;
        let mut dishes = MockDishRepository::new();
        dishes.expect_find_by_id().returning(move |_, _, _| Ok(Some(stored.clone())));
        dishes.expect_delete().times(1).returning(|_, _| Ok(true));

        let service =
            DishService::new(Arc::new(fx.menus()), Arc::new(fx.submenus()), Arc::new(dishes));
        let status = service
            .delete(&fx.menu.id.to_string(), &fx.submenu.id.to_string(), &dish_id.to_string())
            .await
            .unwrap();

        assert_eq!(status.message, "The dish has been deleted");
    }
}
