use std::sync::Arc;

use menu_core::repositories::{DishRepository, MenuRepository, SubmenuRepository};
use menu_core::services::{DishService, MenuService, SubmenuService};

#[derive(Clone)]
pub struct AppState {
    pub menus: Arc<MenuService>,
    pub submenus: Arc<SubmenuService>,
    pub dishes: Arc<DishService>,
}

impl AppState {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        submenu_repo: Arc<dyn SubmenuRepository>,
        dish_repo: Arc<dyn DishRepository>,
    ) -> Self {
        Self {
            menus: Arc::new(MenuService::new(menu_repo.clone())),
            submenus: Arc::new(SubmenuService::new(menu_repo.clone(), submenu_repo.clone())),
            dishes: Arc::new(DishService::new(menu_repo, submenu_repo, dish_repo)),
        }
    }
}
