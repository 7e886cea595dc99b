//! Record-operation services (business rules)

pub mod menu_service;
pub mod submenu_service;
pub mod dish_service;

pub use menu_service::{MenuService, NewMenu};
pub use submenu_service::{NewSubmenu, SubmenuService};
pub use dish_service::{DishService, NewDish};
