//! Repository traits (ports)

pub mod menu_repository;
pub mod submenu_repository;
pub mod dish_repository;

pub use menu_repository::MenuRepository;
pub use submenu_repository::SubmenuRepository;
pub use dish_repository::DishRepository;

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use submenu_repository::MockSubmenuRepository;
#[cfg(test)]
pub use dish_repository::MockDishRepository;
