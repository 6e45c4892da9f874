// src/services/menu_service.rs
use std::sync::Arc;

use log::info;

use crate::domain::{validate_menu, EntityId, Menu};
use crate::error::{AppError, AppResult};
use crate::repositories::CrudRepository;

#[derive(Debug, Clone)]
pub struct RegisterMenuRequest {
    pub name: String,
    pub price: i32,
    pub category: String,
    pub image: Option<String>,
}

pub struct MenuService {
    menu_repo: Arc<dyn CrudRepository<Menu>>,
}

impl MenuService {
    pub fn new(menu_repo: Arc<dyn CrudRepository<Menu>>) -> Self {
        Self { menu_repo }
    }

    pub fn register_menu(&self, request: RegisterMenuRequest) -> AppResult<Menu> {
        let mut menu = Menu::new(request.name, request.price, request.category);
        menu.image = request.image;

        validate_menu(&menu)?;
        let menu = self.menu_repo.create(menu)?;

        info!(
            "event=menu_registered id={} category={}",
            menu.id.map(i64::from).unwrap_or_default(),
            menu.category
        );
        Ok(menu)
    }

    pub fn get_menu(&self, menu_id: EntityId) -> AppResult<Menu> {
        self.menu_repo.read(menu_id)?.ok_or(AppError::NotFound)
    }

    pub fn list_menus(&self) -> AppResult<Vec<Menu>> {
        self.menu_repo.find_all()
    }

    /// Changes the price of an existing item; orders already placed keep their snapshot
    pub fn change_price(&self, menu_id: EntityId, price: i32) -> AppResult<Menu> {
        let mut menu = self.get_menu(menu_id)?;
        menu.price = price;

        validate_menu(&menu)?;
        self.menu_repo.update(menu)
    }

    pub fn remove_menu(&self, menu_id: EntityId) -> AppResult<()> {
        self.menu_repo.delete_by_id(menu_id)
    }
}
