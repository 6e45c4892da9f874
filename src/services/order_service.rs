// src/services/order_service.rs
//
// Order placement and status changes
//
// Reads and writes go through separate repository calls, each in its own
// transaction. A menu deleted between the price lookup and the insert makes
// the insert fail on the foreign key, which is reported as a store error.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use log::info;
use uuid::Uuid;

use crate::domain::{validate_order, EntityId, Menu, Order, OrderStatus, User};
use crate::error::{AppError, AppResult};
use crate::repositories::CrudRepository;

const ORDER_CODE_PREFIX: &str = "ORD-";
const ORDER_CODE_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub menu_id: EntityId,
    pub user_id: EntityId,
}

pub struct OrderService {
    order_repo: Arc<dyn CrudRepository<Order>>,
    menu_repo: Arc<dyn CrudRepository<Menu>>,
    user_repo: Arc<dyn CrudRepository<User>>,
}

impl OrderService {
    pub fn new(
        order_repo: Arc<dyn CrudRepository<Order>>,
        menu_repo: Arc<dyn CrudRepository<Menu>>,
        user_repo: Arc<dyn CrudRepository<User>>,
    ) -> Self {
        Self {
            order_repo,
            menu_repo,
            user_repo,
        }
    }

    /// Places an order for one menu item at its current price
    pub fn place_order(&self, request: PlaceOrderRequest) -> AppResult<Order> {
        self.place_order_at(request, Local::now().naive_local())
    }

    /// Same as [`place_order`](Self::place_order) with an explicit order time
    pub fn place_order_at(
        &self,
        request: PlaceOrderRequest,
        ordered_at: NaiveDateTime,
    ) -> AppResult<Order> {
        let menu = self
            .menu_repo
            .read(request.menu_id)?
            .ok_or(AppError::NotFound)?;
        let user = self
            .user_repo
            .read(request.user_id)?
            .ok_or(AppError::NotFound)?;

        let user_id = user
            .id
            .ok_or_else(|| AppError::precondition("loaded user has no id"))?;
        let menu_id = menu
            .id
            .ok_or_else(|| AppError::precondition("loaded menu has no id"))?;

        let order = Order::new(generate_order_code(), menu_id, user_id, menu.price, ordered_at);
        validate_order(&order)?;

        let order = self.order_repo.create(order)?;
        info!(
            "event=order_placed code={} menu_id={} user_id={} price={}",
            order.order_code, menu_id, user_id, order.price
        );
        Ok(order)
    }

    pub fn get_order(&self, order_id: EntityId) -> AppResult<Order> {
        self.order_repo.read(order_id)?.ok_or(AppError::NotFound)
    }

    pub fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.order_repo.find_all()
    }

    /// Looks an order up by the code handed to the customer (full scan)
    pub fn find_order_by_code(&self, order_code: &str) -> AppResult<Order> {
        self.order_repo
            .find_all()?
            .into_iter()
            .find(|order| order.order_code == order_code)
            .ok_or(AppError::NotFound)
    }

    /// Moves an order along its lifecycle (READY -> IN_PROGRESS -> COMPLETED)
    pub fn update_status(&self, order_id: EntityId, status: OrderStatus) -> AppResult<Order> {
        let mut order = self.get_order(order_id)?;
        let previous = order.status;
        order.transition_to(status)?;

        let order = self.order_repo.update(order)?;
        info!(
            "event=order_status_changed id={} from={} to={}",
            order_id, previous, status
        );
        Ok(order)
    }

    pub fn cancel_order(&self, order_id: EntityId) -> AppResult<Order> {
        self.update_status(order_id, OrderStatus::Cancelled)
    }
}

/// `ORD-` followed by 12 upper-case hex digits from a random UUID
pub fn generate_order_code() -> String {
    let random = Uuid::new_v4().simple().to_string().to_uppercase();
    let suffix: String = random.chars().take(ORDER_CODE_LENGTH).collect();
    format!("{}{}", ORDER_CODE_PREFIX, suffix)
}
