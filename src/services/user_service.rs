// src/services/user_service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use log::info;

use crate::domain::{validate_user, EntityId, User};
use crate::error::{AppError, AppResult};
use crate::repositories::CrudRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub nickname: String,
    pub password: String,
    pub roles: BTreeSet<String>,
}

pub struct UserService {
    user_repo: Arc<dyn CrudRepository<User>>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn CrudRepository<User>>) -> Self {
        Self { user_repo }
    }

    pub fn register_user(&self, request: RegisterUserRequest) -> AppResult<User> {
        let mut user = User::new(request.nickname, request.password);
        user.roles = request.roles;

        validate_user(&user)?;
        let user = self.user_repo.create(user)?;

        info!(
            "event=user_registered id={} roles={}",
            user.id.map(i64::from).unwrap_or_default(),
            user.roles.len()
        );
        Ok(user)
    }

    pub fn get_user(&self, user_id: EntityId) -> AppResult<User> {
        self.user_repo.read(user_id)?.ok_or(AppError::NotFound)
    }
}
