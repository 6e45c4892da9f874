// src/error/mod.rs

pub mod kind;
pub mod types;

pub use kind::ErrorKind;
pub use types::{AppError, AppResult};
