pub mod error;
pub mod health;
pub mod logs;
pub mod root;

pub use error::{AppError, ValidationError};
