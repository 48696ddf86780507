pub mod cli;
pub mod cli_handlers;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Result, TaskError};
pub use models::*;
