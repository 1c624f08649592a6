pub mod api;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod money;
pub mod screen;

pub use error::{OrderError, Result};
pub use models::{Extra, Food};
pub use screen::DetailScreen;
