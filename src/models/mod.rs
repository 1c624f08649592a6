pub mod food;
pub mod order;

pub use food::{Extra, Food};
pub use order::{FavoriteRequest, OrderRequest};
