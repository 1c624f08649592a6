pub mod detail;

pub use detail::{
    DetailScreen, FavoriteAction, MAX_EXTRA_QUANTITY, MAX_ORDER_QUANTITY, MIN_ORDER_QUANTITY,
};
