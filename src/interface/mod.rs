pub mod prompts;
pub mod render;

pub use prompts::{prompt_confirm_order, prompt_extra, prompt_screen_action, ScreenAction};
pub use render::{
    display_detail, display_food, display_order_confirmation, display_order_failure,
};
