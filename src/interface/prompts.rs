use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::Extra;
use crate::money::format_price;
use crate::screen::DetailScreen;

/// What the user chose to do next on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    AddExtra,
    RemoveExtra,
    IncreaseQuantity,
    DecreaseQuantity,
    ToggleFavorite,
    FinishOrder,
    Leave,
}

/// Present the main action menu for the current screen state.
///
/// Extra-related entries only appear when the food actually has extras.
pub fn prompt_screen_action(screen: &DetailScreen) -> Result<ScreenAction> {
    let mut actions = Vec::new();

    if !screen.extras().is_empty() {
        actions.push(("Add an extra", ScreenAction::AddExtra));
        actions.push(("Remove an extra", ScreenAction::RemoveExtra));
    }
    actions.push(("Increase quantity", ScreenAction::IncreaseQuantity));
    actions.push(("Decrease quantity", ScreenAction::DecreaseQuantity));

    let favorite_label = if screen.is_favorite() {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    actions.push((favorite_label, ScreenAction::ToggleFavorite));
    actions.push(("Finish order", ScreenAction::FinishOrder));
    actions.push(("Leave without ordering", ScreenAction::Leave));

    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].1)
}

/// Pick one extra from the list, or `None` if the user backs out.
pub fn prompt_extra(extras: &[Extra]) -> Result<Option<u64>> {
    let mut labels: Vec<String> = extras
        .iter()
        .map(|e| format!("{} ({} each, x{})", e.name, format_price(e.value), e.quantity))
        .collect();
    labels.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Which extra?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(extras.get(selection).map(|e| e.id))
}

/// Final confirmation before submitting the order.
pub fn prompt_confirm_order(total: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("Confirm order for {}?", total))
        .default(true)
        .interact()?)
}
