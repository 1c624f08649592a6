use crate::models::Food;
use crate::money::format_price;
use crate::screen::DetailScreen;

/// Display the food header: name, description, unit price, favorite mark.
pub fn display_food(food: &Food, is_favorite: bool) {
    let favorite_mark = if is_favorite { " [favorite]" } else { "" };

    println!();
    println!("=== {}{} ===", food.name, favorite_mark);
    println!("{}", food.description);
    println!("Unit price: {}", format_price(food.price));
}

/// Display the full detail screen: food, extras with quantities, and total.
pub fn display_detail(screen: &DetailScreen) {
    display_food(screen.food(), screen.is_favorite());

    if !screen.extras().is_empty() {
        println!();
        println!("Extras:");

        let max_name_len = screen
            .extras()
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(10);

        for extra in screen.extras() {
            println!(
                "  {:<width$}  {:>9} each  x{}",
                extra.name,
                format_price(extra.value),
                extra.quantity,
                width = max_name_len
            );
        }
    }

    println!();
    println!("Quantity: {}", screen.quantity());
    println!("Order total: {}", screen.formatted_total());
    println!();
}

/// Confirmation shown after a successful order submission.
pub fn display_order_confirmation(screen: &DetailScreen) {
    println!();
    println!(
        "Order placed: {} x{} for {}.",
        screen.food().name,
        screen.quantity(),
        screen.formatted_total()
    );
    println!("See it on your orders list.");
}

/// Alert shown when order submission fails. State is untouched, so the
/// user can simply try again.
pub fn display_order_failure() {
    println!();
    println!("Could not finish your order.");
    println!("Please check your connection and try again.");
}
