use clap::{Parser, Subcommand};

/// GoRestaurant — browse a food item, pick extras, and place an order.
#[derive(Parser, Debug)]
#[command(name = "go_restaurant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the GoRestaurant backend API.
    #[arg(short, long, default_value = "http://localhost:3333")]
    pub url: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the detail screen for a food item.
    Show {
        /// Identifier of the food to show.
        id: u64,
    },
}
