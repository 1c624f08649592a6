use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use go_restaurant_rs::api::ApiClient;
use go_restaurant_rs::cli::{Cli, Command};
use go_restaurant_rs::error::Result;
use go_restaurant_rs::interface::{
    display_detail, display_order_confirmation, display_order_failure, prompt_confirm_order,
    prompt_extra, prompt_screen_action, ScreenAction,
};
use go_restaurant_rs::models::FavoriteRequest;
use go_restaurant_rs::screen::{DetailScreen, FavoriteAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show { id } => cmd_show(&cli.url, id).await,
    }
}

/// Load a food and run the detail screen until the user orders or leaves.
async fn cmd_show(base_url: &str, id: u64) -> Result<()> {
    let client = ApiClient::new(base_url)?;

    let food = client.fetch_food(id).await?;
    let is_favorite = client.is_favorite(id).await?;
    info!(id, name = %food.name, is_favorite, "loaded food");

    let mut screen = DetailScreen::new(food, is_favorite);

    loop {
        display_detail(&screen);

        match prompt_screen_action(&screen)? {
            ScreenAction::AddExtra => {
                if let Some(extra_id) = prompt_extra(screen.extras())? {
                    screen.increment_extra(extra_id);
                }
            }
            ScreenAction::RemoveExtra => {
                if let Some(extra_id) = prompt_extra(screen.extras())? {
                    screen.decrement_extra(extra_id);
                }
            }
            ScreenAction::IncreaseQuantity => screen.increment_quantity(),
            ScreenAction::DecreaseQuantity => screen.decrement_quantity(),
            ScreenAction::ToggleFavorite => toggle_favorite(&client, &mut screen).await,
            ScreenAction::FinishOrder => {
                if !prompt_confirm_order(&screen.formatted_total())? {
                    continue;
                }
                if finish_order(&client, &mut screen).await? {
                    break;
                }
            }
            ScreenAction::Leave => break,
        }
    }

    Ok(())
}

/// Mirror a favorite toggle to the backend, moving the local flag only
/// once the call has succeeded.
async fn toggle_favorite(client: &ApiClient, screen: &mut DetailScreen) {
    let outcome = match screen.favorite_action() {
        FavoriteAction::Create => {
            client
                .create_favorite(&FavoriteRequest::new(screen.food()))
                .await
        }
        FavoriteAction::Delete => client.delete_favorite(screen.food().id).await,
    };

    match outcome {
        Ok(()) => {
            let now_favorite = !screen.is_favorite();
            screen.set_favorite(now_favorite);
            if now_favorite {
                println!("Added to favorites.");
            } else {
                println!("Removed from favorites.");
            }
        }
        Err(e) => {
            warn!(error = %e, "favorite toggle failed");
            println!("Could not update favorites, flag unchanged.");
        }
    }
}

/// Submit the order. Returns `Ok(true)` when the order went through and the
/// screen should close, `Ok(false)` to stay on the screen after a failure.
async fn finish_order(client: &ApiClient, screen: &mut DetailScreen) -> Result<bool> {
    screen.begin_submission()?;
    let outcome = client.submit_order(&screen.build_order()).await;
    screen.end_submission();

    match outcome {
        Ok(()) => {
            display_order_confirmation(screen);
            Ok(true)
        }
        Err(e) => {
            warn!(error = %e, "order submission failed");
            display_order_failure();
            Ok(false)
        }
    }
}
