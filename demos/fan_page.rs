//! Prints the player page data as JSON.
//!
//! `RUST_LOG=courtside_rs=debug cargo run --example fan_page`

use courtside_rs::{CsClient, Player, SourcePreference};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CsClient::builder()
        .source_preference(SourcePreference::ApiThenMarkup)
        .timeout(Duration::from_secs(20))
        .build()?;
    let player = Player::new(&client);

    let overview = player.overview().await;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    match overview.career.as_ref() {
        Some(c) => println!("career points (incl. playoffs): {}", c.combined_points()),
        None => println!("career points: N/A"),
    }
    if overview.upcoming_games.as_ref().is_none_or(Vec::is_empty) {
        println!("No upcoming games found.");
    }
    Ok(())
}
