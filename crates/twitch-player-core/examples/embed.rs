//! Embed options example
//!
//! Builds player options, prints the JS options object, the iframe URL and
//! the event names a page can subscribe to.
//!
//! Run with: RUST_LOG=debug cargo run -p twitch-player-core --example embed

use tracing_subscriber::EnvFilter;
use twitch_player_core::{PlayerEvent, PlayerOptions, EMBED_SCRIPT_URL};

fn main() -> twitch_player_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    twitch_player_core::init();

    println!("Twitch Player Core - Embed Example");
    println!("==================================\n");

    let options = PlayerOptions::new(854, 480)
        .with_channel("twitchdev")
        .with_video("123456")
        .with_parents(["streamernews.example.com", "embed.example.com"])
        .with_muted(true);

    println!("Script: {}", EMBED_SCRIPT_URL);
    println!("Content: {:?}", options.content());
    println!();

    println!("JS options object:");
    println!("------------------");
    println!("  {}", options.to_json()?);
    println!();

    println!("Iframe:");
    println!("-------");
    println!(
        "  <iframe src=\"{}\" width=\"{}\" height=\"{}\" allowfullscreen></iframe>",
        options.to_embed_url()?,
        options.width(),
        options.height()
    );
    println!();

    println!("Events:");
    println!("-------");
    for event in PlayerEvent::ALL {
        let scope = if event.is_base() { "player" } else { "video embed" };
        println!("  {:<16} [{}] {}", event.as_str(), scope, event.description());
    }

    Ok(())
}
