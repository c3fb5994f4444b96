//! Twitch Player Core - typed vocabulary for the Twitch embedded player
//!
//! The Twitch player runs inside an externally loaded script
//! (`https://player.twitch.tv/js/embed/v1.js`). This crate does not render,
//! stream or dispatch anything; it mirrors the widget's vocabulary as Rust
//! types:
//! - Event names for `addEventListener`
//! - Construction options for `new Twitch.Player(...)` and iframe URLs
//! - Playback statistics returned by `getPlaybackStats()`
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Twitch Player Core                       │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐     │
//! │  │   Player     │  │   Player     │  │   Playback   │     │
//! │  │   Events     │  │   Options    │  │  Statistics  │     │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘     │
//! │         │                 │                 │             │
//! │         │          ┌──────┴──────┐          │             │
//! │         │          │ JSON / URL  │          │             │
//! │         │          │  encodings  │          │             │
//! │         │          └──────┬──────┘          │             │
//! └─────────┼─────────────────┼─────────────────┼─────────────┘
//!           ▼                 ▼                 ▲
//!   ┌───────────────────────────────────────────────────────┐
//!   │              Twitch embed widget (external)            │
//!   └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use twitch_player_core::{PlayerEvent, PlayerOptions};
//!
//! let options = PlayerOptions::new(854, 480)
//!     .with_channel("monstercat")
//!     .with_parent("embed.example.com")
//!     .with_muted(true);
//!
//! let url = options.to_embed_url().unwrap();
//! assert!(url.as_str().contains("channel=monstercat"));
//! assert_eq!(PlayerEvent::PlaybackBlocked.as_str(), "playbackBlocked");
//! ```

pub mod error;
pub mod events;
pub mod options;
pub mod stats;

pub use error::{Error, Result};
pub use events::PlayerEvent;
pub use options::{ContentSelection, Dimension, PlayerOptions, EMBED_PLAYER_URL, EMBED_SCRIPT_URL};
pub use stats::{PlaybackStatistics, Resolution};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version. Installing a subscriber is left to the caller.
pub fn init() {
    tracing::info!(version = VERSION, "Twitch Player Core initialized");
}
