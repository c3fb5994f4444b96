//! Twitch Player WASM - browser bindings for the Twitch embed vocabulary
//!
//! Exposes the core types to JavaScript so pages (or Rust front ends
//! compiled to WASM) can build embed options, subscribe with the right
//! event names and read playback statistics.
//!
//! ## Integration with the Twitch embed script
//!
//! ```javascript
//! import init, { TwitchPlayerOptions, TwitchPlayerEvent, eventName } from '@twitch-player/wasm';
//!
//! await init();
//! const options = new TwitchPlayerOptions(854, "100%")
//!     .withChannel("twitchdev")
//!     .withParent(location.hostname);
//! const player = new Twitch.Player("player", options.toEmbedOptions());
//! player.addEventListener(eventName(TwitchPlayerEvent.Ready), () => { ... });
//! ```

use wasm_bindgen::prelude::*;

mod events;
mod options;
mod stats;

pub use events::TwitchPlayerEvent;
pub use options::TwitchPlayerOptions;
pub use stats::TwitchPlaybackStatistics;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Twitch Player WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    twitch_player_core::VERSION.to_string()
}

/// Script URL that defines `Twitch.Player`
#[wasm_bindgen(js_name = embedScriptUrl)]
pub fn embed_script_url() -> String {
    twitch_player_core::EMBED_SCRIPT_URL.to_string()
}

/// Core errors cross the boundary as `CODE: message` strings
pub(crate) fn to_js_error(err: twitch_player_core::Error) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.error_code(), err))
}
