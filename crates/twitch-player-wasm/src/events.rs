//! Player events exposed to JavaScript

use crate::to_js_error;
use js_sys::Array;
use twitch_player_core::PlayerEvent;
use wasm_bindgen::prelude::*;

/// Events the embed widget can raise
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwitchPlayerEvent {
    Ended,
    Pause,
    Play,
    PlaybackBlocked,
    Playing,
    Offline,
    Online,
    Ready,
    Seek,
    Captions,
    VideoReady,
    VideoPlay,
}

impl From<TwitchPlayerEvent> for PlayerEvent {
    fn from(event: TwitchPlayerEvent) -> Self {
        match event {
            TwitchPlayerEvent::Ended => PlayerEvent::Ended,
            TwitchPlayerEvent::Pause => PlayerEvent::Pause,
            TwitchPlayerEvent::Play => PlayerEvent::Play,
            TwitchPlayerEvent::PlaybackBlocked => PlayerEvent::PlaybackBlocked,
            TwitchPlayerEvent::Playing => PlayerEvent::Playing,
            TwitchPlayerEvent::Offline => PlayerEvent::Offline,
            TwitchPlayerEvent::Online => PlayerEvent::Online,
            TwitchPlayerEvent::Ready => PlayerEvent::Ready,
            TwitchPlayerEvent::Seek => PlayerEvent::Seek,
            TwitchPlayerEvent::Captions => PlayerEvent::Captions,
            TwitchPlayerEvent::VideoReady => PlayerEvent::VideoReady,
            TwitchPlayerEvent::VideoPlay => PlayerEvent::VideoPlay,
        }
    }
}

impl From<PlayerEvent> for TwitchPlayerEvent {
    fn from(event: PlayerEvent) -> Self {
        match event {
            PlayerEvent::Ended => TwitchPlayerEvent::Ended,
            PlayerEvent::Pause => TwitchPlayerEvent::Pause,
            PlayerEvent::Play => TwitchPlayerEvent::Play,
            PlayerEvent::PlaybackBlocked => TwitchPlayerEvent::PlaybackBlocked,
            PlayerEvent::Playing => TwitchPlayerEvent::Playing,
            PlayerEvent::Offline => TwitchPlayerEvent::Offline,
            PlayerEvent::Online => TwitchPlayerEvent::Online,
            PlayerEvent::Ready => TwitchPlayerEvent::Ready,
            PlayerEvent::Seek => TwitchPlayerEvent::Seek,
            PlayerEvent::Captions => TwitchPlayerEvent::Captions,
            PlayerEvent::VideoReady => TwitchPlayerEvent::VideoReady,
            PlayerEvent::VideoPlay => TwitchPlayerEvent::VideoPlay,
        }
    }
}

/// Name to pass to `player.addEventListener`
#[wasm_bindgen(js_name = eventName)]
pub fn event_name(event: TwitchPlayerEvent) -> String {
    PlayerEvent::from(event).as_str().to_string()
}

/// Look up an event by the name the widget emits
#[wasm_bindgen(js_name = parseEvent)]
pub fn parse_event(name: &str) -> Result<TwitchPlayerEvent, JsValue> {
    name.parse::<PlayerEvent>()
        .map(TwitchPlayerEvent::from)
        .map_err(to_js_error)
}

/// True for events only the full video embed raises
#[wasm_bindgen(js_name = isVideoEmbedOnly)]
pub fn is_video_embed_only(event: TwitchPlayerEvent) -> bool {
    PlayerEvent::from(event).is_video_embed_only()
}

#[wasm_bindgen(js_name = eventDescription)]
pub fn event_description(event: TwitchPlayerEvent) -> String {
    PlayerEvent::from(event).description().to_string()
}

/// Names of the base player events
#[wasm_bindgen(js_name = baseEventNames)]
pub fn base_event_names() -> Array {
    names(&PlayerEvent::BASE)
}

/// Names of every event, base player first
#[wasm_bindgen(js_name = allEventNames)]
pub fn all_event_names() -> Array {
    names(&PlayerEvent::ALL)
}

fn names(events: &[PlayerEvent]) -> Array {
    events
        .iter()
        .map(|event| JsValue::from_str(event.as_str()))
        .collect()
}
