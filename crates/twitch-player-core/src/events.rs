//! Player events - names the embed widget emits
//!
//! The base `Twitch.Player` and the full video embed (`Twitch.Embed`)
//! share most event names. Both sets live in one enum; the extra events
//! only raised by the video embed are flagged by [`PlayerEvent::is_video_embed_only`].
//!
//! ```rust
//! use twitch_player_core::PlayerEvent;
//!
//! let event: PlayerEvent = "video.ready".parse().unwrap();
//! assert_eq!(event, PlayerEvent::VideoReady);
//! assert!(event.is_video_embed_only());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Event names accepted by the embed's `addEventListener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerEvent {
    #[serde(rename = "ended")]
    Ended,
    #[serde(rename = "pause")]
    Pause,
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "playbackBlocked")]
    PlaybackBlocked,
    #[serde(rename = "playing")]
    Playing,
    #[serde(rename = "offline")]
    Offline,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "seek")]
    Seek,
    #[serde(rename = "captions")]
    Captions,
    #[serde(rename = "video.ready")]
    VideoReady,
    #[serde(rename = "video.play")]
    VideoPlay,
}

impl PlayerEvent {
    /// Events raised by the base player
    pub const BASE: [PlayerEvent; 8] = [
        PlayerEvent::Ended,
        PlayerEvent::Pause,
        PlayerEvent::Play,
        PlayerEvent::PlaybackBlocked,
        PlayerEvent::Playing,
        PlayerEvent::Offline,
        PlayerEvent::Online,
        PlayerEvent::Ready,
    ];

    /// Every event, base player first
    pub const ALL: [PlayerEvent; 12] = [
        PlayerEvent::Ended,
        PlayerEvent::Pause,
        PlayerEvent::Play,
        PlayerEvent::PlaybackBlocked,
        PlayerEvent::Playing,
        PlayerEvent::Offline,
        PlayerEvent::Online,
        PlayerEvent::Ready,
        PlayerEvent::Seek,
        PlayerEvent::Captions,
        PlayerEvent::VideoReady,
        PlayerEvent::VideoPlay,
    ];

    /// The exact name the embed widget emits
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerEvent::Ended => "ended",
            PlayerEvent::Pause => "pause",
            PlayerEvent::Play => "play",
            PlayerEvent::PlaybackBlocked => "playbackBlocked",
            PlayerEvent::Playing => "playing",
            PlayerEvent::Offline => "offline",
            PlayerEvent::Online => "online",
            PlayerEvent::Ready => "ready",
            PlayerEvent::Seek => "seek",
            PlayerEvent::Captions => "captions",
            PlayerEvent::VideoReady => "video.ready",
            PlayerEvent::VideoPlay => "video.play",
        }
    }

    /// Returns true if the base player raises this event
    pub fn is_base(&self) -> bool {
        !self.is_video_embed_only()
    }

    /// Returns true if only the full video embed raises this event
    pub fn is_video_embed_only(&self) -> bool {
        matches!(
            self,
            PlayerEvent::Seek
                | PlayerEvent::Captions
                | PlayerEvent::VideoReady
                | PlayerEvent::VideoPlay
        )
    }

    /// When the widget raises the event
    pub fn description(&self) -> &'static str {
        match self {
            PlayerEvent::Ended => "The video or stream finished",
            PlayerEvent::Pause => "Playback paused (buffering and seeking do not count)",
            PlayerEvent::Play => "Playback resumed; frames or buffering follow",
            PlayerEvent::PlaybackBlocked => "The browser refused to start playback, usually an unmuted autoplay",
            PlayerEvent::Playing => "Frames started rendering",
            PlayerEvent::Offline => "The loaded channel went offline",
            PlayerEvent::Online => "The loaded channel went live",
            PlayerEvent::Ready => "The player accepts API calls",
            PlayerEvent::Seek => "Playback position jumped after a user seek, a seek() call or a live resync",
            PlayerEvent::Captions => "A batch of closed captions arrived; the payload is the caption text",
            PlayerEvent::VideoReady => "The video embed accepts API calls",
            PlayerEvent::VideoPlay => "The video embed started playing; the payload carries a sessionId",
        }
    }
}

impl std::fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PlayerEvent::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| Error::UnknownEvent(s.to_string()))
    }
}

impl TryFrom<&str> for PlayerEvent {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}
