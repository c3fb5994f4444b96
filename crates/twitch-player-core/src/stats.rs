//! Playback statistics reported by `player.getPlaybackStats()`

use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Snapshot of playback quality metrics from the embed widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatistics {
    backend_version: String,
    buffer_size: f64,
    codecs: String,
    display_resolution: String,
    fps: f64,
    hls_latency_broadcaster: f64,
    latency_mode: String,
    playback_rate: f64,
    skipped_frames: f64,
    video_resolution: String,
}

impl PlaybackStatistics {
    /// Decode the object returned by the widget
    pub fn from_json(json: &str) -> Result<Self> {
        let stats: Self = serde_json::from_str(json)?;
        trace!(?stats, "decoded playback statistics");
        Ok(stats)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn backend_version(&self) -> &str {
        &self.backend_version
    }

    /// Seconds of media buffered ahead of the playhead
    pub fn buffer_size(&self) -> f64 {
        self.buffer_size
    }

    /// Codec string, e.g. `avc1.4D401F,mp4a.40.2`
    pub fn codecs(&self) -> &str {
        &self.codecs
    }

    pub fn display_resolution(&self) -> &str {
        &self.display_resolution
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Latency to the broadcaster, in seconds
    pub fn hls_latency_broadcaster(&self) -> f64 {
        self.hls_latency_broadcaster
    }

    pub fn latency_mode(&self) -> &str {
        &self.latency_mode
    }

    pub fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    pub fn skipped_frames(&self) -> f64 {
        self.skipped_frames
    }

    pub fn video_resolution(&self) -> &str {
        &self.video_resolution
    }

    /// Source video size, if the widget reported it as `WIDTHxHEIGHT`
    pub fn parsed_video_resolution(&self) -> Option<Resolution> {
        self.video_resolution.parse().ok()
    }

    /// On-screen size, if the widget reported it as `WIDTHxHEIGHT`
    pub fn parsed_display_resolution(&self) -> Option<Resolution> {
        self.display_resolution.parse().ok()
    }
}

/// Frame size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns quality tier name
    pub fn quality_name(&self) -> &'static str {
        match self.height {
            0..=160 => "160p",
            161..=360 => "360p",
            361..=480 => "480p",
            481..=720 => "720p",
            721..=1080 => "1080p",
            1081..=1440 => "1440p",
            _ => "4K",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Resolution {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // A missing separator leaves an empty height, which fails to parse
        let (width, height) = s.trim().split_once('x').unwrap_or((s, ""));
        Ok(Self::new(width.parse()?, height.parse()?))
    }
}
