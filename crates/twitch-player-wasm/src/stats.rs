//! Playback statistics exposed to JavaScript

use crate::to_js_error;
use twitch_player_core::PlaybackStatistics;
use wasm_bindgen::prelude::*;

/// Read-only view of `player.getPlaybackStats()`
#[wasm_bindgen]
#[derive(Clone)]
pub struct TwitchPlaybackStatistics {
    inner: PlaybackStatistics,
}

#[wasm_bindgen]
impl TwitchPlaybackStatistics {
    /// Decode the object returned by `getPlaybackStats()`
    #[wasm_bindgen(js_name = fromJs)]
    pub fn from_js(value: JsValue) -> Result<TwitchPlaybackStatistics, JsValue> {
        let inner: PlaybackStatistics = serde_wasm_bindgen::from_value(value)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TwitchPlaybackStatistics, JsValue> {
        let inner = PlaybackStatistics::from_json(json).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter, js_name = backendVersion)]
    pub fn backend_version(&self) -> String {
        self.inner.backend_version().to_string()
    }

    #[wasm_bindgen(getter, js_name = bufferSize)]
    pub fn buffer_size(&self) -> f64 {
        self.inner.buffer_size()
    }

    #[wasm_bindgen(getter)]
    pub fn codecs(&self) -> String {
        self.inner.codecs().to_string()
    }

    #[wasm_bindgen(getter, js_name = displayResolution)]
    pub fn display_resolution(&self) -> String {
        self.inner.display_resolution().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 {
        self.inner.fps()
    }

    #[wasm_bindgen(getter, js_name = hlsLatencyBroadcaster)]
    pub fn hls_latency_broadcaster(&self) -> f64 {
        self.inner.hls_latency_broadcaster()
    }

    #[wasm_bindgen(getter, js_name = latencyMode)]
    pub fn latency_mode(&self) -> String {
        self.inner.latency_mode().to_string()
    }

    #[wasm_bindgen(getter, js_name = playbackRate)]
    pub fn playback_rate(&self) -> f64 {
        self.inner.playback_rate()
    }

    #[wasm_bindgen(getter, js_name = skippedFrames)]
    pub fn skipped_frames(&self) -> f64 {
        self.inner.skipped_frames()
    }

    #[wasm_bindgen(getter, js_name = videoResolution)]
    pub fn video_resolution(&self) -> String {
        self.inner.video_resolution().to_string()
    }

    /// Quality tier of the source video, e.g. `1080p`
    #[wasm_bindgen(js_name = qualityName)]
    pub fn quality_name(&self) -> Option<String> {
        self.inner
            .parsed_video_resolution()
            .map(|r| r.quality_name().to_string())
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(to_js_error)
    }
}

impl TwitchPlaybackStatistics {
    /// Borrow the core statistics
    pub fn as_core(&self) -> &PlaybackStatistics {
        &self.inner
    }
}
