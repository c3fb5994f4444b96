//! Player options exposed to JavaScript

use crate::to_js_error;
use js_sys::Array;
use serde::Serialize;
use twitch_player_core::{Dimension, PlayerOptions};
use wasm_bindgen::prelude::*;

/// Immutable embed options. `with*` methods return a new instance.
#[wasm_bindgen]
#[derive(Clone)]
pub struct TwitchPlayerOptions {
    inner: PlayerOptions,
}

#[wasm_bindgen]
impl TwitchPlayerOptions {
    /// Width and height are pixel numbers or CSS strings such as `"100%"`
    #[wasm_bindgen(constructor)]
    pub fn new(width: JsValue, height: JsValue) -> Result<TwitchPlayerOptions, JsValue> {
        Ok(Self {
            inner: PlayerOptions::new(dimension_from_js(&width)?, dimension_from_js(&height)?),
        })
    }

    /// Read a plain JS options object
    #[wasm_bindgen(js_name = fromEmbedOptions)]
    pub fn from_embed_options(value: JsValue) -> Result<TwitchPlayerOptions, JsValue> {
        let inner: PlayerOptions = serde_wasm_bindgen::from_value(value)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TwitchPlayerOptions, JsValue> {
        let inner = PlayerOptions::from_json(json).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> JsValue {
        dimension_to_js(self.inner.width())
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> JsValue {
        dimension_to_js(self.inner.height())
    }

    #[wasm_bindgen(getter)]
    pub fn channel(&self) -> Option<String> {
        self.inner.channel().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn video(&self) -> Option<String> {
        self.inner.video().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn collection(&self) -> Option<String> {
        self.inner.collection().map(str::to_string)
    }

    /// Parent domains, or `undefined` when none were given
    #[wasm_bindgen(getter)]
    pub fn parent(&self) -> JsValue {
        match self.inner.parent() {
            Some(domains) => domains
                .iter()
                .map(|d| JsValue::from_str(d))
                .collect::<Array>()
                .into(),
            None => JsValue::UNDEFINED,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn autoplay(&self) -> bool {
        self.inner.autoplay()
    }

    #[wasm_bindgen(getter)]
    pub fn muted(&self) -> bool {
        self.inner.muted()
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> Option<String> {
        self.inner.time().map(str::to_string)
    }

    #[wasm_bindgen(js_name = withChannel)]
    pub fn with_channel(&self, channel: String) -> TwitchPlayerOptions {
        self.map(|o| o.with_channel(channel))
    }

    #[wasm_bindgen(js_name = withVideo)]
    pub fn with_video(&self, video: String) -> TwitchPlayerOptions {
        self.map(|o| o.with_video(video))
    }

    #[wasm_bindgen(js_name = withCollection)]
    pub fn with_collection(&self, collection: String) -> TwitchPlayerOptions {
        self.map(|o| o.with_collection(collection))
    }

    #[wasm_bindgen(js_name = withParent)]
    pub fn with_parent(&self, domain: String) -> TwitchPlayerOptions {
        self.map(|o| o.with_parent(domain))
    }

    #[wasm_bindgen(js_name = withParents)]
    pub fn with_parents(&self, domains: Vec<String>) -> TwitchPlayerOptions {
        self.map(|o| o.with_parents(domains))
    }

    #[wasm_bindgen(js_name = withAutoplay)]
    pub fn with_autoplay(&self, autoplay: bool) -> TwitchPlayerOptions {
        self.map(|o| o.with_autoplay(autoplay))
    }

    #[wasm_bindgen(js_name = withMuted)]
    pub fn with_muted(&self, muted: bool) -> TwitchPlayerOptions {
        self.map(|o| o.with_muted(muted))
    }

    #[wasm_bindgen(js_name = withTime)]
    pub fn with_time(&self, time: String) -> TwitchPlayerOptions {
        self.map(|o| o.with_time(time))
    }

    /// Start position in seconds, `undefined` without a start time
    #[wasm_bindgen(js_name = startOffsetSeconds)]
    pub fn start_offset_seconds(&self) -> Result<Option<f64>, JsValue> {
        let offset = self.inner.start_offset().map_err(to_js_error)?;
        Ok(offset.map(|d| d.as_secs_f64()))
    }

    /// Plain object for `new Twitch.Player(element, options)`
    #[wasm_bindgen(js_name = toEmbedOptions)]
    pub fn to_embed_options(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(self.inner.serialize(&serializer)?)
    }

    /// `src` for a non-interactive iframe embed
    #[wasm_bindgen(js_name = toEmbedUrl)]
    pub fn to_embed_url(&self) -> Result<String, JsValue> {
        let url = self.inner.to_embed_url().map_err(to_js_error)?;
        Ok(url.into())
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json().map_err(to_js_error)
    }
}

impl TwitchPlayerOptions {
    /// Borrow the core options
    pub fn as_core(&self) -> &PlayerOptions {
        &self.inner
    }

    fn map(&self, f: impl FnOnce(PlayerOptions) -> PlayerOptions) -> Self {
        Self {
            inner: f(self.inner.clone()),
        }
    }
}

impl From<PlayerOptions> for TwitchPlayerOptions {
    fn from(inner: PlayerOptions) -> Self {
        Self { inner }
    }
}

fn dimension_from_js(value: &JsValue) -> Result<Dimension, JsValue> {
    if let Some(number) = value.as_f64() {
        return Ok(number_to_dimension(number));
    }
    value
        .as_string()
        .map(Dimension::Relative)
        .ok_or_else(|| JsValue::from_str("width and height must be a number or a string"))
}

/// JS numbers stay numbers; whole non-negative values become pixels
fn number_to_dimension(number: f64) -> Dimension {
    if number >= 0.0 && number.fract() == 0.0 && number <= u32::MAX as f64 {
        Dimension::Pixels(number as u32)
    } else {
        Dimension::Number(number)
    }
}

fn dimension_to_js(dimension: &Dimension) -> JsValue {
    match dimension {
        Dimension::Pixels(px) => JsValue::from_f64(f64::from(*px)),
        Dimension::Number(number) => JsValue::from_f64(*number),
        Dimension::Relative(text) => JsValue::from_str(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_keep_number_type() {
        assert_eq!(number_to_dimension(640.0), Dimension::Pixels(640));
        assert_eq!(number_to_dimension(640.5), Dimension::Number(640.5));
        assert_eq!(number_to_dimension(-1.0), Dimension::Number(-1.0));
        assert_eq!(number_to_dimension(1e12), Dimension::Number(1e12));
    }
}
