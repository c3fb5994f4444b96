//! Player options - construction parameters for the embed widget
//!
//! [`PlayerOptions`] carries exactly what the caller hands to
//! `new Twitch.Player(element, options)`. Nothing is validated here; the
//! widget decides what to do with contradictory or malformed values.
//!
//! Two encodings are supported:
//! - the JS options object (serde / JSON)
//! - the iframe query string (`https://player.twitch.tv/?channel=...&parent=...`)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Base URL of the non-interactive iframe player
pub const EMBED_PLAYER_URL: &str = "https://player.twitch.tv/";

/// Script that defines `Twitch.Player`
pub const EMBED_SCRIPT_URL: &str = "https://player.twitch.tv/js/embed/v1.js";

/// Width or height of the embedded window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Whole pixel count, sent as an integer
    Pixels(u32),
    /// Any other JS number (fractional, negative, `640.0`), passed through as is
    Number(f64),
    /// Any CSS length, e.g. `100%`, sent as a string
    Relative(String),
}

impl Dimension {
    /// Read a dimension from query text.
    ///
    /// Text is numeric only when it is the canonical rendering of a number,
    /// so `640` is pixels, `50.5` a number, while `0360` or `1e3` stay
    /// relative text.
    pub fn parse(text: &str) -> Self {
        if let Ok(px) = text.parse::<u32>() {
            if px.to_string() == text {
                return Dimension::Pixels(px);
            }
        }
        if let Ok(number) = text.parse::<f64>() {
            if number.is_finite() && number.to_string() == text {
                return Dimension::Number(number);
            }
        }
        Dimension::Relative(text.to_string())
    }

    /// Returns true for either numeric form
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Dimension::Relative(_))
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}", px),
            Dimension::Number(number) => write!(f, "{}", number),
            Dimension::Relative(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<f64> for Dimension {
    fn from(number: f64) -> Self {
        Dimension::Number(number)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Dimension::Relative(text.to_string())
    }
}

impl From<String> for Dimension {
    fn from(text: String) -> Self {
        Dimension::Relative(text)
    }
}

/// Content the widget will actually load for a set of options.
///
/// Channel wins over video and collection. A video together with a
/// collection plays the collection starting at that video (the widget
/// falls back to the bare video when it is not part of the collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSelection<'a> {
    Channel(&'a str),
    Video {
        id: &'a str,
        collection: Option<&'a str>,
    },
    Collection(&'a str),
    Nothing,
}

fn default_autoplay() -> bool {
    true
}

/// An empty parent list is stored as no list
fn non_empty(domains: Vec<String>) -> Option<Vec<String>> {
    if domains.is_empty() {
        None
    } else {
        Some(domains)
    }
}

fn deserialize_parent<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let domains: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(domains.and_then(non_empty))
}

/// Initialization options for the embedded player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    width: Dimension,
    height: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collection: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_parent"
    )]
    parent: Option<Vec<String>>,
    #[serde(default = "default_autoplay")]
    autoplay: bool,
    #[serde(default)]
    muted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
}

impl PlayerOptions {
    /// Create options with only the window size set.
    ///
    /// Autoplay is on, sound is on, no content is selected.
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            channel: None,
            video: None,
            collection: None,
            parent: None,
            autoplay: true,
            muted: false,
            time: None,
        }
    }

    /// Fill the containing element
    pub fn responsive() -> Self {
        Self::new("100%", "100%")
    }

    /// Smallest size the widget is designed for (400x300)
    pub fn recommended_minimum() -> Self {
        Self::new(400, 300)
    }

    /// Live stream of a channel. Takes precedence over video and collection.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_video(mut self, video: impl Into<String>) -> Self {
        self.video = Some(video.into());
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Append one parent domain
    pub fn with_parent(mut self, domain: impl Into<String>) -> Self {
        self.parent.get_or_insert_with(Vec::new).push(domain.into());
        self
    }

    /// Replace the parent domain list. An empty list clears it.
    pub fn with_parents<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent = non_empty(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Start position for VODs, e.g. `1h2m3s`
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn width(&self) -> &Dimension {
        &self.width
    }

    pub fn height(&self) -> &Dimension {
        &self.height
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Domains allowed to host the embed
    pub fn parent(&self) -> Option<&[String]> {
        self.parent.as_deref()
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Which content the widget will load. Stored values are not changed.
    pub fn content(&self) -> ContentSelection<'_> {
        let selectors = [&self.channel, &self.video, &self.collection]
            .iter()
            .filter(|s| s.is_some())
            .count();
        if selectors > 1 {
            debug!(
                channel = ?self.channel,
                video = ?self.video,
                collection = ?self.collection,
                "multiple content selectors set, embed applies channel > video > collection"
            );
        }

        match (self.channel(), self.video(), self.collection()) {
            (Some(channel), _, _) => ContentSelection::Channel(channel),
            (None, Some(id), collection) => ContentSelection::Video { id, collection },
            (None, None, Some(collection)) => ContentSelection::Collection(collection),
            (None, None, None) => ContentSelection::Nothing,
        }
    }

    /// Start position as a duration, parsed from the `XhYmZs` time text
    pub fn start_offset(&self) -> Result<Option<Duration>> {
        self.time().map(parse_start_time).transpose()
    }

    /// Serialize as the JS options object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read options from a JS options object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every option as `key=value` pairs, one pair per parent domain.
    ///
    /// Query text carries no types: a relative dimension whose text looks
    /// like a number (`"640"`) reads back through [`Dimension::parse`] as
    /// numeric, and `640.0` reads back as `640` pixels.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
        ];
        pairs.extend(self.embed_query_pairs());
        pairs
    }

    /// URL for an iframe `src`. Width and height belong on the iframe
    /// element, so they are left out.
    pub fn to_embed_url(&self) -> Result<Url> {
        let mut url = Url::parse(EMBED_PLAYER_URL)?;
        url.query_pairs_mut().extend_pairs(self.embed_query_pairs());
        debug!(url = %url, "built embed url");
        Ok(url)
    }

    /// Read options back from query pairs. Unknown keys are ignored.
    pub fn from_query<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut width = None;
        let mut height = None;
        let mut options = Self::new(0, 0);

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "width" => width = Some(Dimension::parse(value)),
                "height" => height = Some(Dimension::parse(value)),
                "channel" => options.channel = Some(value.to_string()),
                "video" => options.video = Some(value.to_string()),
                "collection" => options.collection = Some(value.to_string()),
                "parent" => options = options.with_parent(value),
                "autoplay" => options.autoplay = parse_bool("autoplay", value)?,
                "muted" => options.muted = parse_bool("muted", value)?,
                "time" => options.time = Some(value.to_string()),
                other => debug!(key = other, "ignoring unknown embed parameter"),
            }
        }

        options.width = width.ok_or(Error::MissingParameter("width"))?;
        options.height = height.ok_or(Error::MissingParameter("height"))?;
        Ok(options)
    }

    /// Read options from an iframe `src`, with the iframe's own size
    pub fn from_embed_url(
        url: &str,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> Result<Self> {
        let url = Url::parse(url)?;
        let size = [
            ("width".to_string(), width.into().to_string()),
            ("height".to_string(), height.into().to_string()),
        ];
        let pairs = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .filter(|(k, _)| k != "width" && k != "height");
        Self::from_query(size.into_iter().chain(pairs))
    }

    fn embed_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(channel) = &self.channel {
            pairs.push(("channel", channel.clone()));
        }
        if let Some(video) = &self.video {
            pairs.push(("video", video.clone()));
        }
        if let Some(collection) = &self.collection {
            pairs.push(("collection", collection.clone()));
        }
        for domain in self.parent().unwrap_or_default() {
            pairs.push(("parent", domain.clone()));
        }
        pairs.push(("autoplay", self.autoplay.to_string()));
        pairs.push(("muted", self.muted.to_string()));
        if let Some(time) = &self.time {
            pairs.push(("time", time.clone()));
        }
        pairs
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_parameter(key, value)),
    }
}

/// Parse `XhYmZs` start time text. Each unit is optional but they must
/// appear in h, m, s order.
fn parse_start_time(text: &str) -> Result<Duration> {
    let invalid = || Error::InvalidStartTime(text.to_string());

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut last_rank = 0;
    let mut saw_unit = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let (rank, scale) = match c {
            'h' => (1, 3600),
            'm' => (2, 60),
            's' => (3, 1),
            _ => return Err(invalid()),
        };
        if rank <= last_rank || digits.is_empty() {
            return Err(invalid());
        }

        let value: u64 = digits.parse().map_err(|_| invalid())?;
        total = value
            .checked_mul(scale)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
        digits.clear();
        last_rank = rank;
        saw_unit = true;
    }

    if !digits.is_empty() || !saw_unit {
        return Err(invalid());
    }
    Ok(Duration::from_secs(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlayerOptions::new(640, 360);
        assert!(options.autoplay());
        assert!(!options.muted());
        assert_eq!(options.channel(), None);
        assert_eq!(options.video(), None);
        assert_eq!(options.collection(), None);
        assert_eq!(options.parent(), None);
        assert_eq!(options.time(), None);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!(Dimension::parse("640"), Dimension::Pixels(640));
        assert_eq!(Dimension::parse("50.5"), Dimension::Number(50.5));
        assert_eq!(Dimension::parse("-1"), Dimension::Number(-1.0));
        assert_eq!(Dimension::parse("0360"), Dimension::Relative("0360".into()));
        assert_eq!(Dimension::parse("1e3"), Dimension::Relative("1e3".into()));
        assert_eq!(Dimension::parse("NaN"), Dimension::Relative("NaN".into()));
        assert_eq!(Dimension::parse("100%"), Dimension::Relative("100%".into()));
        assert_eq!(Dimension::parse(""), Dimension::Relative(String::new()));
        assert_eq!(
            Dimension::parse("99999999999"),
            Dimension::Number(99999999999.0)
        );
    }

    #[test]
    fn test_dimension_json_shape() {
        let options = PlayerOptions::new(854, "50%");
        let value: serde_json::Value = serde_json::from_str(&options.to_json().unwrap()).unwrap();
        assert_eq!(value["width"], serde_json::json!(854));
        assert_eq!(value["height"], serde_json::json!("50%"));
    }

    #[test]
    fn test_parse_start_time() {
        assert_eq!(parse_start_time("0h0m0s").unwrap(), Duration::ZERO);
        assert_eq!(parse_start_time("1h2m3s").unwrap(), Duration::from_secs(3723));
        assert_eq!(parse_start_time("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_start_time("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_start_time("1h30s").unwrap(), Duration::from_secs(3630));
    }

    #[test]
    fn test_parse_start_time_rejects_malformed() {
        for text in ["", "10", "1m2h", "h", "1h1h", "1x", "1h 2m"] {
            assert!(
                matches!(parse_start_time(text), Err(Error::InvalidStartTime(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("muted", "true").unwrap());
        assert!(!parse_bool("muted", "false").unwrap());
        assert!(parse_bool("muted", "1").is_err());
    }
}
