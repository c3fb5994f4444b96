//! Integration tests for Twitch Player Core

use std::time::Duration;
use twitch_player_core::{
    ContentSelection, Dimension, Error, PlaybackStatistics, PlayerEvent, PlayerOptions,
};

// =============================================================================
// Event Tests
// =============================================================================

#[test]
fn test_event_name_table() {
    assert_eq!(PlayerEvent::Pause.as_str(), "pause");
    assert_eq!(PlayerEvent::Seek.as_str(), "seek");
    assert_eq!(PlayerEvent::Captions.as_str(), "captions");
    assert_eq!(PlayerEvent::VideoReady.as_str(), "video.ready");
    assert_eq!(PlayerEvent::VideoPlay.as_str(), "video.play");
    assert_eq!(PlayerEvent::PlaybackBlocked.as_str(), "playbackBlocked");
}

#[test]
fn test_event_names_parse_back() {
    for event in PlayerEvent::ALL {
        assert_eq!(event.as_str().parse::<PlayerEvent>().unwrap(), event);
    }
}

#[test]
fn test_base_events_are_a_subset() {
    assert_eq!(PlayerEvent::BASE.len(), 8);
    assert_eq!(PlayerEvent::ALL.len(), 12);
    for event in PlayerEvent::BASE {
        assert!(PlayerEvent::ALL.contains(&event));
        assert!(!event.is_video_embed_only());
    }
    assert!(PlayerEvent::Seek.is_video_embed_only());
    assert!(PlayerEvent::Ready.is_base());
}

#[test]
fn test_unknown_event() {
    let err = "stalled".parse::<PlayerEvent>().unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_EVENT");
    assert_eq!(err.to_string(), "Unknown player event: stalled");
}

// =============================================================================
// Options Tests
// =============================================================================

#[test]
fn test_options_defaults() {
    let options = PlayerOptions::new("100%", 480);
    assert_eq!(options.width(), &Dimension::Relative("100%".into()));
    assert_eq!(options.height(), &Dimension::Pixels(480));
    assert!(options.autoplay());
    assert!(!options.muted());
    assert!(options.channel().is_none());
    assert!(options.video().is_none());
    assert!(options.collection().is_none());
    assert!(options.parent().is_none());
    assert!(options.time().is_none());
}

#[test]
fn test_options_explicit_flags_preserved() {
    let options = PlayerOptions::new(640, 360)
        .with_autoplay(false)
        .with_muted(true);
    assert!(!options.autoplay());
    assert!(options.muted());
}

#[test]
fn test_builder_leaves_original_untouched() {
    let base = PlayerOptions::recommended_minimum();
    let muted = base.clone().with_muted(true).with_channel("twitchdev");

    assert!(!base.muted());
    assert!(base.channel().is_none());
    assert!(muted.muted());
    assert_eq!(muted.channel(), Some("twitchdev"));
}

#[test]
fn test_presets() {
    let responsive = PlayerOptions::responsive();
    assert_eq!(responsive.width().to_string(), "100%");
    assert_eq!(responsive.height().to_string(), "100%");

    let minimum = PlayerOptions::recommended_minimum();
    assert_eq!(minimum.width(), &Dimension::Pixels(400));
    assert_eq!(minimum.height(), &Dimension::Pixels(300));
}

#[test]
fn test_parents() {
    let options = PlayerOptions::new(400, 300)
        .with_parent("streamernews.example.com")
        .with_parent("embed.example.com");
    assert_eq!(
        options.parent(),
        Some(&["streamernews.example.com".to_string(), "embed.example.com".to_string()][..])
    );

    let replaced = options.with_parents(["localhost"]);
    assert_eq!(replaced.parent(), Some(&["localhost".to_string()][..]));
}

#[test]
fn test_content_precedence() {
    let all = PlayerOptions::new(400, 300)
        .with_channel("twitchdev")
        .with_video("123456")
        .with_collection("abcDEF");
    assert_eq!(all.content(), ContentSelection::Channel("twitchdev"));
    // Values are carried even when the widget ignores them
    assert_eq!(all.video(), Some("123456"));
    assert_eq!(all.collection(), Some("abcDEF"));

    let video_in_collection = PlayerOptions::new(400, 300)
        .with_video("123456")
        .with_collection("abcDEF");
    assert_eq!(
        video_in_collection.content(),
        ContentSelection::Video { id: "123456", collection: Some("abcDEF") }
    );

    let collection = PlayerOptions::new(400, 300).with_collection("abcDEF");
    assert_eq!(collection.content(), ContentSelection::Collection("abcDEF"));

    assert_eq!(PlayerOptions::new(400, 300).content(), ContentSelection::Nothing);
}

#[test]
fn test_start_offset() {
    let options = PlayerOptions::new(400, 300).with_video("123456").with_time("1h2m3s");
    assert_eq!(options.start_offset().unwrap(), Some(Duration::from_secs(3723)));
    assert_eq!(PlayerOptions::new(400, 300).start_offset().unwrap(), None);

    let bad = PlayerOptions::new(400, 300).with_time("soon");
    assert!(matches!(bad.start_offset(), Err(Error::InvalidStartTime(_))));
    // The stored text is untouched
    assert_eq!(bad.time(), Some("soon"));
}

// =============================================================================
// Encoding Tests
// =============================================================================

fn full_options() -> PlayerOptions {
    PlayerOptions::new(854, "100%")
        .with_channel("twitchdev")
        .with_video("123456")
        .with_collection("abcDEF")
        .with_parents(["streamernews.example.com", "embed.example.com"])
        .with_autoplay(false)
        .with_muted(true)
        .with_time("0h5m0s")
}

#[test]
fn test_json_shape() {
    let json = PlayerOptions::new(640, 360).with_channel("twitchdev").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "width": 640,
            "height": 360,
            "channel": "twitchdev",
            "autoplay": true,
            "muted": false
        })
    );
}

#[test]
fn test_json_round_trip() {
    let options = full_options();
    let decoded = PlayerOptions::from_json(&options.to_json().unwrap()).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_json_missing_flags_use_defaults() {
    let options = PlayerOptions::from_json(r#"{"width": "100%", "height": 480, "video": "42"}"#).unwrap();
    assert!(options.autoplay());
    assert!(!options.muted());
    assert_eq!(options.video(), Some("42"));
}

#[test]
fn test_json_missing_dimension() {
    let err = PlayerOptions::from_json(r#"{"height": 480}"#).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_JSON");
}

#[test]
fn test_query_round_trip() {
    let options = full_options();
    let decoded = PlayerOptions::from_query(options.to_query_pairs()).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_fractional_and_negative_dimensions() {
    let options = PlayerOptions::from_json(r#"{"width": 50.5, "height": -1}"#).unwrap();
    assert_eq!(options.width(), &Dimension::Number(50.5));
    assert_eq!(options.height(), &Dimension::Number(-1.0));

    let value: serde_json::Value = serde_json::from_str(&options.to_json().unwrap()).unwrap();
    assert_eq!(value["width"], serde_json::json!(50.5));
    assert_eq!(value["height"].as_f64(), Some(-1.0));
    assert_eq!(PlayerOptions::from_json(&options.to_json().unwrap()).unwrap(), options);

    let decoded = PlayerOptions::from_query(options.to_query_pairs()).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_float_typed_whole_width() {
    let options = PlayerOptions::from_json(r#"{"width": 640.0, "height": 360}"#).unwrap();
    assert_eq!(options.width(), &Dimension::Number(640.0));
    assert_eq!(options.height(), &Dimension::Pixels(360));
    assert_eq!(PlayerOptions::from_json(&options.to_json().unwrap()).unwrap(), options);
}

#[test]
fn test_query_keeps_non_canonical_text() {
    let options = PlayerOptions::new("0360", "50vh");
    let decoded = PlayerOptions::from_query(options.to_query_pairs()).unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_empty_parent_list_is_no_list() {
    let options = PlayerOptions::new(400, 300).with_parents(Vec::<String>::new());
    assert_eq!(options.parent(), None);
    assert_eq!(PlayerOptions::from_query(options.to_query_pairs()).unwrap(), options);

    let from_json = PlayerOptions::from_json(r#"{"width": 400, "height": 300, "parent": []}"#).unwrap();
    assert_eq!(from_json.parent(), None);
    assert_eq!(from_json, options);
}

#[test]
fn test_embed_url() {
    let url = full_options().to_embed_url().unwrap();
    assert_eq!(url.host_str(), Some("player.twitch.tv"));

    let parents: Vec<_> = url
        .query_pairs()
        .filter(|(k, _)| k == "parent")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(parents, ["streamernews.example.com", "embed.example.com"]);
    assert!(url.query_pairs().all(|(k, _)| k != "width" && k != "height"));
}

#[test]
fn test_embed_url_round_trip() {
    let options = full_options();
    let url = options.to_embed_url().unwrap();
    let decoded = PlayerOptions::from_embed_url(url.as_str(), 854, "100%").unwrap();
    assert_eq!(decoded, options);
}

#[test]
fn test_query_errors() {
    let missing = PlayerOptions::from_query([("height", "300")]).unwrap_err();
    assert!(matches!(missing, Error::MissingParameter("width")));

    let bad_flag =
        PlayerOptions::from_query([("width", "400"), ("height", "300"), ("muted", "yes")])
            .unwrap_err();
    assert_eq!(bad_flag.error_code(), "INVALID_PARAMETER");

    let ignored =
        PlayerOptions::from_query([("width", "400"), ("height", "300"), ("quality", "chunked")])
            .unwrap();
    assert_eq!(ignored, PlayerOptions::recommended_minimum());
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_statistics_round_trip() {
    let json = r#"{
        "backendVersion": "mediaplayer-1.0",
        "bufferSize": 1.5,
        "codecs": "avc1.4D401F,mp4a.40.2",
        "displayResolution": "640x360",
        "fps": 30,
        "hlsLatencyBroadcaster": 6,
        "latencyMode": "normal",
        "playbackRate": 2500.5,
        "skippedFrames": 3,
        "videoResolution": "852x480"
    }"#;
    let stats = PlaybackStatistics::from_json(json).unwrap();
    assert_eq!(stats.codecs(), "avc1.4D401F,mp4a.40.2");
    assert_eq!(stats.playback_rate(), 2500.5);
    assert_eq!(stats.hls_latency_broadcaster(), 6.0);
    assert_eq!(stats.parsed_video_resolution().unwrap().quality_name(), "480p");

    let encoded = stats.to_json().unwrap();
    assert!(encoded.contains("\"hlsLatencyBroadcaster\""));
    assert_eq!(PlaybackStatistics::from_json(&encoded).unwrap(), stats);
}
