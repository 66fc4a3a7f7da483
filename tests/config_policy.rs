use egui::{Color32, vec2};
use shape_playground::geometry::{aabb_circle, aabb_normalization, point_aabb};
use shape_playground::{PlaygroundConfig, PlaygroundError};

// The only test in this binary that touches the global AABB policy.
#[test]
fn test_aabb_normalization_follows_config() {
    let reversed_aa = vec2(1.0, 1.0);
    let reversed_bb = vec2(-1.0, -1.0);
    assert!(aabb_normalization());
    assert!(point_aabb(vec2(0.0, 0.0), reversed_aa, reversed_bb).is_some());

    let strict = PlaygroundConfig {
        normalize_aabb: false,
        ..PlaygroundConfig::default()
    };
    strict.apply();
    assert!(!aabb_normalization());
    assert!(point_aabb(vec2(0.0, 0.0), reversed_aa, reversed_bb).is_none());
    // Well-ordered corners are unaffected
    assert!(point_aabb(vec2(0.0, 0.0), reversed_bb, reversed_aa).is_some());
    assert!(aabb_circle(reversed_bb, reversed_aa, vec2(1.0, 0.0), 0.5).is_some());

    PlaygroundConfig::default().apply();
    assert!(aabb_normalization());
    assert!(point_aabb(vec2(0.0, 0.0), reversed_aa, reversed_bb).is_some());
}

#[test]
fn test_partial_json_uses_defaults() {
    let config = PlaygroundConfig::from_json(r#"{ "scale": 2.5 }"#).unwrap();
    assert_eq!(config.scale, 2.5);
    assert!(config.normalize_aabb);
    assert_eq!(config.background, Color32::WHITE);
    assert_eq!(config.intersection_color, Color32::from_rgb(0, 127, 0));
}

#[test]
fn test_config_survives_json() {
    let config = PlaygroundConfig {
        scale: 3.0,
        normalize_aabb: false,
        background: Color32::BLACK,
        intersection_color: Color32::RED,
    };
    let json = config.to_json().unwrap();
    assert_eq!(PlaygroundConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_json_is_a_config_error() {
    let err = PlaygroundConfig::from_json("{ scale: }").unwrap_err();
    assert!(matches!(err, PlaygroundError::Config(_)));
    assert!(err.to_string().starts_with("invalid playground config"));
}
