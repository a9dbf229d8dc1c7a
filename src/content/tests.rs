//! Content domain: tests for gameplay config parsing.

use super::{GameplayConfig, parse_single};

#[test]
fn test_parse_full_gameplay_config() {
    let source = r#"
        (
            schema_version: 1,
            dash_pierce: (
                dash_distance: 8.0,
                dash_duration: 0.25,
                mover_lock_time: 0.1,
                opponent_lock_time: 0.3,
            ),
            stage: (
                width: 30.0,
                obstacle_x: 5.0,
                dummy_count: 4,
            ),
        )
    "#;

    let config: GameplayConfig = parse_single(source, "inline").expect("valid config");

    assert_eq!(config.schema_version, 1);
    assert_eq!(config.dash_pierce.dash_distance, 8.0);
    assert_eq!(config.dash_pierce.dash_duration, 0.25);
    assert_eq!(config.dash_pierce.mover_lock_time, 0.1);
    assert_eq!(config.dash_pierce.opponent_lock_time, 0.3);
    // Unlisted fields keep their defaults
    assert_eq!(config.dash_pierce.stop_behind_offset, 0.6);
    assert_eq!(config.dash_pierce.latch_radius, 0.5);

    assert_eq!(config.stage.width, 30.0);
    // IMPLICIT_SOME lets optional fields be written bare
    assert_eq!(config.stage.obstacle_x, Some(5.0));
    assert_eq!(config.stage.dummy_count, 4);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: GameplayConfig = parse_single("()", "inline").expect("empty struct parses");

    assert_eq!(config.dash_pierce.dash_distance, 10.0);
    assert_eq!(config.dash_pierce.dash_duration, 0.3);
    assert_eq!(config.stage.dummy_seed, 7);
}

#[test]
fn test_parse_error_names_origin() {
    let err = parse_single::<GameplayConfig>("(dash_pierce: nope)", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_bundled_gameplay_file_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let config = super::load_gameplay_config(&path).expect("bundled dash_pierce.ron is valid");

    assert!(config.dash_pierce.dash_duration > 0.0);
    assert!(config.stage.width > 0.0);
}
