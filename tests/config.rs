use std::path::PathBuf;

use loot::LootError;
use loot::config::EditorConfig;

fn parse(args: &[&str]) -> Result<EditorConfig, LootError> {
    EditorConfig::from_args(args.iter().map(|s| s.to_string()))
}

#[test]
fn no_arguments_gives_defaults() {
    let config = parse(&[]).unwrap();
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.level_path, PathBuf::from("level.json"));
    assert_eq!(config.fps_limit, 30);
    assert!(!config.debug);
}

#[test]
fn flags_override_defaults() {
    let config = parse(&["--level", "maps/a.json", "--tiles", "t.png", "--hero", "h.png", "--fps", "60", "--debug"])
        .unwrap();
    assert_eq!(config.level_path, PathBuf::from("maps/a.json"));
    assert_eq!(config.tiles_image, "t.png");
    assert_eq!(config.hero_image, PathBuf::from("h.png"));
    assert_eq!(config.fps_limit, 60);
    assert!(config.debug);
}

#[test]
fn debug_raises_log_level() {
    assert!(parse(&["--debug"]).unwrap().log_filter().starts_with("loot=debug"));
    assert!(parse(&[]).unwrap().log_filter().starts_with("loot=info"));
}

#[test]
fn missing_value_is_a_usage_error() {
    let err = parse(&["--level"]).unwrap_err();
    assert!(matches!(err, LootError::Usage(_)));
    assert_eq!(err.to_string(), "--level expects a value");
}

#[test]
fn fps_must_be_positive_integer() {
    assert!(matches!(parse(&["--fps", "0"]), Err(LootError::Usage(_))));
    assert!(matches!(parse(&["--fps", "fast"]), Err(LootError::Usage(_))));
}

#[test]
fn unknown_argument_lists_usage() {
    let err = parse(&["--fullscreen"]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown argument '--fullscreen'"));
    assert!(message.contains("usage: loot"));
}
