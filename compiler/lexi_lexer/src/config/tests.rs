#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn default_config() {
    let config = ScannerConfig::default();
    assert_eq!(config.fold_width(), DEFAULT_FOLD_WIDTH);
    assert_eq!(config.fold_width(), 4);
    assert_eq!(config.spaces(), SpaceMode::Fold);
    assert!(!config.block_comments());
}

#[test]
fn custom_fold_width() {
    let config = ScannerConfig::new(2).unwrap();
    assert_eq!(config.fold_width(), 2);
    assert_eq!(config.spaces(), SpaceMode::Fold);
}

#[test]
fn zero_fold_width_rejected() {
    assert_eq!(ScannerConfig::new(0), Err(ConfigError::ZeroFoldWidth));
    assert_eq!(
        ScannerConfig::default().with_fold_width(0),
        Err(ConfigError::ZeroFoldWidth)
    );
}

#[test]
fn builder_methods_chain() {
    let config = ScannerConfig::default()
        .with_spaces(SpaceMode::Skip)
        .with_block_comments(true);
    assert_eq!(config.spaces(), SpaceMode::Skip);
    assert!(config.block_comments());
    assert_eq!(config.fold_width(), DEFAULT_FOLD_WIDTH);
}

// === SpaceMode parsing ===

#[test]
fn space_mode_round_trips_through_str() {
    for mode in [SpaceMode::Fold, SpaceMode::Whitespace, SpaceMode::Skip] {
        assert_eq!(mode.as_str().parse::<SpaceMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn unknown_space_mode_rejected() {
    let err = "tabs".parse::<SpaceMode>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownSpaceMode("tabs".to_owned()));
    assert_eq!(
        err.to_string(),
        "unknown space mode `tabs` (expected `fold`, `whitespace` or `skip`)"
    );
}

#[test]
fn space_mode_parsing_is_case_sensitive() {
    assert!("Fold".parse::<SpaceMode>().is_err());
}
