//! Tests for error types

use stumped::round::RoundStatus;
use stumped::Error;

#[test]
fn test_data_error() {
    let error = Error::Data("duplicate player name: \"Shane Warne\"".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("invalid player data"));
    assert!(error_str.contains("Shane Warne"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
    let error: Error = json_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("malformed player data"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_empty_store_error() {
    let error = Error::EmptyStore;
    let error_str = format!("{error}");
    assert!(error_str.contains("player store is empty"));
}

#[test]
fn test_empty_input_error() {
    let error = Error::EmptyInput;
    let error_str = format!("{error}");
    assert!(error_str.contains("empty guess"));
}

#[test]
fn test_unknown_player_error() {
    let error = Error::UnknownPlayer("Don Bradman".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("unknown player"));
    assert!(error_str.contains("Don Bradman"));
}

#[test]
fn test_round_over_error() {
    let error = Error::RoundOver(RoundStatus::Lost);
    let error_str = format!("{error}");
    assert!(error_str.contains("round is over"));
    assert!(error_str.contains("Lost"));
}

#[test]
fn test_error_debug() {
    let error = Error::EmptyStore;
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("EmptyStore"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> stumped::Result<u32> {
        Ok(6)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 6);
}
