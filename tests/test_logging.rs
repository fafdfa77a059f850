//! Tests for logging configuration and format parsing
//!
//! Logs go to stderr so stdout stays reserved for protocol frames; these
//! tests cover the pure parsing helpers behind that setup.

use safe_mcp::observability::logging::{
    level_for_verbosity, parse_level, parse_spans, LogFormat,
};
use tracing::Level;

#[test]
fn test_log_format_parse_known_values() {
    assert!(matches!(LogFormat::parse("json"), LogFormat::Json));
    assert!(matches!(LogFormat::parse("PRETTY"), LogFormat::Pretty));
    assert!(matches!(LogFormat::parse("Compact"), LogFormat::Compact));
}

#[test]
fn test_log_format_parse_invalid_defaults_to_json() {
    assert!(matches!(LogFormat::parse("invalid"), LogFormat::Json));
    assert!(matches!(LogFormat::parse(""), LogFormat::Json));
    assert!(matches!(LogFormat::parse("xml"), LogFormat::Json));
}

#[test]
fn test_log_format_parse_whitespace() {
    assert!(matches!(LogFormat::parse("  pretty  "), LogFormat::Pretty));
    assert!(matches!(LogFormat::parse("compact\n"), LogFormat::Compact));
    assert!(matches!(LogFormat::parse("\tjson"), LogFormat::Json));
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(parse_level("error"), Level::ERROR);
    assert_eq!(parse_level("WARN"), Level::WARN);
    assert_eq!(parse_level(" debug "), Level::DEBUG);
    assert_eq!(parse_level("trace"), Level::TRACE);
    assert_eq!(parse_level("verbose"), Level::INFO);
    assert_eq!(parse_level(""), Level::INFO);
}

#[test]
fn test_log_spans_parsing_logic() {
    assert!(parse_spans("true"));
    assert!(parse_spans("TRUE"));
    assert!(!parse_spans("false"));
    assert!(!parse_spans("1"));
    assert!(!parse_spans(""));
}

#[test]
fn test_verbosity_flags_raise_level() {
    assert_eq!(level_for_verbosity(0), None);
    assert_eq!(level_for_verbosity(1), Some(Level::DEBUG));
    assert_eq!(level_for_verbosity(2), Some(Level::TRACE));
    assert_eq!(level_for_verbosity(5), Some(Level::TRACE));
}
