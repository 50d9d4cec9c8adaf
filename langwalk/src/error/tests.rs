//! Unit tests for error construction and rendering.

use rstest::rstest;
use std::error::Error as _;
use unic_langid::langid;

use super::{ConfigError, LocalizeError, TagError};

#[rstest]
fn missing_message_names_id_and_locale() {
    let err = LocalizeError::missing("翻译1", langid!("en"));
    assert_eq!(err.to_string(), "message '翻译1' not found for locale en");
}

#[rstest]
fn backend_error_keeps_source() {
    let err = LocalizeError::backend(std::io::Error::other("offline"));
    let source = err.source().expect("backend error should expose its source");
    assert_eq!(source.to_string(), "offline");
}

#[rstest]
fn backend_error_is_cloneable() {
    let err = LocalizeError::backend(std::io::Error::other("offline"));
    let copy = err.clone();
    assert_eq!(copy.to_string(), err.to_string());
}

#[rstest]
#[case::block(TagError::Block, true)]
#[case::invalid(TagError::invalid_mode("mod=word"), false)]
fn is_block_only_matches_marker(#[case] err: TagError, #[case] expected: bool) {
    assert_eq!(err.is_block(), expected);
}

#[rstest]
fn invalid_mode_renders_annotation() {
    let err = TagError::invalid_mode("mod=word");
    assert!(err.to_string().contains("mod=word"));
}

#[rstest]
fn figment_errors_convert_to_gathering() {
    let err: ConfigError = figment::Error::from(String::from("boom")).into();
    assert!(matches!(err, ConfigError::Gathering(_)));
}
