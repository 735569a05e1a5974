//! Integration tests for delibot-config crate.

use delibot_common::test_utils::{config_fixtures, property_testing, write_temp_file};
use delibot_common::{ChannelId, GuildId};
use delibot_config::{load_config, ConfigErrorKind, ConfigLoader, DEFAULT_PREFIX};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_minimal_config_file() {
    let file = write_temp_file(config_fixtures::minimal_config_json());
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.token, "abc");
    assert_eq!(config.prefix, "!");
    assert!(config.allowed_channels.is_empty());
}

#[test]
fn test_full_config_file() {
    let file = write_temp_file(config_fixtures::full_config_json());
    let config = ConfigLoader::new(file.path()).load().unwrap();

    assert_eq!(config.token, "test_token_full");
    assert_eq!(config.prefix, "?");
    assert_eq!(config.guild_id, Some(GuildId(111_222_333_444_555_666)));
    assert_eq!(
        config.allowed_channels,
        HashSet::from([ChannelId(5), ChannelId(7), ChannelId(9)])
    );
}

#[test]
fn test_string_and_integer_channels() {
    let file = write_temp_file(r#"{"token": "abc", "allowed_channels": ["5", 7]}"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.allowed_channels,
        HashSet::from([ChannelId(5), ChannelId(7)])
    );
}

#[test]
fn test_empty_object_is_missing_token() {
    let file = write_temp_file("{}");
    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.kind(), ConfigErrorKind::MissingField);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_temp_file("token = abc");
    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.kind(), ConfigErrorKind::Parse);
}

#[test]
fn test_error_messages_name_the_problem() {
    let file = write_temp_file(r#"{"token": "abc", "allowed_channels": ["x1"]}"#);
    let err = load_config(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("allowed_channels"), "{message}");
    assert!(message.contains("x1"), "{message}");
}

proptest! {
    #[test]
    fn test_token_round_trips(token in property_testing::token_strategy()) {
        let doc = serde_json::json!({ "token": token }).to_string();
        let file = write_temp_file(&doc);
        let config = load_config(file.path()).unwrap();

        prop_assert_eq!(config.token, token);
        prop_assert_eq!(config.prefix, DEFAULT_PREFIX);
        prop_assert!(config.allowed_channels.is_empty());
    }

    #[test]
    fn test_channels_accept_both_encodings(
        ids in proptest::collection::vec(property_testing::channel_id_strategy(), 0..8),
        as_text in any::<bool>(),
    ) {
        let encoded: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| if as_text { id.to_string().into() } else { id.0.into() })
            .collect();
        let doc = serde_json::json!({ "token": "abc", "allowed_channels": encoded }).to_string();
        let file = write_temp_file(&doc);
        let config = load_config(file.path()).unwrap();

        let expected: HashSet<ChannelId> = ids.into_iter().collect();
        prop_assert_eq!(config.allowed_channels, expected);
    }
}
