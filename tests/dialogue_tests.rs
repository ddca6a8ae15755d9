use anyhow::Result;

use catalog_bot::bot_errors::BotError;
use catalog_bot::dialogue::State;

/// Stored tags must stay stable across releases
#[test]
fn test_state_tags() {
    assert_eq!(State::Start.as_tag(), "START");
    assert_eq!(State::Echo.as_tag(), "ECHO");
    assert_eq!(State::HandleMenu.as_tag(), "HANDLE_MENU");
    assert_eq!(State::HandleDescription.as_tag(), "HANDLE_DESCRIPTION");
    assert_eq!(State::HandleMenu.to_string(), "HANDLE_MENU");
}

/// Test that serde uses the same tags as the session store
#[test]
fn test_state_serialization() -> Result<()> {
    let json = serde_json::to_string(&State::HandleDescription)?;
    assert_eq!(json, "\"HANDLE_DESCRIPTION\"");

    let state: State = serde_json::from_str("\"HANDLE_MENU\"")?;
    assert_eq!(state, State::HandleMenu);

    assert!(serde_json::from_str::<State>("\"CHECKOUT\"").is_err());
    Ok(())
}

#[test]
fn test_default_state_is_start() {
    assert_eq!(State::default(), State::Start);
}

#[test]
fn test_parse_unknown_tag() {
    assert_eq!(
        "".parse::<State>(),
        Err(BotError::UnknownState(String::new()))
    );
}
