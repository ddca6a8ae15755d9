//! Conversation state for catalog browsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bot_errors::BotError;

/// The state that decides which handler processes a chat's next update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    #[default]
    #[serde(rename = "START")]
    Start,
    #[serde(rename = "ECHO")]
    Echo,
    #[serde(rename = "HANDLE_MENU")]
    HandleMenu,
    #[serde(rename = "HANDLE_DESCRIPTION")]
    HandleDescription,
}

impl State {
    /// Tag persisted in the session store
    pub fn as_tag(&self) -> &'static str {
        match self {
            State::Start => "START",
            State::Echo => "ECHO",
            State::HandleMenu => "HANDLE_MENU",
            State::HandleDescription => "HANDLE_DESCRIPTION",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for State {
    type Err = BotError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "START" => Ok(State::Start),
            "ECHO" => Ok(State::Echo),
            "HANDLE_MENU" => Ok(State::HandleMenu),
            "HANDLE_DESCRIPTION" => Ok(State::HandleDescription),
            other => Err(BotError::UnknownState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parsing() {
        for state in [
            State::Start,
            State::Echo,
            State::HandleMenu,
            State::HandleDescription,
        ] {
            assert_eq!(state.as_tag().parse::<State>().unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = "handle_menu".parse::<State>().unwrap_err();
        assert_eq!(err, BotError::UnknownState("handle_menu".to_string()));
    }
}
