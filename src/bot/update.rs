//! Incoming updates reduced to what the state handlers need

use teloxide::types::{CallbackQuery, Message};

/// Command that resets a chat to the catalog menu
pub const RESET_COMMAND: &str = "/start";

/// A single user action addressed to the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotUpdate {
    /// Plain text message
    Text {
        chat_id: i64,
        message_id: i32,
        text: String,
    },
    /// Inline keyboard button press
    Callback {
        chat_id: i64,
        callback_id: String,
        /// Message carrying the pressed keyboard, if still accessible
        message_id: Option<i32>,
        data: String,
    },
}

impl BotUpdate {
    /// Build from a Telegram message; only text messages are handled
    pub fn from_message(msg: &Message) -> Option<Self> {
        msg.text().map(|text| BotUpdate::Text {
            chat_id: msg.chat.id.0,
            message_id: msg.id.0,
            text: text.to_string(),
        })
    }

    /// Build from a callback query attached to a chat message
    pub fn from_callback_query(q: &CallbackQuery) -> Option<Self> {
        let msg = q.message.as_ref()?;
        Some(BotUpdate::Callback {
            chat_id: msg.chat().id.0,
            callback_id: q.id.0.clone(),
            message_id: Some(msg.id().0),
            data: q.data.clone().unwrap_or_default(),
        })
    }

    pub fn chat_id(&self) -> i64 {
        match self {
            BotUpdate::Text { chat_id, .. } | BotUpdate::Callback { chat_id, .. } => *chat_id,
        }
    }

    /// Message text or callback payload
    pub fn text_or_data(&self) -> &str {
        match self {
            BotUpdate::Text { text, .. } => text,
            BotUpdate::Callback { data, .. } => data,
        }
    }

    /// True for `/start`, `/start@BotName` and `/start <payload>`
    pub fn is_reset_command(&self) -> bool {
        let BotUpdate::Text { text, .. } = self else {
            return false;
        };
        let Some(command) = text.split_whitespace().next() else {
            return false;
        };
        let name = command.split_once('@').map_or(command, |(name, _)| name);
        name == RESET_COMMAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_command_detection() {
        let start = BotUpdate::Text {
            chat_id: 1,
            message_id: 10,
            text: "/start".to_string(),
        };
        assert!(start.is_reset_command());

        let other = BotUpdate::Text {
            chat_id: 1,
            message_id: 11,
            text: "hello".to_string(),
        };
        assert!(!other.is_reset_command());

        for form in ["/start@FishShopBot", "/start promo", "  /start  "] {
            let update = BotUpdate::Text {
                chat_id: 1,
                message_id: 12,
                text: form.to_string(),
            };
            assert!(update.is_reset_command(), "{form:?} should reset");
        }

        for form in ["/starts", "start", "", "/help /start"] {
            let update = BotUpdate::Text {
                chat_id: 1,
                message_id: 13,
                text: form.to_string(),
            };
            assert!(!update.is_reset_command(), "{form:?} should not reset");
        }

        // Button payloads never reset the conversation
        let callback = BotUpdate::Callback {
            chat_id: 1,
            callback_id: "cb".to_string(),
            message_id: Some(10),
            data: "/start".to_string(),
        };
        assert!(!callback.is_reset_command());
    }

    #[test]
    fn test_accessors() {
        let callback = BotUpdate::Callback {
            chat_id: 42,
            callback_id: "cb".to_string(),
            message_id: None,
            data: "1".to_string(),
        };
        assert_eq!(callback.chat_id(), 42);
        assert_eq!(callback.text_or_data(), "1");
    }
}
