//! Messenger module: outbound Telegram operations used by the handlers

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, InputFile, MessageId};
use tracing::debug;

use crate::bot_errors::BotError;

/// Replies a handler can send back to a chat
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError>;

    async fn send_photo(
        &self,
        chat_id: i64,
        photo: Vec<u8>,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError>;

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<(), BotError>;

    async fn answer_callback(&self, callback_id: &str) -> Result<(), BotError>;
}

/// [`Messenger`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: i64,
        photo: Vec<u8>,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), BotError> {
        debug!(chat_id = chat_id, size = photo.len(), "Sending product photo");

        let request = self
            .bot
            .send_photo(ChatId(chat_id), InputFile::memory(photo))
            .caption(caption);
        match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<(), BotError> {
        self.bot
            .delete_message(ChatId(chat_id), MessageId(message_id))
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), BotError> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await?;
        Ok(())
    }
}
