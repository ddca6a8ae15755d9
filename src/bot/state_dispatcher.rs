//! State Dispatcher: routes each update to the handler of the chat's state
//! and persists the state the handler returns.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::bot_errors::BotError;
use crate::catalog::Catalog;
use crate::dialogue::State;
use crate::session::SessionStore;

use super::handlers::{self, HandlerContext};
use super::messenger::Messenger;
use super::update::BotUpdate;

/// Routes updates to state handlers and records each chat's next state
pub struct StateDispatcher {
    store: Arc<dyn SessionStore>,
    catalog: Arc<dyn Catalog>,
    messenger: Arc<dyn Messenger>,
}

impl StateDispatcher {
    pub fn new(
        store: Arc<dyn SessionStore>,
        catalog: Arc<dyn Catalog>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            store,
            catalog,
            messenger,
        }
    }

    /// State the update should be handled in.
    ///
    /// The reset command always resolves to [`State::Start`] without reading
    /// the store; a chat with no stored state also starts there.
    pub async fn resolve_state(&self, update: &BotUpdate) -> Result<State, BotError> {
        if update.is_reset_command() {
            return Ok(State::Start);
        }
        Ok(self
            .store
            .get_state(update.chat_id())
            .await?
            .unwrap_or_default())
    }

    async fn run_handler(&self, state: State, update: &BotUpdate) -> Result<State, BotError> {
        let ctx = HandlerContext {
            catalog: self.catalog.as_ref(),
            messenger: self.messenger.as_ref(),
        };

        match state {
            State::Start => handlers::start(&ctx, update).await,
            State::Echo => handlers::echo(&ctx, update).await,
            State::HandleMenu => handlers::handle_menu(&ctx, update).await,
            State::HandleDescription => handlers::handle_description(&ctx, update).await,
        }
    }

    /// Handle one update and persist the resulting state.
    ///
    /// On error nothing is written, so the chat stays in its previous state.
    pub async fn try_dispatch(&self, update: &BotUpdate) -> Result<State, BotError> {
        let chat_id = update.chat_id();

        if let BotUpdate::Callback { callback_id, .. } = update {
            if let Err(e) = self.messenger.answer_callback(callback_id).await {
                warn!(chat_id = %chat_id, error = %e, "Failed to answer callback query");
            }
        }

        let state = self.resolve_state(update).await?;
        debug!(chat_id = %chat_id, state = %state, "Dispatching update");

        let next_state = self.run_handler(state, update).await?;
        self.store.set_state(chat_id, next_state).await?;

        info!(chat_id = %chat_id, from = %state, to = %next_state, "State transition");
        Ok(next_state)
    }

    /// Handle one update, logging and swallowing any failure
    pub async fn dispatch(&self, update: &BotUpdate) -> Option<State> {
        match self.try_dispatch(update).await {
            Ok(state) => Some(state),
            Err(e) => {
                error!(chat_id = %update.chat_id(), error = %e, "Failed to handle update");
                None
            }
        }
    }
}
