//! # Session Store Module
//!
//! Maps a chat id to its current conversation [`State`]. A chat that was
//! never seen has no entry, which callers treat as a new session.

use async_trait::async_trait;
use redis::aio::{ConnectionLike, MultiplexedConnection};
use redis::AsyncCommands;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::bot_errors::BotError;
use crate::dialogue::State;

/// Per-chat state persistence
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current state of the chat, `None` if the chat has no session yet
    async fn get_state(&self, chat_id: i64) -> Result<Option<State>, BotError>;

    async fn set_state(&self, chat_id: i64, state: State) -> Result<(), BotError>;
}

/// Redis-backed session store, keyed by the decimal chat id
#[derive(Clone)]
pub struct RedisSessionStore<C = MultiplexedConnection> {
    conn: C,
}

impl<C> RedisSessionStore<C>
where
    C: ConnectionLike + Clone + Send + Sync + 'static,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

impl RedisSessionStore<MultiplexedConnection> {
    /// Open a connection to `url` and check it with a PING
    pub async fn connect(url: &str) -> Result<Self, BotError> {
        let client = redis::Client::open(url)?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        info!("Connected to Redis session store");
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl<C> SessionStore for RedisSessionStore<C>
where
    C: ConnectionLike + Clone + Send + Sync + 'static,
{
    async fn get_state(&self, chat_id: i64) -> Result<Option<State>, BotError> {
        let mut conn = self.conn.clone();
        let tag: Option<String> = conn.get(chat_id.to_string()).await?;
        debug!(chat_id = chat_id, tag = ?tag, "Loaded session state");
        tag.map(|tag| tag.parse()).transpose()
    }

    async fn set_state(&self, chat_id: i64, state: State) -> Result<(), BotError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(chat_id.to_string(), state.as_tag())
            .await?;
        Ok(())
    }
}

/// Process-local session store
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    states: Mutex<HashMap<i64, State>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chats with a stored state
    pub async fn len(&self) -> usize {
        self.states.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.states.lock().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_state(&self, chat_id: i64) -> Result<Option<State>, BotError> {
        Ok(self.states.lock().await.get(&chat_id).copied())
    }

    async fn set_state(&self, chat_id: i64, state: State) -> Result<(), BotError> {
        self.states.lock().await.insert(chat_id, state);
        Ok(())
    }
}
