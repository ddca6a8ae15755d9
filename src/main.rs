use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_bot::bot::{BotUpdate, StateDispatcher, TelegramMessenger};
use catalog_bot::catalog::StrapiClient;
use catalog_bot::config::BotConfig;
use catalog_bot::session::{InMemorySessionStore, RedisSessionStore, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Catalog Telegram Bot");

    let config = BotConfig::from_env()?;

    let store: Arc<dyn SessionStore> = match config.session.redis_url() {
        Some(url) => Arc::new(
            RedisSessionStore::connect(&url)
                .await
                .context("Failed to connect to the Redis session store")?,
        ),
        None => {
            info!("REDIS_HOST not set, keeping sessions in memory");
            Arc::new(InMemorySessionStore::new())
        }
    };

    info!(strapi_host = %config.strapi.host, "Using Strapi catalog");
    let catalog = Arc::new(StrapiClient::new(config.strapi.clone()));

    let bot = Bot::new(config.telegram_token.clone());
    let messenger = Arc::new(TelegramMessenger::new(bot.clone()));

    let state_dispatcher = Arc::new(StateDispatcher::new(store, catalog, messenger));

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(
            Update::filter_message().endpoint(|msg: Message, sd: Arc<StateDispatcher>| async move {
                if let Some(update) = BotUpdate::from_message(&msg) {
                    sd.dispatch(&update).await;
                }
                Ok::<(), anyhow::Error>(())
            }),
        )
        .branch(Update::filter_callback_query().endpoint(
            |q: CallbackQuery, sd: Arc<StateDispatcher>| async move {
                if let Some(update) = BotUpdate::from_callback_query(&q) {
                    sd.dispatch(&update).await;
                }
                Ok::<(), anyhow::Error>(())
            },
        ));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state_dispatcher])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
