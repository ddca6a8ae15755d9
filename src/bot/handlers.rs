//! State handlers
//!
//! One handler per [`State`]. Each sends its replies through the
//! [`Messenger`] and returns the state the chat moves to next.

use tracing::{debug, info, warn};

use crate::bot_errors::BotError;
use crate::catalog::Catalog;
use crate::dialogue::State;

use super::messenger::Messenger;
use super::ui_builder::{
    create_catalog_keyboard, create_product_keyboard, format_product_caption, MENU_PROMPT,
};
use super::update::BotUpdate;

/// Collaborators available to every handler
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub messenger: &'a dyn Messenger,
}

/// Send the catalog menu
pub async fn start(ctx: &HandlerContext<'_>, update: &BotUpdate) -> Result<State, BotError> {
    let chat_id = update.chat_id();
    let products = ctx.catalog.list_products().await?;
    debug!(chat_id = chat_id, products = products.len(), "Rendering catalog menu");

    ctx.messenger
        .send_text(chat_id, MENU_PROMPT, Some(create_catalog_keyboard(&products)))
        .await?;

    Ok(State::HandleMenu)
}

/// Show the product picked from the catalog menu
pub async fn handle_menu(ctx: &HandlerContext<'_>, update: &BotUpdate) -> Result<State, BotError> {
    let BotUpdate::Callback {
        chat_id,
        message_id,
        data,
        ..
    } = update
    else {
        return Err(BotError::InvalidSelection(format!(
            "expected a menu button, got text {:?}",
            update.text_or_data()
        )));
    };

    let product_id: u64 = data
        .trim()
        .parse()
        .map_err(|_| BotError::InvalidSelection(data.clone()))?;

    info!(chat_id = %chat_id, product_id = product_id, "User selected product");

    let product = ctx.catalog.get_product_detail(product_id).await?;
    let photo = ctx.catalog.fetch_image_bytes(&product.image_url).await?;

    ctx.messenger
        .send_photo(
            *chat_id,
            photo,
            &format_product_caption(&product),
            Some(create_product_keyboard(product.id)),
        )
        .await?;

    // The photo is already sent; a failed delete does not cancel the transition
    if let Some(menu_message_id) = message_id {
        if let Err(e) = ctx.messenger.delete_message(*chat_id, *menu_message_id).await {
            warn!(chat_id = %chat_id, message_id = *menu_message_id, error = %e, "Failed to delete menu message");
        }
    }

    Ok(State::HandleDescription)
}

/// Reply with the input verbatim
pub async fn echo(ctx: &HandlerContext<'_>, update: &BotUpdate) -> Result<State, BotError> {
    ctx.messenger
        .send_text(update.chat_id(), update.text_or_data(), None)
        .await?;
    Ok(State::Echo)
}

/// Any input on a product card goes back to the catalog menu
pub async fn handle_description(
    ctx: &HandlerContext<'_>,
    update: &BotUpdate,
) -> Result<State, BotError> {
    start(ctx, update).await
}
