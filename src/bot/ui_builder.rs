//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::catalog::{ProductDetail, ProductSummary};

pub const MENU_PROMPT: &str = "Please choose:";
pub const ADD_TO_CART_LABEL: &str = "Add to cart";
pub const BACK_LABEL: &str = "Back";
pub const BACK_CALLBACK: &str = "back";
pub const ADD_TO_CART_PREFIX: &str = "add_to_cart:";

/// Telegram rejects photo captions longer than this many characters
pub const MAX_CAPTION_CHARS: usize = 1024;

/// Create the catalog menu: one product per row, payload is the product id
pub fn create_catalog_keyboard(products: &[ProductSummary]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = products
        .iter()
        .map(|product| {
            vec![InlineKeyboardButton::callback(
                product.title.clone(),
                product.id.to_string(),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

/// Create the buttons shown under a product photo
pub fn create_product_keyboard(product_id: u64) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(
            ADD_TO_CART_LABEL,
            format!("{ADD_TO_CART_PREFIX}{product_id}"),
        ),
        InlineKeyboardButton::callback(BACK_LABEL, BACK_CALLBACK),
    ]])
}

/// Format the photo caption for a product
pub fn format_product_caption(product: &ProductDetail) -> String {
    let description = product.description.trim();
    if description.chars().count() <= MAX_CAPTION_CHARS {
        return description.to_string();
    }

    let mut caption: String = description.chars().take(MAX_CAPTION_CHARS - 1).collect();
    caption.push('…');
    caption
}
