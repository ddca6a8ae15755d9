//! # Catalog Telegram Bot
//!
//! A Telegram bot that lets users browse a product catalog served by a
//! Strapi CMS, with per-chat conversation state kept in a session store.

pub mod bot;
pub mod bot_errors;
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod session;
