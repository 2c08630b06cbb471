//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the home,
//! blog index, and article page generators. Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across page modules.

pub mod article_card;
pub mod categories;
pub mod footer;
pub mod header;
pub mod hero;
pub mod layout;
pub mod login_modal;
