//! Static site generator for the TechByBookk blog.

mod assets;
pub mod avatar;
mod catalog;
pub mod components;
mod config;
mod markdown;
pub mod pages;
mod session;

pub use assets::write_css_assets;
pub use avatar::render;
pub use catalog::{Article, Catalog};
pub use config::Config;
pub use markdown::{Block, article_body, parse_blocks};
pub use pages::blog::BlogPageData;
pub use pages::home::HomePageData;
pub use pages::post::{NotFoundPageData, PostPageData};
pub use session::{FixedIdentity, IdentityProvider, Session, UserProfile};
