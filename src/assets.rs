//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");
const MODAL: &str = include_str!("../assets/components/modal.css");
const CARDS: &str = include_str!("../assets/components/cards.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const BLOG_PAGE: &str = include_str!("../assets/page-blog.css");
const POST_PAGE: &str = include_str!("../assets/page-post.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(
        assets_dir,
        "home.css",
        &[BASE, HEADER, FOOTER, MODAL, CARDS, HOME_PAGE],
    )?;
    write_bundled(
        assets_dir,
        "blog.css",
        &[BASE, HEADER, FOOTER, MODAL, CARDS, BLOG_PAGE],
    )?;
    write_bundled(assets_dir, "post.css", &[BASE, HEADER, FOOTER, MODAL, POST_PAGE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
