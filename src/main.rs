use anyhow::{Context, Result};
use std::fs;
use techbybookk::{
    BlogPageData, Catalog, Config, FixedIdentity, HomePageData, IdentityProvider,
    NotFoundPageData, PostPageData, pages, write_css_assets,
};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site_name = config.site_name();
    let catalog = Catalog::seeded();

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let blog_dir = config.output.join("blog");
    fs::create_dir_all(&blog_dir).context("Failed to create blog directory")?;

    // Static output has no live auth handshake, so pages render the
    // signed-out presentation by default.
    let session = FixedIdentity::signed_out().current();

    let home_html = pages::home::generate(HomePageData {
        site_name,
        featured: catalog.featured(),
        session: &session,
    });

    let index_path = config.output.join("index.html");
    fs::write(&index_path, home_html.into_string())
        .with_context(|| format!("Failed to write home page to {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    let blog_html = pages::blog::generate(BlogPageData {
        site_name,
        articles: catalog.all(),
        session: &session,
    });

    let blog_index_path = blog_dir.join("index.html");
    fs::write(&blog_index_path, blog_html.into_string()).with_context(|| {
        format!(
            "Failed to write blog index to {}",
            blog_index_path.display()
        )
    })?;

    println!(
        "Generated: {} ({} articles)",
        blog_index_path.display(),
        catalog.all().len()
    );

    let mut article_count = 0;
    for article in catalog.all() {
        let post_html = pages::post::generate(PostPageData {
            site_name,
            article,
            session: &session,
        });

        let post_path = blog_dir.join(format!("{}.html", article.slug()));
        fs::write(&post_path, post_html.into_string())
            .with_context(|| format!("Failed to write article page {}", post_path.display()))?;

        article_count += 1;
    }

    println!("Generated {} article pages", article_count);

    let not_found_html = pages::post::not_found(NotFoundPageData {
        site_name,
        session: &session,
    });

    let not_found_path = blog_dir.join("not-found.html");
    fs::write(&not_found_path, not_found_html.into_string()).with_context(|| {
        format!(
            "Failed to write not-found page to {}",
            not_found_path.display()
        )
    })?;

    println!("Generated: {}", not_found_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open {}: {:#}", index_path.display(), e);
    }

    Ok(())
}
