//! Blog index page generation

use maud::{Markup, html};

use crate::catalog::Article;
use crate::components::article_card::index_row;
use crate::components::layout::{LayoutData, page_wrapper};
use crate::session::Session;

/// Data container for blog index generation.
pub struct BlogPageData<'a> {
    pub site_name: &'a str,
    pub articles: &'a [Article],
    pub session: &'a Session,
}

/// Generates the blog index page
///
/// Lists every catalog article as a linked row, newest first (catalog
/// order). Lives at `blog/index.html` (depth 1).
///
/// # Arguments
///
/// * `data`: Blog index data container
///
/// # Returns
///
/// Complete HTML markup for the blog index
pub fn generate(data: BlogPageData<'_>) -> Markup {
    let layout = LayoutData {
        title: "Latest Articles",
        site_name: data.site_name,
        stylesheets: &["blog.css"],
        depth: 1,
        session: data.session,
    };
    let prefix = layout.root_prefix();

    page_wrapper(
        &layout,
        html! {
            section class="blog-index" {
                div class="section-heading" {
                    h1 { "Latest Articles" }
                    p { "Discover the latest insights in technology" }
                }
                div class="article-list" {
                    @for article in data.articles {
                        (index_row(article, &prefix))
                    }
                }
            }
        },
    )
}
