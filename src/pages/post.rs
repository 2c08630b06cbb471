//! Article page generation
//!
//! Renders a single article with its parsed block sequence, plus the
//! explicit "article not found" view used as the fallback for slugs the
//! catalog cannot resolve. A lookup miss is an expected outcome and never
//! reaches the content renderer.

use maud::{Markup, html};

use crate::catalog::Article;
use crate::components::layout::{LayoutData, page_wrapper};
use crate::markdown::{article_body, parse_blocks};
use crate::session::Session;

/// Data container for article page generation.
pub struct PostPageData<'a> {
    pub site_name: &'a str,
    pub article: &'a Article,
    pub session: &'a Session,
}

/// Generates a single article page
///
/// Back link, article header (category badge, date, read time, title,
/// author), cover image, the rendered block sequence, and the byline
/// footer. Lives at `blog/<slug>.html` (depth 1).
///
/// # Arguments
///
/// * `data`: Article page data container
///
/// # Returns
///
/// Complete HTML markup for the article page
pub fn generate(data: PostPageData<'_>) -> Markup {
    let layout = LayoutData {
        title: data.article.title(),
        site_name: data.site_name,
        stylesheets: &["post.css"],
        depth: 1,
        session: data.session,
    };
    let prefix = layout.root_prefix();
    let blocks = parse_blocks(data.article.content());

    page_wrapper(
        &layout,
        html! {
            article class="post" {
                (back_link(&prefix))

                header class="post-header" {
                    div class="card-meta" {
                        span class="category-badge" { (data.article.category()) }
                        span class="meta-date" {
                            i class="ph ph-calendar" {}
                            " " (data.article.date())
                        }
                        span class="meta-read-time" { (data.article.read_time()) }
                    }
                    h1 class="post-title" { (data.article.title()) }
                    div class="meta-author" {
                        i class="ph ph-user" {}
                        " " (data.article.author())
                    }
                }

                div class="post-cover" {
                    img src=(format!("{}{}", prefix, data.article.image()))
                        alt=(data.article.title());
                }

                (article_body(&blocks))

                footer class="post-footer" {
                    div class="byline" {
                        p class="byline-label" { "Written by" }
                        p class="byline-name" { (data.article.author()) }
                    }
                    button type="button" class="share-button" data-action="share" {
                        "Share Article"
                    }
                }
            }
        },
    )
}

/// Data container for the not-found page.
pub struct NotFoundPageData<'a> {
    pub site_name: &'a str,
    pub session: &'a Session,
}

/// Generates the "article not found" page
///
/// The explicit view for slugs with no catalog entry. Informational, not
/// an error page: back link plus a short explanation, with no article
/// content and no renderer invocation.
///
/// # Arguments
///
/// * `data`: Not-found page data container
///
/// # Returns
///
/// Complete HTML markup for the not-found view
pub fn not_found(data: NotFoundPageData<'_>) -> Markup {
    let layout = LayoutData {
        title: "Article not found",
        site_name: data.site_name,
        stylesheets: &["post.css"],
        depth: 1,
        session: data.session,
    };
    let prefix = layout.root_prefix();

    page_wrapper(
        &layout,
        html! {
            div class="post post-missing" {
                (back_link(&prefix))
                div class="missing-notice" {
                    h1 { "Article not found" }
                    p { "This article might have been moved or deleted." }
                }
            }
        },
    )
}

/// Back link to the blog index.
fn back_link(prefix: &str) -> Markup {
    html! {
        a href=(format!("{}blog/index.html", prefix)) class="back-link" {
            i class="ph ph-arrow-left" {}
            " Back to Blog"
        }
    }
}
