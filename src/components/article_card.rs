//! Article card and list row components

use maud::{Markup, html};

use crate::catalog::Article;

/// Renders a featured article card for the home page grid
///
/// Shows cover image, category badge, date, title, excerpt, and author.
/// The whole card is one link to the article page.
///
/// # Arguments
///
/// * `article`: Article to present
/// * `prefix`: Relative prefix back to the site root
///
/// # Returns
///
/// Featured card markup
pub fn featured_card(article: &Article, prefix: &str) -> Markup {
    html! {
        a href=(format!("{}{}", prefix, article.href())) class="featured-card" {
            div class="card-image" {
                img src=(format!("{}{}", prefix, article.image())) alt=(article.title());
            }
            div class="card-body" {
                div class="card-meta" {
                    span class="category-badge" { (article.category()) }
                    span class="meta-date" {
                        i class="ph ph-calendar" {}
                        " " (article.date())
                    }
                }
                h3 class="card-title" { (article.title()) }
                p class="card-excerpt" { (article.excerpt()) }
                div class="card-footer" {
                    span class="meta-author" {
                        i class="ph ph-user" {}
                        " " (article.author())
                    }
                    i class="ph ph-arrow-right card-arrow" {}
                }
            }
        }
    }
}

/// Renders an article row for the blog index
///
/// # Arguments
///
/// * `article`: Article to present
/// * `prefix`: Relative prefix back to the site root
///
/// # Returns
///
/// Index row markup
pub fn index_row(article: &Article, prefix: &str) -> Markup {
    html! {
        a href=(format!("{}{}", prefix, article.href())) class="article-row" {
            article {
                div class="card-meta" {
                    span class="category-badge" { (article.category()) }
                    span class="meta-date" {
                        i class="ph ph-calendar" {}
                        " " (article.date())
                    }
                }
                h2 class="row-title" { (article.title()) }
                p class="row-excerpt" { (article.excerpt()) }
                span class="meta-author" {
                    i class="ph ph-user" {}
                    " " (article.author())
                }
            }
        }
    }
}
