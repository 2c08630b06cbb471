//! Home page generation

use maud::{Markup, html};

use crate::catalog::Article;
use crate::components::article_card::featured_card;
use crate::components::categories::category_grid;
use crate::components::hero::hero_section;
use crate::components::layout::{LayoutData, page_wrapper};
use crate::session::Session;

/// Data container for home page generation.
pub struct HomePageData<'a> {
    pub site_name: &'a str,
    pub featured: &'a [Article],
    pub session: &'a Session,
}

/// Generates the home page
///
/// Hero section, featured article grid, and the topic category grid, in
/// the site's standard chrome. Lives at the site root (depth 0).
///
/// # Arguments
///
/// * `data`: Home page data container
///
/// # Returns
///
/// Complete HTML markup for the home page
pub fn generate(data: HomePageData<'_>) -> Markup {
    let layout = LayoutData {
        title: "Home",
        site_name: data.site_name,
        stylesheets: &["home.css"],
        depth: 0,
        session: data.session,
    };
    let prefix = layout.root_prefix();

    page_wrapper(
        &layout,
        html! {
            (hero_section(&prefix))

            section class="featured" {
                div class="section-heading" {
                    h2 { "Featured Articles" }
                    p { "Handpicked stories from our experts" }
                }
                div class="featured-grid" {
                    @for article in data.featured {
                        (featured_card(article, &prefix))
                    }
                }
            }

            (category_grid())
        },
    )
}
