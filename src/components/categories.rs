//! Topic category grid component

use maud::{Markup, html};

/// One browsable topic tile.
///
/// Curated, component-local data: the grid is editorial navigation, not a
/// view over the article catalog.
struct Category {
    name: &'static str,
    count: usize,
    swatch: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { name: "Artificial Intelligence", count: 24, swatch: "swatch-cyan" },
    Category { name: "Web Development", count: 18, swatch: "swatch-blue" },
    Category { name: "Cybersecurity", count: 15, swatch: "swatch-purple" },
    Category { name: "Cloud Computing", count: 12, swatch: "swatch-pink" },
    Category { name: "DevOps", count: 9, swatch: "swatch-red" },
    Category { name: "Mobile Dev", count: 14, swatch: "swatch-orange" },
];

/// Renders the "Explore Topics" category grid
///
/// # Returns
///
/// Category section markup with one tile per topic
pub fn category_grid() -> Markup {
    html! {
        section id="categories" class="categories" {
            div class="section-heading" {
                h2 { "Explore Topics" }
                p { "Browse our curated collection by category" }
            }
            div class="category-grid" {
                @for category in CATEGORIES {
                    div class="category-tile" {
                        div class=(format!("category-swatch {}", category.swatch)) {}
                        h3 class="category-name" { (category.name) }
                        p class="category-count" { (category.count) " articles" }
                    }
                }
            }
        }
    }
}
