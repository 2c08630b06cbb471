//! Home page hero section component

use maud::{Markup, html};

/// Renders the home page hero section
///
/// # Arguments
///
/// * `prefix`: Relative prefix back to the site root
///
/// # Returns
///
/// Hero section markup with headline and calls to action
pub fn hero_section(prefix: &str) -> Markup {
    html! {
        section class="hero" {
            div class="hero-inner" {
                span class="hero-badge" {
                    a href="https://crazyibookk.vercel.app" { "Operated by Bookk" }
                }

                h1 class="hero-title" {
                    "Insights & Innovation"
                    span class="hero-title-accent" { "in Tech" }
                }

                p class="hero-tagline" {
                    "This page was created to update the latest trends in technology \
                     for those who are passionate about technology as well as those \
                     who are passionate about programming."
                }

                div class="hero-actions" {
                    a href=(format!("{}blog/index.html", prefix)) class="hero-cta" {
                        "Explore Articles"
                    }
                    button type="button" class="hero-secondary" { "Subscribe" }
                }
            }
        }
    }
}
