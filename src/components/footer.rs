//! Site footer component

use maud::{Markup, html};

/// Renders the site footer
///
/// Four columns (site blurb, navigation, categories, social links) over a
/// bottom bar with the copyright line. Carries the `contact` anchor that
/// the header's Contact link targets.
///
/// # Arguments
///
/// * `site_name`: Site name for the blurb and copyright line
/// * `prefix`: Relative prefix back to the site root
///
/// # Returns
///
/// Footer markup
pub fn site_footer(site_name: &str, prefix: &str) -> Markup {
    html! {
        footer id="contact" class="site-footer" {
            div class="footer-inner" {
                div class="footer-columns" {
                    div class="footer-column" {
                        h3 { (site_name) }
                        p { "Insights and innovation in technology, delivered daily." }
                    }
                    div class="footer-column" {
                        h4 { "Navigation" }
                        ul {
                            li { a href=(format!("{}index.html", prefix)) { "Home" } }
                            li { a href=(format!("{}blog/index.html", prefix)) { "Blog" } }
                            li { a href=(format!("{}index.html#categories", prefix)) { "Topics" } }
                            li { a href="#contact" { "Contact" } }
                        }
                    }
                    div class="footer-column" {
                        h4 { "Categories" }
                        ul {
                            li { a href=(format!("{}index.html#categories", prefix)) { "AI & ML" } }
                            li { a href=(format!("{}index.html#categories", prefix)) { "Web Dev" } }
                            li { a href=(format!("{}index.html#categories", prefix)) { "Security" } }
                            li { a href=(format!("{}index.html#categories", prefix)) { "DevOps" } }
                        }
                    }
                    div class="footer-column" {
                        h4 { "Connect" }
                        div class="social-links" {
                            a href="https://github.com" aria-label="GitHub" {
                                i class="ph ph-github-logo" {}
                            }
                            a href="https://linkedin.com" aria-label="LinkedIn" {
                                i class="ph ph-linkedin-logo" {}
                            }
                            a href="https://twitter.com" aria-label="Twitter" {
                                i class="ph ph-twitter-logo" {}
                            }
                            a href=(format!("mailto:hello@{}.com", site_name.to_lowercase())) aria-label="Email" {
                                i class="ph ph-envelope" {}
                            }
                        }
                    }
                }
                div class="footer-bottom" {
                    p { "\u{a9} 2025 " (site_name) ". All rights reserved." }
                    div class="footer-legal" {
                        a href="#" { "Privacy Policy" }
                        a href="#" { "Terms of Service" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_columns_and_anchor() {
        // Arrange & Act
        let html = site_footer("TechByBookk", "").into_string();

        // Assert
        assert!(
            html.contains("id=\"contact\""),
            "Footer carries the contact anchor"
        );
        assert!(html.contains("Navigation"), "Navigation column expected");
        assert!(
            html.contains("mailto:hello@techbybookk.com"),
            "Mail link derives from the site name: {}",
            html
        );
        assert!(
            html.contains("2025 TechByBookk. All rights reserved."),
            "Copyright line expected"
        );
    }

    #[test]
    fn test_footer_links_are_prefixed() {
        // Arrange & Act
        let html = site_footer("TechByBookk", "../").into_string();

        // Assert
        assert!(
            html.contains("href=\"../blog/index.html\""),
            "Blog link should be depth-prefixed"
        );
    }
}
