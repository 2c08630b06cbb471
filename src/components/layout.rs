//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::site_footer;
use super::header::site_header;
use crate::session::Session;

/// Shared layout inputs for every generated page.
pub struct LayoutData<'a> {
    /// Page title text (without the site suffix)
    pub title: &'a str,
    /// Site name shown in header, footer, and the title suffix
    pub site_name: &'a str,
    /// Bundled stylesheet names under `assets/`
    pub stylesheets: &'a [&'a str],
    /// Directory depth of the page from the site root
    pub depth: usize,
    /// Session signal for the header account area
    pub session: &'a Session,
}

impl LayoutData<'_> {
    /// Relative prefix back to the site root.
    pub fn root_prefix(&self) -> String {
        "../".repeat(self.depth)
    }
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, site header, and footer across
/// all page types. The wrapper handles viewport configuration, charset, and
/// stylesheet loading while the caller provides page-specific main content.
///
/// # Arguments
///
/// * `layout`: Shared layout inputs
/// * `body`: Page-specific main content markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(layout: &LayoutData<'_>, body: Markup) -> Markup {
    let prefix = layout.root_prefix();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (layout.title) " - " (layout.site_name) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in layout.stylesheets {
                    link rel="stylesheet" href=(format!("{}assets/{}", prefix, stylesheet));
                }
            }
            body {
                (site_header(layout.site_name, &prefix, layout.session))
                main class="page-main" {
                    (body)
                }
                (site_footer(layout.site_name, &prefix))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_includes_title_and_chrome() {
        // Arrange
        let layout = LayoutData {
            title: "Latest Articles",
            site_name: "TechByBookk",
            stylesheets: &["blog.css"],
            depth: 1,
            session: &Session::SignedOut,
        };

        // Act
        let html = page_wrapper(&layout, html! { p { "content" } }).into_string();

        // Assert
        assert!(
            html.contains("<title>Latest Articles - TechByBookk</title>"),
            "Title should carry the site suffix: {}",
            html
        );
        assert!(
            html.contains("href=\"../assets/blog.css\""),
            "Stylesheet links should be depth-prefixed"
        );
        assert!(html.contains("site-header"), "Header should be present");
        assert!(html.contains("site-footer"), "Footer should be present");
        assert!(html.contains("content"), "Body content should be present");
    }

    #[test]
    fn test_root_prefix_depths() {
        // Arrange
        let base = LayoutData {
            title: "t",
            site_name: "s",
            stylesheets: &[],
            depth: 0,
            session: &Session::SignedOut,
        };

        // Assert
        assert_eq!(base.root_prefix(), "");
        assert_eq!(
            LayoutData { depth: 2, ..base }.root_prefix(),
            "../../"
        );
    }
}
