//! HTML rendering for parsed content blocks.

use maud::{Markup, html};

use super::Block;

/// Renders a parsed block sequence as article body markup.
///
/// Heading levels 1-3 map to leveled classes; any other level falls back to
/// the un-leveled `post-heading` class so malformed content degrades to a
/// default style instead of failing. Lists render one `li` per item and
/// paragraphs keep their text as-is.
///
/// # Arguments
///
/// * `blocks`: Block sequence from `parse_blocks`
///
/// # Returns
///
/// Article body markup in block order
pub fn article_body(blocks: &[Block]) -> Markup {
    html! {
        div class="post-body" {
            @for block in blocks {
                @match block {
                    Block::Heading { level, text } => {
                        div class=(heading_class(*level)) { (text) }
                    },
                    Block::UnorderedList { items } => {
                        ul class="post-list" {
                            @for item in items {
                                li { (item) }
                            }
                        }
                    },
                    Block::OrderedList { items } => {
                        ol class="post-list post-list-ordered" {
                            @for item in items {
                                li { (item) }
                            }
                        }
                    },
                    Block::Paragraph { text } => {
                        p class="post-paragraph" { (text) }
                    },
                }
            }
        }
    }
}

/// Maps a heading level to its display class.
fn heading_class(level: u8) -> &'static str {
    match level {
        1 => "post-heading post-heading-1",
        2 => "post-heading post-heading-2",
        3 => "post-heading post-heading-3",
        _ => "post-heading",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_blocks;

    #[test]
    fn test_renders_leveled_headings() {
        // Arrange
        let blocks = parse_blocks("# One\n\n## Two\n\n### Three");

        // Act
        let html = article_body(&blocks).into_string();

        // Assert
        assert!(
            html.contains("post-heading-1"),
            "Level 1 should use its leveled class: {}",
            html
        );
        assert!(html.contains("post-heading-2"), "Level 2 class missing");
        assert!(html.contains("post-heading-3"), "Level 3 class missing");
        assert!(html.contains("One"), "Heading text should be rendered");
    }

    #[test]
    fn test_deep_heading_degrades_to_default_class() {
        // Arrange
        let blocks = parse_blocks("#### Too deep");

        // Act
        let html = article_body(&blocks).into_string();

        // Assert
        assert!(
            html.contains("class=\"post-heading\""),
            "Level 4+ should fall back to the un-leveled class: {}",
            html
        );
        assert!(
            !html.contains("post-heading-4"),
            "No leveled class exists past 3"
        );
        assert!(html.contains("Too deep"), "Text must still render");
    }

    #[test]
    fn test_renders_lists() {
        // Arrange
        let blocks = parse_blocks("- a\n- b\n\n1. x\n2. y");

        // Act
        let html = article_body(&blocks).into_string();

        // Assert
        assert!(html.contains("<ul class=\"post-list\">"), "ul expected");
        assert!(
            html.contains("<ol class=\"post-list post-list-ordered\">"),
            "ol expected"
        );
        assert_eq!(
            html.matches("<li>").count(),
            4,
            "One li per item across both lists"
        );
    }

    #[test]
    fn test_renders_paragraph_text_unmodified() {
        // Arrange
        let blocks = parse_blocks("Just text.");

        // Act
        let html = article_body(&blocks).into_string();

        // Assert
        assert!(
            html.contains("<p class=\"post-paragraph\">Just text.</p>"),
            "Paragraph should carry its text as-is: {}",
            html
        );
    }

    #[test]
    fn test_escapes_markup_in_content() {
        // Arrange: content text is untrusted display data
        let blocks = parse_blocks("<script>alert(1)</script>");

        // Act
        let html = article_body(&blocks).into_string();

        // Assert
        assert!(
            html.contains("&lt;script&gt;"),
            "Text content must be escaped: {}",
            html
        );
    }
}
