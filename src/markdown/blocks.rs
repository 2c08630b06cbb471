//! Block classification for the markdown subset.

/// One classified, renderable unit of article content.
///
/// Blocks carry no identity beyond their position in the parsed sequence.
/// Heading levels store the actual `#` count; mapping levels outside 1-3 to
/// a display style is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    UnorderedList { items: Vec<String> },
    OrderedList { items: Vec<String> },
    Paragraph { text: String },
}

/// Parses an article content blob into an ordered block sequence.
///
/// The input is split on double line-breaks and each raw segment is
/// classified independently, in order:
///
/// 1. A run of `#` followed by whitespace is a heading.
/// 2. A leading `-` marks an unordered list; each line loses its `-` marker
///    plus one whitespace character, lines without a marker stay verbatim.
/// 3. A leading integer followed by `.` marks an ordered list, stripped the
///    same way per line.
/// 4. Anything else, including whitespace-only segments, is a paragraph
///    with its text unmodified.
///
/// Every segment yields exactly one block; nothing is merged, dropped, or
/// trimmed, and there is no cross-segment state (a blank line always ends
/// the current block). The function is pure and never fails.
///
/// # Arguments
///
/// * `content`: Article body text in the restricted subset
///
/// # Returns
///
/// Freshly allocated blocks in input order
pub fn parse_blocks(content: &str) -> Vec<Block> {
    content.split("\n\n").map(classify_segment).collect()
}

fn classify_segment(segment: &str) -> Block {
    if let Some((level, text)) = heading_parts(segment) {
        return Block::Heading { level, text };
    }

    if segment.starts_with('-') {
        return Block::UnorderedList {
            items: segment
                .lines()
                .map(|line| strip_marker(line, unordered_marker_len(line)))
                .collect(),
        };
    }

    if has_ordered_prefix(segment) {
        return Block::OrderedList {
            items: segment
                .lines()
                .map(|line| strip_marker(line, ordered_marker_len(line)))
                .collect(),
        };
    }

    Block::Paragraph {
        text: segment.to_string(),
    }
}

/// Splits a heading segment into level and text.
///
/// Requires at least one `#` followed by a whitespace character; the `#` run
/// and that whitespace character are stripped from the text. Segments with a
/// `#` run but no following whitespace are not headings.
fn heading_parts(segment: &str) -> Option<(u8, String)> {
    let hashes = segment.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 {
        return None;
    }

    let rest = &segment[hashes..];
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {
            // Counts past u8 range are unreachable in practice but must not panic
            let level = hashes.min(u8::MAX as usize) as u8;
            Some((level, chars.as_str().to_string()))
        }
        _ => None,
    }
}

/// Marker length for `- item` lines, or None when the line has no marker.
///
/// The marker is the `-` plus exactly one whitespace character; a `-` with
/// no following whitespace is content, not a marker.
fn unordered_marker_len(line: &str) -> Option<usize> {
    let rest = line.strip_prefix('-')?;
    let first = rest.chars().next()?;
    first.is_whitespace().then(|| 1 + first.len_utf8())
}

/// Whether text opens with an integer followed by `.`.
///
/// Classification is looser than stripping: `1.x` still marks an ordered
/// list segment even though its lines keep their text verbatim.
fn has_ordered_prefix(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && text.as_bytes().get(digits) == Some(&b'.')
}

/// Marker length for `1. item` lines, or None when the line has no marker.
fn ordered_marker_len(line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || line.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    let rest = &line[digits + 1..];
    let first = rest.chars().next()?;
    first.is_whitespace().then(|| digits + 1 + first.len_utf8())
}

/// Strips a marker prefix, keeping the line verbatim when there is none.
fn strip_marker(line: &str, marker_len: Option<usize>) -> String {
    match marker_len {
        Some(len) => line[len..].to_string(),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_one() {
        // Arrange & Act
        let blocks = parse_blocks("# Title");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 1,
                text: "Title".to_string()
            }],
            "Single '# Title' segment should parse to a level-1 heading"
        );
    }

    #[test]
    fn test_heading_level_three() {
        // Arrange & Act
        let blocks = parse_blocks("### Sub");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 3,
                text: "Sub".to_string()
            }],
            "'### Sub' should parse to a level-3 heading"
        );
    }

    #[test]
    fn test_heading_level_beyond_three_is_preserved() {
        // Arrange & Act
        let blocks = parse_blocks("#### Deep");

        // Assert: deep levels are kept; degrading the style is the
        // renderer's job, parsing must not fail
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 4,
                text: "Deep".to_string()
            }]
        );
    }

    #[test]
    fn test_hash_without_whitespace_is_paragraph() {
        // Arrange & Act
        let blocks = parse_blocks("#hashtag");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "#hashtag".to_string()
            }],
            "A '#' run without following whitespace is not a heading"
        );
    }

    #[test]
    fn test_unordered_list_extraction() {
        // Arrange & Act
        let blocks = parse_blocks("- a\n- b");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::UnorderedList {
                items: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }

    #[test]
    fn test_unordered_list_keeps_unmarked_lines_verbatim() {
        // Arrange
        let segment = "- first\nplain continuation\n-nospace";

        // Act
        let blocks = parse_blocks(segment);

        // Assert: lines without a full marker are items as-is, never
        // re-classified
        assert_eq!(
            blocks,
            vec![Block::UnorderedList {
                items: vec![
                    "first".to_string(),
                    "plain continuation".to_string(),
                    "-nospace".to_string(),
                ]
            }]
        );
    }

    #[test]
    fn test_ordered_list_extraction() {
        // Arrange & Act
        let blocks = parse_blocks("1. x\n2. y");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::OrderedList {
                items: vec!["x".to_string(), "y".to_string()]
            }]
        );
    }

    #[test]
    fn test_ordered_list_multi_digit_markers() {
        // Arrange & Act
        let blocks = parse_blocks("10. ten\n11. eleven");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::OrderedList {
                items: vec!["ten".to_string(), "eleven".to_string()]
            }]
        );
    }

    #[test]
    fn test_ordered_marker_without_whitespace_classifies_but_keeps_text() {
        // Arrange & Act
        let blocks = parse_blocks("1.x\n2. y");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::OrderedList {
                items: vec!["1.x".to_string(), "y".to_string()]
            }],
            "Digits+dot classify the segment, but only a full marker strips"
        );
    }

    #[test]
    fn test_default_paragraph() {
        // Arrange & Act
        let blocks = parse_blocks("Just text.");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "Just text.".to_string()
            }]
        );
    }

    #[test]
    fn test_whitespace_only_segment_is_paragraph() {
        // Arrange & Act
        let blocks = parse_blocks("   ");

        // Assert: no special-casing trims whitespace-only segments away
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "   ".to_string()
            }]
        );
    }

    #[test]
    fn test_segmentation_law() {
        // Arrange
        let content = "# Title\n\nIntro paragraph.\n\n- a\n- b\n\n1. x\n\nOutro.";

        // Act
        let blocks = parse_blocks(content);

        // Assert: one block per double-line-break segment, order preserved
        assert_eq!(
            blocks.len(),
            content.split("\n\n").count(),
            "Block count must equal segment count"
        );
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::Paragraph { .. }));
        assert!(matches!(blocks[2], Block::UnorderedList { .. }));
        assert!(matches!(blocks[3], Block::OrderedList { .. }));
        assert!(matches!(blocks[4], Block::Paragraph { .. }));
    }

    #[test]
    fn test_blank_line_always_starts_new_block() {
        // Arrange: a list interrupted by a blank line must not continue
        let content = "- a\n\n- b";

        // Act
        let blocks = parse_blocks(content);

        // Assert
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: vec!["a".to_string()]
                },
                Block::UnorderedList {
                    items: vec!["b".to_string()]
                },
            ],
            "No cross-segment list continuation"
        );
    }

    #[test]
    fn test_idempotence() {
        // Arrange
        let content = "# Title\n\nBody text.\n\n- one\n- two";

        // Act
        let first = parse_blocks(content);
        let second = parse_blocks(content);

        // Assert
        assert_eq!(first, second, "Parsing must be deterministic");
    }

    #[test]
    fn test_empty_input_yields_single_empty_paragraph() {
        // Arrange & Act
        let blocks = parse_blocks("");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: String::new()
            }]
        );
    }

    #[test]
    fn test_segment_starting_with_newline_is_paragraph() {
        // Arrange: classification looks at the raw segment, so a leading
        // newline shadows the '#' that follows it
        let blocks = parse_blocks("\n# Shadowed");

        // Assert
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: "\n# Shadowed".to_string()
            }]
        );
    }
}
