//! Generated fallback avatars.
//!
//! Deterministic initials-on-disc avatars for authors and for signed-in
//! users whose identity provider reports no avatar URL.

use maud::{Markup, PreEscaped, html};

const COLORS: &[&str] = &[
    "#dc8a78", "#ea76cb", "#cba6f7", "#8caaee", "#74c7ec", "#81c8be", "#a6d189", "#e5c890",
    "#ef9f76", "#eba0ac",
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercase initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let bg = COLORS[(hash(name) % COLORS.len() as u64) as usize];
    let text = initials(name);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.36em" text-anchor="middle" font-family="system-ui, sans-serif" font-size="42" font-weight="600" fill="#1e1e2e">{text}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(name, size))) } }
}
