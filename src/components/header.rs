//! Site header and account area components

use maud::{Markup, html};

use super::login_modal::auth_modals;
use crate::avatar;
use crate::session::Session;

/// Avatar size in the header account area, in pixels.
const HEADER_AVATAR_SIZE: u32 = 36;

/// Renders the fixed site header with navigation and account area
///
/// Navigation links are prefixed for the page's depth so the same header
/// works from the site root and from `blog/` pages. The account area
/// reflects the session signal: a login trigger when signed out, the user
/// menu when signed in, and an empty placeholder while the signal has not
/// loaded. Auth modal markup is embedded once per page.
///
/// # Arguments
///
/// * `site_name`: Site name for the logo link
/// * `prefix`: Relative prefix back to the site root
/// * `session`: Current session signal
///
/// # Returns
///
/// Complete header markup including auth modals
pub fn site_header(site_name: &str, prefix: &str, session: &Session) -> Markup {
    html! {
        header class="site-header" {
            nav class="site-nav" {
                a href=(format!("{}index.html", prefix)) class="logo-link" {
                    (logo_mark())
                    span class="logo-text" { (site_name) }
                }

                div class="nav-links" {
                    a href=(format!("{}index.html", prefix)) class="nav-link" { "Home" }
                    a href=(format!("{}blog/index.html", prefix)) class="nav-link" { "Blog" }
                    a href=(format!("{}index.html#categories", prefix)) class="nav-link" { "Topics" }
                    a href="#contact" class="nav-link" { "Contact" }
                    (account_area(session))
                }
            }
        }
        (auth_modals(None))
    }
}

/// Renders the session-dependent account area
///
/// # Arguments
///
/// * `session`: Current session signal
///
/// # Returns
///
/// Login trigger, user menu, or loading placeholder markup
pub fn account_area(session: &Session) -> Markup {
    match session {
        // Signal not loaded yet: reserve the space, render nothing live
        Session::Loading => html! {
            div class="account-area account-loading" aria-hidden="true" {}
        },
        Session::SignedOut => html! {
            div class="account-area" {
                a href="#login" class="login-button" { "Login" }
            }
        },
        Session::SignedIn(profile) => html! {
            div class="account-area" {
                details class="user-menu" {
                    summary class="user-menu-button" {
                        @if let Some(url) = profile.avatar_url() {
                            img class="user-avatar" src=(url) alt=(profile.display_name())
                                width=(HEADER_AVATAR_SIZE) height=(HEADER_AVATAR_SIZE);
                        } @else {
                            (avatar::render(profile.display_name(), HEADER_AVATAR_SIZE))
                        }
                    }
                    div class="user-dropdown" {
                        div class="user-identity" {
                            p class="user-name" { (profile.display_name()) }
                            @if let Some(email) = profile.email() {
                                p class="user-email" { (email) }
                            }
                        }
                        button type="button" class="signout-button" data-action="sign-out" {
                            i class="ph ph-sign-out" {}
                            " Sign Out"
                        }
                    }
                }
            }
        },
    }
}

/// Inline SVG logo mark.
fn logo_mark() -> Markup {
    html! {
        span class="logo-mark" aria-hidden="true" {
            (maud::PreEscaped(
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32"><rect width="32" height="32" rx="7" fill="#06b6d4"/><path d="M9 22V10h6.2q2.3 0 3.5 1t1.2 2.7q0 1.2-.6 2t-1.7 1.1q1.3.2 2.1 1.1t.8 2.2q0 1.8-1.3 2.9T15.7 22zm3-7.2h2.9q1 0 1.5-.5t.6-1.3q0-.8-.6-1.3t-1.5-.4H12zm0 4.9h3.2q1 0 1.6-.5t.6-1.3q0-.9-.6-1.4t-1.6-.5H12z" fill="#0e1420"/></svg>"##,
            ))
        }
    }
}
