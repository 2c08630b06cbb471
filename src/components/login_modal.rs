//! Authentication modal components
//!
//! Sign-in, sign-up, and email-verification dialogs layered over any page.
//! The modals are pure presentation: credential checks, session issuance,
//! and verification codes are owned by the external identity provider,
//! whose client script binds the `data-provider-action` controls. Modals
//! open via fragment targets so the markup works without script.

use maud::{Markup, html};

/// Renders the full set of auth modals
///
/// # Arguments
///
/// * `error`: Provider-returned message to show verbatim, if any
///
/// # Returns
///
/// Login, sign-up, and verification modal markup
pub fn auth_modals(error: Option<&str>) -> Markup {
    html! {
        (login_modal(error))
        (signup_modal(error))
        (verification_modal(error))
    }
}

/// Renders the sign-in dialog
///
/// # Arguments
///
/// * `error`: Provider-returned message to show verbatim, if any
pub fn login_modal(error: Option<&str>) -> Markup {
    modal(
        "login",
        "Login",
        "Enter your credentials to access your account",
        error,
        html! {
            form class="auth-form" action="#" data-provider-action="sign-in" {
                (text_field("login-email", "email", "Email", "you@example.com"))
                (text_field("login-password", "password", "Password", "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"))
                button type="submit" class="auth-submit" { "Login" }
                a href="#signup" class="auth-switch" { "Don't have an account? Sign up" }
            }
        },
    )
}

/// Renders the sign-up dialog
///
/// # Arguments
///
/// * `error`: Provider-returned message to show verbatim, if any
pub fn signup_modal(error: Option<&str>) -> Markup {
    modal(
        "signup",
        "Sign Up",
        "Create a new account to get started",
        error,
        html! {
            form class="auth-form" action="#" data-provider-action="sign-up" {
                (text_field("signup-name", "text", "Name", "Your name"))
                (text_field("signup-email", "email", "Email", "you@example.com"))
                (text_field("signup-password", "password", "Password", "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"))
                (text_field("signup-confirm", "password", "Confirm Password", "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"))
                button type="submit" class="auth-submit" { "Sign Up" }
                a href="#login" class="auth-switch" { "Already have an account? Login" }
            }
        },
    )
}

/// Renders the email verification dialog
///
/// Shown by the provider script after a sign-up that requires a code.
///
/// # Arguments
///
/// * `error`: Provider-returned message to show verbatim, if any
pub fn verification_modal(error: Option<&str>) -> Markup {
    modal(
        "verify-email",
        "Verify Your Email",
        "We sent a verification code to your email. Please enter it below.",
        error,
        html! {
            form class="auth-form" action="#" data-provider-action="verify-email" {
                div class="form-field" {
                    label for="verification-code" { "Verification Code" }
                    input id="verification-code" type="text" name="code"
                        placeholder="Enter 6-digit code" maxlength="6" required
                        class="code-input";
                    p class="field-hint" { "Enter the 6-digit code sent to your email" }
                }
                button type="submit" class="auth-submit" { "Verify Email" }
                button type="button" class="auth-secondary" data-provider-action="resend-code" {
                    "Resend Code"
                }
                a href="#signup" class="auth-switch" { "Back to Sign Up" }
            }
        },
    )
}

/// Shared modal shell: overlay, title, description, error region, body.
///
/// The error region shows the provider's message text verbatim and leaves
/// the form usable, so retry stays user-initiated.
fn modal(id: &str, title: &str, description: &str, error: Option<&str>, body: Markup) -> Markup {
    html! {
        div id=(id) class="modal-overlay" {
            div class="modal-content" role="dialog" aria-labelledby=(format!("{}-title", id)) {
                h2 id=(format!("{}-title", id)) class="modal-title" { (title) }
                p class="modal-description" { (description) }
                @if let Some(message) = error {
                    div class="form-error" role="alert" { (message) }
                }
                (body)
                a href="#" class="modal-close" aria-label="Close" {
                    i class="ph ph-x" {}
                }
            }
        }
    }
}

/// Labeled text input field.
fn text_field(id: &str, kind: &str, label: &str, placeholder: &str) -> Markup {
    html! {
        div class="form-field" {
            label for=(id) { (label) }
            input id=(id) type=(kind) name=(id) placeholder=(placeholder) required;
        }
    }
}
