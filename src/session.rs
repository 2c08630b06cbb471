//! Presentation-level session state.
//!
//! Session issuance, OAuth redirects, and verification codes all belong to
//! the external identity provider. The site only consumes a small signal:
//! whether a session is active and, if so, a display name and avatar URL.
//! That signal may not have loaded yet, and every consumer must render a
//! safe default for that state instead of failing.

/// Profile details reported by the identity provider for an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    display_name: String,
    email: Option<String>,
    avatar_url: Option<String>,
}

impl UserProfile {
    /// Creates a profile from provider-reported fields.
    pub fn new(
        display_name: impl Into<String>,
        email: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email,
            avatar_url,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Provider-hosted avatar, absent when none was set. Consumers fall
    /// back to a generated avatar.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

/// The session signal as seen by presentation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Provider has not reported yet; render a neutral placeholder.
    Loading,
    SignedOut,
    SignedIn(UserProfile),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::SignedIn(_))
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Session::SignedIn(profile) => Some(profile.display_name()),
            _ => None,
        }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Session::SignedIn(profile) => profile.avatar_url(),
            _ => None,
        }
    }
}

/// Capability seam for the identity provider.
///
/// Presentation code depends on this trait, never on a concrete provider
/// SDK, so the provider can be swapped without touching any component.
pub trait IdentityProvider {
    /// Current session signal, including the not-yet-loaded state.
    fn current(&self) -> Session;
}

/// Identity source with a fixed session.
///
/// The generator emits markup for one session state per run; live state
/// transitions are owned by the provider's client script after deployment.
pub struct FixedIdentity {
    session: Session,
}

impl FixedIdentity {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The default for generated output: no active session.
    pub fn signed_out() -> Self {
        Self::new(Session::SignedOut)
    }
}

impl IdentityProvider for FixedIdentity {
    fn current(&self) -> Session {
        self.session.clone()
    }
}
