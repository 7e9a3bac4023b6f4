//! Gate state machine for the protected shell

use crate::events::SessionEvent;
use crate::session::AuthSnapshot;

/// Render state of the session gate.
///
/// `Initializing -> {Authenticated, Unauthenticated, Unauthorized}`;
/// `Authenticated` can fall back to `Unauthenticated` on logout or token
/// loss. `Unauthorized` only changes once a fresh login replaces the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Credentials are being located and validated.
    Initializing,
    /// A backend-confirmed administrator session is present.
    Authenticated,
    /// No usable session; the browser bounces to the login application.
    Unauthenticated,
    /// The session is real but the role does not grant console access.
    Unauthorized,
}

impl GateState {
    /// Presence-only resolution, used when no backend round trip applies.
    pub fn from_snapshot(snapshot: &AuthSnapshot) -> Self {
        if !snapshot.is_authenticated {
            Self::Unauthenticated
        } else if snapshot.is_admin() {
            Self::Authenticated
        } else {
            Self::Unauthorized
        }
    }

    /// Full resolution after the identity service has been consulted.
    pub fn resolve(snapshot: &AuthSnapshot, backend_valid: bool) -> Self {
        if !backend_valid {
            Self::Unauthenticated
        } else {
            Self::from_snapshot(snapshot)
        }
    }

    /// React to a session signal without a full re-check.
    pub fn on_event(event: &SessionEvent, snapshot: &AuthSnapshot) -> Self {
        match event {
            SessionEvent::LoggedOut => Self::Unauthenticated,
            // A renewal never changes the role, so presence resolution is
            // enough; an Unauthorized session stays Unauthorized.
            SessionEvent::TokenRenewed(_) => Self::from_snapshot(snapshot),
        }
    }
}
