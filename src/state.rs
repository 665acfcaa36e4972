//! Session state model — the tri-state authentication status and the
//! snapshot delivered to subscribers.
//!
//! DESIGN
//! ======
//! The user object stays opaque (`serde_json::Map`) because its shape is
//! owned by the backend; the empty map is the "no user loaded" sentinel.
//! `Authenticated` always travels with a non-empty user and
//! `Unauthenticated` with the empty sentinel — the flows in
//! [`manager`](crate::manager) maintain that pairing.

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use serde::Serialize;

/// Backend-defined user object. The empty map means "no user loaded".
pub type UserObject = serde_json::Map<String, serde_json::Value>;

/// Authentication status distinguishing "not yet checked" from a definite
/// negative result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    /// Not yet determined. Held only between construction and the first
    /// completed check; never re-entered.
    #[default]
    Unknown,
    /// Valid session, user object present.
    Authenticated,
    /// No valid session.
    Unauthenticated,
}

impl AuthStatus {
    /// `true` only for [`AuthStatus::Authenticated`].
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }

    /// `true` once the status has been resolved either way.
    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

/// Read-only view of the session state, delivered to subscribers on every
/// state change.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current user object; empty when no user is loaded.
    pub user: UserObject,
    /// Current authentication status.
    pub status: AuthStatus,
}

impl Snapshot {
    /// Convenience accessor for `status.is_authenticated()`.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.status.is_authenticated()
    }
}
