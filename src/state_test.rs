use super::*;
use serde_json::json;

fn user_with_name(name: &str) -> UserObject {
    let mut user = UserObject::new();
    user.insert("name".to_owned(), json!(name));
    user
}

// =============================================================================
// AuthStatus
// =============================================================================

#[test]
fn default_status_is_unknown() {
    assert_eq!(AuthStatus::default(), AuthStatus::Unknown);
}

#[test]
fn only_authenticated_is_authenticated() {
    assert!(AuthStatus::Authenticated.is_authenticated());
    assert!(!AuthStatus::Unauthenticated.is_authenticated());
    assert!(!AuthStatus::Unknown.is_authenticated());
}

#[test]
fn known_excludes_unknown_only() {
    assert!(!AuthStatus::Unknown.is_known());
    assert!(AuthStatus::Authenticated.is_known());
    assert!(AuthStatus::Unauthenticated.is_known());
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(json!(AuthStatus::Unknown), json!("unknown"));
    assert_eq!(json!(AuthStatus::Authenticated), json!("authenticated"));
    assert_eq!(json!(AuthStatus::Unauthenticated), json!("unauthenticated"));
}

// =============================================================================
// Snapshot
// =============================================================================

#[test]
fn default_snapshot_has_empty_user_and_unknown_status() {
    let snapshot = Snapshot::default();
    assert!(snapshot.user.is_empty());
    assert_eq!(snapshot.status, AuthStatus::Unknown);
    assert!(!snapshot.authenticated());
}

#[test]
fn authenticated_accessor_tracks_status() {
    let snapshot = Snapshot { user: user_with_name("Bob"), status: AuthStatus::Authenticated };
    assert!(snapshot.authenticated());

    let snapshot = Snapshot { user: UserObject::new(), status: AuthStatus::Unauthenticated };
    assert!(!snapshot.authenticated());
}
