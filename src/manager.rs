//! Session manager — the authentication state machine and its protocol
//! flows.
//!
//! DESIGN
//! ======
//! All mutable state lives in one `watch` channel cell, so subscribers
//! always hold the latest published snapshot without extra locking.
//! Protocol flows are serialized through a single-flight guard: overlapping
//! sign-in, sign-out and first-check calls run one at a time, which keeps
//! the CSRF handshake ordering intact and collapses concurrent bootstrap
//! checks into a single request.
//!
//! ERROR HANDLING
//! ==============
//! Only `sign_in` and `sign_out` surface failures to the caller.
//! `check_authentication` absorbs every failure into an unauthenticated
//! result; its contract is "tell me the status", not "did the round trip
//! succeed".

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;

use std::sync::Arc;

use serde_json::{Value, json};
use tokio::sync::{Mutex, watch};

use crate::config::Config;
use crate::net::{HttpClient, HttpError, ReqwestClient};
use crate::state::{AuthStatus, Snapshot, UserObject};

/// Errors surfaced by the sign-in and sign-out flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Email or password was empty.
    #[error("email and password must be non-empty")]
    MissingCredentials,

    /// The backend or the transport rejected a request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The user object in the response was not a JSON object.
    #[error("malformed user object: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AuthError {
    /// `true` when the failure looks like rejected credentials rather than
    /// transport trouble: 401 unauthorized, 419 expired CSRF cookie, or 422
    /// validation failure.
    #[must_use]
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Self::Http(HttpError::Status { status: 401 | 419 | 422, .. }))
    }
}

/// Client-side authority over the backend session.
///
/// Tracks the tri-state authentication status, caches the user object, and
/// drives the CSRF + credential exchange protocol. Consumers read state via
/// [`SessionManager::snapshot`]/[`SessionManager::status`] or hold a
/// [`SessionManager::subscribe`] receiver and re-render on each change.
pub struct SessionManager {
    config: Config,
    http: Arc<dyn HttpClient>,
    state: watch::Sender<Snapshot>,
    flow: Mutex<()>,
}

impl SessionManager {
    /// Build a manager with the default cookie-aware HTTP client.
    ///
    /// Does not run the bootstrap check regardless of `check_on_init`; use
    /// [`SessionManager::start`] for construction that honors the flag.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when the configured base URL
    /// does not parse, or [`HttpError::Transport`] when the underlying
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self, HttpError> {
        let http = Arc::new(ReqwestClient::new(config.api_base_url())?);
        Ok(Self::with_client(config, http))
    }

    /// Build a manager around an injected transport.
    #[must_use]
    pub fn with_client(config: Config, http: Arc<dyn HttpClient>) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self { config, http, state, flow: Mutex::new(()) }
    }

    /// Build with the default client and, when the config asks for it, run
    /// the bootstrap authentication check before returning.
    ///
    /// # Errors
    ///
    /// Same as [`SessionManager::new`]; the bootstrap check itself never
    /// fails construction.
    pub async fn start(config: Config) -> Result<Self, HttpError> {
        let manager = Self::new(config)?;
        manager.bootstrap().await;
        Ok(manager)
    }

    /// [`SessionManager::start`] with an injected transport.
    pub async fn start_with_client(config: Config, http: Arc<dyn HttpClient>) -> Self {
        let manager = Self::with_client(config, http);
        manager.bootstrap().await;
        manager
    }

    async fn bootstrap(&self) {
        if self.config.check_on_init() {
            self.check_authentication().await;
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Current status without side effects. `Unknown` before the first
    /// completed check; call [`SessionManager::check_authentication`] to
    /// resolve it.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.state.borrow().status
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// Channel delivering a [`Snapshot`] on every state change. The receiver
    /// also sees the current value immediately, so late subscribers are
    /// never stale.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state.subscribe()
    }

    // =========================================================================
    // PROTOCOL FLOWS
    // =========================================================================

    /// Resolve and return whether the session is authenticated.
    ///
    /// When the status is already known this is a cached, network-free read
    /// that does not notify subscribers. The first call performs a GET on
    /// the user-object route; success stores the user and a failure of any
    /// kind (non-2xx, transport error, malformed body) is folded into an
    /// unauthenticated result rather than reported. Each invocation that
    /// reaches the network notifies subscribers exactly once.
    pub async fn check_authentication(&self) -> bool {
        let status = self.status();
        if status.is_known() {
            return status.is_authenticated();
        }

        let _guard = self.flow.lock().await;
        // A flow holding the guard may have resolved the status meanwhile.
        let status = self.status();
        if status.is_known() {
            return status.is_authenticated();
        }

        match self.fetch_user().await {
            Ok(user) => {
                self.publish(user, AuthStatus::Authenticated);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "authentication check failed; treating as signed out");
                self.publish(UserObject::new(), AuthStatus::Unauthenticated);
                false
            }
        }
    }

    /// Run the three-step sign-in protocol: CSRF cookie handshake,
    /// credential POST, user-object fetch. The steps are strictly
    /// sequential: the CSRF cookie set by step 1 must be present before
    /// the credential POST is sent.
    ///
    /// On success, stores the fetched user, notifies subscribers once, and
    /// resolves with the user object.
    ///
    /// # Errors
    ///
    /// Propagates the failing step's error and leaves the manager
    /// unauthenticated with the cached user object untouched. Use
    /// [`AuthError::is_credential_failure`] to distinguish rejected
    /// credentials from transport trouble. A failure of the final user
    /// fetch after accepted credentials is also propagated: the session is
    /// unusable without a user object.
    pub async fn sign_in(&self, email: &str, password: &str, remember: bool) -> Result<UserObject, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let _guard = self.flow.lock().await;

        // Step 1: CSRF pre-flight. The response body is discarded; only the
        // Set-Cookie side effect matters.
        if let Err(err) = self.http.get(self.config.csrf_cookie_path()).await {
            self.record_sign_in_failure();
            return Err(err.into());
        }

        // Step 2: credential exchange.
        let credentials = json!({ "email": email, "password": password, "remember": remember });
        if let Err(err) = self.http.post(self.config.sign_in_path(), &credentials).await {
            self.record_sign_in_failure();
            return Err(err.into());
        }

        // Step 3: profile fetch.
        match self.fetch_user().await {
            Ok(user) => {
                self.publish(user.clone(), AuthStatus::Authenticated);
                tracing::debug!("sign-in completed");
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "user fetch failed after accepted credentials");
                self.record_sign_in_failure();
                Err(err)
            }
        }
    }

    /// POST the sign-out route and clear local state.
    ///
    /// Local state becomes unauthenticated no matter how the server
    /// answered, so the UI can never be stranded looking signed in after a
    /// partially failed server-side teardown. Idempotent: callable when
    /// already signed out.
    ///
    /// # Errors
    ///
    /// Non-2xx responses are swallowed; transport-level failures are
    /// returned after the state mutation has already happened.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let _guard = self.flow.lock().await;

        let result = self.http.post(self.config.sign_out_path(), &Value::Null).await;
        self.publish(UserObject::new(), AuthStatus::Unauthenticated);

        match result {
            Ok(_) => Ok(()),
            Err(HttpError::Status { status, .. }) => {
                tracing::warn!(status, "sign-out rejected by server; local state cleared anyway");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Manual override for flows the manager does not own, e.g. a
    /// registration endpoint that already returned a trusted user object.
    /// Synchronous, zero network calls; notifies subscribers once.
    ///
    /// Passing `authenticated = false` stores the empty user sentinel
    /// regardless of `user`, keeping status and user consistent.
    pub fn set_user(&self, user: UserObject, authenticated: bool) {
        if authenticated {
            self.publish(user, AuthStatus::Authenticated);
        } else {
            self.publish(UserObject::new(), AuthStatus::Unauthenticated);
        }
    }

    // =========================================================================
    // STATE CELL
    // =========================================================================

    fn publish(&self, user: UserObject, status: AuthStatus) {
        self.state.send_if_modified(|snapshot| {
            snapshot.user = user;
            snapshot.status = status;
            true
        });
    }

    /// Record a failed sign-in without waking subscribers. The cached user
    /// object is left as-is.
    fn record_sign_in_failure(&self) {
        self.state.send_if_modified(|snapshot| {
            snapshot.status = AuthStatus::Unauthenticated;
            false
        });
    }

    async fn fetch_user(&self) -> Result<UserObject, AuthError> {
        let response = self.http.get(self.config.user_object_path()).await?;
        Ok(response.json()?)
    }
}
