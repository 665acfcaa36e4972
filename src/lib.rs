//! # session-client
//!
//! Client-side session-authentication management for applications talking
//! to a cookie-session backend (CSRF-protected, cookie-authenticated API).
//!
//! The [`SessionManager`] owns the tri-state authentication status and the
//! cached user object, drives the CSRF + credential exchange protocol, and
//! broadcasts state changes over a `watch` channel. Transport sits behind
//! the [`HttpClient`] trait; [`ReqwestClient`] is the batteries-included
//! implementation with a shared cookie jar and CSRF header echo.
//!
//! ```no_run
//! use session_client::{Config, SessionManager};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder("https://api.example.com")
//!     .csrf_cookie_path("/api/auth/csrf-cookie")
//!     .sign_in_path("/api/auth/login")
//!     .sign_out_path("/api/auth/logout")
//!     .user_object_path("/api/auth/me")
//!     .build()?;
//!
//! let manager = SessionManager::start(config).await?;
//! if !manager.status().is_authenticated() {
//!     let user = manager.sign_in("user@example.com", "secret", false).await?;
//!     println!("signed in as {user:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod net;
pub mod state;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use manager::{AuthError, SessionManager};
pub use net::{HttpClient, HttpError, HttpResponse, ReqwestClient};
pub use state::{AuthStatus, Snapshot, UserObject};
