//! Network seam — the credentialed transport trait the session manager
//! depends on, and the default `reqwest`-backed implementation.
//!
//! DESIGN
//! ======
//! The manager never talks HTTP directly; everything goes through
//! [`HttpClient`] so host applications can inject their own transport and
//! tests can script a mock. The contract is small on purpose: two verbs,
//! cookies attached automatically, non-2xx surfaced as errors.

pub mod client;
pub mod types;

pub use client::ReqwestClient;
pub use types::{HttpClient, HttpError, HttpResponse};
