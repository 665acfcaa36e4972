//! Default `reqwest`-backed HTTP client.
//!
//! DESIGN
//! ======
//! A shared cookie jar keeps the backend session cookie attached to every
//! request after sign-in. State-changing requests additionally echo the
//! CSRF cookie back as a header, the way browser XHR layers do: the backend
//! sets `XSRF-TOKEN` during the pre-flight GET and expects its decoded value
//! in `X-XSRF-TOKEN` on every POST.

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

use super::types::{HttpClient, HttpError, HttpResponse};

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Cookie-aware HTTP client bound to a single API base URL.
#[derive(Debug)]
pub struct ReqwestClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base: Url,
}

impl ReqwestClient {
    /// Build a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when the URL does not parse and
    /// [`HttpError::Transport`] when the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base_url).map_err(|e| HttpError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Ok(Self { http, jar, base })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Decoded CSRF token for the echo header, if the cookie is present.
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base)?;
        let raw = header.to_str().ok()?;
        csrf_token_from_cookies(raw)
    }

    async fn finish(path: &str, response: reqwest::Response) -> Result<HttpResponse, HttpError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(HttpError::Status { path: path.to_owned(), status: status.as_u16(), body });
        }

        Ok(HttpResponse { status: status.as_u16(), body })
    }
}

/// Extract and percent-decode the CSRF token from a `Cookie`-header string.
fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != XSRF_COOKIE {
            return None;
        }
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned()))
    })
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let response = self
            .http
            .get(self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Self::finish(path, response).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut request = self
            .http
            .post(self.url(path))
            .header("Accept", "application/json");
        if let Some(token) = self.csrf_token() {
            request = request.header(XSRF_HEADER, token);
        }
        if !body.is_null() {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        Self::finish(path, response).await
    }
}
