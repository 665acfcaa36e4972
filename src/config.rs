//! Session manager configuration.
//!
//! Configuration is an immutable value assembled through [`ConfigBuilder`].
//! Every route path is required: a missing or empty value is a
//! construction-time [`ConfigError`], never a silent default.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Error returned by [`ConfigBuilder::build`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is missing or empty.
    #[error("api base URL must be non-empty")]
    MissingBaseUrl,
    /// A required route path is missing or empty.
    #[error("required path `{0}` is missing or empty")]
    MissingPath(&'static str),
}

/// Immutable settings for a [`SessionManager`](crate::SessionManager).
#[derive(Clone, Debug)]
pub struct Config {
    api_base_url: String,
    csrf_cookie_path: String,
    sign_in_path: String,
    sign_out_path: String,
    user_object_path: String,
    check_on_init: bool,
}

impl Config {
    /// Start building a config for the API at `api_base_url`.
    #[must_use]
    pub fn builder(api_base_url: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            api_base_url: api_base_url.into(),
            csrf_cookie_path: None,
            sign_in_path: None,
            sign_out_path: None,
            user_object_path: None,
            check_on_init: true,
        }
    }

    /// Base URL of the backend API.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Route whose GET establishes the CSRF cookie.
    #[must_use]
    pub fn csrf_cookie_path(&self) -> &str {
        &self.csrf_cookie_path
    }

    /// Route receiving the credential POST.
    #[must_use]
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Route receiving the sign-out POST.
    #[must_use]
    pub fn sign_out_path(&self) -> &str {
        &self.sign_out_path
    }

    /// Route whose GET returns the authenticated user object.
    #[must_use]
    pub fn user_object_path(&self) -> &str {
        &self.user_object_path
    }

    /// Whether [`SessionManager::start`](crate::SessionManager::start) runs
    /// the bootstrap authentication check.
    #[must_use]
    pub fn check_on_init(&self) -> bool {
        self.check_on_init
    }
}

/// Builder for [`Config`]. All four route paths are required.
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    api_base_url: String,
    csrf_cookie_path: Option<String>,
    sign_in_path: Option<String>,
    sign_out_path: Option<String>,
    user_object_path: Option<String>,
    check_on_init: bool,
}

impl ConfigBuilder {
    /// Route whose GET establishes the CSRF cookie.
    #[must_use]
    pub fn csrf_cookie_path(mut self, path: impl Into<String>) -> Self {
        self.csrf_cookie_path = Some(path.into());
        self
    }

    /// Route receiving the credential POST.
    #[must_use]
    pub fn sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = Some(path.into());
        self
    }

    /// Route receiving the sign-out POST.
    #[must_use]
    pub fn sign_out_path(mut self, path: impl Into<String>) -> Self {
        self.sign_out_path = Some(path.into());
        self
    }

    /// Route whose GET returns the authenticated user object.
    #[must_use]
    pub fn user_object_path(mut self, path: impl Into<String>) -> Self {
        self.user_object_path = Some(path.into());
        self
    }

    /// Whether construction through `start` runs the bootstrap check.
    /// Defaults to `true`.
    #[must_use]
    pub fn check_on_init(mut self, check: bool) -> Self {
        self.check_on_init = check;
        self
    }

    /// Validate and produce the immutable [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when the base URL is empty and
    /// [`ConfigError::MissingPath`] naming the first route path that is
    /// missing or empty.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        Ok(Config {
            api_base_url: self.api_base_url,
            csrf_cookie_path: required(self.csrf_cookie_path, "csrf_cookie_path")?,
            sign_in_path: required(self.sign_in_path, "sign_in_path")?,
            sign_out_path: required(self.sign_out_path, "sign_out_path")?,
            user_object_path: required(self.user_object_path, "user_object_path")?,
            check_on_init: self.check_on_init,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(path) if !path.trim().is_empty() => Ok(path),
        _ => Err(ConfigError::MissingPath(field)),
    }
}
