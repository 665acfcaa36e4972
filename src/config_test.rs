use super::*;

fn full_builder() -> ConfigBuilder {
    Config::builder("https://api.example.com")
        .csrf_cookie_path("/api/auth/csrf-cookie")
        .sign_in_path("/api/auth/login")
        .sign_out_path("/api/auth/logout")
        .user_object_path("/api/auth/me")
}

#[test]
fn builds_with_all_paths() {
    let config = full_builder().build().expect("config should build");
    assert_eq!(config.api_base_url(), "https://api.example.com");
    assert_eq!(config.csrf_cookie_path(), "/api/auth/csrf-cookie");
    assert_eq!(config.sign_in_path(), "/api/auth/login");
    assert_eq!(config.sign_out_path(), "/api/auth/logout");
    assert_eq!(config.user_object_path(), "/api/auth/me");
}

#[test]
fn check_on_init_defaults_to_true() {
    let config = full_builder().build().expect("config should build");
    assert!(config.check_on_init());
}

#[test]
fn check_on_init_can_be_disabled() {
    let config = full_builder()
        .check_on_init(false)
        .build()
        .expect("config should build");
    assert!(!config.check_on_init());
}

#[test]
fn empty_base_url_rejected() {
    let result = Config::builder("")
        .csrf_cookie_path("/csrf")
        .sign_in_path("/login")
        .sign_out_path("/logout")
        .user_object_path("/me")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingBaseUrl);
}

#[test]
fn whitespace_base_url_rejected() {
    let result = Config::builder("   ")
        .csrf_cookie_path("/csrf")
        .sign_in_path("/login")
        .sign_out_path("/logout")
        .user_object_path("/me")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingBaseUrl);
}

#[test]
fn missing_csrf_cookie_path_rejected() {
    let result = Config::builder("https://api.example.com")
        .sign_in_path("/login")
        .sign_out_path("/logout")
        .user_object_path("/me")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingPath("csrf_cookie_path"));
}

#[test]
fn missing_sign_in_path_rejected() {
    let result = Config::builder("https://api.example.com")
        .csrf_cookie_path("/csrf")
        .sign_out_path("/logout")
        .user_object_path("/me")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingPath("sign_in_path"));
}

#[test]
fn missing_sign_out_path_rejected() {
    let result = Config::builder("https://api.example.com")
        .csrf_cookie_path("/csrf")
        .sign_in_path("/login")
        .user_object_path("/me")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingPath("sign_out_path"));
}

#[test]
fn missing_user_object_path_rejected() {
    let result = Config::builder("https://api.example.com")
        .csrf_cookie_path("/csrf")
        .sign_in_path("/login")
        .sign_out_path("/logout")
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingPath("user_object_path"));
}

#[test]
fn empty_path_rejected() {
    let result = full_builder().sign_in_path("").build();
    assert_eq!(result.unwrap_err(), ConfigError::MissingPath("sign_in_path"));
}

#[test]
fn error_display_names_the_field() {
    let err = ConfigError::MissingPath("sign_in_path");
    assert_eq!(err.to_string(), "required path `sign_in_path` is missing or empty");
}
