use super::*;
use serde_json::Value;

#[test]
fn response_json_parses_an_object() {
    let response = HttpResponse { status: 200, body: r#"{"name":"Alice"}"#.to_owned() };
    let value: Value = response.json().expect("body should parse");
    assert_eq!(value["name"], "Alice");
}

#[test]
fn response_json_rejects_malformed_body() {
    let response = HttpResponse { status: 200, body: "not json".to_owned() };
    assert!(response.json::<Value>().is_err());
}

#[test]
fn status_accessor_reports_response_status_only() {
    let err = HttpError::Status { path: "/login".to_owned(), status: 419, body: String::new() };
    assert_eq!(err.status(), Some(419));

    assert_eq!(HttpError::Transport("connection refused".to_owned()).status(), None);
    assert_eq!(HttpError::InvalidBaseUrl("nope".to_owned()).status(), None);
}

#[test]
fn status_error_display_names_path_and_code() {
    let err = HttpError::Status { path: "/api/auth/login".to_owned(), status: 401, body: String::new() };
    assert_eq!(err.to_string(), "/api/auth/login returned status 401");
}
