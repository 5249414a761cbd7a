use super::*;

// =============================================================
// Failure message selection
// =============================================================

#[test]
fn server_error_field_is_preferred() {
    let body = ErrorBody {
        error: Some("Username already exists.".to_owned()),
    };
    assert_eq!(
        error_message(Some(body), SIGNUP_FALLBACK),
        "Username already exists."
    );
}

#[test]
fn missing_body_falls_back() {
    assert_eq!(error_message(None, LOGIN_FALLBACK), "Login failed.");
}

#[test]
fn missing_error_field_falls_back() {
    assert_eq!(
        error_message(Some(ErrorBody::default()), VERIFY_FALLBACK),
        "OTP verification failed."
    );
}

#[test]
fn empty_error_field_falls_back() {
    let body = ErrorBody {
        error: Some(String::new()),
    };
    assert_eq!(error_message(Some(body), LOGIN_FALLBACK), "Login failed.");
}

// =============================================================
// Display is the rendered message
// =============================================================

#[test]
fn server_error_displays_its_message() {
    let err = ApiError::Server("Invalid credentials.".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials.");
}

#[test]
fn transport_error_displays_its_message() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Failed to fetch");
}
