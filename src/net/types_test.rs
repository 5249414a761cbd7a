use super::*;

// =============================================================
// Signup validation
// =============================================================

#[test]
fn signup_rejects_blank_username() {
    let result = SignupRequest::from_fields("  ", "a@b.com", "secret");
    assert_eq!(result, Err("Please provide username, email, and password."));
}

#[test]
fn signup_rejects_blank_email() {
    let result = SignupRequest::from_fields("ada", "", "secret");
    assert_eq!(result, Err("Please provide username, email, and password."));
}

#[test]
fn signup_rejects_blank_password() {
    let result = SignupRequest::from_fields("ada", "a@b.com", "   ");
    assert_eq!(result, Err("Please provide username, email, and password."));
}

#[test]
fn signup_trims_all_fields() {
    let req = SignupRequest::from_fields(" ada ", " a@b.com ", " secret ").unwrap();
    assert_eq!(req.username, "ada");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, "secret");
}

#[test]
fn signup_serializes_expected_wire_fields() {
    let req = SignupRequest::from_fields("ada", "a@b.com", "secret").unwrap();
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "username": "ada",
            "email": "a@b.com",
            "password": "secret",
        })
    );
}

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_rejects_blank_username() {
    let result = LoginRequest::from_fields("", "secret");
    assert_eq!(result, Err("Please enter username and password."));
}

#[test]
fn login_rejects_blank_password() {
    let result = LoginRequest::from_fields("ada", "  ");
    assert_eq!(result, Err("Please enter username and password."));
}

#[test]
fn login_trims_fields() {
    let req = LoginRequest::from_fields(" ada ", " secret ").unwrap();
    assert_eq!(req.username, "ada");
    assert_eq!(req.password, "secret");
}

// =============================================================
// Verify validation
// =============================================================

#[test]
fn verify_rejects_blank_otp() {
    let result = VerifyRequest::from_fields("ada", "   ");
    assert_eq!(result, Err("Enter the 6-digit OTP."));
}

#[test]
fn verify_trims_otp_and_keeps_username() {
    let req = VerifyRequest::from_fields("ada", " 123456 ").unwrap();
    assert_eq!(req.username, "ada");
    assert_eq!(req.otp, "123456");
}

// =============================================================
// Login response hint
// =============================================================

#[test]
fn hint_passes_through_masked_address() {
    let resp = LoginResponse {
        email_hint: Some("a***a@example.com".to_owned()),
    };
    assert_eq!(resp.hint(), Some("a***a@example.com"));
}

#[test]
fn hint_normalizes_empty_string_to_absent() {
    let resp = LoginResponse {
        email_hint: Some(String::new()),
    };
    assert_eq!(resp.hint(), None);
}

#[test]
fn hint_absent_when_field_missing() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.hint(), None);
}
