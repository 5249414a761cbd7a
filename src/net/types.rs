//! Request and response bodies for the auth endpoints.
//!
//! Request constructors trim their inputs and reject blank required
//! fields, so a request value only exists once local validation has
//! passed — a rejected submission never reaches the network layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Body for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// Build a signup body from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns the validation message when any trimmed field is empty.
    pub fn from_fields(username: &str, email: &str, password: &str) -> Result<Self, &'static str> {
        let username = username.trim();
        let email = email.trim();
        let password = password.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err("Please provide username, email, and password.");
        }

        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a login body from raw form fields.
    ///
    /// # Errors
    ///
    /// Returns the validation message when either trimmed field is empty.
    pub fn from_fields(username: &str, password: &str) -> Result<Self, &'static str> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err("Please enter username and password.");
        }

        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Body for `POST /verify`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VerifyRequest {
    pub username: String,
    pub otp: String,
}

impl VerifyRequest {
    /// Build a verify body from the pending username and the code field.
    ///
    /// # Errors
    ///
    /// Returns the validation message when the trimmed code is empty.
    pub fn from_fields(username: &str, otp: &str) -> Result<Self, &'static str> {
        let otp = otp.trim();

        if otp.is_empty() {
            return Err("Enter the 6-digit OTP.");
        }

        Ok(Self {
            username: username.to_owned(),
            otp: otp.to_owned(),
        })
    }
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct LoginResponse {
    /// Masked address the code was sent to, e.g. `j***e@example.com`.
    pub email_hint: Option<String>,
}

impl LoginResponse {
    /// The e-mail hint with empty strings normalized to absent.
    pub fn hint(&self) -> Option<&str> {
        self.email_hint.as_deref().filter(|hint| !hint.is_empty())
    }
}

/// Failure body shared by every endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
