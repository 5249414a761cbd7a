//! REST calls for the three auth endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP status is the sole success discriminator. Any non-2xx response
//! becomes [`ApiError::Server`] carrying the body's `error` field or a
//! per-endpoint fallback; network and decode failures become
//! [`ApiError::Transport`] with the underlying message verbatim. The
//! `Display` output of either variant is exactly what the page renders.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ErrorBody, LoginRequest, LoginResponse, SignupRequest, VerifyRequest};

#[cfg(feature = "csr")]
use super::api_base::api_base;

/// Fallback shown when a `/signup` failure body carries no message.
pub const SIGNUP_FALLBACK: &str = "Signup failed.";
/// Fallback shown when a `/login` failure body carries no message.
pub const LOGIN_FALLBACK: &str = "Login failed.";
/// Fallback shown when a `/verify` failure body carries no message.
pub const VERIFY_FALLBACK: &str = "OTP verification failed.";

#[cfg(not(feature = "csr"))]
const OFFLINE: &str = "not available outside the browser";

/// Failure of an endpoint call, already worded for display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request (non-2xx status).
    #[error("{0}")]
    Server(String),
    /// The request never completed, or the response could not be decoded.
    #[error("{0}")]
    Transport(String),
}

/// Pick the message to display for a failure response body.
pub fn error_message(body: Option<ErrorBody>, fallback: &str) -> String {
    body.and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// Returns [`ApiError`] when the server rejects the signup or the call
/// fails in transit.
pub async fn signup(req: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json("/signup", req, SIGNUP_FALLBACK).await?;
        decode::<serde_json::Value>(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Transport(OFFLINE.to_owned()))
    }
}

/// Submit credentials via `POST /login`, requesting an OTP e-mail.
///
/// # Errors
///
/// Returns [`ApiError`] when the credentials are rejected or the call
/// fails in transit.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json("/login", req, LOGIN_FALLBACK).await?;
        decode::<LoginResponse>(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Transport(OFFLINE.to_owned()))
    }
}

/// Confirm the e-mailed code via `POST /verify`.
///
/// # Errors
///
/// Returns [`ApiError`] when the code is rejected or the call fails in
/// transit.
pub async fn verify(req: &VerifyRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json("/verify", req, VERIFY_FALLBACK).await?;
        decode::<serde_json::Value>(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Transport(OFFLINE.to_owned()))
    }
}

/// POST a JSON body and map a non-2xx status to [`ApiError::Server`].
#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if resp.ok() {
        Ok(resp)
    } else {
        let body = resp.json::<ErrorBody>().await.ok();
        Err(ApiError::Server(error_message(body, fallback)))
    }
}

/// Decode a success body. The server always answers JSON, so a malformed
/// success body is reported rather than silently accepted.
#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}
