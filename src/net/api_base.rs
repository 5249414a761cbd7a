//! API base URL resolution.
//!
//! The backend can be reached three ways: same origin as the page (the
//! usual deployment, API under `/api`), an explicit `API_BASE_URL` global
//! set by the hosting page, or a local development server on a configured
//! or default port. Resolution happens once per page load and the result
//! is cached for every subsequent request.
//!
//! The precedence logic is a pure function over a captured [`BrowserEnv`]
//! snapshot so it can be tested without a browser.

#[cfg(test)]
#[path = "api_base_test.rs"]
mod api_base_test;

use std::sync::OnceLock;

/// Port the local development backend listens on.
pub const DEFAULT_API_PORT: u16 = 5000;

/// Snapshot of the browser inputs that drive base-URL resolution.
#[derive(Clone, Debug, Default)]
pub struct BrowserEnv {
    /// `window.API_BASE_URL`, set by the hosting page before the app runs.
    pub override_url: Option<String>,
    /// `window.location.origin`.
    pub origin: Option<String>,
    /// `window.location.protocol`, e.g. `"https:"`.
    pub protocol: Option<String>,
    /// `window.API_PORT`, set by the hosting page before the app runs.
    pub override_port: Option<String>,
}

fn default_base() -> String {
    format!("http://localhost:{DEFAULT_API_PORT}/api")
}

/// Resolve the API base URL from a browser environment snapshot.
///
/// `None` means no browser is available at all; the local default wins.
/// Otherwise the first applicable source wins: the override URL, a usable
/// `http(s)` page origin, the override port, the local default. The result
/// never carries a trailing slash. Whitespace-only overrides are treated
/// as absent.
pub fn resolve(env: Option<&BrowserEnv>) -> String {
    let Some(env) = env else {
        return default_base();
    };

    if let Some(url) = env
        .override_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        return url.trim_end_matches('/').to_owned();
    }

    if let (Some(origin), Some(protocol)) = (env.origin.as_deref(), env.protocol.as_deref()) {
        // An opaque-origin page reports the literal string "null".
        if origin != "null" && protocol.starts_with("http") {
            return format!("{}/api", origin.trim_end_matches('/'));
        }
    }

    if let Some(port) = env
        .override_port
        .as_deref()
        .map(str::trim)
        .filter(|port| !port.is_empty())
    {
        return format!("http://localhost:{port}/api");
    }

    default_base()
}

/// The resolved API base for this page load. Resolved once, then cached.
pub fn api_base() -> &'static str {
    static API_BASE: OnceLock<String> = OnceLock::new();
    API_BASE.get_or_init(|| {
        let base = resolve(current_env().as_ref());
        #[cfg(feature = "csr")]
        log::debug!("api base resolved to {base}");
        base
    })
}

#[cfg(feature = "csr")]
fn current_env() -> Option<BrowserEnv> {
    let window = web_sys::window()?;
    let location = window.location();
    Some(BrowserEnv {
        override_url: global_string(&window, "API_BASE_URL"),
        origin: location.origin().ok(),
        protocol: location.protocol().ok(),
        override_port: global_string(&window, "API_PORT"),
    })
}

#[cfg(not(feature = "csr"))]
fn current_env() -> Option<BrowserEnv> {
    None
}

/// Read a page-set global as a string. Absent, empty, and zero values are
/// all treated as "not configured"; numeric values are stringified.
#[cfg(feature = "csr")]
fn global_string(window: &web_sys::Window, key: &str) -> Option<String> {
    let value =
        js_sys::Reflect::get(window.as_ref(), &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return (!text.is_empty()).then_some(text);
    }
    value.as_f64().filter(|n| *n != 0.0).map(|n| n.to_string())
}
