//! Login page with the two-step credential + OTP flow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status::StatusMessage;
use crate::net::types::{LoginRequest, VerifyRequest};
use crate::state::login_flow::LoginFlow;
use crate::state::session::SessionStore;
use crate::state::status::StatusLine;

/// Login page — credentials first, then the e-mailed one-time code.
///
/// Redirects to the dashboard when a session is already present. The OTP
/// section only exists while the flow is in its `AwaitingOtp` step.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    if session.is_authenticated() {
        let navigate = use_navigate();
        Effect::new(move || navigate("/", NavigateOptions::default()));
        return ().into_any();
    }

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());

    let flow = RwSignal::new(LoginFlow::Idle);
    let login_message = RwSignal::new(StatusLine::empty());
    let otp_message = RwSignal::new(StatusLine::empty());
    let otp_info = RwSignal::new(String::new());

    let otp_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the code input whenever the OTP step becomes active.
    Effect::new(move || {
        if flow.with(LoginFlow::is_awaiting_otp) {
            if let Some(input) = otp_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Every attempt starts from a clean slate; a stale pending
        // identity must not survive into verification.
        flow.set(LoginFlow::Idle);
        login_message.set(StatusLine::empty());
        otp_message.set(StatusLine::empty());

        match LoginRequest::from_fields(&username.get(), &password.get()) {
            Err(text) => login_message.set(StatusLine::error(text)),
            Ok(req) => {
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&req).await {
                        Ok(resp) => {
                            flow.set(LoginFlow::begin(&req.username));
                            let hint = resp.hint().unwrap_or("your email address on file");
                            login_message.set(StatusLine::success(&format!(
                                "We sent a one-time code to {hint}."
                            )));
                            otp_info.set(match resp.hint() {
                                Some(hint) => {
                                    format!("Enter the 6-digit code we emailed to {hint}.")
                                }
                                None => "Enter the 6-digit code we emailed to your account."
                                    .to_owned(),
                            });
                            otp.set(String::new());
                        }
                        Err(err) => login_message.set(StatusLine::error(&err.to_string())),
                    }
                });
                #[cfg(not(feature = "csr"))]
                let _ = req;
            }
        }
    };

    #[cfg(feature = "csr")]
    let verify_session = session.clone();
    #[cfg(feature = "csr")]
    let verify_navigate = use_navigate();

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        otp_message.set(StatusLine::empty());

        let Some(pending) = flow.with(|f| f.pending_username().map(str::to_owned)) else {
            otp_message.set(StatusLine::error(
                "Please request a new OTP by logging in first.",
            ));
            return;
        };

        match VerifyRequest::from_fields(&pending, &otp.get()) {
            Err(text) => otp_message.set(StatusLine::error(text)),
            Ok(req) => {
                #[cfg(feature = "csr")]
                {
                    let session = verify_session.clone();
                    let navigate = verify_navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::verify(&req).await {
                            Ok(()) => {
                                session.complete_login(&req.username);
                                flow.set(LoginFlow::Verified);
                                navigate("/", NavigateOptions::default());
                            }
                            Err(err) => otp_message.set(StatusLine::error(&err.to_string())),
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                let _ = req;
            }
        }
    };

    view! {
        <section class="auth-page">
            <h1>"Log in"</h1>
            <form id="login-form" class="auth-page__form" on:submit=on_login>
                <label>
                    "Username"
                    <input
                        type="text"
                        name="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        name="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary">
                    "Log in"
                </button>
            </form>
            <StatusMessage line=login_message/>

            <section
                id="otp-section"
                class="auth-page__otp"
                class:hidden=move || !flow.with(LoginFlow::is_awaiting_otp)
            >
                <p id="otp-info">{move || otp_info.get()}</p>
                <form id="verify-form" class="auth-page__form" on:submit=on_verify>
                    <label>
                        "One-time code"
                        <input
                            type="text"
                            name="otp"
                            id="otp-input"
                            maxlength="6"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            node_ref=otp_ref
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn--primary">
                        "Verify"
                    </button>
                </form>
                <StatusMessage line=otp_message/>
            </section>

            <p class="auth-page__alt">
                "No account? " <a href="/signup">"Sign up"</a>
            </p>
        </section>
    }
    .into_any()
}
