//! Signup page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status::StatusMessage;
use crate::net::types::SignupRequest;
use crate::state::session::SessionStore;
use crate::state::status::StatusLine;

/// Signup page — username, e-mail, and password.
///
/// Redirects to the dashboard when a session is already present.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    if session.is_authenticated() {
        let navigate = use_navigate();
        Effect::new(move || navigate("/", NavigateOptions::default()));
        return ().into_any();
    }

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(StatusLine::empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(StatusLine::empty());

        match SignupRequest::from_fields(&username.get(), &email.get(), &password.get()) {
            Err(text) => message.set(StatusLine::error(text)),
            Ok(req) => {
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::signup(&req).await {
                        Ok(()) => {
                            message.set(StatusLine::success(
                                "Account created. Check your email for the OTP after logging in.",
                            ));
                            username.set(String::new());
                            email.set(String::new());
                            password.set(String::new());
                        }
                        Err(err) => message.set(StatusLine::error(&err.to_string())),
                    }
                });
                #[cfg(not(feature = "csr"))]
                let _ = req;
            }
        }
    };

    view! {
        <section class="auth-page">
            <h1>"Create your account"</h1>
            <form id="signup-form" class="auth-page__form" on:submit=on_submit>
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
                    "Email"
                    <input
                        type="email"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                    "Sign up"
                </button>
            </form>
            <StatusMessage line=message/>
            <p class="auth-page__alt">
                "Already registered? " <a href="/login">"Log in"</a>
            </p>
        </section>
    }
    .into_any()
}
