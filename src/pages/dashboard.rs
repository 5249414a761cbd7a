//! Dashboard landing page, reachable only with a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status::StatusMessage;
use crate::state::session::SessionStore;
use crate::state::status::StatusLine;

/// Dashboard page — shows who is signed in and the logout control.
///
/// Redirects to the login page when no session is present; in that case
/// the one-shot banner is left untouched.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    if !session.is_authenticated() {
        let navigate = use_navigate();
        Effect::new(move || navigate("/login", NavigateOptions::default()));
        return ().into_any();
    }

    let display_name = {
        let stored = session.stored_username();
        if stored.is_empty() {
            "User".to_owned()
        } else {
            stored
        }
    };

    // Consume the post-login banner so it shows exactly once.
    let banner = RwSignal::new(StatusLine::empty());
    if let Some(text) = session.take_login_banner() {
        banner.set(StatusLine::success(&text));
    }

    let on_logout = {
        let session = session.clone();
        let navigate = use_navigate();
        move |_| {
            session.clear_session();
            session.clear_login_banner();
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Welcome, " <span id="dashboard-user">{display_name}</span></h1>
                <button id="logout-btn" type="button" class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <StatusMessage line=banner/>
            <p>"You are signed in."</p>
        </section>
    }
    .into_any()
}
