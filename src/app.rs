//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Provides the session store context and sets up client-side routing.
/// The route set is closed: signup, login, and the dashboard at the root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::for_page());

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Authgate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
