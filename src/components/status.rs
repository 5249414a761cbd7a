//! Inline status message shared by every page.

use leptos::prelude::*;

use crate::state::status::StatusLine;

/// Renders a [`StatusLine`] signal as an inline message paragraph.
///
/// The element is always present; an empty line renders hidden, so
/// clearing a message and showing one go through the same signal.
#[component]
pub fn StatusMessage(line: RwSignal<StatusLine>) -> impl IntoView {
    view! {
        <p class=move || line.with(StatusLine::class_attr)>
            {move || line.with(|l| l.text().to_owned())}
        </p>
    }
}
