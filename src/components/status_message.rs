//! Transient status banner shown after signup/unregister attempts.

use leptos::prelude::*;

use crate::state::status::{StatusKind, StatusState};

/// Show a status message and schedule its auto-hide.
///
/// Each call supersedes the previous message; an older message's pending
/// hide timer is a no-op once a newer message has been shown.
pub fn show_status(status: RwSignal<StatusState>, text: String, kind: StatusKind) {
    let mut epoch = 0;
    status.update(|s| epoch = s.show(text, kind));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(
            crate::state::status::STATUS_HIDE_MS,
        ))
        .await;
        status.update(|s| s.hide(epoch));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = epoch;
    }
}

/// Status banner below the signup form.
///
/// Reads the shared `StatusState` context; hidden until a mutation attempt
/// sets a message.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let class = move || {
        let state = status.get();
        if !state.visible {
            return "status-message status-message--hidden";
        }
        match state.kind {
            StatusKind::Success => "status-message status-message--success",
            StatusKind::Error => "status-message status-message--error",
        }
    };

    view! {
        <div class=class role="status">
            {move || status.get().text}
        </div>
    }
}
