//! Signup form: email input, activity selector, submit.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::status_message::show_status;
use crate::net::api::ApiError;
use crate::net::types::ActivityMap;
#[cfg(feature = "hydrate")]
use crate::state::status::StatusKind;
use crate::state::status::StatusState;

/// Fallback when a signup request fails before reaching the server.
#[cfg(feature = "hydrate")]
const SIGNUP_TRANSPORT_FALLBACK: &str = "Failed to sign up. Please try again.";

/// A submission needs a non-blank email and a selected activity.
fn can_submit(email: &str, activity: &str) -> bool {
    !email.trim().is_empty() && !activity.is_empty()
}

/// Signup form with one selector option per activity name.
///
/// Submit suppresses the default form navigation. On success the fields are
/// cleared and the roster resource refetched; on failure the fields are left
/// untouched so the user can correct and retry.
#[component]
pub fn SignupForm(activities: LocalResource<Result<ActivityMap, ApiError>>) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let activity_value = selected.get();
        if !can_submit(&email_value, &activity_value) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let email_value = email_value.trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&activity_value, &email_value).await {
                    Ok(message) => {
                        show_status(status, message, StatusKind::Success);
                        email.set(String::new());
                        selected.set(String::new());
                        activities.refetch();
                    }
                    Err(err) => {
                        leptos::logging::error!("signup failed: {err}");
                        show_status(
                            status,
                            err.user_message(SIGNUP_TRANSPORT_FALLBACK),
                            StatusKind::Error,
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, activity_value, &activities, &status);
        }
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <label class="signup-form__label">
                "Email:"
                <input
                    class="signup-form__input"
                    type="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="signup-form__label">
                "Select Activity:"
                <select
                    class="signup-form__select"
                    required
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        activities
                            .get()
                            .and_then(Result::ok)
                            .map(|list| {
                                list.into_keys()
                                    .map(|name| {
                                        let label = name.clone();
                                        view! { <option value=name>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
            </label>
            <button class="signup-form__submit" type="submit">
                "Sign Up"
            </button>
        </form>
    }
}
