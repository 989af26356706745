//! Card component rendering one activity with its participant roster.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::status_message::show_status;
use crate::net::api::ApiError;
use crate::net::types::{Activity, ActivityMap};
#[cfg(feature = "hydrate")]
use crate::state::status::StatusKind;
use crate::state::status::StatusState;

/// Fallback when an unregister request fails before reaching the server.
#[cfg(feature = "hydrate")]
const UNREGISTER_TRANSPORT_FALLBACK: &str = "Failed to unregister. Please try again.";

/// A single activity card: description, schedule, remaining capacity, and
/// one roster row per participant with a removal control.
///
/// A successful removal shows the server's confirmation and refetches the
/// whole roster; a failed one only shows the error.
#[component]
pub fn ActivityCard(
    name: String,
    activity: Activity,
    activities: LocalResource<Result<ActivityMap, ApiError>>,
) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let spots_left = activity.spots_left();
    let activity_name = name.clone();

    let on_unregister = Callback::new(move |email: String| {
        #[cfg(feature = "hydrate")]
        {
            let activity_name = activity_name.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::unregister(&activity_name, &email).await {
                    Ok(message) => {
                        show_status(status, message, StatusKind::Success);
                        activities.refetch();
                    }
                    Err(err) => {
                        leptos::logging::error!("unregister failed: {err}");
                        show_status(
                            status,
                            err.user_message(UNREGISTER_TRANSPORT_FALLBACK),
                            StatusKind::Error,
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, &activity_name, &activities, &status);
        }
    });

    let roster = if activity.participants.is_empty() {
        view! { <p class="activity-card__empty">"No participants yet"</p> }.into_any()
    } else {
        view! {
            <ul class="activity-card__roster">
                {activity
                    .participants
                    .iter()
                    .map(|email| {
                        let email = email.clone();
                        let row_email = email.clone();
                        view! {
                            <li class="activity-card__participant">
                                <span class="activity-card__email">{email.clone()}</span>
                                <button
                                    class="activity-card__delete"
                                    title=format!("Unregister {email}")
                                    on:click=move |_| on_unregister.run(row_email.clone())
                                >
                                    "✖"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p class="activity-card__description">{activity.description.clone()}</p>
            <p class="activity-card__schedule">
                <strong>"Schedule: "</strong>
                {activity.schedule.clone()}
            </p>
            <p class="activity-card__availability">
                <strong>"Availability: "</strong>
                {format!("{spots_left} spots left")}
            </p>
            <div class="activity-card__participants">
                <h5>"Participants:"</h5>
                {roster}
            </div>
        </div>
    }
}
