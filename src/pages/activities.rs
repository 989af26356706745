//! Activities page listing activity cards with a signup form.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;

/// Shown in place of the list when the roster fetch fails.
const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Activities page — the full roster plus a signup form.
///
/// The roster lives in a single `LocalResource`; every successful mutation
/// calls `refetch()`, so an overlapping reload is superseded rather than
/// raced against the previous response.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = LocalResource::new(|| crate::net::api::fetch_activities());

    view! {
        <div class="activities-page">
            <header class="activities-page__header">
                <h1>"Mergington High School"</h1>
                <p>"Extracurricular Activities"</p>
            </header>

            <main class="activities-page__main">
                <section class="activities-page__list">
                    <h3>"Available Activities"</h3>
                    <Suspense fallback=move || view! { <p>"Loading activities..."</p> }>
                        {move || {
                            activities
                                .get()
                                .map(|result| match result {
                                    Ok(list) => {
                                        view! {
                                            <div class="activities-page__cards">
                                                {list
                                                    .into_iter()
                                                    .map(|(name, activity)| {
                                                        view! {
                                                            <ActivityCard
                                                                name=name
                                                                activity=activity
                                                                activities=activities
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Err(err) => {
                                        leptos::logging::error!("activities fetch failed: {err}");
                                        view! {
                                            <p class="activities-page__error">{LOAD_FAILURE_NOTICE}</p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <section class="activities-page__signup">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm activities=activities/>
                    <StatusMessage/>
                </section>
            </main>
        </div>
    }
}
