//! REST API helpers for communicating with the activities backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Transport` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so fetch
//! failures degrade to a status message without crashing hydration. A non-2xx
//! response surfaces the server's `detail` text; transport failures carry the
//! underlying error for logging and fall back to a call-site generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::ActivityMap;
#[cfg(feature = "hydrate")]
use super::types::{ErrorResponse, MessageResponse};

/// Shown when the server rejects a request without a `detail` field.
pub const GENERIC_API_FAILURE: &str = "An error occurred";

/// Error from an activities API call, surfaced to the UI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server rejected the request ({status})")]
    Api { status: u16, detail: Option<String> },
}

impl ApiError {
    /// User-facing text for this error.
    ///
    /// Server-provided `detail` is shown verbatim; a detail-less rejection
    /// gets the generic fallback; transport failures get the caller's
    /// operation-specific fallback.
    pub fn user_message(&self, transport_fallback: &str) -> String {
        match self {
            Self::Transport(_) => transport_fallback.to_owned(),
            Self::Api { detail: Some(detail), .. } => detail.clone(),
            Self::Api { detail: None, .. } => GENERIC_API_FAILURE.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Characters escaped when embedding a value in a URL. Matches
/// `encodeURIComponent`: everything but alphanumerics and `-_.!~*'()`.
#[cfg(any(test, feature = "hydrate"))]
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[cfg(any(test, feature = "hydrate"))]
fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn unregister_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/participants?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Fetch the full activity roster from `GET /activities`.
///
/// # Errors
///
/// Returns `ApiError::Transport` on network/parse failure or on the server,
/// and `ApiError::Api` for a non-2xx response.
pub async fn fetch_activities() -> Result<ActivityMap, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Sign an email up for an activity via `POST /activities/{name}/signup`.
///
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns `ApiError::Api` with the server's `detail` for a rejected signup
/// (already signed up, unknown activity), `ApiError::Transport` otherwise.
pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: MessageResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Remove a participant from an activity via
/// `DELETE /activities/{name}/participants`.
///
/// Returns the server's confirmation message.
///
/// # Errors
///
/// Returns `ApiError::Api` with the server's `detail` when the activity or
/// participant is unknown, `ApiError::Transport` otherwise.
pub async fn unregister(activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = unregister_endpoint(activity, email);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let body: MessageResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Map a non-2xx response to `ApiError::Api`, keeping the `detail` text when
/// the error body parses.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Api { status, detail }
}
