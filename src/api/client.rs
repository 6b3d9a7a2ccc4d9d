//! HTTP API Client
//!
//! Functions for communicating with the Moj Termin REST API. Each remote
//! operation is wrapped by exactly one async function returning
//! `Result<T, ApiError>`; refreshing any listing after a mutation is the
//! caller's responsibility.

use chrono::{DateTime, Utc};
use gloo_net::http::{Request, Response};

use crate::api::error::ApiError;
use crate::state::session::SessionUser;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Local storage key overriding the API base URL
const API_URL_KEY: &str = "termin_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_api_base(&url)
}

fn normalize_api_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

/// A practitioner exposed by the API.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Doctor {
    pub id: i64,
    pub full_name: String,
}

/// One open appointment instant for a doctor.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub id: i64,
    pub free_slot: DateTime<Utc>,
    #[serde(default)]
    pub doctor_id: i64,
}

/// A user-to-doctor notification subscription.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Subscription {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub doctor_id: i64,
}

/// Successful login payload: the bearer token and the session user.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, serde::Deserialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Map a non-success response to `ApiError::Status`, keeping the server's
/// `detail` message when the body carries one.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_default();
    ApiError::Status { status, message }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Build the URL-encoded login form body.
fn login_form_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// ============ API Functions ============

/// Log in with username and password (form-encoded, OAuth2 style)
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&format!("{}/users/login", get_api_base()))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(login_form_body(username, password))
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Register a new account, returning the server's confirmation message
pub async fn register(email: &str, username: &str, password: &str) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        email: String,
        username: String,
        password: String,
    }

    let response = Request::post(&format!("{}/users/register", get_api_base()))
        .json(&RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    let result: MessageResponse = response.json().await.map_err(decode)?;
    Ok(result.message)
}

/// Fetch all doctors
pub async fn fetch_doctors() -> Result<Vec<Doctor>, ApiError> {
    let response = Request::get(&format!("{}/doctors/all", get_api_base()))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Fetch a single doctor by id
pub async fn fetch_doctor(id: i64) -> Result<Doctor, ApiError> {
    let response = Request::get(&format!("{}/doctors/{}", get_api_base(), id))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Add a doctor to the directory by its upstream id
pub async fn add_doctor(doctor_id: i64) -> Result<Doctor, ApiError> {
    #[derive(serde::Serialize)]
    struct AddDoctorRequest {
        doctor_id: i64,
    }

    let response = Request::post(&format!("{}/doctors/add", get_api_base()))
        .json(&AddDoctorRequest { doctor_id })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Fetch the available time slots for a doctor
pub async fn fetch_timeslots(doctor_id: i64) -> Result<Vec<TimeSlot>, ApiError> {
    let response = Request::get(&format!("{}/timeslots/doctor/{}", get_api_base(), doctor_id))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Fetch the logged-in user's subscriptions
pub async fn fetch_my_subscriptions(token: &str) -> Result<Vec<Subscription>, ApiError> {
    let response = Request::get(&format!("{}/subscriptions/user/me", get_api_base()))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Subscribe the logged-in user to a doctor's openings
pub async fn subscribe(token: &str, doctor_id: i64) -> Result<Subscription, ApiError> {
    let response = Request::post(&format!(
        "{}/subscriptions/subscribe/{}",
        get_api_base(),
        doctor_id
    ))
    .header("Authorization", &bearer(token))
    .send()
    .await
    .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await.map_err(decode)
}

/// Remove a subscription by id
pub async fn unsubscribe(token: &str, subscription_id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&format!(
        "{}/subscriptions/unsubscribe/{}",
        get_api_base(),
        subscription_id
    ))
    .header("Authorization", &bearer(token))
    .send()
    .await
    .map_err(network)?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_base_trims_trailing_slash() {
        assert_eq!(normalize_api_base("http://localhost:8000/api/"), "http://localhost:8000/api");
        assert_eq!(normalize_api_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }

    #[test]
    fn test_login_form_body_escapes_reserved_characters() {
        assert_eq!(login_form_body("john", "123456"), "username=john&password=123456");
        assert_eq!(
            login_form_body("jo hn", "p@ss&word"),
            "username=jo%20hn&password=p%40ss%26word"
        );
    }

    #[test]
    fn test_login_response_decodes() {
        let parsed: LoginResponse = serde_json::from_str(
            r#"{"token":"fake-token","user":{"id":1,"username":"john"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.token, "fake-token");
        assert_eq!(parsed.user, SessionUser { id: 1, username: "john".to_string() });
    }

    #[test]
    fn test_timeslot_decodes_without_ids() {
        let parsed: Vec<TimeSlot> =
            serde_json::from_str(r#"[{"free_slot":"2025-01-10T14:30:00Z"}]"#).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, 0);
        assert_eq!(parsed[0].doctor_id, 0);
        assert_eq!(parsed[0].free_slot.to_rfc3339(), "2025-01-10T14:30:00+00:00");
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let with_detail: ErrorBody = serde_json::from_str(r#"{"detail":"Doctor not found"}"#).unwrap();
        assert_eq!(with_detail.detail.as_deref(), Some("Doctor not found"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }
}
