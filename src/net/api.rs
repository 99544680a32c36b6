//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`Indeterminate`/error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so identity and
//! list fetch failures degrade UI behavior without crashing hydration. The
//! identity check is the one place a plain error is not enough: a 401 is an
//! authoritative "no session" answer, while a transport failure concludes
//! nothing, and the session store treats the two very differently.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Asset, DashboardStats, TableCount, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::parse_user_json;

/// Outcome of an identity lookup against `GET /api/me`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityCheck {
    /// The server confirmed an active session for this user.
    Confirmed(User),
    /// Authoritative "no session" answer (HTTP 401).
    Unauthenticated,
    /// Network failure, unexpected status, or unparseable body; nothing can
    /// be concluded about the session.
    Indeterminate,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_identity_response(status: u16, body: &str) -> IdentityCheck {
    match status {
        200..=299 => {
            parse_user_json(body).map_or(IdentityCheck::Indeterminate, IdentityCheck::Confirmed)
        }
        401 => IdentityCheck::Unauthenticated,
        _ => IdentityCheck::Indeterminate,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn setup_failed_message(status: u16) -> String {
    format!("setup failed: {status}")
}

/// Look up the current session identity via `GET /api/me`.
///
/// Never errors: every outcome is folded into an [`IdentityCheck`] so the
/// session store can apply its reconciliation rules.
pub async fn fetch_current_user() -> IdentityCheck {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/me").send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("identity check unreachable: {e}");
                return IdentityCheck::Indeterminate;
            }
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let check = classify_identity_response(status, &body);
        if check == IdentityCheck::Indeterminate {
            leptos::logging::warn!("identity check indeterminate (status {status})");
        }
        check
    }
    #[cfg(not(feature = "hydrate"))]
    {
        IdentityCheck::Indeterminate
    }
}

/// Exchange credentials for a session via `POST /api/login`.
///
/// # Errors
///
/// Returns an error string for transport failures, rejected credentials
/// (401), unexpected statuses, and malformed response payloads.
pub async fn login(username: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("invalid username or password".to_owned());
        }
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_user_json(&body).ok_or_else(|| "malformed login response".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Terminate the server-side session via `POST /api/logout`.
///
/// Best effort: a failed request is logged and otherwise ignored, since the
/// local session is cleared regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/logout").send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// Ask whether first-run setup is still required via `GET /api/setup`.
/// Returns `None` on any failure.
pub async fn fetch_setup_required() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct SetupStatus {
            required: bool,
        }
        let resp = gloo_net::http::Request::get("/api/setup").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body: SetupStatus = resp.json().await.ok()?;
        Some(body.required)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create the initial administrator account via `POST /api/setup`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// setup attempt (e.g. setup already completed).
pub async fn run_first_time_setup(
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "password": password,
            "email": email,
        });
        let resp = gloo_net::http::Request::post("/api/setup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(setup_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, email);
        Err("not available on server".to_owned())
    }
}

/// Fetch dashboard inventory counts from `/api/stats`.
/// Returns `None` on any failure.
pub async fn fetch_stats() -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/stats").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the asset list from `/api/assets`.
/// Returns `None` on any failure.
pub async fn fetch_assets() -> Option<Vec<Asset>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/assets").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Asset>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the user list from `/api/users` (administrator endpoint).
/// Returns `None` on any failure.
pub async fn fetch_users() -> Option<Vec<User>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch table row counts from `/api/admin/database` (administrator endpoint).
/// Returns `None` on any failure.
pub async fn fetch_database_tables() -> Option<Vec<TableCount>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/database")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<TableCount>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
