//! Payload DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde stays the single
//! parsing layer. Identity payloads are additionally validated: a user
//! without a non-empty `id` and `username` is treated as absent everywhere,
//! so a truncated or hand-edited cached value can never half-authenticate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role value that marks an administrator account.
const ADMIN_ROLE: &str = "admin";

/// Username treated as an implicit administrator regardless of role.
const RESERVED_ADMIN_USERNAME: &str = "admin";

/// An authenticated user as returned by `/api/me` and `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Login name; unique across the installation.
    pub username: String,
    /// Given name, if set on the account.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name, if set on the account.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Contact email, if set on the account.
    #[serde(default)]
    pub email: Option<String>,
    /// Organizational department, if set on the account.
    #[serde(default)]
    pub department: Option<String>,
    /// Role name (e.g. `"admin"`, `"user"`). Absent on older accounts.
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Whether this user holds the required `id` + `username` fields.
    ///
    /// Cached or remote payloads failing this are discarded rather than
    /// published as a session identity.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.username.is_empty()
    }

    /// Whether this user may see administrator navigation and pages.
    ///
    /// Two conditions are honored: an explicit `admin` role, or the reserved
    /// `admin` username. The reserved-username path exists for bootstrap
    /// accounts created before roles were assigned; removing it would lock
    /// those installations out of administration.
    pub fn is_administrator(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE) || self.username == RESERVED_ADMIN_USERNAME
    }

    /// Human-facing name: "First Last" when present, otherwise the username.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            _ => self.username.clone(),
        }
    }
}

/// Identity payloads arrive either as the user object itself or wrapped in
/// a `{"user": ...}` envelope depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserPayload {
    Direct(User),
    Envelope { user: User },
}

/// Parse an identity payload, accepting both wire shapes.
///
/// Returns `None` for malformed JSON and for structurally valid users that
/// fail the `id`/`username` invariant.
pub fn parse_user_json(raw: &str) -> Option<User> {
    let user = match serde_json::from_str::<UserPayload>(raw).ok()? {
        UserPayload::Direct(user) | UserPayload::Envelope { user } => user,
    };
    user.is_valid().then_some(user)
}

/// Inventory counts shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Tracked hardware assets.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub assets: i64,
    /// Registered user accounts.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub users: i64,
    /// Software licenses under management.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub licenses: i64,
    /// Network equipment records.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub equipment: i64,
}

/// A hardware asset row for list views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable asset identifier.
    pub id: String,
    /// Inventory tag printed on the device.
    pub asset_tag: String,
    /// Display name.
    pub name: String,
    /// Hardware model, if recorded.
    #[serde(default)]
    pub model: Option<String>,
    /// Lifecycle status (e.g. `"deployed"`, `"in storage"`).
    #[serde(default)]
    pub status: Option<String>,
    /// Username of the current holder, if checked out.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Row count for one backend table, shown on the database admin page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCount {
    /// Table name.
    pub name: String,
    /// Current row count.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub rows: i64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
