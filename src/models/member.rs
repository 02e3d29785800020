//! Library member records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Member name
    pub name: String,
    /// Contact email
    pub email: String,
    /// When the member joined. Set once at creation, immutable afterwards
    /// from the client's perspective.
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

/// Outbound body for member creation.
///
/// `joined_at` is stamped with the submission instant by the member form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

/// Outbound body for member update. Deliberately excludes `joinedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberUpdate {
    pub name: String,
    pub email: String,
}
