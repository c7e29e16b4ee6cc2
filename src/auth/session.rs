use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A resolved session credential. `expires_at` is reserved: credentials are
/// currently issued once at registration and never expire or rotate.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: Uuid,
    pub user_id: Uuid,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn resolved(token: Uuid, user_id: Uuid) -> Self {
        Self {
            token,
            user_id,
            expires_at: None,
        }
    }
}

/// Format check for an inbound credential; anything that is not UUID-shaped
/// is treated as no credential at all.
pub fn parse_token(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
