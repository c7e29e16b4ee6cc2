use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Queryable, Debug, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::users)]
#[diesel(primary_key(user_id))]
pub struct User {
    #[serde(rename = "id")]
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::db::schema::users)]
pub struct NewUser {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub username: String,
    pub email: String,
}

impl NewUser {
    /// Mints the account ids: the session credential is issued exactly once
    /// here and is never rotated afterwards.
    pub fn register(username: String, email: String) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            username,
            email,
        }
    }
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = crate::db::schema::users)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}
