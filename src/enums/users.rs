use crate::models::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Every field is optional so the validator can report which ones are absent
// instead of failing deserialization outright.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}
