use serde::Deserialize;
use utoipa::ToSchema;

// `created_at` arrives as a raw string and is coerced to a date by the
// validator, mirroring the loose representations clients send.
#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct CreateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_on_diet: Option<bool>,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Default, Debug, ToSchema)]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_on_diet: Option<bool>,
    pub created_at: Option<String>,
}
