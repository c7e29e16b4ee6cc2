//! Pure request validation: no I/O, every rule decided from the request
//! body alone. Handlers run these before touching the repository.

use crate::api::ApiError;

pub mod meals;
pub mod users;

// Missing fields are reported all at once, in schema declaration order.
pub(crate) fn missing_properties(fields: Vec<&'static str>) -> ApiError {
    ApiError::BadRequest(format!(
        "body must have required properties: {}",
        fields.join(", ")
    ))
}

pub(crate) fn empty_field(field: &str) -> ApiError {
    ApiError::BadRequest(format!("{} cannot be empty", field))
}
