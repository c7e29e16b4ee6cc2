use crate::api::ApiError;
use crate::enums::users::{CreateUserRequest, UpdateUserRequest};
use crate::validation::{empty_field, missing_properties};

#[derive(Debug, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

pub fn validate_create(req: &CreateUserRequest) -> Result<UserDraft, ApiError> {
    match (&req.username, &req.email) {
        (Some(username), Some(email)) => {
            if username.trim().is_empty() {
                return Err(empty_field("username"));
            }
            if !is_valid_email(email) {
                return Err(ApiError::BadRequest(
                    "body must send a valid email address".to_string(),
                ));
            }
            Ok(UserDraft {
                username: username.clone(),
                email: email.clone(),
            })
        }
        _ => Err(missing_properties(missing_fields(req))),
    }
}

// Updates accept any subset of fields; only the supplied ones are checked.
pub fn validate_update(req: &UpdateUserRequest) -> Result<(), ApiError> {
    if let Some(username) = &req.username {
        if username.trim().is_empty() {
            return Err(empty_field("username"));
        }
    }
    if let Some(email) = &req.email {
        if !is_valid_email(email) {
            return Err(ApiError::BadRequest(
                "body must send a valid email address".to_string(),
            ));
        }
    }
    Ok(())
}

fn missing_fields(req: &CreateUserRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if req.username.is_none() {
        missing.push("username");
    }
    if req.email.is_none() {
        missing.push("email");
    }
    missing
}

/// Shape check only; deliverability is not this service's concern.
pub(crate) fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !raw.chars().any(char::is_whitespace)
}
