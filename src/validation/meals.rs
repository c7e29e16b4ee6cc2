use chrono::{DateTime, NaiveDate};

use crate::api::ApiError;
use crate::enums::meals::{CreateMealRequest, UpdateMealRequest};
use crate::validation::{empty_field, missing_properties};

/// A fully-validated creation payload.
#[derive(Debug, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub created_at: NaiveDate,
}

/// A validated partial update; `None` fields are left untouched.
#[derive(Debug, PartialEq)]
pub struct MealPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_on_diet: Option<bool>,
    pub created_at: Option<NaiveDate>,
}

pub fn validate_create(req: &CreateMealRequest) -> Result<MealDraft, ApiError> {
    match (&req.name, &req.description, req.is_on_diet, &req.created_at) {
        (Some(name), Some(description), Some(is_on_diet), Some(created_at)) => {
            if name.trim().is_empty() {
                return Err(empty_field("name"));
            }
            if description.trim().is_empty() {
                return Err(empty_field("description"));
            }
            let created_at = coerce_date(created_at).ok_or_else(|| {
                ApiError::BadRequest("created_at must be a valid date".to_string())
            })?;
            Ok(MealDraft {
                name: name.clone(),
                description: description.clone(),
                is_on_diet,
                created_at,
            })
        }
        _ => Err(missing_properties(missing_fields(req))),
    }
}

pub fn validate_update(req: &UpdateMealRequest) -> Result<MealPatch, ApiError> {
    // Presence first, emptiness second; the checks are independent.
    if req.name.is_none() && req.description.is_none() && req.is_on_diet.is_none() {
        return Err(ApiError::BadRequest(
            "body must have at least one property to update".to_string(),
        ));
    }
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(empty_field("name"));
        }
    }
    if let Some(description) = &req.description {
        if description.trim().is_empty() {
            return Err(empty_field("description"));
        }
    }
    let created_at = match &req.created_at {
        Some(raw) => Some(coerce_date(raw).ok_or_else(|| {
            ApiError::BadRequest("created_at must be a valid date".to_string())
        })?),
        None => None,
    };
    Ok(MealPatch {
        name: req.name.clone(),
        description: req.description.clone(),
        is_on_diet: req.is_on_diet,
        created_at,
    })
}

fn missing_fields(req: &CreateMealRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if req.name.is_none() {
        missing.push("name");
    }
    if req.description.is_none() {
        missing.push("description");
    }
    if req.is_on_diet.is_none() {
        missing.push("is_on_diet");
    }
    if req.created_at.is_none() {
        missing.push("created_at");
    }
    missing
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
pub(crate) fn coerce_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.parse::<NaiveDate>().ok()
}
