use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::api::{ApiError, ErrorBody};
use crate::auth::CurrentUser;
use crate::db::{MealOperations, RepositoryError};
use crate::enums::meals::{CreateMealRequest, UpdateMealRequest};
use crate::models::meal::{Meal, MealChanges, NewMeal};
use crate::validation;

fn parse_meal_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::BadRequest("params id must be a valid uuid".to_string()))
}

fn meal_not_found(e: RepositoryError) -> ApiError {
    match e {
        RepositoryError::NotFound(_) => ApiError::NotFound("meal not found".to_string()),
        other => other.into(),
    }
}

#[utoipa::path(
    get,
    tag = "Meals",
    path = "/meals",
    responses(
        (status = 200, description = "The authenticated user's meals, newest first", body = Vec<Meal>),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    ),
    summary = "List the authenticated user's meals"
)]
#[get("")]
pub(super) async fn list_meals(
    meal_ops: web::Data<MealOperations>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let history = meal_ops.list_by_owner(&user.user_id())?;
    Ok(HttpResponse::Ok().json(history))
}

#[utoipa::path(
    post,
    tag = "Meals",
    path = "/meals",
    request_body = CreateMealRequest,
    responses(
        (status = 200, description = "Meal registered", body = Meal),
        (status = 400, description = "Missing or empty fields", body = ErrorBody),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    ),
    summary = "Register a new meal"
)]
#[post("")]
pub(super) async fn create_meal(
    meal_ops: web::Data<MealOperations>,
    user: CurrentUser,
    req_data: web::Json<CreateMealRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = validation::meals::validate_create(&req_data)?;

    let meal = meal_ops.create_meal(NewMeal {
        meal_id: Uuid::new_v4(),
        user_id: user.user_id(),
        name: draft.name,
        description: draft.description,
        is_on_diet: draft.is_on_diet,
        created_at: draft.created_at,
    })?;
    debug!(
        "create_meal: meal '{}' registered for user '{}'",
        meal.meal_id, meal.user_id
    );
    Ok(HttpResponse::Ok().json(meal))
}

#[utoipa::path(
    put,
    tag = "Meals",
    path = "/meals/{id}",
    params(
        ("id", description = "Unique id of the meal to update"),
    ),
    request_body = UpdateMealRequest,
    responses(
        (status = 200, description = "Meal updated", body = Meal),
        (status = 400, description = "Invalid body or id", body = ErrorBody),
        (status = 401, description = "Missing or invalid session", body = ErrorBody),
        (status = 404, description = "Meal missing or owned by someone else", body = ErrorBody)
    ),
    summary = "Partially update one of the authenticated user's meals"
)]
#[put("/{id}")]
pub(super) async fn update_meal(
    meal_ops: web::Data<MealOperations>,
    user: CurrentUser,
    path: web::Path<String>,
    req_data: web::Json<UpdateMealRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_meal_id(&path)?;
    let patch = validation::meals::validate_update(&req_data)?;

    // Ownership guard: a meal that is not ours reads exactly like a meal
    // that does not exist.
    meal_ops
        .find_owned(&id, &user.user_id())
        .map_err(meal_not_found)?;

    let meal = meal_ops
        .update_meal(
            &id,
            &user.user_id(),
            MealChanges {
                name: patch.name,
                description: patch.description,
                is_on_diet: patch.is_on_diet,
                created_at: patch.created_at,
                updated_at: Utc::now(),
            },
        )
        .map_err(meal_not_found)?;
    debug!("update_meal: meal '{}' updated", meal.meal_id);
    Ok(HttpResponse::Ok().json(meal))
}

#[utoipa::path(
    delete,
    tag = "Meals",
    path = "/meals/{id}",
    params(
        ("id", description = "Unique id of the meal to delete"),
    ),
    responses(
        (status = 204, description = "Meal deleted"),
        (status = 400, description = "Id is not a valid uuid", body = ErrorBody),
        (status = 401, description = "Missing or invalid session", body = ErrorBody),
        (status = 404, description = "Meal missing or owned by someone else", body = ErrorBody)
    ),
    summary = "Delete one of the authenticated user's meals"
)]
#[delete("/{id}")]
pub(super) async fn delete_meal(
    meal_ops: web::Data<MealOperations>,
    user: CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_meal_id(&path)?;

    let deleted = meal_ops.delete_meal(&id, &user.user_id())?;
    if deleted == 0 {
        return Err(ApiError::NotFound("meal not found".to_string()));
    }
    debug!("delete_meal: meal '{}' deleted", id);
    Ok(HttpResponse::NoContent().finish())
}
