use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::api::{ApiError, ErrorBody};
use crate::db::{RepositoryError, UserOperations};
use crate::enums::users::{CreateUserRequest, UpdateUserRequest, UserEnvelope};
use crate::models::user::{NewUser, User, UserChanges};
use crate::validation;

const DUPLICATE_EMAIL: &str = "email address is invalid";

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::BadRequest("params id must be a valid UUID".to_string()))
}

#[utoipa::path(
    post,
    tag = "Users",
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User account created; the response carries the session credential", body = User),
        (status = 400, description = "Missing or invalid field, or duplicate email", body = ErrorBody)
    ),
    summary = "Register a new user account"
)]
#[post("")]
pub(super) async fn create_user(
    user_ops: web::Data<UserOperations>,
    req_data: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = validation::users::validate_create(&req_data)?;

    // Advisory pre-check; the unique constraint below is the real guarantee.
    match user_ops.find_by_email(&draft.email) {
        Ok(_) => {
            debug!("create_user: duplicate email registration rejected");
            return Err(ApiError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }
        Err(RepositoryError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    match user_ops.create_user(NewUser::register(draft.username, draft.email)) {
        Ok(user) => {
            debug!("create_user: account '{}' created", user.user_id);
            Ok(HttpResponse::Created().json(user))
        }
        Err(RepositoryError::Conflict(_)) => Err(ApiError::BadRequest(DUPLICATE_EMAIL.to_string())),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get,
    tag = "Users",
    path = "/users/{id}",
    params(
        ("id", description = "Unique id of the user to fetch"),
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 400, description = "Id is not a valid UUID", body = ErrorBody),
        (status = 404, description = "No user with that id", body = ErrorBody)
    ),
    summary = "Fetch a user account by id"
)]
#[get("/{id}")]
pub(super) async fn get_user(
    user_ops: web::Data<UserOperations>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;

    match user_ops.find_by_id(&id) {
        Ok(user) => Ok(HttpResponse::Ok().json(UserEnvelope { user })),
        Err(RepositoryError::NotFound(_)) => Err(ApiError::NotFound("user not found".to_string())),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    put,
    tag = "Users",
    path = "/users/{id}",
    params(
        ("id", description = "Unique id of the user to update"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid body or id, or duplicate email", body = ErrorBody),
        (status = 404, description = "No user with that id", body = ErrorBody)
    ),
    summary = "Update a user account"
)]
#[put("/{id}")]
pub(super) async fn update_user(
    user_ops: web::Data<UserOperations>,
    path: web::Path<String>,
    req_data: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;
    validation::users::validate_update(&req_data)?;

    // Uniqueness is re-checked on every email change, including a write of
    // the address already stored on this account.
    if let Some(new_email) = &req_data.email {
        match user_ops.find_by_email(new_email) {
            Ok(_) => {
                debug!("update_user: duplicate email update rejected for '{}'", id);
                return Err(ApiError::BadRequest(DUPLICATE_EMAIL.to_string()));
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let changes = UserChanges {
        username: req_data.username.clone(),
        email: req_data.email.clone(),
    };

    match user_ops.update_user(&id, changes) {
        Ok(user) => {
            debug!("update_user: account '{}' updated", user.user_id);
            Ok(HttpResponse::Ok().json(user))
        }
        Err(RepositoryError::NotFound(_)) => Err(ApiError::NotFound("user not found".to_string())),
        Err(RepositoryError::Conflict(_)) => Err(ApiError::BadRequest(DUPLICATE_EMAIL.to_string())),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete,
    tag = "Users",
    path = "/users/{id}",
    params(
        ("id", description = "Unique id of the user to delete"),
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not a valid UUID", body = ErrorBody),
        (status = 404, description = "No user with that id", body = ErrorBody)
    ),
    summary = "Delete a user account"
)]
#[delete("/{id}")]
pub(super) async fn delete_user(
    user_ops: web::Data<UserOperations>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path)?;

    let deleted = user_ops.delete_user(&id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("user not found".to_string()));
    }
    debug!("delete_user: account '{}' deleted", id);
    Ok(HttpResponse::NoContent().finish())
}
