use actix_web::{get, web, HttpResponse};

use crate::api::{ApiError, ErrorBody};
use crate::auth::CurrentUser;
use crate::db::MealOperations;
use crate::services::metrics::{self, DietMetrics};

#[utoipa::path(
    get,
    tag = "Meals",
    path = "/meals/metrics",
    responses(
        (status = 200, description = "Registration counts and best on-diet sequence", body = DietMetrics),
        (status = 401, description = "Missing or invalid session", body = ErrorBody)
    ),
    summary = "Diet metrics over the authenticated user's full history"
)]
#[get("/metrics")]
pub(super) async fn get_diet_metrics(
    meal_ops: web::Data<MealOperations>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let history = meal_ops.list_by_owner(&user.user_id())?;
    Ok(HttpResponse::Ok().json(metrics::compute(&history)))
}
