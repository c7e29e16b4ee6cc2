use actix_web::{get, web, HttpResponse};

use crate::api::{ApiError, ErrorBody};
use crate::db::StatusOperations;
use crate::enums::common::StatusResponse;

#[utoipa::path(
    get,
    tag = "Status",
    path = "/status",
    responses(
        (status = 200, description = "Service alive and storage reachable", body = StatusResponse),
        (status = 500, description = "Storage connectivity check failed", body = ErrorBody)
    ),
    summary = "Liveness and storage connectivity snapshot"
)]
#[get("/status")]
pub(super) async fn get_status(
    status_ops: web::Data<StatusOperations>,
) -> Result<HttpResponse, ApiError> {
    match status_ops.ping() {
        Ok(()) => Ok(HttpResponse::Ok().json(StatusResponse {
            status: "ok".to_string(),
            database: "ok".to_string(),
        })),
        Err(e) => {
            error!("get_status: storage check failed: {}", e);
            Err(ApiError::Internal)
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig, status_ops: &StatusOperations) {
    cfg.app_data(web::Data::new(status_ops.clone()))
        .service(get_status);
}
