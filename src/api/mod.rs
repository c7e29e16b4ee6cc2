mod errors;
pub mod meals;
mod status;
pub mod users;

use actix_web::{get, web, HttpResponse, Responder};

pub use errors::{ApiError, ErrorBody};
pub(crate) use errors::json_error_handler;

use crate::AppState;

#[get("/")]
async fn root_endpoint() -> impl Responder {
    HttpResponse::Ok().body("Server up!")
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(root_endpoint)
        .configure(|cfg| status::config(cfg, &state.status_ops))
        .configure(|cfg| users::config(cfg, &state.user_ops))
        .configure(|cfg| meals::config(cfg, &state.meal_ops, &state.user_ops));
}
