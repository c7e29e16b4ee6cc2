mod metrics;
mod records;

use crate::auth::SessionAuth;
use crate::db::{MealOperations, UserOperations};
use actix_web::middleware::NormalizePath;
use actix_web::{guard, web};
use metrics::get_diet_metrics;
use records::*;

pub fn config(cfg: &mut web::ServiceConfig, meal_ops: &MealOperations, user_ops: &UserOperations) {
    cfg.service(
        web::scope("/meals")
            .app_data(web::Data::new(meal_ops.clone()))
            .wrap(SessionAuth::new(user_ops.clone()))
            .wrap(NormalizePath::trim())
            .service(get_diet_metrics)
            .service(
                web::scope("")
                    .guard(guard::Header("content-type", "application/json"))
                    .service(create_meal)
                    .service(update_meal),
            )
            .service(web::scope("").service(list_meals).service(delete_meal)),
    );
}
