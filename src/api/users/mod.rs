mod account;

use crate::db::UserOperations;
use account::*;
use actix_web::middleware::NormalizePath;
use actix_web::{guard, web};

pub fn config(cfg: &mut web::ServiceConfig, user_ops: &UserOperations) {
    cfg.service(
        web::scope("/users")
            .app_data(web::Data::new(user_ops.clone()))
            .wrap(NormalizePath::trim())
            .service(
                web::scope("")
                    .guard(guard::Header("content-type", "application/json"))
                    .service(create_user)
                    .service(update_user),
            )
            .service(web::scope("").service(get_user).service(delete_user)),
    );
}
