#[macro_use]
extern crate log;

pub mod api;
pub mod auth;
pub mod db;
pub mod enums;
pub mod models;
pub mod services;
pub mod test_utils;
pub mod validation;

use crate::db::{
    establish_connection_pool, run_db_migrations, MealOperations, StatusOperations, UserOperations,
};

#[derive(Clone)]
pub struct AppState {
    pub user_ops: UserOperations,
    pub meal_ops: MealOperations,
    pub status_ops: StatusOperations,
}

impl AppState {
    pub fn new(url: &str) -> Self {
        let db = establish_connection_pool(url);
        run_db_migrations(db.clone()).expect("Unable to run migrations");

        AppState {
            user_ops: UserOperations::new(db.clone()),
            meal_ops: MealOperations::new(db.clone()),
            status_ops: StatusOperations::new(db),
        }
    }
}
