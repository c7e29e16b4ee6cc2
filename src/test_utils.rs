use crate::db::{run_db_migrations, DbConnection, RepositoryError};
use crate::models::meal::NewMeal;
use crate::models::user::NewUser;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use uuid::Uuid;

// Fixture strategy:
// - Tests create their own users with per-test unique emails, so suites can
//   run in parallel against one shared database without resets.
// - `reset_db` is only for wiping a pre-provisioned DATABASE_URL database
//   once at suite startup.

/// Small pool for test use; suites run many of these side by side.
pub fn build_test_pool(database_url: &str) -> Pool<ConnectionManager<PgConnection>> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Unable to build test pool");
    run_db_migrations(pool.clone()).expect("Unable to run migrations");
    pool
}

pub fn reset_db(pool: &Pool<ConnectionManager<PgConnection>>) -> Result<(), RepositoryError> {
    let mut conn = DbConnection::new(pool)?;
    diesel::sql_query("TRUNCATE TABLE meals, users RESTART IDENTITY CASCADE")
        .execute(conn.connection())
        .map_err(RepositoryError::DatabaseError)?;
    Ok(())
}

pub struct TestFixtures {
    pub user_id: Uuid,
    pub session_id: Uuid,
    pub other_user_id: Uuid,
    pub other_session_id: Uuid,
}

pub fn seed_two_users(
    pool: &Pool<ConnectionManager<PgConnection>>,
    email_prefix: &str,
) -> Result<TestFixtures, RepositoryError> {
    let mut conn = DbConnection::new(pool)?;

    let (user_id, session_id) = insert_user(
        conn.connection(),
        "User One",
        &format!("{}_one@example.com", email_prefix),
    )?;
    let (other_user_id, other_session_id) = insert_user(
        conn.connection(),
        "User Two",
        &format!("{}_two@example.com", email_prefix),
    )?;

    Ok(TestFixtures {
        user_id,
        session_id,
        other_user_id,
        other_session_id,
    })
}

pub fn insert_user(
    conn: &mut PgConnection,
    username_val: &str,
    email_val: &str,
) -> Result<(Uuid, Uuid), RepositoryError> {
    use crate::db::schema::users::dsl::*;

    let new_user = NewUser::register(username_val.to_string(), email_val.to_string());

    diesel::insert_into(users)
        .values(&new_user)
        .returning((user_id, session_id))
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn insert_meal(
    conn: &mut PgConnection,
    owner: Uuid,
    name_val: &str,
    description_val: &str,
    is_on_diet_val: bool,
    created_at_val: NaiveDate,
) -> Result<Uuid, RepositoryError> {
    use crate::db::schema::meals::dsl::*;

    let new_meal = NewMeal {
        meal_id: Uuid::new_v4(),
        user_id: owner,
        name: name_val.to_string(),
        description: description_val.to_string(),
        is_on_diet: is_on_diet_val,
        created_at: created_at_val,
    };

    diesel::insert_into(meals)
        .values(&new_meal)
        .returning(meal_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}
