use crate::db::errors::RepositoryError;
use crate::db::DbConnection;
use crate::models::meal::{Meal, MealChanges, NewMeal};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use uuid::Uuid;

#[derive(Clone)]
pub struct MealOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl MealOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_meal(&self, new_meal: NewMeal) -> Result<Meal, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_meal: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::meals::dsl::*;

        diesel::insert_into(meals)
            .values(&new_meal)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_meal: error inserting meal for user '{}': {}",
                    new_meal.user_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Ownership-scoped lookup: filters by meal id AND owner in one query, so
    /// a meal that exists but belongs to someone else is indistinguishable
    /// from one that does not exist.
    pub fn find_owned(&self, meal_to_find: &Uuid, owner: &Uuid) -> Result<Meal, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "find_owned: failed to acquire DB connection for meal '{}': {}",
                meal_to_find, e
            );
            e
        })?;

        use crate::db::schema::meals::dsl::*;
        meals
            .filter(meal_id.eq(meal_to_find))
            .filter(user_id.eq(owner))
            .first::<Meal>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(meal_to_find.to_string()),
                other => {
                    error!(
                        "find_owned: error fetching meal with id '{}': {}",
                        meal_to_find, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    pub fn list_by_owner(&self, owner: &Uuid) -> Result<Vec<Meal>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "list_by_owner: failed to acquire DB connection for user '{}': {}",
                owner, e
            );
            e
        })?;

        use crate::db::schema::meals::dsl::*;
        meals
            .filter(user_id.eq(owner))
            .order(created_at.desc())
            .load::<Meal>(conn.connection())
            .map_err(|e| {
                error!(
                    "list_by_owner: error loading meals for user '{}': {}",
                    owner, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    // The update is also scoped by owner: if the row vanished between the
    // ownership check and this statement, diesel reports NotFound instead of
    // touching another user's data.
    pub fn update_meal(
        &self,
        meal_to_update: &Uuid,
        owner: &Uuid,
        changes: MealChanges,
    ) -> Result<Meal, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_meal: failed to acquire DB connection for meal '{}': {}",
                meal_to_update, e
            );
            e
        })?;

        use crate::db::schema::meals::dsl::*;
        diesel::update(
            meals
                .filter(meal_id.eq(meal_to_update))
                .filter(user_id.eq(owner)),
        )
        .set(&changes)
        .get_result(conn.connection())
        .map_err(|e| match e {
            Error::NotFound => RepositoryError::NotFound(meal_to_update.to_string()),
            other => {
                error!(
                    "update_meal: error updating meal with id '{}': {}",
                    meal_to_update, other
                );
                RepositoryError::DatabaseError(other)
            }
        })
    }

    pub fn delete_meal(
        &self,
        meal_to_delete: &Uuid,
        owner: &Uuid,
    ) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "delete_meal: failed to acquire DB connection for meal '{}': {}",
                meal_to_delete, e
            );
            e
        })?;

        use crate::db::schema::meals::dsl::*;
        diesel::delete(
            meals
                .filter(meal_id.eq(meal_to_delete))
                .filter(user_id.eq(owner)),
        )
        .execute(conn.connection())
        .map_err(|e| {
            error!(
                "delete_meal: error deleting meal with id '{}': {}",
                meal_to_delete, e
            );
            RepositoryError::DatabaseError(e)
        })
    }
}
