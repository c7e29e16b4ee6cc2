use crate::db::errors::RepositoryError;
use crate::db::DbConnection;
use crate::models::user::{NewUser, User, UserChanges};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl UserOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_user: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::users::dsl::*;

        diesel::insert_into(users)
            .values(&new_user)
            .get_result(conn.connection())
            .map_err(|e| match e {
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                    debug!(
                        "create_user: rejected duplicate email '{}'",
                        new_user.email
                    );
                    RepositoryError::Conflict(info.message().to_string())
                }
                other => {
                    error!(
                        "create_user: error inserting new user with email '{}': {}",
                        new_user.email, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    pub fn find_by_id(&self, id_to_get: &Uuid) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "find_by_id: failed to acquire DB connection for user '{}': {}",
                id_to_get, e
            );
            e
        })?;

        use crate::db::schema::users::dsl::*;
        users
            .find(id_to_get)
            .limit(1)
            .get_result::<User>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(id_to_get.to_string()),
                other => {
                    error!(
                        "find_by_id: error fetching user with id '{}': {}",
                        id_to_get, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    pub fn find_by_email(&self, email_addr: &str) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool)?;

        use crate::db::schema::users::dsl::*;
        users
            .filter(email.eq(email_addr))
            .limit(1)
            .get_result::<User>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(email_addr.to_string()),
                other => {
                    error!(
                        "find_by_email: error fetching user with email '{}': {}",
                        email_addr, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    // The credential value stays out of the logs on every path.
    pub fn find_by_session(&self, session_token: &Uuid) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("find_by_session: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::users::dsl::*;
        users
            .filter(session_id.eq(session_token))
            .limit(1)
            .get_result::<User>(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => {
                    debug!("find_by_session: session did not resolve to a user");
                    RepositoryError::NotFound("session".to_string())
                }
                other => {
                    error!("find_by_session: error resolving session: {}", other);
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    pub fn update_user(
        &self,
        id_to_update: &Uuid,
        changes: UserChanges,
    ) -> Result<User, RepositoryError> {
        if changes.is_empty() {
            // Nothing to set; an empty changeset is a diesel error, so just
            // hand back the stored row.
            return self.find_by_id(id_to_update);
        }

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_user: failed to acquire DB connection for user '{}': {}",
                id_to_update, e
            );
            e
        })?;

        use crate::db::schema::users::dsl::*;
        diesel::update(users.filter(user_id.eq(id_to_update)))
            .set(&changes)
            .get_result(conn.connection())
            .map_err(|e| match e {
                Error::NotFound => RepositoryError::NotFound(id_to_update.to_string()),
                Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                    debug!(
                        "update_user: rejected duplicate email for user '{}'",
                        id_to_update
                    );
                    RepositoryError::Conflict(info.message().to_string())
                }
                other => {
                    error!(
                        "update_user: error updating user with id '{}': {}",
                        id_to_update, other
                    );
                    RepositoryError::DatabaseError(other)
                }
            })
    }

    pub fn delete_user(&self, id_to_delete: &Uuid) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "delete_user: failed to acquire DB connection for user '{}': {}",
                id_to_delete, e
            );
            e
        })?;

        use crate::db::schema::users::dsl::*;
        diesel::delete(users.filter(user_id.eq(id_to_delete)))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "delete_user: error deleting user with id '{}': {}",
                    id_to_delete, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}
