use crate::db::errors::RepositoryError;
use crate::db::DbConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

#[derive(Clone)]
pub struct StatusOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl StatusOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    /// Round-trips a trivial statement through the pool to prove storage is
    /// reachable.
    pub fn ping(&self) -> Result<(), RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("ping: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::sql_query("SELECT 1")
            .execute(conn.connection())
            .map_err(|e| {
                error!("ping: storage connectivity check failed: {}", e);
                RepositoryError::DatabaseError(e)
            })?;
        Ok(())
    }
}
