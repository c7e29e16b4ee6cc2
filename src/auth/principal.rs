use uuid::Uuid;

/// The authenticated identity attached to a request once its session
/// credential resolves. Lives only in the request extensions; never
/// persisted or logged.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}
