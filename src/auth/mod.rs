pub mod extractors;
pub mod middleware;
pub mod principal;
pub mod session;

pub use extractors::CurrentUser;
pub use middleware::{SessionAuth, SESSION_COOKIE};
pub use principal::Principal;
pub use session::Session;
