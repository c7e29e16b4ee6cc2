use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use uuid::Uuid;

use crate::api::ApiError;
use crate::auth::principal::Principal;

/// Hands a handler the identity the session middleware resolved.
pub struct CurrentUser(Principal);

impl CurrentUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    #[allow(dead_code)]
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(principal) = req.extensions().get::<Principal>() {
            return ready(Ok(CurrentUser(principal.clone())));
        }
        ready(Err(ApiError::Unauthorized.into()))
    }
}
