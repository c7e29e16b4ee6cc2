use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures::future::LocalBoxFuture;

use crate::api::ApiError;
use crate::auth::session::{parse_token, Session};
use crate::auth::Principal;
use crate::db::{RepositoryError, UserOperations};

pub const SESSION_COOKIE: &str = "sessionId";

#[derive(Clone)]
pub struct SessionAuth {
    user_ops: UserOperations,
}

impl SessionAuth {
    pub fn new(user_ops: UserOperations) -> Self {
        Self { user_ops }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            user_ops: self.user_ops.clone(),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    user_ops: UserOperations,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Absent, malformed and unknown credentials all collapse into the
        // same 401 so a caller cannot probe which check failed.
        let token = match req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| parse_token(cookie.value()))
        {
            Some(token) => token,
            None => return Box::pin(async { Err(ApiError::Unauthorized.into()) }),
        };

        let user_ops = self.user_ops.clone();
        let srv = self.service.clone();
        Box::pin(async move {
            let lookup = web::block(move || user_ops.find_by_session(&token)).await;
            match lookup {
                Ok(Ok(user)) => {
                    req.extensions_mut().insert(Principal {
                        user_id: user.user_id,
                        username: user.username,
                        email: user.email,
                    });
                    req.extensions_mut()
                        .insert(Session::resolved(token, user.user_id));
                    srv.call(req).await
                }
                Ok(Err(RepositoryError::NotFound(_))) => Err(ApiError::Unauthorized.into()),
                Ok(Err(e)) => Err(ApiError::from(e).into()),
                Err(e) => {
                    error!("session lookup did not complete: {}", e);
                    Err(ApiError::Internal.into())
                }
            }
        })
    }
}
