use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;
use crate::middleware::auth::Claims;

/// The caller behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: ObjectId,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<Claims>()
            .ok_or_else(|| ApiError::Unauthorized("User not authenticated".to_string()))
            .and_then(|claims| {
                ObjectId::parse_str(&claims.user_id)
                    .map(|user_id| AuthenticatedUser {
                        user_id,
                        email: claims.sub.clone(),
                    })
                    .map_err(|_| ApiError::Unauthorized("Invalid user in token".to_string()))
            });

        ready(user.map_err(Error::from))
    }
}
