use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use chrono::{Duration, Utc};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // subject (email)
    pub exp: usize,
    pub iat: usize,
    pub user_id: String,
}

pub fn issue_token(
    secret: &str,
    ttl_hours: i64,
    email: &str,
    user_id: ObjectId,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires = Duration::try_hours(ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or(ErrorKind::InvalidToken)?;

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: expires.timestamp() as usize,
        user_id: user_id.to_hex(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "iat", "sub", "user_id"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authorize(req: &ServiceRequest) -> Result<Claims, ApiError> {
    let token = bearer_token(req)
        .ok_or_else(|| ApiError::Unauthorized("No authorization header".to_string()))?;

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        log::error!("AppState missing from application data");
        ApiError::Internal("Application state not configured".to_string())
    })?;

    verify_token(&state.settings.jwt_secret, token).map_err(|err| {
        log::debug!("Rejected token: {:?}", err.kind());
        ApiError::Unauthorized("Invalid token".to_string())
    })
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                let response = req.error_response(err).map_into_right_body();
                Box::pin(ready(Ok(response)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let user_id = ObjectId::new();
        let token = issue_token("secret", 1, "ada@example.com", user_id).unwrap();

        let claims = verify_token("secret", &token).unwrap();
        assert_eq!(claims.sub, "ada@example.com");
        assert_eq!(claims.user_id, user_id.to_hex());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token("secret", 1, "ada@example.com", ObjectId::new()).unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Well past the default 60 second leeway
        let token = issue_token("secret", -2, "ada@example.com", ObjectId::new()).unwrap();
        assert!(verify_token("secret", &token).is_err());
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let result = issue_token("secret", i64::MAX, "ada@example.com", ObjectId::new());
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::InvalidToken
        ));
    }
}
