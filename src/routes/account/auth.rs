use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{LoginRequest, SignupRequest};
use crate::services::account_service;
use crate::state::AppState;

pub async fn signup(
    state: web::Data<AppState>,
    input: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let token = account_service::signup(&state.db, &state.settings, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub async fn login(
    state: web::Data<AppState>,
    input: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let token = account_service::login(&state.db, &state.settings, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub async fn session(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let profile = account_service::profile(&state.db, user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}
