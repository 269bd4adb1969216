use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::{PasswordChange, ProfileUpdate};
use crate::services::account_service;
use crate::services::avatar_service::read_avatar;
use crate::state::AppState;

pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let profile = account_service::profile(&state.db, user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    input: web::Json<ProfileUpdate>,
) -> Result<HttpResponse, ApiError> {
    let profile = account_service::update_profile(&state.db, user.user_id, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn change_password(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    input: web::Json<PasswordChange>,
) -> Result<HttpResponse, ApiError> {
    account_service::change_password(&state.db, user.user_id, input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Password updated" })))
}

pub async fn upload_avatar(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let avatars = state
        .avatars
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Avatar storage".to_string()))?;

    let upload = read_avatar(payload, state.settings.max_avatar_bytes).await?;
    let url = avatars.upload(user.user_id, upload).await?;
    let profile = account_service::set_avatar_url(&state.db, user.user_id, &url).await?;

    Ok(HttpResponse::Ok().json(profile))
}
