use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::services::favorites_service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoritesQuery {
    pub city: Option<String>,
}

pub async fn list_favorites(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<FavoritesQuery>,
) -> Result<HttpResponse, ApiError> {
    let favorites =
        favorites_service::list_favorites(&state.db, user.user_id, query.city.as_deref()).await?;
    Ok(HttpResponse::Ok().json(favorites))
}

pub async fn add_favorite(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let favorite = favorites_service::add_favorite(&state.db, user.user_id, &path).await?;
    Ok(HttpResponse::Created().json(favorite))
}

pub async fn remove_favorite(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    favorites_service::remove_favorite(&state.db, user.user_id, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
