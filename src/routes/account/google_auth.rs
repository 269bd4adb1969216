use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    http::header,
    web, HttpRequest, HttpResponse,
};
use oauth2::AuthorizationCode;

use crate::error::ApiError;
use crate::models::google_auth::GoogleAuthCallbackParams;
use crate::services::account_service;
use crate::services::google_auth_service::{
    exchange_code_for_token, get_google_auth_url, get_google_user_info,
};
use crate::state::AppState;

pub const STATE_COOKIE: &str = "google_oauth_state";

fn google_client(state: &AppState) -> Result<&oauth2::basic::BasicClient, ApiError> {
    state
        .google
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Google sign-in".to_string()))
}

pub async fn google_auth_init(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let client = google_client(&state)?;
    let (auth_url, csrf_token) = get_google_auth_url(client);

    let cookie = Cookie::build(STATE_COOKIE, csrf_token.secret().clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(10))
        .finish();

    log::debug!("Redirecting to Google consent screen");
    Ok(HttpResponse::Found()
        .cookie(cookie)
        .insert_header((header::LOCATION, auth_url.to_string()))
        .finish())
}

pub async fn google_auth_callback(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<GoogleAuthCallbackParams>,
) -> Result<HttpResponse, ApiError> {
    let client = google_client(&state)?;
    let params = query.into_inner();

    if let Some(error) = params.error {
        log::warn!("Google OAuth error: {}", error);
        return Err(ApiError::BadRequest(format!("OAuth error: {}", error)));
    }

    let expected = req.cookie(STATE_COOKIE).map(|cookie| cookie.value().to_string());
    match (&expected, &params.state) {
        (Some(expected), Some(received)) if expected == received => {}
        _ => return Err(ApiError::BadRequest("OAuth state mismatch".to_string())),
    }

    let code = params
        .code
        .ok_or_else(|| ApiError::BadRequest("Missing authorization code".to_string()))?;

    let access_token = exchange_code_for_token(client, AuthorizationCode::new(code)).await?;
    let user_info = get_google_user_info(&access_token).await?;
    let token = account_service::sign_in_with_google(&state.db, &state.settings, user_info).await?;

    let redirect_url = format!(
        "{}/?token={}",
        state.settings.frontend_url.trim_end_matches('/'),
        token.auth_token
    );

    let mut clear = Cookie::build(STATE_COOKIE, "").path("/").finish();
    clear.make_removal();

    Ok(HttpResponse::Found()
        .cookie(clear)
        .insert_header((header::LOCATION, redirect_url))
        .finish())
}
