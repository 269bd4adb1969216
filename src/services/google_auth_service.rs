use oauth2::{
    basic::BasicClient, reqwest::async_http_client, AuthUrl, AuthorizationCode, ClientId,
    ClientSecret, CsrfToken, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::config::GoogleOAuthSettings;
use crate::error::ApiError;
use crate::models::google_auth::GoogleUserInfo;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

pub fn create_google_oauth_client(settings: &GoogleOAuthSettings) -> Result<BasicClient, url::ParseError> {
    Ok(BasicClient::new(
        ClientId::new(settings.client_id.clone()),
        Some(ClientSecret::new(settings.client_secret.clone())),
        AuthUrl::new(GOOGLE_AUTH_URL.to_string())?,
        Some(TokenUrl::new(GOOGLE_TOKEN_URL.to_string())?),
    )
    .set_redirect_uri(RedirectUrl::new(settings.redirect_uri.clone())?))
}

// Authorization URL plus the CSRF token the callback must echo back
pub fn get_google_auth_url(client: &BasicClient) -> (Url, CsrfToken) {
    client
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new("openid".to_string()))
        .add_scope(Scope::new("email".to_string()))
        .add_scope(Scope::new("profile".to_string()))
        .url()
}

pub async fn exchange_code_for_token(
    client: &BasicClient,
    code: AuthorizationCode,
) -> Result<String, ApiError> {
    client
        .exchange_code(code)
        .request_async(async_http_client)
        .await
        .map(|token| token.access_token().secret().clone())
        .map_err(|e| ApiError::Unauthorized(format!("Failed to exchange authorization code: {}", e)))
}

pub async fn get_google_user_info(access_token: &str) -> Result<GoogleUserInfo, ApiError> {
    let response = ReqwestClient::new()
        .get(GOOGLE_USERINFO_URL)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to request user info: {}", e)))?;

    if !response.status().is_success() {
        return Err(ApiError::Unauthorized(format!(
            "Google API returned error status: {}",
            response.status()
        )));
    }

    response
        .json::<GoogleUserInfo>()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to parse user info: {}", e)))
}
