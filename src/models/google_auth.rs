use serde::{Deserialize, Serialize};

// Query parameters from the Google OAuth callback
#[derive(Debug, Deserialize)]
pub struct GoogleAuthCallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

// User info from Google
#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    pub verified_email: bool,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleUserInfo {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.given_name.clone())
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or_default().to_string())
    }
}
