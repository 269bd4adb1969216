use std::env;

use thiserror::Error;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE_NAME: &str = "TravelPlanner";
const TOKEN_TTL_HOURS: i64 = 24;
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;
const FRONTEND_URL: &str = "http://localhost:3000";
const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub frontend_url: String,
    pub google: Option<GoogleOAuthSettings>,
    pub avatar_bucket: Option<String>,
    pub max_avatar_bytes: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = get("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(PORT);

        let token_ttl_hours = match get("TOKEN_TTL_HOURS") {
            Some(value) => match value.parse::<i64>() {
                Ok(hours) if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) => hours,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TOKEN_TTL_HOURS",
                        value,
                    })
                }
            },
            None => TOKEN_TTL_HOURS,
        };

        let max_avatar_bytes = match get("MAX_AVATAR_BYTES") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "MAX_AVATAR_BYTES",
                value,
            })?,
            None => MAX_AVATAR_BYTES,
        };

        let google = match (
            get("GOOGLE_CLIENT_ID"),
            get("GOOGLE_CLIENT_SECRET"),
            get("GOOGLE_REDIRECT_URI"),
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => {
                Some(GoogleOAuthSettings {
                    client_id,
                    client_secret,
                    redirect_uri,
                })
            }
            _ => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            mongo_uri: get("MONGODB_URI").ok_or(ConfigError::Missing("MONGODB_URI"))?,
            database_name: get("DATABASE_NAME").unwrap_or_else(|| DATABASE_NAME.to_string()),
            jwt_secret: get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            token_ttl_hours,
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| FRONTEND_URL.to_string()),
            google,
            avatar_bucket: get("AVATAR_BUCKET"),
            max_avatar_bytes,
        })
    }
}
