use oauth2::basic::BasicClient;

use crate::config::Settings;
use crate::db::Db;
use crate::services::avatar_service::AvatarService;

/// Shared application state handed to every handler through `web::Data`.
pub struct AppState {
    pub db: Db,
    pub settings: Settings,
    pub google: Option<BasicClient>,
    pub avatars: Option<AvatarService>,
}

impl AppState {
    pub fn new(db: Db, settings: Settings) -> Self {
        Self {
            db,
            settings,
            google: None,
            avatars: None,
        }
    }

    pub fn with_google(mut self, google: Option<BasicClient>) -> Self {
        self.google = google;
        self
    }

    pub fn with_avatars(mut self, avatars: Option<AvatarService>) -> Self {
        self.avatars = avatars;
        self
    }
}
