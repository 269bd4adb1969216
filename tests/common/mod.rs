#![allow(dead_code)]

use actix_web::{web, App};
use mongodb::bson::{doc, oid::ObjectId};

use travel_planner_api::config::{GoogleOAuthSettings, Settings};
use travel_planner_api::db::Db;
use travel_planner_api::middleware::auth::issue_token;
use travel_planner_api::routes;
use travel_planner_api::services::google_auth_service::create_google_oauth_client;
use travel_planner_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_DATABASE: &str = "TravelPlannerTest";

pub fn test_settings() -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: 8080,
        mongo_uri: mongo_uri(),
        database_name: TEST_DATABASE.to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_hours: 1,
        frontend_url: "http://localhost:3000".to_string(),
        google: None,
        avatar_bucket: None,
        max_avatar_bytes: 1024,
    }
}

pub fn google_settings() -> GoogleOAuthSettings {
    GoogleOAuthSettings {
        client_id: "test-client".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://localhost:8080/api/auth/google/callback".to_string(),
    }
}

fn mongo_uri() -> String {
    std::env::var("MONGODB_URI").unwrap_or_else(|_| {
        "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000".to_string()
    })
}

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// The driver connects lazily, so routes that fail before touching
    /// the database work without a running MongoDB.
    pub async fn new() -> Self {
        Self::with_settings(test_settings()).await
    }

    pub async fn with_google() -> Self {
        let mut settings = test_settings();
        settings.google = Some(google_settings());
        Self::with_settings(settings).await
    }

    async fn with_settings(settings: Settings) -> Self {
        let client = mongodb::Client::with_uri_str(&settings.mongo_uri)
            .await
            .expect("valid MongoDB URI");
        let db = Db::new(std::sync::Arc::new(client), settings.database_name.clone());

        let google = settings
            .google
            .as_ref()
            .map(|google| create_google_oauth_client(google).expect("valid OAuth settings"));

        let state = AppState::new(db, settings).with_google(google);
        Self {
            state: web::Data::new(state),
        }
    }

    pub fn db(&self) -> &Db {
        &self.state.db
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(routes::configure)
    }
}

pub fn bearer(user_id: ObjectId) -> String {
    let token = issue_token(TEST_SECRET, 1, &get_test_email(), user_id).expect("token");
    format!("Bearer {}", token)
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}

pub fn get_test_password() -> String {
    "correct-horse-battery".to_string()
}

pub async fn cleanup_test_data(db: &Db) {
    let _ = db.users().delete_many(doc! {}).await;
    let _ = db.plans().delete_many(doc! {}).await;
}
