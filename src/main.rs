use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_planner_api::config::Settings;
use travel_planner_api::db::{mongo::create_mongo_client, Db};
use travel_planner_api::routes;
use travel_planner_api::services::avatar_service::AvatarService;
use travel_planner_api::services::google_auth_service::create_google_oauth_client;
use travel_planner_api::state::AppState;

fn io_error(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let settings = Settings::from_env().map_err(|e| io_error(e.to_string()))?;

    let client = create_mongo_client(&settings.mongo_uri)
        .await
        .map_err(|e| io_error(format!("Invalid MongoDB configuration: {}", e)))?;
    let db = Db::new(client, settings.database_name.clone());

    if let Err(e) = db.ensure_indexes().await {
        log::warn!("Could not ensure MongoDB indexes: {}", e);
    }

    let google = match &settings.google {
        Some(google) => match create_google_oauth_client(google) {
            Ok(client) => Some(client),
            Err(e) => {
                log::warn!("Google sign-in disabled, bad OAuth URL: {}", e);
                None
            }
        },
        None => {
            log::info!("Google sign-in not configured");
            None
        }
    };

    let avatars = match &settings.avatar_bucket {
        Some(bucket) => match AvatarService::new(bucket.clone()).await {
            Ok(service) => Some(service),
            Err(e) => {
                log::warn!("Avatar uploads disabled: {}", e);
                None
            }
        },
        None => {
            log::info!("AVATAR_BUCKET not set, avatar uploads disabled");
            None
        }
    };

    let host = settings.host.clone();
    let port = settings.port;
    let frontend_url = settings.frontend_url.clone();

    let state = web::Data::new(
        AppState::new(db, settings)
            .with_google(google)
            .with_avatars(avatars),
    );

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&frontend_url)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
