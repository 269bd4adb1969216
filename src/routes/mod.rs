use actix_web::web;

use crate::middleware::auth::AuthMiddleware;

pub mod account;
pub mod city;
pub mod health;
pub mod plan;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health))
        .route("/health/details", web::get().to(health::health_details))
        .service(
            web::scope("/api")
                // Public routes
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(account::auth::signup))
                        .route("/login", web::post().to(account::auth::login))
                        .route("/google", web::get().to(account::google_auth::google_auth_init))
                        .route(
                            "/google/callback",
                            web::get().to(account::google_auth::google_auth_callback),
                        )
                        .service(
                            web::scope("")
                                .wrap(AuthMiddleware)
                                .route("/session", web::get().to(account::auth::session)),
                        ),
                )
                .service(
                    web::scope("/cities")
                        .route("", web::get().to(city::list_cities))
                        .route("/{slug}", web::get().to(city::get_city))
                        .route("/{slug}/attractions", web::get().to(city::list_attractions)),
                )
                .route("/attractions/{id}", web::get().to(city::get_attraction))
                // Protected routes
                .service(
                    web::scope("/account")
                        .wrap(AuthMiddleware)
                        .route("/profile", web::get().to(account::profile::get_profile))
                        .route("/profile", web::put().to(account::profile::update_profile))
                        .route("/password", web::put().to(account::profile::change_password))
                        .route("/avatar", web::put().to(account::profile::upload_avatar))
                        .route("/favorites", web::get().to(account::favorites::list_favorites))
                        .route(
                            "/favorites/{attraction_id}",
                            web::post().to(account::favorites::add_favorite),
                        )
                        .route(
                            "/favorites/{attraction_id}",
                            web::delete().to(account::favorites::remove_favorite),
                        ),
                )
                .service(
                    web::scope("/plans")
                        .wrap(AuthMiddleware)
                        .route("", web::get().to(plan::list_plans))
                        .route("/quick", web::post().to(plan::create_quick_plan))
                        .route("/custom", web::post().to(plan::create_custom_plan))
                        .route("/{id}", web::get().to(plan::get_plan))
                        .route("/{id}", web::delete().to(plan::delete_plan))
                        .route(
                            "/{id}/days/{day}/activities",
                            web::post().to(plan::add_plan_activity),
                        )
                        .route(
                            "/{id}/days/{day}/activities/{activity_id}",
                            web::put().to(plan::update_plan_activity),
                        )
                        .route(
                            "/{id}/days/{day}/activities/{activity_id}",
                            web::delete().to(plan::remove_plan_activity),
                        )
                        .route("/{id}/days/{day}/order", web::put().to(plan::reorder_day))
                        .route("/{id}/days/{day}/shuffle", web::post().to(plan::shuffle_day)),
                ),
        );
}
