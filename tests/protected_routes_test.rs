mod common;

use actix_web::{http::header, test};
use mongodb::bson::oid::ObjectId;
use serde_json::json;
use serial_test::serial;

use common::{bearer, TestApp};

fn trip(city: &str, start: &str, end: &str) -> serde_json::Value {
    json!({
        "trip": {
            "city": city,
            "start_date": start,
            "end_date": end,
            "budget": "moderate",
            "food": "any",
            "group": { "adults": 2, "children": 0 }
        }
    })
}

#[actix_rt::test]
#[serial]
async fn test_get_session_without_auth() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_protected_routes_without_auth() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    for uri in ["/api/account/profile", "/api/account/favorites", "/api/plans"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401, "{}", uri);
    }

    let req = test::TestRequest::post()
        .uri("/api/plans/quick")
        .set_json(&trip("paris", "2026-05-01", "2026-05-03"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_invalid_token_is_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/account/profile")
        .insert_header((header::AUTHORIZATION, "Bearer test_jwt_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid token");
}

#[actix_rt::test]
#[serial]
async fn test_token_signed_with_other_secret_is_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let token = travel_planner_api::middleware::auth::issue_token(
        "another-secret",
        1,
        "ada@example.com",
        ObjectId::new(),
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/plans")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_create_plan_rejects_invalid_trips() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let auth = bearer(ObjectId::new());

    let cases = [
        trip("atlantis", "2026-05-01", "2026-05-03"),
        trip("paris", "2026-05-03", "2026-05-01"),
        trip("paris", "2026-05-01", "2026-06-01"),
    ];

    for body in cases {
        for uri in ["/api/plans/quick", "/api/plans/custom"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .insert_header((header::AUTHORIZATION, auth.clone()))
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{} {}", uri, body);
        }
    }
}

#[actix_rt::test]
#[serial]
async fn test_create_plan_without_adults() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let mut body = trip("rome", "2026-05-01", "2026-05-02");
    body["trip"]["group"]["adults"] = json!(0);

    let req = test::TestRequest::post()
        .uri("/api/plans/quick")
        .insert_header((header::AUTHORIZATION, bearer(ObjectId::new())))
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_malformed_plan_id() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let auth = bearer(ObjectId::new());

    let req = test::TestRequest::get()
        .uri("/api/plans/not-an-object-id")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::put()
        .uri("/api/plans/not-an-object-id/days/1/order")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(&json!({ "from": 0, "to": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::put()
        .uri("/api/plans/not-an-object-id/days/1/activities/a1")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .set_json(&json!({ "title": "Late lunch" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::delete()
        .uri("/api/plans/not-an-object-id/days/1/activities/a1")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/plans/not-an-object-id/days/1/shuffle")
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_non_numeric_day_is_not_routed() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let auth = bearer(ObjectId::new());
    let plan_id = ObjectId::new().to_hex();

    let req = test::TestRequest::post()
        .uri(&format!("/api/plans/{}/days/abc/shuffle", plan_id))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/plans/{}/days/-1/activities/a1", plan_id))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/plans/{}/days/one/activities/a1", plan_id))
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(&json!({ "time": "10:00" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_oversized_group_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/plans/quick")
        .insert_header((header::AUTHORIZATION, bearer(ObjectId::new())))
        .set_json(&json!({
            "trip": {
                "city": "rome",
                "start_date": "2026-09-10",
                "end_date": "2026-09-11",
                "budget": "budget",
                "group": { "adults": 4294967295u32, "children": 5 }
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_favorite_unknown_attraction() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/account/favorites/paris-atlantis")
        .insert_header((header::AUTHORIZATION, bearer(ObjectId::new())))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_profile_update_validation() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;
    let auth = bearer(ObjectId::new());

    for body in [
        json!({ "name": "   " }),
        json!({ "home_city": "atlantis" }),
        json!({}),
    ] {
        let req = test::TestRequest::put()
            .uri("/api/account/profile")
            .insert_header((header::AUTHORIZATION, auth.clone()))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{}", body);
    }
}

#[actix_rt::test]
#[serial]
async fn test_short_new_password_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/account/password")
        .insert_header((header::AUTHORIZATION, bearer(ObjectId::new())))
        .set_json(&json!({ "current_password": "whatever-it-was", "new_password": "short" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_avatar_upload_without_storage() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let boundary = "----travel-planner-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"avatar\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA\r\n--{b}--\r\n",
        b = boundary
    );

    let req = test::TestRequest::put()
        .uri("/api/account/avatar")
        .insert_header((header::AUTHORIZATION, bearer(ObjectId::new())))
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}
