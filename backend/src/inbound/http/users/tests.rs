//! In-process HTTP tests for the user handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::UserPersistenceError;
use crate::inbound::http::test_utils::users_app;
use crate::test_support::InMemoryUserRepository;

#[fixture]
fn repository() -> InMemoryUserRepository {
    InMemoryUserRepository::default()
}

fn post_users(body: &Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/users").set_json(body)
}

fn get_users() -> actix_test::TestRequest {
    actix_test::TestRequest::get().uri("/users")
}

fn issue_codes(body: &Value) -> Vec<(&str, &str)> {
    body["details"]["issues"]
        .as_array()
        .expect("issues array")
        .iter()
        .map(|issue| {
            (
                issue["field"].as_str().expect("field"),
                issue["code"].as_str().expect("code"),
            )
        })
        .collect()
}

#[rstest]
#[actix_web::test]
async fn list_on_empty_store_returns_empty_array(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository))).await;

    let res = actix_test::call_service(&app, get_users().to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({ "users": [] }));
}

#[rstest]
#[actix_web::test]
async fn created_user_appears_in_listing(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository.clone()))).await;

    let created = actix_test::call_service(
        &app,
        post_users(&json!({"name": "Ada", "email": "ada@example.com"})).to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body = actix_test::read_body(created).await;
    assert!(created_body.is_empty());

    let res = actix_test::call_service(&app, get_users().to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 1);
    let ada = users.first().expect("one user");
    assert_eq!(ada["name"], "Ada");
    assert_eq!(ada["email"], "ada@example.com");
    let stored = repository.snapshot();
    let stored_id = stored.first().expect("stored user").id().to_string();
    assert_eq!(ada["id"], stored_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn listing_preserves_insertion_order(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository))).await;

    for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
        let res = actix_test::call_service(
            &app,
            post_users(&json!({"name": name, "email": email})).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let body: Value =
        actix_test::read_body_json(actix_test::call_service(&app, get_users().to_request()).await)
            .await;
    let names: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .map(|user| user["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["Ada", "Grace"]);
}

#[rstest]
#[case(json!({"name": "Bob"}), vec![("email", "missing_field")])]
#[case(json!({"email": "bob@example.com"}), vec![("name", "missing_field")])]
#[case(
    json!({"name": "Bob", "email": "not-an-email"}),
    vec![("email", "invalid_email")]
)]
#[case(
    json!({"name": 42, "email": "bob@example.com"}),
    vec![("name", "invalid_type")]
)]
#[case(
    json!({"name": "", "email": false}),
    vec![("name", "empty_value"), ("email", "invalid_type")]
)]
#[actix_web::test]
async fn invalid_bodies_are_rejected_without_persisting(
    repository: InMemoryUserRepository,
    #[case] payload: Value,
    #[case] expected: Vec<(&str, &str)>,
) {
    let app = actix_test::init_service(users_app(Arc::new(repository.clone()))).await;

    let res = actix_test::call_service(&app, post_users(&payload).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let trace_header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "request validation failed");
    assert_eq!(body["traceId"], trace_header.as_str());
    assert_eq!(issue_codes(&body), expected);
    assert!(repository.snapshot().is_empty());
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_bad_request(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository.clone()))).await;

    let req = actix_test::TestRequest::post()
        .uri("/users")
        .insert_header(ContentType::json())
        .set_payload("{\"name\": \"Ada\",")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert!(repository.snapshot().is_empty());
}

#[rstest]
#[actix_web::test]
async fn non_object_body_is_a_bad_request(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository))).await;

    let res = actix_test::call_service(&app, post_users(&json!(["Ada"])).to_request()).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_is_a_redacted_internal_error(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository.clone()))).await;
    let payload = json!({"name": "Ada", "email": "ada@example.com"});

    let first = actix_test::call_service(&app, post_users(&payload).to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = actix_test::call_service(&app, post_users(&payload).to_request()).await;

    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(repository.snapshot().len(), 1);
}

#[rstest]
#[case(get_users())]
#[case(post_users(&json!({"name": "Ada", "email": "ada@example.com"})))]
#[actix_web::test]
async fn unreachable_database_is_service_unavailable(
    repository: InMemoryUserRepository,
    #[case] request: actix_test::TestRequest,
) {
    repository.fail_with(UserPersistenceError::connection("pool timed out"));
    let app = actix_test::init_service(users_app(Arc::new(repository))).await;

    let res = actix_test::call_service(&app, request.to_request()).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_return_json_not_found(repository: InMemoryUserRepository) {
    let app = actix_test::init_service(users_app(Arc::new(repository))).await;

    let req = actix_test::TestRequest::get().uri("/nope").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}
