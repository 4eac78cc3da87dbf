//! Tests for the users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::Error;
use crate::domain::ports::MockUserDirectory;

const ID: &str = "65a1f0c2b3d4e5f601234567";

#[fixture]
fn user_id() -> UserId {
    UserId::new(ID).expect("fixture id")
}

#[fixture]
fn user(user_id: UserId) -> User {
    let details = UserDetails::try_from_parts("Ann", "NYC", "Eng").expect("fixture details");
    User::new(user_id, details)
}

async fn send(
    directory: MockUserDirectory,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let state = web::Data::new(HttpState::new(Arc::new(directory)));
    let app =
        actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("json envelope");
    (status, value)
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(
        body,
        &json!({ "status": expected.as_u16(), "message": "error", "data": { "data": message } })
    );
}

#[rstest]
#[actix_web::test]
async fn create_returns_inserted_id(user_id: UserId) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_create()
        .withf(|details| {
            details.name() == "Ann" && details.location() == "NYC" && details.title() == "Eng"
        })
        .times(1)
        .return_once(move |_| Ok(user_id));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Ann", "location": "NYC", "title": "Eng" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "status": 201, "message": "Success", "data": { "data": { "InsertedID": ID } } })
    );
}

#[rstest]
#[case(json!({ "location": "NYC", "title": "Eng" }), "missing required field: name")]
#[case(json!({ "name": "Ann", "title": "Eng" }), "missing required field: location")]
#[case(json!({ "name": "Ann", "location": "NYC", "title": "" }), "title must not be empty")]
#[case(json!({ "name": " ", "location": "NYC", "title": "Eng" }), "name must not be empty")]
#[actix_web::test]
async fn create_rejects_invalid_bodies_without_calling_the_store(
    #[case] payload: Value,
    #[case] message: &str,
) {
    let mut directory = MockUserDirectory::new();
    directory.expect_create().never();

    let (status, body) = send(
        directory,
        actix_test::TestRequest::post().uri("/user").set_json(payload),
    )
    .await;

    assert_error(status, &body, StatusCode::BAD_REQUEST, message);
}

#[actix_web::test]
async fn create_rejects_malformed_json_with_an_envelope() {
    let mut directory = MockUserDirectory::new();
    directory.expect_create().never();

    let (status, body) = send(
        directory,
        actix_test::TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("status").and_then(Value::as_u64), Some(400));
    assert_eq!(body.get("message").and_then(Value::as_str), Some("error"));
    assert!(body.pointer("/data/data").and_then(Value::as_str).is_some());
}

#[rstest]
#[case(json!(["Ann", "NYC", "Eng"]), "expected a map")]
#[case(json!("Ann"), "expected a map")]
#[case(json!(42), "expected a map")]
#[case(json!({ "name": 7, "location": "NYC", "title": "Eng" }), "invalid type for field `name`")]
#[case(json!({ "name": "Ann", "location": ["NYC"], "title": "Eng" }), "invalid type for field `location`")]
#[actix_web::test]
async fn create_accepts_only_objects_of_strings(#[case] payload: Value, #[case] fragment: &str) {
    let mut directory = MockUserDirectory::new();
    directory.expect_create().never();

    let (status, body) = send(
        directory,
        actix_test::TestRequest::post().uri("/user").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("message").and_then(Value::as_str), Some("error"));
    let message = body.pointer("/data/data").and_then(Value::as_str).unwrap_or_default();
    assert!(message.contains(fragment), "unexpected message: {message}");
}

#[actix_web::test]
async fn update_rejects_array_bodies_without_calling_the_store() {
    let mut directory = MockUserDirectory::new();
    directory.expect_update().never();

    let (status, body) = send(
        directory,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{ID}"))
            .set_json(json!(["Ann", "LDN", "Eng"])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("status").and_then(Value::as_u64), Some(400));
}

#[actix_web::test]
async fn create_reports_store_failures_as_bad_request() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_create()
        .times(1)
        .return_once(|_| Err(Error::invalid_request("E11000 duplicate key error")));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Ann", "location": "NYC", "title": "Eng" })),
    )
    .await;

    assert_error(status, &body, StatusCode::BAD_REQUEST, "E11000 duplicate key error");
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_user(user_id: UserId, user: User) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_get()
        .withf(move |id| *id == user_id)
        .times(1)
        .return_once(move |_| Ok(user));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::get().uri(&format!("/user/{ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": 200,
            "message": "success",
            "data": { "data": { "id": ID, "name": "Ann", "location": "NYC", "title": "Eng" } }
        })
    );
}

#[actix_web::test]
async fn get_reports_missing_users_as_internal_errors() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_get()
        .times(1)
        .return_once(|_| Err(Error::internal("no documents in result")));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::get().uri(&format!("/user/{ID}")),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "no documents in result",
    );
}

#[rstest]
#[case::get(actix_test::TestRequest::get())]
#[case::delete(actix_test::TestRequest::delete())]
#[case::put(actix_test::TestRequest::put().set_json(json!({ "name": "Ann", "location": "NYC", "title": "Eng" })))]
#[actix_web::test]
async fn malformed_ids_are_rejected_before_the_store(#[case] request: actix_test::TestRequest) {
    let mut directory = MockUserDirectory::new();
    directory.expect_get().never();
    directory.expect_update().never();
    directory.expect_delete().never();

    let (status, body) = send(directory, request.uri("/user/123")).await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "userId must be a 24-character hexadecimal object id: 123",
    );
}

#[rstest]
#[actix_web::test]
async fn update_returns_the_stored_record(user_id: UserId) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_update()
        .withf(move |id, details| *id == user_id && details.location() == "LDN")
        .times(1)
        .return_once(move |id, details| Ok(UpdateOutcome::Updated(User::new(*id, details))));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{ID}"))
            .set_json(json!({ "name": "Ann", "location": "LDN", "title": "Eng" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.pointer("/data/data"),
        Some(&json!({ "id": ID, "name": "Ann", "location": "LDN", "title": "Eng" }))
    );
}

#[actix_web::test]
async fn update_without_a_match_returns_an_empty_record() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_update()
        .times(1)
        .return_once(|_, _| Ok(UpdateOutcome::NoMatch));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{ID}"))
            .set_json(json!({ "name": "Ann", "location": "LDN", "title": "Eng" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": 200, "message": "success", "data": { "data": {} } })
    );
}

#[actix_web::test]
async fn update_validates_the_body() {
    let mut directory = MockUserDirectory::new();
    directory.expect_update().never();

    let (status, body) = send(
        directory,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{ID}"))
            .set_json(json!({ "name": "Ann", "location": "LDN" })),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "missing required field: title",
    );
}

#[rstest]
#[actix_web::test]
async fn delete_confirms_removal(user_id: UserId) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_delete()
        .withf(move |id| *id == user_id)
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::delete().uri(&format!("/user/{ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": 200, "message": "success", "data": { "data": USER_DELETED_MESSAGE } })
    );
}

#[actix_web::test]
async fn delete_of_unknown_user_is_not_found() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_delete()
        .times(1)
        .return_once(|_| Err(Error::not_found("User with specified ID not found!")));

    let (status, body) = send(
        directory,
        actix_test::TestRequest::delete().uri(&format!("/user/{ID}")),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::NOT_FOUND,
        "User with specified ID not found!",
    );
}

#[rstest]
#[actix_web::test]
async fn list_wraps_every_user(user: User) {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_list()
        .times(1)
        .return_once(move || Ok(vec![user]));

    let (status, body) = send(directory, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.pointer("/data/data/0/id").and_then(Value::as_str),
        Some(ID)
    );
    assert_eq!(
        body.pointer("/data/data")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(1)
    );
}

#[actix_web::test]
async fn list_of_empty_store_is_an_empty_array() {
    let mut directory = MockUserDirectory::new();
    directory.expect_list().times(1).return_once(|| Ok(Vec::new()));

    let (status, body) = send(directory, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": 200, "message": "success", "data": { "data": [] } })
    );
}

#[actix_web::test]
async fn list_failures_are_internal_errors() {
    let mut directory = MockUserDirectory::new();
    directory
        .expect_list()
        .times(1)
        .return_once(|| Err(Error::internal("user repository decode failed: bad document")));

    let (status, body) = send(directory, actix_test::TestRequest::get().uri("/users")).await;

    assert_error(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "user repository decode failed: bad document",
    );
}
