use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::assignments::adapters::inbound::identity::USER_UID_HEADER;
use crate::modules::assignments::adapters::outbound::assignment_repository::AssignmentRepository;
use crate::modules::assignments::service::enrichment::ListEnrichmentPolicy;
use crate::shared::core::primitives::now_millis;
use crate::shell::http::router;
use crate::tests::fixtures::assignments::AssignmentBuilder;
use crate::tests::fixtures::state::{EXCHANGE, TestContextBuilder, USER};

const COLLECTION: &str = "/api/v1/assignment";

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header(USER_UID_HEADER, USER)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn it_should_run_the_full_lifecycle_when_store_backed() {
    let context = TestContextBuilder::new().store_backed().await;
    let app = router(context.state);

    let created = send(
        &app,
        json_request(
            "POST",
            COLLECTION,
            json!({
                "name": "HW1",
                "description": "Read chapter 3",
                "dueDate": 1_700_000_000_000_i64,
                "tagId": "5",
                "reminderTime": [60, 1440]
            }),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["id"], "1");
    assert_eq!(created["author"], USER);
    assert_eq!(created["tag"]["name"], "Math");
    assert_eq!(created["reminderTime"], json!([60, 1440]));

    let updated = send(
        &app,
        json_request("PATCH", "/api/v1/assignment/1", json!({"description": "Read chapter 4"})),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["description"], "Read chapter 4");
    assert_eq!(updated["name"], "HW1");

    let fetched = body_json(send(&app, empty_request("GET", "/api/v1/assignment/1")).await).await;
    assert_eq!(fetched["description"], "Read chapter 4");

    let listed = body_json(send(&app, empty_request("GET", COLLECTION)).await).await;
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["previous"], Value::Null);
    assert_eq!(listed["next"], Value::Null);
    assert_eq!(listed["results"][0]["id"], "1");

    let deleted = send(&app, empty_request("DELETE", "/api/v1/assignment/1")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = send(&app, empty_request("GET", "/api/v1/assignment/1")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(context.repository.snapshot().await.is_empty());
}

#[rstest]
#[case(json!({"name": "HW1", "tagId": "404"}), StatusCode::BAD_REQUEST)]
#[case(json!({"name": "  ", "tagId": "5"}), StatusCode::BAD_REQUEST)]
#[case(json!({"name": "HW1", "tagId": "5", "reminderTime": [1, 2, 3, 4]}), StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn it_should_reject_invalid_creates_without_touching_the_store(
    #[case] body: Value,
    #[case] expected: StatusCode,
) {
    let context = TestContextBuilder::new().store_backed().await;
    let app = router(context.state);

    let response = send(&app, json_request("POST", COLLECTION, body)).await;

    assert_eq!(response.status(), expected);
    assert!(body_json(response).await["message"].is_string());
    assert_eq!(context.repository.writes(), 0);
}

#[tokio::test]
async fn it_should_require_the_caller_identity_on_create() {
    let context = TestContextBuilder::new().store_backed().await;
    let app = router(context.state);
    let request = Request::post(COLLECTION)
        .header("content-type", "application/json")
        .body(Body::from(json!({"name": "HW1", "tagId": "5"}).to_string()))
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(context.repository.writes(), 0);
}

#[rstest]
#[case(ListEnrichmentPolicy::Drop, 2)]
#[case(ListEnrichmentPolicy::KeepWithoutTag, 3)]
#[tokio::test]
async fn it_should_apply_the_list_policy_when_one_tag_fetch_fails(
    #[case] policy: ListEnrichmentPolicy,
    #[case] expected_count: u64,
) {
    let context = TestContextBuilder::new().policy(policy).store_backed().await;
    context.tags.insert(6, json!({"id": 6, "name": "Art"})).await;
    context.tags.insert(7, json!({"id": 7, "name": "Gym"})).await;
    context.tags.fail_fetch_for(7).await;
    for tag_id in [5, 6, 7] {
        context
            .repository
            .create(&AssignmentBuilder::new().tag_id(tag_id).build())
            .await
            .unwrap();
    }
    let app = router(context.state);

    let response = send(&app, empty_request("GET", COLLECTION)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["count"], expected_count);
    let results = listed["results"].as_array().unwrap();
    let untagged = results.iter().filter(|a| a["tag"].is_null()).count();
    assert_eq!(untagged as u64, expected_count - 2);
}

#[tokio::test]
async fn it_should_only_list_assignments_due_from_now_when_asked() {
    let context = TestContextBuilder::new().store_backed().await;
    let now = now_millis();
    context
        .repository
        .create(&AssignmentBuilder::new().name("past").due_date(now - 60_000).build())
        .await
        .unwrap();
    context
        .repository
        .create(&AssignmentBuilder::new().name("future").due_date(now + 3_600_000).build())
        .await
        .unwrap();
    let app = router(context.state);

    let everything = body_json(send(&app, empty_request("GET", COLLECTION)).await).await;
    let upcoming =
        body_json(send(&app, empty_request("GET", "/api/v1/assignment?fromPresent=true")).await)
            .await;

    assert_eq!(everything["count"], 2);
    assert_eq!(upcoming["count"], 1);
    assert_eq!(upcoming["results"][0]["name"], "future");
}

#[tokio::test]
async fn it_should_publish_instead_of_writing_when_event_driven() {
    let context = TestContextBuilder::new().event_driven().await;
    let app = router(context.state);

    let created = send(
        &app,
        json_request("POST", COLLECTION, json!({"name": "HW1", "tagId": "5"})),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["id"], Value::Null);
    assert_eq!(created["tag"], Value::Null);
    assert_eq!(created["author"], USER);

    let deleted = send(&app, empty_request("DELETE", "/api/v1/assignment/42")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let published = context.publisher.published().await;
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|m| m.exchange == EXCHANGE));
    assert_eq!(published[0].routing_key, "create");
    assert_eq!(published[0].payload_json()["name"], "HW1");
    assert_eq!(published[1].routing_key, "delete");
    assert_eq!(published[1].payload_json()["id"], 42);
    assert_eq!(context.repository.writes(), 0);
}

#[tokio::test]
async fn it_should_surface_store_outages_as_server_errors() {
    let context = TestContextBuilder::new().store_offline().store_backed().await;
    let app = router(context.state);

    let listed = send(&app, empty_request("GET", COLLECTION)).await;
    let fetched = send(&app, empty_request("GET", "/api/v1/assignment/1")).await;

    assert_eq!(listed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fetched.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn it_should_reject_a_malformed_assignment_id() {
    let context = TestContextBuilder::new().store_backed().await;
    let app = router(context.state);

    let response = send(&app, empty_request("GET", "/api/v1/assignment/abc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
