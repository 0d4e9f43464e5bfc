// =====================================================================================
// REVIEW CELL INTEGRATION TESTS
// =====================================================================================

use http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use review_cell::router::review_routes;
use shared_utils::test_utils::{empty_request, json_request, read_json, TestContext};

#[tokio::test]
async fn test_post_then_list_reviews() {
    let ctx = TestContext::new().await;
    ctx.seed_trainer(1, "Anna").await;

    let request = json_request(
        Method::POST,
        "/reviews",
        json!({ "trainer_id": 1, "user_id": 501, "user_name": "Oleg", "rating": 5, "text": "Great session" }),
    );
    let response = review_routes(ctx.state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({ "status": "success" }));

    let response = review_routes(ctx.state.clone())
        .oneshot(empty_request(Method::GET, "/reviews/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["user_name"], "Oleg");
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["text"], "Great session");
    assert!(reviews[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_rating_out_of_range_is_bad_request() {
    let ctx = TestContext::new().await;
    ctx.seed_trainer(1, "Anna").await;

    let request = json_request(
        Method::POST,
        "/reviews",
        json!({ "trainer_id": 1, "user_id": 501, "rating": 9 }),
    );
    let response = review_routes(ctx.state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({ "error": "Rating must be 1-5" }));
}

#[tokio::test]
async fn test_missing_fields_is_bad_request() {
    let ctx = TestContext::new().await;

    let request = json_request(Method::POST, "/reviews", json!({ "trainer_id": 1 }));
    let response = review_routes(ctx.state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({ "error": "Missing fields" }));
}

#[tokio::test]
async fn test_review_for_unregistered_trainer_is_not_found() {
    let ctx = TestContext::new().await;

    let request = json_request(
        Method::POST,
        "/reviews",
        json!({ "trainer_id": 77, "user_id": 501, "rating": 3 }),
    );
    let response = review_routes(ctx.state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reviews_of_unknown_trainer_is_empty_list() {
    let ctx = TestContext::new().await;

    let response = review_routes(ctx.state.clone())
        .oneshot(empty_request(Method::GET, "/reviews/404"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}
