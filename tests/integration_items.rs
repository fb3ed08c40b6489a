mod common;

use axum::http::StatusCode;
use bastion_auth::TokenVerifier;
use common::{
    assert_unauthorized, get, get_with_token, mobile_token, setup_test_app, test_jwt_config,
    token_signed_with,
};
use serde_json::json;

#[tokio::test]
async fn test_read_item_with_query() {
    let token = mobile_token();
    let expected_claims = TokenVerifier::new(&test_jwt_config()).peek(&token).unwrap();

    let response = get_with_token(setup_test_app(), "/items/42?q=test", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "item_id": 42,
            "query": "test",
            "user": expected_claims
        })
    );
}

#[tokio::test]
async fn test_read_item_without_query() {
    let response = get_with_token(setup_test_app(), "/items/7", &mobile_token()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item_id"], 7);
    assert_eq!(response.body["query"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_read_item_negative_id() {
    let response = get_with_token(setup_test_app(), "/items/-5?q=a%20b", &mobile_token()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item_id"], -5);
    assert_eq!(response.body["query"], "a b");
}

#[tokio::test]
async fn test_read_item_repeated_query_uses_last_value() {
    let response = get_with_token(
        setup_test_app(),
        "/items/42?q=a&q=b&extra=1",
        &mobile_token(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item_id"], 42);
    assert_eq!(response.body["query"], "b");
}

#[tokio::test]
async fn test_read_item_non_integer_id() {
    let response = get_with_token(setup_test_app(), "/items/abc", &mobile_token()).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn test_read_item_id_out_of_range() {
    let response = get_with_token(
        setup_test_app(),
        "/items/99999999999999999999",
        &mobile_token(),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_read_item_authenticates_before_parsing_id() {
    let response = get(setup_test_app(), "/items/abc", None).await;

    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_read_item_with_wrong_secret() {
    let token = token_signed_with("a_completely_different_secret_value");

    let response = get_with_token(setup_test_app(), "/items/42?q=test", &token).await;

    assert_unauthorized(&response);
}

#[tokio::test]
async fn test_read_item_with_malformed_token() {
    let response = get_with_token(setup_test_app(), "/items/42", "garbage").await;

    assert_unauthorized(&response);
}
