//! Integration tests for the user endpoints.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp};

#[tokio::test]
async fn test_register_and_login_flow() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;

    let response = app
        .request(
            "POST",
            "/api/user/register",
            Some(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "password": TEST_PASSWORD,
                "roleId": role_id,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], "ada@example.com");
    // Credential material never appears on the wire.
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("passwordHash").is_none());

    let response = app
        .request(
            "POST",
            "/api/user/login",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].as_str().is_some());
    assert_eq!(response.body["data"]["user"]["role"], "support");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &[]).await;
    app.register_user("ada@example.com", role_id).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/user/login",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": "Wr0ng!pass",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/user/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[tokio::test]
async fn test_inactive_account_is_forbidden() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &[]).await;
    let user_id = app.register_user("ada@example.com", role_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/user/update/{user_id}"),
            Some(serde_json::json!({"isActive": false})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/user/login",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": TEST_PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &[]).await;
    app.register_user("ada@example.com", role_id).await;

    let response = app
        .request(
            "POST",
            "/api/user/register",
            Some(serde_json::json!({
                "firstName": "Other",
                "lastName": "Person",
                "email": "ada@example.com",
                "password": TEST_PASSWORD,
                "roleId": role_id,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_with_search_and_soft_delete() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;
    app.register_user("ada@example.com", role_id).await;
    let bob_id = app.register_user("bob@example.com", role_id).await;

    let response = app
        .request(
            "POST",
            "/api/user/allUser",
            Some(serde_json::json!({"search": "bo"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(
        response.body["data"][0]["role"]["roleName"],
        "support"
    );

    let response = app
        .request("DELETE", &format!("/api/user/delete/{bob_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // An empty search result reports not-found.
    let response = app
        .request(
            "POST",
            "/api/user/allUser",
            Some(serde_json::json!({"search": "bo"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Fetch-by-id still resolves the soft-deleted user.
    let response = app
        .request("GET", &format!("/api/user/edit/{bob_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isDeleted"], true);
}

#[tokio::test]
async fn test_update_many_requires_auth_and_single_field() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &[]).await;
    let ada_id = app.register_user("ada@example.com", role_id).await;
    let bob_id = app.register_user("bob@example.com", role_id).await;

    let body = serde_json::json!({
        "ids": [ada_id, bob_id],
        "firstName": "Grace",
    });

    let response = app
        .request("PATCH", "/api/user/update-many-user", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.login("ada@example.com", TEST_PASSWORD).await;
    let response = app
        .request(
            "PATCH",
            "/api/user/update-many-user",
            Some(body),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "2 users updated successfully.");

    // Both name fields at once is rejected.
    let response = app
        .request(
            "PATCH",
            "/api/user/update-many-user",
            Some(serde_json::json!({
                "ids": [ada_id],
                "firstName": "A",
                "lastName": "B",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_multiple_partitions_batch() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &[]).await;
    let ada_id = app.register_user("ada@example.com", role_id).await;
    let token = app.login("ada@example.com", TEST_PASSWORD).await;

    let response = app
        .request(
            "PATCH",
            "/api/user/update-multiple-user",
            Some(serde_json::json!({
                "users": [
                    {"id": ada_id, "updateData": {"lastName": "Hopper"}},
                    {"id": "not-a-uuid", "updateData": {"lastName": "X"}},
                    {"id": ada_id, "updateData": {"passwordHash": "nope"}},
                ],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["modifiedCount"], 1);
    assert_eq!(
        response.body["data"]["invalidIds"],
        serde_json::json!(["not-a-uuid"])
    );
    assert_eq!(
        response.body["data"]["invalidFields"][0]["invalidKeys"],
        serde_json::json!(["passwordHash"])
    );
}
