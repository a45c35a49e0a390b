//! Integration tests for the per-request access check.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp};

async fn logged_in_app(modules: &[&str]) -> (TestApp, String) {
    let app = TestApp::new();
    let role_id = app.create_role("support", modules).await;
    app.register_user("ada@example.com", role_id).await;
    let token = app.login("ada@example.com", TEST_PASSWORD).await;
    (app, token)
}

#[tokio::test]
async fn test_access_granted_case_insensitively() {
    let (app, token) = logged_in_app(&["Billing"]).await;

    for module in ["Billing", "billing", "BILLING"] {
        let response = app
            .request(
                "POST",
                "/api/user/user-access",
                Some(serde_json::json!({"accessToModule": module})),
                Some(&token),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.message(),
            format!("You have permission for '{module}'.")
        );
    }
}

#[tokio::test]
async fn test_access_denied_for_unlisted_module() {
    let (app, token) = logged_in_app(&["Billing"]).await;

    let response = app
        .request(
            "POST",
            "/api/user/user-access",
            Some(serde_json::json!({"accessToModule": "Invoices"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Access denied. You do not have permission for 'Invoices'."
    );
}

#[tokio::test]
async fn test_access_check_requires_module_name() {
    let (app, token) = logged_in_app(&["Billing"]).await;

    let response = app
        .request(
            "POST",
            "/api/user/user-access",
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_access_check_requires_valid_token() {
    let app = TestApp::new();
    let body = serde_json::json!({"accessToModule": "Billing"});

    let response = app
        .request("POST", "/api/user/user-access", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/user/user-access",
            Some(body),
            Some("not-a-real-token"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or expired token");
}

#[tokio::test]
async fn test_access_denied_after_module_removed() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing", "Reports"]).await;
    app.register_user("ada@example.com", role_id).await;
    let token = app.login("ada@example.com", TEST_PASSWORD).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/role/removeModules/{role_id}"),
            Some(serde_json::json!({"modulesToRemove": ["Billing"]})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The check reads current role state, not token claims.
    let response = app
        .request(
            "POST",
            "/api/user/user-access",
            Some(serde_json::json!({"accessToModule": "Billing"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/user/user-access",
            Some(serde_json::json!({"accessToModule": "Reports"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
