//! Integration tests for the role endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_fetch_roles() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/role/add",
            Some(serde_json::json!({
                "roleName": "support",
                "accessModule": ["Billing", "Reports"],
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], true);
    assert_eq!(response.body["data"]["roleName"], "support");
    assert_eq!(
        response.body["data"]["accessModule"],
        serde_json::json!(["Billing", "Reports"])
    );

    let response = app.request("GET", "/api/role/fetch", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_duplicate_role_name_rejected() {
    let app = TestApp::new();
    app.create_role("support", &["Billing"]).await;

    let response = app
        .request(
            "POST",
            "/api/role/add",
            Some(serde_json::json!({
                "roleName": "support",
                "accessModule": [],
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], false);
}

#[tokio::test]
async fn test_add_modules_is_all_or_nothing() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/role/addModules/{role_id}"),
            Some(serde_json::json!({
                "newModules": ["Billing", "Reports"],
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("Billing"));

    // The non-duplicate entry was not added either.
    let response = app
        .request("GET", &format!("/api/role/edit/{role_id}"), None, None)
        .await;
    assert_eq!(
        response.body["data"]["accessModule"],
        serde_json::json!(["Billing"])
    );
}

#[tokio::test]
async fn test_remove_modules_ignores_absent_entries() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing", "Reports"]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/role/removeModules/{role_id}"),
            Some(serde_json::json!({
                "modulesToRemove": ["Billing", "Invoices"],
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["accessModule"],
        serde_json::json!(["Reports"])
    );
}

#[tokio::test]
async fn test_module_edits_read_their_own_field_names() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;

    // Each endpoint only reads its own body field; the other endpoint's
    // field deserializes as an empty batch and is rejected.
    let response = app
        .request(
            "PATCH",
            &format!("/api/role/addModules/{role_id}"),
            Some(serde_json::json!({"modulesToRemove": ["Reports"]})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "DELETE",
            &format!("/api/role/removeModules/{role_id}"),
            Some(serde_json::json!({"newModules": ["Billing"]})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_modules_fails_when_none_present() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/role/removeModules/{role_id}"),
            Some(serde_json::json!({
                "modulesToRemove": ["Invoices"],
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_soft_deleted_role_hidden_from_fetch_but_editable_by_id() {
    let app = TestApp::new();
    let role_id = app.create_role("support", &["Billing"]).await;

    let response = app
        .request("DELETE", &format!("/api/role/delete/{role_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/role/fetch", None, None).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(0));

    // Fetch-by-id deliberately resolves soft-deleted records.
    let response = app
        .request("GET", &format!("/api/role/edit/{role_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isDeleted"], true);
}

#[tokio::test]
async fn test_update_role_and_name_collision() {
    let app = TestApp::new();
    app.create_role("support", &["Billing"]).await;
    let sales_id = app.create_role("sales", &["Reports"]).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/role/update/{sales_id}"),
            Some(serde_json::json!({"roleName": "support"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/role/update/{sales_id}"),
            Some(serde_json::json!({"isActive": false})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isActive"], false);
}

#[tokio::test]
async fn test_unknown_role_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &format!("/api/role/edit/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
