#![allow(clippy::unwrap_used)]
// Integration tests for `AdminClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lr_api::{AdminClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = AdminClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Auth header tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_auth_headers_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/apps"))
        .and(header("x-is-loginradius--token", "tok-123"))
        .and(header("x-is-loginradius--sign", "sig-456"))
        .and(header("x-is-loginradius-ajax", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let token = SecretString::from("tok-123".to_string());
    let sign = SecretString::from("sig-456".to_string());
    let client = AdminClient::new(
        Url::parse(&server.uri()).unwrap(),
        &token,
        Some(&sign),
        &TransportConfig::default(),
    )
    .unwrap();

    let apps = client.owned_apps().await.unwrap();
    assert!(apps.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/auth/features"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "ErrorCode": 905,
            "Message": "Token expired",
            "Description": "The provided token has expired"
        })))
        .mount(&server)
        .await;

    let result = client.site_features().await;
    match result {
        Err(Error::Authentication { message }) => {
            assert_eq!(message, "The provided token has expired");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── Schema tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_site_features() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/auth/features"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                { "feature": "phone_id_only_login_enabled", "status": true },
                { "feature": "email_verification", "status": false }
            ]
        })))
        .mount(&server)
        .await;

    let features = client.site_features().await.unwrap();

    assert_eq!(features.len(), 2);
    assert_eq!(features[0].feature, "phone_id_only_login_enabled");
    assert!(features[0].status);
    assert!(!features[1].status);
}

#[tokio::test]
async fn test_registration_field_catalogs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/platform-configuration/default-fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": {
                "lastname": { "Display": "Last Name", "Type": "string" },
                "emailid": { "Display": "Email Id", "Type": "email" }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/platform-configuration/registration-form-settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": {
                "emailid": { "Display": "Email Id", "Type": "email" },
                "cf_MyCF": { "Display": "MyCF", "Type": "string", "Rules": "required" }
            }
        })))
        .mount(&server)
        .await;

    let all = client.all_registration_fields().await.unwrap();
    let keys: Vec<_> = all.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["emailid", "lastname"]);
    assert_eq!(all["lastname"].display, "Last Name");
    assert_eq!(all["lastname"].field_type, "string");

    let active = client.registration_fields().await.unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active["cf_MyCF"].field_type, "string");
}

#[tokio::test]
async fn test_custom_fields_keep_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/platform-configuration/custom-fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                { "Key": "Zeta", "Display": "Zeta" },
                { "Key": "Alpha", "Display": "Alpha" }
            ]
        })))
        .mount(&server)
        .await;

    let fields = client.custom_fields().await.unwrap();
    let names: Vec<_> = fields.iter().map(|f| f.display.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[tokio::test]
async fn test_missing_data_is_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/platform-configuration/custom-fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let fields = client.custom_fields().await.unwrap();
    assert!(fields.is_empty());
}

// ── App tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_owned_and_shared_apps() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/auth/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                { "AppId": 111_111, "AppName": "new-test1", "Domain": "https://mail7.io" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/apps/shared"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [
                { "AppId": 142_670, "AppName": "trail-pro", "Domain": "https://loginradius.com" }
            ]
        })))
        .mount(&server)
        .await;

    let owned = client.owned_apps().await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].app_id, 111_111);
    assert_eq!(owned[0].app_name, "new-test1");

    let shared = client.shared_apps().await.unwrap();
    assert_eq!(shared[0].app_id, 142_670);
    assert_eq!(shared[0].domain, "https://loginradius.com");
}

// ── Error handling tests ────────────────────────────────────────────

#[tokio::test]
async fn test_api_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/auth/apps/shared"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "ErrorCode": 1000,
            "Message": "Oops something went wrong"
        })))
        .mount(&server)
        .await;

    let result = client.shared_apps().await;
    match result {
        Err(Error::Api {
            message,
            code,
            status,
        }) => {
            assert_eq!(status, 500);
            assert_eq!(code.as_deref(), Some("1000"));
            assert_eq!(message, "Oops something went wrong");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/auth/apps"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.owned_apps().await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
    assert!(!err.is_auth_expired());
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/platform-configuration/default-fields"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.all_registration_fields().await;
    match result {
        Err(Error::Deserialization { body, .. }) => {
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_reports_configured_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/features"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Data": [] }))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig {
        timeout: std::time::Duration::from_secs(1),
    };
    let client = AdminClient::new(
        Url::parse(&server.uri()).unwrap(),
        &SecretString::from("tok".to_string()),
        None,
        &transport,
    )
    .unwrap();

    match client.site_features().await {
        Err(Error::Timeout { timeout_secs }) => assert_eq!(timeout_secs, 1),
        other => panic!("expected Timeout error, got: {other:?}"),
    }
}
