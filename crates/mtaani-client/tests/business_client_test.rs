//! Contract tests for BusinessClient.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/business` | `get_business_*` |
//! | PUT    | `/business/update` | `update_business_*` |
//! | DELETE | `/business/remove` | `delete_business_*` |
//! | GET    | `/business/categories` | `categories_*` |

use mtaani_client::business::UpdateBusinessRequest;
use mtaani_client::{BusinessId, ClientConfig, MtaaniClient, MtaaniError, Pagination};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> MtaaniClient {
    let config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
        .with_retries(0);
    MtaaniClient::new(config).unwrap()
}

#[tokio::test]
async fn get_business_returns_business() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/business"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "ok",
            "data": {
                "id": 750,
                "name": "Duka La Mama",
                "phone_number": "0712345678",
                "wallet_balance": 1200.5,
                "createdAt": "2024-03-01T08:30:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let business = test_client(&server).business().get().await.unwrap();
    assert_eq!(business.id, BusinessId::from(750));
    assert_eq!(business.phone_number.as_deref(), Some("0712345678"));
    assert_eq!(business.wallet_balance, Some(1200.5));
    assert!(business.created_at.is_some());
}

#[tokio::test]
async fn update_business_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/business/update"))
        .and(body_json(serde_json::json!({ "name": "Duka Jipya" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "id": 750, "name": "Duka Jipya" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = UpdateBusinessRequest {
        name: Some("Duka Jipya".into()),
        ..Default::default()
    };
    let business = test_client(&server).business().update(&req).await.unwrap();
    assert_eq!(business.name, "Duka Jipya");
}

#[tokio::test]
async fn update_business_rejects_bad_phone_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/business/update"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let req = UpdateBusinessRequest {
        phone_number: Some("0812345678".into()),
        ..Default::default()
    };
    let err = test_client(&server).business().update(&req).await.unwrap_err();
    assert!(matches!(err, MtaaniError::Validation(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn delete_business_returns_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/business/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Business removed"
        })))
        .mount(&server)
        .await;

    let msg = test_client(&server).business().delete().await.unwrap();
    assert_eq!(msg, "Business removed");
}

#[tokio::test]
async fn delete_business_defaults_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/business/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    let msg = test_client(&server).business().delete().await.unwrap();
    assert_eq!(msg, "Business deleted successfully");
}

#[tokio::test]
async fn categories_preserve_pagination_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/business/categories"))
        .and(query_param("pageNumber", "1"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 42,
            "pageNumber": 1,
            "pageSize": 2,
            "data": [
                { "id": 1, "name": "Fashion" },
                { "id": 2, "name": "Electronics" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server)
        .business()
        .categories(&Pagination::page(1, 2))
        .await
        .unwrap();
    assert_eq!(page.total_count, 42);
    assert_eq!(page.page_number, Some(1));
    assert_eq!(page.page_size, Some(2));
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].name, "Electronics");
}
