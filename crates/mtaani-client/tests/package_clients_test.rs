//! Contract tests for AgentPackagesClient and DoorstepPackagesClient.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/packages/agent-agent` | `create_agent_package_*` |
//! | GET    | `/packages/agent-agent` | `get_agent_package_*` |
//! | PUT    | `/packages/agent-update` | `update_agent_package_*` |
//! | GET    | `/packages/agent-agent/mine` | `list_agent_packages_*` |
//! | DELETE | `/packages/agent-package` | `delete_agent_package_*` |
//! | GET    | `/packages/my-unpaid-packages` | `unpaid_*` |
//! | POST   | `/packages/doorstep` | `create_doorstep_package_*` |
//! | GET    | `/packages/doorstep/mine` | `list_doorstep_packages_*` |
//! | DELETE | `/packages/doorstep-package` | `delete_doorstep_package_*` |

use mtaani_client::agent_packages::{CreateAgentPackageRequest, UpdateAgentPackageRequest};
use mtaani_client::doorstep_packages::CreateDoorstepPackageRequest;
use mtaani_client::packages::{PackageFilters, PackageState, PaymentOption};
use mtaani_client::payments::PaymentPackageType;
use mtaani_client::{
    AgentId, BusinessId, ClientConfig, DoorstepDestinationId, MtaaniClient, MtaaniError, PackageId,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> MtaaniClient {
    let config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(&server.uri())
        .unwrap()
        .with_retries(0);
    MtaaniClient::new(config).unwrap()
}

fn agent_package_json(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "createdAt": "2024-01-05T10:00:00Z",
        "customerName": "Jane Wanjiku",
        "customerPhoneNumber": "0712345678",
        "packageName": "Shoes",
        "packageValue": 2500,
        "receipt_no": format!("PM-{id}"),
        "state": "request",
        "delivery_fee": 100,
        "payment_option": "vendor",
        "trackId": format!("TRK{id}"),
        "businessId_id": 750,
        "senderAgentID_id": 3,
        "receieverAgentID_id": 8
    })
}

fn create_agent_request() -> CreateAgentPackageRequest {
    CreateAgentPackageRequest {
        sender_agent_id: AgentId::from(3),
        receiver_agent_id: AgentId::from(8),
        package_value: 2500.0,
        customer_name: "Jane Wanjiku".into(),
        package_name: "Shoes".into(),
        customer_phone_number: "0712345678".into(),
        payment_option: PaymentOption::Vendor,
        on_delivery_balance: None,
    }
}

// ── Agent packages ──────────────────────────────────────────────────

#[tokio::test]
async fn create_agent_package_sends_body_and_business_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/packages/agent-agent"))
        .and(query_param("b_id", "750"))
        .and(body_partial_json(serde_json::json!({
            "senderAgentId": 3,
            "receiverAgentId": 8,
            "customerPhoneNumber": "0712345678",
            "paymentOption": "vendor"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "data": agent_package_json(101)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pkg = test_client(&server)
        .agent_packages()
        .create(BusinessId::from(750), &create_agent_request())
        .await
        .unwrap();
    assert_eq!(pkg.details.id, PackageId::from(101));
    assert_eq!(pkg.details.state, PackageState::Request);
    assert_eq!(pkg.receiver_agent_id, Some(AgentId::from(8)));
    assert_eq!(pkg.details.track_id, "TRK101");
}

#[tokio::test]
async fn create_agent_package_rejects_invalid_fields_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/packages/agent-agent"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server);

    let mut bad_phone = create_agent_request();
    bad_phone.customer_phone_number = "12345".into();
    let err = client
        .agent_packages()
        .create(BusinessId::from(750), &bad_phone)
        .await
        .unwrap_err();
    assert!(matches!(err, MtaaniError::Validation(_)));
    assert_eq!(err.status(), None);
    assert!(err.validation_errors()[0].starts_with("phone"));

    let mut too_valuable = create_agent_request();
    too_valuable.package_value = 1_000_001.0;
    let err = client
        .agent_packages()
        .create(BusinessId::from(750), &too_valuable)
        .await
        .unwrap_err();
    assert!(matches!(err, MtaaniError::Validation(_)));

    let mut negative_balance = create_agent_request();
    negative_balance.on_delivery_balance = Some(-10.0);
    let err = client
        .agent_packages()
        .create(BusinessId::from(750), &negative_balance)
        .await
        .unwrap_err();
    assert!(matches!(err, MtaaniError::Validation(_)));
}

#[tokio::test]
async fn get_agent_package_sends_id_and_business() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/agent-agent"))
        .and(query_param("id", "101"))
        .and(query_param("b_id", "750"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": agent_package_json(101)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pkg = test_client(&server)
        .agent_packages()
        .get(PackageId::from(101), BusinessId::from(750))
        .await
        .unwrap();
    assert_eq!(pkg.details.customer_name, "Jane Wanjiku");
}

#[tokio::test]
async fn get_agent_package_without_data_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/agent-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .agent_packages()
        .get(PackageId::from(101), BusinessId::from(750))
        .await
        .unwrap_err();
    assert!(matches!(err, MtaaniError::MissingData { .. }));
}

#[tokio::test]
async fn update_agent_package_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/packages/agent-update"))
        .and(query_param("id", "101"))
        .and(body_partial_json(serde_json::json!({ "packageName": "Boots" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": agent_package_json(101)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = UpdateAgentPackageRequest {
        package_name: Some("Boots".into()),
        ..Default::default()
    };
    test_client(&server)
        .agent_packages()
        .update(PackageId::from(101), &req)
        .await
        .unwrap();
}

#[tokio::test]
async fn list_agent_packages_preserves_pagination_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/agent-agent/mine"))
        .and(query_param("b_id", "750"))
        .and(query_param("state", "delivered"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 42,
            "pageNumber": 0,
            "pageSize": 2,
            "data": [agent_package_json(1), agent_package_json(2)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = PackageFilters {
        state: Some(PackageState::Delivered),
        page_size: Some(2),
        ..Default::default()
    };
    let page = test_client(&server)
        .agent_packages()
        .list(BusinessId::from(750), &filters)
        .await
        .unwrap();
    assert_eq!(page.total_count, 42);
    assert_eq!(page.page_size, Some(2));
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn delete_agent_package_defaults_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/packages/agent-package"))
        .and(query_param("id", "101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let msg = test_client(&server)
        .agent_packages()
        .delete(PackageId::from(101))
        .await
        .unwrap();
    assert_eq!(msg, "Package deleted successfully");
}

#[tokio::test]
async fn unpaid_returns_id_type_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/my-unpaid-packages"))
        .and(query_param("b_id", "750"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "id": 101, "type": "agent" },
                { "id": 202, "type": "doorstep" }
            ]
        })))
        .mount(&server)
        .await;

    let unpaid = test_client(&server)
        .agent_packages()
        .unpaid(BusinessId::from(750))
        .await
        .unwrap();
    assert_eq!(unpaid.len(), 2);
    assert_eq!(unpaid[1].package_type, PaymentPackageType::Doorstep);
}

#[tokio::test]
async fn unpaid_without_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/my-unpaid-packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .mount(&server)
        .await;

    let unpaid = test_client(&server)
        .doorstep_packages()
        .unpaid(BusinessId::from(750))
        .await
        .unwrap();
    assert!(unpaid.is_empty());
}

// ── Doorstep packages ───────────────────────────────────────────────

fn doorstep_package_json(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "customerName": "Otieno",
        "customerPhoneNumber": "0112345678",
        "packageName": "Phone case",
        "receipt_no": format!("PM-{id}"),
        "state": "in_transit",
        "trackId": format!("TRK{id}"),
        "agent_id": 3,
        "doorstepDestinationId": 88,
        "locationDescription": "Blue gate opposite the church",
        "lat": -1.29,
        "lng": 36.78
    })
}

#[tokio::test]
async fn create_doorstep_package_sends_destination_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/packages/doorstep"))
        .and(query_param("b_id", "750"))
        .and(body_partial_json(serde_json::json!({
            "senderAgentID_id": 3,
            "doorstepDestinationId": 88,
            "locationDescription": "Blue gate opposite the church"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "data": doorstep_package_json(202)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateDoorstepPackageRequest {
        sender_agent_id: AgentId::from(3),
        doorstep_destination_id: DoorstepDestinationId::from(88),
        package_value: 800.0,
        customer_name: "Otieno".into(),
        package_name: "Phone case".into(),
        customer_phone_number: "0112345678".into(),
        payment_option: PaymentOption::Vendor,
        on_delivery_balance: Some(0.0),
        location_description: Some("Blue gate opposite the church".into()),
        lat: Some(-1.29),
        lng: Some(36.78),
    };
    let pkg = test_client(&server)
        .doorstep_packages()
        .create(BusinessId::from(750), &req)
        .await
        .unwrap();
    assert_eq!(pkg.details.state, PackageState::InTransit);
    assert_eq!(pkg.doorstep_destination_id, Some(DoorstepDestinationId::from(88)));
    assert_eq!(pkg.lat, Some(-1.29));
}

#[tokio::test]
async fn list_doorstep_packages_passes_receipt_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/doorstep/mine"))
        .and(query_param("b_id", "750"))
        .and(query_param("receipt_no", "PM-202"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalCount": 1,
            "data": [doorstep_package_json(202)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = PackageFilters {
        receipt_no: Some("PM-202".into()),
        ..Default::default()
    };
    let page = test_client(&server)
        .doorstep_packages()
        .list(BusinessId::from(750), &filters)
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.page_number, None);
}

#[tokio::test]
async fn delete_doorstep_package_conflict_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/packages/doorstep-package"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "Package already picked up"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .doorstep_packages()
        .delete(PackageId::from(202))
        .await
        .unwrap_err();
    assert!(matches!(err, MtaaniError::Conflict(_)));
    assert_eq!(err.details().unwrap().message, "Package already picked up");
}
