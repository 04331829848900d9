//! Customer and referral code endpoints against a mock Chargify.

mod common;

use chargify_client::{ChargifyError, Customer, CustomerId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_and_update_customer() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/customers.json"))
        .and(body_json(json!({
            "customer": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "reference": "ada"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "customer": {"id": 501, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com", "reference": "ada"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/customers/501.json"))
        .and(body_json(json!({
            "customer": {
                "id": "501",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "organization": "Analytical Engines",
                "reference": "ada"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {"id": 501, "organization": "Analytical Engines"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_customer(&Customer::new("Ada", "Lovelace", "ada@example.com").with_reference("ada"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(CustomerId::new("501")));

    let updated = client
        .update_customer(&Customer {
            organization: Some("Analytical Engines".into()),
            ..created
        })
        .await
        .unwrap();
    assert_eq!(updated.organization.as_deref(), Some("Analytical Engines"));
}

#[tokio::test]
async fn update_without_id_is_rejected_locally() {
    let (server, client) = common::setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .update_customer(&Customer::new("Ada", "Lovelace", "ada@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChargifyError::InvalidArgument(_)));
}

#[tokio::test]
async fn lookups() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/customers/501.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {"id": 501, "email": "ada@example.com"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/lookup.json"))
        .and(query_param("reference", "ada & co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {"id": 501, "reference": "ada & co"}
        })))
        .mount(&server)
        .await;

    let by_id = client
        .find_customer_by_id(&CustomerId::new("501"))
        .await
        .unwrap();
    assert_eq!(by_id.and_then(|c| c.email).as_deref(), Some("ada@example.com"));

    let by_reference = client.find_customer_by_reference("ada & co").await.unwrap();
    assert!(by_reference.is_some());

    assert!(client
        .find_customer_by_id(&CustomerId::new("9"))
        .await
        .unwrap()
        .is_none());
    assert!(client
        .find_customer_by_reference("nobody")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn listing_and_searching() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .and(query_param("q", "lovelace"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"customer": {"id": 501, "last_name": "Lovelace"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"customer": {"id": 501}},
            {"customer": {"id": 502}}
        ])))
        .mount(&server)
        .await;

    let found = client.find_customers_by("lovelace", 1).await.unwrap();
    assert_eq!(found[0].last_name.as_deref(), Some("Lovelace"));

    assert!(client.find_customers(3, 25).await.unwrap().is_empty());
    assert_eq!(client.find_all_customers().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_ignores_missing_customer() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/501.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/customers/502.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Customer has active subscriptions"]
        })))
        .mount(&server)
        .await;

    client
        .delete_customer_by_id(&CustomerId::new("501"))
        .await
        .unwrap();
    client
        .delete_customer_by_id(&CustomerId::new("999"))
        .await
        .unwrap();

    let err = client
        .delete_customer_by_id(&CustomerId::new("502"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn referral_code_validation() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/referral_codes/validate.json"))
        .and(query_param("code", "FRIEND1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "referral_code": {"id": 7, "site_id": 1, "subscription_id": 42, "code": "FRIEND1"}
        })))
        .mount(&server)
        .await;

    let code = client
        .validate_referral_code("FRIEND1")
        .await
        .unwrap()
        .expect("valid code");
    assert_eq!(code.code, "FRIEND1");

    assert!(client.validate_referral_code("NOPE").await.unwrap().is_none());
}
