//! Component, allocation, usage and price point endpoints against a mock
//! Chargify.

mod common;

use chargify_client::{
    Allocation, ChargifyError, Component, ComponentKind, ComponentPricePointUpdate,
    PricePointUpdate, ProductFamilyId, SubscriptionId, Usage,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_component_posts_under_kind() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/product_families/1201/metered_components.json"))
        .and(body_json(json!({
            "metered_component": {
                "name": "API calls",
                "kind": "metered_component",
                "unit_name": "call",
                "unit_price": "0.01"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "component": {
                "id": 3301,
                "name": "API calls",
                "kind": "metered_component",
                "unit_name": "call",
                "unit_price": 0.01,
                "product_family_id": 1201
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let component = Component {
        unit_name: Some("call".into()),
        unit_price: Some("0.01".into()),
        ..Component::new("API calls", ComponentKind::MeteredComponent)
    };
    let created = client
        .create_component(&ProductFamilyId::new("1201"), &component)
        .await
        .unwrap();
    assert_eq!(created.id, Some(3301));
    assert_eq!(created.unit_price.as_deref(), Some("0.01"));
    assert_eq!(created.product_family_id, Some(ProductFamilyId::new("1201")));
}

#[tokio::test]
async fn create_component_rejects_unsupported_kinds_locally() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let family = ProductFamilyId::new("1201");

    let missing_kind = Component {
        name: Some("Seats".into()),
        ..Component::default()
    };
    let err = client
        .create_component(&family, &missing_kind)
        .await
        .unwrap_err();
    assert!(matches!(err, ChargifyError::InvalidArgument(_)));

    let prepaid = Component::new("Credits", ComponentKind::PrepaidUsageComponent);
    let err = client.create_component(&family, &prepaid).await.unwrap_err();
    assert!(matches!(err, ChargifyError::InvalidArgument(_)));
}

#[tokio::test]
async fn component_with_price_points_combines_both_halves() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/product_families/1201/components/3301.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "component": {"id": 3301, "name": "Seats", "kind": "quantity_based_component"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/components/3301/price_points.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "price_points": [
                {"id": 1, "handle": "standard", "pricing_scheme": "per_unit", "default": true},
                {"id": 2, "handle": "volume", "pricing_scheme": "volume", "prices": [
                    {"starting_quantity": 1, "ending_quantity": 10, "unit_price": "5.0"},
                    {"starting_quantity": 11, "unit_price": 4}
                ]}
            ]
        })))
        .mount(&server)
        .await;

    let family = ProductFamilyId::new("1201");
    let found = client
        .find_component_with_price_points_by_id_and_product_family(3301, &family)
        .await
        .unwrap();
    assert_eq!(found.component.and_then(|c| c.name), Some("Seats".into()));
    let price_points = found.price_points.expect("price points");
    assert_eq!(price_points.len(), 2);
    assert_eq!(price_points[1].prices[1].unit_price.as_deref(), Some("4"));

    let unknown = client
        .find_component_with_price_points_by_id_and_product_family(9, &family)
        .await
        .unwrap();
    assert!(unknown.component.is_none());
    assert!(unknown.price_points.is_none());
}

#[tokio::test]
async fn update_price_point_puts_wrapped_body() {
    let (server, client) = common::setup().await;

    Mock::given(method("PUT"))
        .and(path("/components/3301/price_points/2.json"))
        .and(body_json(json!({"price_point": {"name": "Volume 2024"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "price_point": {"id": 2, "name": "Volume 2024", "handle": "volume"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = PricePointUpdate {
        name: Some("Volume 2024".into()),
        ..PricePointUpdate::default()
    };
    let price_point = client.update_price_point(3301, 2, &update).await.unwrap();
    assert_eq!(price_point.name.as_deref(), Some("Volume 2024"));
}

#[tokio::test]
async fn list_family_and_subscription_components() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/product_families/1201/components.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"component": {"id": 1, "kind": "on_off_component"}},
            {"component": {"id": 2, "kind": "metered_component"}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/42/components.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"component": {"component_id": 1, "subscription_id": 42, "enabled": true}},
            {"component": {"component_id": 3, "subscription_id": 42, "kind": "quantity_based_component", "allocated_quantity": "2.0"}},
            {"component": {"component_id": 2, "subscription_id": 42, "unit_balance": 17}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/42/components/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "component": {"component_id": 2, "subscription_id": 42, "unit_balance": 17}
        })))
        .mount(&server)
        .await;

    let components = client
        .find_components_by_product_family(&ProductFamilyId::new("1201"))
        .await
        .unwrap();
    assert_eq!(components[0].kind, Some(ComponentKind::OnOffComponent));

    let subscription = SubscriptionId::new("42");
    let attached = client.find_subscription_components(&subscription).await.unwrap();
    assert_eq!(attached.len(), 3);
    assert_eq!(attached[0].enabled, Some(true));
    assert_eq!(attached[1].allocated_quantity.as_deref(), Some("2.0"));

    let one = client
        .find_subscription_component_by_id(&subscription, 2)
        .await
        .unwrap()
        .expect("component attached");
    assert_eq!(one.unit_balance, Some(17));

    let none = client
        .find_subscription_component_by_id(&subscription, 3)
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn allocations_and_preview() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/subscriptions/42/components/1/allocations.json"))
        .and(body_json(json!({"allocation": {"quantity": "5", "memo": "Seats added"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "allocation": {"component_id": 1, "subscription_id": 42, "quantity": "5.0", "previous_quantity": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/subscriptions/42/allocations/preview.json"))
        .and(body_json(json!({"allocations": [{"component_id": 1, "quantity": 8}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "allocation_preview": {
                "total_in_cents": 1500,
                "direction": "upgrade",
                "line_items": [{"transaction_type": "charge", "kind": "quantity_based_component", "amount_in_cents": 1500, "component_id": 1}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let subscription = SubscriptionId::new("42");
    let allocation = Allocation {
        memo: Some("Seats added".into()),
        ..Allocation::new(5)
    };
    let created = client
        .create_component_allocation(&subscription, 1, &allocation)
        .await
        .unwrap();
    assert_eq!(created.quantity.as_deref(), Some("5.0"));
    assert_eq!(created.previous_quantity.as_deref(), Some("3"));

    let preview = client
        .preview_component_allocation(&subscription, 1, 8)
        .await
        .unwrap();
    assert_eq!(preview.total_in_cents, Some(1500));
    assert_eq!(preview.line_items.len(), 1);
}

#[tokio::test]
async fn report_usage() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/subscriptions/42/components/2/usages.json"))
        .and(body_json(json!({"usage": {"quantity": "250", "memo": "nightly batch"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usage": {"id": 9001, "quantity": 250, "memo": "nightly batch"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let usage = client
        .report_subscription_component_usage(
            &SubscriptionId::new("42"),
            2,
            &Usage::new("250", "nightly batch"),
        )
        .await
        .unwrap();
    assert_eq!(usage.id, Some(9001));
    assert_eq!(usage.quantity.as_deref(), Some("250"));
}

#[tokio::test]
async fn migrate_components_to_price_points() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/subscriptions/42/price_points.json"))
        .and(body_json(json!({"components": [{"component_id": 1, "price_point": "annual"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "components": [{"component_id": 1, "price_point_id": 555}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/subscriptions/43/price_points.json"))
        .and(body_json(json!({"components": [
            {"component_id": 1, "price_point": "annual"},
            {"component_id": 2, "price_point": "annual-volume"}
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "components": [
                {"component_id": 1, "price_point": "annual"},
                {"component_id": 2, "price_point": "annual-volume"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let applied = client
        .migrate_subscription_component_to_price_point(&SubscriptionId::new("42"), 1, "annual")
        .await
        .unwrap()
        .expect("one update applied");
    assert_eq!(applied, ComponentPricePointUpdate::new(1, "555"));

    let bulk = client
        .bulk_update_subscription_component_price_point(
            &SubscriptionId::new("43"),
            &[
                ComponentPricePointUpdate::new(1, "annual"),
                ComponentPricePointUpdate::new(2, "annual-volume"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(bulk.len(), 2);
    assert_eq!(bulk[1].price_point, "annual-volume");
}
