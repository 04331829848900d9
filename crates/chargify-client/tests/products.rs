//! Product family and product endpoints against a mock Chargify.

mod common;

use chargify_client::{IntervalUnit, Product, ProductFamily, ProductFamilyId, ProductId};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_product_family_wraps_and_authenticates() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/product_families.json"))
        .and(header("authorization", common::BASIC_AUTH))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"product_family": {"name": "Plans"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product_family": {"id": 1201, "name": "Plans", "handle": "plans"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let family = client
        .create_product_family(&ProductFamily::new("Plans"))
        .await
        .unwrap();
    assert_eq!(family.id, Some(ProductFamilyId::new("1201")));
    assert_eq!(family.handle.as_deref(), Some("plans"));
}

#[tokio::test]
async fn find_product_family_returns_none_on_404() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/product_families/999.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let family = client
        .find_product_family_by_id(&ProductFamilyId::new("999"))
        .await
        .unwrap();
    assert!(family.is_none());
}

#[tokio::test]
async fn list_and_archive_product_families() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/product_families.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"product_family": {"id": 1, "name": "Plans"}},
            {"product_family": {"id": 2, "name": "Add-ons"}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/product_families/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product_family": {"id": 2, "name": "Add-ons"}
        })))
        .mount(&server)
        .await;

    let families = client.find_all_product_families().await.unwrap();
    let names: Vec<_> = families.iter().filter_map(|f| f.name.as_deref()).collect();
    assert_eq!(names, vec!["Plans", "Add-ons"]);

    let archived = client
        .archive_product_family_by_id(&ProductFamilyId::new("2"))
        .await
        .unwrap();
    assert_eq!(archived.and_then(|f| f.name), Some("Add-ons".to_string()));

    let missing = client
        .archive_product_family_by_id(&ProductFamilyId::new("3"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn create_product_in_family() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/product_families/1201/products.json"))
        .and(body_json(json!({
            "product": {
                "name": "Gold",
                "handle": "gold",
                "price_in_cents": 2500,
                "interval": 1,
                "interval_unit": "month"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {
                "id": 77,
                "name": "Gold",
                "handle": "gold",
                "price_in_cents": 2500,
                "interval": 1,
                "interval_unit": "month",
                "product_family": {"id": 1201, "name": "Plans"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client
        .create_product(
            &ProductFamilyId::new("1201"),
            &Product::new("Gold", 2500, 1, IntervalUnit::Month).with_handle("gold"),
        )
        .await
        .unwrap();
    assert_eq!(product.id, Some(ProductId::new("77")));
    assert_eq!(
        product.product_family.and_then(|f| f.id),
        Some(ProductFamilyId::new("1201"))
    );
}

#[tokio::test]
async fn find_product_by_handle_encodes_segment() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/products/handle/gold-annual.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 78, "handle": "gold-annual", "interval": 12, "interval_unit": "month"}
        })))
        .mount(&server)
        .await;

    let product = client
        .find_product_by_api_handle("gold-annual")
        .await
        .unwrap()
        .expect("product exists");
    assert_eq!(product.interval, Some(12));

    let missing = client.find_product_by_api_handle("silver").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn product_price_points_and_lists() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/products/77/price_points.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "price_points": [
                {"id": 10, "handle": "monthly", "price_in_cents": 2500, "type": "default"},
                {"id": 11, "handle": "intro", "price_in_cents": 1000, "type": "custom"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"product": {"id": 77, "handle": "gold"}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product_families/1201/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"product": {"id": 77, "handle": "gold"}},
            {"product": {"id": 78, "handle": "gold-annual"}}
        ])))
        .mount(&server)
        .await;

    let price_points = client
        .find_product_price_points_by_product_id(&ProductId::new("77"))
        .await
        .unwrap()
        .expect("price points");
    assert_eq!(price_points.len(), 2);
    assert_eq!(price_points[1].kind.as_deref(), Some("custom"));

    let none = client
        .find_product_price_points_by_product_id(&ProductId::new("1"))
        .await
        .unwrap();
    assert!(none.is_none());

    assert_eq!(client.find_all_products().await.unwrap().len(), 1);
    assert_eq!(
        client
            .find_products_by_product_family_id(&ProductFamilyId::new("1201"))
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn archive_product() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/products/77.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 77, "handle": "gold", "archived_at": "2024-05-01T10:00:00-04:00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client
        .archive_product_by_id(&ProductId::new("77"))
        .await
        .unwrap()
        .expect("archived product");
    assert!(product.archived_at.is_some());
}
