//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use chargify_client::{ChargifyClient, ClientOptions};
use wiremock::MockServer;

/// API key every test client authenticates with.
pub const API_KEY: &str = "test-api-key";

/// `Authorization` header Chargify expects for [`API_KEY`] (`test-api-key:x`).
pub const BASIC_AUTH: &str = "Basic dGVzdC1hcGkta2V5Ong=";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, ChargifyClient) {
    let server = MockServer::start().await;
    let client = ChargifyClient::with_options(server.uri(), API_KEY, ClientOptions::default())
        .expect("client against mock server");
    (server, client)
}

/// Minimal subscription body as Chargify returns it.
pub fn subscription_json(id: i64, state: &str) -> serde_json::Value {
    serde_json::json!({
        "subscription": {
            "id": id,
            "state": state,
            "balance_in_cents": 0,
            "customer": {"id": 501, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"},
            "product": {"id": 77, "handle": "gold", "name": "Gold", "price_in_cents": 2500}
        }
    })
}
