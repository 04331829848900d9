//! Chargify Client SDK.
//!
//! Typed async access to the Chargify subscription billing REST API. Every
//! operation maps to one endpoint: the request body is wrapped in Chargify's
//! JSON envelope, the response is unwrapped into a `chargify-core` type, and
//! error statuses are mapped to [`ChargifyError`].
//!
//! # Example
//!
//! ```no_run
//! use chargify_client::{ChargifyClient, CreateSubscription, Customer};
//!
//! # async fn example() -> Result<(), chargify_client::ChargifyError> {
//! let client = ChargifyClient::new("acme", "your-api-key")?;
//!
//! let customer = client
//!     .create_customer(&Customer::new("Ada", "Lovelace", "ada@example.com").with_reference("ada"))
//!     .await?;
//!
//! let subscription = client
//!     .create_subscription(&CreateSubscription {
//!         product_handle: Some("gold".to_string()),
//!         customer_id: customer.id.clone(),
//!         ..CreateSubscription::default()
//!     })
//!     .await?;
//!
//! println!("subscription {} is {:?}", subscription.id, subscription.state);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod client;
mod config;
mod envelope;
mod error;
mod query;

pub use client::{ChargifyClient, ClientOptions, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
pub use config::ChargifyConfig;
pub use error::ChargifyError;

pub use chargify_core;
pub use chargify_core::*;
