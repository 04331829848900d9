//! Chargify operations, grouped by resource.
//!
//! Each submodule adds an `impl ChargifyClient` block. Lookups named `find_*`
//! that target a single resource return `Ok(None)` on HTTP 404; every other
//! call surfaces a 404 as [`ChargifyError::NotFound`](crate::ChargifyError::NotFound).

mod components;
mod customers;
mod payment_profiles;
mod products;
mod subscriptions;
