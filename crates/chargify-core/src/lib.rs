//! Domain types for the Chargify subscription billing API.
//!
//! This crate holds the typed request and response bodies used by
//! `chargify-client`:
//!
//! - **Identifiers**: `ProductFamilyId`, `ProductId`, `SubscriptionId`, `CustomerId`, `PaymentProfileId`
//! - **Catalog**: `ProductFamily`, `Product`, `ProductPricePoint`
//! - **Components**: `Component`, `PricePoint`, `Allocation`, `Usage`
//! - **Customers**: `Customer`, `ReferralCode`, `PaymentProfile`
//! - **Subscriptions**: `Subscription`, `Migration`, `RenewalPreview`, `Metadata`, `Adjustment`
//! - **Transactions**: `Transaction`, `TransactionSearchOptions`
//!
//! # Wire conventions
//!
//! Field names follow Chargify's snake_case JSON. Writable types skip `None`
//! fields, so only what is set is sent. Money is carried in cents (`i64`) where
//! Chargify offers a cents field, otherwise as a decimal string.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod customer;
pub mod ids;
pub mod payment;
pub mod product;
pub mod subscription;
pub mod transaction;

pub use component::{
    Allocation, AllocationPreview, AllocationPreviewLineItem, Component, ComponentAllocation,
    ComponentKind, ComponentPricePointUpdate, ComponentWithPricePoints, Price, PricePoint,
    PricePointUpdate, PricingScheme, SubscriptionComponent, Usage,
};
pub use customer::{Customer, ReferralCode};
pub use ids::{CustomerId, IdError, PaymentProfileId, ProductFamilyId, ProductId, SubscriptionId};
pub use payment::{CreatePaymentProfile, PaymentProfile, PaymentType, UpdatePaymentProfile};
pub use product::{IntervalUnit, Product, ProductFamily, ProductPricePoint};
pub use subscription::{
    format_datetime, Adjustment, CreateSubscription, CreateSubscriptionComponent, Metadata,
    Migration, RenewalPreview, RenewalPreviewLineItem, Subscription, SubscriptionCharge,
    SubscriptionChargeResult, SubscriptionMetadata, SubscriptionProductUpdate,
    SubscriptionReactivationData, SubscriptionState, SubscriptionStatement, UpdateSubscription,
};
pub use transaction::{
    SortDirection, Transaction, TransactionKind, TransactionSearchOptions, MAX_PAGE_SIZE,
};
