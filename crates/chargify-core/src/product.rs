//! Product catalog types: product families, products and their price points.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::ids::{ProductFamilyId, ProductId};

/// Unit of a billing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    /// Interval measured in days.
    Day,
    /// Interval measured in months.
    Month,
    /// No interval; used by expiration settings that never lapse.
    Never,
    /// A unit this client does not know about.
    #[serde(other)]
    Unknown,
}

impl IntervalUnit {
    /// Wire representation of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Never => "never",
            Self::Unknown => "unknown",
        }
    }
}

/// A product family groups products, components and coupons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFamily {
    /// Chargify id (assigned on creation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductFamilyId>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// API handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accounting code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl ProductFamily {
    /// Create a new, unsaved product family with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A product a customer can subscribe to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Chargify id (assigned on creation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// API handle, unique within the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accounting code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_code: Option<String>,
    /// Recurring price in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_in_cents: Option<i64>,
    /// Length of a billing period, in `interval_unit`s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    /// Unit of the billing interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<IntervalUnit>,
    /// One-time setup charge in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_charge_in_cents: Option<i64>,
    /// Price charged during the trial, in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_price_in_cents: Option<i64>,
    /// Trial length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval: Option<i32>,
    /// Trial length unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_interval_unit: Option<IntervalUnit>,
    /// Lifetime of the subscription before it expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_interval: Option<i32>,
    /// Unit of the expiration interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_interval_unit: Option<IntervalUnit>,
    /// Whether a card is required at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_credit_card: Option<bool>,
    /// Whether a card is requested at signup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_credit_card: Option<bool>,
    /// Whether the product is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// URL the hosted page returns to after an update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_return_url: Option<String>,
    /// Product version number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i32>,
    /// Default price point id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_price_point_id: Option<i64>,
    /// Owning product family (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_family: Option<ProductFamily>,
    /// Set once the product has been archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<FixedOffset>>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Product {
    /// Create a new, unsaved product billed every `interval` `interval_unit`s.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price_in_cents: i64,
        interval: i32,
        interval_unit: IntervalUnit,
    ) -> Self {
        Self {
            name: Some(name.into()),
            price_in_cents: Some(price_in_cents),
            interval: Some(interval),
            interval_unit: Some(interval_unit),
            ..Self::default()
        }
    }

    /// Set the API handle.
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

/// A price point attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ProductPricePoint {
    /// Price point id.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// API handle.
    #[serde(default)]
    pub handle: Option<String>,
    /// Recurring price in cents.
    #[serde(default)]
    pub price_in_cents: Option<i64>,
    /// Billing interval.
    #[serde(default)]
    pub interval: Option<i32>,
    /// Billing interval unit.
    #[serde(default)]
    pub interval_unit: Option<IntervalUnit>,
    /// Trial price in cents.
    #[serde(default)]
    pub trial_price_in_cents: Option<i64>,
    /// Trial length.
    #[serde(default)]
    pub trial_interval: Option<i32>,
    /// Trial length unit.
    #[serde(default)]
    pub trial_interval_unit: Option<IntervalUnit>,
    /// One-time setup charge in cents.
    #[serde(default)]
    pub initial_charge_in_cents: Option<i64>,
    /// Expiration interval.
    #[serde(default)]
    pub expiration_interval: Option<i32>,
    /// Expiration interval unit.
    #[serde(default)]
    pub expiration_interval_unit: Option<IntervalUnit>,
    /// Owning product.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Price point type (`default`, `catalog`, `custom`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Archive timestamp.
    #[serde(default)]
    pub archived_at: Option<DateTime<FixedOffset>>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}
