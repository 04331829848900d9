//! Components, their price points, allocations and usage.
//!
//! Components are add-ons priced separately from a subscription's product:
//! quantity-based seats, metered usage, on/off features and so on.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::ids::{opt_string_or_number, ProductFamilyId, SubscriptionId};

/// Kind of component. Also the JSON key a component is wrapped under on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Billed per allocated unit.
    QuantityBasedComponent,
    /// Billed per reported unit of usage.
    MeteredComponent,
    /// A single feature that is either enabled or not.
    OnOffComponent,
    /// Usage paid for up front.
    PrepaidUsageComponent,
    /// Billed from streamed events.
    EventBasedComponent,
    /// A kind this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ComponentKind {
    /// Wire representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuantityBasedComponent => "quantity_based_component",
            Self::MeteredComponent => "metered_component",
            Self::OnOffComponent => "on_off_component",
            Self::PrepaidUsageComponent => "prepaid_usage_component",
            Self::EventBasedComponent => "event_based_component",
            Self::Unknown => "unknown",
        }
    }
}

/// How component prices are computed from quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingScheme {
    /// Same unit price for every unit.
    PerUnit,
    /// Price depends on the bracket the total falls into.
    Volume,
    /// Each bracket is priced separately.
    Tiered,
    /// Flat price per block of units.
    Stairstep,
    /// A scheme this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A price bracket of a component price point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Price id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// First quantity of the bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_quantity: Option<i64>,
    /// Last quantity of the bracket (open-ended when absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_quantity: Option<i64>,
    /// Unit price as a decimal string.
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<String>,
    /// Owning component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<i64>,
    /// Owning price point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_point_id: Option<i64>,
}

/// A component price point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricePoint {
    /// Price point id.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// API handle.
    #[serde(default)]
    pub handle: Option<String>,
    /// Pricing scheme.
    #[serde(default)]
    pub pricing_scheme: Option<PricingScheme>,
    /// Owning component.
    #[serde(default)]
    pub component_id: Option<i64>,
    /// Whether this is the component's default price point.
    #[serde(default)]
    pub default: Option<bool>,
    /// Price point type.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Price brackets.
    #[serde(default)]
    pub prices: Vec<Price>,
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

/// Changes applied to an existing component price point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricePointUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// New pricing scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_scheme: Option<PricingScheme>,
    /// Replacement price brackets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
}

/// A component definition within a product family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Component id (assigned on creation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// API handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Component kind. Required to create a component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ComponentKind>,
    /// Name of the unit being billed (e.g. "seat").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Unit price as a decimal string.
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<String>,
    /// Price per unit in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit_in_cents: Option<i64>,
    /// Pricing scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_scheme: Option<PricingScheme>,
    /// Price brackets for tiered, volume and stairstep schemes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
    /// Owning product family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_family_id: Option<ProductFamilyId>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the component is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// Whether the component has been archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// Whether the component recurs every period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    /// Default price point id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_price_point_id: Option<i64>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Component {
    /// Create a new, unsaved component of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind),
            ..Self::default()
        }
    }
}

/// A component together with its price points.
///
/// Either half may be missing when the corresponding lookup returned nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentWithPricePoints {
    /// The component.
    pub component: Option<Component>,
    /// Its price points.
    pub price_points: Option<Vec<PricePoint>>,
}

/// Moves a subscription's component to a different price point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPricePointUpdate {
    /// Component to update.
    pub component_id: i64,
    /// Target price point id or handle.
    #[serde(alias = "price_point_id", deserialize_with = "crate::ids::string_or_number")]
    pub price_point: String,
}

impl ComponentPricePointUpdate {
    /// Create an update for one component.
    #[must_use]
    pub fn new(component_id: i64, price_point: impl Into<String>) -> Self {
        Self {
            component_id,
            price_point: price_point.into(),
        }
    }
}

/// A component as attached to a particular subscription.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriptionComponent {
    /// Component id.
    pub component_id: i64,
    /// Owning subscription.
    #[serde(default)]
    pub subscription_id: Option<SubscriptionId>,
    /// Component name.
    #[serde(default)]
    pub name: Option<String>,
    /// Component handle.
    #[serde(default)]
    pub component_handle: Option<String>,
    /// Component kind.
    #[serde(default)]
    pub kind: Option<ComponentKind>,
    /// Billed unit name.
    #[serde(default)]
    pub unit_name: Option<String>,
    /// Whether an on/off component is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Metered usage balance.
    #[serde(default)]
    pub unit_balance: Option<i64>,
    /// Allocated quantity for quantity-based components, as a decimal string.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub allocated_quantity: Option<String>,
    /// Pricing scheme.
    #[serde(default)]
    pub pricing_scheme: Option<PricingScheme>,
    /// Active price point id.
    #[serde(default)]
    pub price_point_id: Option<i64>,
    /// Active price point handle.
    #[serde(default)]
    pub price_point_handle: Option<String>,
    /// Active price point name.
    #[serde(default)]
    pub price_point_name: Option<String>,
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

/// A change in a quantity-based or on/off component's allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Allocation id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<i64>,
    /// Component id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<i64>,
    /// Subscription id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<SubscriptionId>,
    /// New quantity, as a decimal string.
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    /// Quantity before this allocation (read-only).
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_quantity: Option<String>,
    /// Memo shown on the subscription's history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Proration scheme for upgrades (`prorate-attempt-capture`, `full-price-delay-capture`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_upgrade_scheme: Option<String>,
    /// Proration scheme for downgrades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_downgrade_scheme: Option<String>,
    /// Whether charges accrue to the next renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accrue_charge: Option<bool>,
    /// Upgrade charge behavior (`full`, `prorated`, `none`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_charge: Option<String>,
    /// Downgrade credit behavior (`full`, `prorated`, `none`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downgrade_credit: Option<String>,
    /// Price point to allocate against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_point_id: Option<i64>,
    /// When the allocation took effect (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Allocation {
    /// Allocate `quantity` units. Fractional quantities are passed as strings.
    #[must_use]
    pub fn new(quantity: impl ToString) -> Self {
        Self {
            quantity: Some(quantity.to_string()),
            ..Self::default()
        }
    }
}

/// Component id and quantity submitted for an allocation preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentAllocation {
    /// Component id.
    pub component_id: i64,
    /// Proposed quantity.
    pub quantity: i64,
}

/// Charges and credits an allocation would produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllocationPreview {
    /// Start of the previewed period.
    #[serde(default)]
    pub start_date: Option<DateTime<FixedOffset>>,
    /// End of the previewed period.
    #[serde(default)]
    pub end_date: Option<DateTime<FixedOffset>>,
    /// Subtotal in cents.
    #[serde(default)]
    pub subtotal_in_cents: Option<i64>,
    /// Total tax in cents.
    #[serde(default)]
    pub total_tax_in_cents: Option<i64>,
    /// Total discount in cents.
    #[serde(default)]
    pub total_discount_in_cents: Option<i64>,
    /// Total in cents.
    #[serde(default)]
    pub total_in_cents: Option<i64>,
    /// `upgrade` or `downgrade`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Proration scheme applied.
    #[serde(default)]
    pub proration_scheme: Option<String>,
    /// Itemized charges.
    #[serde(default)]
    pub line_items: Vec<AllocationPreviewLineItem>,
}

/// A line of an allocation preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllocationPreviewLineItem {
    /// Transaction type (`charge`, `credit`, ...).
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// Line kind (`component`, `tax`, ...).
    #[serde(default)]
    pub kind: Option<String>,
    /// Amount in cents.
    #[serde(default)]
    pub amount_in_cents: Option<i64>,
    /// Memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Discount in cents.
    #[serde(default)]
    pub discount_amount_in_cents: Option<i64>,
    /// Taxable amount in cents.
    #[serde(default)]
    pub taxable_amount_in_cents: Option<i64>,
    /// Component id.
    #[serde(default)]
    pub component_id: Option<i64>,
    /// `upgrade` or `downgrade`.
    #[serde(default)]
    pub direction: Option<String>,
}

/// A usage record reported against a metered component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Usage id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Quantity used, as a decimal string.
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    /// Memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Price point the usage is billed at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_point_id: Option<i64>,
    /// Creation timestamp (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Usage {
    /// Report `quantity` units with a memo.
    #[must_use]
    pub fn new(quantity: impl Into<String>, memo: impl Into<String>) -> Self {
        Self {
            quantity: Some(quantity.into()),
            memo: Some(memo.into()),
            ..Self::default()
        }
    }
}
