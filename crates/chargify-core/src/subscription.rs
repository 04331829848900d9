//! Subscriptions and everything that hangs off them: product changes,
//! migrations, reactivation, charges, renewals, metadata, statements and
//! adjustments.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

use crate::customer::Customer;
use crate::ids::{opt_string_or_number, CustomerId, PaymentProfileId, ProductId, SubscriptionId};
use crate::payment::PaymentProfile;
use crate::product::Product;

/// Format Chargify expects for local date-times in request bodies.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a local date-time the way Chargify expects it.
#[must_use]
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

fn serialize_opt_datetime<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&format_datetime(dt)),
        None => serializer.serialize_none(),
    }
}

/// Flags Chargify reads as `1`/`0` integers.
fn serialize_opt_flag<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    /// Billing normally.
    Active,
    /// In a trial period.
    Trialing,
    /// Trial ended without a payment method.
    TrialEnded,
    /// Payment failed; dunning in progress.
    PastDue,
    /// Payment failed but the subscription stays active.
    SoftFailure,
    /// Payment failed and dunning is exhausted.
    Unpaid,
    /// Canceled.
    Canceled,
    /// Reached its expiration date.
    Expired,
    /// Temporarily paused.
    OnHold,
    /// Suspended.
    Suspended,
    /// Renewal is being assessed.
    Assessing,
    /// Created but not yet started.
    Pending,
    /// Waiting for the customer to complete signup.
    AwaitingSignup,
    /// Signup failed.
    FailedToCreate,
    /// Paused.
    Paused,
    /// A state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl SubscriptionState {
    /// Wire representation, used for state filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::TrialEnded => "trial_ended",
            Self::PastDue => "past_due",
            Self::SoftFailure => "soft_failure",
            Self::Unpaid => "unpaid",
            Self::Canceled => "canceled",
            Self::Expired => "expired",
            Self::OnHold => "on_hold",
            Self::Suspended => "suspended",
            Self::Assessing => "assessing",
            Self::Pending => "pending",
            Self::AwaitingSignup => "awaiting_signup",
            Self::FailedToCreate => "failed_to_create",
            Self::Paused => "paused",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SubscriptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subscription, as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    /// Subscription id.
    pub id: SubscriptionId,
    /// Current state.
    #[serde(default)]
    pub state: Option<SubscriptionState>,
    /// State before the last transition.
    #[serde(default)]
    pub previous_state: Option<SubscriptionState>,
    /// Caller-assigned unique reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// Balance owed, in cents.
    #[serde(default)]
    pub balance_in_cents: Option<i64>,
    /// Revenue collected so far, in cents.
    #[serde(default)]
    pub total_revenue_in_cents: Option<i64>,
    /// Product price the subscription renews at, in cents.
    #[serde(default)]
    pub product_price_in_cents: Option<i64>,
    /// Product version the subscription is on.
    #[serde(default)]
    pub product_version_number: Option<i32>,
    /// Active product price point.
    #[serde(default)]
    pub product_price_point_id: Option<i64>,
    /// Product scheduled to take over at next renewal.
    #[serde(default)]
    pub next_product_id: Option<ProductId>,
    /// Product price point scheduled to take over at next renewal.
    #[serde(default)]
    pub next_product_price_point_id: Option<i64>,
    /// Handle of the scheduled product.
    #[serde(default)]
    pub next_product_handle: Option<String>,
    /// Start of the current period.
    #[serde(default)]
    pub current_period_started_at: Option<DateTime<FixedOffset>>,
    /// End of the current period.
    #[serde(default)]
    pub current_period_ends_at: Option<DateTime<FixedOffset>>,
    /// Next renewal.
    #[serde(default)]
    pub next_assessment_at: Option<DateTime<FixedOffset>>,
    /// Trial start.
    #[serde(default)]
    pub trial_started_at: Option<DateTime<FixedOffset>>,
    /// Trial end.
    #[serde(default)]
    pub trial_ended_at: Option<DateTime<FixedOffset>>,
    /// Activation time.
    #[serde(default)]
    pub activated_at: Option<DateTime<FixedOffset>>,
    /// Expiration time.
    #[serde(default)]
    pub expires_at: Option<DateTime<FixedOffset>>,
    /// Cancellation time.
    #[serde(default)]
    pub canceled_at: Option<DateTime<FixedOffset>>,
    /// Scheduled cancellation time.
    #[serde(default)]
    pub delayed_cancel_at: Option<DateTime<FixedOffset>>,
    /// Cancellation message.
    #[serde(default)]
    pub cancellation_message: Option<String>,
    /// How the subscription was canceled.
    #[serde(default)]
    pub cancellation_method: Option<String>,
    /// Whether the subscription cancels at the end of the period.
    #[serde(default)]
    pub cancel_at_end_of_period: Option<bool>,
    /// Reason code given on cancellation.
    #[serde(default)]
    pub reason_code: Option<String>,
    /// Coupon applied at signup.
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// `automatic`, `remittance` or `prepaid`.
    #[serde(default)]
    pub payment_collection_method: Option<String>,
    /// Calendar day renewals snap to.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub snap_day: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Id of the signup payment.
    #[serde(default)]
    pub signup_payment_id: Option<i64>,
    /// Revenue collected at signup, as a decimal string.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub signup_revenue: Option<String>,
    /// Owning customer.
    #[serde(default)]
    pub customer: Option<Customer>,
    /// Subscribed product.
    #[serde(default)]
    pub product: Option<Product>,
    /// Payment profile billed for the subscription.
    #[serde(default)]
    pub credit_card: Option<PaymentProfile>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Subscription {
    /// Id of the embedded customer, if the response included one.
    #[must_use]
    pub fn customer_id(&self) -> Option<&CustomerId> {
        self.customer.as_ref().and_then(|c| c.id.as_ref())
    }

    /// Id of the embedded product, if the response included one.
    #[must_use]
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product.as_ref().and_then(|p| p.id.as_ref())
    }
}

/// Initial component quantities for a new subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSubscriptionComponent {
    /// Component id.
    pub component_id: i64,
    /// Starting quantity for quantity-based components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_quantity: Option<i64>,
    /// Whether an on/off component starts enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Price point id or handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_point_id: Option<String>,
}

/// Fields for creating a subscription.
///
/// Exactly one way of identifying the product (`product_id` or
/// `product_handle`) and the customer (`customer_id`, `customer_reference` or
/// `customer_attributes`) should be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSubscription {
    /// Product by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Product by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_handle: Option<String>,
    /// Product price point by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_point_id: Option<i64>,
    /// Product price point by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_point_handle: Option<String>,
    /// Existing customer by id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Existing customer by reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    /// New customer created with the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_attributes: Option<Customer>,
    /// Existing payment profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_profile_id: Option<PaymentProfileId>,
    /// Caller-assigned unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Coupon to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// `automatic`, `remittance` or `prepaid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_collection_method: Option<String>,
    /// First renewal date.
    #[serde(
        serialize_with = "serialize_opt_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_billing_at: Option<NaiveDateTime>,
    /// Initial component quantities.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<CreateSubscriptionComponent>,
    /// Metadata attached to the subscription.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// Fields that may change on an existing subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSubscription {
    /// Next renewal date.
    #[serde(
        serialize_with = "serialize_opt_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_billing_at: Option<NaiveDateTime>,
    /// Calendar day renewals snap to, or `end`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_day: Option<String>,
    /// `automatic`, `remittance` or `prepaid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_collection_method: Option<String>,
    /// Caller-assigned unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Custom price for the current product, in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_in_cents: Option<i64>,
}

impl UpdateSubscription {
    /// An update that only moves the next billing date.
    #[must_use]
    pub fn next_billing_at(at: NaiveDateTime) -> Self {
        Self {
            next_billing_at: Some(at),
            ..Self::default()
        }
    }
}

/// A product change, immediate or scheduled for the next renewal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionProductUpdate {
    /// Target product handle.
    pub product_handle: String,
    /// Target price point handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_point_handle: Option<String>,
    /// Schedule the change for the next renewal instead of applying it now.
    pub product_change_delayed: bool,
}

/// An immediate, prorated product migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Migration {
    /// Target product handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_handle: Option<String>,
    /// Target product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Target price point handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_price_point_handle: Option<String>,
    /// Whether the target product's trial applies. Sent as `1`/`0`.
    #[serde(
        serialize_with = "serialize_opt_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_trial: Option<bool>,
    /// Whether the target product's initial charge applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_initial_charge: Option<bool>,
    /// Whether coupons carry over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_coupons: Option<bool>,
    /// Whether existing balance is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_period: Option<bool>,
}

impl Migration {
    /// Migrate to the product with the given handle.
    #[must_use]
    pub fn to_product(handle: impl Into<String>) -> Self {
        Self {
            product_handle: Some(handle.into()),
            ..Self::default()
        }
    }

    /// Also pick a price point on the target product.
    #[must_use]
    pub fn with_price_point(mut self, handle: impl Into<String>) -> Self {
        self.product_price_point_handle = Some(handle.into());
        self
    }
}

/// Options for reactivating a canceled subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionReactivationData {
    /// Restart the product's trial.
    pub include_trial: bool,
    /// Keep the balance the subscription had when it was canceled.
    pub preserve_balance: bool,
    /// Coupon to apply on reactivation.
    pub coupon_code: Option<String>,
    /// Resume rather than restart the billing period.
    pub resume: Option<bool>,
    /// Forgive the outstanding balance when resuming.
    pub forgive_balance: bool,
}

/// A one-off charge against a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionCharge {
    /// Amount as a decimal string (e.g. `"10.50"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Amount in cents. Used instead of `amount` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<i64>,
    /// Memo shown on the invoice.
    pub memo: String,
    /// Authorize now, capture at renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_capture: Option<bool>,
    /// Add to the next renewal instead of charging now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accrue_charge: Option<bool>,
    /// Start dunning if the charge fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiate_dunning: Option<bool>,
    /// Whether the charge is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// `automatic`, `remittance` or `prepaid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_collection_method: Option<String>,
}

impl SubscriptionCharge {
    /// Charge `amount_in_cents` with the given memo.
    #[must_use]
    pub fn in_cents(amount_in_cents: i64, memo: impl Into<String>) -> Self {
        Self {
            amount_in_cents: Some(amount_in_cents),
            memo: memo.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a one-off charge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriptionChargeResult {
    /// Charge id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Whether the charge succeeded.
    #[serde(default)]
    pub success: Option<bool>,
    /// Memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Charged amount in cents.
    #[serde(default)]
    pub amount_in_cents: Option<i64>,
    /// Subscription balance after the charge, in cents.
    #[serde(default)]
    pub ending_balance_in_cents: Option<i64>,
    /// Transaction type (`charge`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Charged subscription.
    #[serde(default)]
    pub subscription_id: Option<SubscriptionId>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// What the next renewal will cost.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenewalPreview {
    /// When the renewal happens.
    #[serde(default)]
    pub next_assessment_at: Option<DateTime<FixedOffset>>,
    /// Subtotal in cents.
    #[serde(default)]
    pub subtotal_in_cents: Option<i64>,
    /// Tax in cents.
    #[serde(default)]
    pub total_tax_in_cents: Option<i64>,
    /// Discount in cents.
    #[serde(default)]
    pub total_discount_in_cents: Option<i64>,
    /// Total in cents.
    #[serde(default)]
    pub total_in_cents: Option<i64>,
    /// Balance carried into the renewal, in cents.
    #[serde(default)]
    pub existing_balance_in_cents: Option<i64>,
    /// Total due including existing balance, in cents.
    #[serde(default)]
    pub total_amount_due_in_cents: Option<i64>,
    /// Whether taxes could not be calculated.
    #[serde(default)]
    pub uncalculated_taxes: Option<bool>,
    /// Itemized charges.
    #[serde(default)]
    pub line_items: Vec<RenewalPreviewLineItem>,
}

/// A line of a renewal preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenewalPreviewLineItem {
    /// Transaction type.
    #[serde(default)]
    pub transaction_type: Option<String>,
    /// Line kind (`baseline`, `component`, `tax`, ...).
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
    /// Product id.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Product handle.
    #[serde(default)]
    pub product_handle: Option<String>,
    /// Product name.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Component id.
    #[serde(default)]
    pub component_id: Option<i64>,
    /// Component handle.
    #[serde(default)]
    pub component_handle: Option<String>,
    /// Component name.
    #[serde(default)]
    pub component_name: Option<String>,
    /// Start of the billed period.
    #[serde(default)]
    pub period_range_start: Option<String>,
    /// End of the billed period.
    #[serde(default)]
    pub period_range_end: Option<String>,
}

/// A metadata name/value pair on a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Metadata id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Field name.
    pub name: String,
    /// Field value.
    #[serde(deserialize_with = "crate::ids::string_or_number")]
    pub value: String,
    /// Owning resource (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,
}

impl Metadata {
    /// Create a name/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A page of a subscription's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriptionMetadata {
    /// Total number of metadata entries.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Page returned.
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Entries per page.
    #[serde(default)]
    pub per_page: Option<u32>,
    /// The entries.
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

impl SubscriptionMetadata {
    /// Look up a value by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value.as_str())
    }
}

/// A closed billing period of a subscription.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriptionStatement {
    /// Statement id.
    pub id: i64,
    /// Owning subscription.
    #[serde(default)]
    pub subscription_id: Option<SubscriptionId>,
    /// Period start.
    #[serde(default)]
    pub opened_at: Option<DateTime<FixedOffset>>,
    /// Period end.
    #[serde(default)]
    pub closed_at: Option<DateTime<FixedOffset>>,
    /// When the statement was settled.
    #[serde(default)]
    pub settled_at: Option<DateTime<FixedOffset>>,
    /// Balance at period start, in cents.
    #[serde(default)]
    pub starting_balance_in_cents: Option<i64>,
    /// Balance at period end, in cents.
    #[serde(default)]
    pub ending_balance_in_cents: Option<i64>,
    /// Total charged, in cents.
    #[serde(default)]
    pub total_in_cents: Option<i64>,
    /// Total paid, in cents.
    #[serde(default)]
    pub paid_in_cents: Option<i64>,
    /// Customer first name at statement time.
    #[serde(default)]
    pub customer_first_name: Option<String>,
    /// Customer last name at statement time.
    #[serde(default)]
    pub customer_last_name: Option<String>,
    /// Customer organization at statement time.
    #[serde(default)]
    pub customer_organization: Option<String>,
    /// Rendered statement text.
    #[serde(default)]
    pub text_view: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A balance adjustment on a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Adjustment id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Amount as a decimal string. Positive increases the balance.
    #[serde(
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    /// Amount in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<i64>,
    /// Memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// `target` to set the balance outright instead of adjusting it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_method: Option<String>,
    /// Whether the adjustment succeeded (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Balance after the adjustment, in cents (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_balance_in_cents: Option<i64>,
    /// Adjusted subscription (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<SubscriptionId>,
    /// Creation timestamp (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Adjustment {
    /// Adjust the balance by `amount_in_cents`.
    #[must_use]
    pub fn in_cents(amount_in_cents: i64, memo: impl Into<String>) -> Self {
        Self {
            amount_in_cents: Some(amount_in_cents),
            memo: Some(memo.into()),
            ..Self::default()
        }
    }
}
