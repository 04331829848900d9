//! Transactions recorded against a subscription, and the options used to
//! search them.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::{CustomerId, ProductId, SubscriptionId};

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Kind of transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// A charge.
    Charge,
    /// A refund.
    Refund,
    /// A payment.
    Payment,
    /// A credit.
    Credit,
    /// A payment authorization.
    PaymentAuthorization,
    /// Informational entry.
    Info,
    /// A balance adjustment.
    Adjustment,
    /// A kind this client does not know about.
    #[serde(other)]
    Unknown,
}

impl TransactionKind {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Refund => "refund",
            Self::Payment => "payment",
            Self::Credit => "credit",
            Self::PaymentAuthorization => "payment_authorization",
            Self::Info => "info",
            Self::Adjustment => "adjustment",
            Self::Unknown => "unknown",
        }
    }
}

/// A transaction on a subscription.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: i64,
    /// Transaction type.
    #[serde(default)]
    pub transaction_type: Option<TransactionKind>,
    /// Finer-grained kind (`baseline`, `component_proration`, ...).
    #[serde(default)]
    pub kind: Option<String>,
    /// Amount in cents.
    #[serde(default)]
    pub amount_in_cents: Option<i64>,
    /// Balance before the transaction, in cents.
    #[serde(default)]
    pub starting_balance_in_cents: Option<i64>,
    /// Balance after the transaction, in cents.
    #[serde(default)]
    pub ending_balance_in_cents: Option<i64>,
    /// Memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Whether the transaction succeeded.
    #[serde(default)]
    pub success: Option<bool>,
    /// Subscription the transaction belongs to.
    #[serde(default)]
    pub subscription_id: Option<SubscriptionId>,
    /// Customer the transaction belongs to.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Product billed.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Payment the transaction settled against.
    #[serde(default)]
    pub payment_id: Option<i64>,
    /// Gateway transaction id.
    #[serde(default)]
    pub gateway_transaction_id: Option<String>,
    /// Statement the transaction appears on.
    #[serde(default)]
    pub statement_id: Option<i64>,
    /// Amount refunded so far, in cents.
    #[serde(default)]
    pub refunded_amount_in_cents: Option<i64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Largest page size Chargify accepts on list endpoints.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Filters for listing a subscription's transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSearchOptions {
    /// Page number.
    pub page: u32,
    /// Page size; at most [`MAX_PAGE_SIZE`].
    pub page_size: u32,
    /// Sort direction.
    pub direction: SortDirection,
    /// Only transactions with an id at or below this one.
    pub max_id: Option<i64>,
    /// Only transactions with an id at or above this one.
    pub since_id: Option<i64>,
    /// Only transactions of these kinds.
    pub kinds: Option<Vec<TransactionKind>>,
    /// Only transactions created on or after this date.
    pub since_date: Option<NaiveDate>,
    /// Only transactions created on or before this date.
    pub until_date: Option<NaiveDate>,
}

impl Default for TransactionSearchOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            direction: SortDirection::Desc,
            max_id: None,
            since_id: None,
            kinds: None,
            since_date: None,
            until_date: None,
        }
    }
}

impl TransactionSearchOptions {
    /// Request a specific page.
    #[must_use]
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Restrict to the given kinds.
    #[must_use]
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = TransactionKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    /// Restrict to a date range (inclusive).
    #[must_use]
    pub fn between(mut self, since: NaiveDate, until: NaiveDate) -> Self {
        self.since_date = Some(since);
        self.until_date = Some(until);
        self
    }
}
