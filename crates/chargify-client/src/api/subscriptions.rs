//! Subscriptions and everything hanging directly off them: charges,
//! product changes, reactivation, metadata, statements, transactions and
//! adjustments.

use std::collections::BTreeMap;

use chargify_core::{
    Adjustment, CreateSubscription, CustomerId, Metadata, Migration, RenewalPreview,
    SortDirection, Subscription, SubscriptionCharge, SubscriptionChargeResult, SubscriptionId,
    SubscriptionMetadata, SubscriptionProductUpdate, SubscriptionReactivationData,
    SubscriptionState, SubscriptionStatement, Transaction, TransactionSearchOptions,
    UpdateSubscription, MAX_PAGE_SIZE,
};
use chrono::NaiveDateTime;
use reqwest::Method;
use serde_json::json;

use crate::client::ChargifyClient;
use crate::envelope::{
    unwrap_all, AdjustmentEnvelope, ChargeEnvelope, MetadataEnvelope, MigrationEnvelope,
    RenewalPreviewEnvelope, StatementEnvelope, SubscriptionEnvelope, TransactionEnvelope,
};
use crate::error::ChargifyError;
use crate::query::{self, Query};

/// First page requested by [`ChargifyClient::find_subscriptions_by_customer_id`].
const CUSTOMER_SUBSCRIPTIONS_PAGE: u32 = 0;

impl ChargifyClient {
    /// Create a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// subscription.
    pub async fn create_subscription(
        &self,
        subscription: &CreateSubscription,
    ) -> Result<Subscription, ChargifyError> {
        let response = self
            .request(Method::POST, &["subscriptions"])?
            .json(&SubscriptionEnvelope { subscription })
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    /// Update a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the update.
    pub async fn update_subscription(
        &self,
        id: &SubscriptionId,
        update: &UpdateSubscription,
    ) -> Result<(), ChargifyError> {
        let response = self
            .request(Method::PUT, &["subscriptions", id.as_str()])?
            .json(&SubscriptionEnvelope {
                subscription: update,
            })
            .send()
            .await?;

        Self::handle_empty(response).await
    }

    /// Move a subscription's next billing date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the date.
    pub async fn update_subscription_next_billing_date(
        &self,
        id: &SubscriptionId,
        next_billing_at: NaiveDateTime,
    ) -> Result<(), ChargifyError> {
        self.update_subscription(id, &UpdateSubscription::next_billing_at(next_billing_at))
            .await
    }

    /// Apply a one-off charge to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the charge.
    pub async fn create_subscription_charge(
        &self,
        id: &SubscriptionId,
        charge: &SubscriptionCharge,
    ) -> Result<SubscriptionChargeResult, ChargifyError> {
        let response = self
            .request(Method::POST, &["subscriptions", id.as_str(), "charges"])?
            .json(&ChargeEnvelope { charge })
            .send()
            .await?;

        Self::handle_response::<ChargeEnvelope<SubscriptionChargeResult>>(response)
            .await
            .map(ChargeEnvelope::into_inner)
    }

    /// Get a subscription by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscription_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, ChargifyError> {
        let response = self
            .request(Method::GET, &["subscriptions", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(|e| e.map(SubscriptionEnvelope::into_inner))
    }

    /// Get a subscription by its reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscription_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Subscription>, ChargifyError> {
        let response = self
            .request(Method::GET, &["subscriptions", "lookup"])?
            .query(&[("reference", reference)])
            .send()
            .await?;

        Self::handle_optional::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(|e| e.map(SubscriptionEnvelope::into_inner))
    }

    /// List a customer's subscriptions, up to the largest page Chargify
    /// serves.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscriptions_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Subscription>, ChargifyError> {
        self.find_subscriptions_by_customer_id_paged(
            customer_id,
            CUSTOMER_SUBSCRIPTIONS_PAGE,
            MAX_PAGE_SIZE,
        )
        .await
    }

    /// List one page of a customer's subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscriptions_by_customer_id_paged(
        &self,
        customer_id: &CustomerId,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Subscription>, ChargifyError> {
        let query = Query::new().page(page, per_page);
        let response = self
            .request(
                Method::GET,
                &["customers", customer_id.as_str(), "subscriptions"],
            )?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<Vec<SubscriptionEnvelope<Subscription>>>(response)
            .await
            .map(|items| unwrap_all(items, SubscriptionEnvelope::into_inner))
    }

    /// List subscriptions using Chargify's default paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_all_subscriptions(&self) -> Result<Vec<Subscription>, ChargifyError> {
        let response = self
            .request(Method::GET, &["subscriptions"])?
            .send()
            .await?;

        Self::handle_response::<Vec<SubscriptionEnvelope<Subscription>>>(response)
            .await
            .map(|items| unwrap_all(items, SubscriptionEnvelope::into_inner))
    }

    /// List one page of subscriptions in a state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscriptions_by_state(
        &self,
        state: SubscriptionState,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Subscription>, ChargifyError> {
        self.find_subscriptions_by_state_and_metadata(state, &BTreeMap::new(), page, per_page)
            .await
    }

    /// List one page of subscriptions in a state whose metadata matches every
    /// given `name => value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscriptions_by_state_and_metadata(
        &self,
        state: SubscriptionState,
        metadata: &BTreeMap<String, String>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Subscription>, ChargifyError> {
        let query = query::subscription_search(state, metadata, page, per_page);
        let response = self
            .request(Method::GET, &["subscriptions"])?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<Vec<SubscriptionEnvelope<Subscription>>>(response)
            .await
            .map(|items| unwrap_all(items, SubscriptionEnvelope::into_inner))
    }

    /// Permanently delete a subscription together with its customer and
    /// payment profile.
    ///
    /// The subscription must carry its embedded customer, whose id Chargify
    /// requires as acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::InvalidArgument`] if the subscription has no
    /// customer id. Otherwise returns an error if the request fails.
    pub async fn purge_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<Subscription, ChargifyError> {
        let customer_id = subscription.customer_id().ok_or_else(|| {
            ChargifyError::InvalidArgument(format!(
                "subscription {} has no customer to acknowledge",
                subscription.id
            ))
        })?;

        let query = query::purge(customer_id);
        let response = self
            .request(
                Method::POST,
                &["subscriptions", subscription.id.as_str(), "purge"],
            )?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    /// Cancel a subscription immediately.
    ///
    /// Returns `None` if the subscription does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel_subscription_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, ChargifyError> {
        let response = self
            .request(Method::DELETE, &["subscriptions", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(|e| e.map(SubscriptionEnvelope::into_inner))
    }

    /// Drop a pending product change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel_subscription_product_change(
        &self,
        id: &SubscriptionId,
    ) -> Result<Subscription, ChargifyError> {
        self.put_subscription(id, &json!({"subscription": {"next_product_id": ""}}))
            .await
    }

    /// Drop a pending product change together with its price point.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel_scheduled_subscription_product_change(
        &self,
        id: &SubscriptionId,
    ) -> Result<Subscription, ChargifyError> {
        self.put_subscription(
            id,
            &json!({
                "subscription": {
                    "next_product_id": "",
                    "next_product_price_point_id": "",
                }
            }),
        )
        .await
    }

    /// Migrate a subscription to another product immediately, with proration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// migration.
    pub async fn migrate_subscription(
        &self,
        id: &SubscriptionId,
        migration: &Migration,
    ) -> Result<Subscription, ChargifyError> {
        let response = self
            .request(Method::POST, &["subscriptions", id.as_str(), "migrations"])?
            .json(&MigrationEnvelope { migration })
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    /// Migrate a subscription to the product with the given handle.
    ///
    /// # Errors
    ///
    /// Same as [`ChargifyClient::migrate_subscription`].
    pub async fn migrate_subscription_to_product(
        &self,
        id: &SubscriptionId,
        product_handle: &str,
        price_point_handle: Option<&str>,
    ) -> Result<Subscription, ChargifyError> {
        let migration = Migration {
            product_price_point_handle: price_point_handle.map(str::to_string),
            ..Migration::to_product(product_handle)
        };
        self.migrate_subscription(id, &migration).await
    }

    /// Reactivate a canceled subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the subscription cannot be
    /// reactivated.
    pub async fn reactivate_subscription(
        &self,
        id: &SubscriptionId,
        preserve_balance: bool,
    ) -> Result<Subscription, ChargifyError> {
        let response = self
            .request(Method::PUT, &["subscriptions", id.as_str(), "reactivate"])?
            .json(&json!({ "preserve_balance": preserve_balance }))
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    /// Reactivate a canceled subscription with full control over trial,
    /// balance, coupon and resume behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the subscription cannot be
    /// reactivated.
    pub async fn reactivate_subscription_with(
        &self,
        id: &SubscriptionId,
        data: &SubscriptionReactivationData,
    ) -> Result<Subscription, ChargifyError> {
        let query = query::reactivation(data);
        let response = self
            .request(Method::PUT, &["subscriptions", id.as_str(), "reactivate"])?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    /// Change a subscription's product, now or at the next renewal.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the change.
    pub async fn change_subscription_product(
        &self,
        id: &SubscriptionId,
        update: &SubscriptionProductUpdate,
    ) -> Result<Subscription, ChargifyError> {
        self.put_subscription(
            id,
            &SubscriptionEnvelope {
                subscription: update,
            },
        )
        .await
    }

    /// Change a subscription to the product with the given handle.
    ///
    /// # Errors
    ///
    /// Same as [`ChargifyClient::change_subscription_product`].
    pub async fn change_subscription_product_to(
        &self,
        id: &SubscriptionId,
        product_handle: &str,
        price_point_handle: Option<&str>,
        delayed: bool,
    ) -> Result<Subscription, ChargifyError> {
        let update = SubscriptionProductUpdate {
            product_handle: product_handle.to_string(),
            product_price_point_handle: price_point_handle.map(str::to_string),
            product_change_delayed: delayed,
        };
        self.change_subscription_product(id, &update).await
    }

    /// Preview what the next renewal will charge.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn preview_subscription_renewal(
        &self,
        id: &SubscriptionId,
    ) -> Result<RenewalPreview, ChargifyError> {
        let response = self
            .request(
                Method::POST,
                &["subscriptions", id.as_str(), "renewals", "preview"],
            )?
            .send()
            .await?;

        Self::handle_response::<RenewalPreviewEnvelope<RenewalPreview>>(response)
            .await
            .map(RenewalPreviewEnvelope::into_inner)
    }

    /// Add metadata to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// metadata.
    pub async fn create_subscription_metadata(
        &self,
        id: &SubscriptionId,
        metadata: &[Metadata],
    ) -> Result<Vec<Metadata>, ChargifyError> {
        self.write_metadata(Method::POST, id, metadata).await
    }

    /// Read a subscription's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn read_subscription_metadata(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<SubscriptionMetadata>, ChargifyError> {
        let response = self
            .request(Method::GET, &["subscriptions", id.as_str(), "metadata"])?
            .send()
            .await?;

        Self::handle_optional(response).await
    }

    /// Overwrite metadata values on a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// metadata.
    pub async fn update_subscription_metadata(
        &self,
        id: &SubscriptionId,
        metadata: &[Metadata],
    ) -> Result<Vec<Metadata>, ChargifyError> {
        self.write_metadata(Method::PUT, id, metadata).await
    }

    /// List a subscription's statements.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::InvalidArgument`] if `per_page` exceeds
    /// [`MAX_PAGE_SIZE`]. Otherwise returns an error if the request fails.
    pub async fn find_subscription_statements(
        &self,
        id: &SubscriptionId,
        page: u32,
        per_page: u32,
        sort: Option<&str>,
        direction: Option<SortDirection>,
    ) -> Result<Vec<SubscriptionStatement>, ChargifyError> {
        let query = query::statements(page, per_page, sort, direction)?;
        let response = self
            .request(Method::GET, &["subscriptions", id.as_str(), "statements"])?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<Vec<StatementEnvelope<SubscriptionStatement>>>(response)
            .await
            .map(|items| unwrap_all(items, StatementEnvelope::into_inner))
    }

    /// List a subscription's transactions.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::InvalidArgument`] if the page size exceeds
    /// [`MAX_PAGE_SIZE`]. Otherwise returns an error if the request fails.
    pub async fn find_subscription_transactions(
        &self,
        id: &SubscriptionId,
        options: &TransactionSearchOptions,
    ) -> Result<Vec<Transaction>, ChargifyError> {
        let query = query::transactions(options)?;
        let response = self
            .request(Method::GET, &["subscriptions", id.as_str(), "transactions"])?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<Vec<TransactionEnvelope<Transaction>>>(response)
            .await
            .map(|items| unwrap_all(items, TransactionEnvelope::into_inner))
    }

    /// Adjust a subscription's balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// adjustment.
    pub async fn adjust(
        &self,
        id: &SubscriptionId,
        adjustment: &Adjustment,
    ) -> Result<Adjustment, ChargifyError> {
        let response = self
            .request(Method::POST, &["subscriptions", id.as_str(), "adjustments"])?
            .json(&AdjustmentEnvelope { adjustment })
            .send()
            .await?;

        Self::handle_response::<AdjustmentEnvelope<Adjustment>>(response)
            .await
            .map(AdjustmentEnvelope::into_inner)
    }

    async fn put_subscription<B: serde::Serialize + ?Sized>(
        &self,
        id: &SubscriptionId,
        body: &B,
    ) -> Result<Subscription, ChargifyError> {
        let response = self
            .request(Method::PUT, &["subscriptions", id.as_str()])?
            .json(body)
            .send()
            .await?;

        Self::handle_response::<SubscriptionEnvelope<Subscription>>(response)
            .await
            .map(SubscriptionEnvelope::into_inner)
    }

    async fn write_metadata(
        &self,
        method: Method,
        id: &SubscriptionId,
        metadata: &[Metadata],
    ) -> Result<Vec<Metadata>, ChargifyError> {
        let response = self
            .request(method, &["subscriptions", id.as_str(), "metadata"])?
            .json(&MetadataEnvelope { metadata })
            .send()
            .await?;

        Self::handle_response(response).await
    }
}
