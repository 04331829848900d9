//! Payment profiles (stored cards and bank accounts).

use chargify_core::{
    CreatePaymentProfile, CustomerId, PaymentProfile, PaymentProfileId, SubscriptionId,
    UpdatePaymentProfile,
};
use reqwest::Method;

use crate::client::ChargifyClient;
use crate::envelope::{unwrap_all, PaymentProfileEnvelope};
use crate::error::ChargifyError;

impl ChargifyClient {
    /// List a customer's payment profiles.
    ///
    /// A customer Chargify does not know has no profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_payment_profiles_for_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<PaymentProfile>, ChargifyError> {
        let response = self
            .request(Method::GET, &["payment_profiles"])?
            .query(&[("customer_id", customer_id.as_str())])
            .send()
            .await?;

        Self::handle_optional::<Vec<PaymentProfileEnvelope<PaymentProfile>>>(response)
            .await
            .map(|items| unwrap_all(items.unwrap_or_default(), PaymentProfileEnvelope::into_inner))
    }

    /// Store a payment profile for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the profile.
    pub async fn create_payment_profile(
        &self,
        profile: &CreatePaymentProfile,
    ) -> Result<PaymentProfile, ChargifyError> {
        let response = self
            .request(Method::POST, &["payment_profiles"])?
            .json(&PaymentProfileEnvelope {
                payment_profile: profile,
            })
            .send()
            .await?;

        Self::handle_response::<PaymentProfileEnvelope<PaymentProfile>>(response)
            .await
            .map(PaymentProfileEnvelope::into_inner)
    }

    /// Update a stored payment profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the update.
    pub async fn update_payment_profile(
        &self,
        id: &PaymentProfileId,
        profile: &UpdatePaymentProfile,
    ) -> Result<(), ChargifyError> {
        let response = self
            .request(Method::PUT, &["payment_profiles", id.as_str()])?
            .json(&PaymentProfileEnvelope {
                payment_profile: profile,
            })
            .send()
            .await?;

        Self::handle_empty(response).await
    }

    /// Make a stored payment profile the one billed for a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the change.
    pub async fn update_subscription_payment_profile(
        &self,
        subscription_id: &SubscriptionId,
        profile_id: &PaymentProfileId,
    ) -> Result<PaymentProfile, ChargifyError> {
        let response = self
            .request(
                Method::POST,
                &[
                    "subscriptions",
                    subscription_id.as_str(),
                    "payment_profiles",
                    profile_id.as_str(),
                    "change_payment_profile",
                ],
            )?
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Self::handle_response::<PaymentProfileEnvelope<PaymentProfile>>(response)
            .await
            .map(PaymentProfileEnvelope::into_inner)
    }

    /// Get a payment profile by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_payment_profile_by_id(
        &self,
        id: &PaymentProfileId,
    ) -> Result<Option<PaymentProfile>, ChargifyError> {
        let response = self
            .request(Method::GET, &["payment_profiles", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<PaymentProfileEnvelope<PaymentProfile>>(response)
            .await
            .map(|e| e.map(PaymentProfileEnvelope::into_inner))
    }

    /// Delete a payment profile that no subscription uses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the profile is still in use.
    pub async fn delete_unused_payment_profile(
        &self,
        id: &PaymentProfileId,
    ) -> Result<(), ChargifyError> {
        let response = self
            .request(Method::DELETE, &["payment_profiles", id.as_str()])?
            .send()
            .await?;

        Self::handle_empty(response).await
    }

    /// Delete a subscription's payment profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_payment_profile(
        &self,
        subscription_id: &SubscriptionId,
        profile_id: &PaymentProfileId,
    ) -> Result<(), ChargifyError> {
        let response = self
            .request(
                Method::DELETE,
                &[
                    "subscriptions",
                    subscription_id.as_str(),
                    "payment_profiles",
                    profile_id.as_str(),
                ],
            )?
            .send()
            .await?;

        Self::handle_empty(response).await
    }
}
