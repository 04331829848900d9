//! Customers and referral codes.

use chargify_core::{Customer, CustomerId, ReferralCode};
use reqwest::Method;

use crate::client::ChargifyClient;
use crate::envelope::{unwrap_all, CustomerEnvelope, ReferralCodeEnvelope};
use crate::error::ChargifyError;
use crate::query::Query;

impl ChargifyClient {
    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the customer.
    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer, ChargifyError> {
        let response = self
            .request(Method::POST, &["customers"])?
            .json(&CustomerEnvelope { customer })
            .send()
            .await?;

        Self::handle_response::<CustomerEnvelope<Customer>>(response)
            .await
            .map(CustomerEnvelope::into_inner)
    }

    /// Update a customer. The customer's `id` selects the record.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::InvalidArgument`] if the customer has no id.
    /// Otherwise returns an error if the request fails or Chargify rejects the
    /// update.
    pub async fn update_customer(&self, customer: &Customer) -> Result<Customer, ChargifyError> {
        let id = customer.id.as_ref().ok_or_else(|| {
            ChargifyError::InvalidArgument("customer id is required for an update".into())
        })?;

        let response = self
            .request(Method::PUT, &["customers", id.as_str()])?
            .json(&CustomerEnvelope { customer })
            .send()
            .await?;

        Self::handle_response::<CustomerEnvelope<Customer>>(response)
            .await
            .map(CustomerEnvelope::into_inner)
    }

    /// Get a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_customer_by_id(
        &self,
        id: &CustomerId,
    ) -> Result<Option<Customer>, ChargifyError> {
        let response = self
            .request(Method::GET, &["customers", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<CustomerEnvelope<Customer>>(response)
            .await
            .map(|e| e.map(CustomerEnvelope::into_inner))
    }

    /// Get a customer by the reference assigned at creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_customer_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Customer>, ChargifyError> {
        let response = self
            .request(Method::GET, &["customers", "lookup"])?
            .query(&[("reference", reference)])
            .send()
            .await?;

        Self::handle_optional::<CustomerEnvelope<Customer>>(response)
            .await
            .map(|e| e.map(CustomerEnvelope::into_inner))
    }

    /// Search customers by name, email, organization or reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_customers_by(
        &self,
        criterion: impl ToString,
        page: u32,
    ) -> Result<Vec<Customer>, ChargifyError> {
        let query = Query::new().push("q", criterion).push("page", page);
        self.list_customers(&query).await
    }

    /// List customers using Chargify's default paging.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_all_customers(&self) -> Result<Vec<Customer>, ChargifyError> {
        self.list_customers(&Query::new()).await
    }

    /// List one page of customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_customers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Customer>, ChargifyError> {
        self.list_customers(&Query::new().page(page, per_page))
            .await
    }

    /// Delete a customer. Deleting a customer that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason other than the
    /// customer being absent.
    pub async fn delete_customer_by_id(&self, id: &CustomerId) -> Result<(), ChargifyError> {
        let response = self
            .request(Method::DELETE, &["customers", id.as_str()])?
            .send()
            .await?;

        match Self::handle_empty(response).await {
            Err(ChargifyError::NotFound) => {
                tracing::debug!(customer_id = %id, "Customer already deleted");
                Ok(())
            }
            other => other,
        }
    }

    /// Check whether a referral code is valid.
    ///
    /// Returns `None` if Chargify does not know the code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn validate_referral_code(
        &self,
        code: &str,
    ) -> Result<Option<ReferralCode>, ChargifyError> {
        let response = self
            .request(Method::GET, &["referral_codes", "validate"])?
            .query(&[("code", code)])
            .send()
            .await?;

        Self::handle_optional::<ReferralCodeEnvelope<ReferralCode>>(response)
            .await
            .map(|e| e.map(ReferralCodeEnvelope::into_inner))
    }

    async fn list_customers(&self, query: &Query) -> Result<Vec<Customer>, ChargifyError> {
        let response = self
            .request(Method::GET, &["customers"])?
            .query(query.pairs())
            .send()
            .await?;

        Self::handle_response::<Vec<CustomerEnvelope<Customer>>>(response)
            .await
            .map(|items| unwrap_all(items, CustomerEnvelope::into_inner))
    }
}
