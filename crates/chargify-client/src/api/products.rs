//! Product families and products.

use chargify_core::{Product, ProductFamily, ProductFamilyId, ProductId, ProductPricePoint};
use reqwest::Method;

use crate::client::ChargifyClient;
use crate::envelope::{unwrap_all, PricePointsEnvelope, ProductEnvelope, ProductFamilyEnvelope};
use crate::error::ChargifyError;

impl ChargifyClient {
    /// Create a product family.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the family.
    pub async fn create_product_family(
        &self,
        family: &ProductFamily,
    ) -> Result<ProductFamily, ChargifyError> {
        let response = self
            .request(Method::POST, &["product_families"])?
            .json(&ProductFamilyEnvelope {
                product_family: family,
            })
            .send()
            .await?;

        Self::handle_response::<ProductFamilyEnvelope<ProductFamily>>(response)
            .await
            .map(ProductFamilyEnvelope::into_inner)
    }

    /// Get a product family by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_product_family_by_id(
        &self,
        id: &ProductFamilyId,
    ) -> Result<Option<ProductFamily>, ChargifyError> {
        let response = self
            .request(Method::GET, &["product_families", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<ProductFamilyEnvelope<ProductFamily>>(response)
            .await
            .map(|e| e.map(ProductFamilyEnvelope::into_inner))
    }

    /// List every product family on the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_all_product_families(&self) -> Result<Vec<ProductFamily>, ChargifyError> {
        let response = self
            .request(Method::GET, &["product_families"])?
            .send()
            .await?;

        Self::handle_response::<Vec<ProductFamilyEnvelope<ProductFamily>>>(response)
            .await
            .map(|items| unwrap_all(items, ProductFamilyEnvelope::into_inner))
    }

    /// Archive a product family.
    ///
    /// Returns `None` if the family does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn archive_product_family_by_id(
        &self,
        id: &ProductFamilyId,
    ) -> Result<Option<ProductFamily>, ChargifyError> {
        let response = self
            .request(Method::DELETE, &["product_families", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<ProductFamilyEnvelope<ProductFamily>>(response)
            .await
            .map(|e| e.map(ProductFamilyEnvelope::into_inner))
    }

    /// Create a product in a family.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the product.
    pub async fn create_product(
        &self,
        family_id: &ProductFamilyId,
        product: &Product,
    ) -> Result<Product, ChargifyError> {
        let response = self
            .request(
                Method::POST,
                &["product_families", family_id.as_str(), "products"],
            )?
            .json(&ProductEnvelope { product })
            .send()
            .await?;

        Self::handle_response::<ProductEnvelope<Product>>(response)
            .await
            .map(ProductEnvelope::into_inner)
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_product_by_id(
        &self,
        id: &ProductId,
    ) -> Result<Option<Product>, ChargifyError> {
        let response = self
            .request(Method::GET, &["products", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<ProductEnvelope<Product>>(response)
            .await
            .map(|e| e.map(ProductEnvelope::into_inner))
    }

    /// Get a product by its API handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_product_by_api_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Product>, ChargifyError> {
        let response = self
            .request(Method::GET, &["products", "handle", handle])?
            .send()
            .await?;

        Self::handle_optional::<ProductEnvelope<Product>>(response)
            .await
            .map(|e| e.map(ProductEnvelope::into_inner))
    }

    /// List a product's price points.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_product_price_points_by_product_id(
        &self,
        id: &ProductId,
    ) -> Result<Option<Vec<ProductPricePoint>>, ChargifyError> {
        let response = self
            .request(Method::GET, &["products", id.as_str(), "price_points"])?
            .send()
            .await?;

        Self::handle_optional::<PricePointsEnvelope<Vec<ProductPricePoint>>>(response)
            .await
            .map(|e| e.map(PricePointsEnvelope::into_inner))
    }

    /// List every product on the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_all_products(&self) -> Result<Vec<Product>, ChargifyError> {
        let response = self.request(Method::GET, &["products"])?.send().await?;

        Self::handle_response::<Vec<ProductEnvelope<Product>>>(response)
            .await
            .map(|items| unwrap_all(items, ProductEnvelope::into_inner))
    }

    /// List the products in a family.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, including when the family does
    /// not exist.
    pub async fn find_products_by_product_family_id(
        &self,
        family_id: &ProductFamilyId,
    ) -> Result<Vec<Product>, ChargifyError> {
        let response = self
            .request(
                Method::GET,
                &["product_families", family_id.as_str(), "products"],
            )?
            .send()
            .await?;

        Self::handle_response::<Vec<ProductEnvelope<Product>>>(response)
            .await
            .map(|items| unwrap_all(items, ProductEnvelope::into_inner))
    }

    /// Archive a product.
    ///
    /// Returns `None` if the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn archive_product_by_id(
        &self,
        id: &ProductId,
    ) -> Result<Option<Product>, ChargifyError> {
        let response = self
            .request(Method::DELETE, &["products", id.as_str()])?
            .send()
            .await?;

        Self::handle_optional::<ProductEnvelope<Product>>(response)
            .await
            .map(|e| e.map(ProductEnvelope::into_inner))
    }
}
