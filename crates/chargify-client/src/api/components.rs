//! Components, their price points, and the components attached to
//! subscriptions (allocations, usage, price point migration).

use std::collections::BTreeMap;

use chargify_core::{
    Allocation, AllocationPreview, Component, ComponentAllocation, ComponentKind,
    ComponentPricePointUpdate, ComponentWithPricePoints, PricePoint, PricePointUpdate,
    ProductFamilyId, SubscriptionComponent, SubscriptionId, Usage,
};
use reqwest::Method;

use crate::client::ChargifyClient;
use crate::envelope::{
    unwrap_all, AllocationEnvelope, AllocationPreviewEnvelope, AllocationsEnvelope,
    ComponentEnvelope, ComponentPricePointsEnvelope, PricePointEnvelope, PricePointsEnvelope,
    UsageEnvelope,
};
use crate::error::ChargifyError;

/// Path segment for creating a component of the given kind, if the kind can
/// be created through the API.
fn creation_path(kind: ComponentKind) -> Option<&'static str> {
    match kind {
        ComponentKind::QuantityBasedComponent => Some("quantity_based_components"),
        ComponentKind::MeteredComponent => Some("metered_components"),
        ComponentKind::OnOffComponent => Some("on_off_components"),
        ComponentKind::PrepaidUsageComponent
        | ComponentKind::EventBasedComponent
        | ComponentKind::Unknown => None,
    }
}

impl ChargifyClient {
    /// Create a component in a product family.
    ///
    /// The component is posted under its kind (`{"metered_component": {...}}`)
    /// to the kind's collection.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::InvalidArgument`] without sending anything if
    /// the kind is missing or is not quantity-based, metered or on/off.
    /// Otherwise returns an error if the request fails.
    pub async fn create_component(
        &self,
        family_id: &ProductFamilyId,
        component: &Component,
    ) -> Result<Component, ChargifyError> {
        let kind = component.kind.ok_or_else(|| {
            ChargifyError::InvalidArgument("component kind must be set".into())
        })?;
        let collection = creation_path(kind).ok_or_else(|| {
            ChargifyError::InvalidArgument(format!("invalid component kind: {}", kind.as_str()))
        })?;

        let body = BTreeMap::from([(kind.as_str(), component)]);
        let response = self
            .request(
                Method::POST,
                &["product_families", family_id.as_str(), collection],
            )?
            .json(&body)
            .send()
            .await?;

        Self::handle_response::<ComponentEnvelope<Component>>(response)
            .await
            .map(ComponentEnvelope::into_inner)
    }

    /// List a component's price points.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_component_price_points(
        &self,
        component_id: i64,
    ) -> Result<Option<Vec<PricePoint>>, ChargifyError> {
        let id = component_id.to_string();
        let response = self
            .request(Method::GET, &["components", id.as_str(), "price_points"])?
            .send()
            .await?;

        Self::handle_optional::<PricePointsEnvelope<Vec<PricePoint>>>(response)
            .await
            .map(|e| e.map(PricePointsEnvelope::into_inner))
    }

    /// Update one of a component's price points.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the update.
    pub async fn update_price_point(
        &self,
        component_id: i64,
        price_point_id: i64,
        update: &PricePointUpdate,
    ) -> Result<PricePoint, ChargifyError> {
        let component_id = component_id.to_string();
        let price_point_id = price_point_id.to_string();
        let response = self
            .request(
                Method::PUT,
                &["components", component_id.as_str(), "price_points", price_point_id.as_str()],
            )?
            .json(&PricePointEnvelope {
                price_point: update,
            })
            .send()
            .await?;

        Self::handle_response::<PricePointEnvelope<PricePoint>>(response)
            .await
            .map(PricePointEnvelope::into_inner)
    }

    /// List the components of a product family.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_components_by_product_family(
        &self,
        family_id: &ProductFamilyId,
    ) -> Result<Vec<Component>, ChargifyError> {
        let response = self
            .request(
                Method::GET,
                &["product_families", family_id.as_str(), "components"],
            )?
            .send()
            .await?;

        Self::handle_response::<Vec<ComponentEnvelope<Component>>>(response)
            .await
            .map(|items| unwrap_all(items, ComponentEnvelope::into_inner))
    }

    /// Get a component of a product family.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_component_by_id_and_product_family(
        &self,
        component_id: i64,
        family_id: &ProductFamilyId,
    ) -> Result<Option<Component>, ChargifyError> {
        let id = component_id.to_string();
        let response = self
            .request(
                Method::GET,
                &["product_families", family_id.as_str(), "components", id.as_str()],
            )?
            .send()
            .await?;

        Self::handle_optional::<ComponentEnvelope<Component>>(response)
            .await
            .map(|e| e.map(ComponentEnvelope::into_inner))
    }

    /// Get a component of a product family together with its price points.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails.
    pub async fn find_component_with_price_points_by_id_and_product_family(
        &self,
        component_id: i64,
        family_id: &ProductFamilyId,
    ) -> Result<ComponentWithPricePoints, ChargifyError> {
        let component = self
            .find_component_by_id_and_product_family(component_id, family_id)
            .await?;
        let price_points = self.find_component_price_points(component_id).await?;
        Ok(ComponentWithPricePoints {
            component,
            price_points,
        })
    }

    /// List the components attached to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscription_components(
        &self,
        subscription_id: &SubscriptionId,
    ) -> Result<Vec<SubscriptionComponent>, ChargifyError> {
        let response = self
            .request(
                Method::GET,
                &["subscriptions", subscription_id.as_str(), "components"],
            )?
            .send()
            .await?;

        Self::handle_response::<Vec<ComponentEnvelope<SubscriptionComponent>>>(response)
            .await
            .map(|items| unwrap_all(items, ComponentEnvelope::into_inner))
    }

    /// Get one component attached to a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn find_subscription_component_by_id(
        &self,
        subscription_id: &SubscriptionId,
        component_id: i64,
    ) -> Result<Option<SubscriptionComponent>, ChargifyError> {
        let id = component_id.to_string();
        let response = self
            .request(
                Method::GET,
                &["subscriptions", subscription_id.as_str(), "components", id.as_str()],
            )?
            .send()
            .await?;

        Self::handle_optional::<ComponentEnvelope<SubscriptionComponent>>(response)
            .await
            .map(|e| e.map(ComponentEnvelope::into_inner))
    }

    /// Change the allocated quantity of a subscription's component.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the
    /// allocation.
    pub async fn create_component_allocation(
        &self,
        subscription_id: &SubscriptionId,
        component_id: i64,
        allocation: &Allocation,
    ) -> Result<Allocation, ChargifyError> {
        let id = component_id.to_string();
        let response = self
            .request(
                Method::POST,
                &[
                    "subscriptions",
                    subscription_id.as_str(),
                    "components",
                    id.as_str(),
                    "allocations",
                ],
            )?
            .json(&AllocationEnvelope { allocation })
            .send()
            .await?;

        Self::handle_response::<AllocationEnvelope<Allocation>>(response)
            .await
            .map(AllocationEnvelope::into_inner)
    }

    /// Preview the charges an allocation change would produce.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the preview.
    pub async fn preview_component_allocation(
        &self,
        subscription_id: &SubscriptionId,
        component_id: i64,
        quantity: i64,
    ) -> Result<AllocationPreview, ChargifyError> {
        let body = AllocationsEnvelope {
            allocations: [ComponentAllocation {
                component_id,
                quantity,
            }],
        };
        let response = self
            .request(
                Method::POST,
                &[
                    "subscriptions",
                    subscription_id.as_str(),
                    "allocations",
                    "preview",
                ],
            )?
            .json(&body)
            .send()
            .await?;

        Self::handle_response::<AllocationPreviewEnvelope<AllocationPreview>>(response)
            .await
            .map(AllocationPreviewEnvelope::into_inner)
    }

    /// Report usage of a metered component.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the usage.
    pub async fn report_subscription_component_usage(
        &self,
        subscription_id: &SubscriptionId,
        component_id: i64,
        usage: &Usage,
    ) -> Result<Usage, ChargifyError> {
        let id = component_id.to_string();
        let response = self
            .request(
                Method::POST,
                &[
                    "subscriptions",
                    subscription_id.as_str(),
                    "components",
                    id.as_str(),
                    "usages",
                ],
            )?
            .json(&UsageEnvelope { usage })
            .send()
            .await?;

        Self::handle_response::<UsageEnvelope<Usage>>(response)
            .await
            .map(UsageEnvelope::into_inner)
    }

    /// Move one of a subscription's components to another price point.
    ///
    /// Returns the update Chargify applied, or `None` if it echoed nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the change.
    pub async fn migrate_subscription_component_to_price_point(
        &self,
        subscription_id: &SubscriptionId,
        component_id: i64,
        price_point: &str,
    ) -> Result<Option<ComponentPricePointUpdate>, ChargifyError> {
        let updates = [ComponentPricePointUpdate::new(component_id, price_point)];
        let applied = self
            .bulk_update_subscription_component_price_point(subscription_id, &updates)
            .await?;
        Ok(applied.into_iter().next())
    }

    /// Move several of a subscription's components to other price points.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Chargify rejects the change.
    pub async fn bulk_update_subscription_component_price_point(
        &self,
        subscription_id: &SubscriptionId,
        updates: &[ComponentPricePointUpdate],
    ) -> Result<Vec<ComponentPricePointUpdate>, ChargifyError> {
        let response = self
            .request(
                Method::POST,
                &["subscriptions", subscription_id.as_str(), "price_points"],
            )?
            .json(&ComponentPricePointsEnvelope {
                components: updates,
            })
            .send()
            .await?;

        Self::handle_response::<ComponentPricePointsEnvelope<Vec<ComponentPricePointUpdate>>>(
            response,
        )
        .await
        .map(ComponentPricePointsEnvelope::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_three_kinds_can_be_created() {
        assert_eq!(
            creation_path(ComponentKind::QuantityBasedComponent),
            Some("quantity_based_components")
        );
        assert_eq!(
            creation_path(ComponentKind::MeteredComponent),
            Some("metered_components")
        );
        assert_eq!(
            creation_path(ComponentKind::OnOffComponent),
            Some("on_off_components")
        );
        assert_eq!(creation_path(ComponentKind::PrepaidUsageComponent), None);
        assert_eq!(creation_path(ComponentKind::EventBasedComponent), None);
        assert_eq!(creation_path(ComponentKind::Unknown), None);
    }
}
