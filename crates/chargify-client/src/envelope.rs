//! JSON envelopes.
//!
//! Chargify wraps every resource in a single-key object named after it
//! (`{"customer": {...}}`), and list endpoints return arrays of those objects.
//! Envelopes are generic so requests can wrap a borrowed value and responses
//! can own theirs.

use serde::{Deserialize, Serialize};

/// Defines a single-field envelope keyed by the resource name.
macro_rules! envelope {
    ($name:ident, $field:ident) => {
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub(crate) struct $name<T> {
            pub(crate) $field: T,
        }

        impl<T> $name<T> {
            pub(crate) fn into_inner(self) -> T {
                self.$field
            }
        }
    };
}

envelope!(ProductFamilyEnvelope, product_family);
envelope!(ProductEnvelope, product);
envelope!(PricePointsEnvelope, price_points);
envelope!(PricePointEnvelope, price_point);
envelope!(ComponentEnvelope, component);
envelope!(ComponentPricePointsEnvelope, components);
envelope!(AllocationEnvelope, allocation);
envelope!(AllocationsEnvelope, allocations);
envelope!(AllocationPreviewEnvelope, allocation_preview);
envelope!(UsageEnvelope, usage);
envelope!(SubscriptionEnvelope, subscription);
envelope!(MigrationEnvelope, migration);
envelope!(ChargeEnvelope, charge);
envelope!(RenewalPreviewEnvelope, renewal_preview);
envelope!(MetadataEnvelope, metadata);
envelope!(StatementEnvelope, statement);
envelope!(TransactionEnvelope, transaction);
envelope!(AdjustmentEnvelope, adjustment);
envelope!(PaymentProfileEnvelope, payment_profile);
envelope!(CustomerEnvelope, customer);
envelope!(ReferralCodeEnvelope, referral_code);

/// Unwrap a list of envelopes.
pub(crate) fn unwrap_all<E, T>(items: Vec<E>, unwrap: impl Fn(E) -> T) -> Vec<T> {
    items.into_iter().map(unwrap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargify_core::{Customer, ProductFamily};

    #[test]
    fn wraps_borrowed_values() {
        let family = ProductFamily::new("Plans");
        let body = serde_json::to_value(ProductFamilyEnvelope {
            product_family: &family,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"product_family": {"name": "Plans"}}));
    }

    #[test]
    fn unwraps_lists() {
        let items: Vec<CustomerEnvelope<Customer>> = serde_json::from_value(serde_json::json!([
            {"customer": {"id": 1, "first_name": "A"}},
            {"customer": {"id": 2, "first_name": "B"}}
        ]))
        .unwrap();
        let customers = unwrap_all(items, CustomerEnvelope::into_inner);
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[1].first_name.as_deref(), Some("B"));
    }
}
