//! Payment profiles: the stored card or bank account a customer is billed to.

use serde::{Deserialize, Serialize};

use crate::ids::{CustomerId, PaymentProfileId};

/// Payment method type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Credit or debit card.
    CreditCard,
    /// Direct debit from a bank account.
    BankAccount,
    /// `PayPal` billing agreement.
    PaypalAccount,
    /// Apple Pay token.
    ApplePay,
    /// A payment type this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A stored payment profile, as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentProfile {
    /// Payment profile id.
    pub id: PaymentProfileId,
    /// Owning customer.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Cardholder first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Cardholder last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Payment method type.
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    /// Masked card number (`XXXX-XXXX-XXXX-1111`).
    #[serde(default)]
    pub masked_card_number: Option<String>,
    /// Card brand.
    #[serde(default)]
    pub card_type: Option<String>,
    /// Expiration month.
    #[serde(default)]
    pub expiration_month: Option<u32>,
    /// Expiration year.
    #[serde(default)]
    pub expiration_year: Option<i32>,
    /// Masked bank account number.
    #[serde(default)]
    pub masked_bank_account_number: Option<String>,
    /// Masked bank routing number.
    #[serde(default)]
    pub masked_bank_routing_number: Option<String>,
    /// Bank name.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Billing street address.
    #[serde(default)]
    pub billing_address: Option<String>,
    /// Second billing address line.
    #[serde(default, rename = "billing_address_2")]
    pub billing_address2: Option<String>,
    /// Billing city.
    #[serde(default)]
    pub billing_city: Option<String>,
    /// Billing state.
    #[serde(default)]
    pub billing_state: Option<String>,
    /// Billing postal code.
    #[serde(default)]
    pub billing_zip: Option<String>,
    /// Billing country.
    #[serde(default)]
    pub billing_country: Option<String>,
    /// Vault holding the payment method.
    #[serde(default)]
    pub current_vault: Option<String>,
    /// Token inside the vault.
    #[serde(default)]
    pub vault_token: Option<String>,
    /// Customer token inside the vault.
    #[serde(default)]
    pub customer_vault_token: Option<String>,
    /// Gateway handle.
    #[serde(default)]
    pub gateway_handle: Option<String>,
    /// Whether the profile is disabled.
    #[serde(default)]
    pub disabled: Option<bool>,
}

/// Fields for creating a payment profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentProfile {
    /// Customer the profile belongs to.
    pub customer_id: CustomerId,
    /// Payment method type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// Cardholder first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Cardholder last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Full card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_number: Option<String>,
    /// Expiration month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<u32>,
    /// Expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<i32>,
    /// Card verification value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// Bank name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Bank account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    /// Bank routing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_routing_number: Option<String>,
    /// `checking` or `savings`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_type: Option<String>,
    /// `personal` or `business`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_holder_type: Option<String>,
    /// Billing street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    /// Second billing address line.
    #[serde(rename = "billing_address_2", skip_serializing_if = "Option::is_none")]
    pub billing_address2: Option<String>,
    /// Billing city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    /// Billing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    /// Billing postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_zip: Option<String>,
    /// Billing country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
    /// Vault to import an existing token from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vault: Option<String>,
    /// Existing vault token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_token: Option<String>,
    /// Existing customer vault token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_vault_token: Option<String>,
}

impl CreatePaymentProfile {
    /// Start a payment profile for the given customer.
    #[must_use]
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            payment_type: None,
            first_name: None,
            last_name: None,
            full_number: None,
            expiration_month: None,
            expiration_year: None,
            cvv: None,
            bank_name: None,
            bank_account_number: None,
            bank_routing_number: None,
            bank_account_type: None,
            bank_account_holder_type: None,
            billing_address: None,
            billing_address2: None,
            billing_city: None,
            billing_state: None,
            billing_zip: None,
            billing_country: None,
            current_vault: None,
            vault_token: None,
            customer_vault_token: None,
        }
    }
}

/// Fields that may change on an existing payment profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePaymentProfile {
    /// Cardholder first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Cardholder last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Replacement card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_number: Option<String>,
    /// Card brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Expiration month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<u32>,
    /// Expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<i32>,
    /// Vault holding the payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vault: Option<String>,
    /// Gateway handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_handle: Option<String>,
    /// Billing street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    /// Second billing address line.
    #[serde(rename = "billing_address_2", skip_serializing_if = "Option::is_none")]
    pub billing_address2: Option<String>,
    /// Billing city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    /// Billing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_state: Option<String>,
    /// Billing postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_zip: Option<String>,
    /// Billing country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
}
