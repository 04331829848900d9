//! Identifier types for Chargify resources.
//!
//! Chargify hands out numeric ids for most resources, but the API accepts them
//! as strings in request bodies and paths. The `string_id_type!` macro gives each
//! resource its own newtype so a customer id cannot be passed where a
//! subscription id is expected.
//!
//! Component, price point and allocation ids stay plain `i64`: they only ever
//! appear as numbers on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was empty.
    #[error("identifier must not be empty")]
    Empty,
}

/// Accepts either a JSON string or a JSON integer and yields its string form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

/// Optional variant of [`string_or_number`], used for decimal amounts.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(s)| s))
}

/// Defines a string-backed identifier with standard trait implementations.
///
/// The generated type:
/// - deserializes from a JSON string or number
/// - serializes as a JSON string
/// - implements `FromStr` (rejecting empty input), `Display`, `Debug`, `AsRef<str>`
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                string_or_number(deserializer).map(Self)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(IdError::Empty);
                }
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id_type!(ProductFamilyId, "A product family identifier.");
string_id_type!(ProductId, "A product identifier.");
string_id_type!(SubscriptionId, "A subscription identifier.");
string_id_type!(CustomerId, "A customer identifier.");
string_id_type!(
    PaymentProfileId,
    "A payment profile identifier.\n\nPayment profiles hold the card or bank account a subscription is billed to."
);
