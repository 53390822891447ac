//! Frontend Models
//!
//! Data structures matching the server's JSON payloads.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque entity identifier.
///
/// The server sends customer and guarantor ids as JSON numbers, but the
/// hidden selection fields hold them as text, so both forms are accepted
/// and compared by their textual value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uid(String);

impl Uid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Uid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UidVisitor;

        impl<'de> Visitor<'de> for UidVisitor {
            type Value = Uid;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Uid, E> {
                Ok(Uid::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uid, E> {
                Ok(Uid(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uid, E> {
                Ok(Uid(v.to_string()))
            }

            // JS numbers may arrive as floats
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Uid, E> {
                if v.fract() == 0.0 && v.is_finite() {
                    Ok(Uid(format!("{}", v as i64)))
                } else {
                    Err(E::custom(format!("non-integer identifier {}", v)))
                }
            }
        }

        deserializer.deserialize_any(UidVisitor)
    }
}

/// Customer or guarantor (both share the same shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub uid: Uid,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
}

impl Person {
    pub fn phone_str(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}

/// Product category option (`value` is referenced by products)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub value: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub model: String,
}

/// Payload of `GET /account-precreation/data/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecreationData {
    #[serde(default)]
    pub customers: Vec<Person>,
    #[serde(default)]
    pub guarantors: Vec<Person>,
    #[serde(default)]
    pub product_categories: Vec<ProductCategory>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Payment as recorded by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_date: String,
    pub receipt_id: String,
    pub payment_amount: i64,
    #[serde(default)]
    pub cash_balance: Option<i64>,
}

/// Which of the account's two guarantor roles a guarantor fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuarantorSlot {
    First,
    Second,
}

impl GuarantorSlot {
    pub fn label(self) -> &'static str {
        match self {
            GuarantorSlot::First => "First Guarantor",
            GuarantorSlot::Second => "Second Guarantor",
        }
    }
}

/// What the find modal is selecting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindTarget {
    Customer,
    Guarantor(GuarantorSlot),
}

impl FindTarget {
    pub fn title(self) -> &'static str {
        match self {
            FindTarget::Customer => "Find Customer",
            FindTarget::Guarantor(_) => "Find Guarantor",
        }
    }
}

/// Occupation choices offered on the customer form
pub const OCCUPATIONS: &[&str] = &[
    "Job",
    "Govt-Job",
    "Business",
    "Student",
    "Housewife",
    "Teacher",
    "Doctor",
    "Plumber",
    "Technician",
    "Electrician",
    "Others",
];

pub const GUARDIAN_TYPES: &[&str] = &["Father", "Husband"];
