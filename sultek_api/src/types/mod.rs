//! Typed records built from Sultek API payloads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ApiError, ValidationError};

mod fields;

mod account;
pub use self::account::{Account, AccountID};

mod campaign;
pub use self::campaign::{aggregate_by_date, CampaignData, DailyCampaignData};

/// A validated record with a declared field order.
///
/// `FIELDS` fixes the order used by every export, so the tabular output
/// columns follow the declaration rather than the order keys arrived in.
/// Implementors derive serde; their struct field order must match `FIELDS`.
pub trait Record: Serialize + DeserializeOwned {
    /// Human readable record name used in error messages.
    const NAME: &'static str;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Builds the record from one raw JSON object. Unknown keys are ignored.
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(Value::Object(raw.clone()))?)
    }

    /// Ordered `field -> value` mapping using internal field names.
    fn to_mapping(&self) -> Result<Map<String, Value>, ApiError> {
        object(Self::NAME, self)
    }

    /// Ordered mapping in the API's external naming. Same as
    /// [`Record::to_mapping`] unless the record renames its fields.
    fn to_external(&self) -> Result<Map<String, Value>, ApiError> {
        self.to_mapping()
    }
}

fn object<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::Serialization(format!(
            "{} did not serialize to an object: {}",
            name, other
        ))),
        Err(e) => Err(ApiError::Serialization(e.to_string())),
    }
}
