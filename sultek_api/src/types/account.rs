//! Ad account records from the `getAccounts` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{object, Record};
use crate::ApiError;

/// Opaque account identifier.
pub type AccountID = String;

/// An advertising account. Exported externally as `accountId` / `accountName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountID,
    /// Display name.
    pub name: String,
}

/// External view of an [`Account`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalAccount<'a> {
    account_id: &'a str,
    account_name: &'a str,
}

impl Record for Account {
    const NAME: &'static str = "account";
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn to_external(&self) -> Result<Map<String, Value>, ApiError> {
        object(
            Self::NAME,
            &ExternalAccount {
                account_id: &self.id,
                account_name: &self.name,
            },
        )
    }
}
