//! Turns decoded payloads into validated records.
//!
//! Every function here is all-or-nothing: one bad element fails the whole
//! payload and no partial result is returned. Errors raised here carry no
//! endpoint; the facades attach it with [`ApiError::at_endpoint`].

use serde_json::Value;

use crate::types::{aggregate_by_date, Account, CampaignData, DailyCampaignData, Record};
use crate::ApiError;

/// Key holding the account array in a `getAccounts` payload.
pub const ACCOUNTS_KEY: &str = "ad_accounts";
/// Key holding the row array in a `getData` payload.
pub const CAMPAIGN_DATA_KEY: &str = "data";

/// Maps a `getAccounts` payload. With a non-empty `account_id` only the
/// account with exactly that id is kept; an unknown id yields an empty list.
/// `None` and `Some("")` both keep every account.
pub fn map_accounts(payload: &Value, account_id: Option<&str>) -> Result<Vec<Account>, ApiError> {
    let accounts: Vec<Account> = records(array_field(payload, ACCOUNTS_KEY)?)?;
    Ok(match account_id {
        Some(id) if !id.is_empty() => accounts.into_iter().filter(|a| a.id == id).collect(),
        _ => accounts,
    })
}

/// Maps a `getData` payload and aggregates its rows by date.
pub fn map_campaign_data(payload: &Value) -> Result<DailyCampaignData, ApiError> {
    let rows: Vec<CampaignData> = records(array_field(payload, CAMPAIGN_DATA_KEY)?)?;
    aggregate_by_date(rows)
}

fn unexpected(reason: String) -> ApiError {
    ApiError::UnexpectedShape {
        endpoint: None,
        reason,
    }
}

fn array_field<'a>(payload: &'a Value, key: &str) -> Result<&'a [Value], ApiError> {
    let object = payload.as_object().ok_or_else(|| {
        unexpected(format!(
            "expected object, got {} in payload: {}",
            json_type(payload),
            snippet(payload)
        ))
    })?;
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        other => Err(unexpected(format!(
            "expected array field '{}', got {} in payload: {}",
            key,
            other.map_or("nothing", json_type),
            snippet(payload)
        ))),
    }
}

fn records<R: Record>(items: &[Value]) -> Result<Vec<R>, ApiError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw = item.as_object().ok_or_else(|| {
                unexpected(format!(
                    "expected {} object at index {}, got {}",
                    R::NAME,
                    index,
                    json_type(item)
                ))
            })?;
            R::from_raw(raw).map_err(|source| ApiError::InvalidRecord {
                endpoint: None,
                record: R::NAME,
                index,
                element: snippet(item),
                source,
            })
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn snippet(payload: &Value) -> String {
    const MAX: usize = 200;
    let text = payload.to_string();
    match text.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text,
    }
}
