//! Output modes and the external JSON serializers.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::types::{Account, CampaignData, DailyCampaignData, Record};
use crate::ApiError;

/// Output mode requested by the caller of a facade operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Typed in-memory records.
    #[default]
    Native,
    /// Pretty-printed JSON text for consumers outside the process.
    ExternalJson,
}

/// Result of a facade operation in the requested [`Format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output<T> {
    Native(T),
    Json(String),
}

impl<T> Output<T> {
    /// Returns the records if this is native output.
    pub fn native(self) -> Option<T> {
        match self {
            Output::Native(records) => Some(records),
            Output::Json(_) => None,
        }
    }

    /// Returns the JSON text if this is external output.
    pub fn json(self) -> Option<String> {
        match self {
            Output::Native(_) => None,
            Output::Json(text) => Some(text),
        }
    }
}

/// Types with an external JSON shape.
pub trait ExternalJson {
    type Repr: Serialize;

    fn to_external_json(&self) -> Result<Self::Repr, ApiError>;
}

/// Tabular shape: declared field names plus one value row per record.
#[derive(Debug, Serialize)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_records<'a, R, I>(records: I) -> Result<Self, ApiError>
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let rows = records
            .into_iter()
            .map(|record| -> Result<Vec<Value>, ApiError> {
                let mapping = record.to_mapping()?;
                Ok(R::FIELDS
                    .iter()
                    .map(|field| mapping.get(*field).cloned().unwrap_or(Value::Null))
                    .collect())
            })
            .collect::<Result<Vec<_>, ApiError>>()?;
        Ok(Self {
            headers: R::FIELDS.to_vec(),
            rows,
        })
    }
}

/// Campaign data renders as a table, one row per date.
impl ExternalJson for DailyCampaignData {
    type Repr = Table;

    fn to_external_json(&self) -> Result<Table, ApiError> {
        Table::from_records::<CampaignData, _>(self.values())
    }
}

/// Accounts render as a list of renamed objects.
impl ExternalJson for [Account] {
    type Repr = Vec<Map<String, Value>>;

    fn to_external_json(&self) -> Result<Self::Repr, ApiError> {
        self.iter().map(Record::to_external).collect()
    }
}

impl ExternalJson for Vec<Account> {
    type Repr = Vec<Map<String, Value>>;

    fn to_external_json(&self) -> Result<Self::Repr, ApiError> {
        self.as_slice().to_external_json()
    }
}

/// Renders `value`'s external shape as JSON indented with four spaces.
pub fn to_json<T: ExternalJson + ?Sized>(value: &T) -> Result<String, ApiError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .to_external_json()?
        .serialize(&mut ser)
        .map_err(|e| ApiError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Wraps `records` in the requested output mode.
pub fn format_output<T: ExternalJson>(records: T, format: Format) -> Result<Output<T>, ApiError> {
    match format {
        Format::Native => Ok(Output::Native(records)),
        Format::ExternalJson => to_json(&records).map(Output::Json),
    }
}
