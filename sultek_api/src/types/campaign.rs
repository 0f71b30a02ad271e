//! Campaign performance rows from the `getData` endpoint.

use indexmap::map::Entry;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{fields, Record};
use crate::ApiError;

/// One day of performance numbers for a campaign.
///
/// `date` stays the `YYYY-MM-DD` string received from the API so it round-trips
/// unchanged. `cost` is an exact decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignData {
    pub date: String,
    pub campaign_id: String,
    #[serde(deserialize_with = "fields::count")]
    pub clicks: u64,
    #[serde(deserialize_with = "fields::count")]
    pub conversions: u64,
    #[serde(deserialize_with = "fields::decimal", serialize_with = "fields::decimal_number")]
    pub cost: Decimal,
    #[serde(deserialize_with = "fields::count")]
    pub impressions: u64,
}

impl Record for CampaignData {
    const NAME: &'static str = "campaign data";
    const FIELDS: &'static [&'static str] = &[
        "date",
        "campaign_id",
        "clicks",
        "conversions",
        "cost",
        "impressions",
    ];
}

impl CampaignData {
    /// Returns a new record with the counters and cost of `later` added to this
    /// one. The result takes `later`'s `campaign_id`, so merging rows from
    /// different campaigns keeps only the last id.
    pub fn merged_with(&self, later: &CampaignData) -> Result<CampaignData, ApiError> {
        let overflow = |field| ApiError::Aggregation {
            date: self.date.clone(),
            field,
        };
        Ok(CampaignData {
            date: self.date.clone(),
            campaign_id: later.campaign_id.clone(),
            clicks: self
                .clicks
                .checked_add(later.clicks)
                .ok_or_else(|| overflow("clicks"))?,
            conversions: self
                .conversions
                .checked_add(later.conversions)
                .ok_or_else(|| overflow("conversions"))?,
            cost: self
                .cost
                .checked_add(later.cost)
                .ok_or_else(|| overflow("cost"))?,
            impressions: self
                .impressions
                .checked_add(later.impressions)
                .ok_or_else(|| overflow("impressions"))?,
        })
    }
}

/// Campaign rows keyed by date, in the order each date was first seen.
///
/// Every date holds a single aggregate. When the API reports several
/// campaigns on the same date they are collapsed into one row carrying the
/// last campaign's id.
pub type DailyCampaignData = IndexMap<String, CampaignData>;

/// Groups `rows` by date, merging rows that share a date in arrival order.
pub fn aggregate_by_date<I>(rows: I) -> Result<DailyCampaignData, ApiError>
where
    I: IntoIterator<Item = CampaignData>,
{
    let mut daily = DailyCampaignData::new();
    for row in rows {
        match daily.entry(row.date.clone()) {
            Entry::Occupied(mut entry) => {
                if entry.get().campaign_id != row.campaign_id {
                    tracing::warn!(
                        date = %row.date,
                        previous = %entry.get().campaign_id,
                        latest = %row.campaign_id,
                        "collapsing different campaigns on one date"
                    );
                }
                let merged = entry.get().merged_with(&row)?;
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
        }
    }
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn row(date: &str, campaign: &str, clicks: u64, cost: &str) -> CampaignData {
        CampaignData {
            date: date.to_string(),
            campaign_id: campaign.to_string(),
            clicks,
            conversions: 10,
            cost: Decimal::from_str(cost).unwrap(),
            impressions: 1000,
        }
    }

    #[test]
    fn from_raw_accepts_cost_as_number_or_string() {
        let raw = json!({
            "date": "2024-05-01",
            "campaign_id": "1001",
            "clicks": 500000,
            "conversions": 8912,
            "cost": "9712.85",
            "impressions": 1295715
        });
        let cd = CampaignData::from_raw(raw.as_object().unwrap()).unwrap();
        assert_eq!(cd.cost, Decimal::from_str("9712.85").unwrap());
        assert_eq!(cd.clicks, 500000);

        let raw = json!({
            "date": "2024-05-01",
            "campaign_id": "1001",
            "clicks": 1,
            "conversions": 1,
            "cost": 9712.85,
            "impressions": 1
        });
        let cd = CampaignData::from_raw(raw.as_object().unwrap()).unwrap();
        assert_eq!(cd.cost.to_string(), "9712.85");
    }

    #[test]
    fn from_raw_accepts_whole_number_float_counts() {
        let raw = json!({
            "date": "2024-05-01",
            "campaign_id": "1001",
            "clicks": 5.0,
            "conversions": "3",
            "cost": 1,
            "impressions": 10
        });
        let cd = CampaignData::from_raw(raw.as_object().unwrap()).unwrap();
        assert_eq!(cd.clicks, 5);
        assert_eq!(cd.conversions, 3);
    }

    #[test]
    fn from_raw_reports_missing_field() {
        let raw = json!({"date": "2024-05-01", "campaign_id": "1", "clicks": 1, "conversions": 1, "cost": 1});
        let err = CampaignData::from_raw(raw.as_object().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "missing field `impressions`");
    }

    #[test]
    fn mapping_follows_declared_order() {
        // keys deliberately out of declaration order
        let raw = json!({
            "impressions": 3,
            "cost": "1.50",
            "date": "2024-05-02",
            "clicks": 1,
            "campaign_id": "7",
            "conversions": 2
        });
        let cd = CampaignData::from_raw(raw.as_object().unwrap()).unwrap();
        let mapping = cd.to_mapping().unwrap();
        let keys: Vec<&str> = mapping.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, CampaignData::FIELDS);
        assert_eq!(mapping["cost"].to_string(), "1.50");
        assert_eq!(cd.to_external().unwrap(), mapping);
    }

    #[test]
    fn merged_with_sums_and_takes_later_campaign() {
        let merged = row("2024-05-01", "a", 500000, "100.10")
            .merged_with(&row("2024-05-01", "b", 419046, "50.60"))
            .unwrap();
        assert_eq!(merged.clicks, 919046);
        assert_eq!(merged.conversions, 20);
        assert_eq!(merged.impressions, 2000);
        assert_eq!(merged.cost.to_string(), "150.70");
        assert_eq!(merged.campaign_id, "b");
    }

    #[test]
    fn merged_with_reports_overflow() {
        let err = row("2024-05-01", "a", u64::MAX, "1")
            .merged_with(&row("2024-05-01", "a", 1, "1"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Aggregation { field: "clicks", .. }));
    }

    #[test]
    fn aggregate_groups_by_first_seen_date() {
        let daily = aggregate_by_date(vec![
            row("2024-05-02", "a", 1, "1.00"),
            row("2024-05-01", "a", 2, "2.00"),
            row("2024-05-02", "b", 3, "3.00"),
        ])
        .unwrap();

        assert_eq!(daily.len(), 2);
        assert_eq!(daily.keys().collect::<Vec<_>>(), vec!["2024-05-02", "2024-05-01"]);
        assert_eq!(daily["2024-05-02"].clicks, 4);
        assert_eq!(daily["2024-05-02"].cost.to_string(), "4.00");
        assert_eq!(daily["2024-05-02"].campaign_id, "b");
        assert_eq!(daily["2024-05-01"].clicks, 2);
        assert!(daily.get("2024-05-03").is_none());
    }

    #[test]
    fn aggregate_overflow_fails_the_batch() {
        let err = aggregate_by_date(vec![
            row("2024-05-01", "a", u64::MAX, "1"),
            row("2024-05-01", "a", 1, "1"),
        ])
        .unwrap_err();
        assert!(matches!(err, ApiError::Aggregation { ref date, .. } if date == "2024-05-01"));
    }
}
