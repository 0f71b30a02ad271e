//! Campaign performance by date.

use chrono::NaiveDate;

use crate::format::{format_output, Format, Output};
use crate::mapper::map_campaign_data;
use crate::types::DailyCampaignData;
use crate::{ApiError, Session};

/// Facade for the per-account `getData` endpoint.
#[derive(Clone, Debug)]
pub struct CampaignDataClient {
    session: Session,
}

impl CampaignDataClient {
    /// Path segments preceding the account id.
    pub const ENDPOINT: &'static [&'static str] = &["demo", "getData"];

    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetches campaign rows for `account_id` between `start` and `end` and
    /// aggregates them by date.
    ///
    /// Rows sharing a date are summed into one record that keeps the last
    /// row's `campaign_id`. Callers that need per-campaign figures on a
    /// single date cannot recover them from the result.
    pub async fn get_data(
        &self,
        account_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        format: Format,
    ) -> Result<Output<DailyCampaignData>, ApiError> {
        let mut segments: Vec<&str> = Self::ENDPOINT.to_vec();
        segments.push(account_id);
        let query = [
            ("start", start.format("%Y-%m-%d").to_string()),
            ("end", end.format("%Y-%m-%d").to_string()),
        ];

        let payload = self.session.get_payload(&segments, &query).await?;
        let daily = map_campaign_data(&payload.body).map_err(|e| e.at_endpoint(&payload.endpoint))?;
        tracing::debug!(dates = daily.len(), account_id, "mapped campaign data");
        format_output(daily, format)
    }
}
