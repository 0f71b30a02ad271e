use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use sultek_api::{CampaignDataClient, Output, Session};

use crate::output::{print_campaigns_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CampaignsArgs {
    /// Account to fetch campaign data for
    #[arg(long)]
    pub account_id: String,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
}

impl CampaignsArgs {
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            bail!("--start {} is after --end {}", self.start, self.end);
        }
        Ok(())
    }
}

pub async fn run(args: &CampaignsArgs, session: &Session, format: &OutputFormat) -> Result<()> {
    args.validate()?;
    let client = CampaignDataClient::new(session.clone());
    match client
        .get_data(&args.account_id, args.start, args.end, format.api_format())
        .await?
    {
        Output::Native(daily) => print_campaigns_table(&daily),
        Output::Json(text) => print_json(&text),
    }
    Ok(())
}
