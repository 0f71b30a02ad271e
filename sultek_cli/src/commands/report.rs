use anyhow::Result;
use clap::Args;
use sultek_api::{AccountClient, CampaignDataClient, Output, Session};

use super::campaigns::CampaignsArgs;
use crate::output::{print_accounts_table, print_campaigns_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub range: CampaignsArgs,
}

/// Fetches the account and its campaign data in parallel over one session and
/// prints both once both calls have finished.
pub async fn run(args: &ReportArgs, session: &Session, format: &OutputFormat) -> Result<()> {
    args.range.validate()?;
    let accounts = AccountClient::new(session.clone());
    let campaigns = CampaignDataClient::new(session.clone());

    let (accounts, daily) = tokio::join!(
        accounts.get_accounts(Some(args.range.account_id.as_str()), format.api_format()),
        campaigns.get_data(
            &args.range.account_id,
            args.range.start,
            args.range.end,
            format.api_format(),
        ),
    );

    match accounts? {
        Output::Native(accounts) => print_accounts_table(&accounts),
        Output::Json(text) => print_json(&text),
    }
    match daily? {
        Output::Native(daily) => print_campaigns_table(&daily),
        Output::Json(text) => print_json(&text),
    }
    Ok(())
}
