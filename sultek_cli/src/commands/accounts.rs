use anyhow::Result;
use clap::Args;
use sultek_api::{AccountClient, Output, Session};

use crate::output::{print_accounts_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AccountsArgs {
    /// Only show the account with this exact id
    #[arg(long)]
    pub account_id: Option<String>,
}

pub async fn run(args: &AccountsArgs, session: &Session, format: &OutputFormat) -> Result<()> {
    let client = AccountClient::new(session.clone());
    match client
        .get_accounts(args.account_id.as_deref(), format.api_format())
        .await?
    {
        Output::Native(accounts) => print_accounts_table(&accounts),
        Output::Json(text) => print_json(&text),
    }
    Ok(())
}
