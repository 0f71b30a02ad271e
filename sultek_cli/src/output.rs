use sultek_api::types::{Account, DailyCampaignData};
use sultek_api::Format;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Tables are drawn from native records; json is the API's external form.
    pub fn api_format(&self) -> Format {
        match self {
            OutputFormat::Table => Format::Native,
            OutputFormat::Json => Format::ExternalJson,
        }
    }
}

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct CampaignRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Campaign")]
    campaign_id: String,
    #[tabled(rename = "Clicks")]
    clicks: u64,
    #[tabled(rename = "Conversions")]
    conversions: u64,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Impressions")]
    impressions: u64,
}

// -- Row builders --

fn build_account_rows(accounts: &[Account]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|a| AccountRow {
            id: a.id.clone(),
            name: a.name.clone(),
        })
        .collect()
}

fn build_campaign_rows(daily: &DailyCampaignData) -> Vec<CampaignRow> {
    daily
        .values()
        .map(|cd| CampaignRow {
            date: cd.date.clone(),
            campaign_id: cd.campaign_id.clone(),
            clicks: cd.clicks,
            conversions: cd.conversions,
            cost: cd.cost.to_string(),
            impressions: cd.impressions,
        })
        .collect()
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn print_accounts_table(accounts: &[Account]) {
    println!("{}", render(build_account_rows(accounts)));
}

pub fn print_campaigns_table(daily: &DailyCampaignData) {
    println!("{}", render(build_campaign_rows(daily)));
}

pub fn print_json(text: &str) {
    println!("{}", text);
}
