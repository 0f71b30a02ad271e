mod accounts;
pub use self::accounts::AccountClient;

mod campaigns;
pub use self::campaigns::CampaignDataClient;
