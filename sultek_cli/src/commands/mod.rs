pub mod accounts;
pub mod campaigns;
pub mod report;
