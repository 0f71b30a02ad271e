//! Async client for the Sultek analytics API.
//!
//! A [`Session`] owns the HTTP connection and credentials; the
//! [`AccountClient`] and [`CampaignDataClient`] facades fetch payloads through
//! it, validate them into typed records and return them natively or as JSON.

mod client;
mod config;
mod endpoints;
mod errors;
pub mod format;
pub mod mapper;
pub mod types;
pub use self::client::{Payload, Session};
pub use self::config::Config;
pub use self::endpoints::{AccountClient, CampaignDataClient};
pub use self::errors::{ApiError, ConfigError, ValidationError};
pub use self::format::{Format, Output};
