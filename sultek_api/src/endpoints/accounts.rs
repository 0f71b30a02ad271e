//! Account listing.

use crate::format::{format_output, Format, Output};
use crate::mapper::map_accounts;
use crate::types::Account;
use crate::{ApiError, Session};

/// Facade for the `getAccounts` endpoint.
#[derive(Clone, Debug)]
pub struct AccountClient {
    session: Session,
}

impl AccountClient {
    /// Path segments of the accounts endpoint below the base URL.
    pub const ENDPOINT: &'static [&'static str] = &["demo", "getAccounts"];

    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetches all accounts, optionally keeping only the one whose id equals
    /// `account_id` exactly. An empty `account_id` is the same as `None`.
    pub async fn get_accounts(
        &self,
        account_id: Option<&str>,
        format: Format,
    ) -> Result<Output<Vec<Account>>, ApiError> {
        let payload = self.session.get_payload(Self::ENDPOINT, &[]).await?;
        let accounts =
            map_accounts(&payload.body, account_id).map_err(|e| e.at_endpoint(&payload.endpoint))?;
        tracing::debug!(count = accounts.len(), ?account_id, "mapped accounts");
        format_output(accounts, format)
    }
}
