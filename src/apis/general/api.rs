use crate::{
    apis::{
        general::{Balance, Bank, ListBanksQuery, MaintenanceStatus, OperationalStatus},
        FlipClientInner,
    },
    common::{BANK_LIST_PATH, CURRENT_BALANCE_PATH, MAINTENANCE_PATH, OPERATIONAL_PATH},
    request::ApiRequest,
    Error,
};
use std::sync::Arc;

/// Flip general APIs client.
#[derive(Clone, Debug)]
pub struct GeneralApi {
    inner: Arc<FlipClientInner>,
}

impl GeneralApi {
    pub(crate) fn new(inner: Arc<FlipClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the supported banks, optionally only the one with the given bank code.
    ///
    /// Banks are sorted by name, whatever the order returned by Flip.
    #[tracing::instrument(name = "List Banks", skip(self))]
    pub async fn list_banks(&self, bank_code: Option<&str>) -> Result<Vec<Bank>, Error> {
        let request = ApiRequest::get(BANK_LIST_PATH).query(&ListBanksQuery {
            code: bank_code.filter(|code| !code.is_empty()),
        })?;

        let mut banks: Vec<Bank> = self.inner.call(request).await?;
        banks.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(banks)
    }

    /// Gets the current balance of the account.
    #[tracing::instrument(name = "Get Balance", skip(self))]
    pub async fn balance(&self) -> Result<Balance, Error> {
        self.inner.call(ApiRequest::get(CURRENT_BALANCE_PATH)).await
    }

    /// Checks whether Flip is operational.
    #[tracing::instrument(name = "Check Operational", skip(self))]
    pub async fn operational_status(&self) -> Result<OperationalStatus, Error> {
        self.inner.call(ApiRequest::get(OPERATIONAL_PATH)).await
    }

    /// Checks whether Flip is under maintenance.
    #[tracing::instrument(name = "Check Maintenance", skip(self))]
    pub async fn maintenance_status(&self) -> Result<MaintenanceStatus, Error> {
        self.inner.call(ApiRequest::get(MAINTENANCE_PATH)).await
    }
}
