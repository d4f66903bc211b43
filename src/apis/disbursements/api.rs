use crate::{
    apis::{
        disbursements::{
            BankAccountInquiry, BankAccountInquiryRequest, Disbursement, DisbursementPage,
            DisbursementQueue, DisbursementRequest, ListDisbursementsQuery,
        },
        FlipClientInner,
    },
    common::{
        BANK_ACCOUNT_INQUIRY_PATH, DISBURSEMENT_LIST_SORT, DISBURSEMENT_PATH,
        IDEMPOTENCY_KEY_HEADER,
    },
    error::RequestError,
    request::ApiRequest,
    Error,
};
use std::sync::Arc;

/// Flip disbursement APIs client.
#[derive(Clone, Debug)]
pub struct DisbursementsApi {
    inner: Arc<FlipClientInner>,
}

impl DisbursementsApi {
    pub(crate) fn new(inner: Arc<FlipClientInner>) -> Self {
        Self { inner }
    }

    /// Checks that a bank account exists and returns the name of its holder.
    ///
    /// Flip may answer with a `PENDING` status while it asks the bank; query again later in that case.
    /// Transport failures are retried like any read.
    #[tracing::instrument(
        name = "Bank Account Inquiry",
        skip(self, request),
        fields(bank_code = %request.bank_code)
    )]
    pub async fn bank_account_inquiry(
        &self,
        request: &BankAccountInquiryRequest,
    ) -> Result<BankAccountInquiry, Error> {
        // Read-only lookup, safe to repeat
        let request = ApiRequest::post(BANK_ACCOUNT_INQUIRY_PATH)
            .retryable()
            .form(request)?;

        self.inner.call(request).await
    }

    /// Lists disbursements, newest first.
    ///
    /// `page` starts from 1.
    #[tracing::instrument(name = "List Disbursements", skip(self))]
    pub async fn list(&self, per_page: u32, page: u32) -> Result<DisbursementPage, Error> {
        let request = ApiRequest::get(DISBURSEMENT_PATH).query(&ListDisbursementsQuery {
            pagination: per_page,
            page,
            sort: DISBURSEMENT_LIST_SORT,
        })?;

        self.inner.call(request).await
    }

    /// Gets the details of an existing disbursement.
    #[tracing::instrument(name = "Get Disbursement by ID", skip(self))]
    pub async fn get_by_id(&self, id: u64) -> Result<Disbursement, Error> {
        self.inner
            .call(ApiRequest::get(format!("{}/{}", DISBURSEMENT_PATH, id)))
            .await
    }

    /// Gets the position of a pending disbursement in the processing queue.
    #[tracing::instrument(name = "Get Disbursement Queue", skip(self))]
    pub async fn queue(&self, id: u64) -> Result<DisbursementQueue, Error> {
        self.inner
            .call(ApiRequest::get(format!("{}/{}/queue", DISBURSEMENT_PATH, id)))
            .await
    }

    /// Creates a new disbursement.
    ///
    /// Flip processes at most one disbursement per `idempotency_key`: reuse the same key
    /// when retrying a request whose outcome is unknown, so that money is not sent twice.
    #[tracing::instrument(
        name = "Create Disbursement",
        skip(self, request),
        fields(
            bank_code = %request.bank_code,
            amount = request.amount
        )
    )]
    pub async fn create(
        &self,
        idempotency_key: &str,
        request: &DisbursementRequest,
    ) -> Result<Disbursement, Error> {
        if idempotency_key.is_empty() {
            return Err(RequestError::MissingIdempotencyKey.into());
        }

        let request = ApiRequest::post(DISBURSEMENT_PATH)
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .form(request)?;

        self.inner.call(request).await
    }
}
