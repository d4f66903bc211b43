use flip_rust::apis::disbursements::{DisbursementRequest, DisbursementRequestBuilder};
use uuid::Uuid;

/// Account known to both the sandbox and the local mock server.
pub static TEST_BANK_CODE: &str = "bni";
pub static TEST_ACCOUNT_NUMBER: &str = "0437051936";

pub fn disbursement_request(amount: u64) -> DisbursementRequest {
    DisbursementRequestBuilder::default()
        .account_number(TEST_ACCOUNT_NUMBER)
        .bank_code(TEST_BANK_CODE)
        .amount(amount)
        .remark("flip-rust test")
        .build()
        .unwrap()
}

pub fn new_idempotency_key() -> String {
    format!("flip-rust-test-{}", Uuid::new_v4())
}
