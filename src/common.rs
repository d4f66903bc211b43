// Default URLs
pub static DEFAULT_PRODUCTION_URL: &str = "https://bigflip.id/api/v2";
pub static DEFAULT_SANDBOX_URL: &str = "https://bigflip.id/big_sandbox_api/v2";

// Header names
pub static IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

// Endpoint paths
pub static BANK_LIST_PATH: &str = "/general/banks";
pub static CURRENT_BALANCE_PATH: &str = "/general/balance";
pub static OPERATIONAL_PATH: &str = "/general/operational";
pub static MAINTENANCE_PATH: &str = "/general/maintenance";
pub static BANK_ACCOUNT_INQUIRY_PATH: &str = "/disbursement/bank-account-inquiry";
pub static DISBURSEMENT_PATH: &str = "/disbursement";

// Disbursement lists are always sorted by descending id
pub static DISBURSEMENT_LIST_SORT: &str = "-id";
