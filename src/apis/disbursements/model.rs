use chrono::NaiveDateTime;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Format of the timestamps returned by Flip (`YYYY-MM-DD HH:MM:SS`, Asia/Jakarta time).
pub static TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into), derive(Debug))]
pub struct BankAccountInquiryRequest {
    pub bank_code: String,
    pub account_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct BankAccountInquiry {
    pub bank_code: String,
    pub account_number: String,
    #[serde(default)]
    pub account_holder: String,
    pub status: InquiryStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Success,
    InvalidAccountNumber,
    SuspectedAccount,
    BlackListed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Parameters of a new disbursement, sent URL-encoded.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[builder(setter(into), derive(Debug))]
pub struct DisbursementRequest {
    pub account_number: String,
    pub bank_code: String,
    pub amount: u64,
    #[builder(default)]
    pub remark: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_city: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct Disbursement {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub status: DisbursementStatus,
    /// Creation time, see [`Disbursement::created_at`].
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub bank_code: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub sender_bank: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub receipt: Option<String>,
    /// Only meaningful once the disbursement is `DONE`, see [`Disbursement::served_at`].
    #[serde(default)]
    pub time_served: String,
    #[serde(default)]
    pub bundle_id: u64,
    #[serde(default)]
    pub company_id: u64,
    #[serde(default)]
    pub recipient_city: Option<u32>,
    #[serde(default)]
    pub created_from: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub fee: u64,
}

impl Disbursement {
    /// When the disbursement was created, if Flip returned a valid timestamp.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// When the money was transferred; `None` until the disbursement is done.
    pub fn served_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.time_served, TIMESTAMP_FORMAT).ok()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisbursementStatus {
    Pending,
    Cancelled,
    Done,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Sender details, only present for disbursements made on behalf of someone else.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(default)]
pub struct Sender {
    pub sender_name: String,
    pub place_of_birth: u32,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub address: String,
    pub sender_identity_type: String,
    pub sender_identity_number: String,
    pub sender_country: i16,
    pub job: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DisbursementQueue {
    pub queue: u32,
}

/// A page of disbursements, newest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct DisbursementPage {
    #[serde(default)]
    pub total_data: u32,
    #[serde(default)]
    pub data_per_page: u32,
    #[serde(default)]
    pub total_page: u32,
    #[serde(default)]
    pub page: u32,
    pub data: Vec<Disbursement>,
}

#[derive(Serialize, Debug)]
pub(crate) struct ListDisbursementsQuery {
    pub pagination: u32,
    pub page: u32,
    pub sort: &'static str,
}
