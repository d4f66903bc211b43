use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(default)]
pub struct Bank {
    pub bank_code: String,
    pub name: String,
    pub fee: u64,
    /// Estimated number of pending transfers before a new one to this bank is processed.
    pub queue: i64,
    pub status: BankStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankStatus {
    Operational,
    Disturbed,
    HeavilyDisturbed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Balance {
    pub balance: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct OperationalStatus {
    pub operational: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct MaintenanceStatus {
    pub maintenance: bool,
}

#[derive(Serialize, Debug)]
pub(crate) struct ListBanksQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}
