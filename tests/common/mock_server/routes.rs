use crate::common::mock_server::{mock_banks, MockServerStorage};
use chrono::Utc;
use flip_rust::apis::disbursements::{
    BankAccountInquiryRequest, Disbursement, DisbursementPage, DisbursementRequest,
    DisbursementStatus, TIMESTAMP_FORMAT,
};
use serde_json::json;
use wiremock::{Request, Respond, ResponseTemplate};

static MINIMUM_AMOUNT: u64 = 10_000;

fn validation_error(attribute: &str, code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(422).set_body_json(json!({
        "code": "VALIDATION_ERROR",
        "errors": [{ "attribute": attribute, "code": code, "message": message }]
    }))
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "name": "Not Found",
        "message": "Disbursement not found",
        "code": 0,
        "status": 404,
        "type": "yii\\web\\NotFoundHttpException"
    }))
}

fn query_param(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn disbursement_id(request: &Request) -> Option<u64> {
    request.url.path_segments()?.nth(1)?.parse().ok()
}

fn idempotency_key(request: &Request) -> Option<String> {
    request
        .headers
        .iter()
        .find(|(name, _)| name.as_str().eq_ignore_ascii_case("idempotency-key"))
        .map(|(_, values)| values.last().as_str().to_string())
        .filter(|key| !key.is_empty())
}

/// GET /general/banks
pub(super) struct ListBanks;

impl Respond for ListBanks {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let code = query_param(request, "code");
        let banks: Vec<_> = mock_banks()
            .into_iter()
            .filter(|bank| code.as_deref().map_or(true, |c| c == bank.bank_code))
            .collect();

        ResponseTemplate::new(200).set_body_json(banks)
    }
}

/// GET /general/balance
pub(super) struct GetBalance(pub(super) MockServerStorage);

impl Respond for GetBalance {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let balance = self.0.read().unwrap().balance;

        ResponseTemplate::new(200).set_body_json(json!({ "balance": balance }))
    }
}

/// POST /disbursement/bank-account-inquiry
pub(super) struct BankAccountInquiry;

impl Respond for BankAccountInquiry {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let inquiry: BankAccountInquiryRequest = match serde_urlencoded::from_bytes(&request.body) {
            Ok(inquiry) => inquiry,
            Err(_) => return validation_error("account_number", 1011, "Account number is required"),
        };

        if !mock_banks().iter().any(|b| b.bank_code == inquiry.bank_code) {
            return validation_error("bank_code", 1031, "Bank code is invalid");
        }

        let (account_holder, status) = if inquiry.account_number.chars().all(|c| c.is_ascii_digit()) {
            ("PT MOCK FLIP", "SUCCESS")
        } else {
            ("", "INVALID_ACCOUNT_NUMBER")
        };

        ResponseTemplate::new(200).set_body_json(json!({
            "bank_code": inquiry.bank_code,
            "account_number": inquiry.account_number,
            "account_holder": account_holder,
            "status": status
        }))
    }
}

/// POST /disbursement
pub(super) struct CreateDisbursement(pub(super) MockServerStorage);

impl Respond for CreateDisbursement {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let idempotency_key = match idempotency_key(request) {
            Some(key) => key,
            None => return validation_error("idempotency_key", 1099, "Idempotency key is required"),
        };
        let disbursement_request: DisbursementRequest =
            match serde_urlencoded::from_bytes(&request.body) {
                Ok(r) => r,
                Err(_) => return validation_error("amount", 1021, "Amount is required"),
            };

        let bank = match mock_banks()
            .into_iter()
            .find(|b| b.bank_code == disbursement_request.bank_code)
        {
            Some(bank) => bank,
            None => return validation_error("bank_code", 1031, "Bank code is invalid"),
        };
        if disbursement_request.amount < MINIMUM_AMOUNT {
            return validation_error("amount", 1021, "Minimum amount is 10000");
        }

        let mut storage = self.0.write().unwrap();

        // Same key, same disbursement
        if let Some(id) = storage.idempotency_keys.get(&idempotency_key) {
            let existing = storage.disbursements.iter().find(|d| d.id == *id).cloned();
            return ResponseTemplate::new(200).set_body_json(existing);
        }

        let disbursement = Disbursement {
            id: storage.disbursements.len() as u64 + 1,
            user_id: 1,
            amount: disbursement_request.amount,
            status: DisbursementStatus::Pending,
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            bank_code: bank.bank_code,
            account_number: disbursement_request.account_number,
            recipient_name: "-".to_string(),
            sender_bank: "bni".to_string(),
            remark: disbursement_request.remark,
            receipt: None,
            time_served: "(not set)".to_string(),
            bundle_id: 0,
            company_id: 1,
            recipient_city: disbursement_request.recipient_city,
            created_from: "API".to_string(),
            direction: "DOMESTIC_TRANSFER".to_string(),
            sender: None,
            fee: bank.fee,
        };

        storage.balance -= (disbursement.amount + disbursement.fee) as i64;
        storage
            .idempotency_keys
            .insert(idempotency_key, disbursement.id);
        storage.disbursements.push(disbursement.clone());

        ResponseTemplate::new(200).set_body_json(disbursement)
    }
}

/// GET /disbursement
pub(super) struct ListDisbursements(pub(super) MockServerStorage);

impl Respond for ListDisbursements {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let per_page: u32 = query_param(request, "pagination")
            .and_then(|p| p.parse().ok())
            .filter(|p| *p > 0)
            .unwrap_or(50);
        let page: u32 = query_param(request, "page")
            .and_then(|p| p.parse().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);

        let mut disbursements = self.0.read().unwrap().disbursements.clone();
        if query_param(request, "sort").as_deref() == Some("-id") {
            disbursements.sort_by(|a, b| b.id.cmp(&a.id));
        }

        let total_data = disbursements.len() as u32;
        let data = disbursements
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect();

        ResponseTemplate::new(200).set_body_json(DisbursementPage {
            total_data,
            data_per_page: per_page,
            total_page: (total_data + per_page - 1) / per_page,
            page,
            data,
        })
    }
}

/// GET /disbursement/{id}
pub(super) struct GetDisbursement(pub(super) MockServerStorage);

impl Respond for GetDisbursement {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let storage = self.0.read().unwrap();

        match disbursement_id(request)
            .and_then(|id| storage.disbursements.iter().find(|d| d.id == id))
        {
            Some(disbursement) => ResponseTemplate::new(200).set_body_json(disbursement),
            None => not_found(),
        }
    }
}

/// GET /disbursement/{id}/queue
pub(super) struct GetDisbursementQueue(pub(super) MockServerStorage);

impl Respond for GetDisbursementQueue {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let storage = self.0.read().unwrap();
        let id = match disbursement_id(request) {
            Some(id) if storage.disbursements.iter().any(|d| d.id == id) => id,
            _ => return not_found(),
        };

        // Pending disbursements are served oldest first
        let queue = storage
            .disbursements
            .iter()
            .filter(|d| d.status == DisbursementStatus::Pending && d.id <= id)
            .count();

        ResponseTemplate::new(200).set_body_json(json!({ "queue": queue }))
    }
}
