//! APIs and models related to disbursements and bank account inquiries.

mod api;
mod model;

pub use api::DisbursementsApi;
pub use model::*;
