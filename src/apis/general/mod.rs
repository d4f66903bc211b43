//! APIs and models related to banks, balance and service status.

mod api;
mod model;

pub use api::GeneralApi;
pub use model::*;
