//! Rust client for the [Flip](https://flip.id) Business disbursement APIs (`bigflip.id`).
//!
//! The client gives typed access to bank listing, account inquiry, balance checks
//! and disbursements, taking care of authentication, retries of transient network
//! failures and the decoding of the different error shapes returned by Flip.
//!
//! # Usage
//!
//! ## Initialize a new `FlipClient`
//!
//! Create a new [`FlipClient`](crate::client::FlipClient) and provide the secret key
//! found in your Flip Business dashboard.
//!
//! ```rust,no_run
//! # use flip_rust::{FlipClient, client::{Credentials, Environment}};
//! let flip = FlipClient::builder(Credentials::secret_key("my-secret-key"))
//!     .with_environment(Environment::Sandbox)
//!     .build();
//! ```
//!
//! By default, a `FlipClient` connects to the Production environment.
//!
//! ## List banks
//!
//! ```rust,no_run
//! # use flip_rust::{FlipClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let flip: FlipClient = unreachable!();
//! #
//! // Banks are always sorted by name
//! for bank in flip.general.list_banks(None).await? {
//!     tracing::info!("{} ({}): fee {}", bank.name, bank.bank_code, bank.fee);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Create a disbursement
//!
//! ```rust,no_run
//! # use flip_rust::{FlipClient, Error, apis::disbursements::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let flip: FlipClient = unreachable!();
//! #
//! let request = DisbursementRequestBuilder::default()
//!     .account_number("0437051936")
//!     .bank_code("bni")
//!     .amount(10_000u64)
//!     .remark("monthly payout")
//!     .build()
//!     .unwrap();
//!
//! // Reuse the same idempotency key when retrying the same disbursement
//! let disbursement = flip
//!     .disbursements
//!     .create("payout-2024-01-0001", &request)
//!     .await?;
//!
//! println!("Created disbursement {} ({:?})", disbursement.id, disbursement.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! Errors returned by Flip are surfaced as [`Error::ApiError`](crate::error::Error::ApiError).
//! Validation failures (HTTP 422) carry the list of offending attributes:
//!
//! ```rust,no_run
//! # use flip_rust::{FlipClient, Error, error::ApiError, apis::disbursements::*};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let flip: FlipClient = unreachable!();
//! # let request: DisbursementRequest = unreachable!();
//! match flip.disbursements.create("some-key", &request).await {
//!     Ok(disbursement) => println!("Created {}", disbursement.id),
//!     Err(Error::ApiError(ApiError::Validation { error, .. })) => {
//!         for e in error.errors {
//!             println!("{}: {}", e.attribute, e.message);
//!         }
//!     }
//!     Err(e) => println!("Failed: {}", e),
//! }
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! ```shell
//! cargo run --example disburse
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
mod pipeline;
mod request;
mod response;
pub mod transport;

pub use client::FlipClient;
pub use error::Error;
