//! Inkpost: client for the Inkpost print-and-mail API
//!
//! An async library for creating and tracking physical mail (addresses,
//! checks, bank accounts, and letters) through the Inkpost HTTP API, plus
//! verification of the webhooks Inkpost sends back.
//!
//! # Getting started
//!
//! Build a [`client::Client`] with your API key and call resource
//! operations on it:
//!
//! ```no_run
//! use inkpost::client::ClientBuilder;
//! use inkpost::resources::NewAddress;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::new("test_0dc8d51e0acffcb1880e0f19c79b2f5b0cc").build()?;
//!
//!     let address = client
//!         .create_address(&NewAddress {
//!             name: "Inkpost Test".into(),
//!             address_line1: "1005 W Burnside St".into(),
//!             address_city: "Portland".into(),
//!             address_state: "OR".into(),
//!             address_zip: "97209".into(),
//!             address_country: "US".into(),
//!             ..NewAddress::default()
//!         })
//!         .await?;
//!     println!("created {}", address.id);
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! A non-success status does not discard the response: the service embeds
//! structured error detail in the body, and
//! [`client::RequestError::Status`] carries the best-effort decoded
//! envelope alongside the status and raw body.
//!
//! # Webhooks
//!
//! Inbound webhook deliveries are authenticated with
//! [`webhook::SignatureVerifier`]; hand it the raw body bytes and the two
//! signature headers from the request.
//!
//! # Runtime requirements
//!
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`
//! through the [`transport::HttpClient`] trait, which applications can
//! implement to swap the HTTP stack or inject mocks.

pub mod client;
pub mod form;
pub mod resources;
pub mod time;
pub mod transport;
pub mod webhook;
