//! Typed resource surface of the Inkpost API.
//!
//! Each submodule pairs response envelopes (serde-decoded) with request
//! records (flattened through [`crate::form`]) and implements the resource
//! operations on [`Client`].
//!
//! Every envelope optionally carries an embedded [`ErrorPayload`]: when a
//! call fails, the service's structured error detail is decoded into the
//! envelope and surfaced through
//! [`RequestError::Status`](crate::client::RequestError::Status).
//!
//! [`Client`]: crate::client::Client

mod addresses;
mod bank_accounts;
mod checks;
mod directory;
mod letters;
mod mail;


pub use addresses::{Address, AddressVerification, DeletionMessage, NewAddress};
pub use bank_accounts::{BankAccount, NewBankAccount};
pub use checks::{Check, NewCheck};
pub use directory::{NamedObject, NamedObjectList};
pub use letters::{
    ADDRESS_PLACEMENT_INSERT_BLANK_PAGE, ADDRESS_PLACEMENT_TOP_FIRST_PAGE,
    EXTRA_SERVICE_CERTIFIED, EXTRA_SERVICE_CERTIFIED_RETURN_RECEIPT, EXTRA_SERVICE_REGISTERED,
    CustomEnvelope, Letter, LetterThumbnail, NewLetter,
};
pub use mail::{
    MAIL_TYPE_UPS_NEXT_DAY_AIR, MAIL_TYPE_USPS_FIRST_CLASS, MAIL_TYPE_USPS_STANDARD, Tracking,
    TrackingEvent, TrackingEventDetails,
};

use serde::Deserialize;

/// Structured error detail embedded in a response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorPayload {
    /// Human-readable failure description.
    pub message: String,
    /// Numeric status the service attached to the failure.
    pub status_code: i64,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListResponse<T> {
    /// The page of results, in reverse chronological order.
    #[serde(default)]
    pub data: Vec<T>,
    /// Resource kind of the listed objects.
    #[serde(default)]
    pub object: String,
    /// URL of the next page, when one exists.
    #[serde(default)]
    pub next_url: Option<String>,
    /// URL of the previous page, when one exists.
    #[serde(default)]
    pub previous_url: Option<String>,
    /// Number of entries in this page.
    #[serde(default)]
    pub count: i64,
    /// Embedded error detail on failed calls.
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

/// Response to cancelling a check or letter before its send date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Cancellation {
    /// Identifier of the cancelled object.
    pub id: String,
    /// Whether the object was removed from the send queue.
    pub deleted: bool,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// Default page size when a caller passes a non-positive count.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Applies the listing defaults: non-positive counts become
/// [`DEFAULT_PAGE_SIZE`], negative offsets become zero.
fn page_bounds(count: i64, offset: i64) -> (i64, i64) {
    let count = if count <= 0 { DEFAULT_PAGE_SIZE } else { count };
    let offset = offset.max(0);
    (count, offset)
}
