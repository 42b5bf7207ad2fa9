//! Printed and mailed letters.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Address, Cancellation, ErrorPayload, ListResponse, TrackingEvent};
use crate::client::{Client, RequestError};
use crate::form::{FieldValue, FormEncode, encode};
use crate::transport::HttpClient;

/// Address printed at the top of the letter's first page.
pub const ADDRESS_PLACEMENT_TOP_FIRST_PAGE: &str = "top_first_page";
/// Address printed on an inserted blank page (costs extra).
pub const ADDRESS_PLACEMENT_INSERT_BLANK_PAGE: &str = "insert_blank_page";

/// Certified mail.
pub const EXTRA_SERVICE_CERTIFIED: &str = "certified";
/// Certified mail with return receipt.
pub const EXTRA_SERVICE_CERTIFIED_RETURN_RECEIPT: &str = "certified_return_receipt";
/// Registered mail.
pub const EXTRA_SERVICE_REGISTERED: &str = "registered";

/// A letter in the Inkpost system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Letter {
    /// Identifier assigned by the service (`ltr_` prefix).
    pub id: String,
    pub description: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub to: Option<Address>,
    pub from: Option<Address>,
    pub color: bool,
    pub double_sided: bool,
    pub address_placement: String,
    pub return_envelope: bool,
    pub perforated_page: Option<u64>,
    pub custom_envelope: Option<CustomEnvelope>,
    pub extra_service: Option<String>,
    pub mail_type: Option<String>,
    pub url: String,
    pub merge_variables: BTreeMap<String, String>,
    pub template_id: Option<String>,
    pub template_version_id: Option<String>,
    pub carrier: String,
    pub tracking_number: Option<String>,
    pub tracking_events: Vec<TrackingEvent>,
    pub thumbnails: Vec<LetterThumbnail>,
    pub expected_delivery_date: String,
    pub date_created: String,
    pub date_modified: String,
    pub send_date: String,
    pub deleted: bool,
    /// Resource kind, always `"letter"`.
    pub object: String,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// A custom envelope referenced by a letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomEnvelope {
    pub id: String,
    pub url: String,
    /// Resource kind, always `"envelope"`.
    pub object: String,
}

/// Thumbnails of the rendered letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LetterThumbnail {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// Parameters for printing and mailing a letter.
#[derive(Debug, Clone, Default)]
pub struct NewLetter {
    /// Internal description, at most 255 characters.
    pub description: Option<String>,
    /// Id of the recipient address.
    pub to_address_id: String,
    /// Id of the sender address.
    pub from_address_id: String,
    pub billing_group_id: Option<String>,
    /// Scheduled send date, RFC 3339. Unset sends as soon as possible.
    pub send_date: Option<String>,
    /// The letter content: an HTML string, a PDF URL, or a template id.
    pub file: String,
    pub color: Option<bool>,
    pub double_sided: Option<bool>,
    /// One of the `ADDRESS_PLACEMENT_*` constants.
    pub address_placement: Option<String>,
    pub mail_type: Option<String>,
    /// One of the `EXTRA_SERVICE_*` constants.
    pub extra_service: Option<String>,
    pub return_envelope: Option<bool>,
    /// Page to perforate, counted from 1. Zero means none.
    pub perforated_page: i64,
    /// Id of a custom envelope to mail in.
    pub custom_envelope_id: Option<String>,
    pub merge_variables: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, String>,
}

impl FormEncode for NewLetter {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("description", FieldValue::OptText(self.description.clone())),
            ("to", FieldValue::Text(self.to_address_id.clone())),
            ("from", FieldValue::Text(self.from_address_id.clone())),
            (
                "billing_group_id",
                FieldValue::OptText(self.billing_group_id.clone()),
            ),
            ("send_date", FieldValue::OptText(self.send_date.clone())),
            ("file", FieldValue::Text(self.file.clone())),
            ("color", FieldValue::OptFlag(self.color)),
            ("double_sided", FieldValue::OptFlag(self.double_sided)),
            (
                "address_placement",
                FieldValue::OptText(self.address_placement.clone()),
            ),
            ("mail_type", FieldValue::OptText(self.mail_type.clone())),
            (
                "extra_service",
                FieldValue::OptText(self.extra_service.clone()),
            ),
            ("return_envelope", FieldValue::OptFlag(self.return_envelope)),
            ("perforated_page", FieldValue::Int(self.perforated_page)),
            (
                "custom_envelope",
                FieldValue::OptText(self.custom_envelope_id.clone()),
            ),
            (
                "merge_variables",
                FieldValue::Map(self.merge_variables.clone()),
            ),
            ("metadata", FieldValue::Map(self.metadata.clone())),
        ]
    }
}

impl<H: HttpClient> Client<H> {
    /// Requests a new letter to be printed and mailed.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn create_letter(&self, letter: &NewLetter) -> Result<Letter, RequestError<Letter>> {
        self.post("letters", &encode(letter)).await
    }

    /// Retrieves a letter by id.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn get_letter(&self, id: &str) -> Result<Letter, RequestError<Letter>> {
        self.get(&format!("letters/{id}"), &[]).await
    }

    /// Lists letters, newest first.
    ///
    /// A non-positive `count` falls back to the default page size.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn list_letters(
        &self,
        count: i64,
    ) -> Result<ListResponse<Letter>, RequestError<ListResponse<Letter>>> {
        let (count, _) = super::page_bounds(count, 0);
        self.get("letters", &[("limit", count.to_string())]).await
    }

    /// Cancels a letter whose send date has not yet passed.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn cancel_letter(&self, id: &str) -> Result<Cancellation, RequestError<Cancellation>> {
        self.delete(&format!("letters/{id}")).await
    }
}
