//! Printed and mailed checks.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Address, BankAccount, Cancellation, ErrorPayload, ListResponse, Tracking, page_bounds};
use crate::client::{Client, RequestError};
use crate::form::{FieldValue, FormEncode, encode};
use crate::transport::HttpClient;

/// A printed check in the Inkpost system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Check {
    /// Identifier assigned by the service (`chk_` prefix).
    pub id: String,
    pub amount: f64,
    pub bank_account: Option<BankAccount>,
    pub check_bottom: Option<String>,
    pub check_number: i64,
    pub data: BTreeMap<String, String>,
    pub date_created: String,
    pub date_modified: String,
    pub description: String,
    pub expected_delivery_date: String,
    pub from: Option<Address>,
    pub logo: Option<String>,
    pub mail_type: Option<String>,
    pub memo: String,
    pub message: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub name: String,
    pub thumbnails: Vec<BTreeMap<String, String>>,
    pub to: Option<Address>,
    pub tracking: Option<Tracking>,
    pub url: String,
    /// Resource kind, always `"check"`.
    pub object: String,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// Parameters for printing and mailing a check.
#[derive(Debug, Clone, Default)]
pub struct NewCheck {
    /// Dollar amount. Always sent, two decimal places; `0.0` is a real
    /// $0.00 check.
    pub amount: f64,
    /// Id of the bank account to draw on.
    pub bank_account_id: String,
    /// Up to 400 characters printed at the bottom (mutually exclusive
    /// with `message`).
    pub check_bottom: Option<String>,
    pub check_number: Option<String>,
    /// Merge data for templated checks.
    pub data: BTreeMap<String, String>,
    pub description: Option<String>,
    /// Id of the sender address.
    pub from_address_id: String,
    /// Logo URL. Square, transparent background, PNG or JPEG; printed
    /// grayscale.
    pub logo: Option<String>,
    pub mail_type: Option<String>,
    /// Up to 40 characters on the memo line.
    pub memo: Option<String>,
    /// Up to 400 characters printed at the top (mutually exclusive with
    /// `check_bottom`).
    pub message: Option<String>,
    /// Id of the recipient address.
    pub to_address_id: String,
}

impl FormEncode for NewCheck {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("amount", FieldValue::Amount(self.amount)),
            ("bank_account", FieldValue::Text(self.bank_account_id.clone())),
            ("check_bottom", FieldValue::OptText(self.check_bottom.clone())),
            ("check_number", FieldValue::OptText(self.check_number.clone())),
            ("data", FieldValue::Map(self.data.clone())),
            ("description", FieldValue::OptText(self.description.clone())),
            ("from", FieldValue::Text(self.from_address_id.clone())),
            ("logo", FieldValue::OptText(self.logo.clone())),
            ("mail_type", FieldValue::OptText(self.mail_type.clone())),
            ("memo", FieldValue::OptText(self.memo.clone())),
            ("message", FieldValue::OptText(self.message.clone())),
            ("to", FieldValue::Text(self.to_address_id.clone())),
        ]
    }
}

impl<H: HttpClient> Client<H> {
    /// Requests a new check to be printed and mailed.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn create_check(&self, check: &NewCheck) -> Result<Check, RequestError<Check>> {
        self.post("checks/", &encode(check)).await
    }

    /// Retrieves a check by id.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn get_check(&self, id: &str) -> Result<Check, RequestError<Check>> {
        self.get(&format!("checks/{id}"), &[]).await
    }

    /// Cancels a check whose send date has not yet passed.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn cancel_check(&self, id: &str) -> Result<Cancellation, RequestError<Cancellation>> {
        self.delete(&format!("checks/{id}")).await
    }

    /// Lists checks, paginated, newest first.
    ///
    /// A non-positive `count` falls back to the default page size; a
    /// negative `offset` is treated as zero.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn list_checks(
        &self,
        count: i64,
        offset: i64,
    ) -> Result<ListResponse<Check>, RequestError<ListResponse<Check>>> {
        let (count, offset) = page_bounds(count, offset);
        self.get(
            "checks",
            &[
                ("limit", count.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }
}
