//! Addresses stored in the Inkpost system.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ErrorPayload, ListResponse, page_bounds};
use crate::client::{Client, RequestError};
use crate::form::{FieldValue, FormEncode, encode};
use crate::transport::HttpClient;

/// An address stored in the Inkpost system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Identifier assigned by the service (`adr_` prefix).
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
    pub date_created: String,
    pub date_modified: String,
    /// Resource kind, always `"address"`.
    pub object: String,
    pub deleted: bool,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// Parameters for creating (or verifying) an address.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
    /// Internal description, never printed on mail.
    pub description: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl FormEncode for NewAddress {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("email", FieldValue::Text(self.email.clone())),
            ("phone", FieldValue::Text(self.phone.clone())),
            ("address_line1", FieldValue::Text(self.address_line1.clone())),
            ("address_line2", FieldValue::Text(self.address_line2.clone())),
            ("address_city", FieldValue::Text(self.address_city.clone())),
            ("address_state", FieldValue::Text(self.address_state.clone())),
            ("address_zip", FieldValue::Text(self.address_zip.clone())),
            (
                "address_country",
                FieldValue::Text(self.address_country.clone()),
            ),
            ("description", FieldValue::OptText(self.description.clone())),
            ("metadata", FieldValue::Map(self.metadata.clone())),
        ]
    }
}

/// Acknowledgement returned when deleting an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeletionMessage {
    /// Human-readable confirmation from the service.
    pub message: String,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// Result of verifying an address against the postal database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressVerification {
    /// The cleaned-up address, when verification found a match.
    pub address: Address,
    /// Per-field verification failures.
    pub errors: Vec<ErrorPayload>,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

impl<H: HttpClient> Client<H> {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// See [`RequestError`]; validation failures arrive as a non-success
    /// status with the embedded error decoded.
    pub async fn create_address(
        &self,
        address: &NewAddress,
    ) -> Result<Address, RequestError<Address>> {
        self.post("addresses", &encode(address)).await
    }

    /// Retrieves an address by id.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn get_address(&self, id: &str) -> Result<Address, RequestError<Address>> {
        self.get(&format!("addresses/{id}"), &[]).await
    }

    /// Deletes an address.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn delete_address(
        &self,
        id: &str,
    ) -> Result<DeletionMessage, RequestError<DeletionMessage>> {
        self.delete(&format!("addresses/{id}")).await
    }

    /// Lists addresses, paginated, newest first.
    ///
    /// A non-positive `count` falls back to the default page size; a
    /// negative `offset` is treated as zero.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn list_addresses(
        &self,
        count: i64,
        offset: i64,
    ) -> Result<ListResponse<Address>, RequestError<ListResponse<Address>>> {
        let (count, offset) = page_bounds(count, offset);
        self.get(
            "addresses/",
            &[
                ("count", count.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Verifies an address and returns the cleaned-up form.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn verify_address(
        &self,
        address: &NewAddress,
    ) -> Result<AddressVerification, RequestError<AddressVerification>> {
        // Only the location fields participate in verification.
        let subset = NewAddress {
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone(),
            address_city: address.address_city.clone(),
            address_state: address.address_state.clone(),
            address_zip: address.address_zip.clone(),
            address_country: address.address_country.clone(),
            ..NewAddress::default()
        };
        self.post("verify", &encode(&subset)).await
    }
}
