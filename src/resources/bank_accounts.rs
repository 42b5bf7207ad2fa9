//! Bank accounts that checks draw on.

use serde::Deserialize;

use super::{Address, ErrorPayload, ListResponse, page_bounds};
use crate::client::{Client, RequestError};
use crate::form::{FieldValue, FormEncode, encode};
use crate::transport::HttpClient;

/// A bank account registered with the Inkpost system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    /// Identifier assigned by the service (`bank_` prefix).
    pub id: String,
    pub account_address: Option<Address>,
    pub account_number: String,
    pub bank_address: Option<Address>,
    pub bank_code: String,
    pub routing_number: String,
    pub signatory: String,
    pub date_created: String,
    pub date_modified: String,
    /// Resource kind, always `"bank_account"`.
    pub object: String,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

/// Parameters for registering a bank account.
#[derive(Debug, Clone, Default)]
pub struct NewBankAccount {
    pub routing_number: String,
    pub account_number: String,
    /// Id of a previously created address for the bank's location.
    pub bank_address_id: String,
    /// Id of a previously created address for the account holder.
    pub account_address_id: String,
    /// Name printed on the signature line.
    pub signatory: String,
}

impl FormEncode for NewBankAccount {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            (
                "routing_number",
                FieldValue::Text(self.routing_number.clone()),
            ),
            (
                "account_number",
                FieldValue::Text(self.account_number.clone()),
            ),
            ("bank_address", FieldValue::Text(self.bank_address_id.clone())),
            (
                "account_address",
                FieldValue::Text(self.account_address_id.clone()),
            ),
            ("signatory", FieldValue::Text(self.signatory.clone())),
        ]
    }
}

impl<H: HttpClient> Client<H> {
    /// Registers a bank account.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn create_bank_account(
        &self,
        account: &NewBankAccount,
    ) -> Result<BankAccount, RequestError<BankAccount>> {
        self.post("bank_accounts/", &encode(account)).await
    }

    /// Retrieves a bank account by id.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn get_bank_account(&self, id: &str) -> Result<BankAccount, RequestError<BankAccount>> {
        self.get(&format!("bank_accounts/{id}"), &[]).await
    }

    /// Lists bank accounts, paginated, newest first.
    ///
    /// A non-positive `count` falls back to the default page size; a
    /// negative `offset` is treated as zero.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn list_bank_accounts(
        &self,
        count: i64,
        offset: i64,
    ) -> Result<ListResponse<BankAccount>, RequestError<ListResponse<BankAccount>>> {
        let (count, offset) = page_bounds(count, offset);
        self.get(
            "bank_accounts",
            &[
                ("count", count.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }
}
