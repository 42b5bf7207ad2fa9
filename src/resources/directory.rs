//! Reference directories: states and countries the service recognizes.

use serde::Deserialize;

use super::ErrorPayload;
use crate::client::{Client, RequestError};
use crate::transport::HttpClient;

/// A named entry in a reference directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedObject {
    pub id: String,
    pub name: String,
    /// Abbreviation, e.g. `"OR"` or `"US"`.
    pub short_name: String,
    pub object: String,
}

/// A full reference directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedObjectList {
    pub object: String,
    pub data: Vec<NamedObject>,
    /// Embedded error detail on failed calls.
    pub error: Option<ErrorPayload>,
}

impl<H: HttpClient> Client<H> {
    /// Returns the US states the service recognizes.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn states(&self) -> Result<NamedObjectList, RequestError<NamedObjectList>> {
        self.get("states/", &[]).await
    }

    /// Returns the countries the service recognizes.
    ///
    /// # Errors
    ///
    /// See [`RequestError`].
    pub async fn countries(&self) -> Result<NamedObjectList, RequestError<NamedObjectList>> {
        self.get("countries/", &[]).await
    }
}
