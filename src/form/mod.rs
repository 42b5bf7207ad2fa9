//! Type-directed form encoding.
//!
//! The Inkpost API accepts request bodies as flat
//! `application/x-www-form-urlencoded` key/value pairs rather than JSON.
//! This module turns a typed request record into that flat map: each record
//! type declares its wire fields once via [`FormEncode`], and [`encode`]
//! applies the per-kind presence rules uniformly.
//!
//! # Example
//!
//! ```
//! use inkpost::form::{encode, FieldValue, FormEncode};
//!
//! struct Payment {
//!     amount: f64,
//!     memo: String,
//! }
//!
//! impl FormEncode for Payment {
//!     fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
//!         vec![
//!             ("amount", FieldValue::Amount(self.amount)),
//!             ("memo", FieldValue::Text(self.memo.clone())),
//!         ]
//!     }
//! }
//!
//! let params = encode(&Payment { amount: 0.0, memo: String::new() });
//! // A zero amount is a real value and is kept; the empty memo is dropped.
//! assert_eq!(params.get("amount").map(String::as_str), Some("0.00"));
//! assert!(!params.contains_key("memo"));
//! ```

use std::collections::BTreeMap;

#[cfg(test)]
mod mod_tests;

/// A single field value awaiting flattening, tagged with its wire kind.
///
/// The enum is closed: a request struct can only carry field kinds the
/// wire format supports, so an unencodable field is a compile error
/// instead of silently dropped data.
///
/// Presence rules per kind:
///
/// | Kind      | Emitted when                                   |
/// |-----------|------------------------------------------------|
/// | `OptText` | value is `Some`, even if the string is empty   |
/// | `Text`    | string is non-empty                            |
/// | `Int`     | value is non-zero                              |
/// | `OptFlag` | value is `Some` (renders `"true"`/`"false"`)   |
/// | `Amount`  | always, formatted with exactly two decimals    |
/// | `List`    | non-empty, entries joined by a single space    |
/// | `Map`     | one `name[key]` pair per entry; empty map none |
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An optional string. `Some("")` is sent as an empty value;
    /// `None` is not sent at all.
    OptText(Option<String>),
    /// A plain string, omitted when empty.
    Text(String),
    /// An integer, omitted when zero. Zero is indistinguishable from
    /// absent for this kind; use `OptText` with a rendered number if a
    /// literal zero must be sent.
    Int(i64),
    /// An optional boolean flag. Absent flags send nothing; no `"false"`
    /// default is ever sent on the caller's behalf.
    OptFlag(Option<bool>),
    /// A monetary amount, always emitted as `{:.2}`. A `0.00` amount is a
    /// legitimate value and is never treated as absent.
    Amount(f64),
    /// A list of strings, space-joined, omitted when empty.
    List(Vec<String>),
    /// A string map expanded to `name[key] -> value` pairs.
    Map(BTreeMap<String, String>),
}

/// Capability of request records to describe their wire fields.
///
/// Implementations list every field once with its wire name and kind; the
/// presence rules live in [`encode`], not in the record. Order of the
/// returned pairs does not matter; the flattened output is sorted.
pub trait FormEncode {
    /// Returns the record's fields as `(wire name, tagged value)` pairs.
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)>;
}

impl<T: FormEncode + ?Sized> FormEncode for &T {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        (**self).form_fields()
    }
}

/// Flattens a record into form parameters.
///
/// Pure and total: any record expressible through [`FieldValue`] encodes
/// without error. The result is a `BTreeMap` so iteration order (and thus
/// serialized bodies) is stable across runs.
#[must_use]
pub fn encode<T: FormEncode + ?Sized>(record: &T) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    for (name, value) in record.form_fields() {
        match value {
            FieldValue::OptText(Some(v)) => {
                params.insert(name.to_owned(), v);
            }
            FieldValue::Text(v) => {
                if !v.is_empty() {
                    params.insert(name.to_owned(), v);
                }
            }
            FieldValue::Int(v) => {
                if v != 0 {
                    params.insert(name.to_owned(), v.to_string());
                }
            }
            FieldValue::OptFlag(Some(v)) => {
                params.insert(name.to_owned(), v.to_string());
            }
            FieldValue::Amount(v) => {
                params.insert(name.to_owned(), format!("{v:.2}"));
            }
            FieldValue::List(v) => {
                if !v.is_empty() {
                    params.insert(name.to_owned(), v.join(" "));
                }
            }
            FieldValue::Map(m) => {
                for (key, v) in m {
                    params.insert(format!("{name}[{key}]"), v);
                }
            }
            FieldValue::OptText(None) | FieldValue::OptFlag(None) => {}
        }
    }

    params
}
