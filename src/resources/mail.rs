//! Shared mail vocabulary: mail types and shipment tracking.

use serde::Deserialize;

/// USPS standard (bulk) mail.
pub const MAIL_TYPE_USPS_STANDARD: &str = "usps_standard";
/// USPS first class mail.
pub const MAIL_TYPE_USPS_FIRST_CLASS: &str = "usps_first_class";
/// UPS next day air.
pub const MAIL_TYPE_UPS_NEXT_DAY_AIR: &str = "ups_next_day_air";

/// Shipment tracking attached to a mailed piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tracking {
    pub id: String,
    pub carrier: String,
    pub tracking_number: String,
    pub events: Vec<TrackingEvent>,
    pub link: Option<String>,
    /// Resource kind, always `"tracking"`.
    pub object: String,
}

/// One carrier scan event.
///
/// `kind` is `"certified"` for certified mail (which also populates
/// `details`) or `"normal"` for everything else. `name` is the carrier's
/// event label, e.g. `"Mailed"`, `"In Transit"`, `"Delivered"`,
/// `"Returned to Sender"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub details: Option<TrackingEventDetails>,
    pub location: Option<String>,
    pub time: String,
    pub date_created: String,
    pub date_modified: String,
    /// Resource kind, always `"tracking_event"`.
    pub object: String,
}

/// Extra detail present on certified-mail events only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackingEventDetails {
    pub event: String,
    pub description: String,
    pub notes: String,
    pub action_required: bool,
}
