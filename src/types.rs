use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::model::StatusLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub pnr: String,
    pub train: Train,
    #[serde(default)]
    pub class_booked: String,
    pub passengers: Vec<PassengerRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub name: String,
    pub age: Option<Number>,
    pub gender: String,
    pub booking: String, // originally booked berth or WL code
    pub current: String, // drives classification
}

impl Train {
    /// Reads the train block without rejecting odd field types.
    pub fn from_value(v: &Value) -> Self {
        Self {
            number: text_field(v, "number"),
            name: text_field(v, "name"),
            from: text_field(v, "from"),
            to: text_field(v, "to"),
        }
    }
}

impl PassengerRecord {
    /// Lenient read of one passenger entry. Never fails: absent fields come
    /// back empty and a non-numeric age is dropped.
    pub fn from_value(v: &Value) -> Self {
        let age = match v.get("age") {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        };

        Self {
            name: text_field(v, "name"),
            age,
            gender: text_field(v, "gender"),
            booking: text_field(v, "booking"),
            current: text_field(v, "current"),
        }
    }
}

/// Strings pass through, null/missing become empty, other scalars are
/// rendered as their JSON text.
pub(crate) fn text_field(v: &Value, key: &str) -> String {
    match v.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerReport {
    pub formatted_name: String,
    pub booking_status: String,
    pub current_status: String,
    pub status_label: Option<StatusLabel>,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_passengers: usize,
    pub confirmed: usize,
    pub waiting: usize,
    pub cancelled: usize,
    pub rac: usize,
    pub all_confirmed: bool,
    pub any_waiting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrReport {
    pub pnr_formatted: String,
    pub train_info: String,
    pub passengers: Vec<PassengerReport>,
    pub summary: Summary,
    pub chart_prepared: bool,
}
