use crate::errors::ValidationError;
use crate::types::{text_field, BookingRecord, PassengerRecord, Train};
use serde_json::Value;

pub const PNR_LEN: usize = 10;

pub fn is_valid_pnr(pnr: &str) -> bool {
    pnr.len() == PNR_LEN && pnr.bytes().all(|b| b.is_ascii_digit())
}

/// Structural checks on a raw booking, in order, stopping at the first
/// failure. Passenger entries are taken as-is (see `PassengerRecord::from_value`).
pub fn validate_booking(raw: &Value) -> Result<BookingRecord, ValidationError> {
    let obj = raw.as_object().ok_or(ValidationError::NotAnObject)?;

    let pnr = match obj.get("pnr") {
        Some(Value::String(s)) if is_valid_pnr(s) => s.clone(),
        Some(Value::String(s)) => return Err(ValidationError::InvalidPnr(s.clone())),
        Some(other) => return Err(ValidationError::InvalidPnr(other.to_string())),
        None => return Err(ValidationError::InvalidPnr(String::new())),
    };

    let train = match obj.get("train") {
        None => return Err(ValidationError::MissingTrain),
        Some(t) if t.is_object() => Train::from_value(t),
        Some(_) => return Err(ValidationError::TrainNotAnObject),
    };

    let passengers = match obj.get("passengers") {
        None => return Err(ValidationError::MissingPassengers),
        Some(Value::Array(list)) if list.is_empty() => return Err(ValidationError::NoPassengers),
        Some(Value::Array(list)) => list.iter().map(PassengerRecord::from_value).collect(),
        Some(_) => return Err(ValidationError::PassengersNotAnArray),
    };

    Ok(BookingRecord {
        pnr,
        train,
        class_booked: text_field(raw, "classBooked"),
        passengers,
    })
}

/// Same checks for a record that was already deserialized into its typed form.
pub fn validate_record(record: &BookingRecord) -> Result<(), ValidationError> {
    if !is_valid_pnr(&record.pnr) {
        return Err(ValidationError::InvalidPnr(record.pnr.clone()));
    }
    if record.passengers.is_empty() {
        return Err(ValidationError::NoPassengers);
    }
    Ok(())
}
