use crate::model::StatusLabel;
use crate::types::{BookingRecord, PassengerRecord, PassengerReport, PnrReport, Summary, Train};
use crate::validate::is_valid_pnr;
use serde_json::Number;

/// Minimum width of the name column before the `(age/gender)` suffix.
pub const NAME_WIDTH: usize = 20;

/// Pads `name` with trailing spaces to `NAME_WIDTH` UTF-16 code units
/// (never truncates) and appends `(age/gender)` with no separator.
pub fn format_passenger_name(name: &str, age: Option<&Number>, gender: &str) -> String {
    let age = age.map(format_age).unwrap_or_default();
    let pad = NAME_WIDTH.saturating_sub(name.encode_utf16().count());
    format!("{name}{}({age}/{gender})", " ".repeat(pad))
}

/// Integral floats drop their fraction: `60.0` renders as `60`.
fn format_age(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_owned(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// `1234567890` -> `123-456-7890`, or `None` when `pnr` is not 10 digits.
pub fn format_pnr(pnr: &str) -> Option<String> {
    if !is_valid_pnr(pnr) {
        return None;
    }
    Some([pnr.get(..3)?, pnr.get(3..6)?, pnr.get(6..)?].join("-"))
}

pub fn format_train_info(train: &Train, class_booked: &str) -> String {
    format!(
        "Train: {} - {} | {} \u{2192} {} | Class: {}",
        train.number, train.name, train.from, train.to, class_booked
    )
}

pub fn passenger_report(p: &PassengerRecord) -> PassengerReport {
    let status_label = StatusLabel::classify(&p.current);
    PassengerReport {
        formatted_name: format_passenger_name(&p.name, p.age.as_ref(), &p.gender),
        booking_status: p.booking.clone(),
        current_status: p.current.clone(),
        status_label,
        is_confirmed: status_label == Some(StatusLabel::Confirmed),
    }
}

impl Summary {
    pub fn from_passengers(passengers: &[PassengerReport]) -> Self {
        let count = |label: StatusLabel| {
            passengers
                .iter()
                .filter(|p| p.status_label == Some(label))
                .count()
        };

        Self {
            total_passengers: passengers.len(),
            confirmed: count(StatusLabel::Confirmed),
            waiting: count(StatusLabel::Waiting),
            cancelled: count(StatusLabel::Cancelled),
            rac: count(StatusLabel::Rac),
            all_confirmed: passengers.iter().all(|p| p.is_confirmed),
            any_waiting: passengers
                .iter()
                .any(|p| p.status_label == Some(StatusLabel::Waiting)),
        }
    }

    /// Passengers that landed in one of the four labels.
    pub fn classified(&self) -> usize {
        self.confirmed + self.waiting + self.cancelled + self.rac
    }
}

/// True when every passenger that is not cancelled holds a confirmed
/// berth. Unclassified passengers count as not confirmed.
pub fn chart_prepared(passengers: &[PassengerReport]) -> bool {
    passengers
        .iter()
        .filter(|p| p.status_label != Some(StatusLabel::Cancelled))
        .all(|p| p.is_confirmed)
}

/// Builds the full report for a booking that already passed validation.
pub(crate) fn build_report(record: &BookingRecord) -> PnrReport {
    let passengers: Vec<PassengerReport> = record.passengers.iter().map(passenger_report).collect();
    let summary = Summary::from_passengers(&passengers);
    let chart_prepared = chart_prepared(&passengers);

    if summary.classified() < summary.total_passengers {
        tracing::debug!(
            pnr = %record.pnr,
            unclassified = summary.total_passengers - summary.classified(),
            "booking has passengers with unrecognised status codes"
        );
    }

    PnrReport {
        pnr_formatted: format_pnr(&record.pnr).unwrap_or_else(|| record.pnr.clone()),
        train_info: format_train_info(&record.train, &record.class_booked),
        passengers,
        summary,
        chart_prepared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn age(v: serde_json::Value) -> Number {
        match v {
            serde_json::Value::Number(n) => n,
            other => panic!("not a number: {other}"),
        }
    }

    fn passenger(name: &str, current: &str) -> PassengerRecord {
        PassengerRecord {
            name: name.into(),
            age: Some(Number::from(30)),
            gender: "F".into(),
            booking: "WL1".into(),
            current: current.into(),
        }
    }

    fn reports(codes: &[&str]) -> Vec<PassengerReport> {
        codes.iter().map(|c| passenger_report(&passenger("P", c))).collect()
    }

    #[test]
    fn name_is_padded_to_twenty() {
        let s = format_passenger_name("Amit", Some(&Number::from(60)), "M");
        assert_eq!(s, format!("Amit{}(60/M)", " ".repeat(16)));
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "Venkataraghavan Subramaniam";
        let s = format_passenger_name(name, Some(&Number::from(45)), "M");
        assert_eq!(s, format!("{name}(45/M)"));

        let exact = "A".repeat(20);
        let s = format_passenger_name(&exact, Some(&Number::from(1)), "F");
        assert_eq!(s, format!("{exact}(1/F)"));
    }

    #[test]
    fn padding_counts_utf16_units() {
        let s = format_passenger_name("Zoë", Some(&Number::from(9)), "F");
        assert_eq!(s, format!("Zoë{}(9/F)", " ".repeat(17)));

        // astral chars take two units each
        let s = format_passenger_name("Raj 🚂", Some(&Number::from(9)), "M");
        assert_eq!(s, format!("Raj 🚂{}(9/M)", " ".repeat(14)));
    }

    #[test]
    fn ages_render_like_plain_numbers() {
        let cases = [
            (json!(60.0), "60"),
            (json!(60.5), "60.5"),
            (json!(-1), "-1"),
            (json!(-0.0), "0"),
            (json!(28), "28"),
        ];
        for (v, want) in cases {
            let s = format_passenger_name("Amit", Some(&age(v)), "M");
            assert_eq!(s, format!("Amit{}({want}/M)", " ".repeat(16)));
        }
    }

    #[test]
    fn missing_age_renders_empty() {
        assert_eq!(format_passenger_name("X", None, "M"), format!("X{}(/M)", " ".repeat(19)));
    }

    #[test]
    fn pnr_is_grouped_3_3_4() {
        assert_eq!(format_pnr("1234567890").as_deref(), Some("123-456-7890"));
        assert_eq!(format_pnr("0000000001").as_deref(), Some("000-000-0001"));
    }

    #[test]
    fn malformed_pnr_does_not_format() {
        assert_eq!(format_pnr("12"), None);
        assert_eq!(format_pnr(""), None);
        assert_eq!(format_pnr("１２３"), None);
        assert_eq!(format_pnr("12345678901"), None);
    }

    #[test]
    fn train_info_line() {
        let train = Train {
            number: "12301".into(),
            name: "Rajdhani Express".into(),
            from: "NDLS".into(),
            to: "HWH".into(),
        };
        assert_eq!(
            format_train_info(&train, "3A"),
            "Train: 12301 - Rajdhani Express | NDLS → HWH | Class: 3A"
        );
    }

    #[test]
    fn passenger_report_copies_codes() {
        let r = passenger_report(&passenger("Priya", "B3"));
        assert_eq!(r.booking_status, "WL1");
        assert_eq!(r.current_status, "B3");
        assert_eq!(r.status_label, Some(StatusLabel::Confirmed));
        assert!(r.is_confirmed);
    }

    #[test]
    fn summary_counts() {
        let ps = reports(&["B1", "S2", "WL4", "CAN", "RAC3", "XX"]);
        let s = Summary::from_passengers(&ps);
        assert_eq!(s.total_passengers, 6);
        assert_eq!((s.confirmed, s.waiting, s.cancelled, s.rac), (2, 1, 1, 1));
        assert_eq!(s.classified(), 5);
        assert!(!s.all_confirmed);
        assert!(s.any_waiting);
    }

    #[test]
    fn chart_rules() {
        assert!(chart_prepared(&reports(&["B1", "S4"])));
        assert!(chart_prepared(&reports(&["B1", "CAN"])));
        assert!(chart_prepared(&reports(&["CAN", "CAN"])));
        assert!(!chart_prepared(&reports(&["B1", "WL2"])));
        assert!(!chart_prepared(&reports(&["RAC1", "CAN"])));
        assert!(!chart_prepared(&reports(&["B1", "??"])));
    }
}
