use crate::types::PnrReport;
use std::fmt;

/// Plain-text status sheet for terminals.
pub struct StatusSheet<'a>(pub &'a PnrReport);

impl fmt::Display for StatusSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "PNR {}", report.pnr_formatted)?;
        writeln!(f, "{}", report.train_info)?;
        for p in &report.passengers {
            let label = p.status_label.map(|l| l.as_str()).unwrap_or("-");
            writeln!(
                f,
                "  {}  {} -> {}  {}",
                p.formatted_name, p.booking_status, p.current_status, label
            )?;
        }
        let s = &report.summary;
        writeln!(
            f,
            "Chart: {}  confirmed={} waiting={} cancelled={} rac={} total={}",
            if report.chart_prepared { "PREPARED" } else { "NOT PREPARED" },
            s.confirmed,
            s.waiting,
            s.cancelled,
            s.rac,
            s.total_passengers
        )
    }
}

pub fn status_sheet(report: &PnrReport) -> String {
    StatusSheet(report).to_string()
}
