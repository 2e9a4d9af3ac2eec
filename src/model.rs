use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLabel {
    Confirmed,
    Waiting,
    Cancelled,
    Rac,
}

impl StatusLabel {
    /// Maps a current berth/status code to its label. Rules are checked in
    /// order and the first match wins; `None` means the code is not
    /// recognised.
    pub fn classify(code: &str) -> Option<Self> {
        if code.starts_with('B') || code.starts_with('S') {
            Some(Self::Confirmed)
        } else if code.starts_with("WL") {
            Some(Self::Waiting)
        } else if code == "CAN" {
            Some(Self::Cancelled)
        } else if code.starts_with("RAC") {
            Some(Self::Rac)
        } else {
            tracing::trace!(code, "unclassified status code");
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Waiting => "WAITING",
            Self::Cancelled => "CANCELLED",
            Self::Rac => "RAC",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
