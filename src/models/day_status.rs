use serde::{Deserialize, Serialize};
use std::fmt;

/// Approval status of a day sheet.
///
/// The server reports it by name on day records and expects the numeric
/// code on status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    Posted,
    Submitted,
    Accepted,
    Rejected,
}

impl DayStatus {
    /// Numeric code used by `PUT /api/Sheet/updatestatus`.
    pub fn code(&self) -> u8 {
        match self {
            DayStatus::Posted => 0,
            DayStatus::Submitted => 1,
            DayStatus::Accepted => 2,
            DayStatus::Rejected => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DayStatus::Posted),
            1 => Some(DayStatus::Submitted),
            2 => Some(DayStatus::Accepted),
            3 => Some(DayStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Posted => "Posted",
            DayStatus::Submitted => "Submitted",
            DayStatus::Accepted => "Accepted",
            DayStatus::Rejected => "Rejected",
        }
    }

    /// Whether the employee may still change the day's entries.
    /// Rejected days go back to the employee for re-edit.
    pub fn is_editable(&self) -> bool {
        matches!(self, DayStatus::Posted | DayStatus::Rejected)
    }

    /// Whether the employee may send the day to the manager.
    pub fn is_sendable(&self) -> bool {
        self.is_editable()
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_wire_protocol() {
        assert_eq!(DayStatus::Posted.code(), 0);
        assert_eq!(DayStatus::Submitted.code(), 1);
        assert_eq!(DayStatus::Accepted.code(), 2);
        assert_eq!(DayStatus::Rejected.code(), 3);
        assert_eq!(DayStatus::from_code(4), None);
    }

    #[test]
    fn only_posted_and_rejected_are_editable() {
        assert!(DayStatus::Posted.is_editable());
        assert!(DayStatus::Rejected.is_editable());
        assert!(!DayStatus::Submitted.is_editable());
        assert!(!DayStatus::Accepted.is_editable());
    }

    #[test]
    fn deserializes_from_status_name() {
        let s: DayStatus = serde_json::from_str("\"Accepted\"").unwrap();
        assert_eq!(s, DayStatus::Accepted);
    }
}
