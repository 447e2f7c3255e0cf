//! Attendance record.

use crate::model::id::MemberId;
use crate::model::member::Member;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTENDANCE_STATUS: &str = "Present";

/// One member's attendance on one date.
///
/// Has no id of its own; `(member_id, date)` identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub member_id: MemberId,
    /// Snapshot of the member name when the record was taken.
    pub member_name: String,
    pub date: NaiveDate,
    pub status: String,
}

impl AttendanceRecord {
    /// Records `member` as present on `date`.
    pub fn present(member: &Member, date: NaiveDate) -> Self {
        Self {
            member_id: member.id,
            member_name: member.full_name.clone(),
            date,
            status: DEFAULT_ATTENDANCE_STATUS.to_string(),
        }
    }

    pub fn is_for(&self, member_id: MemberId, date: NaiveDate) -> bool {
        self.member_id == member_id && self.date == date
    }
}
