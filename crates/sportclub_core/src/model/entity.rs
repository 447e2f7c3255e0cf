//! Entity families and their backing file names.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One persisted record family. Each family maps to exactly one text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Member,
    Attendance,
    Coach,
    Schedule,
}

impl EntityKind {
    /// All families in load/save order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Member,
        EntityKind::Attendance,
        EntityKind::Coach,
        EntityKind::Schedule,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Member => "members.txt",
            Self::Attendance => "attendance.txt",
            Self::Coach => "coaches.txt",
            Self::Schedule => "schedule.txt",
        }
    }

    /// Stable short label used in log events and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Attendance => "attendance",
            Self::Coach => "coach",
            Self::Schedule => "schedule",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
