//! Core domain logic for the sports club manager.
//! This crate is the single source of truth for club records and their
//! invariants; UI layers call into it and render its projections.

pub mod codec;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::{DecodeError, LineCodec, ParseFailure, FIELD_DELIMITER};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::attendance::{AttendanceRecord, DEFAULT_ATTENDANCE_STATUS};
pub use model::coach::Coach;
pub use model::entity::EntityKind;
pub use model::id::{CoachId, MemberId, RecordId, ScheduleItemId};
pub use model::member::Member;
pub use model::schedule::{ScheduleItem, DEFAULT_DURATION, DEFAULT_GROUP_NAME};
pub use model::validation::ValidationError;
pub use model::weekday::{day_order, UNKNOWN_DAY_ORDER};
pub use repo::backend::{FileBackend, MemoryBackend, StoreBackend};
pub use repo::club_repo::ClubRepository;
pub use repo::store::RecordStore;
pub use repo::{LoadReport, LoadSummary, RepoError, RepoResult};
pub use service::club_service::{
    ClubService, NewAttendance, NewCoach, NewMember, NewScheduleItem,
};
pub use service::projection::{
    attendance_view, schedule_view, statistics, ClubCounts, ScheduleFilter, Statistics,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
