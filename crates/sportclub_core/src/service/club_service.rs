//! Controller-facing club service.
//!
//! # Responsibility
//! - Accept structured form input (`New*` requests) from the UI layer.
//! - Normalize input (trim, defaults, experience coercion) and snapshot
//!   denormalized names before delegating to the repository.
//! - Expose load/save and projection entry points in one place.
//!
//! # Invariants
//! - Every mutation goes through `ClubRepository` validation and persistence.
//! - Name snapshots are taken once, at creation. Later renames do not
//!   propagate into existing schedule or attendance records.

use crate::model::attendance::{AttendanceRecord, DEFAULT_ATTENDANCE_STATUS};
use crate::model::coach::{parse_experience, Coach};
use crate::model::entity::EntityKind;
use crate::model::id::{CoachId, MemberId, RecordId, ScheduleItemId};
use crate::model::member::Member;
use crate::model::schedule::{ScheduleItem, DEFAULT_DURATION, DEFAULT_GROUP_NAME};
use crate::model::validation::ValidationError;
use crate::repo::backend::StoreBackend;
use crate::repo::club_repo::ClubRepository;
use crate::repo::{LoadReport, LoadSummary, RepoError, RepoResult};
use crate::service::projection::{self, ScheduleFilter, Statistics};
use chrono::{Local, NaiveDate};

/// Form input for a new member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMember {
    pub full_name: String,
    pub phone: String,
    /// Optional; must contain `@` when present.
    pub email: String,
}

/// Form input for a new coach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCoach {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub specialization: String,
    /// Free text; non-numeric input counts as 0 years.
    pub experience: String,
}

/// Form input for a new weekly class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleItem {
    pub day_of_week: String,
    pub time: String,
    pub coach_id: CoachId,
    /// Blank means `General group`.
    pub group_name: String,
    /// Blank means `1.5 hours`.
    pub duration: String,
}

/// Form input for marking attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub member_id: MemberId,
    pub date: NaiveDate,
    /// Blank means `Present`.
    pub status: String,
}

/// Use-case facade over a `ClubRepository`.
pub struct ClubService<B: StoreBackend> {
    repo: ClubRepository<B>,
}

impl<B: StoreBackend> ClubService<B> {
    pub fn new(repo: ClubRepository<B>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &ClubRepository<B> {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut ClubRepository<B> {
        &mut self.repo
    }

    pub fn into_repo(self) -> ClubRepository<B> {
        self.repo
    }

    pub fn load_all(&mut self) -> LoadSummary {
        self.repo.load_all()
    }

    pub fn load(&mut self, kind: EntityKind) -> RepoResult<LoadReport> {
        self.repo.load(kind)
    }

    pub fn save_all(&mut self) -> RepoResult<()> {
        self.repo.save_all()
    }

    pub fn add_member(&mut self, input: &NewMember) -> RepoResult<MemberId> {
        self.repo.add_member(Member::new(
            input.full_name.trim(),
            input.phone.trim(),
            input.email.trim(),
        ))
    }

    /// Removes a member; returns how many attendance records went with it.
    pub fn remove_member(&mut self, id: MemberId) -> RepoResult<usize> {
        self.repo.remove_member(id)
    }

    pub fn add_coach(&mut self, input: &NewCoach) -> RepoResult<CoachId> {
        self.repo.add_coach(Coach::new(
            input.full_name.trim(),
            input.phone.trim(),
            input.email.trim(),
            input.specialization.trim(),
            parse_experience(&input.experience),
        ))
    }

    /// Removes a coach; returns how many schedule items went with it.
    pub fn remove_coach(&mut self, id: CoachId) -> RepoResult<usize> {
        self.repo.remove_coach(id)
    }

    /// Schedules a class, snapshotting the coach's current name.
    pub fn add_schedule_item(&mut self, input: &NewScheduleItem) -> RepoResult<ScheduleItemId> {
        let coach_name = match self.repo.coach(input.coach_id) {
            Some(coach) => coach.full_name.clone(),
            None if input.coach_id.is_nil() => String::new(),
            None => {
                return Err(RepoError::Validation(ValidationError::UnknownCoach(
                    input.coach_id,
                )))
            }
        };
        let item = ScheduleItem {
            id: RecordId::new(),
            day_of_week: input.day_of_week.trim().to_string(),
            time: input.time.trim().to_string(),
            coach_id: input.coach_id,
            coach_name,
            group_name: or_default(&input.group_name, DEFAULT_GROUP_NAME),
            duration: or_default(&input.duration, DEFAULT_DURATION),
        };
        self.repo.add_schedule_item(item)
    }

    pub fn remove_schedule_item(&mut self, id: ScheduleItemId) -> RepoResult<()> {
        self.repo.remove_schedule_item(id)
    }

    /// Marks attendance, snapshotting the member's current name.
    pub fn mark_attendance(&mut self, input: &NewAttendance) -> RepoResult<()> {
        let member_name = self
            .repo
            .member(input.member_id)
            .map(|member| member.full_name.clone())
            .ok_or(RepoError::Validation(ValidationError::UnknownMember(
                input.member_id,
            )))?;
        self.repo.mark_attendance(AttendanceRecord {
            member_id: input.member_id,
            member_name,
            date: input.date,
            status: or_default(&input.status, DEFAULT_ATTENDANCE_STATUS),
        })
    }

    pub fn remove_attendance(&mut self, member_id: MemberId, date: NaiveDate) -> RepoResult<()> {
        self.repo.remove_attendance(member_id, date)
    }

    pub fn schedule_view(&self, filter: &ScheduleFilter) -> Vec<&ScheduleItem> {
        projection::schedule_view(&self.repo, filter)
    }

    pub fn attendance_view(&self) -> Vec<&AttendanceRecord> {
        projection::attendance_view(&self.repo)
    }

    /// Statistics for the local calendar date.
    pub fn statistics(&self) -> Statistics {
        self.statistics_on(Local::now().date_naive())
    }

    pub fn statistics_on(&self, today: NaiveDate) -> Statistics {
        projection::statistics(&self.repo, today)
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
