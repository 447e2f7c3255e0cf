//! Derived read-only views over the club repository.
//!
//! # Invariants
//! - Schedule views are ordered by week position (Monday=1 .. Sunday=7,
//!   unknown=8), then by time compared as text.
//! - Attendance views are newest first; equal dates keep store order.
//!
//! Time is compared lexically, so "9:00" sorts after "18:00". This matches
//! the persisted format and is kept as a known behavior.

use crate::model::attendance::AttendanceRecord;
use crate::model::id::CoachId;
use crate::model::schedule::ScheduleItem;
use crate::model::weekday::{canonical_label, day_order, same_day};
use crate::repo::backend::StoreBackend;
use crate::repo::club_repo::ClubRepository;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Narrows the schedule before ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleFilter {
    All,
    /// Items on the given day label.
    Day(String),
    /// Items run by one coach.
    Coach(CoachId),
    /// Items on the weekday of the given calendar date.
    Today(NaiveDate),
}

impl ScheduleFilter {
    pub fn matches(&self, item: &ScheduleItem) -> bool {
        match self {
            Self::All => true,
            Self::Day(label) => same_day(&item.day_of_week, label),
            Self::Coach(coach_id) => item.coach_id == *coach_id,
            Self::Today(date) => same_day(&item.day_of_week, canonical_label(date.weekday())),
        }
    }
}

/// Aggregate counts shown in the statistics bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClubCounts {
    pub members: usize,
    pub coaches: usize,
    pub schedule_items: usize,
    pub attendance_today: usize,
    pub attendance_total: usize,
}

/// Statistics projection. `NoData` while the club has no members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Statistics {
    NoData,
    Counts(ClubCounts),
}

impl Statistics {
    pub fn counts(&self) -> Option<&ClubCounts> {
        match self {
            Self::NoData => None,
            Self::Counts(counts) => Some(counts),
        }
    }

    /// One-line text for the status bar.
    pub fn summary(&self) -> String {
        match self {
            Self::NoData => "No data".to_string(),
            Self::Counts(counts) => format!(
                "Members: {} | Coaches: {} | Classes per week: {} | Visits today: {}",
                counts.members, counts.coaches, counts.schedule_items, counts.attendance_today
            ),
        }
    }
}

/// Sorted, optionally filtered schedule.
pub fn schedule_view<'a, B: StoreBackend>(
    repo: &'a ClubRepository<B>,
    filter: &ScheduleFilter,
) -> Vec<&'a ScheduleItem> {
    let mut items: Vec<&ScheduleItem> = repo
        .schedule_items()
        .iter()
        .filter(|item| filter.matches(item))
        .collect();
    // sort_by is stable, so equal slots keep store order.
    items.sort_by(|left, right| {
        day_order(&left.day_of_week)
            .cmp(&day_order(&right.day_of_week))
            .then_with(|| left.time.cmp(&right.time))
    });
    items
}

/// Attendance records, most recent date first.
pub fn attendance_view<B: StoreBackend>(repo: &ClubRepository<B>) -> Vec<&AttendanceRecord> {
    let mut records: Vec<&AttendanceRecord> = repo.attendance_records().iter().collect();
    records.sort_by(|left, right| right.date.cmp(&left.date));
    records
}

/// Club counts as of `today`.
pub fn statistics<B: StoreBackend>(repo: &ClubRepository<B>, today: NaiveDate) -> Statistics {
    if repo.members().is_empty() {
        return Statistics::NoData;
    }
    let attendance = repo.attendance_records();
    Statistics::Counts(ClubCounts {
        members: repo.members().len(),
        coaches: repo.coaches().len(),
        schedule_items: repo.schedule_items().len(),
        attendance_today: attendance
            .iter()
            .filter(|record| record.date == today)
            .count(),
        attendance_total: attendance.len(),
    })
}
