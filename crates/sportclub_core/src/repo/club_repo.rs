//! Club repository over the four record stores.
//!
//! # Responsibility
//! - Load and save each entity family through a `StoreBackend`.
//! - Validate and apply add/remove mutations, persisting after each one.
//! - Cascade member and coach removal to dependent records.
//!
//! # Invariants
//! - Schedule items reference an existing coach when added; removing the
//!   coach removes exactly its schedule items.
//! - Attendance records reference an existing member when added; removing
//!   the member removes exactly its attendance records.
//! - A coach is never booked twice for the same day and time.
//! - Rejected mutations leave every store untouched.

use super::backend::{FileBackend, MemoryBackend, StoreBackend};
use super::store::RecordStore;
use super::{LoadReport, LoadSummary, RepoError, RepoResult};
use crate::codec::LineCodec;
use crate::model::attendance::{AttendanceRecord, DEFAULT_ATTENDANCE_STATUS};
use crate::model::coach::Coach;
use crate::model::entity::EntityKind;
use crate::model::id::{CoachId, MemberId, RecordId, ScheduleItemId};
use crate::model::member::Member;
use crate::model::schedule::ScheduleItem;
use crate::model::validation::ValidationError;
use chrono::NaiveDate;
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Owner of all club records. Construct once and pass to callers by handle.
pub struct ClubRepository<B: StoreBackend> {
    backend: B,
    members: RecordStore<Member>,
    attendance: RecordStore<AttendanceRecord>,
    coaches: RecordStore<Coach>,
    schedule: RecordStore<ScheduleItem>,
}

impl ClubRepository<FileBackend> {
    /// Repository over the text files in `dir`. Nothing is read until `load`.
    pub fn open_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(dir))
    }
}

impl ClubRepository<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: StoreBackend> ClubRepository<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            members: RecordStore::new(),
            attendance: RecordStore::new(),
            coaches: RecordStore::new(),
            schedule: RecordStore::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Reloads one family from its backing file.
    ///
    /// A missing file yields an empty store. Undecodable lines are skipped
    /// and listed in the report.
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read; the store is left empty.
    pub fn load(&mut self, kind: EntityKind) -> RepoResult<LoadReport> {
        match kind {
            EntityKind::Member => load_store(&self.backend, &mut self.members),
            EntityKind::Attendance => load_store(&self.backend, &mut self.attendance),
            EntityKind::Coach => load_store(&self.backend, &mut self.coaches),
            EntityKind::Schedule => load_store(&self.backend, &mut self.schedule),
        }
    }

    /// Reloads every family. One unreadable file does not stop the others.
    pub fn load_all(&mut self) -> LoadSummary {
        let mut summary = LoadSummary::default();
        for kind in EntityKind::ALL {
            match self.load(kind) {
                Ok(report) => summary.reports.push(report),
                Err(err) => summary.failures.push(err),
            }
        }
        summary
    }

    /// Rewrites one family's backing file from the store.
    ///
    /// # Errors
    /// - `Io` when the file cannot be written; in-memory state is unchanged.
    pub fn save(&mut self, kind: EntityKind) -> RepoResult<()> {
        match kind {
            EntityKind::Member => save_store(&mut self.backend, &self.members),
            EntityKind::Attendance => save_store(&mut self.backend, &self.attendance),
            EntityKind::Coach => save_store(&mut self.backend, &self.coaches),
            EntityKind::Schedule => save_store(&mut self.backend, &self.schedule),
        }
    }

    /// Rewrites every family, returning the first failure after trying all.
    pub fn save_all(&mut self) -> RepoResult<()> {
        let mut first_error = None;
        for kind in EntityKind::ALL {
            if let Err(err) = self.save(kind) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Adds a member and persists `members.txt`.
    ///
    /// A nil id is replaced with a fresh one. Returns the stored id.
    ///
    /// # Errors
    /// - `Validation` when the name is blank, the email is malformed, or the
    ///   id is already taken.
    /// - `Io` when persistence fails; the member stays in memory.
    pub fn add_member(&mut self, mut member: Member) -> RepoResult<MemberId> {
        let taken = self.member(member.id).is_some();
        reject_on_err(
            EntityKind::Member,
            member.validate().and(unique_id(member.id, taken)),
        )?;
        assign_id(&mut member.id);
        let id = member.id;
        self.members.push(member);
        info!("event=record_add module=repo entity=member status=ok id={id}");
        self.save(EntityKind::Member)?;
        Ok(id)
    }

    /// Removes a member and all of its attendance records.
    ///
    /// Returns the number of cascaded attendance records.
    pub fn remove_member(&mut self, id: MemberId) -> RepoResult<usize> {
        if self.members.retain(|member| member.id != id) == 0 {
            return Err(RepoError::NotFound(id));
        }
        let cascaded = self.attendance.retain(|record| record.member_id != id);
        info!(
            "event=record_remove module=repo entity=member status=ok id={id} cascaded={cascaded}"
        );
        let members = self.save(EntityKind::Member);
        let attendance = self.save(EntityKind::Attendance);
        members.and(attendance)?;
        Ok(cascaded)
    }

    /// Adds a coach and persists `coaches.txt`.
    pub fn add_coach(&mut self, mut coach: Coach) -> RepoResult<CoachId> {
        let taken = self.coach(coach.id).is_some();
        reject_on_err(
            EntityKind::Coach,
            coach.validate().and(unique_id(coach.id, taken)),
        )?;
        assign_id(&mut coach.id);
        let id = coach.id;
        self.coaches.push(coach);
        info!("event=record_add module=repo entity=coach status=ok id={id}");
        self.save(EntityKind::Coach)?;
        Ok(id)
    }

    /// Removes a coach and every schedule item it runs.
    ///
    /// Returns the number of cascaded schedule items.
    pub fn remove_coach(&mut self, id: CoachId) -> RepoResult<usize> {
        if self.coaches.retain(|coach| coach.id != id) == 0 {
            return Err(RepoError::NotFound(id));
        }
        let cascaded = self.schedule.retain(|item| item.coach_id != id);
        info!(
            "event=record_remove module=repo entity=coach status=ok id={id} cascaded={cascaded}"
        );
        let coaches = self.save(EntityKind::Coach);
        let schedule = self.save(EntityKind::Schedule);
        coaches.and(schedule)?;
        Ok(cascaded)
    }

    /// Adds a schedule item and persists `schedule.txt`.
    ///
    /// # Errors
    /// - `Validation` when day, time or coach is missing, the id is taken,
    ///   the coach does not exist, or the coach already has a class in that
    ///   slot.
    pub fn add_schedule_item(&mut self, mut item: ScheduleItem) -> RepoResult<ScheduleItemId> {
        reject_on_err(EntityKind::Schedule, self.check_schedule_item(&item))?;
        assign_id(&mut item.id);
        let id = item.id;
        self.schedule.push(item);
        info!("event=record_add module=repo entity=schedule status=ok id={id}");
        self.save(EntityKind::Schedule)?;
        Ok(id)
    }

    pub fn remove_schedule_item(&mut self, id: ScheduleItemId) -> RepoResult<()> {
        if self.schedule.retain(|item| item.id != id) == 0 {
            return Err(RepoError::NotFound(id));
        }
        info!("event=record_remove module=repo entity=schedule status=ok id={id}");
        self.save(EntityKind::Schedule)
    }

    /// Records attendance for an existing member and persists
    /// `attendance.txt`. A blank status becomes `Present`.
    ///
    /// # Errors
    /// - `Validation` when the member is unknown or already has a record for
    ///   the same date.
    pub fn mark_attendance(&mut self, mut record: AttendanceRecord) -> RepoResult<()> {
        reject_on_err(EntityKind::Attendance, self.check_attendance(&record))?;
        if record.status.trim().is_empty() {
            record.status = DEFAULT_ATTENDANCE_STATUS.to_string();
        }
        let member_id = record.member_id;
        self.attendance.push(record);
        info!("event=record_add module=repo entity=attendance status=ok member_id={member_id}");
        self.save(EntityKind::Attendance)
    }

    /// Removes the attendance record for `member_id` on `date`.
    pub fn remove_attendance(&mut self, member_id: MemberId, date: NaiveDate) -> RepoResult<()> {
        if self.attendance.retain(|record| !record.is_for(member_id, date)) == 0 {
            return Err(RepoError::NotFound(member_id));
        }
        info!(
            "event=record_remove module=repo entity=attendance status=ok member_id={member_id}"
        );
        self.save(EntityKind::Attendance)
    }

    pub fn members(&self) -> &[Member] {
        self.members.records()
    }

    pub fn coaches(&self) -> &[Coach] {
        self.coaches.records()
    }

    pub fn schedule_items(&self) -> &[ScheduleItem] {
        self.schedule.records()
    }

    pub fn attendance_records(&self) -> &[AttendanceRecord] {
        self.attendance.records()
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members().iter().find(|member| member.id == id)
    }

    pub fn coach(&self, id: CoachId) -> Option<&Coach> {
        self.coaches().iter().find(|coach| coach.id == id)
    }

    pub fn schedule_item(&self, id: ScheduleItemId) -> Option<&ScheduleItem> {
        self.schedule_items().iter().find(|item| item.id == id)
    }

    fn check_schedule_item(&self, item: &ScheduleItem) -> Result<(), ValidationError> {
        item.validate()?;
        unique_id(item.id, self.schedule_item(item.id).is_some())?;
        if self.coach(item.coach_id).is_none() {
            return Err(ValidationError::UnknownCoach(item.coach_id));
        }
        if self
            .schedule_items()
            .iter()
            .any(|existing| existing.conflicts_with(item))
        {
            return Err(ValidationError::CoachDoubleBooked {
                coach_id: item.coach_id,
                day: item.day_of_week.clone(),
                time: item.time.clone(),
            });
        }
        Ok(())
    }

    fn check_attendance(&self, record: &AttendanceRecord) -> Result<(), ValidationError> {
        if self.member(record.member_id).is_none() {
            return Err(ValidationError::UnknownMember(record.member_id));
        }
        if self
            .attendance_records()
            .iter()
            .any(|existing| existing.is_for(record.member_id, record.date))
        {
            return Err(ValidationError::DuplicateAttendance {
                member_id: record.member_id,
                date: record.date,
            });
        }
        Ok(())
    }
}

/// Rejects a caller-supplied id already present in the family's store.
///
/// A nil id is never taken; it is replaced by `assign_id`.
fn unique_id(id: RecordId, taken: bool) -> Result<(), ValidationError> {
    if taken && !id.is_nil() {
        return Err(ValidationError::DuplicateId(id));
    }
    Ok(())
}

fn assign_id(id: &mut RecordId) {
    if id.is_nil() {
        *id = RecordId::new();
    }
}

fn reject_on_err(entity: EntityKind, result: Result<(), ValidationError>) -> RepoResult<()> {
    result.map_err(|err| {
        warn!(
            "event=record_add module=repo entity={entity} status=rejected reason={}",
            err.code()
        );
        RepoError::Validation(err)
    })
}

fn load_store<B: StoreBackend, T: LineCodec>(
    backend: &B,
    store: &mut RecordStore<T>,
) -> RepoResult<LoadReport> {
    let started_at = Instant::now();
    store.clear();

    let lines = match backend.read_lines(T::KIND) {
        Ok(Some(lines)) => lines,
        Ok(None) => {
            info!(
                "event=store_load module=repo entity={} status=missing loaded=0",
                T::KIND
            );
            return Ok(LoadReport::empty(T::KIND));
        }
        Err(err) => {
            error!(
                "event=store_load module=repo entity={} status=error duration_ms={} error={}",
                T::KIND,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(RepoError::Io {
                entity: T::KIND,
                source: err,
            });
        }
    };

    let skipped = store.replace_from_lines(&lines);
    for failure in &skipped {
        warn!(
            "event=store_load_skip module=repo entity={} line={} reason={}",
            T::KIND,
            failure.line_number,
            failure.error.code()
        );
    }
    info!(
        "event=store_load module=repo entity={} status=ok loaded={} skipped={} duration_ms={}",
        T::KIND,
        store.len(),
        skipped.len(),
        started_at.elapsed().as_millis()
    );

    Ok(LoadReport {
        entity: T::KIND,
        loaded: store.len(),
        skipped,
    })
}

fn save_store<B: StoreBackend, T: LineCodec>(
    backend: &mut B,
    store: &RecordStore<T>,
) -> RepoResult<()> {
    let started_at = Instant::now();
    match backend.write_lines(T::KIND, &store.encode_lines()) {
        Ok(()) => {
            info!(
                "event=store_save module=repo entity={} status=ok records={} duration_ms={}",
                T::KIND,
                store.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=repo entity={} status=error duration_ms={} error={}",
                T::KIND,
                started_at.elapsed().as_millis(),
                err
            );
            Err(RepoError::Io {
                entity: T::KIND,
                source: err,
            })
        }
    }
}
