use chrono::NaiveDate;
use sportclub_core::{
    ClubRepository, ClubService, EntityKind, MemoryBackend, NewAttendance, NewCoach, NewMember,
    NewScheduleItem, RecordId, RepoError, ScheduleFilter, Statistics, ValidationError,
};

#[test]
fn member_with_empty_email_is_accepted_and_blank_name_rejected() {
    let mut service = service();

    let id = service
        .add_member(&NewMember {
            full_name: "  Jane Doe ".to_string(),
            phone: "555-0100".to_string(),
            email: String::new(),
        })
        .unwrap();
    let stored = service.repo().member(id).unwrap();
    assert_eq!(stored.full_name, "Jane Doe");
    assert_eq!(stored.email, "");

    let err = service
        .add_member(&NewMember {
            full_name: "   ".to_string(),
            ..NewMember::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyFullName)
    ));
    assert_eq!(service.repo().members().len(), 1);
}

#[test]
fn coach_experience_text_is_coerced() {
    let mut service = service();
    let id = service
        .add_coach(&NewCoach {
            full_name: "Ivan Petrov".to_string(),
            specialization: "Boxing".to_string(),
            experience: "a decade".to_string(),
            ..NewCoach::default()
        })
        .unwrap();
    assert_eq!(service.repo().coach(id).unwrap().experience, 0);
}

#[test]
fn coach_email_is_free_text() {
    let mut service = service();
    let id = service
        .add_coach(&NewCoach {
            full_name: "Ivan".to_string(),
            email: "none".to_string(),
            ..NewCoach::default()
        })
        .unwrap();
    assert_eq!(service.repo().coach(id).unwrap().email, "none");
}

#[test]
fn second_booking_of_same_coach_slot_is_rejected() {
    let mut service = service();
    let coach_id = ivan(&mut service);
    let request = NewScheduleItem {
        day_of_week: "Monday".to_string(),
        time: "18:00".to_string(),
        coach_id,
        group_name: String::new(),
        duration: String::new(),
    };

    let first = service.add_schedule_item(&request).unwrap();
    let err = service.add_schedule_item(&request).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::CoachDoubleBooked { .. })
    ));
    assert_eq!(service.repo().schedule_items().len(), 1);
    let item = service.repo().schedule_item(first).unwrap();
    assert_eq!(item.coach_name, "Ivan Petrov");
    assert_eq!(item.group_name, "General group");
    assert_eq!(item.duration, "1.5 hours");
}

#[test]
fn schedule_request_requires_day_time_and_coach() {
    let mut service = service();
    let coach_id = ivan(&mut service);

    let missing_time = NewScheduleItem {
        day_of_week: "Monday".to_string(),
        time: " ".to_string(),
        coach_id,
        group_name: String::new(),
        duration: String::new(),
    };
    assert!(matches!(
        service.add_schedule_item(&missing_time),
        Err(RepoError::Validation(ValidationError::EmptyTime))
    ));

    let no_coach = NewScheduleItem {
        time: "18:00".to_string(),
        coach_id: RecordId::nil(),
        ..missing_time.clone()
    };
    assert!(matches!(
        service.add_schedule_item(&no_coach),
        Err(RepoError::Validation(ValidationError::MissingCoach))
    ));

    let unknown_coach = NewScheduleItem {
        coach_id: RecordId::new(),
        ..no_coach
    };
    assert!(matches!(
        service.add_schedule_item(&unknown_coach),
        Err(RepoError::Validation(ValidationError::UnknownCoach(_)))
    ));
    assert!(service.repo().schedule_items().is_empty());
}

#[test]
fn marking_attendance_snapshots_member_name_and_defaults_status() {
    let mut service = service();
    let member_id = service
        .add_member(&NewMember {
            full_name: "Jane Doe".to_string(),
            ..NewMember::default()
        })
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    service
        .mark_attendance(&NewAttendance {
            member_id,
            date,
            status: String::new(),
        })
        .unwrap();

    let view = service.attendance_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].member_name, "Jane Doe");
    assert_eq!(view[0].status, "Present");
    assert!(matches!(
        service.statistics_on(date),
        Statistics::Counts(counts) if counts.attendance_today == 1
    ));
}

#[test]
fn removing_coach_through_service_cascades_and_persists() {
    let mut service = service();
    let coach_id = ivan(&mut service);
    for day in ["Monday", "Thursday"] {
        service
            .add_schedule_item(&NewScheduleItem {
                day_of_week: day.to_string(),
                time: "18:00".to_string(),
                coach_id,
                group_name: "Juniors".to_string(),
                duration: String::new(),
            })
            .unwrap();
    }

    assert_eq!(service.remove_coach(coach_id).unwrap(), 2);
    assert!(service.schedule_view(&ScheduleFilter::All).is_empty());
    let repo = service.into_repo();
    assert!(repo.backend().lines(EntityKind::Schedule).unwrap().is_empty());
    assert!(repo.backend().lines(EntityKind::Coach).unwrap().is_empty());
}

#[test]
fn statistics_without_members_is_no_data() {
    let service = service();
    assert_eq!(service.statistics(), Statistics::NoData);
}

fn service() -> ClubService<MemoryBackend> {
    ClubService::new(ClubRepository::in_memory())
}

fn ivan(service: &mut ClubService<MemoryBackend>) -> RecordId {
    service
        .add_coach(&NewCoach {
            full_name: "Ivan Petrov".to_string(),
            specialization: "Boxing".to_string(),
            experience: "12".to_string(),
            ..NewCoach::default()
        })
        .unwrap()
}
