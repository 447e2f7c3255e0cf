use chrono::NaiveDate;
use sportclub_core::{
    AttendanceRecord, Coach, DecodeError, LineCodec, Member, RecordId, ScheduleItem,
};

const MEMBER_ID: &str = "11111111-2222-4333-8444-555555555555";
const COACH_ID: &str = "22222222-2222-4333-8444-555555555555";
const ITEM_ID: &str = "33333333-2222-4333-8444-555555555555";

#[test]
fn member_line_uses_fixed_field_order() {
    let member = Member::with_id(id(MEMBER_ID), "Jane Doe", "555-0100", "jane@club.io");

    assert_eq!(
        member.encode_line(),
        format!("{MEMBER_ID}|Jane Doe|555-0100|jane@club.io")
    );
    assert_eq!(Member::decode_line(&member.encode_line()).unwrap(), member);
}

#[test]
fn schedule_line_roundtrips_all_fields() {
    let item = ScheduleItem {
        id: id(ITEM_ID),
        day_of_week: "Wednesday".to_string(),
        time: "19:30".to_string(),
        coach_id: id(COACH_ID),
        coach_name: "Ivan Petrov".to_string(),
        group_name: "Juniors".to_string(),
        duration: "1 hour".to_string(),
    };

    let line = item.encode_line();
    assert_eq!(
        line,
        format!("{ITEM_ID}|Wednesday|19:30|{COACH_ID}|Ivan Petrov|Juniors|1 hour")
    );
    assert_eq!(ScheduleItem::decode_line(&line).unwrap(), item);
}

#[test]
fn attendance_date_is_written_as_iso_date() {
    let record = AttendanceRecord {
        member_id: id(MEMBER_ID),
        member_name: "Jane Doe".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        status: "Late".to_string(),
    };

    assert_eq!(
        record.encode_line(),
        format!("{MEMBER_ID}|Jane Doe|2026-03-09|Late")
    );
    assert_eq!(
        AttendanceRecord::decode_line(&record.encode_line()).unwrap(),
        record
    );
}

#[test]
fn short_lines_fail_with_field_count() {
    let err = Coach::decode_line(&format!("{COACH_ID}|Ivan|555")).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TooFewFields {
            expected: 6,
            found: 3
        }
    );
}

#[test]
fn bad_identifier_or_date_fails_only_that_line() {
    assert!(matches!(
        Member::decode_line("not-a-uuid|Jane|1|2"),
        Err(DecodeError::InvalidId(_))
    ));
    assert!(matches!(
        AttendanceRecord::decode_line(&format!("{MEMBER_ID}|Jane|yesterday|Present")),
        Err(DecodeError::InvalidDate(_))
    ));
    assert!(matches!(
        ScheduleItem::decode_line(&format!("{ITEM_ID}|Monday|18:00|nobody|x|y|z")),
        Err(DecodeError::InvalidId(_))
    ));
}

#[test]
fn coach_experience_is_coerced_not_rejected() {
    let coach = Coach::decode_line(&format!("{COACH_ID}|Ivan|555||Boxing|ten")).unwrap();
    assert_eq!(coach.experience, 0);
    assert_eq!(coach.email, "");
}

#[test]
fn extra_trailing_fields_are_ignored() {
    let member = Member::decode_line(&format!("{MEMBER_ID}|Jane|555|j@c.io|extra")).unwrap();
    assert_eq!(member.email, "j@c.io");
}

fn id(value: &str) -> RecordId {
    value.parse().unwrap()
}
