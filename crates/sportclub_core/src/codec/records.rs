//! `LineCodec` implementations for the four record families.

use super::{format_date, parse_date_text, DecodeError, LineCodec};
use crate::model::attendance::AttendanceRecord;
use crate::model::coach::{parse_experience, Coach};
use crate::model::entity::EntityKind;
use crate::model::id::RecordId;
use crate::model::member::Member;
use crate::model::schedule::ScheduleItem;
use chrono::NaiveDate;

fn parse_id(value: &str) -> Result<RecordId, DecodeError> {
    value
        .parse::<RecordId>()
        .map_err(|_| DecodeError::InvalidId(value.to_string()))
}

/// Parses a persisted date, accepting a trailing time component.
pub fn parse_date(value: &str) -> Result<NaiveDate, DecodeError> {
    parse_date_text(value).ok_or_else(|| DecodeError::InvalidDate(value.to_string()))
}

// members.txt: id|full_name|phone|email
impl LineCodec for Member {
    const KIND: EntityKind = EntityKind::Member;
    const MIN_FIELDS: usize = 4;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError> {
        Ok(Member::with_id(
            parse_id(fields[0])?,
            fields[1],
            fields[2],
            fields[3],
        ))
    }
}

// attendance.txt: member_id|member_name|date|status
impl LineCodec for AttendanceRecord {
    const KIND: EntityKind = EntityKind::Attendance;
    const MIN_FIELDS: usize = 4;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.member_name.clone(),
            format_date(self.date),
            self.status.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError> {
        Ok(AttendanceRecord {
            member_id: parse_id(fields[0])?,
            member_name: fields[1].to_string(),
            date: parse_date(fields[2])?,
            status: fields[3].to_string(),
        })
    }
}

// coaches.txt: id|full_name|phone|email|specialization|experience
impl LineCodec for Coach {
    const KIND: EntityKind = EntityKind::Coach;
    const MIN_FIELDS: usize = 6;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.specialization.clone(),
            self.experience.to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError> {
        Ok(Coach {
            id: parse_id(fields[0])?,
            full_name: fields[1].to_string(),
            phone: fields[2].to_string(),
            email: fields[3].to_string(),
            specialization: fields[4].to_string(),
            experience: parse_experience(fields[5]),
        })
    }
}

// schedule.txt: id|day_of_week|time|coach_id|coach_name|group_name|duration
impl LineCodec for ScheduleItem {
    const KIND: EntityKind = EntityKind::Schedule;
    const MIN_FIELDS: usize = 7;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.day_of_week.clone(),
            self.time.clone(),
            self.coach_id.to_string(),
            self.coach_name.clone(),
            self.group_name.clone(),
            self.duration.clone(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError> {
        Ok(ScheduleItem {
            id: parse_id(fields[0])?,
            day_of_week: fields[1].to_string(),
            time: fields[2].to_string(),
            coach_id: parse_id(fields[3])?,
            coach_name: fields[4].to_string(),
            group_name: fields[5].to_string(),
            duration: fields[6].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_date;
    use crate::codec::{DecodeError, LineCodec};
    use crate::model::coach::Coach;
    use chrono::NaiveDate;

    #[test]
    fn parse_date_keeps_date_part_of_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(parse_date("2026-03-09").unwrap(), expected);
        assert_eq!(parse_date("2026-03-09 00:00:00").unwrap(), expected);
        assert_eq!(parse_date("2026-03-09T18:30:00").unwrap(), expected);
        assert!(matches!(
            parse_date("09.03.2026"),
            Err(DecodeError::InvalidDate(_))
        ));
    }

    #[test]
    fn coach_with_unparsable_experience_decodes_as_zero() {
        let line = "11111111-2222-4333-8444-555555555555|Ivan|123|i@x.io|Boxing|lots";
        let coach = Coach::decode_line(line).unwrap();
        assert_eq!(coach.experience, 0);
        assert_eq!(coach.specialization, "Boxing");
    }
}
