//! Club domain model: members, coaches, weekly schedule and attendance.
//!
//! # Responsibility
//! - Define canonical records shared by repository, codec and projections.
//! - Centralize required-field validation and the week-order mapping.
//!
//! # Invariants
//! - Every member, coach and schedule item is identified by a `RecordId`
//!   assigned at creation and never changed afterwards.
//! - Denormalized name fields (`coach_name`, `member_name`) are snapshots
//!   taken at creation time, not live joins.

pub mod attendance;
pub mod coach;
pub mod entity;
pub mod id;
pub mod member;
pub mod schedule;
pub mod validation;
pub mod weekday;
