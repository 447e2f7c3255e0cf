//! Repository layer: record stores, storage backends and cascade rules.
//!
//! # Responsibility
//! - Own one in-memory store per entity family as the source of truth.
//! - Load and rewrite whole backing files through a `StoreBackend`.
//! - Enforce validation, referential checks and cascade deletion.
//!
//! # Invariants
//! - Every successful mutation is followed by a whole-file rewrite of each
//!   affected family.
//! - Validation failures leave all stores unchanged.
//! - A failed load leaves that store empty; a failed save leaves memory as is.

pub mod backend;
pub mod club_repo;
pub mod store;

use crate::codec::ParseFailure;
use crate::model::entity::EntityKind;
use crate::model::id::RecordId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for club persistence and mutations.
#[derive(Debug)]
pub enum RepoError {
    /// Mutation rejected; state unchanged.
    Validation(ValidationError),
    NotFound(RecordId),
    /// Backing file could not be read or written.
    Io {
        entity: EntityKind,
        source: std::io::Error,
    },
}

impl RepoError {
    /// Whether this is a rejected mutation rather than a storage failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Io { entity, source } => {
                write!(f, "failed to access {}: {source}", entity.file_name())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome of loading one entity family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub entity: EntityKind,
    /// Records now held in the store.
    pub loaded: usize,
    /// Lines skipped because they could not be decoded.
    pub skipped: Vec<ParseFailure>,
}

impl LoadReport {
    pub(crate) fn empty(entity: EntityKind) -> Self {
        Self {
            entity,
            loaded: 0,
            skipped: Vec::new(),
        }
    }
}

/// Outcome of loading every entity family.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub reports: Vec<LoadReport>,
    /// Families whose backing file could not be read. Their stores are empty.
    pub failures: Vec<RepoError>,
}

impl LoadSummary {
    pub fn report(&self, entity: EntityKind) -> Option<&LoadReport> {
        self.reports.iter().find(|report| report.entity == entity)
    }

    pub fn parse_failures(&self) -> impl Iterator<Item = &ParseFailure> {
        self.reports.iter().flat_map(|report| report.skipped.iter())
    }

    pub fn skipped_lines(&self) -> usize {
        self.reports.iter().map(|report| report.skipped.len()).sum()
    }

    /// True when every file was readable and every line decoded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped_lines() == 0
    }
}
