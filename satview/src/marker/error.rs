//! Marker validation errors

use thiserror::Error;

use super::MarkerId;

/// Why a marker could not be created.
///
/// Returned to the caller of the create command for display in the form that
/// issued it. Nothing is stored when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("Empty marker name")]
    EmptyName,

    #[error("Marker name is too long ({len} characters, at most {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Marker description is too long ({len} characters, at most {max})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("Marker overlaps existing marker {existing}")]
    Overlaps { existing: MarkerId },
}
