use schema::{FieldTagType, MoveId, Species};
use thiserror::Error;

/// Main error type for the Rogue Arena battle engine.
///
/// These are data and wiring defects. A move that simply fails in battle
/// reports `false` through the effect pipeline instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The catalog has no definition for this move id
    #[error("Move not found: {0:?}")]
    MoveNotFound(MoveId),
    /// The species table has no entry for this species
    #[error("Species not found: {0:?}")]
    SpeciesNotFound(Species),
    /// A field tag type was requested that has no constructor
    #[error("No field tag registered for {0:?}")]
    UnregisteredFieldTag(FieldTagType),
    /// A battler slot that is out of range or empty
    #[error("Invalid battler slot: {0}")]
    InvalidSlot(String),
    /// An embedded data table failed to parse
    #[error("Malformed data in {source_name}: {details}")]
    DataLoad {
        source_name: &'static str,
        details: String,
    },
    /// A battle configuration could not be read or parsed
    #[error("Invalid battle configuration: {0}")]
    Config(String),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;
