//! Ambient error type for the monster turn engine.
//!
//! The engine's own decisions (cast or not, move or not, which blow
//! effect fires) are never fallible in the `Result` sense: every branch
//! in `spell`, `movement`, and `combat` is total. `EngineError` exists
//! only for the boundary cases listed below.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cave dimensions must be non-zero, got {width}x{height}")]
    InvalidCaveDimensions { width: usize, height: usize },

    #[error("coordinates ({x}, {y}) out of bounds for a {width}x{height} cave")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("no free cell available for teleport")]
    NoFreeCell,

    #[error("race id {0:?} not found in race table")]
    UnknownRace(crate::race::RaceId),
}

pub type EngineResult<T> = Result<T, EngineError>;
