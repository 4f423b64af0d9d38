// Rogue Arena Schema - Shared type definitions
// This crate contains the core enums shared by the battle engine, its data
// files, and anything that persists battle state.

pub use field_types::*;
pub use move_types::*;
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;

pub mod field_types;
pub mod move_types;
pub mod moves;
pub mod pokemon_types;
pub mod species;
