// In: src/lib.rs

//! Rogue Arena Battle Engine
//!
//! Move-effect resolution for a roguelike monster-battling game: a move
//! catalog built from composable effect units, the pipeline that applies
//! them, field weather and hazards, the wild encounter tier roller, and a
//! scoring AI that reads the same effect units.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod move_data;
pub mod species;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BattleStat, BattlerTagType, Biome, BiomePoolTier, FieldTagType, MoveCategory, MoveId,
    MoveResult, MoveTarget, PokemonType, Species, StatusEffect, WeatherType,
};

// --- From this crate's modules (`src/`) ---
pub use battle::context::BattleContext;
pub use battle::field::FieldState;
pub use battle::move_phase::{use_move, MoveOrigin};
pub use battle::turn_orchestrator::{end_turn, run_turn};
pub use config::BattleConfig;
pub use errors::{EngineError, EngineResult};
pub use move_data::{get_move, Move, MoveAttr};
