pub mod ai;
pub mod battler_tags;
pub mod biome;
pub mod combatant;
pub mod context;
pub mod damage;
pub mod field;
pub mod field_tags;
pub mod move_effects;
pub mod move_phase;
pub mod rng;
pub mod scheduler;
pub mod state;
pub mod tags;
pub mod targeting;
pub mod tier_roller;
pub mod turn_orchestrator;
pub mod weather;

#[cfg(test)]
mod tests;
