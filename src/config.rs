// In: src/config.rs

//! RON battle setup used by the demo runner and integration tests.

use crate::battle::combatant::Combatant;
use crate::battle::context::BattleContext;
use crate::battle::rng::BattleRng;
use crate::battle::state::{Battle, BattlerIndex};
use crate::errors::{EngineError, EngineResult};
use log::debug;
use schema::{Biome, MoveId, Species};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_turn_limit() -> u32 {
    50
}

fn default_wild_moves() -> Vec<MoveId> {
    vec![MoveId::Tackle]
}

/// One party member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub species: Species,
    /// Defaults to the wave's enemy level.
    #[serde(default)]
    pub level: Option<u8>,
    pub moves: Vec<MoveId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Fixed seed for a reproducible battle; a random one otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
    pub biome: Biome,
    pub wave: u32,
    #[serde(default)]
    pub double: bool,
    pub player: Vec<CombatantConfig>,
    /// Left empty, the enemies are rolled from the biome's pools.
    #[serde(default)]
    pub enemy: Vec<CombatantConfig>,
    /// Moveset given to rolled enemies.
    #[serde(default = "default_wild_moves")]
    pub wild_moves: Vec<MoveId>,
    #[serde(default = "default_turn_limit")]
    pub turn_limit: u32,
}

impl BattleConfig {
    pub fn from_ron_str(text: &str) -> EngineResult<Self> {
        ron::from_str(text).map_err(|e| EngineError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_ron_str(&text)
    }

    /// Build the battle context: leads on the field, the rest on the bench.
    pub fn build_context(&self) -> EngineResult<BattleContext> {
        if self.player.is_empty() {
            return Err(EngineError::Config("the player party is empty".to_string()));
        }
        let mut rng = match self.seed {
            Some(seed) => BattleRng::seeded(seed),
            None => BattleRng::new_random(),
        };
        let battle = Battle::new(self.wave, self.double, &mut rng);
        let enemy_levels = battle.enemy_levels.clone();
        let mut ctx = BattleContext::new(self.biome, battle, rng);

        let mut next_id = 1;
        let mut build = |entry: &CombatantConfig, default_level: u8| {
            let combatant = Combatant::new(
                next_id,
                entry.species,
                entry.level.unwrap_or(default_level),
                &entry.moves,
            );
            next_id += 1;
            combatant
        };

        let lead_level = enemy_levels.first().copied().unwrap_or(1);
        let mut player = Vec::with_capacity(self.player.len());
        for entry in &self.player {
            player.push(build(entry, lead_level)?);
        }

        let mut enemy = Vec::new();
        if self.enemy.is_empty() {
            for level in &enemy_levels {
                let roll = ctx.field.random_species(self.wave, *level, &mut ctx.rng)?;
                debug!("Wild enemy rolled: {:?} ({:?})", roll.species, roll.tier);
                let entry = CombatantConfig {
                    species: roll.species,
                    level: Some(*level),
                    moves: self.wild_moves.clone(),
                };
                enemy.push(build(&entry, *level)?);
            }
        } else {
            for (index, entry) in self.enemy.iter().enumerate() {
                let level = enemy_levels.get(index).copied().unwrap_or(lead_level);
                enemy.push(build(entry, level)?);
            }
        }

        let player_slots = [BattlerIndex::Player, BattlerIndex::PlayerTwo];
        let enemy_slots = [BattlerIndex::Enemy, BattlerIndex::EnemyTwo];
        let field_count = ctx.battle.battler_count();
        seat_party(&mut ctx, player, &player_slots[..field_count])?;
        seat_party(&mut ctx, enemy, &enemy_slots[..field_count])?;
        Ok(ctx)
    }
}

fn seat_party(
    ctx: &mut BattleContext,
    party: Vec<Combatant>,
    slots: &[BattlerIndex],
) -> EngineResult<()> {
    let Some(&first_slot) = slots.first() else {
        return Ok(());
    };
    for (index, mut combatant) in party.into_iter().enumerate() {
        match slots.get(index) {
            Some(slot) => {
                ctx.place(*slot, combatant)?;
            }
            None => {
                combatant.active = false;
                ctx.bench_for_mut(first_slot).push(combatant);
            }
        }
    }
    Ok(())
}
