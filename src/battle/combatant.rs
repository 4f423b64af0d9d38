// In: src/battle/combatant.rs

use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
use crate::battle::state::BattlerIndex;
use crate::battle::tags::TagSet;
use crate::errors::EngineResult;
use crate::move_data::get_move;
use crate::species::{get_species_data, BaseStats, Species};
use schema::{BattleStat, BattlerTagType, MoveCategory, MoveId, MoveResult, PokemonType, StatusEffect};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

const DEFAULT_IV: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn from_base(base: &BaseStats, level: u8) -> Self {
        let level = level as u32;
        let other = |b: u16| (2 * b as u32 + DEFAULT_IV) * level / 100 + 5;
        Self {
            hp: (2 * base.hp as u32 + DEFAULT_IV) * level / 100 + level + 10,
            attack: other(base.attack),
            defense: other(base.defense),
            sp_attack: other(base.sp_attack),
            sp_defense: other(base.sp_defense),
            speed: other(base.speed),
        }
    }

    pub fn get(&self, stat: BattleStat) -> u32 {
        match stat {
            BattleStat::Attack => self.attack,
            BattleStat::Defense => self.defense,
            BattleStat::SpecialAttack => self.sp_attack,
            BattleStat::SpecialDefense => self.sp_defense,
            BattleStat::Speed => self.speed,
            BattleStat::Accuracy | BattleStat::Evasion => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub effect: StatusEffect,
    /// Sleep: turns left. Toxic: turns elapsed.
    pub turns: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_id: MoveId,
    pub pp_used: u8,
}

/// An entry of the move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnMove {
    pub move_id: MoveId,
    pub targets: Vec<BattlerIndex>,
    pub result: MoveResult,
    pub virtual_move: bool,
}

/// A move the combatant is locked into using on a coming turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMove {
    pub move_id: MoveId,
    pub targets: Vec<BattlerIndex>,
    pub ignore_pp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub move_id: MoveId,
    pub source: BattlerIndex,
    pub category: MoveCategory,
    pub damage: u32,
}

/// Scratch data reset at the end of every turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnData {
    pub acted: bool,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub attacks_received: Vec<AttackRecord>,
}

/// Data that lives as long as the combatant stays on the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummonData {
    pub turns_on_field: u32,
    pub consecutive_protects: u32,
    pub types_override: Option<Vec<PokemonType>>,
    pub stats_override: Option<Stats>,
    pub moveset_override: Option<Vec<MoveSlot>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: u32,
    pub species: Species,
    pub name: String,
    pub level: u8,
    pub base_types: Vec<PokemonType>,
    pub stats: Stats,
    pub hp: u32,
    pub status: Option<Status>,
    pub stat_stages: BTreeMap<BattleStat, i8>,
    pub tags: TagSet<BattlerTag>,
    pub moveset: Vec<MoveSlot>,
    pub move_history: Vec<TurnMove>,
    pub move_queue: VecDeque<QueuedMove>,
    pub turn_data: TurnData,
    pub summon_data: SummonData,
    pub active: bool,
}

impl Combatant {
    pub fn new(id: u32, species: Species, level: u8, moves: &[MoveId]) -> EngineResult<Self> {
        let data = get_species_data(species)?;
        let stats = Stats::from_base(&data.base_stats, level);
        Ok(Self {
            id,
            species,
            name: data.name.clone(),
            level,
            base_types: data.types.clone(),
            stats,
            hp: stats.hp,
            status: None,
            stat_stages: BTreeMap::new(),
            tags: TagSet::new(),
            moveset: moves
                .iter()
                .map(|move_id| MoveSlot {
                    move_id: *move_id,
                    pp_used: 0,
                })
                .collect(),
            move_history: Vec::new(),
            move_queue: VecDeque::new(),
            turn_data: TurnData::default(),
            summon_data: SummonData::default(),
            active: true,
        })
    }

    // --- HIT POINTS ---

    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp() == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp() as f64
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_active(&self) -> bool {
        self.active && !self.is_fainted()
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp()
    }

    /// Lose up to `amount` hit points. Returns the amount actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Damage from an attack: an enduring combatant hangs on at 1 HP.
    pub fn take_hit(&mut self, amount: u32) -> u32 {
        if self.has_tag(BattlerTagType::Enduring) && amount >= self.hp && self.hp > 1 {
            return self.damage(self.hp - 1);
        }
        self.damage(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp() - self.hp);
        self.hp += healed;
        healed
    }

    /// `ceil(max_hp * fraction)`, the rounding used by passive damage.
    pub fn hp_fraction(&self, fraction: f64) -> u32 {
        (self.max_hp() as f64 * fraction).ceil() as u32
    }

    // --- TYPES AND STATS ---

    pub fn types(&self) -> &[PokemonType] {
        self.summon_data
            .types_override
            .as_deref()
            .unwrap_or(&self.base_types)
    }

    pub fn is_of_type(&self, pokemon_type: PokemonType) -> bool {
        self.types().contains(&pokemon_type)
    }

    pub fn attack_effectiveness(&self, move_type: PokemonType) -> f32 {
        PokemonType::effectiveness_against(move_type, self.types())
    }

    pub fn battle_stats(&self) -> &Stats {
        self.summon_data.stats_override.as_ref().unwrap_or(&self.stats)
    }

    pub fn stat_stage(&self, stat: BattleStat) -> i8 {
        self.stat_stages.get(&stat).copied().unwrap_or(0)
    }

    pub fn set_stat_stage(&mut self, stat: BattleStat, stage: i8) {
        let stage = stage.clamp(-6, 6);
        if stage == 0 {
            self.stat_stages.remove(&stat);
        } else {
            self.stat_stages.insert(stat, stage);
        }
    }

    /// Shift a stage by `levels`, clamped to [-6, 6]. Returns the applied change.
    pub fn change_stat_stage(&mut self, stat: BattleStat, levels: i8) -> i8 {
        let before = self.stat_stage(stat);
        self.set_stat_stage(stat, before.saturating_add(levels));
        self.stat_stage(stat) - before
    }

    pub fn reset_stat_stages(&mut self) {
        self.stat_stages.clear();
    }

    /// Standing on the ground: hazards and ground moves can reach it.
    pub fn is_grounded(&self, gravity: bool) -> bool {
        gravity || !self.is_of_type(PokemonType::Flying) || self.has_tag(BattlerTagType::IgnoreFlying)
    }

    // --- STATUS ---

    pub fn status_effect(&self) -> Option<StatusEffect> {
        self.status.map(|status| status.effect)
    }

    pub fn can_set_status(&self, effect: StatusEffect) -> bool {
        if self.status.is_some() || self.is_fainted() {
            return false;
        }
        !effect
            .immune_types()
            .iter()
            .any(|immune| self.is_of_type(*immune))
    }

    pub fn set_status(&mut self, effect: StatusEffect, turns: u8) -> bool {
        if !self.can_set_status(effect) {
            return false;
        }
        self.status = Some(Status { effect, turns });
        true
    }

    pub fn reset_status(&mut self) -> Option<StatusEffect> {
        self.status.take().map(|status| status.effect)
    }

    // --- MOVES ---

    pub fn moveset(&self) -> &[MoveSlot] {
        self.summon_data
            .moveset_override
            .as_deref()
            .unwrap_or(&self.moveset)
    }

    pub fn last_move(&self) -> Option<&TurnMove> {
        self.move_history.last()
    }

    pub fn last_attack_received(&self) -> Option<&AttackRecord> {
        self.turn_data.attacks_received.last()
    }

    pub fn first_turn_on_field(&self) -> bool {
        self.summon_data.turns_on_field == 0
    }

    /// Use one PP of `move_id`, if it is in the moveset.
    pub fn use_pp(&mut self, move_id: MoveId) -> EngineResult<()> {
        let max_pp = get_move(move_id)?.pp;
        let moveset = match self.summon_data.moveset_override.as_mut() {
            Some(moveset) => moveset,
            None => &mut self.moveset,
        };
        if let Some(slot) = moveset.iter_mut().find(|slot| slot.move_id == move_id) {
            slot.pp_used = (slot.pp_used + 1).min(max_pp);
        }
        Ok(())
    }

    pub fn pp_left(&self, move_id: MoveId) -> EngineResult<u8> {
        let max_pp = get_move(move_id)?.pp;
        Ok(self
            .moveset()
            .iter()
            .find(|slot| slot.move_id == move_id)
            .map(|slot| max_pp.saturating_sub(slot.pp_used))
            .unwrap_or(0))
    }

    /// Clear everything bound to the current stay on the field.
    pub fn reset_summon_data(&mut self) {
        self.summon_data = SummonData::default();
        self.tags.clear();
        self.stat_stages.clear();
        self.move_queue.clear();
    }

    pub fn reset_turn_data(&mut self) {
        self.turn_data = TurnData::default();
    }
}

impl BattlerTagHolder for Combatant {
    fn tag_set(&self) -> &TagSet<BattlerTag> {
        &self.tags
    }

    fn tag_set_mut(&mut self) -> &mut TagSet<BattlerTag> {
        &mut self.tags
    }

    fn owner_name(&self) -> &str {
        &self.name
    }

    fn can_add_tag(&self, tag_type: BattlerTagType) -> bool {
        match tag_type {
            BattlerTagType::Seeded => !self.is_of_type(PokemonType::Grass),
            _ => !self.is_fainted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::battler_tags::LapseType;
    use crate::battle::scheduler::BattleScheduler;
    use pretty_assertions::assert_eq;

    fn combatant(species: Species, level: u8) -> Combatant {
        Combatant::new(1, species, level, &[MoveId::Tackle]).unwrap()
    }

    #[test]
    fn test_stats_follow_level_formula() {
        let snorlax = combatant(Species::Snorlax, 50);
        assert_eq!(snorlax.max_hp(), (2 * 160 + 15) * 50 / 100 + 50 + 10);
        assert_eq!(snorlax.stats.attack, (2 * 110 + 15) * 50 / 100 + 5);
    }

    #[test]
    fn test_stat_stages_clamp_and_report_applied_change() {
        let mut pokemon = combatant(Species::Rattata, 10);
        assert_eq!(pokemon.change_stat_stage(BattleStat::Attack, 4), 4);
        assert_eq!(pokemon.change_stat_stage(BattleStat::Attack, 4), 2);
        assert_eq!(pokemon.stat_stage(BattleStat::Attack), 6);
        assert_eq!(pokemon.change_stat_stage(BattleStat::Attack, -6), -6);
        assert!(pokemon.stat_stages.is_empty());
    }

    #[test]
    fn test_status_respects_type_immunity() {
        let mut magnemite = combatant(Species::Magnemite, 10);
        assert!(!magnemite.set_status(StatusEffect::Poison, 0));
        assert!(!magnemite.set_status(StatusEffect::Paralysis, 0));
        assert!(magnemite.set_status(StatusEffect::Burn, 0));
        assert!(!magnemite.set_status(StatusEffect::Sleep, 3));
    }

    #[test]
    fn test_enduring_survives_at_one_hp() {
        let mut scheduler = BattleScheduler::new();
        let mut pokemon = combatant(Species::Rattata, 10);
        pokemon.add_battler_tag(
            BattlerTag::new(BattlerTagType::Enduring, 1, Some(MoveId::Endure), Some(1)),
            &mut scheduler,
        );
        let max_hp = pokemon.max_hp();
        assert_eq!(pokemon.take_hit(max_hp * 2), max_hp - 1);
        assert_eq!(pokemon.hp, 1);
    }

    #[test]
    fn test_battler_tag_overlap_and_lapse() {
        let mut scheduler = BattleScheduler::new();
        let mut pokemon = combatant(Species::Rattata, 10);
        let confused = BattlerTag::new(BattlerTagType::Confused, 2, Some(MoveId::Supersonic), None);

        assert!(pokemon.add_battler_tag(confused.clone(), &mut scheduler));
        assert!(!pokemon.add_battler_tag(confused, &mut scheduler));
        assert!(scheduler.has_message("Rattata is\nalready confused!"));

        pokemon.lapse_tags(LapseType::PreMove, &mut scheduler);
        assert!(pokemon.has_tag(BattlerTagType::Confused));
        assert!(!pokemon.lapse_tag(BattlerTagType::Confused, &mut scheduler));
        assert!(scheduler.has_message("Rattata snapped\nout of confusion!"));
    }

    #[test]
    fn test_grass_types_cannot_be_seeded() {
        let mut scheduler = BattleScheduler::new();
        let mut oddish = combatant(Species::Oddish, 10);
        let seed = BattlerTag::new(BattlerTagType::Seeded, 0, Some(MoveId::LeechSeed), None);
        assert!(!oddish.add_battler_tag(seed, &mut scheduler));
    }
}
