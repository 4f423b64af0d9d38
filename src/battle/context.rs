// In: src/battle/context.rs

use crate::battle::combatant::Combatant;
use crate::battle::field::FieldState;
use crate::battle::rng::BattleRng;
use crate::battle::scheduler::BattleScheduler;
use crate::battle::state::{Battle, BattlerIndex};
use crate::errors::{EngineError, EngineResult};
use schema::Biome;

/// Quantities external modifiers (held items, run upgrades) may adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    MovePower,
    Accuracy,
}

/// Hook for the modifier economy, which lives outside the engine.
pub trait ModifierSource {
    fn apply_modifiers(&self, _kind: ModifierKind, _slot: BattlerIndex, _value: &mut f64) {}
}

/// No modifiers at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoModifiers;

impl ModifierSource for NoModifiers {}

/// Everything an effect unit may read or mutate while a move resolves.
pub struct BattleContext {
    pub field: FieldState,
    /// Active combatants by field slot: player, player two, enemy, enemy two.
    pub combatants: [Option<Combatant>; 4],
    /// Reserve party members, player side first.
    pub benches: [Vec<Combatant>; 2],
    pub scheduler: BattleScheduler,
    pub rng: BattleRng,
    pub battle: Battle,
    pub modifiers: Box<dyn ModifierSource>,
}

impl BattleContext {
    pub fn new(biome: Biome, battle: Battle, rng: BattleRng) -> Self {
        Self {
            field: FieldState::new(biome),
            combatants: [None, None, None, None],
            benches: [Vec::new(), Vec::new()],
            scheduler: BattleScheduler::new(),
            rng,
            battle,
            modifiers: Box::new(NoModifiers),
        }
    }

    /// Put `combatant` on the field at `slot`, returning whoever was there.
    pub fn place(
        &mut self,
        slot: BattlerIndex,
        mut combatant: Combatant,
    ) -> EngineResult<Option<Combatant>> {
        let index = Self::index(slot)?;
        combatant.active = true;
        if slot.is_player_side() {
            self.battle.add_participant(combatant.id);
        }
        let previous = self.combatants[index].replace(combatant);
        Ok(previous.map(|mut previous| {
            previous.active = false;
            previous
        }))
    }

    pub fn bench_for(&self, slot: BattlerIndex) -> &[Combatant] {
        &self.benches[Self::side(slot)]
    }

    pub fn bench_for_mut(&mut self, slot: BattlerIndex) -> &mut Vec<Combatant> {
        &mut self.benches[Self::side(slot)]
    }

    fn side(slot: BattlerIndex) -> usize {
        if slot.is_player_side() {
            0
        } else {
            1
        }
    }

    fn index(slot: BattlerIndex) -> EngineResult<usize> {
        slot.slot()
            .ok_or_else(|| EngineError::InvalidSlot(format!("{:?} is not a field slot", slot)))
    }

    pub fn combatant(&self, slot: BattlerIndex) -> Option<&Combatant> {
        slot.slot().and_then(|index| self.combatants[index].as_ref())
    }

    pub fn combatant_mut(&mut self, slot: BattlerIndex) -> Option<&mut Combatant> {
        slot.slot().and_then(|index| self.combatants[index].as_mut())
    }

    pub fn get(&self, slot: BattlerIndex) -> EngineResult<&Combatant> {
        self.combatant(slot)
            .ok_or_else(|| EngineError::InvalidSlot(format!("no combatant at {:?}", slot)))
    }

    pub fn get_mut(&mut self, slot: BattlerIndex) -> EngineResult<&mut Combatant> {
        self.combatant_mut(slot)
            .ok_or_else(|| EngineError::InvalidSlot(format!("no combatant at {:?}", slot)))
    }

    /// Borrow the scheduler alongside a combatant.
    pub fn get_with_scheduler(
        &mut self,
        slot: BattlerIndex,
    ) -> EngineResult<(&mut Combatant, &mut BattleScheduler)> {
        let index = Self::index(slot)?;
        match self.combatants[index].as_mut() {
            Some(combatant) => Ok((combatant, &mut self.scheduler)),
            None => Err(EngineError::InvalidSlot(format!("no combatant at {:?}", slot))),
        }
    }

    /// Attacker and defender side by side with the rng, for damage rolls.
    pub fn attack_view(
        &mut self,
        user: BattlerIndex,
        target: BattlerIndex,
    ) -> EngineResult<(&Combatant, &Combatant, &mut BattleRng)> {
        let user_mon = self.combatants[Self::index(user)?]
            .as_ref()
            .ok_or_else(|| EngineError::InvalidSlot(format!("no combatant at {:?}", user)))?;
        let target_mon = self.combatants[Self::index(target)?]
            .as_ref()
            .ok_or_else(|| EngineError::InvalidSlot(format!("no combatant at {:?}", target)))?;
        Ok((user_mon, target_mon, &mut self.rng))
    }

    pub fn get_with_rng(
        &mut self,
        slot: BattlerIndex,
    ) -> EngineResult<(&mut Combatant, &mut BattleRng)> {
        let index = Self::index(slot)?;
        match self.combatants[index].as_mut() {
            Some(combatant) => Ok((combatant, &mut self.rng)),
            None => Err(EngineError::InvalidSlot(format!("no combatant at {:?}", slot))),
        }
    }

    pub fn is_active(&self, slot: BattlerIndex) -> bool {
        self.combatant(slot).is_some_and(Combatant::is_active)
    }

    /// Active, non-fainted slots in field order.
    pub fn active_slots(&self) -> Vec<BattlerIndex> {
        BattlerIndex::FIELD
            .iter()
            .copied()
            .filter(|slot| self.is_active(*slot))
            .collect()
    }

    pub fn slot_of_id(&self, combatant_id: u32) -> Option<BattlerIndex> {
        BattlerIndex::FIELD
            .iter()
            .copied()
            .find(|slot| self.combatant(*slot).is_some_and(|c| c.id == combatant_id))
    }

    /// Whoever last damaged `user` this turn, if still on the field.
    pub fn resolve_attacker(&self, user: BattlerIndex) -> Option<BattlerIndex> {
        let record = self.combatant(user)?.last_attack_received()?;
        self.is_active(record.source).then_some(record.source)
    }

    pub fn name_of(&self, slot: BattlerIndex) -> String {
        self.combatant(slot)
            .map(|combatant| combatant.name.clone())
            .unwrap_or_default()
    }
}
