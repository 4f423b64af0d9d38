use crate::battle::rng::BattleRng;
use schema::{MoveId, PokeballType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A field position. `Attacker` is a placeholder target that resolves to
/// whoever last damaged the move's user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BattlerIndex {
    Player,
    PlayerTwo,
    Enemy,
    EnemyTwo,
    Attacker,
}

impl BattlerIndex {
    pub const FIELD: [BattlerIndex; 4] = [
        BattlerIndex::Player,
        BattlerIndex::PlayerTwo,
        BattlerIndex::Enemy,
        BattlerIndex::EnemyTwo,
    ];

    /// Storage position of a concrete slot.
    pub fn slot(&self) -> Option<usize> {
        match self {
            BattlerIndex::Player => Some(0),
            BattlerIndex::PlayerTwo => Some(1),
            BattlerIndex::Enemy => Some(2),
            BattlerIndex::EnemyTwo => Some(3),
            BattlerIndex::Attacker => None,
        }
    }

    pub fn is_player_side(&self) -> bool {
        matches!(self, BattlerIndex::Player | BattlerIndex::PlayerTwo)
    }

    pub fn is_enemy_side(&self) -> bool {
        matches!(self, BattlerIndex::Enemy | BattlerIndex::EnemyTwo)
    }

    pub fn same_side(&self, other: BattlerIndex) -> bool {
        (self.is_player_side() && other.is_player_side())
            || (self.is_enemy_side() && other.is_enemy_side())
    }

    pub fn ally(&self) -> Option<BattlerIndex> {
        match self {
            BattlerIndex::Player => Some(BattlerIndex::PlayerTwo),
            BattlerIndex::PlayerTwo => Some(BattlerIndex::Player),
            BattlerIndex::Enemy => Some(BattlerIndex::EnemyTwo),
            BattlerIndex::EnemyTwo => Some(BattlerIndex::Enemy),
            BattlerIndex::Attacker => None,
        }
    }

    pub fn opponents(&self) -> &'static [BattlerIndex] {
        match self {
            BattlerIndex::Player | BattlerIndex::PlayerTwo => {
                &[BattlerIndex::Enemy, BattlerIndex::EnemyTwo]
            }
            BattlerIndex::Enemy | BattlerIndex::EnemyTwo => {
                &[BattlerIndex::Player, BattlerIndex::PlayerTwo]
            }
            BattlerIndex::Attacker => &[],
        }
    }
}

/// What a slot chose to do this turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnCommand {
    Fight {
        move_id: MoveId,
        targets: Vec<BattlerIndex>,
    },
    Ball(PokeballType),
    Pokemon {
        party_index: usize,
    },
    Run,
}

/// Per-wave battle bookkeeping. Recreated for each wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub wave_index: u32,
    pub enemy_levels: Vec<u8>,
    pub double: bool,
    pub turn: u32,
    pub turn_commands: [Option<TurnCommand>; 4],
    pub turn_pokeball_counts: BTreeMap<PokeballType, u32>,
    pub player_participant_ids: BTreeSet<u32>,
    pub escape_attempts: u32,
}

impl Battle {
    pub fn new(wave_index: u32, double: bool, rng: &mut BattleRng) -> Self {
        let battler_count = if double { 2 } else { 1 };
        let enemy_levels = (0..battler_count)
            .map(|_| Self::get_level_for_wave(wave_index, rng))
            .collect();
        Self {
            wave_index,
            enemy_levels,
            double,
            turn: 0,
            turn_commands: Default::default(),
            turn_pokeball_counts: BTreeMap::new(),
            player_participant_ids: BTreeSet::new(),
            escape_attempts: 0,
        }
    }

    /// Enemy level for a wave. Boss waves (every tenth) are fixed at 1.2x the
    /// base curve; others add a half-normal wobble that narrows as waves grow.
    pub fn get_level_for_wave(wave_index: u32, rng: &mut BattleRng) -> u8 {
        let wave = wave_index as f64;
        let base_level = 1.0 + wave / 2.0 + (wave / 25.0).powi(2);

        if wave_index % 10 == 0 {
            if wave_index == 200 {
                return 200;
            }
            return (base_level * 1.2).floor().min(u8::MAX as f64) as u8;
        }

        let deviation = 10.0 / wave;
        let level = (base_level + rng.rand_gauss(deviation, "Wave Level Deviation").abs()).round();
        level.clamp(1.0, u8::MAX as f64) as u8
    }

    pub fn is_boss_wave(&self) -> bool {
        self.wave_index % 10 == 0
    }

    pub fn battler_count(&self) -> usize {
        if self.double {
            2
        } else {
            1
        }
    }

    pub fn increment_turn(&mut self, pokeball_counts: &BTreeMap<PokeballType, u32>) {
        self.turn += 1;
        self.turn_commands = Default::default();
        self.turn_pokeball_counts = pokeball_counts.clone();
    }

    pub fn set_command(&mut self, slot: BattlerIndex, command: TurnCommand) {
        if let Some(index) = slot.slot() {
            self.turn_commands[index] = Some(command);
        }
    }

    pub fn command(&self, slot: BattlerIndex) -> Option<&TurnCommand> {
        slot.slot().and_then(|index| self.turn_commands[index].as_ref())
    }

    pub fn add_participant(&mut self, combatant_id: u32) {
        self.player_participant_ids.insert(combatant_id);
    }

    pub fn remove_fainted_participant(&mut self, combatant_id: u32) {
        self.player_participant_ids.remove(&combatant_id);
    }

    /// Count one more escape attempt and return the new total.
    pub fn record_escape_attempt(&mut self) -> u32 {
        self.escape_attempts += 1;
        self.escape_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(10, 7)]
    #[case(20, 13)]
    #[case(50, 36)]
    #[case(200, 200)]
    fn test_boss_wave_levels_are_fixed(#[case] wave: u32, #[case] expected: u8) {
        let mut rng = BattleRng::new_for_test(vec![]);
        assert_eq!(Battle::get_level_for_wave(wave, &mut rng), expected);
    }

    #[test]
    fn test_regular_wave_level_never_below_curve() {
        let mut rng = BattleRng::seeded(3);
        for _ in 0..50 {
            assert!(Battle::get_level_for_wave(25, &mut rng) >= 15);
        }
    }

    #[test]
    fn test_increment_turn_resets_commands_and_snapshots_balls() {
        let mut rng = BattleRng::seeded(1);
        let mut battle = Battle::new(3, true, &mut rng);
        assert_eq!(battle.enemy_levels.len(), 2);
        assert!(!battle.is_boss_wave());
        assert_eq!(battle.battler_count(), 2);

        battle.set_command(BattlerIndex::Player, TurnCommand::Run);
        let counts = BTreeMap::from([(PokeballType::GreatBall, 4)]);
        battle.increment_turn(&counts);

        assert_eq!(battle.turn, 1);
        assert_eq!(battle.command(BattlerIndex::Player), None);
        assert_eq!(battle.turn_pokeball_counts.get(&PokeballType::GreatBall), Some(&4));
    }

    #[test]
    fn test_participants_track_adds_and_faints() {
        let mut rng = BattleRng::seeded(1);
        let mut battle = Battle::new(1, false, &mut rng);
        battle.add_participant(7);
        battle.add_participant(9);
        battle.remove_fainted_participant(7);
        assert_eq!(battle.player_participant_ids.iter().copied().collect::<Vec<_>>(), vec![9]);
        assert_eq!(battle.record_escape_attempt(), 1);
    }
}
