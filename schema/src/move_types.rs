use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// The base target pattern of a move. Resolution into concrete battler slots
/// happens in the engine's targeting module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum MoveTarget {
    User,
    Other,
    AllOthers,
    NearOther,
    AllNearOthers,
    NearEnemy,
    AllNearEnemies,
    RandomNearEnemy,
    AllEnemies,
    Attacker,
    NearAlly,
    Ally,
    UserOrNearAlly,
    UserAndAllies,
    All,
    UserSide,
    EnemySide,
    BothSides,
}

impl MoveTarget {
    /// Patterns that strike every eligible candidate rather than choosing one.
    pub fn hits_all(&self) -> bool {
        matches!(
            self,
            MoveTarget::AllOthers
                | MoveTarget::AllNearOthers
                | MoveTarget::AllNearEnemies
                | MoveTarget::AllEnemies
                | MoveTarget::UserAndAllies
                | MoveTarget::All
                | MoveTarget::UserSide
                | MoveTarget::EnemySide
                | MoveTarget::BothSides
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum BattleStat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl fmt::Display for BattleStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BattleStat::Attack => "Attack",
            BattleStat::Defense => "Defense",
            BattleStat::SpecialAttack => "Sp. Atk",
            BattleStat::SpecialDefense => "Sp. Def",
            BattleStat::Speed => "Speed",
            BattleStat::Accuracy => "accuracy",
            BattleStat::Evasion => "evasiveness",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEffect {
    Poison,
    Toxic,
    Paralysis,
    Sleep,
    Freeze,
    Burn,
}

impl StatusEffect {
    pub fn obtain_message(&self) -> &'static str {
        match self {
            StatusEffect::Poison => "was poisoned!",
            StatusEffect::Toxic => "was badly poisoned!",
            StatusEffect::Paralysis => "was paralyzed!\nIt may be unable to move!",
            StatusEffect::Sleep => "fell asleep!",
            StatusEffect::Freeze => "was frozen solid!",
            StatusEffect::Burn => "was burned!",
        }
    }

    pub fn cure_message(&self) -> &'static str {
        match self {
            StatusEffect::Poison | StatusEffect::Toxic => "was cured of its poison!",
            StatusEffect::Paralysis => "was cured of paralysis!",
            StatusEffect::Sleep => "woke up!",
            StatusEffect::Freeze => "was defrosted!",
            StatusEffect::Burn => "was cured of its burn!",
        }
    }

    /// Types that can never receive this status.
    pub fn immune_types(&self) -> &'static [crate::PokemonType] {
        use crate::PokemonType;
        match self {
            StatusEffect::Poison | StatusEffect::Toxic => &[PokemonType::Poison, PokemonType::Steel],
            StatusEffect::Paralysis => &[PokemonType::Electric],
            StatusEffect::Freeze => &[PokemonType::Ice],
            StatusEffect::Burn => &[PokemonType::Fire],
            StatusEffect::Sleep => &[],
        }
    }
}

/// Outcome recorded in a combatant's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Success,
    Fail,
    Miss,
    Other,
}
