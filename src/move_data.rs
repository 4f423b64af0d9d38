// In: src/move_data.rs

//! Move definitions: the `Move` record, its effect units and the conditions
//! that gate them. The concrete moves live in the `catalog` submodule.

mod catalog;
mod conditions;

pub use self::conditions::{conditions_hold, MoveCondition};

use crate::errors::{EngineError, EngineResult};
use schema::{
    BattleStat, BattlerTagType, FieldTagType, MoveCategory, MoveId, MoveTarget, PokemonType,
    StatusEffect, WeatherType,
};
use std::collections::HashMap;
use std::sync::LazyLock;

// --- CATALOG ACCESS ---

static MOVE_CATALOG: LazyLock<HashMap<MoveId, Move>> = LazyLock::new(|| {
    catalog::all_moves()
        .into_iter()
        .map(|definition| (definition.id, definition))
        .collect()
});

/// Get the definition of a move from the catalog.
pub fn get_move(move_id: MoveId) -> EngineResult<&'static Move> {
    MOVE_CATALOG
        .get(&move_id)
        .ok_or(EngineError::MoveNotFound(move_id))
}

/// Display name of a move, falling back to the id for uncatalogued moves.
pub fn move_name(move_id: MoveId) -> String {
    get_move(move_id)
        .map(|definition| definition.name.to_string())
        .unwrap_or_else(|_| format!("{:?}", move_id))
}

/// Every catalogued move, in id order.
pub fn catalog_ids() -> Vec<MoveId> {
    let mut ids: Vec<MoveId> = MOVE_CATALOG.keys().copied().collect();
    ids.sort();
    ids
}

// --- EFFECT UNIT TYPES ---

/// When a triggered effect unit fires relative to damage resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerPhase {
    PreApply,
    Hit,
    PostApply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub phase: TriggerPhase,
    /// Affects the user rather than the target.
    pub self_target: bool,
    /// Only on the first strike of a multi-hit move.
    pub first_hit_only: bool,
}

impl Trigger {
    pub const fn on_user(phase: TriggerPhase) -> Self {
        Self {
            phase,
            self_target: true,
            first_hit_only: false,
        }
    }

    pub const fn on_target(phase: TriggerPhase) -> Self {
        Self {
            phase,
            self_target: false,
            first_hit_only: false,
        }
    }

    pub const fn first_hit(mut self) -> Self {
        self.first_hit_only = true;
        self
    }
}

/// Situations in which a move doubles its power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCondition {
    TargetStatused,
    TargetPoisoned,
    /// Burned, poisoned or paralyzed.
    UserStatused,
    UserDamagedByTarget,
    TargetActedFirst,
    TargetHidden(BattlerTagType),
    WeatherActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiHitType {
    Two,
    TwoToFive,
}

/// Coarse grouping used by the pipeline to pick which units to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    FixedDamage,
    VariablePower,
    VariableAccuracy,
    VariableType,
    CritModifier,
    HitsHidden,
    IgnoreStatStages,
    /// Charge and delayed moves that replace the normal execution on their first turn.
    ChargeOverride,
    /// Runs when the move misses a target.
    Miss,
    /// Triggered units; see `MoveAttr::trigger`.
    Effect,
}

/// One composable behavior attached to a move.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveAttr {
    // --- Damage overrides ---
    FixedDamage(u32),
    LevelDamage,
    RandomLevelDamage,
    HalfHpDamage,
    /// Return the last matching attack received, scaled.
    CounterDamage {
        category: Option<MoveCategory>,
        multiplier: f64,
    },
    OneHitKo,

    // --- Variable power, accuracy and type ---
    LowHpPower,
    TargetHpPower {
        max_power: f64,
    },
    DoublePowerWhen(PowerCondition),
    ConsecutiveUsePower {
        max_doublings: u8,
    },
    GyroBall,
    WeatherPowerPenalty,
    WeatherBallType,
    WeatherAccuracy {
        weather: WeatherType,
        accuracy: i32,
    },
    ToxicAccuracy,
    OhkoAccuracy,
    HighCritRatio,
    AlwaysCrit,
    HitsHidden(BattlerTagType),
    IgnoreStatStages,

    // --- Multi-turn ---
    Charge {
        message: &'static str,
        hide_tag: Option<BattlerTagType>,
        boost: Option<(BattleStat, i8)>,
        sun_skips: bool,
    },
    DelayedAttack {
        message: &'static str,
    },
    MultiHit(MultiHitType),
    Magnitude,
    Frenzy,
    Recharge,

    // --- Stat stages ---
    StatChange {
        stats: Vec<BattleStat>,
        levels: i8,
        trigger: Trigger,
    },
    Growth,
    BellyDrum,
    ResetAllStats,
    ResetTargetStats,
    CopyStatStages,
    InvertStatStages,
    Curse,

    // --- Status ---
    InflictStatus {
        effect: StatusEffect,
        self_target: bool,
    },
    TriAttackStatus,
    Rest,
    CureStatus,
    PartyCure {
        message: &'static str,
    },

    // --- Battler tags ---
    AddTag {
        tag: BattlerTagType,
        min_turns: i32,
        max_turns: i32,
        trigger: Trigger,
        fail_on_overlap: bool,
    },
    Confuse,
    Flinch,
    Protect(BattlerTagType),
    Substitute,

    // --- Hit points ---
    HealFraction {
        fraction: f64,
        self_target: bool,
    },
    WeatherHeal,
    Drain(f64),
    Recoil(f64),
    Sacrifice,
    CrashDamage(f64),
    PainSplit,

    // --- Switching and copying ---
    ForceSwitch {
        self_switch: bool,
    },
    Transform,
    CopyMove,
    RandomMove {
        from_moveset: bool,
    },
    Conversion,

    // --- Field ---
    WeatherChange(WeatherType),
    ClearWeather(WeatherType),
    AddFieldTag {
        tag: FieldTagType,
        turns: i32,
    },
    ClearHazards {
        own_side_only: bool,
    },
    NoEffect(&'static str),
}

impl MoveAttr {
    pub fn stat_change(stats: &[BattleStat], levels: i8, self_target: bool) -> Self {
        let trigger = if self_target {
            Trigger::on_user(TriggerPhase::PostApply)
        } else {
            Trigger::on_target(TriggerPhase::PostApply)
        };
        MoveAttr::StatChange {
            stats: stats.to_vec(),
            levels,
            trigger,
        }
    }

    pub fn status(effect: StatusEffect) -> Self {
        MoveAttr::InflictStatus {
            effect,
            self_target: false,
        }
    }

    pub fn add_tag(tag: BattlerTagType, turns: i32, self_target: bool) -> Self {
        MoveAttr::AddTag {
            tag,
            min_turns: turns,
            max_turns: turns,
            trigger: if self_target {
                Trigger::on_user(TriggerPhase::PostApply)
            } else {
                Trigger::on_target(TriggerPhase::PostApply)
            },
            fail_on_overlap: true,
        }
    }

    pub fn trap() -> Self {
        MoveAttr::AddTag {
            tag: BattlerTagType::Trapped,
            min_turns: 4,
            max_turns: 5,
            trigger: Trigger::on_target(TriggerPhase::Hit),
            fail_on_overlap: false,
        }
    }

    pub fn heal(fraction: f64) -> Self {
        MoveAttr::HealFraction {
            fraction,
            self_target: true,
        }
    }

    pub fn kind(&self) -> AttrKind {
        use MoveAttr::*;
        match self {
            FixedDamage(_) | LevelDamage | RandomLevelDamage | HalfHpDamage | CounterDamage { .. }
            | OneHitKo => AttrKind::FixedDamage,
            LowHpPower | TargetHpPower { .. } | DoublePowerWhen(_) | ConsecutiveUsePower { .. }
            | GyroBall | WeatherPowerPenalty => AttrKind::VariablePower,
            WeatherBallType => AttrKind::VariableType,
            WeatherAccuracy { .. } | ToxicAccuracy | OhkoAccuracy => AttrKind::VariableAccuracy,
            HighCritRatio | AlwaysCrit => AttrKind::CritModifier,
            HitsHidden(_) => AttrKind::HitsHidden,
            IgnoreStatStages => AttrKind::IgnoreStatStages,
            Charge { .. } | DelayedAttack { .. } => AttrKind::ChargeOverride,
            CrashDamage(_) => AttrKind::Miss,
            _ => AttrKind::Effect,
        }
    }

    /// Whether this unit belongs to `kind`. A sacrifice also runs on a miss.
    pub fn is_kind(&self, kind: AttrKind) -> bool {
        self.kind() == kind || (kind == AttrKind::Miss && matches!(self, MoveAttr::Sacrifice))
    }

    /// Trigger phase and affinity of a triggered unit.
    pub fn trigger(&self) -> Option<Trigger> {
        use MoveAttr::*;
        use TriggerPhase::*;
        let trigger = match self {
            StatChange { trigger, .. } | AddTag { trigger, .. } => *trigger,
            MultiHit(_) | Magnitude => Trigger::on_user(PreApply),
            InflictStatus { self_target, .. } => {
                if *self_target {
                    Trigger::on_user(Hit)
                } else {
                    Trigger::on_target(Hit)
                }
            }
            TriAttackStatus | Confuse | Flinch | ResetTargetStats => Trigger::on_target(Hit),
            Drain(_) => Trigger::on_user(Hit),
            HealFraction { self_target, .. } => {
                if *self_target {
                    Trigger::on_user(PostApply)
                } else {
                    Trigger::on_target(PostApply)
                }
            }
            ForceSwitch { self_switch } => {
                if *self_switch {
                    Trigger::on_user(PostApply)
                } else {
                    Trigger::on_target(PostApply)
                }
            }
            CopyStatStages | InvertStatStages | Transform | CopyMove | PainSplit => {
                Trigger::on_target(PostApply)
            }
            Growth | BellyDrum | ResetAllStats | Curse | Rest | CureStatus | PartyCure { .. }
            | Protect(_) | Substitute | WeatherHeal | Recoil(_) | Sacrifice | Frenzy | Recharge
            | RandomMove { .. } | Conversion | WeatherChange(_) | ClearWeather(_)
            | AddFieldTag { .. } | ClearHazards { .. } | NoEffect(_) => Trigger::on_user(PostApply),
            _ => return None,
        };
        Some(trigger)
    }

    /// Condition implied by attaching this unit to a move of `category`.
    pub fn derived_condition(&self, category: MoveCategory) -> Option<MoveCondition> {
        use MoveAttr::*;
        let status_move = category == MoveCategory::Status;
        match self {
            InflictStatus {
                effect,
                self_target: false,
            } if status_move => Some(MoveCondition::CanInflictStatus(*effect)),
            AddTag {
                tag,
                trigger,
                fail_on_overlap: true,
                ..
            } => Some(MoveCondition::BattlerTagAbsent {
                tag: *tag,
                self_target: trigger.self_target,
            }),
            Confuse if status_move => Some(MoveCondition::BattlerTagAbsent {
                tag: BattlerTagType::Confused,
                self_target: false,
            }),
            Rest => Some(MoveCondition::NotFullHp { self_target: true }),
            Substitute => Some(MoveCondition::UserHpAbove(0.25)),
            BellyDrum => Some(MoveCondition::UserHpAbove(0.5)),
            HealFraction { self_target, .. } => Some(MoveCondition::NotFullHp {
                self_target: *self_target,
            }),
            WeatherHeal => Some(MoveCondition::NotFullHp { self_target: true }),
            CounterDamage { category, .. } => Some(MoveCondition::ReceivedAttack {
                category: *category,
            }),
            OneHitKo => Some(MoveCondition::UserLevelAtLeastTarget),
            WeatherChange(weather) => Some(MoveCondition::WeatherChangeable(*weather)),
            AddFieldTag { tag, .. } => Some(MoveCondition::FieldTagCanStack(*tag)),
            CopyMove => Some(MoveCondition::CopyableLastMove),
            CureStatus => Some(MoveCondition::UserHasStatus),
            InvertStatStages => Some(MoveCondition::TargetHasStatStages),
            ForceSwitch { self_switch: false } if status_move => {
                Some(MoveCondition::CanSwitchOut { self_target: false })
            }
            RandomMove { from_moveset: true } => Some(MoveCondition::UserAsleep),
            _ => None,
        }
    }
}

// --- MOVE DEFINITION ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    pub make_contact: bool,
    pub ignore_protect: bool,
    /// Cannot be called by another move (Metronome, Mirror Move, Sleep Talk).
    pub ignore_virtual: bool,
    pub sound_based: bool,
    pub hides_user: bool,
    pub hides_target: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub id: MoveId,
    pub name: &'static str,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub target: MoveTarget,
    /// -1 when the move has no base power.
    pub power: i32,
    /// -1 when the move never misses.
    pub accuracy: i32,
    pub pp: u8,
    /// Secondary effect chance in percent; -1 means always.
    pub chance: i32,
    pub priority: i8,
    pub generation: u8,
    pub attrs: Vec<MoveAttr>,
    pub conditions: Vec<MoveCondition>,
    pub flags: MoveFlags,
}

impl Move {
    #[allow(clippy::too_many_arguments)]
    pub fn attack(
        id: MoveId,
        name: &'static str,
        move_type: PokemonType,
        category: MoveCategory,
        power: i32,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i8,
        generation: u8,
    ) -> Self {
        Self {
            id,
            name,
            move_type,
            category,
            target: MoveTarget::NearOther,
            power,
            accuracy,
            pp,
            chance,
            priority,
            generation,
            attrs: Vec::new(),
            conditions: Vec::new(),
            flags: MoveFlags {
                make_contact: category == MoveCategory::Physical,
                ..MoveFlags::default()
            },
        }
    }

    /// A status move aimed at another combatant.
    pub fn status(
        id: MoveId,
        name: &'static str,
        move_type: PokemonType,
        accuracy: i32,
        pp: u8,
        priority: i8,
        generation: u8,
    ) -> Self {
        Self::attack(
            id,
            name,
            move_type,
            MoveCategory::Status,
            -1,
            accuracy,
            pp,
            -1,
            priority,
            generation,
        )
    }

    /// A status move the user aims at itself.
    pub fn self_status(
        id: MoveId,
        name: &'static str,
        move_type: PokemonType,
        pp: u8,
        priority: i8,
        generation: u8,
    ) -> Self {
        Self::status(id, name, move_type, -1, pp, priority, generation).target(MoveTarget::User)
    }

    /// Attach an effect unit, along with the condition it implies.
    pub fn attr(mut self, attr: MoveAttr) -> Self {
        if let Some(condition) = attr.derived_condition(self.category) {
            self.conditions.push(condition);
        }
        self.attrs.push(attr);
        self
    }

    pub fn condition(mut self, condition: MoveCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn target(mut self, target: MoveTarget) -> Self {
        self.target = target;
        self
    }

    pub fn make_contact(mut self, make_contact: bool) -> Self {
        self.flags.make_contact = make_contact;
        self
    }

    pub fn ignores_protect(mut self) -> Self {
        self.flags.ignore_protect = true;
        self
    }

    pub fn ignores_virtual(mut self) -> Self {
        self.flags.ignore_virtual = true;
        self
    }

    pub fn sound_based(mut self) -> Self {
        self.flags.sound_based = true;
        self
    }

    pub fn hides_user(mut self) -> Self {
        self.flags.hides_user = true;
        self
    }

    pub fn hides_target(mut self) -> Self {
        self.flags.hides_target = true;
        self
    }

    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    pub fn has_attr(&self, predicate: impl Fn(&MoveAttr) -> bool) -> bool {
        self.attrs.iter().any(predicate)
    }

    /// Whether a secondary effect needs no roll.
    pub fn effect_always_applies(&self) -> bool {
        self.chance < 0 || self.chance >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_move_id_has_a_definition() {
        for move_id in MoveId::iter() {
            let definition = get_move(move_id);
            assert!(definition.is_ok(), "missing catalog entry for {:?}", move_id);
            assert_eq!(definition.unwrap().id, move_id);
        }
    }

    #[test]
    fn test_attaching_attr_appends_derived_condition() {
        let thunder_wave = get_move(MoveId::ThunderWave).unwrap();
        assert!(thunder_wave
            .conditions
            .contains(&MoveCondition::CanInflictStatus(StatusEffect::Paralysis)));

        // Secondary statuses on attacks do not gate the move.
        let thunderbolt = get_move(MoveId::Thunderbolt).unwrap();
        assert!(thunderbolt.conditions.is_empty());
    }

    #[test]
    fn test_physical_moves_make_contact_by_default() {
        assert!(get_move(MoveId::Tackle).unwrap().flags.make_contact);
        assert!(!get_move(MoveId::Flamethrower).unwrap().flags.make_contact);
        assert!(!get_move(MoveId::Earthquake).unwrap().flags.make_contact);
    }

    #[test]
    fn test_catalog_names_are_unique_and_span_every_generation() {
        let moves: Vec<&Move> = catalog_ids().into_iter().map(|id| get_move(id).unwrap()).collect();
        let names: std::collections::HashSet<&str> = moves.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), moves.len());
        for generation in 1..=9u8 {
            assert!(
                moves.iter().any(|m| m.generation == generation),
                "no moves from generation {}",
                generation
            );
        }
    }

    #[test]
    fn test_stat_change_rows_carry_a_real_stage_delta() {
        for move_id in catalog_ids() {
            let definition = get_move(move_id).unwrap();
            for attr in &definition.attrs {
                if let MoveAttr::StatChange { stats, levels, .. } = attr {
                    assert!(!stats.is_empty(), "{:?} changes no stats", move_id);
                    assert!(*levels != 0 && levels.abs() <= 3, "{:?} has delta {}", move_id, levels);
                }
            }
        }
    }

    #[test]
    fn test_move_name_uses_catalog() {
        assert_eq!(move_name(MoveId::StealthRock), "Stealth Rock");
        assert_eq!(catalog_ids().len(), MoveId::iter().count());
    }

    #[test]
    fn test_triggered_units_declare_affinity() {
        let close_combat = get_move(MoveId::CloseCombat).unwrap();
        let trigger = close_combat.attrs[0].trigger().unwrap();
        assert!(trigger.self_target);
        assert_eq!(trigger.phase, TriggerPhase::PostApply);
        assert_eq!(MoveAttr::HighCritRatio.trigger(), None);
        assert!(MoveAttr::Sacrifice.is_kind(AttrKind::Miss));
    }
}
