// In: src/move_data/conditions.rs

use super::{get_move, Move};
use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::context::BattleContext;
use crate::battle::state::BattlerIndex;
use schema::{
    BattleStat, BattlerTagType, FieldTagType, MoveCategory, PokemonType, StatusEffect, WeatherType,
};

/// A precondition that must hold before any of a move's effects run.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveCondition {
    FirstTurnOnField,
    UserAsleep,
    TargetAsleep,
    CanInflictStatus(StatusEffect),
    UserLevelAtLeastTarget,
    WeatherChangeable(WeatherType),
    FieldTagCanStack(FieldTagType),
    BattlerTagAbsent {
        tag: BattlerTagType,
        self_target: bool,
    },
    /// User's HP ratio is strictly above this fraction.
    UserHpAbove(f64),
    UserStatBelowMax(BattleStat),
    NotFullHp {
        self_target: bool,
    },
    CopyableLastMove,
    TargetNotOfType(PokemonType),
    ReceivedAttack {
        category: Option<MoveCategory>,
    },
    UserHasStatus,
    TargetHasStatStages,
    CanSwitchOut {
        self_target: bool,
    },
}

impl MoveCondition {
    pub fn check(
        &self,
        ctx: &BattleContext,
        user: BattlerIndex,
        target: Option<BattlerIndex>,
        _move_data: &Move,
    ) -> bool {
        let Some(user_mon) = ctx.combatant(user) else {
            return false;
        };
        let target_mon = target.and_then(|slot| ctx.combatant(slot));

        match self {
            MoveCondition::FirstTurnOnField => user_mon.first_turn_on_field(),
            MoveCondition::UserAsleep => user_mon.status_effect() == Some(StatusEffect::Sleep),
            MoveCondition::TargetAsleep => {
                target_mon.is_some_and(|t| t.status_effect() == Some(StatusEffect::Sleep))
            }
            MoveCondition::CanInflictStatus(effect) => {
                target_mon.map_or(true, |t| t.can_set_status(*effect))
            }
            MoveCondition::UserLevelAtLeastTarget => {
                target_mon.map_or(true, |t| user_mon.level >= t.level)
            }
            MoveCondition::WeatherChangeable(weather_type) => {
                let current = ctx.field.weather();
                current.map_or(true, |weather| {
                    weather.weather_type != *weather_type && !weather.is_immutable()
                })
            }
            MoveCondition::FieldTagCanStack(tag_type) => match ctx.field.get_tag(*tag_type) {
                Some(tag) => tag.is_stacking() && tag.layers < tag.max_layers,
                None => true,
            },
            MoveCondition::BattlerTagAbsent { tag, self_target } => {
                let holder = if *self_target { Some(user_mon) } else { target_mon };
                holder.map_or(true, |holder| !holder.has_tag(*tag))
            }
            MoveCondition::UserHpAbove(fraction) => user_mon.hp_ratio() > *fraction,
            MoveCondition::UserStatBelowMax(stat) => user_mon.stat_stage(*stat) < 6,
            MoveCondition::NotFullHp { self_target } => {
                let holder = if *self_target { Some(user_mon) } else { target_mon };
                holder.is_some_and(|holder| !holder.is_full_hp())
            }
            MoveCondition::CopyableLastMove => target_mon
                .and_then(|t| t.last_move())
                .and_then(|last| get_move(last.move_id).ok())
                .is_some_and(|last| !last.flags.ignore_virtual),
            MoveCondition::TargetNotOfType(pokemon_type) => {
                target_mon.map_or(true, |t| !t.is_of_type(*pokemon_type))
            }
            MoveCondition::ReceivedAttack { category } => {
                user_mon.last_attack_received().is_some_and(|record| {
                    record.damage > 0 && category.map_or(true, |c| record.category == c)
                })
            }
            MoveCondition::UserHasStatus => user_mon.status.is_some(),
            MoveCondition::TargetHasStatStages => {
                target_mon.is_some_and(|t| t.stat_stages.values().any(|stage| *stage != 0))
            }
            MoveCondition::CanSwitchOut { self_target } => {
                let slot = if *self_target { Some(user) } else { target };
                slot.is_some_and(|slot| {
                    ctx.bench_for(slot).iter().any(|member| !member.is_fainted())
                        && !ctx
                            .combatant(slot)
                            .is_some_and(|c| c.has_tag(BattlerTagType::Ingrain))
                })
            }
        }
    }
}

/// All of a move's conditions, short-circuiting on the first failure.
pub fn conditions_hold(
    ctx: &BattleContext,
    user: BattlerIndex,
    target: Option<BattlerIndex>,
    move_data: &Move,
) -> bool {
    move_data
        .conditions
        .iter()
        .all(|condition| condition.check(ctx, user, target, move_data))
}
