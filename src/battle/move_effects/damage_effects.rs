// In: src/battle/move_effects/damage_effects.rs

// --- IMPORTS ---
use super::AttrArgs;
use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::context::BattleContext;
use crate::battle::damage::apply_stat_stage_multiplier;
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::{Move, PowerCondition};
use schema::{
    BattleStat, BattlerTagType, MoveCategory, MoveResult, PokemonType, StatusEffect, WeatherType,
};

// --- DAMAGE OVERRIDES ---

pub(super) fn apply_fixed_damage(amount: u32, args: &mut AttrArgs) -> bool {
    args.fixed_damage = Some(amount);
    true
}

pub(super) fn apply_level_damage(
    ctx: &BattleContext,
    user: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    args.fixed_damage = Some(ctx.get(user)?.level as u32);
    Ok(true)
}

/// Psywave: level x (50..=150)% in steps of ten, at least 1.
pub(super) fn apply_random_level_damage(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let level = ctx.get(user)?.level as u32;
    let percent = 50 + 10 * ctx.rng.rand_int(11, "Psywave Damage");
    args.fixed_damage = Some((level * percent / 100).max(1));
    Ok(true)
}

pub(super) fn apply_half_hp_damage(
    ctx: &BattleContext,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    args.fixed_damage = Some((ctx.get(target)?.hp / 2).max(1));
    Ok(true)
}

/// Return the last attack received this turn, optionally of one category.
pub(super) fn apply_counter_damage(
    category: Option<MoveCategory>,
    multiplier: f64,
    ctx: &BattleContext,
    user: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let received = ctx
        .get(user)?
        .turn_data
        .attacks_received
        .iter()
        .rev()
        .find(|record| record.damage > 0 && category.map_or(true, |c| record.category == c));
    match received {
        Some(record) => {
            args.fixed_damage = Some(((record.damage as f64 * multiplier).floor() as u32).max(1));
            Ok(true)
        }
        None => Ok(false),
    }
}

pub(super) fn apply_one_hit_ko(
    ctx: &mut BattleContext,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let target_mon = ctx.get(target)?;
    args.fixed_damage = Some(target_mon.hp.max(1));
    ctx.scheduler.queue_message("It's a one-hit KO!");
    Ok(true)
}

// --- VARIABLE POWER ---

/// Flail and Reversal: stronger the less HP the user has left.
pub(super) fn apply_low_hp_power(
    ctx: &BattleContext,
    user: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    let ratio = user_mon.hp * 48 / user_mon.max_hp().max(1);
    args.power = match ratio {
        0..=1 => 200.0,
        2..=4 => 150.0,
        5..=9 => 100.0,
        10..=16 => 80.0,
        17..=32 => 40.0,
        _ => 20.0,
    };
    Ok(true)
}

pub(super) fn apply_target_hp_power(
    max_power: f64,
    ctx: &BattleContext,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let target_mon = ctx.get(target)?;
    args.power = (max_power * target_mon.hp_ratio()).floor().max(1.0);
    Ok(true)
}

pub(super) fn apply_double_power_when(
    condition: PowerCondition,
    ctx: &BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    let target_mon = ctx.get(target)?;
    let holds = match condition {
        PowerCondition::TargetStatused => target_mon.status.is_some(),
        PowerCondition::TargetPoisoned => matches!(
            target_mon.status_effect(),
            Some(StatusEffect::Poison | StatusEffect::Toxic)
        ),
        PowerCondition::UserStatused => matches!(
            user_mon.status_effect(),
            Some(
                StatusEffect::Burn
                    | StatusEffect::Poison
                    | StatusEffect::Toxic
                    | StatusEffect::Paralysis
            )
        ),
        PowerCondition::UserDamagedByTarget => user_mon
            .turn_data
            .attacks_received
            .iter()
            .any(|record| record.source == target && record.damage > 0),
        PowerCondition::TargetActedFirst => target_mon.turn_data.acted,
        PowerCondition::TargetHidden(tag) => target_mon.has_tag(tag),
        PowerCondition::WeatherActive => ctx.field.effective_weather_type().is_some(),
    };
    if holds {
        args.power *= 2.0;
    }
    Ok(holds)
}

/// Doubles for each consecutive successful use just before this one.
pub(super) fn apply_consecutive_use_power(
    max_doublings: u8,
    ctx: &BattleContext,
    user: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let streak = ctx
        .get(user)?
        .move_history
        .iter()
        .rev()
        .take_while(|turn| turn.move_id == move_data.id && turn.result == MoveResult::Success)
        .count()
        .min(max_doublings as usize);
    args.power *= 2f64.powi(streak as i32);
    Ok(streak > 0)
}

pub(super) fn apply_gyro_ball(
    ctx: &BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let speed = |slot: BattlerIndex| -> EngineResult<f64> {
        let combatant = ctx.get(slot)?;
        Ok(apply_stat_stage_multiplier(
            combatant.battle_stats().speed,
            combatant.stat_stage(BattleStat::Speed),
        )
        .max(1.0))
    };
    let user_speed = speed(user)?;
    let target_speed = speed(target)?;
    args.power = (25.0 * target_speed / user_speed + 1.0).floor().min(150.0);
    Ok(true)
}

/// Solar Beam loses half its power outside of clear skies and sun.
pub(super) fn apply_weather_power_penalty(ctx: &BattleContext, args: &mut AttrArgs) -> bool {
    let penalized = matches!(
        ctx.field.effective_weather_type(),
        Some(WeatherType::Rain | WeatherType::HeavyRain | WeatherType::Sandstorm | WeatherType::Hail)
    );
    if penalized {
        args.power *= 0.5;
    }
    penalized
}

pub(super) fn apply_weather_ball_type(ctx: &BattleContext, args: &mut AttrArgs) -> bool {
    let move_type = match ctx.field.effective_weather_type() {
        Some(WeatherType::Sunny | WeatherType::HarshSun) => PokemonType::Fire,
        Some(WeatherType::Rain | WeatherType::HeavyRain) => PokemonType::Water,
        Some(WeatherType::Sandstorm) => PokemonType::Rock,
        Some(WeatherType::Hail) => PokemonType::Ice,
        _ => return false,
    };
    args.move_type = move_type;
    true
}

// --- ACCURACY AND VISIBILITY ---

pub(super) fn apply_weather_accuracy(
    weather: WeatherType,
    accuracy: i32,
    ctx: &BattleContext,
    args: &mut AttrArgs,
) -> bool {
    let active = ctx.field.effective_weather_type();
    let matches = active == Some(weather)
        || (weather == WeatherType::Rain && active == Some(WeatherType::HeavyRain))
        || (weather == WeatherType::Sunny && active == Some(WeatherType::HarshSun));
    if matches {
        args.accuracy = accuracy;
    }
    matches
}

/// Toxic never misses when a Poison type uses it.
pub(super) fn apply_toxic_accuracy(
    ctx: &BattleContext,
    user: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let poison_user = ctx.get(user)?.is_of_type(PokemonType::Poison);
    if poison_user {
        args.accuracy = -1;
    }
    Ok(poison_user)
}

pub(super) fn apply_ohko_accuracy(
    ctx: &BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let user_level = ctx.get(user)?.level as f64;
    let target_level = ctx.get(target)?.level as f64;
    args.accuracy = if user_level < target_level {
        0
    } else {
        (30.0 + 100.0 * (1.0 - target_level / user_level)).clamp(0.0, 100.0) as i32
    };
    Ok(true)
}

pub(super) fn apply_hits_hidden(
    tag: BattlerTagType,
    ctx: &BattleContext,
    target: BattlerIndex,
    args: &mut AttrArgs,
) -> bool {
    let hidden = ctx.combatant(target).is_some_and(|t| t.has_tag(tag));
    if hidden {
        args.hits_hidden = true;
    }
    hidden
}

// --- HIT POINTS ---

fn heal_amount(max_hp: u32, fraction: f64) -> u32 {
    ((max_hp as f64 * fraction).floor() as u32).max(1)
}

pub(super) fn apply_heal_fraction(
    fraction: f64,
    ctx: &mut BattleContext,
    holder: BattlerIndex,
) -> EngineResult<bool> {
    let (holder_mon, scheduler) = ctx.get_with_scheduler(holder)?;
    if holder_mon.is_full_hp() {
        return Ok(false);
    }
    holder_mon.heal(heal_amount(holder_mon.max_hp(), fraction));
    scheduler.unshift_phase(Phase::CommonAnim {
        slot: Some(holder),
        anim: CommonAnim::Health,
    });
    scheduler.queue_message(format!("{}\nhad its HP restored.", holder_mon.name));
    Ok(true)
}

/// Morning Sun, Synthesis, Moonlight.
pub(super) fn apply_weather_heal(ctx: &mut BattleContext, user: BattlerIndex) -> EngineResult<bool> {
    let fraction = match ctx.field.effective_weather_type() {
        None | Some(WeatherType::StrongWinds) => 0.5,
        Some(WeatherType::Sunny | WeatherType::HarshSun) => 2.0 / 3.0,
        Some(_) => 0.25,
    };
    apply_heal_fraction(fraction, ctx, user)
}

/// Heal the user by a share of the damage this hit dealt.
pub(super) fn apply_drain(
    fraction: f64,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    args: &AttrArgs,
) -> EngineResult<bool> {
    if args.damage_dealt == 0 {
        return Ok(false);
    }
    let target_name = ctx.name_of(target);
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let healed = user_mon.heal(((args.damage_dealt as f64 * fraction).floor() as u32).max(1));
    scheduler.queue_message(format!("{} had its\nenergy drained!", target_name));
    Ok(healed > 0)
}

pub(super) fn apply_recoil(
    fraction: f64,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    args: &AttrArgs,
) -> EngineResult<bool> {
    if args.damage_dealt == 0 {
        return Ok(false);
    }
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    user_mon.damage(((args.damage_dealt as f64 * fraction).floor() as u32).max(1));
    scheduler.queue_message(format!("{} is hit\nwith recoil!", user_mon.name));
    Ok(true)
}

pub(super) fn apply_sacrifice(ctx: &mut BattleContext, user: BattlerIndex) -> EngineResult<bool> {
    let user_mon = ctx.get_mut(user)?;
    let hp = user_mon.hp;
    Ok(user_mon.damage(hp) > 0)
}

/// Jump Kick family: the user hurts itself when the attack misses.
pub(super) fn apply_crash_damage(
    fraction: f64,
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    if user_mon.is_fainted() {
        return Ok(false);
    }
    user_mon.damage(user_mon.hp_fraction(fraction));
    scheduler.queue_message(format!("{} kept going\nand crashed!", user_mon.name));
    Ok(true)
}

pub(super) fn apply_pain_split(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
) -> EngineResult<bool> {
    let total = ctx.get(user)?.hp + ctx.get(target)?.hp;
    let average = total.div_ceil(2);
    for slot in [user, target] {
        let combatant = ctx.get_mut(slot)?;
        if combatant.hp > average {
            let excess = combatant.hp - average;
            combatant.damage(excess);
        } else {
            let missing = average - combatant.hp;
            combatant.heal(missing);
        }
    }
    ctx.scheduler.queue_message("The battlers shared their pain!");
    Ok(true)
}
