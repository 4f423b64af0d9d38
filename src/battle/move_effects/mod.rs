// In: src/battle/move_effects/mod.rs

// --- HELPER MODULES ---
mod damage_effects;
mod field_effects;
mod special_effects;
mod stat_effects;
mod status_effects;

pub(crate) use self::special_effects::switch_in;

// --- IMPORTS ---
use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::context::BattleContext;
use crate::battle::scheduler::PresentationTicket;
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::{AttrKind, Move, MoveAttr, MoveCondition, TriggerPhase};
use schema::{BattlerTagType, MoveCategory, PokemonType, StatusEffect};
use self::{damage_effects::*, field_effects::*, special_effects::*, stat_effects::*, status_effects::*};

// --- PIPELINE TYPES ---

/// Mutable values threaded through one use of a move.
#[derive(Debug, Clone)]
pub struct AttrArgs {
    pub power: f64,
    pub accuracy: i32,
    pub move_type: PokemonType,
    pub fixed_damage: Option<u32>,
    pub hit_count: u8,
    pub crit_stage: u8,
    pub guaranteed_crit: bool,
    /// Set by a charge or delay unit when this use only prepares the move.
    pub charging: bool,
    /// This use was queued by an earlier turn (second half of a charge, rampage).
    pub forced: bool,
    /// Damage of the current hit while HIT units run; the move's total afterwards.
    pub damage_dealt: u32,
    pub hits_hidden: bool,
    pub ignore_stat_stages: bool,
    pub first_hit: bool,
}

impl AttrArgs {
    pub fn for_move(move_data: &Move) -> Self {
        Self {
            power: move_data.power as f64,
            accuracy: move_data.accuracy,
            move_type: move_data.move_type,
            fixed_damage: None,
            hit_count: 1,
            crit_stage: 0,
            guaranteed_crit: false,
            charging: false,
            forced: false,
            damage_dealt: 0,
            hits_hidden: false,
            ignore_stat_stages: false,
            first_hit: true,
        }
    }
}

/// Completion step run once a pending unit's presentation has finished.
pub type Resume = Box<dyn FnOnce(&mut BattleContext) -> EngineResult<bool>>;

/// Result of one unit's synchronous call.
pub enum AttrOutcome {
    Done(bool),
    Pending {
        ticket: PresentationTicket,
        resume: Resume,
    },
}

impl AttrOutcome {
    fn done(applied: bool) -> EngineResult<AttrOutcome> {
        Ok(AttrOutcome::Done(applied))
    }
}

/// Which units of a move a pipeline run invokes.
#[derive(Debug, Clone, Copy)]
pub enum AttrFilter {
    Kind(AttrKind),
    Triggered {
        phase: TriggerPhase,
        self_target: Option<bool>,
    },
    Where(fn(&MoveAttr) -> bool),
}

impl AttrFilter {
    pub fn matches(&self, attr: &MoveAttr) -> bool {
        match self {
            AttrFilter::Kind(kind) => attr.is_kind(*kind),
            AttrFilter::Triggered { phase, self_target } => attr.trigger().is_some_and(|trigger| {
                trigger.phase == *phase && self_target.map_or(true, |s| s == trigger.self_target)
            }),
            AttrFilter::Where(predicate) => predicate(attr),
        }
    }
}

// --- THE EFFECT UNIT CONTRACT ---

pub trait EffectUnit {
    fn apply(
        &self,
        ctx: &mut BattleContext,
        user: BattlerIndex,
        target: BattlerIndex,
        move_data: &Move,
        args: &mut AttrArgs,
    ) -> EngineResult<AttrOutcome>;

    fn condition(&self, move_data: &Move) -> Option<MoveCondition>;

    /// How much using this unit helps the user. Never mutates.
    fn user_benefit(&self, ctx: &BattleContext, user: BattlerIndex, target: BattlerIndex, move_data: &Move) -> f64;

    /// How much this unit helps the target (negative when it hurts it).
    fn target_benefit(&self, ctx: &BattleContext, user: BattlerIndex, target: BattlerIndex, move_data: &Move) -> f64;
}

impl EffectUnit for MoveAttr {
    fn apply(
        &self,
        ctx: &mut BattleContext,
        user: BattlerIndex,
        target: BattlerIndex,
        move_data: &Move,
        args: &mut AttrArgs,
    ) -> EngineResult<AttrOutcome> {
        match self {
            // Damage overrides
            Self::FixedDamage(amount) => AttrOutcome::done(apply_fixed_damage(*amount, args)),
            Self::LevelDamage => AttrOutcome::done(apply_level_damage(ctx, user, args)?),
            Self::RandomLevelDamage => AttrOutcome::done(apply_random_level_damage(ctx, user, args)?),
            Self::HalfHpDamage => AttrOutcome::done(apply_half_hp_damage(ctx, target, args)?),
            Self::CounterDamage {
                category,
                multiplier,
            } => AttrOutcome::done(apply_counter_damage(*category, *multiplier, ctx, user, args)?),
            Self::OneHitKo => AttrOutcome::done(apply_one_hit_ko(ctx, target, args)?),

            // Power, accuracy, type and crit modifiers
            Self::LowHpPower => AttrOutcome::done(apply_low_hp_power(ctx, user, args)?),
            Self::TargetHpPower { max_power } => {
                AttrOutcome::done(apply_target_hp_power(*max_power, ctx, target, args)?)
            }
            Self::DoublePowerWhen(condition) => {
                AttrOutcome::done(apply_double_power_when(*condition, ctx, user, target, args)?)
            }
            Self::ConsecutiveUsePower { max_doublings } => AttrOutcome::done(
                apply_consecutive_use_power(*max_doublings, ctx, user, move_data, args)?,
            ),
            Self::GyroBall => AttrOutcome::done(apply_gyro_ball(ctx, user, target, args)?),
            Self::WeatherPowerPenalty => AttrOutcome::done(apply_weather_power_penalty(ctx, args)),
            Self::WeatherBallType => AttrOutcome::done(apply_weather_ball_type(ctx, args)),
            Self::WeatherAccuracy { weather, accuracy } => {
                AttrOutcome::done(apply_weather_accuracy(*weather, *accuracy, ctx, args))
            }
            Self::ToxicAccuracy => AttrOutcome::done(apply_toxic_accuracy(ctx, user, args)?),
            Self::OhkoAccuracy => AttrOutcome::done(apply_ohko_accuracy(ctx, user, target, args)?),
            Self::HighCritRatio => {
                args.crit_stage += 1;
                AttrOutcome::done(true)
            }
            Self::AlwaysCrit => {
                args.guaranteed_crit = true;
                AttrOutcome::done(true)
            }
            Self::HitsHidden(tag) => AttrOutcome::done(apply_hits_hidden(*tag, ctx, target, args)),
            Self::IgnoreStatStages => {
                args.ignore_stat_stages = true;
                AttrOutcome::done(true)
            }

            // Multi-turn
            Self::Charge {
                message,
                hide_tag,
                boost,
                sun_skips,
            } => apply_charge_special(*message, *hide_tag, *boost, *sun_skips, ctx, user, move_data, args),
            Self::DelayedAttack { message } => apply_delayed_attack_special(*message, ctx, user, move_data, args),
            Self::MultiHit(multi_hit) => AttrOutcome::done(apply_multi_hit_special(*multi_hit, ctx, args)),
            Self::Magnitude => AttrOutcome::done(apply_magnitude_special(ctx, args)),
            Self::Frenzy => AttrOutcome::done(apply_frenzy_special(ctx, user, target, move_data)?),
            Self::Recharge => AttrOutcome::done(apply_recharge_special(ctx, user, move_data)?),

            // Stat stages
            Self::StatChange { stats, levels, trigger } => {
                let holder = if trigger.self_target { user } else { target };
                AttrOutcome::done(apply_stat_change_effect(stats, *levels, ctx, holder)?)
            }
            Self::Growth => AttrOutcome::done(apply_growth_effect(ctx, user)?),
            Self::BellyDrum => AttrOutcome::done(apply_belly_drum_effect(ctx, user)?),
            Self::ResetAllStats => AttrOutcome::done(apply_haze_effect(ctx)),
            Self::ResetTargetStats => AttrOutcome::done(apply_clear_target_stats_effect(ctx, target)?),
            Self::CopyStatStages => AttrOutcome::done(apply_copy_stat_stages_effect(ctx, user, target)?),
            Self::InvertStatStages => AttrOutcome::done(apply_invert_stat_stages_effect(ctx, target)?),
            Self::Curse => AttrOutcome::done(apply_curse_effect(ctx, user, target, move_data)?),

            // Status
            Self::InflictStatus {
                effect,
                self_target,
            } => {
                let holder = if *self_target { user } else { target };
                AttrOutcome::done(apply_status_effect(*effect, ctx, holder)?)
            }
            Self::TriAttackStatus => AttrOutcome::done(apply_tri_attack_effect(ctx, target)?),
            Self::Rest => AttrOutcome::done(apply_rest_effect(ctx, user)?),
            Self::CureStatus => AttrOutcome::done(apply_cure_status_effect(ctx, user)?),
            Self::PartyCure { message } => AttrOutcome::done(apply_party_cure_effect(message, ctx, user)),

            // Battler tags
            Self::AddTag {
                tag,
                min_turns,
                max_turns,
                trigger,
                ..
            } => {
                let holder = if trigger.self_target { user } else { target };
                AttrOutcome::done(apply_add_tag_effect(
                    *tag, *min_turns, *max_turns, ctx, user, holder, move_data,
                )?)
            }
            Self::Confuse => AttrOutcome::done(apply_confuse_effect(ctx, user, target, move_data)?),
            Self::Flinch => AttrOutcome::done(apply_flinch_effect(ctx, user, target, move_data)?),
            Self::Protect(tag) => AttrOutcome::done(apply_protect_effect(*tag, ctx, user, move_data)?),
            Self::Substitute => AttrOutcome::done(apply_substitute_effect(ctx, user, move_data)?),

            // Hit points
            Self::HealFraction {
                fraction,
                self_target,
            } => {
                let holder = if *self_target { user } else { target };
                AttrOutcome::done(apply_heal_fraction(*fraction, ctx, holder)?)
            }
            Self::WeatherHeal => AttrOutcome::done(apply_weather_heal(ctx, user)?),
            Self::Drain(fraction) => AttrOutcome::done(apply_drain(*fraction, ctx, user, target, args)?),
            Self::Recoil(fraction) => AttrOutcome::done(apply_recoil(*fraction, ctx, user, args)?),
            Self::Sacrifice => AttrOutcome::done(apply_sacrifice(ctx, user)?),
            Self::CrashDamage(fraction) => AttrOutcome::done(apply_crash_damage(*fraction, ctx, user)?),
            Self::PainSplit => AttrOutcome::done(apply_pain_split(ctx, user, target)?),

            // Switching and copying
            Self::ForceSwitch { self_switch } => {
                let slot = if *self_switch { user } else { target };
                apply_force_switch_special(*self_switch, ctx, slot)
            }
            Self::Transform => apply_transform_special(ctx, user, target),
            Self::CopyMove => AttrOutcome::done(apply_copy_move_special(ctx, user, target)?),
            Self::RandomMove { from_moveset } => {
                AttrOutcome::done(apply_random_move_special(*from_moveset, ctx, user)?)
            }
            Self::Conversion => AttrOutcome::done(apply_conversion_special(ctx, user)?),

            // Field
            Self::WeatherChange(weather) => AttrOutcome::done(apply_weather_change(*weather, ctx)),
            Self::ClearWeather(weather) => AttrOutcome::done(apply_clear_weather(*weather, ctx)),
            Self::AddFieldTag { tag, turns } => {
                AttrOutcome::done(apply_add_field_tag(*tag, *turns, ctx, user, move_data)?)
            }
            Self::ClearHazards { own_side_only } => {
                AttrOutcome::done(apply_clear_hazards(*own_side_only, ctx, user)?)
            }
            Self::NoEffect(message) => {
                ctx.scheduler.queue_message(*message);
                AttrOutcome::done(true)
            }
        }
    }

    fn condition(&self, move_data: &Move) -> Option<MoveCondition> {
        self.derived_condition(move_data.category)
    }

    fn user_benefit(&self, ctx: &BattleContext, user: BattlerIndex, _target: BattlerIndex, move_data: &Move) -> f64 {
        let Some(user_mon) = ctx.combatant(user) else {
            return 0.0;
        };
        let chance = chance_weight(move_data);
        match self {
            Self::StatChange { stats, levels, trigger } if trigger.self_target => {
                stat_change_benefit(user_mon, stats, *levels) * chance
            }
            Self::Growth => 20.0,
            Self::BellyDrum => 40.0 * user_mon.hp_ratio() - 20.0,
            Self::Curse if !user_mon.is_of_type(PokemonType::Ghost) => 10.0,
            Self::Curse => -20.0 * user_mon.hp_ratio(),
            Self::HealFraction {
                fraction,
                self_target: true,
            } => (1.0 - user_mon.hp_ratio()) * fraction * 40.0,
            Self::WeatherHeal | Self::Rest => (1.0 - user_mon.hp_ratio()) * 20.0,
            Self::Drain(fraction) => fraction * 10.0,
            Self::Recoil(fraction) => -fraction * 30.0,
            Self::Sacrifice => -20.0,
            Self::CrashDamage(fraction) => -fraction * 10.0,
            Self::Protect(_) => 5.0 / 2f64.powi(user_mon.summon_data.consecutive_protects as i32),
            Self::Substitute => 10.0,
            Self::AddTag { trigger, .. } if trigger.self_target => 10.0,
            Self::CureStatus => 10.0,
            Self::PartyCure { .. } => 10.0,
            Self::Recharge => -10.0,
            Self::Frenzy => -5.0,
            Self::Charge { .. } | Self::DelayedAttack { .. } => -5.0,
            Self::WeatherChange(_) | Self::AddFieldTag { .. } => 5.0,
            Self::ClearHazards { .. } => 5.0,
            Self::ForceSwitch { self_switch: true } => 5.0,
            Self::Transform | Self::CopyStatStages => 10.0,
            Self::NoEffect(_) => -20.0,
            _ => 0.0,
        }
    }

    fn target_benefit(&self, ctx: &BattleContext, _user: BattlerIndex, target: BattlerIndex, move_data: &Move) -> f64 {
        let Some(target_mon) = ctx.combatant(target) else {
            return 0.0;
        };
        let chance = chance_weight(move_data);
        match self {
            Self::StatChange { stats, levels, trigger } if !trigger.self_target => {
                stat_change_benefit(target_mon, stats, *levels) * chance
            }
            Self::InflictStatus {
                effect,
                self_target: false,
            } if target_mon.can_set_status(*effect) => status_severity(*effect) * chance,
            Self::TriAttackStatus if target_mon.status.is_none() => -5.0 * chance,
            Self::Confuse if !target_mon.has_tag(BattlerTagType::Confused) => -10.0 * chance,
            Self::Flinch => -5.0 * chance,
            Self::AddTag { trigger, tag, .. } if !trigger.self_target && !target_mon.has_tag(*tag) => {
                -10.0 * chance
            }
            Self::HealFraction {
                fraction,
                self_target: false,
            } => (1.0 - target_mon.hp_ratio()) * fraction * 40.0,
            Self::ResetTargetStats | Self::InvertStatStages => {
                -target_mon.stat_stages.values().map(|stage| *stage as f64).sum::<f64>() * 4.0
            }
            Self::ForceSwitch { self_switch: false } => -5.0,
            Self::PainSplit => (0.5 - target_mon.hp_ratio()) * 20.0,
            Self::Curse => -10.0,
            _ => 0.0,
        }
    }
}

fn chance_weight(move_data: &Move) -> f64 {
    if move_data.effect_always_applies() {
        1.0
    } else {
        move_data.chance as f64 / 100.0
    }
}

fn stat_change_benefit(holder: &crate::battle::combatant::Combatant, stats: &[schema::BattleStat], levels: i8) -> f64 {
    stats
        .iter()
        .map(|stat| {
            let stage = holder.stat_stage(*stat);
            let room = if levels > 0 { 6 - stage } else { stage + 6 };
            (levels.signum() as f64) * (levels.unsigned_abs().min(room.max(0) as u8) as f64) * 10.0
        })
        .sum()
}

fn status_severity(effect: StatusEffect) -> f64 {
    match effect {
        StatusEffect::Sleep | StatusEffect::Freeze => -30.0,
        StatusEffect::Toxic | StatusEffect::Paralysis => -25.0,
        StatusEffect::Burn | StatusEffect::Poison => -20.0,
    }
}

// --- PIPELINE ---

/// Units whose secondary effect only lands on a successful chance roll.
fn rolls_secondary_chance(attr: &MoveAttr) -> bool {
    matches!(
        attr,
        MoveAttr::StatChange { .. }
            | MoveAttr::InflictStatus { .. }
            | MoveAttr::TriAttackStatus
            | MoveAttr::Confuse
            | MoveAttr::Flinch
            | MoveAttr::AddTag { .. }
    )
}

/// Gate a triggered unit on its affinity before it is invoked.
fn can_trigger(
    ctx: &mut BattleContext,
    attr: &MoveAttr,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    args: &AttrArgs,
) -> bool {
    let Some(trigger) = attr.trigger() else {
        return true;
    };
    if trigger.first_hit_only && !args.first_hit {
        return false;
    }

    if trigger.self_target {
        let Some(user_mon) = ctx.combatant(user) else {
            return false;
        };
        if user_mon.is_fainted() {
            return false;
        }
        if user_mon.has_tag(BattlerTagType::Frenzy) && !matches!(attr, MoveAttr::Frenzy) {
            return false;
        }
    } else {
        let Some(target_mon) = ctx.combatant(target) else {
            return false;
        };
        if target_mon.is_fainted() {
            return false;
        }
        if target != user {
            if !move_data.flags.ignore_protect && target_mon.has_tag(BattlerTagType::Protected) {
                return false;
            }
            if target_mon.has_tag(BattlerTagType::Substitute) && !move_data.flags.sound_based {
                return false;
            }
        }
    }

    if rolls_secondary_chance(attr) && !move_data.effect_always_applies() {
        return ctx
            .rng
            .chance(move_data.chance as u32, "Secondary Effect");
    }
    true
}

/// Run every unit of `move_data` accepted by `filter`.
///
/// All synchronous calls are issued first, in attach order; pending units are
/// then joined in the same order. Returns whether any unit reported success.
///
/// An error stops further units from being issued, but every pending unit
/// already issued is still joined before the first error is returned.
pub fn apply_move_attrs(
    filter: AttrFilter,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    let mut applied = false;
    let mut pending = Vec::new();
    let mut failure = None;

    for attr in move_data.attrs.iter().filter(|attr| filter.matches(attr)) {
        if !can_trigger(ctx, attr, user, target, move_data, args) {
            continue;
        }
        match attr.apply(ctx, user, target, move_data, args) {
            Ok(AttrOutcome::Done(result)) => applied |= result,
            Ok(AttrOutcome::Pending { ticket, resume }) => pending.push((ticket, resume)),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    for (ticket, resume) in pending {
        ctx.scheduler.run_until_complete(ticket);
        match resume(ctx) {
            Ok(result) => applied |= result,
            Err(err) => {
                failure.get_or_insert(err);
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(applied),
    }
}

/// Summed user and target benefit of every unit, for the AI.
pub fn move_benefits(
    ctx: &BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
) -> (f64, f64) {
    move_data.attrs.iter().fold((0.0, 0.0), |(user_sum, target_sum), attr| {
        (
            user_sum + attr.user_benefit(ctx, user, target, move_data),
            target_sum + attr.target_benefit(ctx, user, target, move_data),
        )
    })
}

/// Whether a move of `category` is an attack for scoring purposes.
pub fn is_attack(category: MoveCategory) -> bool {
    category != MoveCategory::Status
}
