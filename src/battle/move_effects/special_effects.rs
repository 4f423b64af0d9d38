// In: src/battle/move_effects/special_effects.rs

// --- IMPORTS ---
use super::stat_effects::apply_stat_change_effect;
use super::{AttrArgs, AttrOutcome, Resume};
use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
use crate::battle::combatant::{MoveSlot, QueuedMove};
use crate::battle::context::BattleContext;
use crate::battle::move_phase::{use_move, MoveOrigin};
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::errors::{EngineError, EngineResult};
use crate::move_data::{catalog_ids, get_move, AttrKind, Move, MultiHitType};
use log::debug;
use schema::{BattleStat, BattlerTagType, MoveResult, WeatherType};

// --- MULTI-TURN MOVES ---

/// The second turn of a two-turn move: queued, and the last recorded use of
/// the same move was its charge turn.
fn is_release_turn(ctx: &BattleContext, user: BattlerIndex, move_data: &Move, args: &AttrArgs) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    Ok(args.forced
        && user_mon
            .last_move()
            .is_some_and(|last| last.move_id == move_data.id && last.result == MoveResult::Other))
}

#[allow(clippy::too_many_arguments)]
pub(super) fn apply_charge_special(
    message: &'static str,
    hide_tag: Option<BattlerTagType>,
    boost: Option<(BattleStat, i8)>,
    sun_skips: bool,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<AttrOutcome> {
    if is_release_turn(ctx, user, move_data, args)? {
        if let Some(tag) = hide_tag {
            ctx.get_mut(user)?.tags.remove(tag);
        }
        return Ok(AttrOutcome::Done(false));
    }
    let sunny = matches!(
        ctx.field.effective_weather_type(),
        Some(WeatherType::Sunny | WeatherType::HarshSun)
    );
    if sun_skips && sunny {
        return Ok(AttrOutcome::Done(false));
    }

    args.charging = true;
    let move_id = move_data.id;
    let ticket = ctx
        .scheduler
        .unshift_phase(Phase::MoveChargeAnim { move_id, user });
    let resume: Resume = Box::new(move |ctx: &mut BattleContext| {
        let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
        scheduler.queue_message(format!("{} {}", user_mon.name, message));
        if let Some(tag) = hide_tag {
            let tag = BattlerTag::new(tag, 1, Some(move_id), Some(user_mon.id));
            user_mon.add_battler_tag(tag, scheduler);
        }
        if let Some((stat, levels)) = boost {
            apply_stat_change_effect(&[stat], levels, ctx, user)?;
        }
        Ok(true)
    });
    Ok(AttrOutcome::Pending { ticket, resume })
}

/// Future Sight and Doom Desire: announce now, strike on the user's next turn.
pub(super) fn apply_delayed_attack_special(
    message: &'static str,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<AttrOutcome> {
    if is_release_turn(ctx, user, move_data, args)? {
        return Ok(AttrOutcome::Done(false));
    }
    args.charging = true;
    let name = ctx.get(user)?.name.clone();
    let ticket = ctx.scheduler.unshift_phase(Phase::MoveChargeAnim {
        move_id: move_data.id,
        user,
    });
    let resume: Resume = Box::new(move |ctx: &mut BattleContext| {
        ctx.scheduler.queue_message(format!("{} {}", name, message));
        Ok(true)
    });
    Ok(AttrOutcome::Pending { ticket, resume })
}

pub(super) fn apply_multi_hit_special(
    multi_hit: MultiHitType,
    ctx: &mut BattleContext,
    args: &mut AttrArgs,
) -> bool {
    args.hit_count = match multi_hit {
        MultiHitType::Two => 2,
        MultiHitType::TwoToFive => match ctx.rng.rand_int(16, "Multi-Hit Count") {
            10.. => 2,
            4..=9 => 3,
            2..=3 => 4,
            _ => 5,
        },
    };
    true
}

pub(super) fn apply_magnitude_special(ctx: &mut BattleContext, args: &mut AttrArgs) -> bool {
    let roll = ctx.rng.rand_int(100, "Magnitude");
    let (magnitude, power) = match roll {
        0..=4 => (4, 10.0),
        5..=14 => (5, 30.0),
        15..=34 => (6, 50.0),
        35..=64 => (7, 70.0),
        65..=84 => (8, 90.0),
        85..=94 => (9, 110.0),
        _ => (10, 150.0),
    };
    args.power = power;
    ctx.scheduler.queue_message(format!("Magnitude {}!", magnitude));
    true
}

/// Thrash, Petal Dance, Outrage: lock in for one or two more turns, then
/// become confused.
pub(super) fn apply_frenzy_special(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    if !user_mon.move_queue.is_empty() {
        return Ok(false);
    }

    if !user_mon.has_tag(BattlerTagType::Frenzy) {
        let extra_turns = ctx.rng.rand_range(1, 2, "Frenzy Turns");
        let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
        for _ in 0..extra_turns {
            user_mon.move_queue.push_back(QueuedMove {
                move_id: move_data.id,
                targets: vec![target],
                ignore_pp: true,
            });
        }
        let tag = BattlerTag::new(BattlerTagType::Frenzy, 1, Some(move_data.id), Some(user_mon.id));
        user_mon.add_battler_tag(tag, scheduler);
        return Ok(true);
    }

    let turns = ctx.rng.rand_range(2, 5, "Tag Turns") as i32;
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    user_mon.remove_tag(BattlerTagType::Frenzy, scheduler);
    let confusion = BattlerTag::new(BattlerTagType::Confused, turns, Some(move_data.id), Some(user_mon.id));
    Ok(user_mon.add_battler_tag(confusion, scheduler))
}

pub(super) fn apply_recharge_special(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let tag = BattlerTag::new(BattlerTagType::Recharging, 1, Some(move_data.id), Some(user_mon.id));
    Ok(user_mon.add_battler_tag(tag, scheduler))
}

// --- SWITCHING ---

/// Replace the combatant at `slot` with bench member `bench_index`, then run
/// entry hazards against the newcomer.
pub(crate) fn switch_in(
    ctx: &mut BattleContext,
    slot: BattlerIndex,
    bench_index: usize,
    forced: bool,
) -> EngineResult<()> {
    let bench = ctx.bench_for_mut(slot);
    if bench_index >= bench.len() {
        return Err(EngineError::InvalidSlot(format!(
            "bench index {} out of range for {:?}",
            bench_index, slot
        )));
    }
    let incoming = bench.remove(bench_index);
    let incoming_name = incoming.name.clone();

    if let Some(mut outgoing) = ctx.place(slot, incoming)? {
        debug!("{} switched out of {:?}", outgoing.name, slot);
        outgoing.reset_summon_data();
        outgoing.reset_turn_data();
        ctx.bench_for_mut(slot).push(outgoing);
    }

    if forced {
        ctx.scheduler
            .queue_message(format!("{} was\ndragged out!", incoming_name));
    } else {
        ctx.scheduler.queue_message(format!("Go! {}!", incoming_name));
    }

    let index = slot
        .slot()
        .ok_or_else(|| EngineError::InvalidSlot(format!("{:?} is not a field slot", slot)))?;
    if let Some(combatant) = ctx.combatants[index].as_mut() {
        ctx.field
            .apply_entry_hazards(combatant, slot, &mut ctx.scheduler);
    }
    Ok(())
}

pub(super) fn apply_force_switch_special(
    self_switch: bool,
    ctx: &mut BattleContext,
    slot: BattlerIndex,
) -> EngineResult<AttrOutcome> {
    let has_replacement = ctx.bench_for(slot).iter().any(|member| !member.is_fainted());
    let rooted = ctx
        .combatant(slot)
        .is_some_and(|c| c.has_tag(BattlerTagType::Ingrain));
    if !has_replacement || (!self_switch && rooted) {
        return Ok(AttrOutcome::Done(false));
    }

    let ticket = ctx.scheduler.unshift_phase(Phase::SwitchOut {
        slot,
        forced: !self_switch,
    });
    let resume: Resume = Box::new(move |ctx: &mut BattleContext| {
        let healthy: Vec<usize> = ctx
            .bench_for(slot)
            .iter()
            .enumerate()
            .filter(|(_, member)| !member.is_fainted())
            .map(|(index, _)| index)
            .collect();
        let Some(first) = healthy.first().copied() else {
            return Ok(false);
        };
        let chosen = if self_switch {
            first
        } else {
            healthy[ctx.rng.pick_index(healthy.len(), "Forced Switch")]
        };
        switch_in(ctx, slot, chosen, !self_switch)?;
        Ok(true)
    });
    Ok(AttrOutcome::Pending { ticket, resume })
}

// --- COPYING ---

/// Moves called through Transform start with five PP each.
const TRANSFORM_PP: u8 = 5;

pub(super) fn apply_transform_special(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
) -> EngineResult<AttrOutcome> {
    let already = ctx.get(user)?.summon_data.stats_override.is_some();
    if already || !ctx.is_active(target) {
        return Ok(AttrOutcome::Done(false));
    }
    let ticket = ctx.scheduler.unshift_phase(Phase::CommonAnim {
        slot: Some(user),
        anim: CommonAnim::Transform,
    });
    let resume: Resume = Box::new(move |ctx: &mut BattleContext| {
        let target_mon = ctx.get(target)?;
        let types = target_mon.types().to_vec();
        let stats = *target_mon.battle_stats();
        let stages = target_mon.stat_stages.clone();
        let target_name = target_mon.name.clone();
        let mut moveset = Vec::new();
        for slot in target_mon.moveset() {
            let max_pp = get_move(slot.move_id)?.pp;
            moveset.push(MoveSlot {
                move_id: slot.move_id,
                pp_used: max_pp.saturating_sub(TRANSFORM_PP),
            });
        }

        let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
        let mut stats = stats;
        stats.hp = user_mon.stats.hp;
        user_mon.summon_data.types_override = Some(types);
        user_mon.summon_data.stats_override = Some(stats);
        user_mon.summon_data.moveset_override = Some(moveset);
        user_mon.stat_stages = stages;
        scheduler.queue_message(format!("{} transformed\ninto {}!", user_mon.name, target_name));
        Ok(true)
    });
    Ok(AttrOutcome::Pending { ticket, resume })
}

/// Mirror Move: use the target's last move back at it.
pub(super) fn apply_copy_move_special(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
) -> EngineResult<bool> {
    let last = ctx
        .get(target)?
        .last_move()
        .map(|turn| turn.move_id)
        .filter(|move_id| get_move(*move_id).is_ok_and(|m| !m.flags.ignore_virtual));
    let Some(move_id) = last else {
        ctx.scheduler.queue_message("But it failed!");
        return Ok(false);
    };
    let result = use_move(ctx, user, move_id, Some(target), MoveOrigin::Virtual)?;
    Ok(result == MoveResult::Success)
}

/// Metronome picks from every callable move; Sleep Talk from the user's own.
pub(super) fn apply_random_move_special(
    from_moveset: bool,
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let callable = |move_id: &schema::MoveId| {
        get_move(*move_id).is_ok_and(|m| {
            !m.flags.ignore_virtual && !m.has_attr(|attr| attr.is_kind(AttrKind::ChargeOverride))
        })
    };
    let pool: Vec<schema::MoveId> = if from_moveset {
        ctx.get(user)?
            .moveset()
            .iter()
            .map(|slot| slot.move_id)
            .filter(|move_id| callable(move_id))
            .collect()
    } else {
        catalog_ids().into_iter().filter(|move_id| callable(move_id)).collect()
    };

    if pool.is_empty() {
        ctx.scheduler.queue_message("But it failed!");
        return Ok(false);
    }
    let move_id = pool[ctx.rng.pick_index(pool.len(), "Random Move")];
    debug!("Random move call picked {:?}", move_id);
    let result = use_move(ctx, user, move_id, None, MoveOrigin::Virtual)?;
    Ok(result == MoveResult::Success)
}

/// Conversion: become the type of the first move in the moveset.
pub(super) fn apply_conversion_special(
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    let Some(first) = user_mon.moveset().first() else {
        return Ok(false);
    };
    let new_type = get_move(first.move_id)?.move_type;
    if user_mon.types() == [new_type] {
        return Ok(false);
    }
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    user_mon.summon_data.types_override = Some(vec![new_type]);
    scheduler.queue_message(format!(
        "{} transformed\ninto the {} type!",
        user_mon.name, new_type
    ));
    Ok(true)
}
