// In: src/battle/move_phase.rs

// --- IMPORTS ---
use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::combatant::{AttackRecord, Combatant, QueuedMove, Status, TurnMove};
use crate::battle::context::{BattleContext, ModifierKind};
use crate::battle::damage::{
    accuracy_stage_multiplier, calculate_damage, confusion_self_damage, roll_critical, AttackProfile,
};
use crate::battle::move_effects::{apply_move_attrs, AttrArgs, AttrFilter};
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::{conditions_hold, get_move, AttrKind, Move, MoveAttr, TriggerPhase};
use log::debug;
use schema::{BattleStat, BattlerTagType, MoveId, MoveResult, MoveTarget, StatusEffect};

/// How a move came to be used this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrigin {
    /// Chosen from the moveset; spends PP.
    Selected,
    /// Popped from the move queue (second charge turn, rampage).
    Queued,
    /// Called by another move.
    Virtual,
}

const HIDING_TAGS: [BattlerTagType; 3] = [
    BattlerTagType::Flying,
    BattlerTagType::Underground,
    BattlerTagType::Underwater,
];

const FREEZE_THAW_CHANCE: u32 = 20;
const FULL_PARALYSIS_CHANCE: u32 = 25;
const CONFUSION_SELF_HIT_CHANCE: u32 = 33;

pub fn is_hiding(combatant: &Combatant) -> bool {
    HIDING_TAGS.iter().any(|tag| combatant.has_tag(*tag))
}

/// Patterns that affect a side of the field rather than individual combatants.
fn is_field_wide(pattern: MoveTarget) -> bool {
    matches!(
        pattern,
        MoveTarget::UserSide | MoveTarget::EnemySide | MoveTarget::BothSides
    )
}

// --- PRE-MOVE CHECKS ---

/// Whether the combatant at `slot` may act this turn. Counts down sleep and
/// confusion as a side effect.
pub fn can_act(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<bool> {
    {
        let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
        if mon.remove_tag(BattlerTagType::Recharging, scheduler) {
            scheduler.queue_message(format!("{} must\nrecharge!", mon.name));
            return Ok(false);
        }
    }

    let status = ctx.get(slot)?.status;
    match status {
        Some(Status {
            effect: StatusEffect::Sleep,
            turns,
        }) => {
            let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
            let remaining = turns.saturating_sub(1);
            if remaining == 0 {
                mon.reset_status();
                scheduler.queue_message(format!("{} {}", mon.name, StatusEffect::Sleep.cure_message()));
            } else {
                mon.status = Some(Status {
                    effect: StatusEffect::Sleep,
                    turns: remaining,
                });
                scheduler.unshift_phase(Phase::CommonAnim {
                    slot: Some(slot),
                    anim: CommonAnim::Sleep,
                });
                scheduler.queue_message(format!("{} is fast\nasleep.", mon.name));
                return Ok(false);
            }
        }
        Some(Status {
            effect: StatusEffect::Freeze,
            ..
        }) => {
            let thawed = ctx.rng.chance(FREEZE_THAW_CHANCE, "Freeze Thaw");
            let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
            if thawed {
                mon.reset_status();
                scheduler.queue_message(format!("{} {}", mon.name, StatusEffect::Freeze.cure_message()));
            } else {
                scheduler.unshift_phase(Phase::CommonAnim {
                    slot: Some(slot),
                    anim: CommonAnim::Freeze,
                });
                scheduler.queue_message(format!("{} is\nfrozen solid!", mon.name));
                return Ok(false);
            }
        }
        _ => {}
    }

    {
        let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
        if mon.remove_tag(BattlerTagType::Flinched, scheduler) {
            scheduler.queue_message(format!("{} flinched!", mon.name));
            return Ok(false);
        }
    }

    let confused = ctx.get(slot)?.has_tag(BattlerTagType::Confused);
    if confused {
        let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
        if mon.lapse_tag(BattlerTagType::Confused, scheduler) {
            scheduler.queue_message(format!("{} is\nconfused!", mon.name));
            scheduler.unshift_phase(Phase::CommonAnim {
                slot: Some(slot),
                anim: CommonAnim::Confusion,
            });
            if ctx.rng.chance(CONFUSION_SELF_HIT_CHANCE, "Confusion Self-Hit") {
                let (mon, rng) = ctx.get_with_rng(slot)?;
                let damage = confusion_self_damage(mon, rng);
                mon.damage(damage);
                ctx.scheduler
                    .queue_message("It hurt itself in its\nconfusion!");
                let fainted = ctx.get(slot)?.is_fainted();
                if fainted {
                    announce_faint(ctx, slot)?;
                }
                return Ok(false);
            }
        }
    }

    let paralyzed = ctx.get(slot)?.status_effect() == Some(StatusEffect::Paralysis);
    if paralyzed && ctx.rng.chance(FULL_PARALYSIS_CHANCE, "Full Paralysis") {
        let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
        scheduler.unshift_phase(Phase::CommonAnim {
            slot: Some(slot),
            anim: CommonAnim::Paralysis,
        });
        scheduler.queue_message(format!("{} is paralyzed!\nIt can't move!", mon.name));
        return Ok(false);
    }

    Ok(true)
}

/// Queue the faint message and drop the combatant from the participant list.
pub(crate) fn announce_faint(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<()> {
    let mon = ctx.get_mut(slot)?;
    let id = mon.id;
    let name = mon.name.clone();
    mon.tags.clear();
    mon.move_queue.clear();
    debug!("{} fainted at {:?}", name, slot);
    ctx.scheduler.queue_message(format!("{} fainted!", name));
    if slot.is_player_side() {
        ctx.battle.remove_fainted_participant(id);
    }
    Ok(())
}

// --- USING A MOVE ---

/// Resolve one use of `move_id` by `user` against `intended`, or whatever the
/// move's target pattern picks.
pub fn use_move(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_id: MoveId,
    intended: Option<BattlerIndex>,
    origin: MoveOrigin,
) -> EngineResult<MoveResult> {
    let move_data = get_move(move_id)?;
    let user_name = ctx.get(user)?.name.clone();
    debug!("{} uses {:?} ({:?})", user_name, move_id, origin);
    ctx.scheduler
        .queue_message(format!("{} used {}!", user_name, move_data.name));

    let mut args = AttrArgs::for_move(move_data);
    args.forced = origin == MoveOrigin::Queued;

    // 1. Targets
    let resolved = crate::battle::targeting::resolve_targets(ctx, user, Some(move_id), intended)?;
    let targets: Vec<BattlerIndex> = if resolved.targets == [BattlerIndex::Attacker] {
        ctx.resolve_attacker(user).into_iter().collect()
    } else {
        resolved.targets
    };
    let Some(&primary) = targets.first() else {
        ctx.scheduler
            .queue_message("But there was no target...");
        return finish_move(ctx, user, move_data, targets, MoveResult::Fail, origin);
    };

    // 2. Weather cancellation
    if ctx
        .field
        .is_move_weather_cancelled(args.move_type, move_data.category)
    {
        ctx.scheduler
            .queue_message(format!("The {} was cancelled\nby the weather!", move_data.name));
        return finish_move(ctx, user, move_data, targets, MoveResult::Fail, origin);
    }

    // 3. Conditions
    if !conditions_hold(ctx, user, Some(primary), move_data) {
        ctx.scheduler.queue_message("But it failed!");
        return finish_move(ctx, user, move_data, targets, MoveResult::Fail, origin);
    }

    // 4. Charge and delay overrides
    apply_move_attrs(
        AttrFilter::Kind(AttrKind::ChargeOverride),
        ctx,
        user,
        primary,
        move_data,
        &mut args,
    )?;
    if args.charging {
        ctx.get_mut(user)?.move_queue.push_back(QueuedMove {
            move_id,
            targets: targets.clone(),
            ignore_pp: true,
        });
        return finish_move(ctx, user, move_data, targets, MoveResult::Other, origin);
    }

    // 5. Pre-apply units and move-wide modifiers
    apply_move_attrs(
        AttrFilter::Triggered {
            phase: TriggerPhase::PreApply,
            self_target: Some(true),
        },
        ctx,
        user,
        primary,
        move_data,
        &mut args,
    )?;
    for kind in [AttrKind::CritModifier, AttrKind::IgnoreStatStages] {
        apply_move_attrs(AttrFilter::Kind(kind), ctx, user, primary, move_data, &mut args)?;
    }

    let anim = ctx.scheduler.push_phase(Phase::MoveAnim {
        move_id,
        user,
        targets: targets.clone(),
    });
    ctx.scheduler.run_until_complete(anim);

    // 6. Per-target resolution
    let mut hit_targets = Vec::new();
    let mut total_damage = 0;
    let mut any_missed = false;
    for &target in &targets {
        if !ctx.is_active(target) {
            continue;
        }
        let mut target_args = args.clone();
        if !lands_on(ctx, user, target, move_data, &mut target_args)? {
            any_missed = true;
            continue;
        }
        let Some(dealt) = strike(ctx, user, target, move_data, &mut target_args)? else {
            continue;
        };
        total_damage += dealt;
        hit_targets.push(target);

        apply_move_attrs(
            AttrFilter::Triggered {
                phase: TriggerPhase::PostApply,
                self_target: Some(false),
            },
            ctx,
            user,
            target,
            move_data,
            &mut target_args,
        )?;
    }

    let Some(&first_hit) = hit_targets.first() else {
        let result = if any_missed { MoveResult::Miss } else { MoveResult::Fail };
        return finish_move(ctx, user, move_data, targets, result, origin);
    };

    // 7. Post-apply units on the user, once per use
    args.damage_dealt = total_damage;
    apply_move_attrs(
        AttrFilter::Triggered {
            phase: TriggerPhase::PostApply,
            self_target: Some(true),
        },
        ctx,
        user,
        first_hit,
        move_data,
        &mut args,
    )?;

    finish_move(ctx, user, move_data, targets, MoveResult::Success, origin)
}

/// Protection and accuracy. A miss runs the move's miss units.
fn lands_on(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<bool> {
    if target == user || is_field_wide(move_data.target) {
        return Ok(true);
    }

    let target_mon = ctx.get(target)?;
    if !move_data.flags.ignore_protect && target_mon.has_tag(BattlerTagType::Protected) {
        let message = format!("{}\nprotected itself!", target_mon.name);
        ctx.scheduler.queue_message(message);
        return Ok(false);
    }

    apply_move_attrs(AttrFilter::Kind(AttrKind::HitsHidden), ctx, user, target, move_data, args)?;
    apply_move_attrs(
        AttrFilter::Kind(AttrKind::VariableAccuracy),
        ctx,
        user,
        target,
        move_data,
        args,
    )?;

    let target_mon = ctx.get(target)?;
    let hidden = is_hiding(target_mon) && !args.hits_hidden;
    let hit = if hidden {
        false
    } else if args.accuracy < 0 {
        true
    } else {
        let user_mon = ctx.get(user)?;
        let stage = if args.ignore_stat_stages {
            0
        } else {
            (user_mon.stat_stage(BattleStat::Accuracy) - target_mon.stat_stage(BattleStat::Evasion))
                .clamp(-6, 6)
        };
        let mut accuracy = args.accuracy as f64 * accuracy_stage_multiplier(stage);
        ctx.modifiers
            .apply_modifiers(ModifierKind::Accuracy, user, &mut accuracy);
        (ctx.rng.rand_int(100, "Accuracy") as f64) < accuracy
    };

    if !hit {
        let name = ctx.name_of(target);
        ctx.scheduler
            .queue_message(format!("{} avoided the attack!", name));
        apply_move_attrs(AttrFilter::Kind(AttrKind::Miss), ctx, user, target, move_data, args)?;
    }
    Ok(hit)
}

/// Run the hits of a move against one target. Returns the total damage dealt,
/// or `None` when the target is immune.
fn strike(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    args: &mut AttrArgs,
) -> EngineResult<Option<u32>> {
    let damaging = move_data.is_damaging();
    if damaging {
        for kind in [AttrKind::VariableType, AttrKind::FixedDamage, AttrKind::VariablePower] {
            apply_move_attrs(AttrFilter::Kind(kind), ctx, user, target, move_data, args)?;
        }
        let effectiveness = ctx.get(target)?.attack_effectiveness(args.move_type);
        if effectiveness == 0.0 {
            let name = ctx.name_of(target);
            ctx.scheduler
                .queue_message(format!("It doesn't affect {}!", name));
            return Ok(None);
        }
    }

    let mut power = args.power;
    ctx.field.apply_move_power_tags(args.move_type, &mut power);
    ctx.modifiers
        .apply_modifiers(ModifierKind::MovePower, user, &mut power);

    let mut total = 0;
    let mut hits = 0;
    let mut effectiveness = 1.0;
    for hit in 0..args.hit_count.max(1) {
        if !ctx.is_active(target) || ctx.get(user)?.is_fainted() {
            break;
        }
        args.first_hit = hit == 0;
        hits += 1;

        let mut dealt = 0;
        if damaging {
            let (damage, critical, hit_effectiveness) = roll_hit(ctx, user, target, move_data, args, power)?;
            effectiveness = hit_effectiveness;
            dealt = deliver_damage(ctx, user, target, move_data, damage)?;
            if critical {
                ctx.scheduler.queue_message("A critical hit!");
            }
        }
        total += dealt;
        args.damage_dealt = dealt;

        apply_move_attrs(
            AttrFilter::Triggered {
                phase: TriggerPhase::Hit,
                self_target: None,
            },
            ctx,
            user,
            target,
            move_data,
            args,
        )?;
    }

    if damaging && args.fixed_damage.is_none() {
        if effectiveness > 1.0 {
            ctx.scheduler.queue_message("It's super effective!");
        } else if effectiveness < 1.0 {
            ctx.scheduler
                .queue_message("It's not very effective…");
        }
    }
    if move_data.has_attr(|attr| matches!(attr, MoveAttr::MultiHit(_))) {
        let plural = if hits == 1 { "" } else { "s" };
        ctx.scheduler
            .queue_message(format!("Hit {} time{}!", hits, plural));
    }
    if ctx.get(target)?.is_fainted() {
        announce_faint(ctx, target)?;
    }
    Ok(Some(total))
}

/// Damage, critical flag and effectiveness of a single hit.
fn roll_hit(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    args: &AttrArgs,
    power: f64,
) -> EngineResult<(u32, bool, f32)> {
    let weather_multiplier = ctx.field.attack_type_multiplier(args.move_type);
    let (user_mon, target_mon, rng) = ctx.attack_view(user, target)?;
    let effectiveness = target_mon.attack_effectiveness(args.move_type);
    if let Some(amount) = args.fixed_damage {
        return Ok((amount, false, effectiveness));
    }

    let critical = roll_critical(user_mon, args.crit_stage, args.guaranteed_crit, rng);
    let profile = AttackProfile {
        move_type: args.move_type,
        category: move_data.category,
        power,
        critical,
        ignore_stat_stages: args.ignore_stat_stages,
        weather_multiplier,
    };
    let result = calculate_damage(user_mon, target_mon, &profile, rng);
    Ok((result.damage, result.critical, result.effectiveness))
}

/// Apply `damage` to the target, routing it through a substitute first.
/// Returns the damage that landed on the decoy or the target.
fn deliver_damage(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
    damage: u32,
) -> EngineResult<u32> {
    let (target_mon, scheduler) = ctx.get_with_scheduler(target)?;
    if target != user && !move_data.flags.sound_based {
        if let Some(substitute) = target_mon.tags.get_mut(BattlerTagType::Substitute) {
            let absorbed = damage.min(substitute.substitute_hp);
            substitute.substitute_hp -= absorbed;
            let broken = substitute.substitute_hp == 0;
            scheduler.queue_message(format!(
                "The substitute took damage\nfor {}!",
                target_mon.name
            ));
            if broken {
                target_mon.remove_tag(BattlerTagType::Substitute, scheduler);
            }
            return Ok(absorbed);
        }
    }

    let dealt = target_mon.take_hit(damage);
    target_mon.turn_data.damage_taken += dealt;
    target_mon.turn_data.attacks_received.push(AttackRecord {
        move_id: move_data.id,
        source: user,
        category: move_data.category,
        damage: dealt,
    });
    ctx.get_mut(user)?.turn_data.damage_dealt += dealt;
    Ok(dealt)
}

/// Record the use in history, spend PP and mark the user as having acted.
fn finish_move(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
    targets: Vec<BattlerIndex>,
    result: MoveResult,
    origin: MoveOrigin,
) -> EngineResult<MoveResult> {
    let user_mon = ctx.get_mut(user)?;
    user_mon.move_history.push(TurnMove {
        move_id: move_data.id,
        targets,
        result,
        virtual_move: origin == MoveOrigin::Virtual,
    });
    if origin == MoveOrigin::Selected {
        user_mon.use_pp(move_data.id)?;
    }
    if origin != MoveOrigin::Virtual {
        user_mon.turn_data.acted = true;
        if !move_data.has_attr(|attr| matches!(attr, MoveAttr::Protect(_))) {
            user_mon.summon_data.consecutive_protects = 0;
        }
    }
    Ok(result)
}
