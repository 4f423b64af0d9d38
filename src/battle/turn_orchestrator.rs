// In: src/battle/turn_orchestrator.rs

use crate::battle::battler_tags::{BattlerTagHolder, LapseType};
use crate::battle::context::BattleContext;
use crate::battle::damage::apply_stat_stage_multiplier;
use crate::battle::move_effects::switch_in;
use crate::battle::move_phase::{announce_faint, can_act, use_move, MoveOrigin};
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::{BattlerIndex, TurnCommand};
use crate::battle::weather::weather_damage_message;
use crate::errors::EngineResult;
use crate::move_data::{get_move, move_name};
use log::{debug, info};
use schema::{BattleStat, BattlerTagType, MoveId, StatusEffect};

/// Priority bracket of a switch; always ahead of any move.
const SWITCH_PRIORITY: i8 = 7;
const TOXIC_COUNTER_CAP: u8 = 15;

/// One slot's resolved action for the turn.
#[derive(Debug, Clone)]
enum TurnAction {
    Switch { party_index: usize },
    Move {
        move_id: MoveId,
        target: Option<BattlerIndex>,
        origin: MoveOrigin,
    },
    Run,
    Skip,
}

#[derive(Debug, Clone)]
struct OrderedAction {
    slot: BattlerIndex,
    action: TurnAction,
    priority: i8,
    speed: f64,
    tiebreak: u32,
}

/// Main entry point for one turn: take each slot's command, act in priority
/// and speed order, then run the end of turn.
pub fn run_turn(
    ctx: &mut BattleContext,
    commands: &[(BattlerIndex, TurnCommand)],
) -> EngineResult<()> {
    info!("Turn {} begins", ctx.battle.turn + 1);

    // 1. Record commands
    for (slot, command) in commands {
        ctx.battle.set_command(*slot, command.clone());
    }

    // 2. Action prioritization
    let order = determine_action_order(ctx, commands)?;

    // 3. Execute actions in order
    for ordered in order {
        execute_action(ctx, ordered)?;
    }

    // 4. End-of-turn phase
    end_turn(ctx)
}

fn determine_action_order(
    ctx: &mut BattleContext,
    commands: &[(BattlerIndex, TurnCommand)],
) -> EngineResult<Vec<OrderedAction>> {
    let mut order = Vec::new();
    for slot in ctx.active_slots() {
        let combatant = ctx.get(slot)?;
        let queued = combatant.move_queue.front().cloned();
        let command = commands
            .iter()
            .find(|(commanded, _)| *commanded == slot)
            .map(|(_, command)| command.clone());

        let action = match (queued, command) {
            (Some(queued), _) => TurnAction::Move {
                move_id: queued.move_id,
                target: queued.targets.first().copied(),
                origin: MoveOrigin::Queued,
            },
            (None, Some(TurnCommand::Fight { move_id, targets })) => TurnAction::Move {
                move_id,
                target: targets.first().copied(),
                origin: MoveOrigin::Selected,
            },
            (None, Some(TurnCommand::Pokemon { party_index })) => TurnAction::Switch { party_index },
            (None, Some(TurnCommand::Run)) => TurnAction::Run,
            (None, Some(TurnCommand::Ball(ball))) => {
                debug!("{:?} threw a {:?}; catching is handled outside the engine", slot, ball);
                TurnAction::Skip
            }
            (None, None) => TurnAction::Skip,
        };

        let priority = match &action {
            TurnAction::Move { move_id, .. } => get_move(*move_id)?.priority,
            TurnAction::Switch { .. } | TurnAction::Run => SWITCH_PRIORITY,
            TurnAction::Skip => i8::MIN,
        };
        let stats = combatant.battle_stats();
        let mut speed = apply_stat_stage_multiplier(stats.speed, combatant.stat_stage(BattleStat::Speed));
        if combatant.status_effect() == Some(StatusEffect::Paralysis) {
            speed *= 0.5;
        }
        order.push(OrderedAction {
            slot,
            action,
            priority,
            speed,
            tiebreak: 0,
        });
    }

    // Only exact ties draw from the rng.
    for index in 0..order.len() {
        let tied = order.iter().enumerate().any(|(other, action)| {
            other != index
                && action.priority == order[index].priority
                && action.speed == order[index].speed
        });
        if tied {
            order[index].tiebreak = ctx.rng.rand_int(1000, "Speed Tie");
        }
    }

    let reversed = ctx.field.is_speed_order_reversed();
    order.sort_by(|a, b| {
        let by_speed = if reversed {
            a.speed.total_cmp(&b.speed)
        } else {
            b.speed.total_cmp(&a.speed)
        };
        b.priority
            .cmp(&a.priority)
            .then(by_speed)
            .then(a.tiebreak.cmp(&b.tiebreak))
    });
    Ok(order)
}

fn execute_action(ctx: &mut BattleContext, ordered: OrderedAction) -> EngineResult<()> {
    let slot = ordered.slot;
    if !ctx.is_active(slot) {
        return Ok(());
    }
    match ordered.action {
        TurnAction::Switch { party_index } => switch_in(ctx, slot, party_index, false),
        TurnAction::Run => {
            let attempts = ctx.battle.record_escape_attempt();
            debug!("{:?} escape attempt {}", slot, attempts);
            Ok(())
        }
        TurnAction::Skip => Ok(()),
        TurnAction::Move {
            move_id,
            target,
            origin,
        } => {
            if origin == MoveOrigin::Queued {
                ctx.get_mut(slot)?.move_queue.pop_front();
            }
            if !can_act(ctx, slot)? {
                interrupt_locked_moves(ctx, slot)?;
                return Ok(());
            }
            if origin == MoveOrigin::Selected && ctx.get(slot)?.pp_left(move_id)? == 0 {
                let name = ctx.name_of(slot);
                ctx.scheduler.queue_message(format!(
                    "{} has no PP left\nfor {}!",
                    name,
                    move_name(move_id)
                ));
                return Ok(());
            }
            use_move(ctx, slot, move_id, target, origin)?;
            Ok(())
        }
    }
}

/// A combatant that could not act loses any rampage or charge in progress.
fn interrupt_locked_moves(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<()> {
    let mon = ctx.get_mut(slot)?;
    mon.move_queue.clear();
    for tag in [
        BattlerTagType::Frenzy,
        BattlerTagType::Flying,
        BattlerTagType::Underground,
        BattlerTagType::Underwater,
    ] {
        mon.tags.remove(tag);
    }
    Ok(())
}

// --- END OF TURN ---

/// Residual effects, lapses, weather and field tags, then per-turn cleanup.
pub fn end_turn(ctx: &mut BattleContext) -> EngineResult<()> {
    for slot in ctx.active_slots() {
        apply_tag_residuals(ctx, slot)?;
        if ctx.is_active(slot) {
            let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
            mon.lapse_tags(LapseType::TurnEnd, scheduler);
            apply_status_damage(ctx, slot)?;
        }
        if ctx.is_active(slot) {
            apply_weather_damage(ctx, slot)?;
        }
    }

    ctx.field.tick_weather(&mut ctx.scheduler);
    ctx.field.lapse_tags(&mut ctx.scheduler);

    for combatant in ctx.combatants.iter_mut().flatten() {
        combatant.reset_turn_data();
        if combatant.is_active() {
            combatant.summon_data.turns_on_field += 1;
        }
    }
    let pokeball_counts = ctx.battle.turn_pokeball_counts.clone();
    ctx.battle.increment_turn(&pokeball_counts);
    debug!("Turn {} ended", ctx.battle.turn);
    Ok(())
}

/// Lose `amount` HP at end of turn, at least one. Returns the HP actually lost.
fn residual_damage(
    ctx: &mut BattleContext,
    slot: BattlerIndex,
    amount: u32,
    message: String,
    anim: Option<CommonAnim>,
) -> EngineResult<u32> {
    let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
    let lost = mon.damage(amount.max(1));
    if let Some(anim) = anim {
        scheduler.unshift_phase(Phase::CommonAnim {
            slot: Some(slot),
            anim,
        });
    }
    scheduler.queue_message(message);
    if mon.is_fainted() {
        announce_faint(ctx, slot)?;
    }
    Ok(lost)
}

fn residual_heal(
    ctx: &mut BattleContext,
    slot: BattlerIndex,
    fraction: f64,
    message: String,
) -> EngineResult<()> {
    let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
    if mon.is_full_hp() {
        return Ok(());
    }
    let amount = mon.hp_fraction(fraction);
    mon.heal(amount);
    scheduler.unshift_phase(Phase::CommonAnim {
        slot: Some(slot),
        anim: CommonAnim::Health,
    });
    scheduler.queue_message(message);
    Ok(())
}

fn apply_tag_residuals(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<()> {
    let mon = ctx.get(slot)?;
    let name = mon.name.clone();
    let max_hp = mon.max_hp();
    let seed_source = mon
        .get_tag(BattlerTagType::Seeded)
        .map(|tag| tag.source_slot);
    let trap_move = mon
        .get_tag(BattlerTagType::Trapped)
        .map(|tag| tag.source_move);
    let asleep = mon.status_effect() == Some(StatusEffect::Sleep);
    let nightmare = mon.has_tag(BattlerTagType::Nightmare);
    let cursed = mon.has_tag(BattlerTagType::Cursed);
    let ingrained = mon.has_tag(BattlerTagType::Ingrain);
    let aqua_ring = mon.has_tag(BattlerTagType::AquaRing);

    if let Some(source) = seed_source {
        let source = source.filter(|source| ctx.is_active(*source));
        if let Some(source) = source {
            let sapped = residual_damage(
                ctx,
                slot,
                max_hp / 8,
                format!("{}'s health is\nsapped by Leech Seed!", name),
                Some(CommonAnim::Seed),
            )?;
            ctx.get_mut(source)?.heal(sapped);
        }
    }

    if let Some(source_move) = trap_move {
        if ctx.is_active(slot) {
            let move_label = source_move
                .map(move_name)
                .unwrap_or_else(|| "the attack".to_string());
            residual_damage(
                ctx,
                slot,
                max_hp / 8,
                format!("{} is hurt\nby {}!", name, move_label),
                Some(CommonAnim::Trap),
            )?;
        }
    }

    if nightmare && ctx.is_active(slot) {
        if asleep {
            residual_damage(
                ctx,
                slot,
                max_hp / 4,
                format!("{} is locked\nin a nightmare!", name),
                None,
            )?;
        } else {
            let (mon, scheduler) = ctx.get_with_scheduler(slot)?;
            mon.remove_tag(BattlerTagType::Nightmare, scheduler);
        }
    }

    if cursed && ctx.is_active(slot) {
        residual_damage(
            ctx,
            slot,
            max_hp / 4,
            format!("{} is afflicted\nby the curse!", name),
            Some(CommonAnim::Curse),
        )?;
    }

    if ingrained && ctx.is_active(slot) {
        residual_heal(
            ctx,
            slot,
            1.0 / 16.0,
            format!("{} absorbed\nnutrients with its roots!", name),
        )?;
    }
    if aqua_ring && ctx.is_active(slot) {
        residual_heal(
            ctx,
            slot,
            1.0 / 16.0,
            format!("A veil of water restored\n{}'s HP!", name),
        )?;
    }
    Ok(())
}

fn apply_status_damage(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<()> {
    let mon = ctx.get_mut(slot)?;
    let name = mon.name.clone();
    let max_hp = mon.max_hp();
    let Some(status) = mon.status.as_mut() else {
        return Ok(());
    };
    let effect = status.effect;
    let (amount, message) = match effect {
        StatusEffect::Burn => (max_hp / 16, format!("{} is hurt\nby its burn!", name)),
        StatusEffect::Poison => (max_hp / 8, format!("{} is hurt\nby poison!", name)),
        StatusEffect::Toxic => {
            status.turns = (status.turns + 1).min(TOXIC_COUNTER_CAP);
            (
                max_hp * status.turns as u32 / 16,
                format!("{} is hurt\nby poison!", name),
            )
        }
        StatusEffect::Sleep | StatusEffect::Paralysis | StatusEffect::Freeze => return Ok(()),
    };
    residual_damage(ctx, slot, amount, message, Some(CommonAnim::for_status(effect)))?;
    Ok(())
}

fn apply_weather_damage(ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<()> {
    let Some(weather) = ctx.field.damaging_weather() else {
        return Ok(());
    };
    let weather_type = weather.weather_type;
    let mon = ctx.get(slot)?;
    let sheltered = mon.has_tag(BattlerTagType::Underground) || mon.has_tag(BattlerTagType::Underwater);
    if weather.is_type_damage_immune(mon.types()) || sheltered {
        return Ok(());
    }
    let Some(message) = weather_damage_message(weather_type, &mon.name) else {
        return Ok(());
    };
    let amount = mon.max_hp() / 16;
    residual_damage(ctx, slot, amount, message, Some(CommonAnim::for_weather(weather_type)))?;
    Ok(())
}

// --- REPLACEMENTS ---

/// Whether every member of `slot`'s side, on the field or benched, has fainted.
pub fn is_side_defeated(ctx: &BattleContext, slot: BattlerIndex) -> bool {
    let on_field = BattlerIndex::FIELD
        .iter()
        .filter(|field_slot| field_slot.same_side(slot))
        .any(|field_slot| ctx.is_active(*field_slot));
    let benched = ctx.bench_for(slot).iter().any(|member| !member.is_fainted());
    !on_field && !benched
}

/// Fill every slot whose occupant fainted, using `pick` to choose a bench
/// index. Returns the slots that were refilled.
pub fn replace_fainted(
    ctx: &mut BattleContext,
    pick: impl Fn(&BattleContext, BattlerIndex) -> Option<usize>,
) -> EngineResult<Vec<BattlerIndex>> {
    let mut refilled = Vec::new();
    for slot in BattlerIndex::FIELD {
        let fainted = ctx.combatant(slot).is_some_and(|c| c.is_fainted());
        if !fainted {
            continue;
        }
        if let Some(bench_index) = pick(ctx, slot) {
            switch_in(ctx, slot, bench_index, false)?;
            refilled.push(slot);
        }
    }
    Ok(refilled)
}
