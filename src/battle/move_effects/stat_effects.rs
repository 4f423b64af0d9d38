// In: src/battle/move_effects/stat_effects.rs

// --- IMPORTS ---
use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
use crate::battle::context::BattleContext;
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::Move;
use schema::{BattleStat, BattlerTagType, PokemonType, WeatherType};
use strum::IntoEnumIterator;

// --- MESSAGES ---

fn stat_change_message(name: &str, stat: BattleStat, levels: i8, applied: i8) -> String {
    if applied == 0 {
        let direction = if levels > 0 { "higher" } else { "lower" };
        return format!("{}'s {} won't go any {}!", name, stat, direction);
    }
    let phrase = match applied {
        1 => "rose!",
        2 => "rose sharply!",
        n if n >= 3 => "rose drastically!",
        -1 => "fell!",
        -2 => "harshly fell!",
        _ => "severely fell!",
    };
    format!("{}'s {} {}", name, stat, phrase)
}

// --- STANDALONE HELPER FUNCTIONS ---

/// Shift `stats` of the combatant at `holder` by `levels`.
///
/// Returns whether any stage actually moved.
pub(super) fn apply_stat_change_effect(
    stats: &[BattleStat],
    levels: i8,
    ctx: &mut BattleContext,
    holder: BattlerIndex,
) -> EngineResult<bool> {
    let (holder_mon, scheduler) = ctx.get_with_scheduler(holder)?;
    let mut changed = Vec::new();
    for stat in stats {
        let applied = holder_mon.change_stat_stage(*stat, levels);
        scheduler.queue_message(stat_change_message(&holder_mon.name, *stat, levels, applied));
        if applied != 0 {
            changed.push(*stat);
        }
    }
    if changed.is_empty() {
        return Ok(false);
    }
    scheduler.unshift_phase(Phase::StatChange {
        slot: holder,
        stats: changed,
        levels,
    });
    Ok(true)
}

/// Attack and Sp. Atk; doubled in sun.
pub(super) fn apply_growth_effect(ctx: &mut BattleContext, user: BattlerIndex) -> EngineResult<bool> {
    let sunny = matches!(
        ctx.field.effective_weather_type(),
        Some(WeatherType::Sunny | WeatherType::HarshSun)
    );
    let levels = if sunny { 2 } else { 1 };
    apply_stat_change_effect(
        &[BattleStat::Attack, BattleStat::SpecialAttack],
        levels,
        ctx,
        user,
    )
}

pub(super) fn apply_belly_drum_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let cost = user_mon.max_hp() / 2;
    user_mon.damage(cost);
    let before = user_mon.stat_stage(BattleStat::Attack);
    user_mon.set_stat_stage(BattleStat::Attack, 6);
    scheduler.queue_message(format!(
        "{} cut its own HP\nand maximized its Attack!",
        user_mon.name
    ));
    scheduler.unshift_phase(Phase::StatChange {
        slot: user,
        stats: vec![BattleStat::Attack],
        levels: 6 - before,
    });
    Ok(true)
}

/// Haze: every combatant on the field loses its stat changes.
pub(super) fn apply_haze_effect(ctx: &mut BattleContext) -> bool {
    for combatant in ctx.combatants.iter_mut().flatten() {
        if combatant.is_active() {
            combatant.reset_stat_stages();
        }
    }
    ctx.scheduler
        .queue_message("All stat changes were eliminated!");
    true
}

pub(super) fn apply_clear_target_stats_effect(
    ctx: &mut BattleContext,
    target: BattlerIndex,
) -> EngineResult<bool> {
    let (target_mon, scheduler) = ctx.get_with_scheduler(target)?;
    if target_mon.stat_stages.is_empty() {
        return Ok(false);
    }
    target_mon.reset_stat_stages();
    scheduler.queue_message(format!("{}'s stat changes\nwere removed!", target_mon.name));
    Ok(true)
}

/// Psych Up.
pub(super) fn apply_copy_stat_stages_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
) -> EngineResult<bool> {
    let target_mon = ctx.get(target)?;
    let stages = target_mon.stat_stages.clone();
    let target_name = target_mon.name.clone();
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    user_mon.stat_stages = stages;
    scheduler.queue_message(format!(
        "{} copied\n{}'s stat changes!",
        user_mon.name, target_name
    ));
    Ok(true)
}

/// Topsy-Turvy.
pub(super) fn apply_invert_stat_stages_effect(
    ctx: &mut BattleContext,
    target: BattlerIndex,
) -> EngineResult<bool> {
    let (target_mon, scheduler) = ctx.get_with_scheduler(target)?;
    for stat in BattleStat::iter() {
        let stage = target_mon.stat_stage(stat);
        target_mon.set_stat_stage(stat, -stage);
    }
    scheduler.queue_message(format!(
        "{}'s stat changes\nwere all reversed!",
        target_mon.name
    ));
    Ok(true)
}

/// Ghosts trade half their HP to curse the target; everyone else trades speed
/// for attack and defense.
pub(super) fn apply_curse_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    if !user_mon.is_of_type(PokemonType::Ghost) {
        let raised = apply_stat_change_effect(&[BattleStat::Attack, BattleStat::Defense], 1, ctx, user)?;
        let lowered = apply_stat_change_effect(&[BattleStat::Speed], -1, ctx, user)?;
        return Ok(raised || lowered);
    }

    let user_id = user_mon.id;
    let user_name = user_mon.name.clone();
    let Some(target_mon) = ctx.combatant(target).filter(|t| t.is_active()) else {
        return Ok(false);
    };
    if target_mon.has_tag(BattlerTagType::Cursed) {
        return Ok(false);
    }
    let target_name = target_mon.name.clone();

    let user_mon = ctx.get_mut(user)?;
    let cost = user_mon.max_hp() / 2;
    user_mon.damage(cost);

    let tag = BattlerTag::new(BattlerTagType::Cursed, 0, Some(move_data.id), Some(user_id))
        .with_source_slot(user);
    let (target_mon, scheduler) = ctx.get_with_scheduler(target)?;
    target_mon.add_battler_tag(tag, scheduler);
    scheduler.unshift_phase(Phase::CommonAnim {
        slot: Some(target),
        anim: CommonAnim::Curse,
    });
    scheduler.queue_message(format!(
        "{} cut its own HP\nand laid a curse on {}!",
        user_name, target_name
    ));
    Ok(true)
}
