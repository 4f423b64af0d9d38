// In: src/battle/move_effects/status_effects.rs

// --- IMPORTS ---
use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
use crate::battle::context::BattleContext;
use crate::battle::scheduler::{CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::Move;
use schema::{BattlerTagType, StatusEffect};

/// Turns of sleep from a move other than Rest.
const SLEEP_TURNS: (u32, u32) = (2, 4);
const REST_SLEEP_TURNS: u8 = 3;
const CONFUSION_TURNS: (u32, u32) = (2, 5);

// --- STATUS CONDITIONS ---

/// Give `effect` to the combatant at `holder`, if it can take it.
pub(super) fn apply_status_effect(
    effect: StatusEffect,
    ctx: &mut BattleContext,
    holder: BattlerIndex,
) -> EngineResult<bool> {
    let turns = match effect {
        StatusEffect::Sleep => ctx.rng.rand_range(SLEEP_TURNS.0, SLEEP_TURNS.1, "Sleep Turns") as u8,
        _ => 0,
    };
    let (holder_mon, scheduler) = ctx.get_with_scheduler(holder)?;
    if !holder_mon.set_status(effect, turns) {
        return Ok(false);
    }
    scheduler.unshift_phase(Phase::ObtainStatus {
        slot: holder,
        effect,
    });
    scheduler.queue_message(format!("{} {}", holder_mon.name, effect.obtain_message()));
    Ok(true)
}

/// Burn, paralysis or freeze with equal odds.
pub(super) fn apply_tri_attack_effect(
    ctx: &mut BattleContext,
    target: BattlerIndex,
) -> EngineResult<bool> {
    const EFFECTS: [StatusEffect; 3] = [
        StatusEffect::Burn,
        StatusEffect::Paralysis,
        StatusEffect::Freeze,
    ];
    let effect = EFFECTS[ctx.rng.pick_index(EFFECTS.len(), "Tri Attack Status")];
    apply_status_effect(effect, ctx, target)
}

/// Sleep for a fixed number of turns and restore all HP, replacing any status.
pub(super) fn apply_rest_effect(ctx: &mut BattleContext, user: BattlerIndex) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    if user_mon.status_effect() == Some(StatusEffect::Sleep) {
        return Ok(false);
    }
    user_mon.reset_status();
    if !user_mon.set_status(StatusEffect::Sleep, REST_SLEEP_TURNS) {
        return Ok(false);
    }
    let max_hp = user_mon.max_hp();
    user_mon.heal(max_hp);
    scheduler.unshift_phase(Phase::ObtainStatus {
        slot: user,
        effect: StatusEffect::Sleep,
    });
    scheduler.queue_message(format!("{} slept and\nbecame healthy!", user_mon.name));
    Ok(true)
}

/// Refresh: cures poison, burn and paralysis.
pub(super) fn apply_cure_status_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    match user_mon.status_effect() {
        Some(
            effect @ (StatusEffect::Poison
            | StatusEffect::Toxic
            | StatusEffect::Burn
            | StatusEffect::Paralysis),
        ) => {
            user_mon.reset_status();
            scheduler.queue_message(format!("{} {}", user_mon.name, effect.cure_message()));
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Heal Bell and Aromatherapy: the whole party, benched members included.
pub(super) fn apply_party_cure_effect(
    message: &str,
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> bool {
    ctx.scheduler.queue_message(message);
    let mut cured = false;
    let side: Vec<BattlerIndex> = std::iter::once(user).chain(user.ally()).collect();
    for slot in side {
        if let Some(combatant) = ctx.combatant_mut(slot) {
            cured |= combatant.reset_status().is_some();
        }
    }
    for member in ctx.bench_for_mut(user).iter_mut() {
        cured |= member.reset_status().is_some();
    }
    cured
}

// --- BATTLER TAGS ---

pub(super) fn apply_add_tag_effect(
    tag_type: BattlerTagType,
    min_turns: i32,
    max_turns: i32,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    holder: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let turns = if max_turns > min_turns && min_turns >= 0 {
        ctx.rng
            .rand_range(min_turns as u32, max_turns as u32, "Tag Turns") as i32
    } else {
        min_turns
    };
    let user_id = ctx.get(user)?.id;
    let tag = BattlerTag::new(tag_type, turns, Some(move_data.id), Some(user_id)).with_source_slot(user);
    let (holder_mon, scheduler) = ctx.get_with_scheduler(holder)?;
    let added = holder_mon.add_battler_tag(tag, scheduler);
    if added {
        let anim = match tag_type {
            BattlerTagType::Seeded => Some(CommonAnim::Seed),
            BattlerTagType::Trapped => Some(CommonAnim::Trap),
            _ => None,
        };
        if let Some(anim) = anim {
            scheduler.unshift_phase(Phase::CommonAnim {
                slot: Some(holder),
                anim,
            });
        }
    }
    Ok(added)
}

pub(super) fn apply_confuse_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    apply_add_tag_effect(
        BattlerTagType::Confused,
        CONFUSION_TURNS.0 as i32,
        CONFUSION_TURNS.1 as i32,
        ctx,
        user,
        target,
        move_data,
    )
}

/// Flinch lasts until the end of the turn; it only matters if the target has
/// yet to move.
pub(super) fn apply_flinch_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    apply_add_tag_effect(BattlerTagType::Flinched, 1, 1, ctx, user, target, move_data)
}

/// Protect, Detect, Endure. Each consecutive success cuts the odds to a third.
pub(super) fn apply_protect_effect(
    tag_type: BattlerTagType,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let streak = ctx.get(user)?.summon_data.consecutive_protects;
    let succeeds = streak == 0 || {
        let odds = 3u32.saturating_pow(streak);
        ctx.rng.rand_int(odds, "Protect Success") == 0
    };

    let user_mon = ctx.get_mut(user)?;
    if !succeeds {
        user_mon.summon_data.consecutive_protects = 0;
        ctx.scheduler.queue_message("But it failed!");
        return Ok(false);
    }
    user_mon.summon_data.consecutive_protects += 1;
    let tag = BattlerTag::new(tag_type, 1, Some(move_data.id), Some(user_mon.id));
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let added = user_mon.add_battler_tag(tag, scheduler);
    if added && tag_type == BattlerTagType::Protected {
        scheduler.unshift_phase(Phase::CommonAnim {
            slot: Some(user),
            anim: CommonAnim::Protect,
        });
    }
    Ok(added)
}

/// Spend a quarter of max HP on a decoy that absorbs attacks.
pub(super) fn apply_substitute_effect(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let cost = (user_mon.max_hp() / 4).max(1);
    if user_mon.hp <= cost {
        scheduler.queue_message("But it does not have enough HP\nleft to make a substitute!");
        return Ok(false);
    }
    let mut tag = BattlerTag::new(BattlerTagType::Substitute, 0, Some(move_data.id), Some(user_mon.id));
    tag.substitute_hp = cost;
    if !user_mon.add_battler_tag(tag, scheduler) {
        return Ok(false);
    }
    user_mon.damage(cost);
    Ok(true)
}
