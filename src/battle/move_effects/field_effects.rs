// In: src/battle/move_effects/field_effects.rs

use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::context::BattleContext;
use crate::battle::field_tags::TagSource;
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::Move;
use schema::{BattlerTagType, FieldTagType, WeatherType};

pub(super) fn apply_weather_change(weather: WeatherType, ctx: &mut BattleContext) -> bool {
    ctx.field
        .try_set_weather(Some(weather), true, &mut ctx.scheduler)
}

pub(super) fn apply_clear_weather(weather: WeatherType, ctx: &mut BattleContext) -> bool {
    ctx.field.clear_weather_of(weather, &mut ctx.scheduler)
}

/// Lay a field tag owned by the user. Re-using a stacking hazard adds a layer,
/// which still counts as success.
pub(super) fn apply_add_field_tag(
    tag_type: FieldTagType,
    turns: i32,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_data: &Move,
) -> EngineResult<bool> {
    let user_mon = ctx.get(user)?;
    let source = TagSource {
        id: user_mon.id,
        slot: user,
        name: user_mon.name.clone(),
    };
    let created = ctx.field.add_tag(
        tag_type,
        turns,
        Some(move_data.id),
        Some(source),
        &mut ctx.scheduler,
    )?;
    let stacking = ctx.field.get_tag(tag_type).is_some_and(|tag| tag.is_stacking());
    Ok(created || stacking)
}

/// Rapid Spin clears hazards laid against the user's side and frees the user;
/// Defog clears every hazard.
pub(super) fn apply_clear_hazards(
    own_side_only: bool,
    ctx: &mut BattleContext,
    user: BattlerIndex,
) -> EngineResult<bool> {
    let removed = ctx.field.remove_tags_where(
        |tag| {
            tag.is_stacking()
                && (!own_side_only
                    || tag
                        .source
                        .as_ref()
                        .is_some_and(|source| !source.slot.same_side(user)))
        },
        &mut ctx.scheduler,
    );
    if !own_side_only {
        return Ok(removed > 0);
    }

    let (user_mon, scheduler) = ctx.get_with_scheduler(user)?;
    let mut freed = false;
    for tag_type in [BattlerTagType::Trapped, BattlerTagType::Seeded] {
        freed |= user_mon.remove_tag(tag_type, scheduler);
    }
    Ok(removed > 0 || freed)
}
