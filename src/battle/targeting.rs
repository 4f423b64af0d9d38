// In: src/battle/targeting.rs

use crate::battle::context::BattleContext;
use crate::battle::state::BattlerIndex;
use crate::errors::EngineResult;
use crate::move_data::get_move;
use schema::{MoveId, MoveTarget};

/// Concrete targets of one use of a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTargets {
    pub targets: Vec<BattlerIndex>,
    pub multiple: bool,
}

/// Every slot a pattern could reach from `user`, before activity filtering.
fn candidate_slots(user: BattlerIndex, pattern: MoveTarget) -> Vec<BattlerIndex> {
    let opponents = user.opponents().to_vec();
    let ally: Vec<BattlerIndex> = user.ally().into_iter().collect();

    match pattern {
        MoveTarget::User => vec![user],
        MoveTarget::NearOther
        | MoveTarget::Other
        | MoveTarget::AllNearOthers
        | MoveTarget::AllOthers => opponents.into_iter().chain(ally).collect(),
        MoveTarget::NearEnemy
        | MoveTarget::AllNearEnemies
        | MoveTarget::AllEnemies
        | MoveTarget::EnemySide
        | MoveTarget::RandomNearEnemy => opponents,
        MoveTarget::Attacker => vec![BattlerIndex::Attacker],
        MoveTarget::NearAlly | MoveTarget::Ally => ally,
        MoveTarget::UserOrNearAlly | MoveTarget::UserAndAllies | MoveTarget::UserSide => {
            std::iter::once(user).chain(ally).collect()
        }
        MoveTarget::All | MoveTarget::BothSides => std::iter::once(user)
            .chain(ally)
            .chain(opponents)
            .collect(),
    }
}

/// Active slots a pattern may choose from. Read-only, used by the AI.
pub fn eligible_targets(
    ctx: &BattleContext,
    user: BattlerIndex,
    pattern: MoveTarget,
) -> Vec<BattlerIndex> {
    if pattern == MoveTarget::Attacker {
        return vec![BattlerIndex::Attacker];
    }
    candidate_slots(user, pattern)
        .into_iter()
        .filter(|slot| ctx.is_active(*slot))
        .collect()
}

/// Resolve the slots a move strikes. `None` resolves like a single near enemy.
///
/// Single-target patterns keep `intended` while it is still eligible and
/// otherwise pick uniformly among the candidates.
pub fn resolve_targets(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    move_id: Option<MoveId>,
    intended: Option<BattlerIndex>,
) -> EngineResult<MoveTargets> {
    let pattern = match move_id {
        Some(move_id) => get_move(move_id)?.target,
        None => MoveTarget::NearEnemy,
    };

    if pattern == MoveTarget::Attacker {
        return Ok(MoveTargets {
            targets: vec![BattlerIndex::Attacker],
            multiple: false,
        });
    }

    let candidates = eligible_targets(ctx, user, pattern);
    let multiple = pattern.hits_all();
    if multiple || candidates.len() <= 1 {
        return Ok(MoveTargets {
            targets: candidates,
            multiple,
        });
    }

    let chosen = match intended {
        Some(slot) if pattern != MoveTarget::RandomNearEnemy && candidates.contains(&slot) => slot,
        _ => candidates[ctx.rng.pick_index(candidates.len(), "Move Target")],
    };
    Ok(MoveTargets {
        targets: vec![chosen],
        multiple: false,
    })
}
