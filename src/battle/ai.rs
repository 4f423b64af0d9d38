//! Move and switch scoring for computer-controlled combatants.

use crate::battle::context::BattleContext;
use crate::battle::damage::STAB_MULTIPLIER;
use crate::battle::move_effects::{is_attack, move_benefits};
use crate::battle::state::{BattlerIndex, TurnCommand};
use crate::battle::targeting::eligible_targets;
use crate::errors::EngineResult;
use crate::move_data::{conditions_hold, get_move};
use log::debug;
use ordered_float::OrderedFloat;
use schema::{MoveCategory, MoveId, PokemonType};

/// Score of a move that would fail or do nothing.
pub const FAILING_SCORE: f64 = -20.0;

/// Members below this share of their HP are not sent in by choice.
const SWITCH_HP_FLOOR: f64 = 0.2;

/// A trait for any system that can decide on a turn command.
pub trait Behavior {
    fn decide_command(&self, ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<TurnCommand>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScoringAI;

impl ScoringAI {
    pub fn new() -> Self {
        Self
    }

    /// Score of `move_id` against each slot it could target.
    pub fn score_targets(
        &self,
        ctx: &BattleContext,
        user: BattlerIndex,
        move_id: MoveId,
    ) -> EngineResult<Vec<(BattlerIndex, f64)>> {
        let move_data = get_move(move_id)?;
        let user_mon = ctx.get(user)?;
        let mut targets = eligible_targets(ctx, user, move_data.target);
        if targets == [BattlerIndex::Attacker] {
            targets = ctx.resolve_attacker(user).into_iter().collect();
        }
        if targets.is_empty() || !conditions_hold(ctx, user, targets.first().copied(), move_data) {
            return Ok(vec![]);
        }

        let mut scores = Vec::with_capacity(targets.len());
        for target in targets {
            let target_mon = ctx.get(target)?;
            let (user_benefit, target_benefit) = move_benefits(ctx, user, target, move_data);
            let ally = target.same_side(user);

            let mut target_score = target_benefit;
            if is_attack(move_data.category) {
                let effectiveness = target_mon.attack_effectiveness(move_data.move_type) as f64;
                let mut attack_score = if effectiveness < 1.0 { -2.0 } else { 2.0 };
                let (attack, defense) = match move_data.category {
                    MoveCategory::Physical => {
                        (user_mon.battle_stats().attack, target_mon.battle_stats().defense)
                    }
                    _ => (user_mon.battle_stats().sp_attack, target_mon.battle_stats().sp_defense),
                };
                if attack > defense {
                    attack_score *= 1.5;
                }
                attack_score += move_data.power.max(0) as f64 / 5.0;
                target_score -= attack_score;
            }
            target_score *= if ally { 1.0 } else { -1.0 };

            if is_attack(move_data.category) {
                let effectiveness = target_mon.attack_effectiveness(move_data.move_type) as f64;
                let stab = user_mon.is_of_type(move_data.move_type);
                if ally {
                    if effectiveness > 0.0 {
                        target_score /= effectiveness;
                    }
                    if stab {
                        target_score /= STAB_MULTIPLIER;
                    }
                } else {
                    target_score *= effectiveness;
                    if stab {
                        target_score *= STAB_MULTIPLIER;
                    }
                }
            }
            let mut score = user_benefit + target_score;
            if score == 0.0 {
                score = FAILING_SCORE;
            }
            scores.push((target, score));
        }
        Ok(scores)
    }

    /// Average score of `move_id` across its targets. Never mutates the context.
    pub fn score_move(&self, ctx: &BattleContext, user: BattlerIndex, move_id: MoveId) -> EngineResult<f64> {
        let scores = self.score_targets(ctx, user, move_id)?;
        if scores.is_empty() {
            return Ok(FAILING_SCORE);
        }
        Ok(scores.iter().map(|(_, score)| score).sum::<f64>() / scores.len() as f64)
    }

    /// Best usable move and its preferred target. Ties are broken by a small
    /// rng jitter.
    pub fn choose_move(
        &self,
        ctx: &mut BattleContext,
        user: BattlerIndex,
    ) -> EngineResult<Option<(MoveId, Option<BattlerIndex>)>> {
        let user_mon = ctx.get(user)?;
        let mut usable = Vec::new();
        for slot in user_mon.moveset() {
            if user_mon.pp_left(slot.move_id)? > 0 {
                usable.push(slot.move_id);
            }
        }

        let mut scored = Vec::with_capacity(usable.len());
        for move_id in usable {
            let score = self.score_move(ctx, user, move_id)?;
            let target = self
                .score_targets(ctx, user, move_id)?
                .into_iter()
                .max_by_key(|(_, score)| OrderedFloat(*score))
                .map(|(target, _)| target);
            let jitter = ctx.rng.rand_int(1000, "AI Jitter") as f64 / 10_000.0;
            debug!("AI scored {:?} at {:.2}", move_id, score);
            scored.push((move_id, target, score + jitter));
        }

        Ok(scored
            .into_iter()
            .max_by_key(|(_, _, score)| OrderedFloat(*score))
            .map(|(move_id, target, _)| (move_id, target)))
    }

    /// Bench index of the member best matched against the opposing field.
    ///
    /// Weighs how hard the member's types hit the opponents against how hard
    /// the opponents' types hit back; members in danger are skipped. Falls back
    /// to the healthiest member.
    pub fn best_party_member(&self, ctx: &BattleContext, slot: BattlerIndex) -> Option<usize> {
        let opponents: Vec<_> = slot
            .opponents()
            .iter()
            .filter_map(|opponent| ctx.combatant(*opponent).filter(|c| c.is_active()))
            .collect();
        let bench = ctx.bench_for(slot);

        let matchup = |types: &[PokemonType]| {
            let mut offense: f64 = 0.5;
            let mut defense: f64 = 0.5;
            for opponent in &opponents {
                for own_type in types {
                    offense = offense.max(opponent.attack_effectiveness(*own_type) as f64);
                }
                for enemy_type in opponent.types() {
                    defense = defense.max(PokemonType::effectiveness_against(*enemy_type, types) as f64);
                }
            }
            offense / defense
        };

        let chosen = bench
            .iter()
            .enumerate()
            .filter(|(_, member)| !member.is_fainted() && member.hp_ratio() > SWITCH_HP_FLOOR)
            .max_by_key(|(_, member)| OrderedFloat(matchup(member.types())))
            .map(|(index, _)| index);

        chosen.or_else(|| {
            bench
                .iter()
                .enumerate()
                .filter(|(_, member)| !member.is_fainted())
                .max_by_key(|(_, member)| member.hp)
                .map(|(index, _)| index)
        })
    }
}

impl Behavior for ScoringAI {
    fn decide_command(&self, ctx: &mut BattleContext, slot: BattlerIndex) -> EngineResult<TurnCommand> {
        if let Some((move_id, target)) = self.choose_move(ctx, slot)? {
            return Ok(TurnCommand::Fight {
                move_id,
                targets: target.into_iter().collect(),
            });
        }
        // Nothing usable: send in a replacement if there is one.
        match self.best_party_member(ctx, slot) {
            Some(party_index) => Ok(TurnCommand::Pokemon { party_index }),
            None => Ok(TurnCommand::Run),
        }
    }
}
