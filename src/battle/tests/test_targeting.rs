#[cfg(test)]
mod tests {
    use crate::battle::context::BattleContext;
    use crate::battle::move_phase::{use_move, MoveOrigin};
    use crate::battle::rng::BattleRng;
    use crate::battle::state::BattlerIndex;
    use crate::battle::targeting::{eligible_targets, resolve_targets};
    use crate::battle::tests::common::{
        assert_ok, create_double_context, create_test_context, predictable_rng, TestCombatantBuilder,
    };
    use pretty_assertions::assert_eq;
    use schema::{MoveId, MoveResult, MoveTarget, Species};

    fn double_battle(rng: Vec<u32>) -> BattleContext {
        create_double_context(
            [
                TestCombatantBuilder::new(Species::Pikachu, 20).build(),
                TestCombatantBuilder::new(Species::Rattata, 20).build(),
                TestCombatantBuilder::new(Species::Snorlax, 20).build(),
                TestCombatantBuilder::new(Species::Geodude, 20).build(),
            ],
            BattleRng::new_for_test(rng),
        )
    }

    #[test]
    fn test_single_battle_resolves_to_the_only_opponent() {
        // Arrange
        let player = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(player, enemy, BattleRng::new_for_test(vec![]));

        // Act
        let resolved = assert_ok(resolve_targets(&mut ctx, BattlerIndex::Player, Some(MoveId::Tackle), None));

        // Assert
        assert_eq!(resolved.targets, vec![BattlerIndex::Enemy]);
        assert!(!resolved.multiple);
    }

    #[test]
    fn test_spread_move_hits_every_near_enemy() {
        let mut ctx = double_battle(vec![]);

        let resolved = assert_ok(resolve_targets(&mut ctx, BattlerIndex::Player, Some(MoveId::Leer), None));

        assert_eq!(resolved.targets, vec![BattlerIndex::Enemy, BattlerIndex::EnemyTwo]);
        assert!(resolved.multiple);
    }

    #[test]
    fn test_eligible_intended_target_is_kept() {
        let mut ctx = double_battle(vec![]);

        let resolved = assert_ok(resolve_targets(
            &mut ctx,
            BattlerIndex::Player,
            Some(MoveId::Tackle),
            Some(BattlerIndex::EnemyTwo),
        ));

        assert_eq!(resolved.targets, vec![BattlerIndex::EnemyTwo]);
    }

    #[test]
    fn test_fainted_intended_target_falls_back_to_the_survivor() {
        let mut ctx = double_battle(vec![]);
        assert_ok(ctx.get_mut(BattlerIndex::EnemyTwo)).hp = 0;

        let resolved = assert_ok(resolve_targets(
            &mut ctx,
            BattlerIndex::Player,
            None,
            Some(BattlerIndex::EnemyTwo),
        ));

        assert_eq!(resolved.targets, vec![BattlerIndex::Enemy]);
    }

    #[test]
    fn test_ineligible_intended_target_is_rerolled() {
        // Tackle may also reach the ally, so the fallback is a random pick.
        let mut ctx = double_battle(vec![0]);
        assert_ok(ctx.get_mut(BattlerIndex::EnemyTwo)).hp = 0;

        let resolved = assert_ok(resolve_targets(
            &mut ctx,
            BattlerIndex::Player,
            Some(MoveId::Tackle),
            Some(BattlerIndex::EnemyTwo),
        ));

        assert_eq!(resolved.targets, vec![BattlerIndex::Enemy]);
    }

    #[test]
    fn test_earthquake_reaches_the_ally() {
        let ctx = double_battle(vec![]);

        let targets = eligible_targets(&ctx, BattlerIndex::Player, MoveTarget::AllNearOthers);

        assert_eq!(
            targets,
            vec![BattlerIndex::Enemy, BattlerIndex::EnemyTwo, BattlerIndex::PlayerTwo]
        );
    }

    #[test]
    fn test_counter_returns_double_the_damage_to_the_attacker() {
        let countering = TestCombatantBuilder::new(Species::Snorlax, 30)
            .with_moves(vec![MoveId::Counter])
            .build();
        let attacker = TestCombatantBuilder::new(Species::Rattata, 30).build();
        let mut ctx = create_test_context(countering, attacker, predictable_rng());
        assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Enemy,
            MoveId::Tackle,
            Some(BattlerIndex::Player),
            MoveOrigin::Selected,
        ));
        let taken = ctx.get(BattlerIndex::Player).unwrap().turn_data.damage_taken;
        assert!(taken > 0);
        let attacker_hp = ctx.get(BattlerIndex::Enemy).unwrap().hp;

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::Counter,
            None,
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Success);
        assert_eq!(ctx.get(BattlerIndex::Enemy).unwrap().hp, attacker_hp - taken * 2);
        let last = ctx.get(BattlerIndex::Player).unwrap().last_move().unwrap();
        assert_eq!(last.targets, vec![BattlerIndex::Enemy]);
    }

    #[test]
    fn test_counter_without_a_hit_fails() {
        let countering = TestCombatantBuilder::new(Species::Snorlax, 30)
            .with_moves(vec![MoveId::Counter])
            .build();
        let other = TestCombatantBuilder::new(Species::Rattata, 30).build();
        let mut ctx = create_test_context(countering, other, BattleRng::new_for_test(vec![]));

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::Counter,
            None,
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Fail);
    }

    #[test]
    fn test_both_sides_reaches_every_combatant_still_standing() {
        let mut ctx = double_battle(vec![]);
        ctx.get_mut(BattlerIndex::EnemyTwo).unwrap().hp = 0;

        let resolved = assert_ok(resolve_targets(&mut ctx, BattlerIndex::Enemy, Some(MoveId::Haze), None));

        assert_eq!(
            resolved.targets,
            vec![BattlerIndex::Enemy, BattlerIndex::Player, BattlerIndex::PlayerTwo]
        );
        assert!(resolved.multiple);
    }

    #[test]
    fn test_attacker_pattern_returns_only_the_placeholder() {
        let mut ctx = double_battle(vec![]);

        let resolved = assert_ok(resolve_targets(&mut ctx, BattlerIndex::Player, Some(MoveId::Counter), None));

        assert_eq!(resolved.targets, vec![BattlerIndex::Attacker]);
        assert!(!resolved.multiple);
    }
}
