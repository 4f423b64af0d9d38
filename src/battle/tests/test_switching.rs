#[cfg(test)]
mod tests {
    use crate::battle::move_phase::{use_move, MoveOrigin};
    use crate::battle::rng::BattleRng;
    use crate::battle::state::{BattlerIndex, TurnCommand};
    use crate::battle::tests::common::{
        assert_ok, bench, create_test_context, has_flat_message, predictable_rng, TestCombatantBuilder,
    };
    use crate::battle::turn_orchestrator::{is_side_defeated, replace_fainted, run_turn};
    use pretty_assertions::assert_eq;
    use schema::{BattleStat, FieldTagType, MoveId, MoveResult, Species};

    #[test]
    fn test_stealth_rock_hits_the_incoming_combatant() {
        // Arrange
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let setter = TestCombatantBuilder::new(Species::Geodude, 20)
            .with_moves(vec![MoveId::StealthRock, MoveId::Splash])
            .build();
        let mut ctx = create_test_context(lead, setter, BattleRng::new_for_test(vec![]));
        bench(
            &mut ctx,
            BattlerIndex::Player,
            TestCombatantBuilder::new(Species::Eevee, 20).build(),
        );
        let laid = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Enemy,
            MoveId::StealthRock,
            None,
            MoveOrigin::Selected,
        ));
        assert_eq!(laid, MoveResult::Success);
        assert!(ctx.field.has_tag(FieldTagType::StealthRock));

        // Act
        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, TurnCommand::Pokemon { party_index: 0 }),
                (
                    BattlerIndex::Enemy,
                    TurnCommand::Fight {
                        move_id: MoveId::Splash,
                        targets: vec![],
                    },
                ),
            ],
        ));

        // Assert
        let eevee = ctx.get(BattlerIndex::Player).unwrap();
        assert_eq!(eevee.species, Species::Eevee);
        assert_eq!(eevee.hp, eevee.max_hp() - eevee.hp_fraction(0.125));
        assert!(has_flat_message(&ctx, "Pointed stones dug into Eevee!"));
        assert!(has_flat_message(&ctx, "But nothing happened!"));
    }

    #[test]
    fn test_hazards_spare_the_side_that_laid_them() {
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let setter = TestCombatantBuilder::new(Species::Geodude, 20)
            .with_moves(vec![MoveId::StealthRock])
            .build();
        let mut ctx = create_test_context(lead, setter, BattleRng::new_for_test(vec![]));
        bench(
            &mut ctx,
            BattlerIndex::Enemy,
            TestCombatantBuilder::new(Species::Rattata, 20).build(),
        );
        assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Enemy,
            MoveId::StealthRock,
            None,
            MoveOrigin::Selected,
        ));

        assert_ok(run_turn(
            &mut ctx,
            &[(BattlerIndex::Enemy, TurnCommand::Pokemon { party_index: 0 })],
        ));

        let rattata = ctx.get(BattlerIndex::Enemy).unwrap();
        assert_eq!(rattata.species, Species::Rattata);
        assert!(rattata.is_full_hp());
    }

    #[test]
    fn test_roar_drags_out_a_bench_member() {
        let roarer = TestCombatantBuilder::new(Species::Growlithe, 20)
            .with_moves(vec![MoveId::Roar])
            .build();
        let lead = TestCombatantBuilder::new(Species::Rattata, 20).build();
        // A single bench member still draws the forced pick.
        let mut ctx = create_test_context(roarer, lead, BattleRng::new_for_test(vec![0]));
        bench(
            &mut ctx,
            BattlerIndex::Enemy,
            TestCombatantBuilder::new(Species::Eevee, 20).build(),
        );

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::Roar,
            Some(BattlerIndex::Enemy),
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Success);
        assert_eq!(ctx.get(BattlerIndex::Enemy).unwrap().species, Species::Eevee);
        assert!(has_flat_message(&ctx, "Eevee was dragged out!"));
        let benched = &ctx.bench_for(BattlerIndex::Enemy)[0];
        assert_eq!(benched.species, Species::Rattata);
        assert!(!benched.active);
    }

    #[test]
    fn test_roar_fails_without_a_replacement() {
        let roarer = TestCombatantBuilder::new(Species::Growlithe, 20)
            .with_moves(vec![MoveId::Roar])
            .build();
        let lead = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(roarer, lead, BattleRng::new_for_test(vec![]));

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::Roar,
            Some(BattlerIndex::Enemy),
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Fail);
        assert!(has_flat_message(&ctx, "But it failed!"));
        assert_eq!(ctx.get(BattlerIndex::Enemy).unwrap().species, Species::Rattata);
    }

    #[test]
    fn test_rapid_spin_clears_hazards_and_raises_speed() {
        let spinner = TestCombatantBuilder::new(Species::Rattata, 20)
            .with_moves(vec![MoveId::RapidSpin])
            .build();
        let setter = TestCombatantBuilder::new(Species::Snorlax, 20)
            .with_moves(vec![MoveId::Spikes])
            .build();
        let mut ctx = create_test_context(spinner, setter, predictable_rng());
        assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Enemy,
            MoveId::Spikes,
            None,
            MoveOrigin::Selected,
        ));
        assert!(ctx.field.has_tag(FieldTagType::Spikes));

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::RapidSpin,
            Some(BattlerIndex::Enemy),
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Success);
        assert!(!ctx.field.has_tag(FieldTagType::Spikes));
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().stat_stage(BattleStat::Speed), 1);
        assert!(has_flat_message(&ctx, "Rattata's Speed rose!"));
    }

    #[test]
    fn test_fainted_lead_is_replaced_from_the_bench() {
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).with_hp(0).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(lead, enemy, BattleRng::new_for_test(vec![]));
        bench(
            &mut ctx,
            BattlerIndex::Player,
            TestCombatantBuilder::new(Species::Magikarp, 20).build(),
        );
        assert!(!is_side_defeated(&ctx, BattlerIndex::Player));

        let refilled = assert_ok(replace_fainted(&mut ctx, |_, _| Some(0)));

        assert_eq!(refilled, vec![BattlerIndex::Player]);
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().species, Species::Magikarp);
        assert!(has_flat_message(&ctx, "Go! Magikarp!"));
        assert!(ctx.bench_for(BattlerIndex::Player)[0].is_fainted());
    }

    #[test]
    fn test_side_is_defeated_when_everyone_has_fainted() {
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).with_hp(0).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(lead, enemy, BattleRng::new_for_test(vec![]));
        bench(
            &mut ctx,
            BattlerIndex::Player,
            TestCombatantBuilder::new(Species::Magikarp, 20).with_hp(0).build(),
        );

        assert!(is_side_defeated(&ctx, BattlerIndex::Player));
        assert!(!is_side_defeated(&ctx, BattlerIndex::Enemy));
        let refilled = assert_ok(replace_fainted(&mut ctx, |_, _| None));
        assert!(refilled.is_empty());
    }

    #[test]
    fn test_placed_player_combatants_become_participants() {
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).with_id(7).build();
        let other = TestCombatantBuilder::new(Species::Rattata, 20).with_id(9).build();
        let ctx = create_test_context(lead, other, BattleRng::new_for_test(vec![]));

        assert_eq!(ctx.slot_of_id(7), Some(BattlerIndex::Player));
        assert_eq!(ctx.slot_of_id(9), Some(BattlerIndex::Enemy));
        assert_eq!(ctx.slot_of_id(3), None);
        assert!(ctx.battle.player_participant_ids.contains(&7));
        assert!(!ctx.battle.player_participant_ids.contains(&9));
    }
}
