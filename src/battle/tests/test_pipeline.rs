#[cfg(test)]
mod tests {
    use crate::battle::move_effects::{apply_move_attrs, AttrArgs, AttrFilter};
    use crate::battle::move_phase::{use_move, MoveOrigin};
    use crate::battle::rng::BattleRng;
    use crate::battle::scheduler::Phase;
    use crate::battle::state::BattlerIndex;
    use crate::battle::tests::common::{assert_ok, create_test_context, flat_messages, TestCombatantBuilder};
    use crate::errors::EngineError;
    use crate::move_data::{AttrKind, Move, MoveAttr, TriggerPhase};
    use pretty_assertions::assert_eq;
    use schema::{BattleStat, FieldTagType, MoveId, MoveResult, PokemonType, Species};

    /// A self-targeted move with one pending unit followed by one synchronous unit.
    fn charge_then_message() -> Move {
        Move::self_status(MoveId::Splash, "Test Charge", PokemonType::Normal, 10, 0, 1)
            .attr(MoveAttr::Charge {
                message: "charged!",
                hide_tag: None,
                boost: None,
                sun_skips: false,
            })
            .attr(MoveAttr::NoEffect("sync"))
    }

    fn context() -> crate::battle::context::BattleContext {
        let user = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let other = TestCombatantBuilder::new(Species::Rattata, 20).build();
        create_test_context(user, other, BattleRng::new_for_test(vec![]))
    }

    #[test]
    fn test_synchronous_units_run_before_pending_units_join() {
        // Arrange
        let mut ctx = context();
        let move_data = charge_then_message();
        let mut args = AttrArgs::for_move(&move_data);

        // Act
        let applied = assert_ok(apply_move_attrs(
            AttrFilter::Where(|_| true),
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Player,
            &move_data,
            &mut args,
        ));

        // Assert
        assert!(applied);
        assert!(args.charging);
        assert_eq!(flat_messages(&ctx), vec!["sync", "Pikachu charged!"]);
        assert_eq!(
            ctx.scheduler.presented(),
            &[Phase::MoveChargeAnim {
                move_id: MoveId::Splash,
                user: BattlerIndex::Player,
            }]
        );
    }

    #[test]
    fn test_kind_filter_runs_only_matching_units() {
        let mut ctx = context();
        let move_data = charge_then_message();
        let mut args = AttrArgs::for_move(&move_data);

        assert_ok(apply_move_attrs(
            AttrFilter::Kind(AttrKind::ChargeOverride),
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Player,
            &move_data,
            &mut args,
        ));

        assert_eq!(flat_messages(&ctx), vec!["Pikachu charged!"]);
    }

    #[test]
    fn test_trigger_filter_skips_untriggered_units() {
        let mut ctx = context();
        let move_data = charge_then_message();
        let mut args = AttrArgs::for_move(&move_data);

        assert_ok(apply_move_attrs(
            AttrFilter::Triggered {
                phase: TriggerPhase::PostApply,
                self_target: Some(true),
            },
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Player,
            &move_data,
            &mut args,
        ));

        assert_eq!(flat_messages(&ctx), vec!["sync"]);
        assert!(!args.charging);
    }

    #[test]
    fn test_nothing_matching_reports_no_success() {
        let mut ctx = context();
        let move_data = charge_then_message();
        let mut args = AttrArgs::for_move(&move_data);

        let applied = assert_ok(apply_move_attrs(
            AttrFilter::Kind(AttrKind::FixedDamage),
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Enemy,
            &move_data,
            &mut args,
        ));

        assert!(!applied);
        assert_eq!(args.fixed_damage, None);
        assert_eq!(ctx.scheduler.messages().count(), 0);
    }

    #[test]
    fn test_charge_message_precedes_its_stat_boost() {
        let user = TestCombatantBuilder::new(Species::Snorlax, 30)
            .with_moves(vec![MoveId::SkullBash])
            .build();
        let other = TestCombatantBuilder::new(Species::Rattata, 30).build();
        let mut ctx = create_test_context(user, other, BattleRng::new_for_test(vec![]));

        let result = assert_ok(use_move(
            &mut ctx,
            BattlerIndex::Player,
            MoveId::SkullBash,
            Some(BattlerIndex::Enemy),
            MoveOrigin::Selected,
        ));

        assert_eq!(result, MoveResult::Other);
        assert_eq!(
            flat_messages(&ctx),
            vec![
                "Snorlax used Skull Bash!",
                "Snorlax lowered its head!",
                "Snorlax's Defense rose!"
            ]
        );
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().stat_stage(BattleStat::Defense), 1);
        assert!(ctx.get(BattlerIndex::Enemy).unwrap().is_full_hp());
    }

    #[test]
    fn test_failing_unit_does_not_skip_later_units() {
        let mut ctx = context();
        let move_data = Move::self_status(MoveId::Splash, "Test Cure", PokemonType::Normal, 10, 0, 1)
            .attr(MoveAttr::CureStatus)
            .attr(MoveAttr::NoEffect("after"));
        let mut args = AttrArgs::for_move(&move_data);

        let applied = assert_ok(apply_move_attrs(
            AttrFilter::Where(|_| true),
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Player,
            &move_data,
            &mut args,
        ));

        assert!(applied);
        assert_eq!(flat_messages(&ctx), vec!["after"]);
    }

    #[test]
    fn test_issued_pending_units_are_joined_before_an_error_returns() {
        // Arrange
        let mut ctx = context();
        let move_data = charge_then_message().attr(MoveAttr::AddFieldTag {
            tag: FieldTagType::None,
            turns: 0,
        });
        let mut args = AttrArgs::for_move(&move_data);

        // Act
        let result = apply_move_attrs(
            AttrFilter::Where(|_| true),
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Player,
            &move_data,
            &mut args,
        );

        // Assert
        assert_eq!(result, Err(EngineError::UnregisteredFieldTag(FieldTagType::None)));
        assert!(args.charging);
        assert_eq!(flat_messages(&ctx), vec!["sync", "Pikachu charged!"]);
        assert_eq!(ctx.scheduler.pending_phases().count(), 0);
    }
}
