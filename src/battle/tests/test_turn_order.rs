#[cfg(test)]
mod tests {
    use crate::battle::context::BattleContext;
    use crate::battle::state::{BattlerIndex, TurnCommand};
    use crate::battle::tests::common::{
        assert_ok, bench, create_test_context, flat_messages, predictable_rng, TestCombatantBuilder,
    };
    use crate::battle::turn_orchestrator::run_turn;
    use pretty_assertions::assert_eq;
    use schema::{FieldTagType, MoveId, Species, StatusEffect};

    fn fight(move_id: MoveId, target: BattlerIndex) -> TurnCommand {
        TurnCommand::Fight {
            move_id,
            targets: vec![target],
        }
    }

    /// Position of the first message equal to `text`.
    fn message_index(ctx: &BattleContext, text: &str) -> usize {
        flat_messages(ctx)
            .iter()
            .position(|message| message == text)
            .unwrap_or_else(|| panic!("message {:?} was never queued", text))
    }

    #[test]
    fn test_faster_combatant_moves_first() {
        // Arrange
        let fast = TestCombatantBuilder::new(Species::Pikachu, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .build();
        let slow = TestCombatantBuilder::new(Species::Snorlax, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .build();
        let mut ctx = create_test_context(fast, slow, predictable_rng());

        // Act
        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, fight(MoveId::SonicBoom, BattlerIndex::Enemy)),
                (BattlerIndex::Enemy, fight(MoveId::SonicBoom, BattlerIndex::Player)),
            ],
        ));

        // Assert
        assert!(
            message_index(&ctx, "Pikachu used Sonic Boom!") < message_index(&ctx, "Snorlax used Sonic Boom!")
        );
        assert_eq!(ctx.battle.turn, 1);
    }

    #[test]
    fn test_priority_beats_speed() {
        let fast = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let slow = TestCombatantBuilder::new(Species::Snorlax, 20)
            .with_moves(vec![MoveId::QuickAttack])
            .build();
        let mut ctx = create_test_context(fast, slow, predictable_rng());

        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, fight(MoveId::Tackle, BattlerIndex::Enemy)),
                (BattlerIndex::Enemy, fight(MoveId::QuickAttack, BattlerIndex::Player)),
            ],
        ));

        assert!(message_index(&ctx, "Snorlax used Quick Attack!") < message_index(&ctx, "Pikachu used Tackle!"));
    }

    #[test]
    fn test_trick_room_reverses_speed_order() {
        let fast = TestCombatantBuilder::new(Species::Pikachu, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .build();
        let slow = TestCombatantBuilder::new(Species::Snorlax, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .build();
        let mut ctx = create_test_context(fast, slow, predictable_rng());
        let added = assert_ok(ctx.field.add_tag(
            FieldTagType::TrickRoom,
            5,
            Some(MoveId::TrickRoom),
            None,
            &mut ctx.scheduler,
        ));
        assert!(added);

        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, fight(MoveId::SonicBoom, BattlerIndex::Enemy)),
                (BattlerIndex::Enemy, fight(MoveId::SonicBoom, BattlerIndex::Player)),
            ],
        ));

        assert!(
            message_index(&ctx, "Snorlax used Sonic Boom!") < message_index(&ctx, "Pikachu used Sonic Boom!")
        );
    }

    #[test]
    fn test_paralysis_halves_speed() {
        // Pikachu outspeeds Rattata at this level until paralysis halves it.
        let paralyzed = TestCombatantBuilder::new(Species::Pikachu, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .with_status(StatusEffect::Paralysis)
            .build();
        let rattata = TestCombatantBuilder::new(Species::Rattata, 20)
            .with_moves(vec![MoveId::SonicBoom])
            .build();
        let mut ctx = create_test_context(paralyzed, rattata, predictable_rng());

        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, fight(MoveId::SonicBoom, BattlerIndex::Enemy)),
                (BattlerIndex::Enemy, fight(MoveId::SonicBoom, BattlerIndex::Player)),
            ],
        ));

        assert!(
            message_index(&ctx, "Rattata used Sonic Boom!") < message_index(&ctx, "Pikachu used Sonic Boom!")
        );
    }

    #[test]
    fn test_switches_happen_before_moves() {
        let lead = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20)
            .with_moves(vec![MoveId::QuickAttack])
            .build();
        let mut ctx = create_test_context(lead, enemy, predictable_rng());
        bench(
            &mut ctx,
            BattlerIndex::Player,
            TestCombatantBuilder::new(Species::Eevee, 20).build(),
        );

        assert_ok(run_turn(
            &mut ctx,
            &[
                (BattlerIndex::Player, TurnCommand::Pokemon { party_index: 0 }),
                (BattlerIndex::Enemy, fight(MoveId::QuickAttack, BattlerIndex::Player)),
            ],
        ));

        assert!(message_index(&ctx, "Go! Eevee!") < message_index(&ctx, "Rattata used Quick Attack!"));
        let on_field = ctx.get(BattlerIndex::Player).unwrap();
        assert_eq!(on_field.species, Species::Eevee);
        assert!(on_field.hp < on_field.max_hp(), "the newcomer takes the hit");
        let benched = &ctx.bench_for(BattlerIndex::Player)[0];
        assert_eq!(benched.species, Species::Pikachu);
        assert!(benched.is_full_hp());
    }
}
