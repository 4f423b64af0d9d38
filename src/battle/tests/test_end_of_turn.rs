#[cfg(test)]
mod tests {
    use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
    use crate::battle::rng::BattleRng;
    use crate::battle::state::BattlerIndex;
    use crate::battle::tests::common::{
        assert_ok, create_test_context, has_flat_message, TestCombatantBuilder,
    };
    use crate::battle::turn_orchestrator::end_turn;
    use pretty_assertions::assert_eq;
    use schema::{BattlerTagType, MoveId, Species, StatusEffect, WeatherType};

    #[test]
    fn test_burn_costs_a_sixteenth() {
        // Arrange
        let burned = TestCombatantBuilder::new(Species::Snorlax, 30)
            .with_status(StatusEffect::Burn)
            .build();
        let other = TestCombatantBuilder::new(Species::Rattata, 30).build();
        let mut ctx = create_test_context(burned, other, BattleRng::new_for_test(vec![]));
        let max_hp = ctx.get(BattlerIndex::Player).unwrap().max_hp();

        // Act
        assert_ok(end_turn(&mut ctx));

        // Assert
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().hp, max_hp - max_hp / 16);
        assert!(has_flat_message(&ctx, "Snorlax is hurt by its burn!"));
        assert!(ctx.get(BattlerIndex::Enemy).unwrap().is_full_hp());
    }

    #[test]
    fn test_toxic_damage_escalates() {
        let poisoned = TestCombatantBuilder::new(Species::Snorlax, 30)
            .with_status(StatusEffect::Toxic)
            .build();
        let other = TestCombatantBuilder::new(Species::Rattata, 30).build();
        let mut ctx = create_test_context(poisoned, other, BattleRng::new_for_test(vec![]));
        let max_hp = ctx.get(BattlerIndex::Player).unwrap().max_hp();

        assert_ok(end_turn(&mut ctx));
        let after_first = ctx.get(BattlerIndex::Player).unwrap().hp;
        assert_ok(end_turn(&mut ctx));
        let after_second = ctx.get(BattlerIndex::Player).unwrap().hp;

        assert_eq!(max_hp - after_first, max_hp / 16);
        assert_eq!(after_first - after_second, max_hp * 2 / 16);
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().status.unwrap().turns, 2);
    }

    #[test]
    fn test_leech_seed_drains_into_the_seeder() {
        let seeder = TestCombatantBuilder::new(Species::Pikachu, 20).with_hp(10).build();
        let seeded = TestCombatantBuilder::new(Species::Snorlax, 30).build();
        let mut ctx = create_test_context(seeder, seeded, BattleRng::new_for_test(vec![]));
        let seeded_max = ctx.get(BattlerIndex::Enemy).unwrap().max_hp();
        {
            let (mon, scheduler) = assert_ok(ctx.get_with_scheduler(BattlerIndex::Enemy));
            let tag = BattlerTag::new(BattlerTagType::Seeded, 0, Some(MoveId::LeechSeed), Some(1))
                .with_source_slot(BattlerIndex::Player);
            assert!(mon.add_battler_tag(tag, scheduler));
        }

        assert_ok(end_turn(&mut ctx));

        let sapped = seeded_max / 8;
        assert_eq!(ctx.get(BattlerIndex::Enemy).unwrap().hp, seeded_max - sapped);
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().hp, 10 + sapped);
        assert!(has_flat_message(&ctx, "Snorlax's health is sapped by Leech Seed!"));
        assert!(
            ctx.get(BattlerIndex::Enemy).unwrap().has_tag(BattlerTagType::Seeded),
            "Leech Seed lasts until the holder leaves"
        );
    }

    #[test]
    fn test_sandstorm_spares_rock_types() {
        let exposed = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let sheltered = TestCombatantBuilder::new(Species::Geodude, 20).build();
        let mut ctx = create_test_context(exposed, sheltered, BattleRng::new_for_test(vec![]));
        assert!(ctx
            .field
            .try_set_weather(Some(WeatherType::Sandstorm), true, &mut ctx.scheduler));
        let max_hp = ctx.get(BattlerIndex::Player).unwrap().max_hp();

        assert_ok(end_turn(&mut ctx));

        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().hp, max_hp - max_hp / 16);
        assert!(ctx.get(BattlerIndex::Enemy).unwrap().is_full_hp());
        assert!(has_flat_message(&ctx, "Pikachu is buffeted by the sandstorm!"));
        assert_eq!(ctx.field.weather().unwrap().turns_left, 4);
    }

    #[test]
    fn test_turn_bookkeeping_resets() {
        let player = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(player, enemy, BattleRng::new_for_test(vec![]));
        let turn = ctx.battle.turn;
        let on_field = ctx.get(BattlerIndex::Player).unwrap().summon_data.turns_on_field;
        {
            let mon = assert_ok(ctx.get_mut(BattlerIndex::Player));
            mon.turn_data.acted = true;
            mon.turn_data.damage_dealt = 12;
        }

        assert_ok(end_turn(&mut ctx));

        let mon = ctx.get(BattlerIndex::Player).unwrap();
        assert_eq!(ctx.battle.turn, turn + 1);
        assert!(!mon.turn_data.acted);
        assert_eq!(mon.turn_data.damage_dealt, 0);
        assert_eq!(mon.summon_data.turns_on_field, on_field + 1);
    }

    #[test]
    fn test_protection_lapses_at_turn_end() {
        let player = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let enemy = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = create_test_context(player, enemy, BattleRng::new_for_test(vec![]));
        {
            let (mon, scheduler) = assert_ok(ctx.get_with_scheduler(BattlerIndex::Player));
            mon.add_battler_tag(BattlerTag::new(BattlerTagType::Protected, 1, None, None), scheduler);
        }

        assert_ok(end_turn(&mut ctx));

        assert!(!ctx.get(BattlerIndex::Player).unwrap().has_tag(BattlerTagType::Protected));
    }

    #[test]
    fn test_residual_damage_can_faint() {
        let burned = TestCombatantBuilder::new(Species::Rattata, 20)
            .with_status(StatusEffect::Burn)
            .with_hp(1)
            .build();
        let other = TestCombatantBuilder::new(Species::Pikachu, 20).build();
        let mut ctx = create_test_context(burned, other, BattleRng::new_for_test(vec![]));

        assert_ok(end_turn(&mut ctx));

        assert!(ctx.get(BattlerIndex::Player).unwrap().is_fainted());
        assert!(has_flat_message(&ctx, "Rattata fainted!"));
    }
}
