#[cfg(test)]
mod tests {
    use crate::battle::battler_tags::{BattlerTag, BattlerTagHolder};
    use crate::battle::context::BattleContext;
    use crate::battle::move_phase::can_act;
    use crate::battle::rng::BattleRng;
    use crate::battle::state::BattlerIndex;
    use crate::battle::tests::common::{
        assert_ok, create_test_context, has_flat_message, TestCombatantBuilder,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{BattlerTagType, Species, StatusEffect};

    fn context_with_player(player: crate::battle::combatant::Combatant, rng: Vec<u32>) -> BattleContext {
        let enemy = TestCombatantBuilder::new(Species::Rattata, 10).build();
        create_test_context(player, enemy, BattleRng::new_for_test(rng))
    }

    fn give_tag(ctx: &mut BattleContext, slot: BattlerIndex, tag_type: BattlerTagType, turns: i32) {
        let (mon, scheduler) = assert_ok(ctx.get_with_scheduler(slot));
        assert!(mon.add_battler_tag(BattlerTag::new(tag_type, turns, None, None), scheduler));
    }

    #[test]
    fn test_sleep_counts_down_then_wakes() {
        // Arrange
        let sleeper = TestCombatantBuilder::new(Species::Snorlax, 30).asleep_for(2).build();
        let mut ctx = context_with_player(sleeper, vec![]);

        // Act: the first attempt is spent asleep
        let first = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        // Assert
        assert!(!first);
        assert!(has_flat_message(&ctx, "Snorlax is fast asleep."));
        let status = ctx.get(BattlerIndex::Player).unwrap().status.unwrap();
        assert_eq!(status.turns, 1);

        // Act: the counter runs out and the sleeper acts the same turn
        let second = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert!(second);
        assert!(has_flat_message(&ctx, "Snorlax woke up!"));
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().status, None);
    }

    #[rstest]
    #[case("thaws on a low roll", 10, true)]
    #[case("stays frozen on a high roll", 50, false)]
    fn test_freeze_thaw_roll(#[case] desc: &str, #[case] roll: u32, #[case] acts: bool) {
        let frozen = TestCombatantBuilder::new(Species::Pikachu, 20)
            .with_status(StatusEffect::Freeze)
            .build();
        let mut ctx = context_with_player(frozen, vec![roll]);

        let result = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert_eq!(result, acts, "{}", desc);
        let still_frozen = ctx.get(BattlerIndex::Player).unwrap().status_effect() == Some(StatusEffect::Freeze);
        assert_eq!(still_frozen, !acts);
        if acts {
            assert!(has_flat_message(&ctx, "Pikachu was defrosted!"));
        } else {
            assert!(has_flat_message(&ctx, "Pikachu is frozen solid!"));
        }
    }

    #[rstest]
    #[case("fully paralyzed", 10, false)]
    #[case("moves through paralysis", 50, true)]
    fn test_paralysis_roll(#[case] desc: &str, #[case] roll: u32, #[case] acts: bool) {
        let paralyzed = TestCombatantBuilder::new(Species::Pikachu, 20)
            .with_status(StatusEffect::Paralysis)
            .build();
        let mut ctx = context_with_player(paralyzed, vec![roll]);

        let result = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert_eq!(result, acts, "{}", desc);
        assert_eq!(
            has_flat_message(&ctx, "Pikachu is paralyzed! It can't move!"),
            !acts
        );
    }

    #[test]
    fn test_flinch_blocks_and_is_consumed() {
        let player = TestCombatantBuilder::new(Species::Rattata, 20).build();
        let mut ctx = context_with_player(player, vec![]);
        give_tag(&mut ctx, BattlerIndex::Player, BattlerTagType::Flinched, 1);

        let result = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert!(!result);
        assert!(has_flat_message(&ctx, "Rattata flinched!"));
        assert!(!ctx.get(BattlerIndex::Player).unwrap().has_tag(BattlerTagType::Flinched));
    }

    #[test]
    fn test_recharge_blocks_one_turn() {
        let player = TestCombatantBuilder::new(Species::Snorlax, 40).build();
        let mut ctx = context_with_player(player, vec![]);
        give_tag(&mut ctx, BattlerIndex::Player, BattlerTagType::Recharging, 0);

        let blocked = assert_ok(can_act(&mut ctx, BattlerIndex::Player));
        let next = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert!(!blocked);
        assert!(next);
        assert!(has_flat_message(&ctx, "Snorlax must recharge!"));
    }

    #[test]
    fn test_confusion_self_hit() {
        let player = TestCombatantBuilder::new(Species::Snorlax, 30).build();
        // Self-hit roll, then the damage roll.
        let mut ctx = context_with_player(player, vec![10, 50]);
        give_tag(&mut ctx, BattlerIndex::Player, BattlerTagType::Confused, 3);

        let result = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert!(!result);
        let confused = ctx.get(BattlerIndex::Player).unwrap();
        assert!(confused.hp < confused.max_hp());
        assert!(confused.has_tag(BattlerTagType::Confused));
        assert!(has_flat_message(&ctx, "It hurt itself in its confusion!"));
    }

    #[test]
    fn test_confusion_wears_off_before_rolling() {
        let player = TestCombatantBuilder::new(Species::Snorlax, 30).build();
        let mut ctx = context_with_player(player, vec![]);
        give_tag(&mut ctx, BattlerIndex::Player, BattlerTagType::Confused, 1);

        let result = assert_ok(can_act(&mut ctx, BattlerIndex::Player));

        assert!(result);
        assert!(has_flat_message(&ctx, "Snorlax snapped out of confusion!"));
        assert!(ctx.get(BattlerIndex::Player).unwrap().is_full_hp());
    }
}
