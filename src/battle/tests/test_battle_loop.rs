#[cfg(test)]
mod tests {
    use crate::battle::ai::{Behavior, ScoringAI};
    use crate::battle::state::BattlerIndex;
    use crate::battle::turn_orchestrator::{is_side_defeated, replace_fainted, run_turn};
    use crate::config::BattleConfig;
    use crate::errors::EngineResult;
    use pretty_assertions::assert_eq;

    const DEMO_CONFIG: &str = include_str!("../../../data/demo_battle.ron");

    /// Drive both sides with the scoring AI. Returns every message and the
    /// number of turns played.
    fn play_out(config: &BattleConfig) -> EngineResult<(Vec<String>, u32)> {
        let mut ctx = config.build_context()?;
        let ai = ScoringAI::new();
        let mut log = Vec::new();

        for _ in 0..config.turn_limit {
            let mut commands = Vec::new();
            for slot in ctx.active_slots() {
                commands.push((slot, ai.decide_command(&mut ctx, slot)?));
            }
            run_turn(&mut ctx, &commands)?;
            replace_fainted(&mut ctx, |ctx, slot| ai.best_party_member(ctx, slot))?;
            ctx.scheduler.run_all();
            log.extend(ctx.scheduler.take_messages());
            ctx.scheduler.take_presented();

            if is_side_defeated(&ctx, BattlerIndex::Enemy) || is_side_defeated(&ctx, BattlerIndex::Player) {
                break;
            }
        }
        assert!(ctx.scheduler.presented().is_empty());
        assert_eq!(ctx.scheduler.pending_phases().count(), 0);
        Ok((log, ctx.battle.turn))
    }

    #[test]
    fn test_demo_battle_runs_to_completion() {
        // Arrange
        let config = BattleConfig::from_ron_str(DEMO_CONFIG).expect("demo config parses");

        // Act
        let (log, turns) = play_out(&config).expect("battle runs without engine errors");

        // Assert
        assert!(turns >= 1);
        assert!(turns <= config.turn_limit);
        assert!(log.iter().any(|message| message.contains(" used ")));
        assert_eq!(
            config.build_context().expect("context builds").scheduler.messages().count(),
            0
        );
    }

    #[test]
    fn test_seeded_battle_is_reproducible() {
        let config = BattleConfig::from_ron_str(DEMO_CONFIG).expect("demo config parses");

        let first = play_out(&config).expect("first run");
        let second = play_out(&config).expect("second run");

        assert_eq!(first, second);
    }

    #[test]
    fn test_double_battle_runs() {
        let mut config = BattleConfig::from_ron_str(DEMO_CONFIG).expect("demo config parses");
        config.double = true;
        config.turn_limit = 10;

        let (_, turns) = play_out(&config).expect("double battle runs");

        assert!(turns <= 10);
    }
}
