use rogue_arena::battle::ai::{Behavior, ScoringAI};
use rogue_arena::battle::context::BattleContext;
use rogue_arena::battle::state::BattlerIndex;
use rogue_arena::battle::turn_orchestrator::{is_side_defeated, replace_fainted, run_turn};
use rogue_arena::config::BattleConfig;
use rogue_arena::errors::EngineResult;

const DEMO_CONFIG: &str = include_str!("../data/demo_battle.ron");

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BattleConfig::load(path),
        None => BattleConfig::from_ron_str(DEMO_CONFIG),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading battle config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_battle(&config) {
        eprintln!("Battle aborted: {}", e);
        std::process::exit(1);
    }
}

fn print_messages(ctx: &mut BattleContext) {
    ctx.scheduler.take_presented();
    for message in ctx.scheduler.take_messages() {
        println!("  {}", message.replace('\n', " "));
    }
}

/// Both sides are driven by the scoring AI until one is wiped out or the
/// turn limit is reached.
fn run_battle(config: &BattleConfig) -> EngineResult<()> {
    let mut ctx = config.build_context()?;
    let ai = ScoringAI::new();

    println!(
        "Wave {} in {:?}: {} vs {}",
        ctx.battle.wave_index,
        ctx.field.biome,
        ctx.name_of(BattlerIndex::Player),
        ctx.name_of(BattlerIndex::Enemy)
    );

    for _ in 0..config.turn_limit {
        let mut commands = Vec::new();
        for slot in ctx.active_slots() {
            let command = ai.decide_command(&mut ctx, slot)?;
            commands.push((slot, command));
        }

        println!("--- Turn {} ---", ctx.battle.turn + 1);
        run_turn(&mut ctx, &commands)?;
        replace_fainted(&mut ctx, |ctx, slot| ai.best_party_member(ctx, slot))?;
        ctx.scheduler.run_all();
        print_messages(&mut ctx);

        if is_side_defeated(&ctx, BattlerIndex::Enemy) {
            println!("The wild side was defeated!");
            return Ok(());
        }
        if is_side_defeated(&ctx, BattlerIndex::Player) {
            println!("The player's party was defeated!");
            return Ok(());
        }
    }
    println!("Turn limit reached.");
    Ok(())
}
