use crate::battle::combatant::{Combatant, Status};
use crate::battle::context::BattleContext;
use crate::battle::rng::BattleRng;
use crate::battle::state::{Battle, BattlerIndex};
use crate::errors::EngineResult;
use schema::{Biome, MoveId, Species, StatusEffect};

/// Wave used by test contexts. A boss wave, so building the battle draws no rng.
pub const TEST_WAVE: u32 = 10;

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let combatant = TestCombatantBuilder::new(Species::Pikachu, 25)
///     .with_moves(vec![MoveId::Tackle])
///     .with_status(StatusEffect::Paralysis)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    species: Species,
    level: u8,
    id: u32,
    moves: Vec<MoveId>,
    status: Option<Status>,
    current_hp: Option<u32>,
}

impl TestCombatantBuilder {
    /// Creates a new builder for a given species and level.
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            id: 0,
            moves: vec![MoveId::Tackle],
            status: None,
            current_hp: None,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_status(mut self, effect: StatusEffect) -> Self {
        self.status = Some(Status { effect, turns: 0 });
        self
    }

    /// Sleep with a fixed number of turns left.
    pub fn asleep_for(mut self, turns: u8) -> Self {
        self.status = Some(Status {
            effect: StatusEffect::Sleep,
            turns,
        });
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Combatant {
        let mut combatant = match Combatant::new(self.id, self.species, self.level, &self.moves) {
            Ok(combatant) => combatant,
            Err(err) => panic!("Failed to build combatant {:?}: {}", self.species, err),
        };
        combatant.status = self.status;
        if let Some(hp) = self.current_hp {
            combatant.hp = hp.min(combatant.max_hp());
        }
        combatant
    }
}

/// Creates a `BattleRng` with a long list of default values (50).
/// With it every accurate move hits, no critical lands, and damage rolls 87%.
pub fn predictable_rng() -> BattleRng {
    BattleRng::new_for_test(vec![50; 100])
}

/// A single battle in the plains between `player` and `enemy`.
pub fn create_test_context(player: Combatant, enemy: Combatant, rng: BattleRng) -> BattleContext {
    let mut rng = rng;
    let battle = Battle::new(TEST_WAVE, false, &mut rng);
    let mut ctx = BattleContext::new(Biome::Plains, battle, rng);
    let player = with_default_id(player, 1);
    let enemy = with_default_id(enemy, 2);
    assert_ok(ctx.place(BattlerIndex::Player, player));
    assert_ok(ctx.place(BattlerIndex::Enemy, enemy));
    ctx
}

/// A double battle; combatants are seated player, player two, enemy, enemy two.
pub fn create_double_context(combatants: [Combatant; 4], rng: BattleRng) -> BattleContext {
    let mut rng = rng;
    let battle = Battle::new(TEST_WAVE, true, &mut rng);
    let mut ctx = BattleContext::new(Biome::Plains, battle, rng);
    for (index, (slot, combatant)) in BattlerIndex::FIELD.iter().zip(combatants).enumerate() {
        let combatant = with_default_id(combatant, index as u32 + 1);
        assert_ok(ctx.place(*slot, combatant));
    }
    ctx
}

/// Put `member` on the bench of `slot`'s side.
pub fn bench(ctx: &mut BattleContext, slot: BattlerIndex, member: Combatant) {
    let mut member = member;
    if member.id == 0 {
        member.id = 100 + ctx.bench_for(slot).len() as u32 + if slot.is_player_side() { 0 } else { 50 };
    }
    member.active = false;
    ctx.bench_for_mut(slot).push(member);
}

fn with_default_id(mut combatant: Combatant, id: u32) -> Combatant {
    if combatant.id == 0 {
        combatant.id = id;
    }
    combatant
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: EngineResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Messages queued so far, newlines flattened for readable assertions.
pub fn flat_messages(ctx: &BattleContext) -> Vec<String> {
    ctx.scheduler.messages().map(|m| m.replace('\n', " ")).collect()
}

pub fn has_flat_message(ctx: &BattleContext, text: &str) -> bool {
    ctx.scheduler.messages().any(|m| m.replace('\n', " ") == text)
}
