// In: src/battle/field_tags.rs

use crate::battle::combatant::Combatant;
use crate::battle::scheduler::{BattleScheduler, CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::battle::tags::{Countdown, Tag};
use crate::errors::{EngineError, EngineResult};
use crate::move_data::move_name;
use log::debug;
use schema::{FieldTagType, MoveId, PokemonType, StatusEffect};
use serde::{Deserialize, Serialize};

/// Power multiplier applied by Mud Sport and Water Sport.
pub const SPORT_POWER_MULTIPLIER: f64 = 0.33;

/// The combatant that created a field tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSource {
    pub id: u32,
    pub slot: BattlerIndex,
    pub name: String,
}

impl TagSource {
    /// How the side opposite the source is described in messages.
    fn opponent_descriptor(&self) -> &'static str {
        if self.slot.is_player_side() {
            "the opposing team"
        } else {
            "your team"
        }
    }
}

/// A field-wide persistent effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTag {
    pub tag_type: FieldTagType,
    pub countdown: Countdown,
    pub source_move: Option<MoveId>,
    pub source: Option<TagSource>,
    pub layers: u8,
    pub max_layers: u8,
}

impl Tag for FieldTag {
    type Kind = FieldTagType;

    fn kind(&self) -> FieldTagType {
        self.tag_type
    }
}

/// Holder arguments handed to `FieldTag::apply`.
pub enum FieldTagApply<'a> {
    /// Scale the power of a move of `move_type`.
    MovePower {
        move_type: PokemonType,
        power: &'a mut f64,
    },
    /// Flip the speed ordering flag.
    SpeedOrder { reversed: &'a mut bool },
    /// A combatant entering the field.
    EntryHazard {
        target: &'a mut Combatant,
        target_slot: BattlerIndex,
        gravity: bool,
        scheduler: &'a mut BattleScheduler,
    },
}

impl FieldTag {
    /// Type id to concrete tag lookup.
    pub fn construct(
        tag_type: FieldTagType,
        turn_count: i32,
        source_move: Option<MoveId>,
        source: Option<TagSource>,
    ) -> EngineResult<Self> {
        let (turn_count, max_layers, default_move) = match tag_type {
            FieldTagType::None => return Err(EngineError::UnregisteredFieldTag(tag_type)),
            FieldTagType::MudSport => (turn_count, 1, MoveId::MudSport),
            FieldTagType::WaterSport => (turn_count, 1, MoveId::WaterSport),
            FieldTagType::TrickRoom => (turn_count, 1, MoveId::TrickRoom),
            FieldTagType::Gravity => (turn_count, 1, MoveId::Gravity),
            FieldTagType::Spikes => (0, 3, MoveId::Spikes),
            FieldTagType::ToxicSpikes => (0, 2, MoveId::ToxicSpikes),
            FieldTagType::StealthRock => (0, 1, MoveId::StealthRock),
        };

        Ok(Self {
            tag_type,
            countdown: Countdown::new(turn_count),
            source_move: source_move.or(Some(default_move)),
            source,
            layers: 1,
            max_layers,
        })
    }

    pub fn is_stacking(&self) -> bool {
        self.tag_type.is_entry_hazard()
    }

    fn move_display_name(&self) -> Option<String> {
        self.source_move.map(move_name)
    }

    // --- HOOKS ---

    pub fn apply(&self, args: FieldTagApply<'_>) -> bool {
        match (self.tag_type, args) {
            (FieldTagType::MudSport, FieldTagApply::MovePower { move_type, power }) => {
                weaken_move_type(PokemonType::Electric, move_type, power)
            }
            (FieldTagType::WaterSport, FieldTagApply::MovePower { move_type, power }) => {
                weaken_move_type(PokemonType::Fire, move_type, power)
            }
            (FieldTagType::TrickRoom, FieldTagApply::SpeedOrder { reversed }) => {
                *reversed = !*reversed;
                true
            }
            (
                FieldTagType::Spikes | FieldTagType::ToxicSpikes | FieldTagType::StealthRock,
                FieldTagApply::EntryHazard {
                    target,
                    target_slot,
                    gravity,
                    scheduler,
                },
            ) => {
                if let Some(source) = &self.source {
                    if source.id == target.id || source.slot.same_side(target_slot) {
                        return false;
                    }
                }
                self.activate_trap(target, target_slot, gravity, scheduler)
            }
            _ => false,
        }
    }

    fn activate_trap(
        &self,
        target: &mut Combatant,
        target_slot: BattlerIndex,
        gravity: bool,
        scheduler: &mut BattleScheduler,
    ) -> bool {
        match self.tag_type {
            FieldTagType::Spikes => {
                if !target.is_grounded(gravity) {
                    return false;
                }
                let damage = target.hp_fraction(spikes_damage_ratio(self.layers));
                scheduler.queue_message(format!("{} is hurt\nby the spikes!", target.name));
                scheduler.unshift_phase(Phase::CommonAnim {
                    slot: Some(target_slot),
                    anim: CommonAnim::Hazard,
                });
                target.damage(damage);
                true
            }
            FieldTagType::ToxicSpikes => {
                if target.status.is_some() || !target.is_grounded(gravity) {
                    return false;
                }
                let effect = if self.layers > 1 {
                    StatusEffect::Toxic
                } else {
                    StatusEffect::Poison
                };
                if !target.set_status(effect, 0) {
                    return false;
                }
                scheduler.unshift_phase(Phase::ObtainStatus {
                    slot: target_slot,
                    effect,
                });
                scheduler.queue_message(format!(
                    "{} {}",
                    target.name,
                    effect.obtain_message()
                ));
                true
            }
            FieldTagType::StealthRock => {
                let ratio = stealth_rock_damage_ratio(target.attack_effectiveness(PokemonType::Rock));
                if ratio <= 0.0 {
                    return false;
                }
                scheduler.queue_message(format!("Pointed stones dug into\n{}!", target.name));
                scheduler.unshift_phase(Phase::CommonAnim {
                    slot: Some(target_slot),
                    anim: CommonAnim::Hazard,
                });
                target.damage(target.hp_fraction(ratio));
                true
            }
            _ => false,
        }
    }

    pub fn on_add(&self, scheduler: &mut BattleScheduler) {
        match self.tag_type {
            FieldTagType::MudSport => scheduler.queue_message("Electricity's power was weakened!"),
            FieldTagType::WaterSport => scheduler.queue_message("Fire's power was weakened!"),
            FieldTagType::Spikes | FieldTagType::ToxicSpikes => {
                let descriptor = self
                    .source
                    .as_ref()
                    .map(TagSource::opponent_descriptor)
                    .unwrap_or("the field");
                scheduler.queue_message(format!(
                    "{} were scattered\nall around {}'s feet!",
                    self.move_display_name().unwrap_or_default(),
                    descriptor
                ));
            }
            FieldTagType::StealthRock => {
                let descriptor = self
                    .source
                    .as_ref()
                    .map(TagSource::opponent_descriptor)
                    .unwrap_or("the field");
                scheduler.queue_message(format!(
                    "Pointed stones float in the air\naround {}!",
                    descriptor
                ));
            }
            FieldTagType::TrickRoom => {
                let name = self
                    .source
                    .as_ref()
                    .map(|source| source.name.as_str())
                    .unwrap_or("Someone");
                scheduler.queue_message(format!("{} twisted\nthe dimensions!", name));
            }
            FieldTagType::Gravity => scheduler.queue_message("Gravity intensified!"),
            FieldTagType::None => {}
        }
    }

    /// A second add of the same type. Stacking tags gain a layer, up to their
    /// maximum, and repeat their add messaging.
    pub fn on_overlap(&mut self, scheduler: &mut BattleScheduler) {
        if self.is_stacking() && self.layers < self.max_layers {
            self.layers += 1;
            debug!("{:?} stacked to {} layers", self.tag_type, self.layers);
            self.on_add(scheduler);
        }
    }

    pub fn on_remove(&self, scheduler: &mut BattleScheduler) {
        match self.tag_type {
            FieldTagType::MudSport => scheduler.queue_message("The effects of MUD SPORT\nhave faded."),
            FieldTagType::WaterSport => {
                scheduler.queue_message("The effects of WATER SPORT\nhave faded.")
            }
            FieldTagType::TrickRoom => {
                scheduler.queue_message("The twisted dimensions\nreturned to normal!")
            }
            FieldTagType::Gravity => scheduler.queue_message("Gravity returned to normal!"),
            _ => {
                if let Some(name) = self.move_display_name() {
                    scheduler.queue_message(format!("{}'s effect wore off.", name));
                }
            }
        }
    }

    /// Count down one turn. Tags created with fewer than one turn never expire.
    pub fn lapse(&mut self) -> bool {
        self.countdown.tick()
    }
}

fn weaken_move_type(weakened: PokemonType, move_type: PokemonType, power: &mut f64) -> bool {
    if move_type != weakened {
        return false;
    }
    *power *= SPORT_POWER_MULTIPLIER;
    true
}

/// Fraction of max HP dealt by spikes at a layer count.
pub fn spikes_damage_ratio(layers: u8) -> f64 {
    1.0 / (10.0 - 2.0 * layers.min(3) as f64)
}

/// Fraction of max HP dealt by Stealth Rock at a rock-type effectiveness.
pub fn stealth_rock_damage_ratio(effectiveness: f32) -> f64 {
    match effectiveness {
        e if e >= 4.0 => 0.5,
        e if e >= 2.0 => 0.25,
        e if e >= 1.0 => 0.125,
        e if e >= 0.5 => 0.0625,
        e if e >= 0.25 => 0.03125,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.25, 1.0 / 32.0)]
    #[case(0.5, 1.0 / 16.0)]
    #[case(1.0, 1.0 / 8.0)]
    #[case(2.0, 1.0 / 4.0)]
    #[case(4.0, 1.0 / 2.0)]
    fn test_stealth_rock_ratio_table(#[case] effectiveness: f32, #[case] expected: f64) {
        assert_eq!(stealth_rock_damage_ratio(effectiveness), expected);
    }

    #[rstest]
    #[case(1, 1.0 / 8.0)]
    #[case(2, 1.0 / 6.0)]
    #[case(3, 1.0 / 4.0)]
    fn test_spikes_ratio_by_layers(#[case] layers: u8, #[case] expected: f64) {
        assert_eq!(spikes_damage_ratio(layers), expected);
    }

    #[test]
    fn test_none_has_no_constructor() {
        assert_eq!(
            FieldTag::construct(FieldTagType::None, 0, None, None),
            Err(EngineError::UnregisteredFieldTag(FieldTagType::None))
        );
    }

    #[test]
    fn test_hazards_are_permanent_regardless_of_requested_turns() {
        let mut spikes = FieldTag::construct(FieldTagType::Spikes, 3, None, None).unwrap();
        for _ in 0..10 {
            assert!(spikes.lapse());
        }
    }

    #[test]
    fn test_sport_weakens_only_its_type() {
        let tag = FieldTag::construct(FieldTagType::WaterSport, 5, None, None).unwrap();
        let mut power = 90.0;
        assert!(tag.apply(FieldTagApply::MovePower {
            move_type: PokemonType::Fire,
            power: &mut power
        }));
        assert!((power - 29.7).abs() < 1e-9);

        let mut power = 90.0;
        assert!(!tag.apply(FieldTagApply::MovePower {
            move_type: PokemonType::Electric,
            power: &mut power
        }));
        assert_eq!(power, 90.0);
    }

    #[test]
    fn test_overlap_caps_layers() {
        let mut scheduler = BattleScheduler::new();
        let mut tag = FieldTag::construct(FieldTagType::ToxicSpikes, 0, None, None).unwrap();
        tag.on_overlap(&mut scheduler);
        tag.on_overlap(&mut scheduler);
        tag.on_overlap(&mut scheduler);
        assert_eq!(tag.layers, 2);
        assert_eq!(scheduler.messages().count(), 1);
    }
}
