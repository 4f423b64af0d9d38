// In: src/battle/field.rs

use crate::battle::biome::{self, biome_pools};
use crate::battle::combatant::Combatant;
use crate::battle::field_tags::{FieldTag, FieldTagApply, TagSource};
use crate::battle::rng::BattleRng;
use crate::battle::scheduler::{BattleScheduler, CommonAnim, Phase};
use crate::battle::state::BattlerIndex;
use crate::battle::tags::TagSet;
use crate::battle::tier_roller::{roll_species, TierRoll};
use crate::battle::weather::{
    weather_clear_message, weather_lapse_message, weather_start_message, Weather,
};
use crate::errors::EngineResult;
use log::debug;
use schema::{Biome, FieldTagType, MoveCategory, MoveId, PokemonType, WeatherType};
use serde::{Deserialize, Serialize};

/// The environment shared by every combatant of a battle: biome, weather and
/// field-wide tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    pub biome: Biome,
    weather: Option<Weather>,
    /// Set from outside (e.g. by an ability) while weather effects are negated.
    #[serde(skip)]
    pub weather_suppressed: bool,
    tags: TagSet<FieldTag>,
    pub bgm: String,
}

impl FieldState {
    pub fn new(biome: Biome) -> Self {
        Self {
            biome,
            weather: None,
            weather_suppressed: false,
            tags: TagSet::new(),
            bgm: biome::biome_key(biome).to_string(),
        }
    }

    // --- BIOME ---

    pub fn set_biome(&mut self, biome: Biome) {
        self.biome = biome;
        self.bgm = biome::biome_key(biome).to_string();
    }

    /// Draw the wild species for an encounter from this biome's pools.
    pub fn random_species(
        &self,
        wave_index: u32,
        level: u8,
        rng: &mut BattleRng,
    ) -> EngineResult<TierRoll> {
        let pools = biome_pools(self.biome)?;
        roll_species(pools, wave_index, level, rng)
    }

    pub fn type_for_biome(&self) -> PokemonType {
        biome::type_for_biome(self.biome)
    }

    pub fn is_daytime(&self) -> bool {
        biome::is_daytime(self.biome)
    }

    pub fn bgm_loop_point(&self) -> f64 {
        biome::bgm_loop_point(self.biome)
    }

    /// Bitmask of enemy-side backdrop props to show; zero for prop-less biomes.
    pub fn roll_prop_value(&self, rng: &mut BattleRng) -> u8 {
        if biome::biome_has_props(self.biome) {
            rng.rand_int(8, "Biome Props") as u8
        } else {
            0
        }
    }

    // --- WEATHER ---

    /// The stored weather, whether or not it is suppressed.
    pub fn weather(&self) -> Option<&Weather> {
        self.weather.as_ref()
    }

    pub fn weather_type(&self) -> Option<WeatherType> {
        self.weather.map(|weather| weather.weather_type)
    }

    /// Weather whose effects currently apply.
    fn effective_weather(&self) -> Option<&Weather> {
        if self.weather_suppressed {
            None
        } else {
            self.weather.as_ref()
        }
    }

    /// Type of the weather whose effects currently apply.
    pub fn effective_weather_type(&self) -> Option<WeatherType> {
        self.effective_weather().map(|weather| weather.weather_type)
    }

    /// Replace the weather, or clear it with `None`.
    ///
    /// Fails when `weather_type` is already active, or when the active weather
    /// is immutable; only `clear_weather_of` removes those.
    pub fn try_set_weather(
        &mut self,
        weather_type: Option<WeatherType>,
        via_move: bool,
        scheduler: &mut BattleScheduler,
    ) -> bool {
        let old = self.weather_type();
        if old == weather_type {
            return false;
        }
        if self.weather.is_some_and(|weather| weather.is_immutable()) {
            return false;
        }

        self.weather = weather_type.map(|weather_type| Weather::new(weather_type, via_move));
        debug!("Weather changed from {:?} to {:?}", old, weather_type);

        match (weather_type, old) {
            (Some(new_type), _) => {
                scheduler.unshift_phase(Phase::CommonAnim {
                    slot: None,
                    anim: CommonAnim::for_weather(new_type),
                });
                scheduler.queue_message(weather_start_message(new_type));
            }
            (None, Some(old_type)) => scheduler.queue_message(weather_clear_message(old_type)),
            (None, None) => {}
        }
        true
    }

    /// Clear the weather only if it is exactly `weather_type`. Works on
    /// immutable weather.
    pub fn clear_weather_of(
        &mut self,
        weather_type: WeatherType,
        scheduler: &mut BattleScheduler,
    ) -> bool {
        if self.weather_type() != Some(weather_type) {
            return false;
        }
        self.weather = None;
        debug!("Weather {:?} cleared", weather_type);
        scheduler.queue_message(weather_clear_message(weather_type));
        true
    }

    /// End-of-turn weather countdown. Suppression does not stop the counter.
    /// Returns whether weather is still active afterwards.
    pub fn tick_weather(&mut self, scheduler: &mut BattleScheduler) -> bool {
        let Some(weather) = self.weather.as_mut() else {
            return false;
        };
        let weather_type = weather.weather_type;
        if weather.lapse() {
            scheduler.unshift_phase(Phase::CommonAnim {
                slot: None,
                anim: CommonAnim::for_weather(weather_type),
            });
            scheduler.queue_message(weather_lapse_message(weather_type));
            true
        } else {
            self.weather = None;
            debug!("Weather {:?} expired", weather_type);
            scheduler.queue_message(weather_clear_message(weather_type));
            false
        }
    }

    pub fn attack_type_multiplier(&self, attack_type: PokemonType) -> f64 {
        self.effective_weather()
            .map(|weather| weather.attack_type_multiplier(attack_type))
            .unwrap_or(1.0)
    }

    pub fn is_move_weather_cancelled(&self, move_type: PokemonType, category: MoveCategory) -> bool {
        self.effective_weather()
            .is_some_and(|weather| weather.is_move_weather_cancelled(move_type, category))
    }

    /// Damaging weather that is active and not suppressed.
    pub fn damaging_weather(&self) -> Option<&Weather> {
        self.effective_weather().filter(|weather| weather.is_damaging())
    }

    // --- FIELD TAGS ---

    /// Add a field tag, or run the overlap hook of the one already present.
    /// Returns whether a new tag was created.
    pub fn add_tag(
        &mut self,
        tag_type: FieldTagType,
        turn_count: i32,
        source_move: Option<MoveId>,
        source: Option<TagSource>,
        scheduler: &mut BattleScheduler,
    ) -> EngineResult<bool> {
        if let Some(existing) = self.tags.get_mut(tag_type) {
            existing.on_overlap(scheduler);
            return Ok(false);
        }

        let tag = FieldTag::construct(tag_type, turn_count, source_move, source)?;
        tag.on_add(scheduler);
        debug!("Field tag {:?} added for {} turns", tag_type, tag.countdown.remaining());
        // The kind is absent, checked above.
        let _ = self.tags.insert(tag);
        Ok(true)
    }

    pub fn get_tag(&self, tag_type: FieldTagType) -> Option<&FieldTag> {
        self.tags.get(tag_type)
    }

    pub fn has_tag(&self, tag_type: FieldTagType) -> bool {
        self.tags.contains(tag_type)
    }

    pub fn tags(&self) -> impl Iterator<Item = &FieldTag> {
        self.tags.iter()
    }

    pub fn is_gravity_active(&self) -> bool {
        self.has_tag(FieldTagType::Gravity)
    }

    /// Scale `power` by every tag that weakens moves of `move_type`.
    pub fn apply_move_power_tags(&self, move_type: PokemonType, power: &mut f64) {
        for tag in self.tags.iter() {
            tag.apply(FieldTagApply::MovePower {
                move_type,
                power: &mut *power,
            });
        }
    }

    /// Whether slower combatants move first this turn.
    pub fn is_speed_order_reversed(&self) -> bool {
        let mut reversed = false;
        for tag in self.tags.iter() {
            tag.apply(FieldTagApply::SpeedOrder {
                reversed: &mut reversed,
            });
        }
        reversed
    }

    /// Trigger every entry hazard against a combatant entering the field.
    /// Returns whether any hazard triggered.
    pub fn apply_entry_hazards(
        &self,
        target: &mut Combatant,
        target_slot: BattlerIndex,
        scheduler: &mut BattleScheduler,
    ) -> bool {
        let gravity = self.is_gravity_active();
        let mut triggered = false;
        for tag in self.tags.iter().filter(|tag| tag.is_stacking()) {
            triggered |= tag.apply(FieldTagApply::EntryHazard {
                target: &mut *target,
                target_slot,
                gravity,
                scheduler: &mut *scheduler,
            });
        }
        triggered
    }

    /// Count every tag down once. Expired tags run `on_remove` and leave the
    /// field in the same pass.
    pub fn lapse_tags(&mut self, scheduler: &mut BattleScheduler) {
        let expired = self.tags.lapse_where(|_| true, |tag| tag.lapse());
        for tag in expired {
            debug!("Field tag {:?} expired", tag.tag_type);
            tag.on_remove(scheduler);
        }
    }

    pub fn remove_tag(&mut self, tag_type: FieldTagType, scheduler: &mut BattleScheduler) -> bool {
        match self.tags.remove(tag_type) {
            Some(tag) => {
                debug!("Field tag {:?} removed", tag_type);
                tag.on_remove(scheduler);
                true
            }
            None => false,
        }
    }

    /// Remove every tag matching `predicate`. Returns how many were removed.
    pub fn remove_tags_where(
        &mut self,
        predicate: impl FnMut(&FieldTag) -> bool,
        scheduler: &mut BattleScheduler,
    ) -> usize {
        let removed = self.tags.remove_where(predicate);
        for tag in &removed {
            debug!("Field tag {:?} removed", tag.tag_type);
            tag.on_remove(scheduler);
        }
        removed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use pretty_assertions::assert_eq;

    fn player_source() -> TagSource {
        TagSource {
            id: 1,
            slot: BattlerIndex::Player,
            name: "Skarmory".to_string(),
        }
    }

    fn enemy(species: Species) -> Combatant {
        Combatant::new(2, species, 30, &[MoveId::Tackle]).unwrap()
    }

    #[test]
    fn test_spikes_added_twice_stack_into_one_tag() {
        let mut field = FieldState::new(Biome::Plains);
        let mut scheduler = BattleScheduler::new();

        let first = field
            .add_tag(FieldTagType::Spikes, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        let second = field
            .add_tag(FieldTagType::Spikes, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(field.tags().count(), 1);
        assert_eq!(field.get_tag(FieldTagType::Spikes).unwrap().layers, 2);
        let scattered = scheduler
            .messages()
            .filter(|m| *m == "Spikes were scattered\nall around the opposing team's feet!")
            .count();
        assert_eq!(scattered, 2);
    }

    #[test]
    fn test_stacking_never_exceeds_max_layers() {
        let mut field = FieldState::new(Biome::Plains);
        let mut scheduler = BattleScheduler::new();
        for _ in 0..6 {
            field
                .add_tag(FieldTagType::Spikes, 0, None, None, &mut scheduler)
                .unwrap();
        }
        assert_eq!(field.get_tag(FieldTagType::Spikes).unwrap().layers, 3);
    }

    #[test]
    fn test_unregistered_tag_type_is_an_error() {
        let mut field = FieldState::new(Biome::Plains);
        let mut scheduler = BattleScheduler::new();
        assert!(field
            .add_tag(FieldTagType::None, 3, None, None, &mut scheduler)
            .is_err());
        assert_eq!(field.tags().count(), 0);
    }

    #[test]
    fn test_move_weather_expires_after_five_ticks() {
        let mut field = FieldState::new(Biome::Sea);
        let mut scheduler = BattleScheduler::new();
        assert!(field.try_set_weather(Some(WeatherType::Rain), true, &mut scheduler));

        let survived: Vec<bool> = (0..5).map(|_| field.tick_weather(&mut scheduler)).collect();

        assert_eq!(survived, vec![true, true, true, true, false]);
        assert_eq!(field.weather_type(), None);
        assert!(scheduler.has_message("The rain stopped."));
    }

    #[test]
    fn test_setting_same_weather_twice_fails() {
        let mut field = FieldState::new(Biome::Desert);
        let mut scheduler = BattleScheduler::new();
        assert!(field.try_set_weather(Some(WeatherType::Sandstorm), true, &mut scheduler));
        field.tick_weather(&mut scheduler);
        let before = field.clone();
        let messages = scheduler.messages().count();

        assert!(!field.try_set_weather(Some(WeatherType::Sandstorm), true, &mut scheduler));
        assert_eq!(field, before);
        assert_eq!(scheduler.messages().count(), messages);
    }

    #[test]
    fn test_weather_start_queues_themed_animation() {
        let mut field = FieldState::new(Biome::Desert);
        let mut scheduler = BattleScheduler::new();
        field.try_set_weather(Some(WeatherType::Sunny), false, &mut scheduler);
        assert_eq!(
            scheduler.pending_phases().next(),
            Some(&Phase::CommonAnim {
                slot: None,
                anim: CommonAnim::Sunny
            })
        );
        assert!(scheduler.has_message("The sunlight got bright!"));
        assert_eq!(field.weather().unwrap().turns_left, 0);
    }

    #[test]
    fn test_immutable_weather_only_clears_through_exact_type() {
        let mut field = FieldState::new(Biome::Volcano);
        let mut scheduler = BattleScheduler::new();
        field.try_set_weather(Some(WeatherType::HarshSun), false, &mut scheduler);

        assert!(!field.try_set_weather(Some(WeatherType::Rain), true, &mut scheduler));
        assert!(!field.try_set_weather(None, true, &mut scheduler));
        assert!(!field.clear_weather_of(WeatherType::Sunny, &mut scheduler));
        assert_eq!(field.weather_type(), Some(WeatherType::HarshSun));

        assert!(field.clear_weather_of(WeatherType::HarshSun, &mut scheduler));
        assert_eq!(field.weather_type(), None);
        assert!(scheduler.has_message("The harsh sunlight faded."));
    }

    #[test]
    fn test_suppressed_weather_has_no_effect_but_keeps_counting() {
        let mut field = FieldState::new(Biome::Sea);
        let mut scheduler = BattleScheduler::new();
        field.try_set_weather(Some(WeatherType::HeavyRain), false, &mut scheduler);
        field.weather_suppressed = true;

        assert_eq!(field.attack_type_multiplier(PokemonType::Fire), 1.0);
        assert!(!field.is_move_weather_cancelled(PokemonType::Fire, MoveCategory::Special));

        field.weather_suppressed = false;
        assert_eq!(field.attack_type_multiplier(PokemonType::Fire), 0.5);
        assert!(field.is_move_weather_cancelled(PokemonType::Fire, MoveCategory::Special));

        let mut rain = FieldState::new(Biome::Sea);
        rain.try_set_weather(Some(WeatherType::Rain), true, &mut scheduler);
        rain.weather_suppressed = true;
        rain.tick_weather(&mut scheduler);
        assert_eq!(rain.weather().unwrap().turns_left, 4);
    }

    #[test]
    fn test_stealth_rock_against_quadruple_weakness_takes_half() {
        let mut field = FieldState::new(Biome::Mountain);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::StealthRock, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        let mut butterfree = enemy(Species::Butterfree);
        let max_hp = butterfree.max_hp();

        assert!(field.apply_entry_hazards(&mut butterfree, BattlerIndex::Enemy, &mut scheduler));
        assert_eq!(butterfree.hp, max_hp - (max_hp as f64 * 0.5).ceil() as u32);
        assert!(scheduler.has_message("Pointed stones dug into\nButterfree!"));
    }

    #[test]
    fn test_stealth_rock_below_quarter_effectiveness_does_nothing() {
        let mut field = FieldState::new(Biome::Mountain);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::StealthRock, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        scheduler.take_messages();
        let mut resistant = enemy(Species::Rattata);
        resistant.summon_data.types_override = Some(vec![
            PokemonType::Steel,
            PokemonType::Ground,
            PokemonType::Fighting,
        ]);
        let max_hp = resistant.max_hp();

        assert!(!field.apply_entry_hazards(&mut resistant, BattlerIndex::Enemy, &mut scheduler));
        assert_eq!(resistant.hp, max_hp);
        assert!(scheduler.take_messages().is_empty());
        assert_eq!(scheduler.pending_phases().count(), 0);
    }

    #[test]
    fn test_hazards_never_hit_the_side_that_laid_them() {
        let mut field = FieldState::new(Biome::Mountain);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::StealthRock, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        let mut ally = enemy(Species::Butterfree);
        let max_hp = ally.max_hp();

        assert!(!field.apply_entry_hazards(&mut ally, BattlerIndex::PlayerTwo, &mut scheduler));
        assert_eq!(ally.hp, max_hp);
    }

    #[test]
    fn test_spikes_skip_airborne_unless_gravity() {
        let mut field = FieldState::new(Biome::Mountain);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::Spikes, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        let mut pidgey = enemy(Species::Pidgeotto);
        assert!(!field.apply_entry_hazards(&mut pidgey, BattlerIndex::Enemy, &mut scheduler));

        field
            .add_tag(FieldTagType::Gravity, 5, None, None, &mut scheduler)
            .unwrap();
        assert!(field.apply_entry_hazards(&mut pidgey, BattlerIndex::Enemy, &mut scheduler));
        assert_eq!(pidgey.hp, pidgey.max_hp() - pidgey.hp_fraction(1.0 / 8.0));
    }

    #[test]
    fn test_two_layers_of_toxic_spikes_badly_poison() {
        let mut field = FieldState::new(Biome::Swamp);
        let mut scheduler = BattleScheduler::new();
        for _ in 0..2 {
            field
                .add_tag(FieldTagType::ToxicSpikes, 0, None, Some(player_source()), &mut scheduler)
                .unwrap();
        }
        let mut rattata = enemy(Species::Rattata);
        assert!(field.apply_entry_hazards(&mut rattata, BattlerIndex::Enemy, &mut scheduler));
        assert_eq!(rattata.status_effect(), Some(schema::StatusEffect::Toxic));
    }

    #[test]
    fn test_timed_tags_expire_on_their_last_turn() {
        let mut field = FieldState::new(Biome::Ruins);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::TrickRoom, 3, None, Some(player_source()), &mut scheduler)
            .unwrap();
        field
            .add_tag(FieldTagType::StealthRock, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        assert!(field.is_speed_order_reversed());

        field.lapse_tags(&mut scheduler);
        field.lapse_tags(&mut scheduler);
        assert!(field.has_tag(FieldTagType::TrickRoom));
        field.lapse_tags(&mut scheduler);

        assert!(!field.has_tag(FieldTagType::TrickRoom));
        assert!(field.has_tag(FieldTagType::StealthRock));
        assert!(!field.is_speed_order_reversed());
        assert!(scheduler.has_message("The twisted dimensions\nreturned to normal!"));
    }

    #[test]
    fn test_remove_tags_where_clears_hazards() {
        let mut field = FieldState::new(Biome::Plains);
        let mut scheduler = BattleScheduler::new();
        for tag_type in [FieldTagType::Spikes, FieldTagType::StealthRock, FieldTagType::MudSport] {
            field.add_tag(tag_type, 5, None, None, &mut scheduler).unwrap();
        }
        let removed = field.remove_tags_where(|tag| tag.is_stacking(), &mut scheduler);
        assert_eq!(removed, 2);
        assert_eq!(
            field.tags().map(|tag| tag.tag_type).collect::<Vec<_>>(),
            vec![FieldTagType::MudSport]
        );
    }

    #[test]
    fn test_sport_tags_weaken_move_power() {
        let mut field = FieldState::new(Biome::Plains);
        let mut scheduler = BattleScheduler::new();
        field
            .add_tag(FieldTagType::MudSport, 5, None, None, &mut scheduler)
            .unwrap();
        let mut power = 100.0;
        field.apply_move_power_tags(PokemonType::Electric, &mut power);
        assert!((power - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_field_state_round_trips_without_suppression() {
        let mut field = FieldState::new(Biome::IceCave);
        let mut scheduler = BattleScheduler::new();
        field.try_set_weather(Some(WeatherType::Hail), true, &mut scheduler);
        field
            .add_tag(FieldTagType::Spikes, 0, None, Some(player_source()), &mut scheduler)
            .unwrap();
        field.weather_suppressed = true;

        let json = serde_json::to_string(&field).unwrap();
        let from_json: FieldState = serde_json::from_str(&json).unwrap();
        let bytes = postcard::to_allocvec(&field).unwrap();
        let from_bytes: FieldState = postcard::from_bytes(&bytes).unwrap();

        let mut expected = field.clone();
        expected.weather_suppressed = false;
        assert_eq!(from_json, expected);
        assert_eq!(from_bytes, expected);
        assert_eq!(from_json.bgm, "ice_cave");
    }

    #[test]
    fn test_random_species_uses_biome_pools() {
        let field = FieldState::new(Biome::Town);
        let mut rng = BattleRng::new_for_test(vec![400, 0]);
        let roll = field.random_species(1, 5, &mut rng).unwrap();
        assert_eq!(roll.tier, Some(schema::BiomePoolTier::Common));
        assert_eq!(roll.species, Species::Rattata);
    }

    #[test]
    fn test_props_roll_only_in_biomes_with_props() {
        let mut field = FieldState::new(Biome::Town);
        let mut rng = BattleRng::new_for_test(vec![5]);
        assert_eq!(field.roll_prop_value(&mut rng), 0);

        field.set_biome(Biome::Cave);
        assert_eq!(field.bgm, "cave");
        assert_eq!(field.roll_prop_value(&mut rng), 5);
    }
}
