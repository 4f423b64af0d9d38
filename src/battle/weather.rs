// In: src/battle/weather.rs

use schema::{MoveCategory, PokemonType, WeatherType};
use serde::{Deserialize, Serialize};

/// Turns a move-induced weather lasts.
pub const MOVE_WEATHER_TURNS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub weather_type: WeatherType,
    /// Zero means the weather lasts until something replaces it.
    pub turns_left: u8,
    pub via_move: bool,
}

impl Weather {
    pub fn new(weather_type: WeatherType, via_move: bool) -> Self {
        Self {
            weather_type,
            turns_left: if via_move { MOVE_WEATHER_TURNS } else { 0 },
            via_move,
        }
    }

    pub fn is_immutable(&self) -> bool {
        self.weather_type.is_immutable()
    }

    /// Count down one turn. Returns whether the weather is still active.
    pub fn lapse(&mut self) -> bool {
        if self.is_immutable() || self.turns_left == 0 {
            return true;
        }
        self.turns_left -= 1;
        self.turns_left > 0
    }

    pub fn attack_type_multiplier(&self, attack_type: PokemonType) -> f64 {
        match (self.weather_type, attack_type) {
            (WeatherType::Sunny | WeatherType::HarshSun, PokemonType::Fire) => 1.5,
            (WeatherType::Sunny | WeatherType::HarshSun, PokemonType::Water) => 0.5,
            (WeatherType::Rain | WeatherType::HeavyRain, PokemonType::Water) => 1.5,
            (WeatherType::Rain | WeatherType::HeavyRain, PokemonType::Fire) => 0.5,
            _ => 1.0,
        }
    }

    /// Primal weathers evaporate or douse damaging moves of the opposing element.
    pub fn is_move_weather_cancelled(&self, move_type: PokemonType, category: MoveCategory) -> bool {
        if category == MoveCategory::Status {
            return false;
        }
        matches!(
            (self.weather_type, move_type),
            (WeatherType::HarshSun, PokemonType::Water) | (WeatherType::HeavyRain, PokemonType::Fire)
        )
    }

    /// Whether end-of-turn weather damage applies to a combatant of these types.
    pub fn is_type_damage_immune(&self, types: &[PokemonType]) -> bool {
        let immune: &[PokemonType] = match self.weather_type {
            WeatherType::Sandstorm => &[PokemonType::Rock, PokemonType::Ground, PokemonType::Steel],
            WeatherType::Hail => &[PokemonType::Ice],
            _ => return true,
        };
        types.iter().any(|t| immune.contains(t))
    }

    pub fn is_damaging(&self) -> bool {
        matches!(self.weather_type, WeatherType::Sandstorm | WeatherType::Hail)
    }
}

pub fn weather_start_message(weather_type: WeatherType) -> &'static str {
    match weather_type {
        WeatherType::Sunny => "The sunlight got bright!",
        WeatherType::Rain => "A downpour started!",
        WeatherType::Sandstorm => "A sandstorm brewed!",
        WeatherType::Hail => "It started to hail!",
        WeatherType::Fog => "A thick fog emerged!",
        WeatherType::HeavyRain => "A heavy downpour started!",
        WeatherType::HarshSun => "The sunlight got hot!",
        WeatherType::StrongWinds => "A heavy wind began!",
    }
}

pub fn weather_lapse_message(weather_type: WeatherType) -> &'static str {
    match weather_type {
        WeatherType::Sunny => "The sunlight is strong.",
        WeatherType::Rain => "The downpour continues.",
        WeatherType::Sandstorm => "The sandstorm rages.",
        WeatherType::Hail => "Hail continues to fall.",
        WeatherType::Fog => "The fog continues.",
        WeatherType::HeavyRain => "The heavy downpour continues.",
        WeatherType::HarshSun => "The sun is scorching hot.",
        WeatherType::StrongWinds => "The wind blows intensely.",
    }
}

pub fn weather_clear_message(weather_type: WeatherType) -> &'static str {
    match weather_type {
        WeatherType::Sunny => "The sunlight faded.",
        WeatherType::Rain => "The rain stopped.",
        WeatherType::Sandstorm => "The sandstorm subsided.",
        WeatherType::Hail => "The hail stopped.",
        WeatherType::Fog => "The fog disappeared.",
        WeatherType::HeavyRain => "The heavy rain stopped.",
        WeatherType::HarshSun => "The harsh sunlight faded.",
        WeatherType::StrongWinds => "The heavy wind stopped.",
    }
}

pub fn weather_damage_message(weather_type: WeatherType, name: &str) -> Option<String> {
    match weather_type {
        WeatherType::Sandstorm => Some(format!("{} is buffeted\nby the sandstorm!", name)),
        WeatherType::Hail => Some(format!("{} is pelted\nby the hail!", name)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_move_weather_lasts_five_lapses() {
        let mut weather = Weather::new(WeatherType::Rain, true);
        let survived: Vec<bool> = (0..5).map(|_| weather.lapse()).collect();
        assert_eq!(survived, vec![true, true, true, true, false]);
    }

    #[test]
    fn test_environment_and_primal_weather_never_expire() {
        let mut ambient = Weather::new(WeatherType::Sandstorm, false);
        let mut primal = Weather::new(WeatherType::HarshSun, true);
        for _ in 0..20 {
            assert!(ambient.lapse());
            assert!(primal.lapse());
        }
    }

    #[rstest]
    #[case(WeatherType::Sunny, PokemonType::Fire, 1.5)]
    #[case(WeatherType::Sunny, PokemonType::Water, 0.5)]
    #[case(WeatherType::Rain, PokemonType::Water, 1.5)]
    #[case(WeatherType::HeavyRain, PokemonType::Fire, 0.5)]
    #[case(WeatherType::Sandstorm, PokemonType::Rock, 1.0)]
    fn test_attack_type_multiplier(
        #[case] weather_type: WeatherType,
        #[case] attack_type: PokemonType,
        #[case] expected: f64,
    ) {
        let weather = Weather::new(weather_type, false);
        assert_eq!(weather.attack_type_multiplier(attack_type), expected);
    }

    #[test]
    fn test_primal_weather_cancels_only_damaging_moves() {
        let harsh_sun = Weather::new(WeatherType::HarshSun, false);
        assert!(harsh_sun.is_move_weather_cancelled(PokemonType::Water, MoveCategory::Special));
        assert!(!harsh_sun.is_move_weather_cancelled(PokemonType::Water, MoveCategory::Status));
        assert!(!Weather::new(WeatherType::Sunny, false)
            .is_move_weather_cancelled(PokemonType::Water, MoveCategory::Special));
    }
}
