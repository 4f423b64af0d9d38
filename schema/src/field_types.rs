use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum WeatherType {
    Sunny,
    Rain,
    Sandstorm,
    Hail,
    Fog,
    HeavyRain,
    HarshSun,
    StrongWinds,
}

impl WeatherType {
    /// Primal weathers can only be removed by an explicit clear of the same type.
    pub fn is_immutable(&self) -> bool {
        matches!(
            self,
            WeatherType::HeavyRain | WeatherType::HarshSun | WeatherType::StrongWinds
        )
    }
}

/// Identifiers for persistent field-wide effects.
///
/// `None` is a reserved id with no constructor; adding it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum FieldTagType {
    None,
    MudSport,
    WaterSport,
    Spikes,
    ToxicSpikes,
    StealthRock,
    TrickRoom,
    Gravity,
}

impl FieldTagType {
    pub fn is_entry_hazard(&self) -> bool {
        matches!(
            self,
            FieldTagType::Spikes | FieldTagType::ToxicSpikes | FieldTagType::StealthRock
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum BattlerTagType {
    Recharging,
    Flinched,
    Confused,
    Seeded,
    Nightmare,
    Frenzy,
    Protected,
    Enduring,
    Ingrain,
    AquaRing,
    CritBoost,
    Flying,
    Underground,
    Underwater,
    IgnoreFlying,
    Trapped,
    Substitute,
    Cursed,
}

impl BattlerTagType {
    /// Semi-invulnerable states entered by two-turn moves.
    pub fn is_hiding(&self) -> bool {
        matches!(
            self,
            BattlerTagType::Flying | BattlerTagType::Underground | BattlerTagType::Underwater
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum Biome {
    Town,
    Plains,
    Grass,
    TallGrass,
    City,
    Forest,
    Sea,
    Swamp,
    Beach,
    Lake,
    Seabed,
    Mountain,
    Badlands,
    Cave,
    Desert,
    IceCave,
    Meadow,
    PowerPlant,
    Volcano,
    Graveyard,
    Dojo,
    Factory,
    Ruins,
    Wasteland,
    Abyss,
    Space,
    End,
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Rarity tiers of a biome's encounter table. Two ladders exist: the normal
/// one `Common..=UltraRare` and the boss one `Boss..=BossUltraRare`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum BiomePoolTier {
    Common,
    Uncommon,
    Rare,
    SuperRare,
    UltraRare,
    Boss,
    BossRare,
    BossSuperRare,
    BossUltraRare,
}

impl BiomePoolTier {
    pub fn is_boss(&self) -> bool {
        *self >= BiomePoolTier::Boss
    }

    /// The floor of the ladder this tier belongs to.
    pub fn ladder_floor(&self) -> BiomePoolTier {
        if self.is_boss() {
            BiomePoolTier::Boss
        } else {
            BiomePoolTier::Common
        }
    }

    /// One step toward the ladder floor, or `None` when already at the floor.
    pub fn downgrade(&self) -> Option<BiomePoolTier> {
        use BiomePoolTier::*;
        match self {
            Common | Boss => None,
            Uncommon => Some(Common),
            Rare => Some(Uncommon),
            SuperRare => Some(Rare),
            UltraRare => Some(SuperRare),
            BossRare => Some(Boss),
            BossSuperRare => Some(BossRare),
            BossUltraRare => Some(BossSuperRare),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum PokeballType {
    Pokeball,
    GreatBall,
    UltraBall,
    MasterBall,
}
