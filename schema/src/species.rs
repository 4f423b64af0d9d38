use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum Species {
    Rattata,
    Raticate,
    Pidgey,
    Pidgeotto,
    Pidgeot,
    Caterpie,
    Metapod,
    Butterfree,
    Weedle,
    Kakuna,
    Beedrill,
    Zubat,
    Golbat,
    Geodude,
    Graveler,
    Magikarp,
    Gyarados,
    Sentret,
    Furret,
    Oddish,
    Gloom,
    Poochyena,
    Mightyena,
    Wingull,
    Pelipper,
    Tentacool,
    Tentacruel,
    Machop,
    Machoke,
    Ponyta,
    Rapidash,
    Slugma,
    Magcargo,
    Swinub,
    Piloswine,
    Snorunt,
    Glalie,
    Sandshrew,
    Sandslash,
    Gastly,
    Haunter,
    Magnemite,
    Magneton,
    Electrike,
    Manectric,
    Shuppet,
    Banette,
    Pikachu,
    Eevee,
    Growlithe,
    Onix,
    Skarmory,
    Lapras,
    Snorlax,
    Dratini,
    Dragonair,
    Dragonite,
    Larvitar,
    Pupitar,
    Tyranitar,
    Bagon,
    Shelgon,
    Salamence,
    Beldum,
    Metang,
    Metagross,
    Articuno,
    Zapdos,
    Moltres,
    Mewtwo,
    Mew,
    Lugia,
    HoOh,
    Celebi,
    Regirock,
    Regice,
    Registeel,
    Kyogre,
    Groudon,
    Rayquaza,
    Arceus,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::HoOh => write!(f, "Ho-Oh"),
            other => write!(f, "{:?}", other),
        }
    }
}
