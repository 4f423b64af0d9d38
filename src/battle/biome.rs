// In: src/battle/biome.rs

use crate::errors::{EngineError, EngineResult};
use crate::species::Species;
use schema::{Biome, BiomePoolTier, PokemonType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// One encounter table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEntry {
    Single(Species),
    /// Minimum level to candidate species.
    LevelGated(BTreeMap<u8, Vec<Species>>),
}

/// A biome's encounter table, one species list per rarity tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeTierPools {
    #[serde(default)]
    pub common: Vec<PoolEntry>,
    #[serde(default)]
    pub uncommon: Vec<PoolEntry>,
    #[serde(default)]
    pub rare: Vec<PoolEntry>,
    #[serde(default)]
    pub super_rare: Vec<PoolEntry>,
    #[serde(default)]
    pub ultra_rare: Vec<PoolEntry>,
    #[serde(default)]
    pub boss: Vec<PoolEntry>,
    #[serde(default)]
    pub boss_rare: Vec<PoolEntry>,
    #[serde(default)]
    pub boss_super_rare: Vec<PoolEntry>,
    #[serde(default)]
    pub boss_ultra_rare: Vec<PoolEntry>,
}

impl BiomeTierPools {
    pub fn pool(&self, tier: BiomePoolTier) -> &[PoolEntry] {
        match tier {
            BiomePoolTier::Common => &self.common,
            BiomePoolTier::Uncommon => &self.uncommon,
            BiomePoolTier::Rare => &self.rare,
            BiomePoolTier::SuperRare => &self.super_rare,
            BiomePoolTier::UltraRare => &self.ultra_rare,
            BiomePoolTier::Boss => &self.boss,
            BiomePoolTier::BossRare => &self.boss_rare,
            BiomePoolTier::BossSuperRare => &self.boss_super_rare,
            BiomePoolTier::BossUltraRare => &self.boss_ultra_rare,
        }
    }

    pub fn pool_mut(&mut self, tier: BiomePoolTier) -> &mut Vec<PoolEntry> {
        match tier {
            BiomePoolTier::Common => &mut self.common,
            BiomePoolTier::Uncommon => &mut self.uncommon,
            BiomePoolTier::Rare => &mut self.rare,
            BiomePoolTier::SuperRare => &mut self.super_rare,
            BiomePoolTier::UltraRare => &mut self.ultra_rare,
            BiomePoolTier::Boss => &mut self.boss,
            BiomePoolTier::BossRare => &mut self.boss_rare,
            BiomePoolTier::BossSuperRare => &mut self.boss_super_rare,
            BiomePoolTier::BossUltraRare => &mut self.boss_ultra_rare,
        }
    }

    pub fn with_pool(mut self, tier: BiomePoolTier, entries: Vec<PoolEntry>) -> Self {
        *self.pool_mut(tier) = entries;
        self
    }
}

#[derive(Deserialize)]
struct BiomeRecord {
    biome: Biome,
    pools: BiomeTierPools,
}

static BIOME_POOLS: LazyLock<EngineResult<HashMap<Biome, BiomeTierPools>>> =
    LazyLock::new(|| load_biome_pools(include_str!("../../data/biomes.ron")));

static EMPTY_POOLS: BiomeTierPools = BiomeTierPools {
    common: Vec::new(),
    uncommon: Vec::new(),
    rare: Vec::new(),
    super_rare: Vec::new(),
    ultra_rare: Vec::new(),
    boss: Vec::new(),
    boss_rare: Vec::new(),
    boss_super_rare: Vec::new(),
    boss_ultra_rare: Vec::new(),
};

fn load_biome_pools(source: &str) -> EngineResult<HashMap<Biome, BiomeTierPools>> {
    let records: Vec<BiomeRecord> = ron::from_str(source).map_err(|e| EngineError::DataLoad {
        source_name: "biomes.ron",
        details: e.to_string(),
    })?;
    Ok(records
        .into_iter()
        .map(|record| (record.biome, record.pools))
        .collect())
}

/// Encounter table of a biome. Biomes without a table have empty pools.
pub fn biome_pools(biome: Biome) -> EngineResult<&'static BiomeTierPools> {
    match &*BIOME_POOLS {
        Ok(pools) => Ok(pools.get(&biome).unwrap_or(&EMPTY_POOLS)),
        Err(err) => Err(err.clone()),
    }
}

// --- BIOME PRESENTATION HELPERS ---

pub fn type_for_biome(biome: Biome) -> PokemonType {
    match biome {
        Biome::Town | Biome::Plains => PokemonType::Normal,
        Biome::Grass | Biome::TallGrass => PokemonType::Grass,
        Biome::Forest => PokemonType::Bug,
        Biome::City | Biome::Swamp => PokemonType::Poison,
        Biome::Sea | Biome::Beach | Biome::Lake | Biome::Seabed => PokemonType::Water,
        Biome::Mountain => PokemonType::Flying,
        Biome::Badlands => PokemonType::Ground,
        Biome::Cave | Biome::Desert => PokemonType::Rock,
        Biome::IceCave => PokemonType::Ice,
        Biome::Meadow => PokemonType::Fairy,
        Biome::PowerPlant => PokemonType::Electric,
        Biome::Volcano => PokemonType::Fire,
        Biome::Graveyard => PokemonType::Ghost,
        Biome::Dojo => PokemonType::Fighting,
        Biome::Factory => PokemonType::Steel,
        Biome::Ruins | Biome::Space => PokemonType::Psychic,
        Biome::Wasteland | Biome::End => PokemonType::Dragon,
        Biome::Abyss => PokemonType::Dark,
    }
}

pub fn is_daytime(biome: Biome) -> bool {
    matches!(
        biome,
        Biome::Town
            | Biome::Plains
            | Biome::Grass
            | Biome::Sea
            | Biome::Beach
            | Biome::Lake
            | Biome::Mountain
            | Biome::Badlands
            | Biome::Desert
            | Biome::Meadow
            | Biome::Dojo
    )
}

/// Asset key used for backgrounds and music. Some biomes share another's assets.
pub fn biome_key(biome: Biome) -> &'static str {
    match biome {
        Biome::Abyss | Biome::Factory | Biome::End | Biome::Wasteland => "wasteland",
        Biome::Meadow | Biome::Grass => "grass",
        Biome::Volcano | Biome::Cave => "cave",
        Biome::PowerPlant | Biome::Ruins => "ruins",
        Biome::Town => "town",
        Biome::Plains => "plains",
        Biome::TallGrass => "tall_grass",
        Biome::City => "city",
        Biome::Forest => "forest",
        Biome::Sea => "sea",
        Biome::Swamp => "swamp",
        Biome::Beach => "beach",
        Biome::Lake => "lake",
        Biome::Seabed => "seabed",
        Biome::Mountain => "mountain",
        Biome::Badlands => "badlands",
        Biome::Desert => "desert",
        Biome::IceCave => "ice_cave",
        Biome::Graveyard => "graveyard",
        Biome::Dojo => "dojo",
        Biome::Space => "space",
    }
}

/// Seconds into the biome track where its loop restarts.
pub fn bgm_loop_point(biome: Biome) -> f64 {
    match biome {
        Biome::Town => 7.288,
        Biome::Plains => 7.693,
        Biome::Grass => 1.995,
        Biome::TallGrass => 9.608,
        Biome::City => 1.221,
        Biome::Forest => 4.294,
        Biome::Sea => 1.672,
        Biome::Swamp => 4.461,
        Biome::Beach => 3.462,
        Biome::Lake => 5.350,
        Biome::Seabed => 2.629,
        Biome::Mountain => 4.018,
        Biome::Badlands => 17.790,
        Biome::Cave => 14.240,
        Biome::Desert => 1.143,
        Biome::IceCave => 15.010,
        Biome::Meadow => 3.891,
        Biome::PowerPlant => 2.810,
        Biome::Volcano => 5.116,
        Biome::Graveyard => 3.232,
        Biome::Dojo => 6.205,
        Biome::Factory => 4.985,
        Biome::Ruins => 2.270,
        Biome::Wasteland => 6.336,
        Biome::Abyss => 5.130,
        Biome::Space => 21.347,
        Biome::End => 0.0,
    }
}

/// Biomes whose backdrop carries decorative props.
pub fn biome_has_props(biome: Biome) -> bool {
    matches!(
        biome,
        Biome::Beach | Biome::Lake | Biome::Seabed | Biome::Badlands | Biome::Cave | Biome::Desert
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::get_species_data;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_biome_table_parses_and_covers_every_biome() {
        for biome in Biome::iter() {
            let pools = biome_pools(biome).unwrap();
            assert!(
                !pools.common.is_empty(),
                "{:?} should have a common pool",
                biome
            );
        }
    }

    #[test]
    fn test_every_pool_species_has_data() {
        for biome in Biome::iter() {
            let pools = biome_pools(biome).unwrap();
            for tier in BiomePoolTier::iter() {
                for entry in pools.pool(tier) {
                    let species: Vec<Species> = match entry {
                        PoolEntry::Single(species) => vec![*species],
                        PoolEntry::LevelGated(table) => table.values().flatten().copied().collect(),
                    };
                    for s in species {
                        assert!(get_species_data(s).is_ok(), "{:?} in {:?}", s, biome);
                    }
                }
            }
        }
    }

    #[test]
    fn test_biome_key_shares_assets() {
        assert_eq!(biome_key(Biome::Abyss), "wasteland");
        assert_eq!(biome_key(Biome::IceCave), "ice_cave");
        assert_eq!(type_for_biome(Biome::Meadow), PokemonType::Fairy);
        assert!(is_daytime(Biome::Dojo));
        assert!(!is_daytime(Biome::Cave));
    }
}
