use crate::errors::{EngineError, EngineResult};
use schema::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// Re-export the Species enum from the schema crate
pub use schema::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

/// One link of an evolution line: the species on the other end and the level
/// at which the evolution happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStep {
    pub species: Species,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub species: Species,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub evolution: Option<EvolutionStep>,
    #[serde(default)]
    pub legendary: bool,
    #[serde(default)]
    pub mythical: bool,
    #[serde(default)]
    pub pseudo_legendary: bool,
    /// Filled in from the other species' `evolution` links at load time.
    #[serde(skip)]
    pub pre_evolution: Option<EvolutionStep>,
}

impl SpeciesData {
    pub fn base_total(&self) -> u16 {
        self.base_stats.total()
    }

    /// Legendary, mythical and pseudo-legendary species have a minimum wild level.
    pub fn is_level_restricted(&self) -> bool {
        self.legendary || self.mythical || self.pseudo_legendary
    }

    pub fn min_encounter_level(&self) -> u8 {
        match self.base_total() {
            total if total >= 720 => 90,
            total if total >= 670 => 70,
            total if total >= 580 => 50,
            _ => 30,
        }
    }
}

static SPECIES_TABLE: LazyLock<EngineResult<HashMap<Species, SpeciesData>>> =
    LazyLock::new(|| load_species_table(include_str!("../data/species.ron")));

fn load_species_table(source: &str) -> EngineResult<HashMap<Species, SpeciesData>> {
    let entries: Vec<SpeciesData> = ron::from_str(source).map_err(|e| EngineError::DataLoad {
        source_name: "species.ron",
        details: e.to_string(),
    })?;

    let mut table: HashMap<Species, SpeciesData> =
        entries.into_iter().map(|data| (data.species, data)).collect();

    let links: Vec<(Species, EvolutionStep)> = table
        .values()
        .filter_map(|data| {
            data.evolution.map(|step| {
                (
                    step.species,
                    EvolutionStep {
                        species: data.species,
                        level: step.level,
                    },
                )
            })
        })
        .collect();
    for (evolved, step) in links {
        if let Some(evolved_data) = table.get_mut(&evolved) {
            evolved_data.pre_evolution = Some(step);
        }
    }

    Ok(table)
}

pub fn get_species_data(species: Species) -> EngineResult<&'static SpeciesData> {
    match &*SPECIES_TABLE {
        Ok(table) => table
            .get(&species)
            .ok_or(EngineError::SpeciesNotFound(species)),
        Err(err) => Err(err.clone()),
    }
}

/// The member of `species`' evolution line that fits `level`: devolves while
/// the level is below the level its current form evolves at, then evolves
/// while the level reaches the next evolution.
pub fn species_for_level(species: Species, level: u8) -> EngineResult<Species> {
    let mut current = get_species_data(species)?;

    while let Some(previous) = current.pre_evolution {
        if level >= previous.level {
            break;
        }
        current = get_species_data(previous.species)?;
    }

    while let Some(next) = current.evolution {
        if level < next.level {
            break;
        }
        current = get_species_data(next.species)?;
    }

    Ok(current.species)
}
