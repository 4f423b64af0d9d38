// In: src/battle/tier_roller.rs

use crate::battle::biome::{BiomeTierPools, PoolEntry};
use crate::battle::rng::BattleRng;
use crate::errors::{EngineError, EngineResult};
use crate::species::{get_species_data, species_for_level, Species};
use log::{debug, warn};
use schema::BiomePoolTier;
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};

/// Re-rolls allowed for an under-leveled legendary before it is accepted anyway.
pub const MAX_REGEN_ATTEMPTS: u32 = 10;

/// Result of one encounter roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRoll {
    /// Tier the species was finally drawn from. `None` when every pool of the
    /// ladder was empty and the species came from the global fallback.
    pub tier: Option<BiomePoolTier>,
    pub species: Species,
}

/// Boss rolls need a boss wave and at least one boss-tier entry.
pub fn is_boss_roll(pools: &BiomeTierPools, wave_index: u32) -> bool {
    wave_index % 10 == 0 && !pools.boss.is_empty()
}

/// Map a raw draw onto the weighted ladder.
pub fn tier_for_value(value: u32, boss: bool) -> BiomePoolTier {
    if boss {
        match value {
            v if v >= 20 => BiomePoolTier::Boss,
            v if v >= 6 => BiomePoolTier::BossRare,
            v if v >= 1 => BiomePoolTier::BossSuperRare,
            _ => BiomePoolTier::BossUltraRare,
        }
    } else {
        match value {
            v if v >= 156 => BiomePoolTier::Common,
            v if v >= 32 => BiomePoolTier::Uncommon,
            v if v >= 6 => BiomePoolTier::Rare,
            v if v >= 1 => BiomePoolTier::SuperRare,
            _ => BiomePoolTier::UltraRare,
        }
    }
}

/// Step down from `tier` until a non-empty pool is found, stopping at the
/// ladder floor. Returns `None` when the whole ladder below `tier` is empty.
pub fn downgrade_to_populated(pools: &BiomeTierPools, tier: BiomePoolTier) -> Option<BiomePoolTier> {
    let mut current = tier;
    loop {
        if !pools.pool(current).is_empty() {
            return Some(current);
        }
        let lower = current.downgrade()?;
        debug!("Downgraded rarity tier from {:?} to {:?}", current, lower);
        current = lower;
    }
}

/// Choose a species from a level-gated entry: the highest threshold at or
/// below `level` wins, the lowest threshold when none qualifies.
fn pick_level_gated(
    table: &BTreeMap<u8, Vec<Species>>,
    level: u8,
    rng: &mut BattleRng,
) -> Option<Species> {
    let candidates = table
        .range(..=level)
        .next_back()
        .or_else(|| table.iter().next())
        .map(|(_, species)| species)?;
    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        len => Some(candidates[rng.pick_index(len, "Level Gated Species")]),
    }
}

fn pick_entry(entry: &PoolEntry, level: u8, rng: &mut BattleRng) -> Option<Species> {
    match entry {
        PoolEntry::Single(species) => Some(*species),
        PoolEntry::LevelGated(table) => pick_level_gated(table, level, rng),
    }
}

fn fallback_species(rng: &mut BattleRng) -> EngineResult<Species> {
    let index = rng.pick_index(Species::COUNT, "Fallback Species");
    Species::iter().nth(index).ok_or(EngineError::DataLoad {
        source_name: "species",
        details: "no species to fall back on".to_string(),
    })
}

/// Draw a tier and a species from it, without regeneration or form substitution.
fn roll_once(
    pools: &BiomeTierPools,
    wave_index: u32,
    level: u8,
    rng: &mut BattleRng,
) -> EngineResult<TierRoll> {
    let boss = is_boss_roll(pools, wave_index);
    let value = rng.rand_int(if boss { 64 } else { 512 }, "Pool Tier");
    let rolled = tier_for_value(value, boss);
    debug!("Rolled {:?} (draw {}) for wave {}", rolled, value, wave_index);

    let picked = downgrade_to_populated(pools, rolled).and_then(|tier| {
        let pool = pools.pool(tier);
        let entry = &pool[rng.pick_index(pool.len(), "Pool Entry")];
        pick_entry(entry, level, rng).map(|species| (tier, species))
    });

    match picked {
        Some((tier, species)) => Ok(TierRoll {
            tier: Some(tier),
            species,
        }),
        None => {
            warn!(
                "No populated pool at or below {:?}; drawing from every species",
                rolled
            );
            Ok(TierRoll {
                tier: None,
                species: fallback_species(rng)?,
            })
        }
    }
}

/// Select the wild species for an encounter.
///
/// A legendary, mythical or pseudo-legendary result below its minimum
/// encounter level is re-rolled, up to `MAX_REGEN_ATTEMPTS` times. The final
/// species is then swapped for the member of its evolution line that fits
/// `level`.
pub fn roll_species(
    pools: &BiomeTierPools,
    wave_index: u32,
    level: u8,
    rng: &mut BattleRng,
) -> EngineResult<TierRoll> {
    let mut attempt = 0;
    let mut roll = roll_once(pools, wave_index, level, rng)?;
    loop {
        let data = get_species_data(roll.species)?;
        let regen = data.is_level_restricted() && level < data.min_encounter_level();
        if !regen || attempt >= MAX_REGEN_ATTEMPTS {
            break;
        }
        attempt += 1;
        debug!(
            "{} is too strong for level {}: regenerating (attempt {})",
            data.name, level, attempt
        );
        roll = roll_once(pools, wave_index, level, rng)?;
    }

    let leveled = species_for_level(roll.species, level)?;
    if leveled != roll.species {
        debug!("Replaced {:?} with {:?}", roll.species, leveled);
    }
    Ok(TierRoll {
        tier: roll.tier,
        species: leveled,
    })
}
