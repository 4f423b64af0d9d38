// In: src/battle/damage.rs

use crate::battle::battler_tags::BattlerTagHolder;
use crate::battle::combatant::Combatant;
use crate::battle::rng::BattleRng;
use schema::{BattleStat, BattlerTagType, MoveCategory, PokemonType, StatusEffect};

/// One-in-N odds of a critical hit, indexed by crit stage.
const CRIT_RATES: [u32; 4] = [24, 8, 2, 1];
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const STAB_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub damage: u32,
    pub effectiveness: f32,
    pub critical: bool,
}

/// Everything about the attack itself that the formula needs.
#[derive(Debug, Clone, Copy)]
pub struct AttackProfile {
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub power: f64,
    pub critical: bool,
    pub ignore_stat_stages: bool,
    pub weather_multiplier: f64,
}

/// Stage multiplier for the five battle stats: (2 + s) / 2 or 2 / (2 - s).
pub fn apply_stat_stage_multiplier(value: u32, stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6) as f64;
    let multiplier = if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    };
    value as f64 * multiplier
}

/// Accuracy and evasion use thirds instead of halves.
pub fn accuracy_stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6) as f64;
    if stage >= 0.0 {
        (3.0 + stage) / 3.0
    } else {
        3.0 / (3.0 - stage)
    }
}

/// Roll for a critical hit at `crit_stage` (Focus Energy adds two stages).
pub fn roll_critical(user: &Combatant, crit_stage: u8, guaranteed: bool, rng: &mut BattleRng) -> bool {
    if guaranteed {
        return true;
    }
    let mut stage = crit_stage as usize;
    if user.has_tag(BattlerTagType::CritBoost) {
        stage += 2;
    }
    let rate = CRIT_RATES[stage.min(CRIT_RATES.len() - 1)];
    rate == 1 || rng.rand_int(rate, "Critical Hit") == 0
}

/// Attack stat after stages. Critical hits ignore the attacker's drops.
pub fn effective_attack(user: &Combatant, profile: &AttackProfile) -> f64 {
    let stat = match profile.category {
        MoveCategory::Special => BattleStat::SpecialAttack,
        _ => BattleStat::Attack,
    };
    let mut stage = user.stat_stage(stat);
    if profile.critical && stage < 0 {
        stage = 0;
    }
    apply_stat_stage_multiplier(user.battle_stats().get(stat), stage)
}

/// Defense stat after stages. Critical hits and stage-ignoring moves skip boosts.
pub fn effective_defense(target: &Combatant, profile: &AttackProfile) -> f64 {
    let stat = match profile.category {
        MoveCategory::Special => BattleStat::SpecialDefense,
        _ => BattleStat::Defense,
    };
    let mut stage = target.stat_stage(stat);
    if (profile.critical || profile.ignore_stat_stages) && stage > 0 {
        stage = 0;
    }
    apply_stat_stage_multiplier(target.battle_stats().get(stat), stage).max(1.0)
}

pub fn calculate_damage(
    user: &Combatant,
    target: &Combatant,
    profile: &AttackProfile,
    rng: &mut BattleRng,
) -> DamageResult {
    let effectiveness = target.attack_effectiveness(profile.move_type);
    if effectiveness == 0.0 || profile.power <= 0.0 {
        return DamageResult {
            damage: 0,
            effectiveness,
            critical: false,
        };
    }

    let level = user.level as f64;
    let attack = effective_attack(user, profile);
    let defense = effective_defense(target, profile);
    let base = ((2.0 * level / 5.0 + 2.0) * profile.power * attack / defense / 50.0 + 2.0).floor();

    let mut damage = base * profile.weather_multiplier;
    if profile.critical {
        damage *= CRIT_MULTIPLIER;
    }
    let roll = 85 + rng.rand_int(16, "Damage Roll");
    damage = (damage * roll as f64 / 100.0).floor();
    if user.is_of_type(profile.move_type) {
        damage *= STAB_MULTIPLIER;
    }
    damage *= effectiveness as f64;
    if profile.category == MoveCategory::Physical
        && user.status_effect() == Some(StatusEffect::Burn)
    {
        damage *= 0.5;
    }

    DamageResult {
        damage: (damage.floor() as u32).max(1),
        effectiveness,
        critical: profile.critical,
    }
}

/// Damage a confused combatant deals to itself: 40 power, typeless, physical.
pub fn confusion_self_damage(user: &Combatant, rng: &mut BattleRng) -> u32 {
    let profile = AttackProfile {
        move_type: PokemonType::Normal,
        category: MoveCategory::Physical,
        power: 40.0,
        critical: false,
        ignore_stat_stages: false,
        weather_multiplier: 1.0,
    };
    let level = user.level as f64;
    let attack = effective_attack(user, &profile);
    let defense = effective_defense(user, &profile);
    let base = ((2.0 * level / 5.0 + 2.0) * 40.0 * attack / defense / 50.0 + 2.0).floor();
    let roll = 85 + rng.rand_int(16, "Damage Roll");
    ((base * roll as f64 / 100.0).floor() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::Species;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 1.5)]
    #[case(2, 2.0)]
    #[case(-1, 2.0 / 3.0)]
    #[case(-2, 0.5)]
    #[case(6, 4.0)]
    fn test_stat_stage_multiplier(#[case] stage: i8, #[case] expected: f64) {
        let value = apply_stat_stage_multiplier(100, stage);
        assert!((value - 100.0 * expected).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_stages_use_thirds() {
        assert!((accuracy_stage_multiplier(-1) - 0.75).abs() < 1e-9);
        assert!((accuracy_stage_multiplier(3) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_immune_target_takes_no_damage() {
        let user = Combatant::new(1, Species::Rattata, 20, &[]).unwrap();
        let target = Combatant::new(2, Species::Gastly, 20, &[]).unwrap();
        let profile = AttackProfile {
            move_type: PokemonType::Normal,
            category: MoveCategory::Physical,
            power: 40.0,
            critical: false,
            ignore_stat_stages: false,
            weather_multiplier: 1.0,
        };
        let mut rng = BattleRng::new_for_test(vec![]);
        let result = calculate_damage(&user, &target, &profile, &mut rng);
        assert_eq!(result.damage, 0);
        assert_eq!(result.effectiveness, 0.0);
    }

    #[test]
    fn test_burn_halves_physical_damage() {
        let mut user = Combatant::new(1, Species::Machop, 50, &[]).unwrap();
        let target = Combatant::new(2, Species::Snorlax, 50, &[]).unwrap();
        let profile = AttackProfile {
            move_type: PokemonType::Fighting,
            category: MoveCategory::Physical,
            power: 80.0,
            critical: false,
            ignore_stat_stages: false,
            weather_multiplier: 1.0,
        };
        let healthy = calculate_damage(&user, &target, &profile, &mut BattleRng::new_for_test(vec![15]));
        user.set_status(StatusEffect::Burn, 0);
        let burned = calculate_damage(&user, &target, &profile, &mut BattleRng::new_for_test(vec![15]));
        assert!(burned.damage < healthy.damage);
        assert!(burned.damage.abs_diff(healthy.damage / 2) <= 1);
    }
}
