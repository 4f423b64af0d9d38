// In: src/move_data/catalog.rs

use super::{Move, MoveAttr as A, MoveCondition, MultiHitType, PowerCondition, Trigger, TriggerPhase};
use schema::BattleStat as Stat;
use schema::BattlerTagType as Tag;
use schema::MoveCategory::{Physical, Special};
use schema::MoveId as M;
use schema::PokemonType::*;
use schema::{FieldTagType, MoveTarget, PokemonType, StatusEffect, WeatherType};

fn physical(id: M, name: &'static str, ty: PokemonType, power: i32, acc: i32, pp: u8, chance: i32, generation: u8) -> Move {
    Move::attack(id, name, ty, Physical, power, acc, pp, chance, 0, generation)
}

fn special(id: M, name: &'static str, ty: PokemonType, power: i32, acc: i32, pp: u8, chance: i32, generation: u8) -> Move {
    Move::attack(id, name, ty, Special, power, acc, pp, chance, 0, generation)
}

fn charge(message: &'static str, hide_tag: Option<Tag>) -> A {
    A::Charge {
        message,
        hide_tag,
        boost: None,
        sun_skips: false,
    }
}

fn hit_tag(tag: Tag, turns: i32) -> A {
    A::AddTag {
        tag,
        min_turns: turns,
        max_turns: turns,
        trigger: Trigger::on_target(TriggerPhase::Hit),
        fail_on_overlap: false,
    }
}

pub(super) fn all_moves() -> Vec<Move> {
    let mut moves = Vec::new();
    moves.extend(first_generation());
    moves.extend(remaining_first_generation());
    moves.extend(later_generations());
    moves.extend(second_generation());
    moves.extend(third_generation());
    moves.extend(fourth_generation());
    moves.extend(fifth_generation());
    moves.extend(sixth_generation());
    moves.extend(seventh_generation());
    moves.extend(eighth_generation_onward());
    moves
}

fn first_generation() -> Vec<Move> {
    vec![
        physical(M::Pound, "Pound", Normal, 40, 100, 35, -1, 1),
        physical(M::KarateChop, "Karate Chop", Fighting, 50, 100, 25, -1, 1).attr(A::HighCritRatio),
        physical(M::DoubleSlap, "Double Slap", Normal, 15, 85, 10, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        physical(M::CometPunch, "Comet Punch", Normal, 18, 85, 15, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        physical(M::MegaPunch, "Mega Punch", Normal, 80, 85, 20, -1, 1),
        physical(M::FirePunch, "Fire Punch", Fire, 75, 100, 15, 10, 1).attr(A::status(StatusEffect::Burn)),
        physical(M::IcePunch, "Ice Punch", Ice, 75, 100, 15, 10, 1).attr(A::status(StatusEffect::Freeze)),
        physical(M::ThunderPunch, "Thunder Punch", Electric, 75, 100, 15, 10, 1)
            .attr(A::status(StatusEffect::Paralysis)),
        physical(M::Scratch, "Scratch", Normal, 40, 100, 35, -1, 1),
        special(M::RazorWind, "Razor Wind", Normal, 80, 100, 10, -1, 1)
            .attr(charge("whipped\nup a whirlwind!", None))
            .attr(A::HighCritRatio)
            .target(MoveTarget::AllNearEnemies),
        Move::self_status(M::SwordsDance, "Swords Dance", Normal, 20, 0, 1)
            .attr(A::stat_change(&[Stat::Attack], 2, true)),
        physical(M::Cut, "Cut", Normal, 50, 95, 30, -1, 1),
        special(M::Gust, "Gust", Flying, 40, 100, 35, -1, 1)
            .attr(A::HitsHidden(Tag::Flying))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Flying))),
        physical(M::WingAttack, "Wing Attack", Flying, 60, 100, 35, -1, 1),
        Move::status(M::Whirlwind, "Whirlwind", Normal, -1, 20, -6, 1)
            .attr(A::ForceSwitch { self_switch: false })
            .ignores_protect(),
        physical(M::Fly, "Fly", Flying, 90, 95, 15, -1, 1)
            .attr(charge("flew\nup high!", Some(Tag::Flying)))
            .hides_user(),
        physical(M::Bind, "Bind", Normal, 15, 85, 20, -1, 1).attr(A::trap()),
        physical(M::Slam, "Slam", Normal, 80, 75, 20, -1, 1),
        physical(M::VineWhip, "Vine Whip", Grass, 45, 100, 25, -1, 1),
        physical(M::Stomp, "Stomp", Normal, 65, 100, 20, 30, 1).attr(A::Flinch),
        physical(M::DoubleKick, "Double Kick", Fighting, 30, 100, 30, -1, 1)
            .attr(A::MultiHit(MultiHitType::Two)),
        physical(M::JumpKick, "Jump Kick", Fighting, 100, 95, 10, -1, 1).attr(A::CrashDamage(0.5)),
        physical(M::Headbutt, "Headbutt", Normal, 70, 100, 15, 30, 1).attr(A::Flinch),
        physical(M::Tackle, "Tackle", Normal, 40, 100, 35, -1, 1),
        physical(M::BodySlam, "Body Slam", Normal, 85, 100, 15, 30, 1)
            .attr(A::status(StatusEffect::Paralysis)),
        physical(M::Wrap, "Wrap", Normal, 15, 90, 20, -1, 1).attr(A::trap()),
        physical(M::TakeDown, "Take Down", Normal, 90, 85, 20, -1, 1).attr(A::Recoil(0.25)),
        physical(M::Thrash, "Thrash", Normal, 120, 100, 10, -1, 1)
            .attr(A::Frenzy)
            .target(MoveTarget::RandomNearEnemy),
        physical(M::DoubleEdge, "Double-Edge", Normal, 120, 100, 15, -1, 1).attr(A::Recoil(1.0 / 3.0)),
        Move::status(M::TailWhip, "Tail Whip", Normal, 100, 30, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::PoisonSting, "Poison Sting", Poison, 15, 100, 35, 30, 1)
            .attr(A::status(StatusEffect::Poison))
            .make_contact(false),
        physical(M::Twineedle, "Twineedle", Bug, 25, 100, 20, 20, 2)
            .attr(A::MultiHit(MultiHitType::Two))
            .attr(A::status(StatusEffect::Poison))
            .make_contact(false),
        physical(M::PinMissile, "Pin Missile", Bug, 25, 95, 20, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        Move::status(M::Leer, "Leer", Normal, 100, 30, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::Bite, "Bite", Dark, 60, 100, 25, 30, 1).attr(A::Flinch),
        Move::status(M::Growl, "Growl", Normal, 100, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Attack], -1, false))
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        Move::status(M::Roar, "Roar", Normal, -1, 20, -6, 1)
            .attr(A::ForceSwitch { self_switch: false })
            .sound_based()
            .ignores_protect(),
        Move::status(M::Sing, "Sing", Normal, 55, 15, 0, 1)
            .attr(A::status(StatusEffect::Sleep))
            .sound_based(),
        Move::status(M::Supersonic, "Supersonic", Normal, 55, 20, 0, 1)
            .attr(A::Confuse)
            .sound_based(),
        special(M::SonicBoom, "Sonic Boom", Normal, -1, 90, 20, -1, 1).attr(A::FixedDamage(20)),
        special(M::Ember, "Ember", Fire, 40, 100, 25, 10, 1).attr(A::status(StatusEffect::Burn)),
        special(M::Flamethrower, "Flamethrower", Fire, 90, 100, 15, 10, 1)
            .attr(A::status(StatusEffect::Burn)),
        special(M::WaterGun, "Water Gun", Water, 40, 100, 25, -1, 1),
        special(M::HydroPump, "Hydro Pump", Water, 110, 80, 5, -1, 1),
        special(M::Surf, "Surf", Water, 90, 100, 15, -1, 1)
            .attr(A::HitsHidden(Tag::Underwater))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Underwater)))
            .target(MoveTarget::AllNearOthers),
        special(M::IceBeam, "Ice Beam", Ice, 90, 100, 10, 10, 1).attr(A::status(StatusEffect::Freeze)),
        special(M::Blizzard, "Blizzard", Ice, 110, 70, 5, 10, 1)
            .attr(A::status(StatusEffect::Freeze))
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Hail,
                accuracy: -1,
            })
            .target(MoveTarget::AllNearEnemies),
        special(M::Psybeam, "Psybeam", Psychic, 65, 100, 20, 10, 1).attr(A::Confuse),
        special(M::HyperBeam, "Hyper Beam", Normal, 150, 90, 5, -1, 1).attr(A::Recharge),
        physical(M::Peck, "Peck", Flying, 35, 100, 35, -1, 1),
        physical(M::DrillPeck, "Drill Peck", Flying, 80, 100, 20, -1, 1),
        physical(M::SeismicToss, "Seismic Toss", Fighting, -1, 100, 20, -1, 1).attr(A::LevelDamage),
        Move::attack(M::Counter, "Counter", Fighting, Physical, -1, 100, 20, -1, -5, 1)
            .attr(A::CounterDamage {
                category: Some(Physical),
                multiplier: 2.0,
            })
            .target(MoveTarget::Attacker),
        special(M::Absorb, "Absorb", Grass, 20, 100, 25, -1, 1).attr(A::Drain(0.5)),
        special(M::MegaDrain, "Mega Drain", Grass, 40, 100, 15, -1, 1).attr(A::Drain(0.5)),
        Move::status(M::LeechSeed, "Leech Seed", Grass, 90, 10, 0, 1)
            .attr(A::add_tag(Tag::Seeded, 0, false))
            .condition(MoveCondition::TargetNotOfType(Grass)),
        Move::self_status(M::Growth, "Growth", Normal, 20, 0, 1).attr(A::Growth),
        physical(M::RazorLeaf, "Razor Leaf", Grass, 55, 95, 25, -1, 1)
            .attr(A::HighCritRatio)
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        special(M::SolarBeam, "Solar Beam", Grass, 120, 100, 10, -1, 1)
            .attr(A::Charge {
                message: "took\nin sunlight!",
                hide_tag: None,
                boost: None,
                sun_skips: true,
            })
            .attr(A::WeatherPowerPenalty),
        Move::status(M::PoisonPowder, "Poison Powder", Poison, 75, 35, 0, 1)
            .attr(A::status(StatusEffect::Poison)),
        Move::status(M::StunSpore, "Stun Spore", Grass, 75, 30, 0, 1)
            .attr(A::status(StatusEffect::Paralysis)),
        Move::status(M::SleepPowder, "Sleep Powder", Grass, 75, 15, 0, 1)
            .attr(A::status(StatusEffect::Sleep)),
        special(M::PetalDance, "Petal Dance", Grass, 120, 100, 10, -1, 1)
            .attr(A::Frenzy)
            .target(MoveTarget::RandomNearEnemy)
            .make_contact(true),
        Move::status(M::StringShot, "String Shot", Bug, 95, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Speed], -2, false))
            .target(MoveTarget::AllNearEnemies),
        special(M::DragonRage, "Dragon Rage", Dragon, -1, 100, 10, -1, 1).attr(A::FixedDamage(40)),
        special(M::FireSpin, "Fire Spin", Fire, 35, 85, 15, -1, 1).attr(A::trap()),
        special(M::ThunderShock, "Thunder Shock", Electric, 40, 100, 30, 10, 1)
            .attr(A::status(StatusEffect::Paralysis)),
        special(M::Thunderbolt, "Thunderbolt", Electric, 90, 100, 15, 10, 1)
            .attr(A::status(StatusEffect::Paralysis)),
        Move::status(M::ThunderWave, "Thunder Wave", Electric, 90, 20, 0, 1)
            .attr(A::status(StatusEffect::Paralysis))
            .condition(MoveCondition::TargetNotOfType(Ground)),
        special(M::Thunder, "Thunder", Electric, 110, 70, 10, 30, 1)
            .attr(A::status(StatusEffect::Paralysis))
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Rain,
                accuracy: -1,
            })
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Sunny,
                accuracy: 50,
            })
            .attr(A::HitsHidden(Tag::Flying)),
        physical(M::RockThrow, "Rock Throw", Rock, 50, 90, 15, -1, 1).make_contact(false),
        physical(M::Earthquake, "Earthquake", Ground, 100, 100, 10, -1, 1)
            .attr(A::HitsHidden(Tag::Underground))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Underground)))
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        physical(M::Fissure, "Fissure", Ground, -1, 30, 5, -1, 1)
            .attr(A::OneHitKo)
            .attr(A::OhkoAccuracy)
            .attr(A::HitsHidden(Tag::Underground))
            .make_contact(false),
        physical(M::Dig, "Dig", Ground, 80, 100, 10, -1, 1)
            .attr(charge("dug a hole!", Some(Tag::Underground)))
            .hides_user(),
        Move::status(M::Toxic, "Toxic", Poison, 90, 10, 0, 1)
            .attr(A::status(StatusEffect::Toxic))
            .attr(A::ToxicAccuracy),
        special(M::Confusion, "Confusion", Psychic, 50, 100, 25, 10, 1).attr(A::Confuse),
        special(M::Psychic, "Psychic", Psychic, 90, 100, 10, 10, 1)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        Move::status(M::Hypnosis, "Hypnosis", Psychic, 60, 20, 0, 1)
            .attr(A::status(StatusEffect::Sleep)),
        Move::self_status(M::Agility, "Agility", Psychic, 30, 0, 1)
            .attr(A::stat_change(&[Stat::Speed], 2, true)),
        Move::attack(M::QuickAttack, "Quick Attack", Normal, Physical, 40, 100, 30, -1, 1, 1),
        special(M::NightShade, "Night Shade", Ghost, -1, 100, 15, -1, 1).attr(A::LevelDamage),
        Move::status(M::Screech, "Screech", Normal, 85, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], -2, false))
            .sound_based(),
        Move::self_status(M::DoubleTeam, "Double Team", Normal, 15, 0, 1)
            .attr(A::stat_change(&[Stat::Evasion], 1, true)),
        Move::self_status(M::Recover, "Recover", Normal, 5, 0, 1).attr(A::heal(0.5)),
        Move::self_status(M::Harden, "Harden", Normal, 30, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], 1, true)),
        Move::self_status(M::Minimize, "Minimize", Normal, 10, 0, 1)
            .attr(A::stat_change(&[Stat::Evasion], 2, true)),
        Move::status(M::Smokescreen, "Smokescreen", Normal, 100, 20, 0, 1)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        Move::status(M::SandAttack, "Sand Attack", Ground, 100, 15, 0, 1)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        Move::self_status(M::Withdraw, "Withdraw", Water, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], 1, true)),
        Move::self_status(M::DefenseCurl, "Defense Curl", Normal, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], 1, true)),
        Move::self_status(M::Barrier, "Barrier", Psychic, 20, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], 2, true)),
        Move::status(M::Haze, "Haze", Ice, -1, 30, 0, 1)
            .attr(A::ResetAllStats)
            .target(MoveTarget::BothSides),
        Move::self_status(M::FocusEnergy, "Focus Energy", Normal, 30, 0, 1)
            .attr(A::add_tag(Tag::CritBoost, 0, true)),
        Move::status(M::MirrorMove, "Mirror Move", Flying, -1, 20, 0, 1)
            .attr(A::CopyMove)
            .ignores_virtual(),
        physical(M::SelfDestruct, "Self-Destruct", Normal, 200, 100, 5, -1, 1)
            .attr(A::Sacrifice)
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        physical(M::Explosion, "Explosion", Normal, 250, 100, 5, -1, 1)
            .attr(A::Sacrifice)
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        Move::self_status(M::Metronome, "Metronome", Normal, 10, 0, 1)
            .attr(A::RandomMove { from_moveset: false })
            .ignores_virtual(),
        special(M::Psywave, "Psywave", Psychic, -1, 100, 15, -1, 1).attr(A::RandomLevelDamage),
        Move::self_status(M::Splash, "Splash", Normal, 40, 0, 1)
            .attr(A::NoEffect("But nothing happened!")),
        Move::self_status(M::Rest, "Rest", Psychic, 5, 0, 1).attr(A::Rest),
        Move::status(M::Transform, "Transform", Normal, -1, 10, 0, 1)
            .attr(A::Transform)
            .ignores_virtual(),
        Move::self_status(M::Conversion, "Conversion", Normal, 30, 0, 1).attr(A::Conversion),
        special(M::TriAttack, "Tri Attack", Normal, 80, 100, 10, 20, 1).attr(A::TriAttackStatus),
        physical(M::SuperFang, "Super Fang", Normal, -1, 90, 10, -1, 1).attr(A::HalfHpDamage),
        Move::self_status(M::Substitute, "Substitute", Normal, 10, 0, 1)
            .attr(A::Substitute)
            .condition(MoveCondition::BattlerTagAbsent {
                tag: Tag::Substitute,
                self_target: true,
            }),
        physical(M::SkullBash, "Skull Bash", Normal, 130, 100, 10, -1, 1).attr(A::Charge {
            message: "lowered\nits head!",
            hide_tag: None,
            boost: Some((Stat::Defense, 1)),
            sun_skips: false,
        }),
        physical(M::SkyAttack, "Sky Attack", Flying, 140, 90, 5, 30, 1)
            .attr(charge("became cloaked\nin a harsh light!", None))
            .attr(A::HighCritRatio)
            .attr(A::Flinch)
            .make_contact(false),
    ]
}

fn later_generations() -> Vec<Move> {
    vec![
        Move::status(M::Spikes, "Spikes", Ground, -1, 20, 0, 2)
            .attr(A::AddFieldTag {
                tag: FieldTagType::Spikes,
                turns: 0,
            })
            .target(MoveTarget::EnemySide),
        Move::self_status(M::Protect, "Protect", Normal, 10, 4, 2).attr(A::Protect(Tag::Protected)),
        Move::self_status(M::Detect, "Detect", Fighting, 5, 4, 2).attr(A::Protect(Tag::Protected)),
        Move::self_status(M::Endure, "Endure", Normal, 10, 4, 2).attr(A::Protect(Tag::Enduring)),
        physical(M::Flail, "Flail", Normal, -1, 100, 15, -1, 2).attr(A::LowHpPower),
        physical(M::Reversal, "Reversal", Fighting, -1, 100, 15, -1, 2).attr(A::LowHpPower),
        Move::attack(M::MachPunch, "Mach Punch", Fighting, Physical, 40, 100, 30, -1, 1, 2),
        Move::attack(M::FakeOut, "Fake Out", Normal, Physical, 40, 100, 10, -1, 3, 3)
            .attr(A::Flinch)
            .condition(MoveCondition::FirstTurnOnField),
        Move::self_status(M::BellyDrum, "Belly Drum", Normal, 10, 0, 2).attr(A::BellyDrum),
        Move::self_status(M::Sandstorm, "Sandstorm", Rock, 10, 0, 2)
            .attr(A::WeatherChange(WeatherType::Sandstorm))
            .target(MoveTarget::BothSides),
        Move::self_status(M::RainDance, "Rain Dance", Water, 5, 0, 2)
            .attr(A::WeatherChange(WeatherType::Rain))
            .target(MoveTarget::BothSides),
        Move::self_status(M::SunnyDay, "Sunny Day", Fire, 5, 0, 2)
            .attr(A::WeatherChange(WeatherType::Sunny))
            .target(MoveTarget::BothSides),
        Move::self_status(M::Hail, "Hail", Ice, 10, 0, 3)
            .attr(A::WeatherChange(WeatherType::Hail))
            .target(MoveTarget::BothSides),
        physical(M::Outrage, "Outrage", Dragon, 120, 100, 10, -1, 2)
            .attr(A::Frenzy)
            .target(MoveTarget::RandomNearEnemy),
        physical(M::RapidSpin, "Rapid Spin", Normal, 50, 100, 40, -1, 2)
            .attr(A::ClearHazards { own_side_only: true })
            .attr(A::stat_change(&[Stat::Speed], 1, true)),
        Move::self_status(M::MorningSun, "Morning Sun", Normal, 5, 0, 2).attr(A::WeatherHeal),
        Move::self_status(M::Synthesis, "Synthesis", Grass, 5, 0, 2).attr(A::WeatherHeal),
        Move::self_status(M::Moonlight, "Moonlight", Fairy, 5, 0, 2).attr(A::WeatherHeal),
        Move::status(M::PsychUp, "Psych Up", Normal, -1, 10, 0, 2)
            .attr(A::CopyStatStages)
            .ignores_protect(),
        Move::attack(M::MirrorCoat, "Mirror Coat", Psychic, Special, -1, 100, 20, -1, -5, 2)
            .attr(A::CounterDamage {
                category: Some(Special),
                multiplier: 2.0,
            })
            .target(MoveTarget::Attacker),
        special(M::FutureSight, "Future Sight", Psychic, 120, 100, 10, -1, 2)
            .attr(A::DelayedAttack {
                message: "foresaw\nan attack!",
            })
            .ignores_protect(),
        special(M::DoomDesire, "Doom Desire", Steel, 140, 100, 5, -1, 3)
            .attr(A::DelayedAttack {
                message: "chose\nDoom Desire as its destiny!",
            })
            .ignores_protect(),
        physical(M::Facade, "Facade", Normal, 70, 100, 20, -1, 3)
            .attr(A::DoublePowerWhen(PowerCondition::UserStatused)),
        Move::self_status(M::Ingrain, "Ingrain", Grass, 20, 0, 3).attr(A::add_tag(Tag::Ingrain, 0, true)),
        Move::self_status(M::AquaRing, "Aqua Ring", Water, 20, 0, 4)
            .attr(A::add_tag(Tag::AquaRing, 0, true)),
        Move::status(M::Nightmare, "Nightmare", Ghost, 100, 15, 0, 2)
            .attr(A::add_tag(Tag::Nightmare, 0, false))
            .condition(MoveCondition::TargetAsleep),
        special(M::DreamEater, "Dream Eater", Psychic, 100, 100, 15, -1, 1)
            .attr(A::Drain(0.5))
            .condition(MoveCondition::TargetAsleep),
        special(M::Snore, "Snore", Normal, 50, 100, 15, 30, 2)
            .attr(A::Flinch)
            .condition(MoveCondition::UserAsleep)
            .sound_based(),
        Move::self_status(M::SleepTalk, "Sleep Talk", Normal, 10, 0, 2)
            .attr(A::RandomMove { from_moveset: true })
            .ignores_virtual(),
        special(M::WringOut, "Wring Out", Normal, -1, 100, 5, -1, 4)
            .attr(A::TargetHpPower { max_power: 120.0 })
            .make_contact(true),
        physical(M::CrushGrip, "Crush Grip", Normal, -1, 100, 5, -1, 4)
            .attr(A::TargetHpPower { max_power: 120.0 }),
        physical(M::HighJumpKick, "High Jump Kick", Fighting, 130, 90, 10, -1, 1)
            .attr(A::CrashDamage(0.5)),
        physical(M::Magnitude, "Magnitude", Ground, -1, 100, 30, -1, 2)
            .attr(A::Magnitude)
            .attr(A::HitsHidden(Tag::Underground))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Underground)))
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        physical(M::GyroBall, "Gyro Ball", Steel, -1, 100, 5, -1, 4).attr(A::GyroBall),
        physical(M::FuryCutter, "Fury Cutter", Bug, 40, 95, 20, -1, 2)
            .attr(A::ConsecutiveUsePower { max_doublings: 2 }),
        physical(M::Rollout, "Rollout", Rock, 30, 90, 20, -1, 2)
            .attr(A::ConsecutiveUsePower { max_doublings: 4 }),
        Move::attack(M::Revenge, "Revenge", Fighting, Physical, 60, 100, 10, -1, -4, 3)
            .attr(A::DoublePowerWhen(PowerCondition::UserDamagedByTarget)),
        Move::attack(M::Avalanche, "Avalanche", Ice, Physical, 60, 100, 10, -1, -4, 4)
            .attr(A::DoublePowerWhen(PowerCondition::UserDamagedByTarget)),
        physical(M::Payback, "Payback", Dark, 50, 100, 10, -1, 4)
            .attr(A::DoublePowerWhen(PowerCondition::TargetActedFirst)),
        special(M::Hex, "Hex", Ghost, 65, 100, 10, -1, 5)
            .attr(A::DoublePowerWhen(PowerCondition::TargetStatused)),
        special(M::Venoshock, "Venoshock", Poison, 65, 100, 10, -1, 5)
            .attr(A::DoublePowerWhen(PowerCondition::TargetPoisoned)),
        special(M::WeatherBall, "Weather Ball", Normal, 50, 100, 10, -1, 3)
            .attr(A::WeatherBallType)
            .attr(A::DoublePowerWhen(PowerCondition::WeatherActive)),
        Move::status(M::ToxicSpikes, "Toxic Spikes", Poison, -1, 20, 0, 4)
            .attr(A::AddFieldTag {
                tag: FieldTagType::ToxicSpikes,
                turns: 0,
            })
            .target(MoveTarget::EnemySide),
        Move::status(M::StealthRock, "Stealth Rock", Rock, -1, 20, 0, 4)
            .attr(A::AddFieldTag {
                tag: FieldTagType::StealthRock,
                turns: 0,
            })
            .target(MoveTarget::EnemySide),
        Move::status(M::MudSport, "Mud Sport", Ground, -1, 15, 0, 3)
            .attr(A::AddFieldTag {
                tag: FieldTagType::MudSport,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        Move::status(M::WaterSport, "Water Sport", Water, -1, 15, 0, 3)
            .attr(A::AddFieldTag {
                tag: FieldTagType::WaterSport,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        Move::status(M::TrickRoom, "Trick Room", Psychic, -1, 5, -7, 4)
            .attr(A::AddFieldTag {
                tag: FieldTagType::TrickRoom,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        Move::status(M::Gravity, "Gravity", Psychic, -1, 5, 0, 4)
            .attr(A::AddFieldTag {
                tag: FieldTagType::Gravity,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        Move::status(M::Defog, "Defog", Flying, -1, 15, 0, 4)
            .attr(A::stat_change(&[Stat::Evasion], -1, false))
            .attr(A::ClearHazards { own_side_only: false }),
        physical(M::UTurn, "U-turn", Bug, 70, 100, 20, -1, 4).attr(A::ForceSwitch { self_switch: true }),
        special(M::VoltSwitch, "Volt Switch", Electric, 70, 100, 20, -1, 5)
            .attr(A::ForceSwitch { self_switch: true }),
        physical(M::BraveBird, "Brave Bird", Flying, 120, 100, 15, -1, 4).attr(A::Recoil(1.0 / 3.0)),
        physical(M::FlareBlitz, "Flare Blitz", Fire, 120, 100, 15, 10, 4)
            .attr(A::status(StatusEffect::Burn))
            .attr(A::Recoil(1.0 / 3.0)),
        physical(M::CloseCombat, "Close Combat", Fighting, 120, 100, 5, -1, 4)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], -1, true)),
        special(M::Overheat, "Overheat", Fire, 130, 90, 5, -1, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, true)),
        physical(M::Superpower, "Superpower", Fighting, 120, 100, 5, -1, 3)
            .attr(A::stat_change(&[Stat::Attack, Stat::Defense], -1, true)),
        Move::self_status(M::DragonDance, "Dragon Dance", Dragon, 20, 0, 3)
            .attr(A::stat_change(&[Stat::Attack, Stat::Speed], 1, true)),
        Move::self_status(M::CalmMind, "Calm Mind", Psychic, 20, 0, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack, Stat::SpecialDefense], 1, true)),
        Move::self_status(M::BulkUp, "Bulk Up", Fighting, 20, 0, 3)
            .attr(A::stat_change(&[Stat::Attack, Stat::Defense], 1, true)),
        Move::self_status(M::NastyPlot, "Nasty Plot", Dark, 20, 0, 4)
            .attr(A::stat_change(&[Stat::SpecialAttack], 2, true)),
        Move::self_status(M::ShellSmash, "Shell Smash", Normal, 15, 0, 5)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack, Stat::Speed], 2, true))
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], -1, true)),
        Move::status(M::Curse, "Curse", Ghost, -1, 10, 0, 2).attr(A::Curse),
        physical(M::SmackDown, "Smack Down", Rock, 50, 100, 15, -1, 5)
            .attr(A::HitsHidden(Tag::Flying))
            .attr(hit_tag(Tag::IgnoreFlying, 0))
            .make_contact(false),
        special(M::FrostBreath, "Frost Breath", Ice, 60, 90, 10, -1, 5).attr(A::AlwaysCrit),
        physical(M::StormThrow, "Storm Throw", Fighting, 60, 100, 10, -1, 5).attr(A::AlwaysCrit),
        physical(M::ChipAway, "Chip Away", Normal, 70, 100, 20, -1, 5).attr(A::IgnoreStatStages),
        special(M::ClearSmog, "Clear Smog", Poison, 50, -1, 15, -1, 5).attr(A::ResetTargetStats),
        Move::status(M::TopsyTurvy, "Topsy-Turvy", Dark, -1, 20, 0, 6).attr(A::InvertStatStages),
        Move::status(M::HealPulse, "Heal Pulse", Psychic, -1, 10, 0, 5)
            .attr(A::HealFraction {
                fraction: 0.5,
                self_target: false,
            })
            .target(MoveTarget::Other),
        Move::self_status(M::HealBell, "Heal Bell", Normal, 5, 0, 2)
            .attr(A::PartyCure {
                message: "A bell chimed!",
            })
            .target(MoveTarget::UserSide)
            .sound_based(),
        Move::self_status(M::Aromatherapy, "Aromatherapy", Grass, 5, 0, 3)
            .attr(A::PartyCure {
                message: "A soothing aroma wafted\nthrough the area!",
            })
            .target(MoveTarget::UserSide),
        Move::self_status(M::Refresh, "Refresh", Normal, 20, 0, 3).attr(A::CureStatus),
        Move::status(M::PainSplit, "Pain Split", Normal, -1, 20, 0, 2).attr(A::PainSplit),
        physical(M::MetalBurst, "Metal Burst", Steel, -1, 100, 10, -1, 4)
            .attr(A::CounterDamage {
                category: None,
                multiplier: 1.5,
            })
            .target(MoveTarget::Attacker)
            .make_contact(false),
        physical(M::Bounce, "Bounce", Flying, 85, 85, 5, 30, 4)
            .attr(charge("sprang up!", Some(Tag::Flying)))
            .attr(A::status(StatusEffect::Paralysis))
            .hides_user(),
        physical(M::Dive, "Dive", Water, 80, 100, 10, -1, 3)
            .attr(charge("hid\nunderwater!", Some(Tag::Underwater)))
            .hides_user(),
        physical(M::Waterfall, "Waterfall", Water, 80, 100, 15, 20, 2).attr(A::Flinch),
        special(M::AirSlash, "Air Slash", Flying, 75, 95, 15, 30, 4).attr(A::Flinch),
        special(M::DarkPulse, "Dark Pulse", Dark, 80, 100, 15, 20, 4).attr(A::Flinch),
        special(M::ShadowBall, "Shadow Ball", Ghost, 80, 100, 15, 20, 2)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        special(M::EnergyBall, "Energy Ball", Grass, 90, 100, 10, 10, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        special(M::EarthPower, "Earth Power", Ground, 90, 100, 10, 10, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        special(M::SludgeBomb, "Sludge Bomb", Poison, 90, 100, 10, 30, 2)
            .attr(A::status(StatusEffect::Poison)),
        physical(M::PoisonJab, "Poison Jab", Poison, 80, 100, 20, 30, 4)
            .attr(A::status(StatusEffect::Poison)),
        physical(M::Crunch, "Crunch", Dark, 80, 100, 15, 20, 2)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        physical(M::IronHead, "Iron Head", Steel, 80, 100, 15, 30, 4).attr(A::Flinch),
        physical(M::StoneEdge, "Stone Edge", Rock, 100, 80, 5, -1, 4)
            .attr(A::HighCritRatio)
            .make_contact(false),
        physical(M::XScissor, "X-Scissor", Bug, 80, 100, 15, -1, 4),
        physical(M::DragonClaw, "Dragon Claw", Dragon, 80, 100, 15, -1, 3),
        special(M::DragonPulse, "Dragon Pulse", Dragon, 85, 100, 10, -1, 4),
        special(M::Moonblast, "Moonblast", Fairy, 95, 100, 15, 30, 6)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false)),
        special(M::DazzlingGleam, "Dazzling Gleam", Fairy, 80, 100, 10, -1, 6)
            .target(MoveTarget::AllNearEnemies),
        physical(M::PlayRough, "Play Rough", Fairy, 90, 90, 10, 10, 6)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        special(M::FlashCannon, "Flash Cannon", Steel, 80, 100, 10, 10, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        special(M::BugBuzz, "Bug Buzz", Bug, 90, 100, 10, 10, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false))
            .sound_based(),
        special(M::HyperVoice, "Hyper Voice", Normal, 90, 100, 10, -1, 3)
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        Move::attack(M::ExtremeSpeed, "Extreme Speed", Normal, Physical, 80, 100, 5, -1, 2, 2),
        Move::attack(M::AquaJet, "Aqua Jet", Water, Physical, 40, 100, 20, -1, 1, 4),
        Move::attack(M::IceShard, "Ice Shard", Ice, Physical, 40, 100, 30, -1, 1, 4).make_contact(false),
        Move::attack(M::ShadowSneak, "Shadow Sneak", Ghost, Physical, 40, 100, 30, -1, 1, 4),
        Move::attack(M::BulletPunch, "Bullet Punch", Steel, Physical, 40, 100, 30, -1, 1, 4),
        Move::status(M::ScaryFace, "Scary Face", Normal, 100, 10, 0, 2)
            .attr(A::stat_change(&[Stat::Speed], -2, false)),
        Move::status(M::Charm, "Charm", Fairy, 100, 20, 0, 2)
            .attr(A::stat_change(&[Stat::Attack], -2, false)),
        Move::status(M::FeatherDance, "Feather Dance", Flying, 100, 15, 0, 3)
            .attr(A::stat_change(&[Stat::Attack], -2, false)),
        Move::status(M::SweetKiss, "Sweet Kiss", Fairy, 75, 10, 0, 2).attr(A::Confuse),
        Move::status(M::ConfuseRay, "Confuse Ray", Ghost, 100, 10, 0, 1).attr(A::Confuse),
        Move::status(M::Swagger, "Swagger", Normal, 85, 15, 0, 2)
            .attr(A::stat_change(&[Stat::Attack], 2, false))
            .attr(A::Confuse),
        Move::status(M::WillOWisp, "Will-O-Wisp", Fire, 85, 15, 0, 3)
            .attr(A::status(StatusEffect::Burn)),
        Move::status(M::Glare, "Glare", Normal, 100, 30, 0, 2)
            .attr(A::status(StatusEffect::Paralysis)),
        Move::status(M::LovelyKiss, "Lovely Kiss", Normal, 75, 10, 0, 1)
            .attr(A::status(StatusEffect::Sleep)),
        Move::status(M::Spore, "Spore", Grass, 100, 15, 0, 1).attr(A::status(StatusEffect::Sleep)),
        physical(M::DynamicPunch, "Dynamic Punch", Fighting, 100, 50, 5, 100, 2).attr(A::Confuse),
        special(M::ZapCannon, "Zap Cannon", Electric, 120, 50, 5, 100, 2)
            .attr(A::status(StatusEffect::Paralysis)),
        special(M::Inferno, "Inferno", Fire, 100, 50, 5, 100, 5).attr(A::status(StatusEffect::Burn)),
        special(M::Scald, "Scald", Water, 80, 100, 15, 30, 5).attr(A::status(StatusEffect::Burn)),
        special(M::Discharge, "Discharge", Electric, 80, 100, 15, 30, 4)
            .attr(A::status(StatusEffect::Paralysis))
            .target(MoveTarget::AllNearOthers),
        special(M::LavaPlume, "Lava Plume", Fire, 80, 100, 15, 30, 4)
            .attr(A::status(StatusEffect::Burn))
            .target(MoveTarget::AllNearOthers),
        special(M::HeatWave, "Heat Wave", Fire, 95, 90, 10, 10, 3)
            .attr(A::status(StatusEffect::Burn))
            .target(MoveTarget::AllNearEnemies),
        special(M::Whirlpool, "Whirlpool", Water, 35, 85, 15, -1, 2)
            .attr(A::trap())
            .attr(A::HitsHidden(Tag::Underwater))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Underwater))),
        physical(M::SandTomb, "Sand Tomb", Ground, 35, 85, 15, -1, 3)
            .attr(A::trap())
            .make_contact(false),
    ]
}

fn remaining_first_generation() -> Vec<Move> {
    vec![
        physical(M::PayDay, "Pay Day", Normal, 40, 100, 20, -1, 1).make_contact(false),
        physical(M::ViseGrip, "Vise Grip", Normal, 55, 100, 30, -1, 1),
        physical(M::Guillotine, "Guillotine", Normal, -1, 30, 5, -1, 1)
            .attr(A::OneHitKo)
            .attr(A::OhkoAccuracy),
        physical(M::MegaKick, "Mega Kick", Normal, 120, 75, 5, -1, 1),
        physical(M::RollingKick, "Rolling Kick", Fighting, 60, 85, 15, 30, 1).attr(A::Flinch),
        physical(M::HornAttack, "Horn Attack", Normal, 65, 100, 25, -1, 1),
        physical(M::FuryAttack, "Fury Attack", Normal, 15, 85, 20, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        physical(M::HornDrill, "Horn Drill", Normal, -1, 30, 5, -1, 1)
            .attr(A::OneHitKo)
            .attr(A::OhkoAccuracy),
        special(M::Acid, "Acid", Poison, 40, 100, 30, 10, 1)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false))
            .target(MoveTarget::AllNearEnemies),
        special(M::BubbleBeam, "Bubble Beam", Water, 65, 100, 20, 10, 1)
            .attr(A::stat_change(&[Stat::Speed], -1, false)),
        special(M::AuroraBeam, "Aurora Beam", Ice, 65, 100, 20, 10, 1)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        special(M::Bubble, "Bubble", Water, 40, 100, 30, 10, 1)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::Submission, "Submission", Fighting, 80, 80, 20, -1, 1).attr(A::Recoil(0.25)),
        physical(M::Strength, "Strength", Normal, 80, 100, 15, -1, 1),
        physical(M::RockSlide, "Rock Slide", Rock, 75, 90, 10, 30, 1)
            .attr(A::Flinch)
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        Move::self_status(M::Meditate, "Meditate", Psychic, 40, 0, 1)
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        physical(M::Lick, "Lick", Ghost, 30, 100, 30, 30, 1).attr(A::status(StatusEffect::Paralysis)),
        special(M::Smog, "Smog", Poison, 30, 70, 20, 40, 1).attr(A::status(StatusEffect::Poison)),
        special(M::Sludge, "Sludge", Poison, 65, 100, 20, 30, 1).attr(A::status(StatusEffect::Poison)),
        physical(M::BoneClub, "Bone Club", Ground, 65, 85, 20, 10, 1)
            .attr(A::Flinch)
            .make_contact(false),
        special(M::FireBlast, "Fire Blast", Fire, 110, 85, 5, 10, 1).attr(A::status(StatusEffect::Burn)),
        physical(M::Clamp, "Clamp", Water, 35, 85, 15, -1, 1).attr(A::trap()),
        special(M::Swift, "Swift", Normal, 60, -1, 20, -1, 1).target(MoveTarget::AllNearEnemies),
        physical(M::SpikeCannon, "Spike Cannon", Normal, 20, 100, 15, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        physical(M::Constrict, "Constrict", Normal, 10, 100, 35, 10, 1)
            .attr(A::stat_change(&[Stat::Speed], -1, false)),
        Move::self_status(M::Amnesia, "Amnesia", Psychic, 20, 0, 1)
            .attr(A::stat_change(&[Stat::SpecialDefense], 2, true)),
        Move::status(M::Kinesis, "Kinesis", Psychic, 80, 15, 0, 1)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        Move::self_status(M::SoftBoiled, "Soft-Boiled", Normal, 5, 0, 1).attr(A::heal(0.5)),
        physical(M::Barrage, "Barrage", Normal, 15, 85, 20, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        physical(M::LeechLife, "Leech Life", Bug, 80, 100, 10, -1, 1).attr(A::Drain(0.5)),
        physical(M::EggBomb, "Egg Bomb", Normal, 100, 75, 10, -1, 1).make_contact(false),
        physical(M::Bonemerang, "Bonemerang", Ground, 50, 90, 10, -1, 1)
            .attr(A::MultiHit(MultiHitType::Two))
            .make_contact(false),
        Move::status(M::PoisonGas, "Poison Gas", Poison, 90, 40, 0, 1)
            .attr(A::status(StatusEffect::Poison))
            .target(MoveTarget::AllNearEnemies),
        physical(M::DizzyPunch, "Dizzy Punch", Normal, 70, 100, 10, 20, 1).attr(A::Confuse),
        physical(M::Crabhammer, "Crabhammer", Water, 100, 90, 10, -1, 1).attr(A::HighCritRatio),
        physical(M::FurySwipes, "Fury Swipes", Normal, 18, 80, 15, -1, 1)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        physical(M::Slash, "Slash", Normal, 70, 100, 20, -1, 1).attr(A::HighCritRatio),
        Move::self_status(M::Sharpen, "Sharpen", Normal, 30, 0, 1)
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        physical(M::HyperFang, "Hyper Fang", Normal, 80, 90, 15, 10, 1).attr(A::Flinch),
        Move::status(M::Flash, "Flash", Normal, 100, 20, 0, 1)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        Move::self_status(M::AcidArmor, "Acid Armor", Poison, 20, 0, 1)
            .attr(A::stat_change(&[Stat::Defense], 2, true)),
    ]
}

fn second_generation() -> Vec<Move> {
    vec![
        physical(M::FlameWheel, "Flame Wheel", Fire, 60, 100, 25, 10, 2).attr(A::status(StatusEffect::Burn)),
        special(M::Aeroblast, "Aeroblast", Flying, 100, 95, 5, -1, 2).attr(A::HighCritRatio),
        Move::status(M::CottonSpore, "Cotton Spore", Grass, 100, 40, 0, 2)
            .attr(A::stat_change(&[Stat::Speed], -2, false))
            .target(MoveTarget::AllNearEnemies),
        special(M::PowderSnow, "Powder Snow", Ice, 40, 100, 25, 10, 2)
            .attr(A::status(StatusEffect::Freeze))
            .target(MoveTarget::AllNearEnemies),
        physical(M::FeintAttack, "Feint Attack", Dark, 60, -1, 20, -1, 2),
        special(M::MudSlap, "Mud-Slap", Ground, 20, 100, 10, 100, 2)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        special(M::Octazooka, "Octazooka", Water, 65, 85, 10, 50, 2)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        special(M::IcyWind, "Icy Wind", Ice, 55, 95, 15, 100, 2)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::BoneRush, "Bone Rush", Ground, 25, 90, 10, -1, 2)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        special(M::GigaDrain, "Giga Drain", Grass, 75, 100, 10, -1, 2).attr(A::Drain(0.5)),
        Move::self_status(M::MilkDrink, "Milk Drink", Normal, 5, 0, 2).attr(A::heal(0.5)),
        physical(M::Spark, "Spark", Electric, 65, 100, 20, 30, 2).attr(A::status(StatusEffect::Paralysis)),
        physical(M::SteelWing, "Steel Wing", Steel, 70, 90, 25, 10, 2)
            .attr(A::stat_change(&[Stat::Defense], 1, true)),
        physical(M::SacredFire, "Sacred Fire", Fire, 100, 95, 5, 50, 2)
            .attr(A::status(StatusEffect::Burn))
            .make_contact(false),
        physical(M::Megahorn, "Megahorn", Bug, 120, 85, 10, -1, 2),
        special(M::DragonBreath, "Dragon Breath", Dragon, 60, 100, 20, 30, 2)
            .attr(A::status(StatusEffect::Paralysis)),
        Move::status(M::SweetScent, "Sweet Scent", Normal, 100, 20, 0, 2)
            .attr(A::stat_change(&[Stat::Evasion], -2, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::IronTail, "Iron Tail", Steel, 100, 75, 15, 30, 2)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        physical(M::MetalClaw, "Metal Claw", Steel, 50, 95, 35, 10, 2)
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        Move::attack(M::VitalThrow, "Vital Throw", Fighting, Physical, 70, -1, 10, -1, -1, 2),
        physical(M::CrossChop, "Cross Chop", Fighting, 100, 80, 5, -1, 2).attr(A::HighCritRatio),
        special(M::Twister, "Twister", Dragon, 40, 100, 20, 20, 2)
            .attr(A::Flinch)
            .attr(A::HitsHidden(Tag::Flying))
            .attr(A::DoublePowerWhen(PowerCondition::TargetHidden(Tag::Flying)))
            .target(MoveTarget::AllNearEnemies),
        special(M::AncientPower, "Ancient Power", Rock, 60, 100, 5, 10, 2)
            .attr(A::stat_change(
                &[Stat::Attack, Stat::Defense, Stat::SpecialAttack, Stat::SpecialDefense, Stat::Speed],
                1,
                true,
            )),
        physical(M::RockSmash, "Rock Smash", Fighting, 40, 100, 15, 50, 2)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
    ]
}

fn third_generation() -> Vec<Move> {
    vec![
        Move::status(M::Flatter, "Flatter", Dark, 100, 15, 0, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack], 1, false))
            .attr(A::Confuse),
        physical(M::BrickBreak, "Brick Break", Fighting, 75, 100, 15, -1, 3),
        physical(M::ArmThrust, "Arm Thrust", Fighting, 15, 100, 20, -1, 3)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        Move::self_status(M::TailGlow, "Tail Glow", Bug, 20, 0, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack], 3, true)),
        special(M::LusterPurge, "Luster Purge", Psychic, 95, 100, 5, 50, 3)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        special(M::MistBall, "Mist Ball", Psychic, 95, 100, 5, 50, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false)),
        Move::status(M::TeeterDance, "Teeter Dance", Normal, 100, 20, 0, 3)
            .attr(A::Confuse)
            .target(MoveTarget::AllNearOthers),
        physical(M::BlazeKick, "Blaze Kick", Fire, 85, 90, 10, 10, 3)
            .attr(A::HighCritRatio)
            .attr(A::status(StatusEffect::Burn)),
        physical(M::IceBall, "Ice Ball", Ice, 30, 90, 20, -1, 3)
            .attr(A::ConsecutiveUsePower { max_doublings: 4 }),
        physical(M::NeedleArm, "Needle Arm", Grass, 60, 100, 15, 30, 3).attr(A::Flinch),
        Move::self_status(M::SlackOff, "Slack Off", Normal, 5, 0, 3).attr(A::heal(0.5)),
        physical(M::PoisonFang, "Poison Fang", Poison, 50, 100, 15, 50, 3)
            .attr(A::status(StatusEffect::Toxic)),
        physical(M::CrushClaw, "Crush Claw", Normal, 75, 95, 10, 50, 3)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        special(M::BlastBurn, "Blast Burn", Fire, 150, 90, 5, -1, 3).attr(A::Recharge),
        special(M::HydroCannon, "Hydro Cannon", Water, 150, 90, 5, -1, 3).attr(A::Recharge),
        physical(M::MeteorMash, "Meteor Mash", Steel, 90, 90, 10, 20, 3)
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        physical(M::Astonish, "Astonish", Ghost, 30, 100, 15, 30, 3).attr(A::Flinch),
        Move::status(M::FakeTears, "Fake Tears", Dark, 100, 20, 0, 3)
            .attr(A::stat_change(&[Stat::SpecialDefense], -2, false)),
        special(M::AirCutter, "Air Cutter", Flying, 60, 95, 25, -1, 3)
            .attr(A::HighCritRatio)
            .target(MoveTarget::AllNearEnemies),
        physical(M::RockTomb, "Rock Tomb", Rock, 60, 95, 15, 100, 3)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .make_contact(false),
        special(M::SilverWind, "Silver Wind", Bug, 60, 100, 5, 10, 3)
            .attr(A::stat_change(
                &[Stat::Attack, Stat::Defense, Stat::SpecialAttack, Stat::SpecialDefense, Stat::Speed],
                1,
                true,
            )),
        Move::status(M::MetalSound, "Metal Sound", Steel, 85, 40, 0, 3)
            .attr(A::stat_change(&[Stat::SpecialDefense], -2, false))
            .sound_based(),
        Move::status(M::GrassWhistle, "Grass Whistle", Grass, 55, 15, 0, 3)
            .attr(A::status(StatusEffect::Sleep))
            .sound_based(),
        Move::status(M::Tickle, "Tickle", Normal, 100, 20, 0, 3)
            .attr(A::stat_change(&[Stat::Attack, Stat::Defense], -1, false)),
        Move::self_status(M::CosmicPower, "Cosmic Power", Psychic, 20, 0, 3)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], 1, true)),
        special(M::SignalBeam, "Signal Beam", Bug, 75, 100, 15, 10, 3).attr(A::Confuse),
        physical(M::ShadowPunch, "Shadow Punch", Ghost, 60, -1, 20, -1, 3),
        special(M::Extrasensory, "Extrasensory", Psychic, 80, 100, 20, 10, 3).attr(A::Flinch),
        physical(M::SkyUppercut, "Sky Uppercut", Fighting, 85, 90, 15, -1, 3).attr(A::HitsHidden(Tag::Flying)),
        special(M::SheerCold, "Sheer Cold", Ice, -1, 30, 5, -1, 3)
            .attr(A::OneHitKo)
            .attr(A::OhkoAccuracy),
        special(M::MuddyWater, "Muddy Water", Water, 90, 85, 10, 30, 3)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::BulletSeed, "Bullet Seed", Grass, 25, 100, 30, -1, 3)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        physical(M::AerialAce, "Aerial Ace", Flying, 60, -1, 20, -1, 3),
        physical(M::IcicleSpear, "Icicle Spear", Ice, 25, 100, 30, -1, 3)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        Move::self_status(M::IronDefense, "Iron Defense", Steel, 15, 0, 3)
            .attr(A::stat_change(&[Stat::Defense], 2, true)),
        Move::self_status(M::Howl, "Howl", Normal, 40, 0, 3)
            .attr(A::stat_change(&[Stat::Attack], 1, true))
            .target(MoveTarget::UserAndAllies)
            .sound_based(),
        special(M::FrenzyPlant, "Frenzy Plant", Grass, 150, 90, 5, -1, 3).attr(A::Recharge),
        special(M::MudShot, "Mud Shot", Ground, 55, 95, 15, 100, 3)
            .attr(A::stat_change(&[Stat::Speed], -1, false)),
        physical(M::PoisonTail, "Poison Tail", Poison, 50, 100, 25, 10, 3)
            .attr(A::HighCritRatio)
            .attr(A::status(StatusEffect::Poison)),
        physical(M::VoltTackle, "Volt Tackle", Electric, 120, 100, 15, 10, 3)
            .attr(A::status(StatusEffect::Paralysis))
            .attr(A::Recoil(1.0 / 3.0)),
        special(M::MagicalLeaf, "Magical Leaf", Grass, 60, -1, 20, -1, 3),
        physical(M::LeafBlade, "Leaf Blade", Grass, 90, 100, 15, -1, 3).attr(A::HighCritRatio),
        physical(M::RockBlast, "Rock Blast", Rock, 25, 90, 10, -1, 3)
            .attr(A::MultiHit(MultiHitType::TwoToFive))
            .make_contact(false),
        special(M::ShockWave, "Shock Wave", Electric, 60, -1, 20, -1, 3),
        special(M::WaterPulse, "Water Pulse", Water, 60, 100, 20, 20, 3).attr(A::Confuse),
        special(M::PsychoBoost, "Psycho Boost", Psychic, 140, 90, 5, -1, 3)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, true)),
        physical(M::SecretPower, "Secret Power", Normal, 70, 100, 20, 30, 3)
            .attr(A::status(StatusEffect::Paralysis))
            .make_contact(false),
        Move::status(M::Memento, "Memento", Dark, 100, 10, 0, 3)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack], -2, false))
            .attr(A::Sacrifice),
    ]
}

fn fourth_generation() -> Vec<Move> {
    vec![
        physical(M::HammerArm, "Hammer Arm", Fighting, 100, 90, 10, -1, 4)
            .attr(A::stat_change(&[Stat::Speed], -1, true)),
        physical(M::ForcePalm, "Force Palm", Fighting, 60, 100, 10, 30, 4)
            .attr(A::status(StatusEffect::Paralysis)),
        special(M::AuraSphere, "Aura Sphere", Fighting, 80, -1, 20, -1, 4),
        Move::self_status(M::RockPolish, "Rock Polish", Rock, 20, 0, 4)
            .attr(A::stat_change(&[Stat::Speed], 2, true)),
        physical(M::NightSlash, "Night Slash", Dark, 70, 100, 15, -1, 4).attr(A::HighCritRatio),
        physical(M::AquaTail, "Aqua Tail", Water, 90, 90, 10, -1, 4),
        physical(M::SeedBomb, "Seed Bomb", Grass, 80, 100, 15, -1, 4).make_contact(false),
        physical(M::DragonRush, "Dragon Rush", Dragon, 100, 75, 10, 20, 4).attr(A::Flinch),
        special(M::PowerGem, "Power Gem", Rock, 80, 100, 20, -1, 4),
        physical(M::DrainPunch, "Drain Punch", Fighting, 75, 100, 10, -1, 4).attr(A::Drain(0.5)),
        Move::attack(M::VacuumWave, "Vacuum Wave", Fighting, Special, 40, 100, 30, -1, 1, 4),
        special(M::FocusBlast, "Focus Blast", Fighting, 120, 70, 5, 10, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        physical(M::GigaImpact, "Giga Impact", Normal, 150, 90, 5, -1, 4).attr(A::Recharge),
        physical(M::ShadowClaw, "Shadow Claw", Ghost, 70, 100, 15, -1, 4).attr(A::HighCritRatio),
        physical(M::ThunderFang, "Thunder Fang", Electric, 65, 95, 15, 10, 4)
            .attr(A::status(StatusEffect::Paralysis))
            .attr(A::Flinch),
        physical(M::IceFang, "Ice Fang", Ice, 65, 95, 15, 10, 4)
            .attr(A::status(StatusEffect::Freeze))
            .attr(A::Flinch),
        physical(M::FireFang, "Fire Fang", Fire, 65, 95, 15, 10, 4)
            .attr(A::status(StatusEffect::Burn))
            .attr(A::Flinch),
        special(M::MudBomb, "Mud Bomb", Ground, 65, 85, 10, 30, 4)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        physical(M::PsychoCut, "Psycho Cut", Psychic, 70, 100, 20, -1, 4)
            .attr(A::HighCritRatio)
            .make_contact(false),
        physical(M::ZenHeadbutt, "Zen Headbutt", Psychic, 80, 90, 15, 20, 4).attr(A::Flinch),
        special(M::MirrorShot, "Mirror Shot", Steel, 65, 85, 10, 30, 4)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        physical(M::RockClimb, "Rock Climb", Normal, 90, 85, 20, 20, 4).attr(A::Confuse),
        special(M::DracoMeteor, "Draco Meteor", Dragon, 130, 90, 5, -1, 4)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, true)),
        special(M::LeafStorm, "Leaf Storm", Grass, 130, 90, 5, -1, 4)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, true)),
        physical(M::PowerWhip, "Power Whip", Grass, 120, 85, 10, -1, 4),
        physical(M::RockWrecker, "Rock Wrecker", Rock, 150, 90, 5, -1, 4)
            .attr(A::Recharge)
            .make_contact(false),
        physical(M::CrossPoison, "Cross Poison", Poison, 70, 100, 20, 10, 4)
            .attr(A::HighCritRatio)
            .attr(A::status(StatusEffect::Poison)),
        physical(M::GunkShot, "Gunk Shot", Poison, 120, 80, 5, 30, 4)
            .attr(A::status(StatusEffect::Poison))
            .make_contact(false),
        physical(M::MagnetBomb, "Magnet Bomb", Steel, 60, -1, 20, -1, 4).make_contact(false),
        special(M::Chatter, "Chatter", Flying, 65, 100, 20, 100, 4)
            .attr(A::Confuse)
            .sound_based(),
        special(M::ChargeBeam, "Charge Beam", Electric, 50, 90, 10, 70, 4)
            .attr(A::stat_change(&[Stat::SpecialAttack], 1, true)),
        physical(M::WoodHammer, "Wood Hammer", Grass, 120, 100, 15, -1, 4).attr(A::Recoil(1.0 / 3.0)),
        physical(M::AttackOrder, "Attack Order", Bug, 90, 100, 15, -1, 4)
            .attr(A::HighCritRatio)
            .make_contact(false),
        Move::self_status(M::DefendOrder, "Defend Order", Bug, 10, 0, 4)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], 1, true)),
        Move::self_status(M::HealOrder, "Heal Order", Bug, 10, 0, 4).attr(A::heal(0.5)),
        physical(M::HeadSmash, "Head Smash", Rock, 150, 80, 5, -1, 4).attr(A::Recoil(0.5)),
        physical(M::DoubleHit, "Double Hit", Normal, 35, 90, 10, -1, 4).attr(A::MultiHit(MultiHitType::Two)),
        special(M::RoarOfTime, "Roar of Time", Dragon, 150, 90, 5, -1, 4).attr(A::Recharge),
        special(M::SpacialRend, "Spacial Rend", Dragon, 100, 95, 5, -1, 4).attr(A::HighCritRatio),
        special(M::MagmaStorm, "Magma Storm", Fire, 100, 75, 5, -1, 4).attr(A::trap()),
        Move::status(M::DarkVoid, "Dark Void", Dark, 50, 10, 0, 4)
            .attr(A::status(StatusEffect::Sleep))
            .target(MoveTarget::AllNearEnemies),
        special(M::SeedFlare, "Seed Flare", Grass, 120, 85, 5, 40, 4)
            .attr(A::stat_change(&[Stat::SpecialDefense], -2, false)),
        special(M::OminousWind, "Ominous Wind", Ghost, 60, 100, 5, 10, 4)
            .attr(A::stat_change(
                &[Stat::Attack, Stat::Defense, Stat::SpecialAttack, Stat::SpecialDefense, Stat::Speed],
                1,
                true,
            )),
        physical(M::ShadowForce, "Shadow Force", Ghost, 120, 100, 5, -1, 4)
            .attr(charge("vanished\ninstantly!", None))
            .ignores_protect(),
    ]
}

fn fifth_generation() -> Vec<Move> {
    vec![
        Move::self_status(M::HoneClaws, "Hone Claws", Dark, 15, 0, 5)
            .attr(A::stat_change(&[Stat::Attack, Stat::Accuracy], 1, true)),
        Move::self_status(M::Autotomize, "Autotomize", Steel, 15, 0, 5)
            .attr(A::stat_change(&[Stat::Speed], 2, true)),
        special(M::FlameBurst, "Flame Burst", Fire, 70, 100, 15, -1, 5),
        special(M::SludgeWave, "Sludge Wave", Poison, 95, 100, 10, 10, 5)
            .attr(A::status(StatusEffect::Poison))
            .target(MoveTarget::AllNearOthers),
        Move::self_status(M::QuiverDance, "Quiver Dance", Bug, 20, 0, 5)
            .attr(A::stat_change(&[Stat::SpecialAttack, Stat::SpecialDefense, Stat::Speed], 1, true)),
        physical(M::FlameCharge, "Flame Charge", Fire, 50, 100, 20, 100, 5)
            .attr(A::stat_change(&[Stat::Speed], 1, true)),
        Move::self_status(M::Coil, "Coil", Poison, 20, 0, 5)
            .attr(A::stat_change(&[Stat::Attack, Stat::Defense, Stat::Accuracy], 1, true)),
        physical(M::LowSweep, "Low Sweep", Fighting, 65, 100, 20, 100, 5)
            .attr(A::stat_change(&[Stat::Speed], -1, false)),
        special(M::AcidSpray, "Acid Spray", Poison, 40, 100, 20, 100, 5)
            .attr(A::stat_change(&[Stat::SpecialDefense], -2, false)),
        special(M::Round, "Round", Normal, 60, 100, 15, -1, 5).sound_based(),
        special(M::EchoedVoice, "Echoed Voice", Normal, 40, 100, 15, -1, 5)
            .attr(A::ConsecutiveUsePower { max_doublings: 4 })
            .sound_based(),
        Move::self_status(M::ShiftGear, "Shift Gear", Steel, 10, 0, 5)
            .attr(A::stat_change(&[Stat::Speed], 2, true))
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        Move::attack(M::CircleThrow, "Circle Throw", Fighting, Physical, 60, 90, 10, -1, -6, 5)
            .attr(A::ForceSwitch { self_switch: false }),
        special(M::Incinerate, "Incinerate", Fire, 60, 100, 15, -1, 5).target(MoveTarget::AllNearEnemies),
        special(M::StruggleBug, "Struggle Bug", Bug, 50, 100, 20, 100, 5)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::Bulldoze, "Bulldoze", Ground, 60, 100, 20, 100, 5)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        Move::attack(M::DragonTail, "Dragon Tail", Dragon, Physical, 60, 90, 10, -1, -6, 5)
            .attr(A::ForceSwitch { self_switch: false }),
        Move::self_status(M::WorkUp, "Work Up", Normal, 30, 0, 5)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack], 1, true)),
        special(M::Electroweb, "Electroweb", Electric, 55, 95, 15, 100, 5)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::WildCharge, "Wild Charge", Electric, 90, 100, 15, -1, 5).attr(A::Recoil(0.25)),
        physical(M::DrillRun, "Drill Run", Ground, 80, 95, 10, -1, 5).attr(A::HighCritRatio),
        physical(M::DualChop, "Dual Chop", Dragon, 40, 90, 15, -1, 5).attr(A::MultiHit(MultiHitType::Two)),
        physical(M::HeartStamp, "Heart Stamp", Psychic, 60, 100, 25, 30, 5).attr(A::Flinch),
        physical(M::HornLeech, "Horn Leech", Grass, 75, 100, 10, -1, 5).attr(A::Drain(0.5)),
        physical(M::SacredSword, "Sacred Sword", Fighting, 90, 100, 15, -1, 5).attr(A::IgnoreStatStages),
        physical(M::RazorShell, "Razor Shell", Water, 75, 95, 10, 50, 5)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        physical(M::LeafTornado, "Leaf Tornado", Grass, 65, 90, 10, 50, 5)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false))
            .make_contact(false),
        physical(M::Steamroller, "Steamroller", Bug, 65, 100, 20, 30, 5).attr(A::Flinch),
        Move::self_status(M::CottonGuard, "Cotton Guard", Grass, 10, 0, 5)
            .attr(A::stat_change(&[Stat::Defense], 3, true)),
        special(M::NightDaze, "Night Daze", Dark, 85, 95, 10, 40, 5)
            .attr(A::stat_change(&[Stat::Accuracy], -1, false)),
        physical(M::TailSlap, "Tail Slap", Normal, 25, 85, 10, -1, 5)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        special(M::Hurricane, "Hurricane", Flying, 110, 70, 10, 30, 5)
            .attr(A::Confuse)
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Rain,
                accuracy: -1,
            })
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Sunny,
                accuracy: 50,
            })
            .attr(A::HitsHidden(Tag::Flying)),
        physical(M::HeadCharge, "Head Charge", Normal, 120, 100, 15, -1, 5).attr(A::Recoil(0.25)),
        physical(M::GearGrind, "Gear Grind", Steel, 50, 85, 15, -1, 5).attr(A::MultiHit(MultiHitType::Two)),
        special(M::SearingShot, "Searing Shot", Fire, 100, 100, 5, 30, 5)
            .attr(A::status(StatusEffect::Burn))
            .target(MoveTarget::AllNearOthers),
        special(M::TechnoBlast, "Techno Blast", Normal, 120, 100, 5, -1, 5),
        special(M::RelicSong, "Relic Song", Normal, 75, 100, 10, 10, 5)
            .attr(A::status(StatusEffect::Sleep))
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        special(M::Glaciate, "Glaciate", Ice, 65, 95, 10, 100, 5)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::BoltStrike, "Bolt Strike", Electric, 130, 85, 5, 20, 5)
            .attr(A::status(StatusEffect::Paralysis)),
        special(M::BlueFlare, "Blue Flare", Fire, 130, 85, 5, 20, 5).attr(A::status(StatusEffect::Burn)),
        special(M::FieryDance, "Fiery Dance", Fire, 80, 100, 10, 50, 5)
            .attr(A::stat_change(&[Stat::SpecialAttack], 1, true)),
        physical(M::FreezeShock, "Freeze Shock", Ice, 140, 90, 5, 30, 5)
            .attr(charge("became cloaked\nin a freezing light!", None))
            .attr(A::status(StatusEffect::Paralysis))
            .make_contact(false),
        special(M::IceBurn, "Ice Burn", Ice, 140, 90, 5, 30, 5)
            .attr(charge("became cloaked\nin freezing air!", None))
            .attr(A::status(StatusEffect::Burn)),
        special(M::Snarl, "Snarl", Dark, 55, 95, 15, 100, 5)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false))
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        physical(M::IcicleCrash, "Icicle Crash", Ice, 85, 90, 10, 30, 5)
            .attr(A::Flinch)
            .make_contact(false),
        physical(M::VCreate, "V-create", Fire, 180, 95, 5, -1, 5)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense, Stat::Speed], -1, true)),
        special(M::FusionFlare, "Fusion Flare", Fire, 100, 100, 5, -1, 5),
        physical(M::FusionBolt, "Fusion Bolt", Electric, 100, 100, 5, -1, 5).make_contact(false),
    ]
}

fn sixth_generation() -> Vec<Move> {
    vec![
        physical(M::PhantomForce, "Phantom Force", Ghost, 90, 100, 10, -1, 6)
            .attr(charge("vanished\ninstantly!", None))
            .ignores_protect(),
        Move::status(M::NobleRoar, "Noble Roar", Normal, 100, 30, 0, 6)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack], -1, false))
            .sound_based(),
        special(M::ParabolicCharge, "Parabolic Charge", Electric, 65, 100, 20, -1, 6)
            .attr(A::Drain(0.5))
            .target(MoveTarget::AllNearOthers),
        physical(M::PetalBlizzard, "Petal Blizzard", Grass, 90, 100, 15, -1, 6)
            .target(MoveTarget::AllNearOthers)
            .make_contact(false),
        special(M::DisarmingVoice, "Disarming Voice", Fairy, 40, -1, 15, -1, 6)
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        special(M::DrainingKiss, "Draining Kiss", Fairy, 50, 100, 10, -1, 6)
            .attr(A::Drain(0.75))
            .make_contact(true),
        special(M::FairyWind, "Fairy Wind", Fairy, 40, 100, 30, -1, 6),
        special(M::Boomburst, "Boomburst", Normal, 140, 100, 10, -1, 6)
            .target(MoveTarget::AllNearOthers)
            .sound_based(),
        Move::status(M::PlayNice, "Play Nice", Normal, -1, 20, 0, 6)
            .attr(A::stat_change(&[Stat::Attack], -1, false))
            .ignores_protect(),
        Move::status(M::Confide, "Confide", Normal, -1, 20, 0, 6)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false))
            .ignores_protect()
            .sound_based(),
        physical(M::DiamondStorm, "Diamond Storm", Rock, 100, 95, 5, 50, 6)
            .attr(A::stat_change(&[Stat::Defense], 2, true))
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        special(M::SteamEruption, "Steam Eruption", Water, 110, 95, 5, 30, 6)
            .attr(A::status(StatusEffect::Burn)),
        Move::attack(M::WaterShuriken, "Water Shuriken", Water, Special, 15, 100, 20, -1, 1, 6)
            .attr(A::MultiHit(MultiHitType::TwoToFive)),
        special(M::MysticalFire, "Mystical Fire", Fire, 75, 100, 10, 100, 6)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false)),
        Move::status(M::EerieImpulse, "Eerie Impulse", Electric, 100, 15, 0, 6)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, false)),
        Move::self_status(M::Celebrate, "Celebrate", Normal, 40, 0, 6)
            .attr(A::NoEffect("Congratulations!"))
            .ignores_virtual(),
        Move::status(M::BabyDollEyes, "Baby-Doll Eyes", Fairy, 100, 30, 1, 6)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        physical(M::Nuzzle, "Nuzzle", Electric, 20, 100, 20, 100, 6).attr(A::status(StatusEffect::Paralysis)),
        special(M::Infestation, "Infestation", Bug, 20, 100, 20, -1, 6)
            .attr(A::trap())
            .make_contact(true),
        physical(M::PowerUpPunch, "Power-Up Punch", Fighting, 40, 100, 20, 100, 6)
            .attr(A::stat_change(&[Stat::Attack], 1, true)),
        special(M::OblivionWing, "Oblivion Wing", Flying, 80, 100, 10, -1, 6).attr(A::Drain(0.75)),
        physical(M::LandsWrath, "Land's Wrath", Ground, 90, 100, 10, -1, 6)
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        special(M::LightOfRuin, "Light of Ruin", Fairy, 140, 90, 5, -1, 6).attr(A::Recoil(0.5)),
        special(M::OriginPulse, "Origin Pulse", Water, 110, 85, 10, -1, 6).target(MoveTarget::AllNearEnemies),
        physical(M::PrecipiceBlades, "Precipice Blades", Ground, 120, 85, 10, -1, 6)
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        physical(M::DragonAscent, "Dragon Ascent", Flying, 120, 100, 5, -1, 6)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], -1, true)),
    ]
}

fn seventh_generation() -> Vec<Move> {
    vec![
        Move::attack(M::FirstImpression, "First Impression", Bug, Physical, 90, 100, 10, -1, 2, 7)
            .condition(MoveCondition::FirstTurnOnField),
        physical(M::DarkestLariat, "Darkest Lariat", Dark, 85, 100, 10, -1, 7).attr(A::IgnoreStatStages),
        physical(M::IceHammer, "Ice Hammer", Ice, 100, 90, 10, -1, 7)
            .attr(A::stat_change(&[Stat::Speed], -1, true)),
        physical(M::HighHorsepower, "High Horsepower", Ground, 95, 95, 10, -1, 7),
        physical(M::SolarBlade, "Solar Blade", Grass, 125, 100, 10, -1, 7)
            .attr(A::Charge {
                message: "took\nin sunlight!",
                hide_tag: None,
                boost: None,
                sun_skips: true,
            })
            .attr(A::WeatherPowerPenalty),
        special(M::Leafage, "Leafage", Grass, 40, 100, 40, -1, 7),
        physical(M::Lunge, "Lunge", Bug, 80, 100, 15, 100, 7)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        physical(M::FireLash, "Fire Lash", Fire, 80, 100, 15, 100, 7)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        physical(M::SmartStrike, "Smart Strike", Steel, 70, -1, 10, -1, 7),
        physical(M::TropKick, "Trop Kick", Grass, 70, 100, 15, 100, 7)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        special(M::ClangingScales, "Clanging Scales", Dragon, 110, 100, 5, -1, 7)
            .attr(A::stat_change(&[Stat::Defense], -1, true))
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        physical(M::DragonHammer, "Dragon Hammer", Dragon, 90, 100, 15, -1, 7),
        physical(M::BrutalSwing, "Brutal Swing", Dark, 60, 100, 20, -1, 7).target(MoveTarget::AllNearOthers),
        special(M::FleurCannon, "Fleur Cannon", Fairy, 130, 90, 5, -1, 7)
            .attr(A::stat_change(&[Stat::SpecialAttack], -2, true)),
        physical(M::PsychicFangs, "Psychic Fangs", Psychic, 85, 100, 10, -1, 7),
        physical(M::ShadowBone, "Shadow Bone", Ghost, 85, 100, 10, 20, 7)
            .attr(A::stat_change(&[Stat::Defense], -1, false))
            .make_contact(false),
        Move::attack(M::Accelerock, "Accelerock", Rock, Physical, 40, 100, 20, -1, 1, 7),
        physical(M::Liquidation, "Liquidation", Water, 85, 100, 10, 20, 7)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        special(M::PrismaticLaser, "Prismatic Laser", Psychic, 160, 100, 10, -1, 7).attr(A::Recharge),
        physical(M::SunsteelStrike, "Sunsteel Strike", Steel, 100, 100, 5, -1, 7),
        special(M::MoongeistBeam, "Moongeist Beam", Ghost, 100, 100, 5, -1, 7),
        Move::status(M::TearfulLook, "Tearful Look", Normal, -1, 20, 0, 7)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack], -1, false))
            .ignores_protect(),
        physical(M::ZingZap, "Zing Zap", Electric, 80, 100, 10, 30, 7).attr(A::Flinch),
        special(M::NaturesMadness, "Nature's Madness", Fairy, -1, 90, 10, -1, 7).attr(A::HalfHpDamage),
    ]
}

fn eighth_generation_onward() -> Vec<Move> {
    vec![
        special(M::SnipeShot, "Snipe Shot", Water, 80, 100, 15, -1, 8).attr(A::HighCritRatio),
        physical(M::DragonDarts, "Dragon Darts", Dragon, 50, 100, 10, -1, 8)
            .attr(A::MultiHit(MultiHitType::Two))
            .make_contact(false),
        Move::status(M::Decorate, "Decorate", Fairy, -1, 15, 0, 8)
            .attr(A::stat_change(&[Stat::Attack, Stat::SpecialAttack], 2, false))
            .ignores_protect(),
        physical(M::DrumBeating, "Drum Beating", Grass, 80, 100, 10, 100, 8)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .make_contact(false),
        physical(M::SnapTrap, "Snap Trap", Grass, 35, 100, 15, -1, 8).attr(A::trap()),
        physical(M::PyroBall, "Pyro Ball", Fire, 120, 90, 5, 10, 8)
            .attr(A::status(StatusEffect::Burn))
            .make_contact(false),
        physical(M::BehemothBlade, "Behemoth Blade", Steel, 100, 100, 5, -1, 8),
        physical(M::BehemothBash, "Behemoth Bash", Steel, 100, 100, 5, -1, 8),
        physical(M::BreakingSwipe, "Breaking Swipe", Dragon, 60, 100, 15, 100, 8)
            .attr(A::stat_change(&[Stat::Attack], -1, false))
            .target(MoveTarget::AllNearEnemies),
        physical(M::BranchPoke, "Branch Poke", Grass, 40, 100, 40, -1, 8),
        special(M::Overdrive, "Overdrive", Electric, 80, 100, 10, -1, 8)
            .target(MoveTarget::AllNearEnemies)
            .sound_based(),
        special(M::AppleAcid, "Apple Acid", Grass, 80, 100, 10, 100, 8)
            .attr(A::stat_change(&[Stat::SpecialDefense], -1, false)),
        physical(M::GravApple, "Grav Apple", Grass, 80, 100, 10, 100, 8)
            .attr(A::stat_change(&[Stat::Defense], -1, false))
            .make_contact(false),
        physical(M::SpiritBreak, "Spirit Break", Fairy, 75, 100, 15, 100, 8)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false)),
        special(M::StrangeSteam, "Strange Steam", Fairy, 90, 95, 10, 20, 8).attr(A::Confuse),
        Move::self_status(M::LifeDew, "Life Dew", Water, 10, 0, 8).attr(A::heal(0.25)),
        physical(M::FalseSurrender, "False Surrender", Dark, 80, -1, 10, -1, 8),
        special(M::MeteorBeam, "Meteor Beam", Rock, 120, 90, 10, -1, 8).attr(A::Charge {
            message: "is overflowing\nwith space power!",
            hide_tag: None,
            boost: Some((Stat::SpecialAttack, 1)),
            sun_skips: false,
        }),
        special(M::MistyExplosion, "Misty Explosion", Fairy, 100, 100, 5, -1, 8)
            .attr(A::Sacrifice)
            .target(MoveTarget::AllNearOthers),
        physical(M::SkitterSmack, "Skitter Smack", Bug, 70, 90, 10, 100, 8)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, false)),
        physical(M::FlipTurn, "Flip Turn", Water, 60, 100, 20, -1, 8).attr(A::ForceSwitch { self_switch: true }),
        physical(M::DualWingbeat, "Dual Wingbeat", Flying, 40, 90, 10, -1, 8)
            .attr(A::MultiHit(MultiHitType::Two)),
        special(M::ScorchingSands, "Scorching Sands", Ground, 70, 100, 10, 30, 8)
            .attr(A::status(StatusEffect::Burn)),
        physical(M::WickedBlow, "Wicked Blow", Dark, 75, 100, 5, -1, 8).attr(A::AlwaysCrit),
        special(M::ThunderCage, "Thunder Cage", Electric, 80, 90, 15, -1, 8).attr(A::trap()),
        special(M::FreezingGlare, "Freezing Glare", Psychic, 90, 100, 10, 10, 8)
            .attr(A::status(StatusEffect::Freeze)),
        special(M::FieryWrath, "Fiery Wrath", Dark, 90, 100, 10, 20, 8)
            .attr(A::Flinch)
            .target(MoveTarget::AllNearEnemies),
        physical(M::ThunderousKick, "Thunderous Kick", Fighting, 90, 100, 10, 100, 8)
            .attr(A::stat_change(&[Stat::Defense], -1, false)),
        physical(M::GlacialLance, "Glacial Lance", Ice, 120, 100, 5, -1, 8)
            .target(MoveTarget::AllNearEnemies)
            .make_contact(false),
        special(M::AstralBarrage, "Astral Barrage", Ghost, 120, 100, 5, -1, 8)
            .target(MoveTarget::AllNearEnemies),
        physical(M::AquaStep, "Aqua Step", Water, 80, 100, 10, 100, 9)
            .attr(A::stat_change(&[Stat::Speed], 1, true)),
        physical(M::AxeKick, "Axe Kick", Fighting, 120, 90, 10, 30, 9)
            .attr(A::Confuse)
            .attr(A::CrashDamage(0.5)),
        special(M::LuminaCrash, "Lumina Crash", Psychic, 80, 100, 10, 100, 9)
            .attr(A::stat_change(&[Stat::SpecialDefense], -2, false)),
        Move::attack(M::JetPunch, "Jet Punch", Water, Physical, 60, 100, 15, -1, 1, 9),
        Move::status(M::SpicyExtract, "Spicy Extract", Grass, -1, 15, 0, 9)
            .attr(A::stat_change(&[Stat::Attack], 2, false))
            .attr(A::stat_change(&[Stat::Defense], -2, false)),
        physical(M::SpinOut, "Spin Out", Steel, 100, 100, 5, -1, 9)
            .attr(A::stat_change(&[Stat::Speed], -2, true)),
        physical(M::MortalSpin, "Mortal Spin", Poison, 30, 100, 15, -1, 9)
            .attr(A::ClearHazards { own_side_only: true })
            .attr(A::status(StatusEffect::Poison))
            .target(MoveTarget::AllNearEnemies),
        physical(M::KowtowCleave, "Kowtow Cleave", Dark, 85, -1, 10, -1, 9),
        physical(M::FlowerTrick, "Flower Trick", Grass, 70, -1, 10, -1, 9)
            .attr(A::AlwaysCrit)
            .make_contact(false),
        special(M::TorchSong, "Torch Song", Fire, 80, 100, 10, 100, 9)
            .attr(A::stat_change(&[Stat::SpecialAttack], 1, true))
            .sound_based(),
        special(M::MakeItRain, "Make It Rain", Steel, 120, 100, 5, -1, 9)
            .attr(A::stat_change(&[Stat::SpecialAttack], -1, true))
            .target(MoveTarget::AllNearEnemies),
        special(M::Ruination, "Ruination", Dark, -1, 90, 10, -1, 9).attr(A::HalfHpDamage),
        physical(M::Pounce, "Pounce", Bug, 50, 100, 20, 100, 9)
            .attr(A::stat_change(&[Stat::Speed], -1, false)),
        physical(M::Trailblaze, "Trailblaze", Grass, 50, 100, 20, 100, 9)
            .attr(A::stat_change(&[Stat::Speed], 1, true)),
        special(M::ChillingWater, "Chilling Water", Water, 50, 100, 20, 100, 9)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        physical(M::HyperDrill, "Hyper Drill", Normal, 100, 100, 5, -1, 9).ignores_protect(),
        special(M::TwinBeam, "Twin Beam", Psychic, 40, 100, 10, -1, 9).attr(A::MultiHit(MultiHitType::Two)),
        special(M::ArmorCannon, "Armor Cannon", Fire, 120, 100, 5, -1, 9)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], -1, true)),
        physical(M::BitterBlade, "Bitter Blade", Fire, 90, 100, 10, -1, 9).attr(A::Drain(0.5)),
        physical(M::AquaCutter, "Aqua Cutter", Water, 70, 100, 20, -1, 9)
            .attr(A::HighCritRatio)
            .make_contact(false),
        physical(M::WaveCrash, "Wave Crash", Water, 120, 100, 10, -1, 9).attr(A::Recoil(1.0 / 3.0)),
        physical(M::MountainGale, "Mountain Gale", Ice, 100, 85, 10, 30, 9)
            .attr(A::Flinch)
            .make_contact(false),
        Move::self_status(M::VictoryDance, "Victory Dance", Fighting, 10, 0, 9)
            .attr(A::stat_change(&[Stat::Attack, Stat::Defense, Stat::Speed], 1, true)),
        physical(M::HeadlongRush, "Headlong Rush", Ground, 120, 100, 5, -1, 9)
            .attr(A::stat_change(&[Stat::Defense, Stat::SpecialDefense], -1, true)),
        physical(M::BarbBarrage, "Barb Barrage", Poison, 60, 100, 10, 50, 9)
            .attr(A::DoublePowerWhen(PowerCondition::TargetPoisoned))
            .attr(A::status(StatusEffect::Poison))
            .make_contact(false),
        special(M::EsperWing, "Esper Wing", Psychic, 80, 100, 10, 100, 9)
            .attr(A::HighCritRatio)
            .attr(A::stat_change(&[Stat::Speed], 1, true)),
        special(M::BitterMalice, "Bitter Malice", Ghost, 75, 100, 10, 100, 9)
            .attr(A::stat_change(&[Stat::Attack], -1, false)),
        Move::self_status(M::Shelter, "Shelter", Steel, 10, 0, 9)
            .attr(A::stat_change(&[Stat::Defense], 2, true)),
        special(M::InfernalParade, "Infernal Parade", Ghost, 60, 100, 15, 30, 9)
            .attr(A::DoublePowerWhen(PowerCondition::TargetStatused))
            .attr(A::status(StatusEffect::Burn)),
        special(M::BleakwindStorm, "Bleakwind Storm", Flying, 100, 80, 10, 30, 9)
            .attr(A::stat_change(&[Stat::Speed], -1, false))
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Rain,
                accuracy: -1,
            })
            .target(MoveTarget::AllNearEnemies),
        special(M::WildboltStorm, "Wildbolt Storm", Electric, 100, 80, 10, 20, 9)
            .attr(A::status(StatusEffect::Paralysis))
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Rain,
                accuracy: -1,
            })
            .target(MoveTarget::AllNearEnemies),
        special(M::SandsearStorm, "Sandsear Storm", Ground, 100, 80, 10, 20, 9)
            .attr(A::status(StatusEffect::Burn))
            .attr(A::WeatherAccuracy {
                weather: WeatherType::Rain,
                accuracy: -1,
            })
            .target(MoveTarget::AllNearEnemies),
    ]
}
