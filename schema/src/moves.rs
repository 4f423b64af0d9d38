use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

/// Identifier of every move the catalog knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum MoveId {
    Pound,
    KarateChop,
    DoubleSlap,
    CometPunch,
    MegaPunch,
    FirePunch,
    IcePunch,
    ThunderPunch,
    Scratch,
    RazorWind,
    SwordsDance,
    Cut,
    Gust,
    WingAttack,
    Whirlwind,
    Fly,
    Bind,
    Slam,
    VineWhip,
    Stomp,
    DoubleKick,
    JumpKick,
    Headbutt,
    Tackle,
    BodySlam,
    Wrap,
    TakeDown,
    Thrash,
    DoubleEdge,
    TailWhip,
    PoisonSting,
    Twineedle,
    PinMissile,
    Leer,
    Bite,
    Growl,
    Roar,
    Sing,
    Supersonic,
    SonicBoom,
    Ember,
    Flamethrower,
    WaterGun,
    HydroPump,
    Surf,
    IceBeam,
    Blizzard,
    Psybeam,
    HyperBeam,
    Peck,
    DrillPeck,
    SeismicToss,
    Counter,
    Absorb,
    MegaDrain,
    LeechSeed,
    Growth,
    RazorLeaf,
    SolarBeam,
    PoisonPowder,
    StunSpore,
    SleepPowder,
    PetalDance,
    StringShot,
    DragonRage,
    FireSpin,
    ThunderShock,
    Thunderbolt,
    ThunderWave,
    Thunder,
    RockThrow,
    Earthquake,
    Fissure,
    Dig,
    Toxic,
    Confusion,
    Psychic,
    Hypnosis,
    Agility,
    QuickAttack,
    NightShade,
    Screech,
    DoubleTeam,
    Recover,
    Harden,
    Minimize,
    Smokescreen,
    SandAttack,
    Withdraw,
    DefenseCurl,
    Barrier,
    Haze,
    FocusEnergy,
    MirrorMove,
    SelfDestruct,
    Explosion,
    Metronome,
    Psywave,
    Splash,
    Rest,
    Transform,
    Conversion,
    TriAttack,
    SuperFang,
    Substitute,
    SkullBash,
    SkyAttack,
    Spikes,
    Protect,
    Detect,
    Endure,
    Flail,
    Reversal,
    MachPunch,
    FakeOut,
    BellyDrum,
    Sandstorm,
    RainDance,
    SunnyDay,
    Hail,
    Outrage,
    RapidSpin,
    MorningSun,
    Synthesis,
    Moonlight,
    PsychUp,
    MirrorCoat,
    FutureSight,
    DoomDesire,
    Facade,
    Ingrain,
    AquaRing,
    Nightmare,
    DreamEater,
    Snore,
    SleepTalk,
    WringOut,
    CrushGrip,
    HighJumpKick,
    Magnitude,
    GyroBall,
    FuryCutter,
    Rollout,
    Revenge,
    Avalanche,
    Payback,
    Hex,
    Venoshock,
    WeatherBall,
    ToxicSpikes,
    StealthRock,
    MudSport,
    WaterSport,
    TrickRoom,
    Gravity,
    Defog,
    UTurn,
    VoltSwitch,
    BraveBird,
    FlareBlitz,
    CloseCombat,
    Overheat,
    Superpower,
    DragonDance,
    CalmMind,
    BulkUp,
    NastyPlot,
    ShellSmash,
    Curse,
    SmackDown,
    FrostBreath,
    StormThrow,
    ChipAway,
    ClearSmog,
    TopsyTurvy,
    HealPulse,
    HealBell,
    Aromatherapy,
    Refresh,
    PainSplit,
    MetalBurst,
    Bounce,
    Dive,
    Waterfall,
    AirSlash,
    DarkPulse,
    ShadowBall,
    EnergyBall,
    EarthPower,
    SludgeBomb,
    PoisonJab,
    Crunch,
    IronHead,
    StoneEdge,
    XScissor,
    DragonClaw,
    DragonPulse,
    Moonblast,
    DazzlingGleam,
    PlayRough,
    FlashCannon,
    BugBuzz,
    HyperVoice,
    ExtremeSpeed,
    AquaJet,
    IceShard,
    ShadowSneak,
    BulletPunch,
    ScaryFace,
    Charm,
    FeatherDance,
    SweetKiss,
    ConfuseRay,
    Swagger,
    WillOWisp,
    Glare,
    LovelyKiss,
    Spore,
    DynamicPunch,
    ZapCannon,
    Inferno,
    Scald,
    Discharge,
    LavaPlume,
    HeatWave,
    Whirlpool,
    SandTomb,
    PayDay,
    ViseGrip,
    Guillotine,
    MegaKick,
    RollingKick,
    HornAttack,
    FuryAttack,
    HornDrill,
    Acid,
    BubbleBeam,
    AuroraBeam,
    Bubble,
    Submission,
    Strength,
    RockSlide,
    Meditate,
    Lick,
    Smog,
    Sludge,
    BoneClub,
    FireBlast,
    Clamp,
    Swift,
    SpikeCannon,
    Constrict,
    Amnesia,
    Kinesis,
    SoftBoiled,
    Barrage,
    LeechLife,
    EggBomb,
    Bonemerang,
    PoisonGas,
    DizzyPunch,
    Crabhammer,
    FurySwipes,
    Slash,
    Sharpen,
    HyperFang,
    Flash,
    AcidArmor,
    FlameWheel,
    Aeroblast,
    CottonSpore,
    PowderSnow,
    FeintAttack,
    MudSlap,
    Octazooka,
    IcyWind,
    BoneRush,
    GigaDrain,
    MilkDrink,
    Spark,
    SteelWing,
    SacredFire,
    Megahorn,
    DragonBreath,
    SweetScent,
    IronTail,
    MetalClaw,
    VitalThrow,
    CrossChop,
    Twister,
    AncientPower,
    RockSmash,
    Flatter,
    BrickBreak,
    ArmThrust,
    TailGlow,
    LusterPurge,
    MistBall,
    TeeterDance,
    BlazeKick,
    IceBall,
    NeedleArm,
    SlackOff,
    PoisonFang,
    CrushClaw,
    BlastBurn,
    HydroCannon,
    MeteorMash,
    Astonish,
    FakeTears,
    AirCutter,
    RockTomb,
    SilverWind,
    MetalSound,
    GrassWhistle,
    Tickle,
    CosmicPower,
    SignalBeam,
    ShadowPunch,
    Extrasensory,
    SkyUppercut,
    SheerCold,
    MuddyWater,
    BulletSeed,
    AerialAce,
    IcicleSpear,
    IronDefense,
    Howl,
    FrenzyPlant,
    MudShot,
    PoisonTail,
    VoltTackle,
    MagicalLeaf,
    LeafBlade,
    RockBlast,
    ShockWave,
    WaterPulse,
    PsychoBoost,
    SecretPower,
    Memento,
    HammerArm,
    ForcePalm,
    AuraSphere,
    RockPolish,
    NightSlash,
    AquaTail,
    SeedBomb,
    DragonRush,
    PowerGem,
    DrainPunch,
    VacuumWave,
    FocusBlast,
    GigaImpact,
    ShadowClaw,
    ThunderFang,
    IceFang,
    FireFang,
    MudBomb,
    PsychoCut,
    ZenHeadbutt,
    MirrorShot,
    RockClimb,
    DracoMeteor,
    LeafStorm,
    PowerWhip,
    RockWrecker,
    CrossPoison,
    GunkShot,
    MagnetBomb,
    Chatter,
    ChargeBeam,
    WoodHammer,
    AttackOrder,
    DefendOrder,
    HealOrder,
    HeadSmash,
    DoubleHit,
    RoarOfTime,
    SpacialRend,
    MagmaStorm,
    DarkVoid,
    SeedFlare,
    OminousWind,
    ShadowForce,
    HoneClaws,
    Autotomize,
    FlameBurst,
    SludgeWave,
    QuiverDance,
    FlameCharge,
    Coil,
    LowSweep,
    AcidSpray,
    Round,
    EchoedVoice,
    ShiftGear,
    CircleThrow,
    Incinerate,
    StruggleBug,
    Bulldoze,
    DragonTail,
    WorkUp,
    Electroweb,
    WildCharge,
    DrillRun,
    DualChop,
    HeartStamp,
    HornLeech,
    SacredSword,
    RazorShell,
    LeafTornado,
    Steamroller,
    CottonGuard,
    NightDaze,
    TailSlap,
    Hurricane,
    HeadCharge,
    GearGrind,
    SearingShot,
    TechnoBlast,
    RelicSong,
    Glaciate,
    BoltStrike,
    BlueFlare,
    FieryDance,
    FreezeShock,
    IceBurn,
    Snarl,
    IcicleCrash,
    VCreate,
    FusionFlare,
    FusionBolt,
    PhantomForce,
    NobleRoar,
    ParabolicCharge,
    PetalBlizzard,
    DisarmingVoice,
    DrainingKiss,
    FairyWind,
    Boomburst,
    PlayNice,
    Confide,
    DiamondStorm,
    SteamEruption,
    WaterShuriken,
    MysticalFire,
    EerieImpulse,
    Celebrate,
    BabyDollEyes,
    Nuzzle,
    Infestation,
    PowerUpPunch,
    OblivionWing,
    LandsWrath,
    LightOfRuin,
    OriginPulse,
    PrecipiceBlades,
    DragonAscent,
    FirstImpression,
    DarkestLariat,
    IceHammer,
    HighHorsepower,
    SolarBlade,
    Leafage,
    Lunge,
    FireLash,
    SmartStrike,
    TropKick,
    ClangingScales,
    DragonHammer,
    BrutalSwing,
    FleurCannon,
    PsychicFangs,
    ShadowBone,
    Accelerock,
    Liquidation,
    PrismaticLaser,
    SunsteelStrike,
    MoongeistBeam,
    TearfulLook,
    ZingZap,
    NaturesMadness,
    SnipeShot,
    DragonDarts,
    Decorate,
    DrumBeating,
    SnapTrap,
    PyroBall,
    BehemothBlade,
    BehemothBash,
    BreakingSwipe,
    BranchPoke,
    Overdrive,
    AppleAcid,
    GravApple,
    SpiritBreak,
    StrangeSteam,
    LifeDew,
    FalseSurrender,
    MeteorBeam,
    MistyExplosion,
    SkitterSmack,
    FlipTurn,
    DualWingbeat,
    ScorchingSands,
    WickedBlow,
    ThunderCage,
    FreezingGlare,
    FieryWrath,
    ThunderousKick,
    GlacialLance,
    AstralBarrage,
    AquaStep,
    AxeKick,
    LuminaCrash,
    JetPunch,
    SpicyExtract,
    SpinOut,
    MortalSpin,
    KowtowCleave,
    FlowerTrick,
    TorchSong,
    MakeItRain,
    Ruination,
    Pounce,
    Trailblaze,
    ChillingWater,
    HyperDrill,
    TwinBeam,
    ArmorCannon,
    BitterBlade,
    AquaCutter,
    WaveCrash,
    MountainGale,
    VictoryDance,
    HeadlongRush,
    BarbBarrage,
    EsperWing,
    BitterMalice,
    Shelter,
    InfernalParade,
    BleakwindStorm,
    WildboltStorm,
    SandsearStorm,
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
