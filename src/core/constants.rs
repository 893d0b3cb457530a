// Drop chance modifier coefficients
pub const LUCK_MODIFIER_PER_POINT: f64 = 0.1;
pub const DEPTH_MODIFIER_PER_FLOOR: f64 = 0.05;
pub const MINING_MODIFIER_PER_LEVEL: f64 = 0.01;
pub const MODIFIER_PROFESSION: &str = "mining";

// Drop resolution
pub const PERCENT_SCALE: f64 = 100.0;
pub const GATHERING_CHANCE_CAP: f64 = 95.0;
pub const CONSOLATION_BASE_CHANCE: f64 = 30.0;

// Craft quality table: base weights for common..legendary
pub const CRAFT_BASE_WEIGHTS: [f64; 5] = [40.0, 30.0, 20.0, 8.0, 2.0];
pub const CRAFT_SKILL_BONUS_PER_LEVEL: f64 = 2.0;
pub const CRAFT_COMMON_PENALTY_PER_LEVEL: f64 = 5.0;
pub const CRAFT_COMMON_MIN_WEIGHT: f64 = 10.0;
pub const CRAFT_RARE_INGREDIENT_BOOST: f64 = 1.5;
pub const CRAFT_RARE_INGREDIENT_COMMON_FACTOR: f64 = 0.5;

// Tier upgrades
pub const UPGRADE_DEFAULT_SUCCESS_CHANCE: f64 = 50.0;
pub const UPGRADE_DOWNGRADE_CHANCE: f64 = 30.0;

// Gathering and activity timing
pub const GATHER_EXP_BONUS_PER_LEVEL: f64 = 0.1;
pub const ACTIVITY_TIME_REDUCTION_PER_LEVEL: f64 = 0.05;
pub const ACTIVITY_TIME_MAX_REDUCTION: f64 = 0.5;

// Character and profession progression: 100 * 1.5^(level - 1)
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_GROWTH: f64 = 1.5;

// Finder rewards (gold, xp) for the first find of each tier above common
pub const FINDER_REWARDS: [(u64, u64); 7] = [
    (0, 0),        // Common: no reward
    (50, 0),       // Uncommon
    (200, 0),      // Rare
    (500, 100),    // Epic
    (1000, 500),   // Legendary
    (5000, 1000),  // Mythic
    (10000, 5000), // Divine
];

// Tier thresholds by item level
pub const LEVEL_TIER_THRESHOLDS: [u32; 7] = [1, 10, 20, 30, 40, 50, 60];

// Starting profile
pub const STARTING_GOLD: u64 = 50;
pub const STARTING_DUNGEON_DEPTH: u32 = 1;
pub const STARTING_PROFESSION_LEVEL: u32 = 1;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x5245_414C_4D53_0001;
