//! Simulation configuration.

/// What each simulated event does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimMode {
    /// Defeat a built-in monster.
    Combat { monster_id: String },
    /// Complete a gathering activity.
    Gather { profession_id: String },
    /// Craft a recipe, with ingredients and tools supplied before each attempt.
    Craft {
        profession_id: String,
        recipe_id: String,
    },
}

impl SimMode {
    pub fn label(&self) -> String {
        match self {
            SimMode::Combat { monster_id } => format!("combat vs {}", monster_id),
            SimMode::Gather { profession_id } => format!("gathering ({})", profession_id),
            SimMode::Craft {
                profession_id,
                recipe_id,
            } => format!("crafting {} ({})", recipe_id, profession_id),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Events (kills, gathers, crafts) per run
    pub events_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub mode: SimMode,

    /// Player luck stat (None = no luck stat)
    pub luck: Option<f64>,

    pub dungeon_depth: u32,

    /// Mining level; feeds the drop-chance modifier in every mode
    pub mining_level: u32,

    /// Level of the gathering/crafting profession being simulated
    pub skill_level: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            events_per_run: 100,
            seed: None,
            mode: SimMode::Combat {
                monster_id: "goblin".to_string(),
            },
            luck: None,
            dungeon_depth: 1,
            mining_level: 1,
            skill_level: 1,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for goblin loot rates
    pub fn goblin_farm(num_runs: u32) -> Self {
        Self {
            num_runs,
            ..Default::default()
        }
    }

    /// Late-game dragon raids with a lucky, deep-diving character
    pub fn dragon_raid() -> Self {
        Self {
            num_runs: 50,
            events_per_run: 20,
            mode: SimMode::Combat {
                monster_id: "ancient_dragon".to_string(),
            },
            luck: Some(20.0),
            dungeon_depth: 30,
            mining_level: 25,
            ..Default::default()
        }
    }

    /// Gathering analysis for one profession
    pub fn gathering(profession_id: &str, skill_level: u32) -> Self {
        Self {
            mode: SimMode::Gather {
                profession_id: profession_id.to_string(),
            },
            skill_level,
            ..Default::default()
        }
    }

    /// Craft quality analysis for one recipe
    pub fn crafting(profession_id: &str, recipe_id: &str, skill_level: u32) -> Self {
        Self {
            mode: SimMode::Craft {
                profession_id: profession_id.to_string(),
                recipe_id: recipe_id.to_string(),
            },
            skill_level,
            ..Default::default()
        }
    }
}
