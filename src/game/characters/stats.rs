// Swordman tuning values

/// Per-actor configuration, fixed once the actor spawns
#[derive(Debug, Clone, PartialEq)]
pub struct SwordmanStats {
    // Movement
    /// Speed while walking (units/second)
    pub walk_speed: f32,
    /// Speed while the run modifier is held (units/second)
    pub run_speed: f32,

    // Combat
    /// How long an attack locks the character in place (seconds)
    pub attack_duration: f32,
    /// How long the hurt reaction lasts (seconds)
    pub hurt_duration: f32,
    /// Starting health points
    pub max_health: i32,

    // Dimensions (for physics collider)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

/// Default swordsman tuning, matched to the sprite sheet's attack/hurt clip lengths
pub const BASE_STATS: SwordmanStats = SwordmanStats {
    walk_speed: 3.0,
    run_speed: 6.0,

    attack_duration: 0.5,
    hurt_duration: 0.5,
    max_health: 100,

    width: 0.8,
    height: 1.6,
};

impl Default for SwordmanStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl SwordmanStats {
    /// Movement speed for the given run modifier
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}
