/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Hit points the player starts the session with.
    pub starting_hit_points: i32,

    /// Maximum depth of the reactive-action cascade. Hooks are contracted
    /// not to cycle; this bound turns that convention into a guarantee.
    pub max_cascade_depth: usize,

    /// Column the client wraps each turn's output block at.
    pub wrap_column: usize,
}

impl GameConfig {
    pub const DEFAULT_STARTING_HIT_POINTS: i32 = 10;
    pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 16;
    pub const DEFAULT_WRAP_COLUMN: usize = 60;

    pub fn new() -> Self {
        Self {
            starting_hit_points: Self::DEFAULT_STARTING_HIT_POINTS,
            max_cascade_depth: Self::DEFAULT_MAX_CASCADE_DEPTH,
            wrap_column: Self::DEFAULT_WRAP_COLUMN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
