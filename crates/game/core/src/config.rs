/// Game configuration constants and tunable parameters.
///
/// Frame counts assume the host drives 30 updates per second.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of player slots wired to input (at most [`GameConfig::MAX_PLAYERS`]).
    pub player_count: usize,
    /// Life every actor starts a chase with.
    pub max_life: u32,
    /// Life removed from a runner when it is tagged. Zero disables damage.
    pub tag_damage: u32,
    /// Frames an actor waits after each step.
    pub walk_wait_frames: u32,
    /// Frames an actor waits after each step while dashing.
    pub dash_wait_frames: u32,
    /// Frames a freshly tagged chaser stays frozen.
    pub freeze_frames: u32,
    /// Colour toggle period of the freeze flash.
    pub freeze_flash_interval: u32,
    /// Duration of the flash shown when a player joins.
    pub join_flash_frames: u32,
    /// Colour toggle period of the join flash.
    pub join_flash_interval: u32,
    /// Width of the fallback all-floor stage.
    pub stage_width: u32,
    /// Height of the fallback all-floor stage.
    pub stage_height: u32,
    /// Seed for spawn placement.
    pub spawn_seed: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard limit on connected player slots.
    pub const MAX_PLAYERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LIFE: u32 = 10;
    pub const DEFAULT_TAG_DAMAGE: u32 = 10;
    pub const DEFAULT_WALK_WAIT_FRAMES: u32 = 2;
    pub const DEFAULT_DASH_WAIT_FRAMES: u32 = 1;
    pub const DEFAULT_FREEZE_FRAMES: u32 = 150;
    pub const DEFAULT_FREEZE_FLASH_INTERVAL: u32 = 5;
    pub const DEFAULT_JOIN_FLASH_FRAMES: u32 = 60;
    pub const DEFAULT_JOIN_FLASH_INTERVAL: u32 = 2;
    pub const DEFAULT_STAGE_WIDTH: u32 = 80;
    pub const DEFAULT_STAGE_HEIGHT: u32 = 20;
    pub const DEFAULT_SPAWN_SEED: u64 = 0x5eed_c4a5_e000_0001;

    pub fn new() -> Self {
        Self {
            player_count: Self::MAX_PLAYERS,
            max_life: Self::DEFAULT_MAX_LIFE,
            tag_damage: Self::DEFAULT_TAG_DAMAGE,
            walk_wait_frames: Self::DEFAULT_WALK_WAIT_FRAMES,
            dash_wait_frames: Self::DEFAULT_DASH_WAIT_FRAMES,
            freeze_frames: Self::DEFAULT_FREEZE_FRAMES,
            freeze_flash_interval: Self::DEFAULT_FREEZE_FLASH_INTERVAL,
            join_flash_frames: Self::DEFAULT_JOIN_FLASH_FRAMES,
            join_flash_interval: Self::DEFAULT_JOIN_FLASH_INTERVAL,
            stage_width: Self::DEFAULT_STAGE_WIDTH,
            stage_height: Self::DEFAULT_STAGE_HEIGHT,
            spawn_seed: Self::DEFAULT_SPAWN_SEED,
        }
    }

    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    pub fn with_spawn_seed(mut self, spawn_seed: u64) -> Self {
        self.spawn_seed = spawn_seed;
        self
    }

    /// Player slots actually in use, clamped to `1..=MAX_PLAYERS`.
    pub fn players(&self) -> usize {
        self.player_count.clamp(1, Self::MAX_PLAYERS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
