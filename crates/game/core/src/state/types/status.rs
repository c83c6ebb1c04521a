//! Status flags and scalar state for actors.
//!
//! Flags are reference counted: every `set` must be matched by a `release`
//! before the flag reads as inactive again. Releasing an inactive flag is a
//! no-op, so the counters never go negative.

use std::fmt;

use strum::EnumCount;

use crate::config::GameConfig;

/// Named status flags tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumCount)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFlag {
    /// Joined the current chase.
    Playing,
    /// Holds the chaser role.
    Chaser,
    /// Movement is suspended until every pending release fires.
    Wait,
    /// Not drawn on the canvas.
    Invisible,
    /// Drawn even while `Invisible` is active.
    ForceVisible,
}

impl StatusFlag {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Saturating activation counters, one per [`StatusFlag`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagCounters {
    counts: [u16; StatusFlag::COUNT],
}

impl FlagCounters {
    pub fn set(&mut self, flag: StatusFlag) {
        let count = &mut self.counts[flag.index()];
        *count = count.saturating_add(1);
    }

    pub fn release(&mut self, flag: StatusFlag) {
        let count = &mut self.counts[flag.index()];
        *count = count.saturating_sub(1);
    }

    pub fn is_active(&self, flag: StatusFlag) -> bool {
        self.counts[flag.index()] > 0
    }

    /// Number of outstanding activations of `flag`.
    pub fn count(&self, flag: StatusFlag) -> u16 {
        self.counts[flag.index()]
    }
}

/// Position-independent state of one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    flags: FlagCounters,
    life: u32,
    max_life: u32,
    walk_wait_frames: u32,
    normal_wait_frames: u32,
    dash_wait_frames: u32,
}

impl Status {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            flags: FlagCounters::default(),
            life: config.max_life,
            max_life: config.max_life,
            walk_wait_frames: config.walk_wait_frames,
            normal_wait_frames: config.walk_wait_frames,
            dash_wait_frames: config.dash_wait_frames,
        }
    }

    pub fn flags(&self) -> &FlagCounters {
        &self.flags
    }

    pub fn set(&mut self, flag: StatusFlag) {
        self.flags.set(flag);
    }

    pub fn release(&mut self, flag: StatusFlag) {
        self.flags.release(flag);
    }

    pub fn is_active(&self, flag: StatusFlag) -> bool {
        self.flags.is_active(flag)
    }

    // ===== life =====

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn damage(&mut self, value: u32) {
        self.life = self.life.saturating_sub(value);
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    // ===== roles =====

    pub fn be_playing(&mut self) {
        if !self.is_playing() {
            self.flags.set(StatusFlag::Playing);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.flags.is_active(StatusFlag::Playing)
    }

    /// Roles are exclusive, so the chaser counter is kept at zero or one.
    pub fn be_chaser(&mut self) {
        if !self.is_chaser() {
            self.flags.set(StatusFlag::Chaser);
        }
    }

    pub fn be_runner(&mut self) {
        while self.is_chaser() {
            self.flags.release(StatusFlag::Chaser);
        }
    }

    pub fn is_chaser(&self) -> bool {
        self.flags.is_active(StatusFlag::Chaser)
    }

    pub fn is_runner(&self) -> bool {
        !self.is_chaser()
    }

    // ===== timers =====

    pub fn is_waiting(&self) -> bool {
        self.flags.is_active(StatusFlag::Wait)
    }

    /// Frames an actor must wait after a successful step.
    pub fn walk_wait_frames(&self) -> u32 {
        self.walk_wait_frames
    }

    pub fn running(&mut self) {
        self.walk_wait_frames = self.dash_wait_frames;
    }

    pub fn walking(&mut self) {
        self.walk_wait_frames = self.normal_wait_frames;
    }

    // ===== visibility =====

    pub fn is_hidden(&self) -> bool {
        self.flags.is_active(StatusFlag::Invisible)
            && !self.flags.is_active(StatusFlag::ForceVisible)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_playing() {
            write!(f, "Life: {:<3}", self.life)
        } else {
            f.write_str("press start key")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> Status {
        Status::new(&GameConfig::default())
    }

    #[test]
    fn flag_clears_only_after_every_activation_is_released() {
        let mut status = status();
        status.set(StatusFlag::Invisible);
        status.set(StatusFlag::Invisible);
        status.release(StatusFlag::Invisible);
        assert!(status.is_active(StatusFlag::Invisible));
        status.release(StatusFlag::Invisible);
        assert!(!status.is_active(StatusFlag::Invisible));
    }

    #[test]
    fn release_saturates_at_zero() {
        let mut status = status();
        status.release(StatusFlag::Wait);
        status.release(StatusFlag::Wait);
        assert_eq!(status.flags().count(StatusFlag::Wait), 0);
        status.set(StatusFlag::Wait);
        assert!(status.is_waiting());
    }

    #[test]
    fn damage_saturates_at_zero() {
        let mut status = status();
        status.damage(status.max_life() + 5);
        assert_eq!(status.life(), 0);
        assert!(status.is_dead());
    }

    #[test]
    fn role_changes_are_idempotent() {
        let mut status = status();
        status.be_chaser();
        status.be_chaser();
        assert_eq!(status.flags().count(StatusFlag::Chaser), 1);
        status.be_runner();
        assert!(status.is_runner());
    }

    #[test]
    fn force_visible_overrides_invisible() {
        let mut status = status();
        status.set(StatusFlag::Invisible);
        assert!(status.is_hidden());
        status.set(StatusFlag::ForceVisible);
        assert!(!status.is_hidden());
    }

    #[test]
    fn status_line_depends_on_playing() {
        let mut status = status();
        assert_eq!(status.to_string(), "press start key");
        status.be_playing();
        assert_eq!(status.to_string(), "Life: 10 ");
    }
}
