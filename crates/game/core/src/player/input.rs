//! Per-player logical input snapshot.

use bitflags::bitflags;

use crate::state::Direction;

bitflags! {
    /// Logical keys; the host maps devices onto these.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Keys: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
        const SKILL = 1 << 4;
        const START = 1 << 5;
    }
}

/// Keys held this frame plus keys that went down this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerInput {
    pub held: Keys,
    pub pressed: Keys,
}

impl PlayerInput {
    /// Diagonals first, then the single directions in a fixed order.
    const DIRECTION_PRIORITY: [(Keys, Direction); 8] = [
        (Keys::UP.union(Keys::LEFT), Direction::UpperLeft),
        (Keys::UP.union(Keys::RIGHT), Direction::UpperRight),
        (Keys::DOWN.union(Keys::LEFT), Direction::LowerLeft),
        (Keys::DOWN.union(Keys::RIGHT), Direction::LowerRight),
        (Keys::LEFT, Direction::Left),
        (Keys::DOWN, Direction::Down),
        (Keys::UP, Direction::Up),
        (Keys::RIGHT, Direction::Right),
    ];

    pub const fn new(held: Keys, pressed: Keys) -> Self {
        Self { held, pressed }
    }

    /// Keys held since an earlier frame.
    pub const fn holding(held: Keys) -> Self {
        Self {
            held,
            pressed: Keys::empty(),
        }
    }

    /// Keys that went down this frame and are therefore also held.
    pub const fn pressing(keys: Keys) -> Self {
        Self {
            held: keys,
            pressed: keys,
        }
    }

    pub fn is_held(&self, keys: Keys) -> bool {
        self.held.contains(keys)
    }

    pub fn just_pressed(&self, keys: Keys) -> bool {
        self.pressed.contains(keys)
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Movement requested by the held keys, if any.
    pub fn direction(&self) -> Option<Direction> {
        Self::DIRECTION_PRIORITY
            .iter()
            .find(|(keys, _)| self.held.contains(*keys))
            .map(|(_, direction)| *direction)
    }
}
