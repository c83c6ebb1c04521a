use std::fmt;
use std::ops::{Add, Neg};

/// Identifier of a player slot. Slots are numbered from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u8);

impl ActorId {
    /// Index of the slot inside fixed-size rosters.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based number shown to players (`1P`, `2P`, ...).
    #[inline]
    pub const fn player_number(self) -> u8 {
        self.0 + 1
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}P", self.player_number())
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downward, matching screen rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.delta();
        Coordinate::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight unit steps, plus the identity step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Stay,
    Up,
    Down,
    Left,
    Right,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Stay => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpperLeft => (-1, -1),
            Direction::UpperRight => (1, -1),
            Direction::LowerLeft => (-1, 1),
            Direction::LowerRight => (1, 1),
        }
    }

    /// The step that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Stay => Direction::Stay,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpperLeft => Direction::LowerRight,
            Direction::UpperRight => Direction::LowerLeft,
            Direction::LowerLeft => Direction::UpperRight,
            Direction::LowerRight => Direction::UpperLeft,
        }
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.opposite()
    }
}

/// Palette understood by the external renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Black,
    White,
    Silver,
    Gray,
    Red,
    Aqua,
    Yellow,
    Lime,
    Olive,
    Green,
    Blue,
}

/// Repeating frame counter: reports `is_over` once every `period` ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCounter {
    period: u32,
    current: u32,
}

impl FrameCounter {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            current: 0,
        }
    }

    pub fn tick(&mut self) {
        self.current = (self.current + 1) % self.period;
    }

    pub fn is_over(&self) -> bool {
        self.current == 0
    }
}
