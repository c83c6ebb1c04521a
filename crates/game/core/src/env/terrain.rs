//! Static walkability grid.
//!
//! Terrain kinds are interned in a [`TerrainPalette`]; the map stores one
//! palette index per cell. The map is built once (from a text layout or as an
//! all-floor grid) and only read afterwards.

use bitflags::bitflags;

use crate::error::{ErrorSeverity, GameError};
use crate::render::Canvas;
use crate::state::{Color, Coordinate, Graphic};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainError {
    #[error("terrain layout is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown terrain glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("coordinate {coordinate} is outside the terrain map")]
    OutOfBounds { coordinate: Coordinate },
}

impl GameError for TerrainError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "TERRAIN_EMPTY",
            Self::RaggedRow { .. } => "TERRAIN_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "TERRAIN_UNKNOWN_GLYPH",
            Self::OutOfBounds { .. } => "TERRAIN_OUT_OF_BOUNDS",
        }
    }
}

bitflags! {
    /// Boolean properties of a terrain kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TerrainProps: u8 {
        const WALKABLE = 1 << 0;
    }
}

/// Immutable descriptor for one terrain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terrain {
    glyph: char,
    color: Color,
    props: TerrainProps,
}

impl Terrain {
    pub const fn new(glyph: char, color: Color) -> Self {
        Self {
            glyph,
            color,
            props: TerrainProps::empty(),
        }
    }

    pub const fn walkable(mut self) -> Self {
        self.props = self.props.union(TerrainProps::WALKABLE);
        self
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn props(&self) -> TerrainProps {
        self.props
    }

    pub fn is_walkable(&self) -> bool {
        self.props.contains(TerrainProps::WALKABLE)
    }

    pub fn graphic(&self) -> Graphic {
        Graphic::new(self.glyph, self.color)
    }
}

/// Index of a terrain kind inside its palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TerrainId(u8);

/// Glyph-keyed table of terrain kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainPalette {
    entries: Vec<Terrain>,
}

impl TerrainPalette {
    pub const FLOOR: char = '.';
    pub const WALL: char = '#';
    pub const VOID: char = ' ';

    /// Floor (walkable), wall and void.
    pub fn standard() -> Self {
        let mut palette = Self {
            entries: Vec::new(),
        };
        palette.register(Terrain::new(Self::FLOOR, Color::Silver).walkable());
        palette.register(Terrain::new(Self::WALL, Color::Silver));
        palette.register(Terrain::new(Self::VOID, Color::Black));
        palette
    }

    /// Adds `terrain`, replacing any kind already registered for its glyph.
    pub fn register(&mut self, terrain: Terrain) -> TerrainId {
        if let Some(id) = self.lookup(terrain.glyph) {
            self.entries[id.0 as usize] = terrain;
            return id;
        }
        self.entries.push(terrain);
        TerrainId((self.entries.len() - 1) as u8)
    }

    pub fn lookup(&self, glyph: char) -> Option<TerrainId> {
        self.entries
            .iter()
            .position(|terrain| terrain.glyph == glyph)
            .map(|index| TerrainId(index as u8))
    }

    pub fn get(&self, id: TerrainId) -> &Terrain {
        &self.entries[id.0 as usize]
    }
}

impl Default for TerrainPalette {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && coordinate.x < self.width as i32
            && coordinate.y < self.height as i32
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate)
            .then(|| coordinate.y as usize * self.width as usize + coordinate.x as usize)
    }
}

/// Fixed-size grid of interned terrain kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainMap {
    dimensions: MapDimensions,
    palette: TerrainPalette,
    cells: Vec<TerrainId>,
}

impl TerrainMap {
    /// All-floor grid using the standard palette.
    pub fn filled(width: u32, height: u32) -> Self {
        let palette = TerrainPalette::standard();
        let floor = palette
            .lookup(TerrainPalette::FLOOR)
            .unwrap_or(TerrainId(0));
        Self {
            dimensions: MapDimensions::new(width, height),
            cells: vec![floor; width as usize * height as usize],
            palette,
        }
    }

    /// Parses a text layout with the standard palette.
    pub fn parse(layout: &str) -> Result<Self, TerrainError> {
        Self::parse_with(layout, TerrainPalette::standard())
    }

    /// Parses a text layout: one line per row, one glyph per column.
    ///
    /// Width is the length of the first row; every other row must match it.
    /// Trailing newlines are ignored.
    pub fn parse_with(layout: &str, palette: TerrainPalette) -> Result<Self, TerrainError> {
        let trimmed = layout.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Err(TerrainError::Empty);
        }

        let rows: Vec<&str> = trimmed.lines().collect();
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(TerrainError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(TerrainError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let id = palette
                    .lookup(glyph)
                    .ok_or(TerrainError::UnknownGlyph { glyph, x, y })?;
                cells.push(id);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            palette,
            cells,
        })
    }

    /// Replaces the terrain at `coordinate`. Construction-time only.
    pub fn put(&mut self, coordinate: Coordinate, glyph: char) -> Result<(), TerrainError> {
        let index = self
            .dimensions
            .index(coordinate)
            .ok_or(TerrainError::OutOfBounds { coordinate })?;
        let id = self.palette.lookup(glyph).ok_or(TerrainError::UnknownGlyph {
            glyph,
            x: coordinate.x as usize,
            y: coordinate.y as usize,
        })?;
        self.cells[index] = id;
        Ok(())
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.dimensions.contains(coordinate)
    }

    pub fn terrain(&self, coordinate: Coordinate) -> Option<&Terrain> {
        self.dimensions
            .index(coordinate)
            .map(|index| self.palette.get(self.cells[index]))
    }

    /// Out-of-range coordinates are never walkable.
    pub fn is_walkable(&self, coordinate: Coordinate) -> bool {
        self.terrain(coordinate)
            .is_some_and(|terrain| terrain.is_walkable())
    }

    /// Every walkable coordinate in row-major order. Call again to restart.
    pub fn walkable_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.dimensions.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, id)| self.palette.get(**id).is_walkable())
            .map(move |(index, _)| Coordinate::new((index % width) as i32, (index / width) as i32))
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        let width = self.dimensions.width as usize;
        for (index, id) in self.cells.iter().enumerate() {
            let at = Coordinate::new((index % width) as i32, (index / width) as i32);
            canvas.draw(at, self.palette.get(*id).graphic());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parses_small_layout() {
        let map = TerrainMap::parse("#.\n..\n").unwrap();
        assert_eq!(map.dimensions(), MapDimensions::new(2, 2));
        assert!(!map.is_walkable(Coordinate::new(0, 0)));
        assert!(map.is_walkable(Coordinate::new(1, 0)));
        assert!(map.is_walkable(Coordinate::new(0, 1)));
        assert!(map.is_walkable(Coordinate::new(1, 1)));

        let walkable: HashSet<Coordinate> = map.walkable_coordinates().collect();
        let expected: HashSet<Coordinate> = [
            Coordinate::new(1, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(walkable, expected);
    }

    #[test]
    fn walkable_sequence_restarts() {
        let map = TerrainMap::parse("..#\n. .\n").unwrap();
        let first: Vec<_> = map.walkable_coordinates().collect();
        let second: Vec<_> = map.walkable_coordinates().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn out_of_range_fails_closed() {
        let map = TerrainMap::filled(3, 3);
        assert!(!map.is_walkable(Coordinate::new(-1, 0)));
        assert!(!map.is_walkable(Coordinate::new(3, 0)));
        assert!(!map.is_walkable(Coordinate::new(0, 3)));
        assert!(map.is_walkable(Coordinate::new(2, 2)));
    }

    #[test]
    fn rejects_unknown_glyph() {
        let err = TerrainMap::parse("..\n.x\n").unwrap_err();
        assert_eq!(err, TerrainError::UnknownGlyph { glyph: 'x', x: 1, y: 1 });
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = TerrainMap::parse("...\n..\n").unwrap_err();
        assert_eq!(
            err,
            TerrainError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_empty_layout() {
        assert_eq!(TerrainMap::parse("\n\n").unwrap_err(), TerrainError::Empty);
    }

    #[test]
    fn put_edits_single_cell() {
        let mut map = TerrainMap::filled(4, 2);
        map.put(Coordinate::new(3, 1), TerrainPalette::WALL).unwrap();
        assert!(!map.is_walkable(Coordinate::new(3, 1)));
        assert_eq!(map.walkable_coordinates().count(), 7);
        assert!(map.put(Coordinate::new(9, 9), TerrainPalette::WALL).is_err());
    }

    #[test]
    fn terrain_kinds_are_shared() {
        let map = TerrainMap::filled(2, 1);
        let a = map.terrain(Coordinate::new(0, 0)).unwrap();
        let b = map.terrain(Coordinate::new(1, 0)).unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
