//! Stage context: the terrain grid plus who stands where.

use super::actor_map::ActorMap;
use super::error::StageError;
use super::rng::SpawnRng;
use super::terrain::TerrainMap;
use crate::render::Canvas;
use crate::state::{Actors, Coordinate};

#[derive(Clone, Debug)]
pub struct Stage {
    terrain: TerrainMap,
    actors: ActorMap,
}

impl Stage {
    pub fn new(terrain: TerrainMap) -> Self {
        Self {
            terrain,
            actors: ActorMap::new(),
        }
    }

    pub fn terrain(&self) -> &TerrainMap {
        &self.terrain
    }

    pub fn actor_map(&self) -> &ActorMap {
        &self.actors
    }

    pub fn actor_map_mut(&mut self) -> &mut ActorMap {
        &mut self.actors
    }

    /// Walkable and unoccupied.
    pub fn is_open(&self, coordinate: Coordinate) -> bool {
        self.terrain.is_walkable(coordinate) && !self.actors.is_occupied(coordinate)
    }

    /// Random walkable coordinate nobody occupies.
    pub fn random_open_coordinate(&self, rng: &mut SpawnRng) -> Result<Coordinate, StageError> {
        let open: Vec<Coordinate> = self
            .terrain
            .walkable_coordinates()
            .filter(|coordinate| self.is_open(*coordinate))
            .collect();
        rng.pick(&open).ok_or(StageError::NoOpenCoordinate)
    }

    pub fn render(&self, canvas: &mut dyn Canvas, actors: &Actors) {
        self.terrain.render(canvas);
        self.actors.render(canvas, actors);
    }
}
