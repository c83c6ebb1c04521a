//! Spatial index of placed actors.
//!
//! Two hash maps kept as mutual inverses: coordinate to actor and actor to
//! coordinate. Every mutation updates both sides before returning, so a cell
//! holds at most one actor and an actor has at most one cell.

use std::collections::HashMap;

use super::error::StageError;
use crate::render::Canvas;
use crate::state::{ActorId, Actors, Coordinate, Direction};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorMap {
    by_coordinate: HashMap<Coordinate, ActorId>,
    by_actor: HashMap<ActorId, Coordinate>,
}

impl ActorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `actor` at `coordinate`, dropping any previous cell it held.
    ///
    /// Callers check occupancy first. If another actor already sits on the
    /// cell it is evicted and becomes unplaced.
    pub fn put(&mut self, coordinate: Coordinate, actor: ActorId) {
        if let Some(previous) = self.by_actor.remove(&actor) {
            self.by_coordinate.remove(&previous);
        }
        if let Some(evicted) = self.by_coordinate.insert(coordinate, actor)
            && evicted != actor
        {
            self.by_actor.remove(&evicted);
            tracing::warn!(
                %coordinate,
                %actor,
                %evicted,
                "actor placed on an occupied cell; previous occupant unplaced"
            );
        }
        self.by_actor.insert(actor, coordinate);
    }

    /// Removes and returns the occupant of `coordinate`.
    pub fn pickup(&mut self, coordinate: Coordinate) -> Result<ActorId, StageError> {
        let actor = self
            .by_coordinate
            .remove(&coordinate)
            .ok_or(StageError::Vacant { coordinate })?;
        self.by_actor.remove(&actor);
        Ok(actor)
    }

    pub fn actor_at(&self, coordinate: Coordinate) -> Option<ActorId> {
        self.by_coordinate.get(&coordinate).copied()
    }

    pub fn coordinate_of(&self, actor: ActorId) -> Option<Coordinate> {
        self.by_actor.get(&actor).copied()
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.by_coordinate.contains_key(&coordinate)
    }

    pub fn contains(&self, actor: ActorId) -> bool {
        self.by_actor.contains_key(&actor)
    }

    pub fn count(&self) -> usize {
        self.by_actor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_actor.is_empty()
    }

    /// Placed actors in slot order.
    pub fn actors(&self) -> Vec<ActorId> {
        let mut actors: Vec<ActorId> = self.by_actor.keys().copied().collect();
        actors.sort_unstable();
        actors
    }

    /// Moves `actor` one step. Returns the new coordinate.
    ///
    /// Fails without touching the map when the destination holds another
    /// actor; walking resolves that case as a touch before it gets here.
    pub fn move_actor(
        &mut self,
        actor: ActorId,
        direction: Direction,
    ) -> Result<Coordinate, StageError> {
        let from = self
            .coordinate_of(actor)
            .ok_or(StageError::NotPlaced { actor })?;
        let to = from + direction;
        if let Some(occupant) = self.actor_at(to)
            && occupant != actor
        {
            return Err(StageError::Occupied {
                coordinate: to,
                occupant,
            });
        }
        let picked = self.pickup(from)?;
        self.put(to, picked);
        Ok(to)
    }

    /// No-op when `actor` is not placed.
    pub fn remove_actor(&mut self, actor: ActorId) {
        if let Some(coordinate) = self.by_actor.remove(&actor) {
            self.by_coordinate.remove(&coordinate);
        }
    }

    pub fn clear(&mut self) {
        self.by_coordinate.clear();
        self.by_actor.clear();
    }

    /// Draws every placed actor. Hidden actors are skipped by the actor itself.
    pub fn render(&self, canvas: &mut dyn Canvas, actors: &Actors) {
        for id in self.actors() {
            if let (Some(actor), Some(at)) = (actors.get(id), self.coordinate_of(id)) {
                actor.render(canvas, at);
            }
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.by_coordinate.len() == self.by_actor.len()
            && self
                .by_coordinate
                .iter()
                .all(|(coordinate, actor)| self.by_actor.get(actor) == Some(coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};
    use strum::IntoEnumIterator;

    fn placed() -> ActorMap {
        let mut map = ActorMap::new();
        map.put(Coordinate::new(5, 5), ActorId(0));
        map.put(Coordinate::new(5, 6), ActorId(1));
        map
    }

    #[test]
    fn put_replaces_previous_cell_of_the_same_actor() {
        let mut map = placed();
        map.put(Coordinate::new(1, 1), ActorId(0));

        assert_eq!(map.coordinate_of(ActorId(0)), Some(Coordinate::new(1, 1)));
        assert_eq!(map.actor_at(Coordinate::new(5, 5)), None);
        assert_eq!(map.count(), 2);
        assert!(map.is_consistent());
    }

    #[test]
    fn put_on_occupied_cell_unplaces_previous_occupant() {
        let mut map = placed();
        map.put(Coordinate::new(5, 6), ActorId(0));

        assert_eq!(map.actor_at(Coordinate::new(5, 6)), Some(ActorId(0)));
        assert!(!map.contains(ActorId(1)));
        assert_eq!(map.count(), 1);
        assert!(map.is_consistent());
    }

    #[test]
    fn pickup_on_empty_cell_fails() {
        let mut map = placed();
        let err = map.pickup(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            StageError::Vacant {
                coordinate: Coordinate::new(0, 0)
            }
        );
        assert_eq!(map, placed());
    }

    #[test]
    fn pickup_removes_both_directions() {
        let mut map = placed();
        assert_eq!(map.pickup(Coordinate::new(5, 5)), Ok(ActorId(0)));
        assert!(!map.contains(ActorId(0)));
        assert!(map.is_consistent());
    }

    #[test]
    fn move_then_opposite_move_restores_map() {
        for direction in Direction::iter() {
            let mut map = ActorMap::new();
            map.put(Coordinate::new(5, 5), ActorId(0));
            map.put(Coordinate::new(9, 9), ActorId(1));
            let before = map.clone();

            map.move_actor(ActorId(0), direction).unwrap();
            assert!(map.is_consistent());
            map.move_actor(ActorId(0), -direction).unwrap();

            assert_eq!(map, before, "{direction}");
        }
    }

    #[test]
    fn moving_onto_another_actor_fails_and_keeps_map() {
        let mut map = placed();
        let err = map.move_actor(ActorId(0), Direction::Down).unwrap_err();

        assert_eq!(
            err,
            StageError::Occupied {
                coordinate: Coordinate::new(5, 6),
                occupant: ActorId(1)
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert_eq!(map, placed());
    }

    #[test]
    fn moving_unplaced_actor_is_an_error() {
        let mut map = placed();
        let err = map.move_actor(ActorId(3), Direction::Up).unwrap_err();
        assert_eq!(err, StageError::NotPlaced { actor: ActorId(3) });
        assert_eq!(map, placed());
    }

    #[test]
    fn remove_actor_is_idempotent() {
        let mut map = placed();
        map.remove_actor(ActorId(1));
        let once = map.clone();
        map.remove_actor(ActorId(1));

        assert_eq!(map, once);
        assert_eq!(map.actors(), [ActorId(0)]);
        assert!(map.is_consistent());
    }
}
