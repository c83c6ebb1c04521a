//! Top-level scenes and their fixed screens.

use super::events::GameEvent;
use super::scheduler::Scheduler;
use super::task::StatusTask;
use crate::render::Canvas;
use crate::state::{Actors, Color, Coordinate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneKind {
    /// Waits for any key.
    #[default]
    Title,
    /// Gameplay until someone runs out of life.
    Chase,
    /// Standings; start and skill together restart the chase.
    Ranking,
}

/// Tracks the active scene. Every switch drops all pending scheduler
/// entries, so no timer outlives the scene that started it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneController {
    current: SceneKind,
}

impl SceneController {
    pub const TITLE_TEXT: &'static str = "Chase";
    pub const RANKING_TEXT: &'static str = "Ranking";
    pub const RESTART_TEXT: &'static str = "Press [Start]+[Skill] Key";

    const RANKING_FIRST_ROW: i32 = 2;
    const RESTART_ROW: i32 = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SceneKind {
        self.current
    }

    /// Switches to `to`. Switching to the active scene is ignored.
    pub fn change(
        &mut self,
        to: SceneKind,
        scheduler: &mut Scheduler<StatusTask>,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let from = self.current;
        if from == to {
            return false;
        }
        scheduler.clear();
        self.current = to;
        events.push(GameEvent::SceneChanged { from, to });
        tracing::info!(%from, %to, "scene changed");
        true
    }

    pub fn render_title(canvas: &mut dyn Canvas) {
        canvas.fill();
        canvas.write(Self::TITLE_TEXT, Coordinate::ORIGIN, Color::Olive);
    }

    pub fn render_ranking(canvas: &mut dyn Canvas, actors: &Actors) {
        canvas.fill();
        canvas.write(Self::RANKING_TEXT, Coordinate::ORIGIN, Color::Olive);
        for (row, entry) in actors.ranking().iter().enumerate() {
            let at = Coordinate::new(0, Self::RANKING_FIRST_ROW + row as i32);
            canvas.write(&entry.line, at, entry.color);
        }
        canvas.write(
            Self::RESTART_TEXT,
            Coordinate::new(0, Self::RESTART_ROW),
            Color::Yellow,
        );
    }
}
