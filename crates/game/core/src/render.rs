//! Render boundary.
//!
//! The core never composes pixels. It issues draw commands against a
//! [`Canvas`] supplied by the host, addressed by grid coordinate.

use crate::state::{Color, Coordinate, Graphic};

/// Drawing surface provided by the external renderer.
pub trait Canvas {
    /// Clears the surface before a new frame is composed.
    fn fill(&mut self);

    /// Draws one glyph cell.
    fn draw(&mut self, at: Coordinate, graphic: Graphic);

    /// Writes a line of text starting at `at`.
    fn write(&mut self, text: &str, at: Coordinate, color: Color);
}

/// A single command captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Fill,
    Draw { at: Coordinate, graphic: Graphic },
    Write { text: String, at: Coordinate, color: Color },
}

/// Canvas that records commands instead of drawing. Useful for headless
/// hosts and for asserting on frames.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Graphic drawn at `at` most recently, if any.
    pub fn graphic_at(&self, at: Coordinate) -> Option<Graphic> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Draw { at: cell, graphic } if *cell == at => Some(*graphic),
            _ => None,
        })
    }

    /// All written text lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Write { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn draw(&mut self, at: Coordinate, graphic: Graphic) {
        self.commands.push(DrawCommand::Draw { at, graphic });
    }

    fn write(&mut self, text: &str, at: Coordinate, color: Color) {
        self.commands.push(DrawCommand::Write {
            text: text.to_owned(),
            at,
            color,
        });
    }
}
