use super::common::Color;

/// Glyph plus colour handed to the canvas for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graphic {
    pub glyph: char,
    pub color: Color,
}

impl Graphic {
    pub const fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }
}

/// Mutable appearance of an actor. Remembers its base colour so that
/// temporary recolouring (flashing) can always be undone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprite {
    glyph: char,
    color: Color,
    original_color: Color,
}

impl Sprite {
    pub fn new(glyph: char, color: Color) -> Self {
        Self {
            glyph,
            color,
            original_color: color,
        }
    }

    pub fn graphic(&self) -> Graphic {
        Graphic::new(self.glyph, self.color)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn original_color(&self) -> Color {
        self.original_color
    }

    pub fn change_glyph(&mut self, glyph: char) {
        self.glyph = glyph;
    }

    pub fn change_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color_changed(&self) -> bool {
        self.color != self.original_color
    }

    pub fn reset_color(&mut self) {
        self.color = self.original_color;
    }

    /// Swaps between `color` and the base colour.
    pub fn toggle_color(&mut self, color: Color) {
        if self.color_changed() {
            self.reset_color();
        } else {
            self.change_color(color);
        }
    }
}
