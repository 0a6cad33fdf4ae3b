//! The frame buffer handed to the renderer each tick.
//!
//! A scene is a base fill plus drawables painted in order, so later entries
//! cover earlier ones. Coordinates are world units.

use crate::geometry::Rect;

/// Named colors used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    DeepSkyBlue,
    Green2,
    Gold,
    White,
    Red,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::DeepSkyBlue => (0, 191, 255),
            Self::Green2 => (0, 238, 0),
            Self::Gold => (255, 215, 0),
            Self::White => (255, 255, 255),
            Self::Red => (255, 0, 0),
        }
    }
}

/// Which point of the text box `Drawable::Text::position` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
}

/// Heading text is drawn bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Heading,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    Fill {
        rect: Rect,
        color: Color,
    },
    Text {
        content: String,
        position: (i32, i32),
        anchor: Anchor,
        style: TextStyle,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub fill: Color,
    pub items: Vec<Drawable>,
}

impl Scene {
    /// Empty scene over the sky color.
    pub fn new() -> Self {
        Self {
            fill: Color::DeepSkyBlue,
            items: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.items.push(Drawable::Fill { rect, color });
    }

    pub fn text(
        &mut self,
        content: impl Into<String>,
        position: (i32, i32),
        anchor: Anchor,
        style: TextStyle,
        color: Color,
    ) {
        self.items.push(Drawable::Text {
            content: content.into(),
            position,
            anchor,
            style,
            color,
        });
    }

    /// Paint another scene's drawables on top of this one.
    pub fn blit(&mut self, other: &Scene) {
        self.items.extend(other.items.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text contents in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            Drawable::Text { content, .. } => Some(content.as_str()),
            Drawable::Fill { .. } => None,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
