//! Paints a `Scene` onto the play area, one styled cell at a time.

use crate::scene::{Anchor, Color as SceneColor, Drawable, Scene, TextStyle};
use crate::viewport::Viewport;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn to_color(color: SceneColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// A character grid the size of the play area.
struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<(char, Style)>,
}

impl CellGrid {
    fn new(width: usize, height: usize, fill: SceneColor) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::default().bg(to_color(fill))); width * height],
        }
    }

    fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut (char, Style)> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        self.cells.get_mut(row as usize * self.width + col as usize)
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width.max(1);
        self.cells
            .chunks(width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// First column of a text run and its row, in viewport-local cells.
fn text_origin(viewport: &Viewport, position: (i32, i32), anchor: Anchor, len: i32) -> (i32, i32) {
    let (x, y) = position;
    let col = viewport.col_of(x);
    match anchor {
        Anchor::TopLeft => (col, viewport.row_of(y)),
        Anchor::TopRight => (col - len, viewport.row_of(y)),
        Anchor::Center => (col - len / 2, viewport.row_of(y)),
        Anchor::BottomLeft => (col, viewport.row_of(y - 1)),
        Anchor::BottomRight => (col - len, viewport.row_of(y - 1)),
    }
}

/// Rasterize the scene. A cell is covered by a rectangle when its center is.
fn rasterize(scene: &Scene, viewport: &Viewport) -> CellGrid {
    let width = viewport.area.width as usize;
    let height = viewport.area.height as usize;
    let mut grid = CellGrid::new(width, height, scene.fill);

    for item in &scene.items {
        match item {
            Drawable::Fill { rect, color } => {
                let bg = to_color(*color);
                for row in 0..height as u16 {
                    for col in 0..width as u16 {
                        let (x, y) = viewport.cell_center(col, row);
                        if rect.contains_point(x, y) {
                            if let Some(cell) = grid.get_mut(col as i32, row as i32) {
                                *cell = (' ', Style::default().bg(bg));
                            }
                        }
                    }
                }
            }
            Drawable::Text {
                content,
                position,
                anchor,
                style,
                color,
            } => {
                let len = content.chars().count() as i32;
                let (start, row) = text_origin(viewport, *position, *anchor, len);
                for (i, ch) in content.chars().enumerate() {
                    if let Some(cell) = grid.get_mut(start + i as i32, row) {
                        let mut text_style = cell.1.fg(to_color(*color));
                        if *style == TextStyle::Heading {
                            text_style = text_style.add_modifier(Modifier::BOLD);
                        }
                        *cell = (ch, text_style);
                    }
                }
            }
        }
    }

    grid
}

/// Render the scene into `area`, stretching the world to fit.
pub fn render_scene(frame: &mut Frame, area: Rect, scene: &Scene) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let viewport = Viewport::new(area);
    let paragraph = Paragraph::new(rasterize(scene, &viewport).into_lines());
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect as WorldRect;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, 128, 72))
    }

    #[test]
    fn test_empty_scene_is_sky() {
        let grid = rasterize(&Scene::new(), &viewport());
        assert_eq!(grid.cells.len(), 128 * 72);
        let sky = Style::default().bg(Color::Rgb(0, 191, 255));
        assert!(grid.cells.iter().all(|cell| *cell == (' ', sky)));
    }

    #[test]
    fn test_fill_covers_cells() {
        let mut scene = Scene::new();
        scene.fill_rect(WorldRect::new(0, 0, 80, 720), SceneColor::Green2);
        let mut grid = rasterize(&scene, &viewport());
        let green = Style::default().bg(Color::Rgb(0, 238, 0));
        // 80 world units = 8 cells at this scale
        for col in 0..8 {
            assert_eq!(grid.get_mut(col, 10).map(|c| c.1), Some(green));
        }
        assert_ne!(grid.get_mut(8, 10).map(|c| c.1), Some(green));
    }

    #[test]
    fn test_text_anchors() {
        let vp = viewport();
        assert_eq!(text_origin(&vp, (640, 400), Anchor::Center, 4), (62, 40));
        assert_eq!(text_origin(&vp, (1270, 10), Anchor::TopRight, 2), (125, 1));
        assert_eq!(text_origin(&vp, (10, 710), Anchor::BottomLeft, 3), (1, 70));
    }

    #[test]
    fn test_text_keeps_background() {
        let mut scene = Scene::new();
        scene.text("hi", (0, 0), Anchor::TopLeft, TextStyle::Heading, SceneColor::White);
        let mut grid = rasterize(&scene, &viewport());
        let (ch, style) = *grid.get_mut(0, 0).expect("cell in range");
        assert_eq!(ch, 'h');
        assert_eq!(style.bg, Some(Color::Rgb(0, 191, 255)));
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_clipped_at_edges() {
        let mut scene = Scene::new();
        scene.text("score", (-30, 0), Anchor::TopLeft, TextStyle::Body, SceneColor::White);
        let mut grid = rasterize(&scene, &viewport());
        // The first three characters fall left of the area
        assert_eq!(grid.get_mut(0, 0).map(|c| c.0), Some('r'));
    }
}
