//! Shared UI components: layout and the status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `game_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Where the world is drawn - inside the outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom, inside outer border
    pub status_bar: Rect,
}

fn outer_block(title: &str, border_color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Compute the game layout for a terminal area without drawing anything.
///
/// ```text
/// ┌─ flappy ────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn game_layout(area: Rect) -> GameLayout {
    let inner = outer_block("", Color::Reset).inner(area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
    }
}

/// Clear `area`, draw the outer border and return the layout inside it.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);
    frame.render_widget(outer_block(title, border_color), area);
    game_layout(area)
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Space]", "Flap"), ("[Esc]", "Menu")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    // Line 1: Status message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
