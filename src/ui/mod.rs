pub mod flappy_scene;
pub mod game_common;

use crate::core::{GameState, RoundEnd, RoundOver, Screen};
use game_common::{create_game_layout, game_layout, render_status_bar};
use ratatui::{layout::Rect, style::Color, Frame};

/// Area of a terminal of the given size that shows the world.
pub fn world_area(terminal_area: Rect) -> Rect {
    game_layout(terminal_area).content
}

fn round_over_status(over: &RoundOver) -> (String, Color) {
    match over.reason {
        RoundEnd::Collision => (format!("CRASH! You passed {} pipes.", over.score), Color::Red),
        RoundEnd::Quit | RoundEnd::WindowClosed => {
            (format!("Round ended. You passed {} pipes.", over.score), Color::Yellow)
        }
    }
}

/// Main UI drawing function
pub fn draw_game(frame: &mut Frame, state: &GameState) {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " flappy ", Color::Cyan);

    flappy_scene::render_scene(frame, layout.content, &state.scene());

    match &state.screen {
        Screen::Menu(menu) => render_status_bar(
            frame,
            layout.status_bar,
            &format!("Best: {}", menu.high_score),
            Color::Yellow,
            &[("[Click play!/Enter]", "Play"), ("[q/Esc]", "Quit")],
        ),
        Screen::Playing(round) => render_status_bar(
            frame,
            layout.status_bar,
            &format!("Score: {}", round.score.value()),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[q/Esc]", "Menu")],
        ),
        Screen::RoundOver(over) => {
            let (text, color) = round_over_status(over);
            render_status_bar(frame, layout.status_bar, &text, color, &[]);
        }
    }
}
