//! Start screen: title, play button and high score.

use crate::build_info::version_label;
use crate::constants::{
    HIGHSCORE_BOTTOMLEFT, PLAY_BUTTON_CENTER, PLAY_BUTTON_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
    TITLE_CENTER,
};
use crate::geometry::Rect;
use crate::input::{InputEvent, Key};
use crate::scene::{Anchor, Color, Scene, TextStyle};

/// What the menu wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Stay,
    Play,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub high_score: u32,
    pub pointer: Option<(i32, i32)>,
    pub button_down: bool,
    pub hovered: bool,
}

/// Hit area of the play button.
pub fn play_button_rect() -> Rect {
    let mut rect = Rect::new(0, 0, PLAY_BUTTON_SIZE.0, PLAY_BUTTON_SIZE.1);
    rect.set_center(PLAY_BUTTON_CENTER.0, PLAY_BUTTON_CENTER.1);
    rect
}

impl Menu {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            pointer: None,
            button_down: false,
            hovered: false,
        }
    }

    fn pointer_over_button(&self) -> bool {
        let button = play_button_rect();
        self.pointer
            .is_some_and(|(x, y)| button.contains_point(x, y))
    }

    /// Apply this tick's events. Clicking (button held while hovering) starts play.
    ///
    /// A press over the button counts even if its release lands in the same batch.
    pub fn tick(&mut self, events: &[InputEvent]) -> MenuAction {
        let mut clicked = false;
        for event in events {
            match *event {
                InputEvent::Quit => return MenuAction::Exit,
                e if e.is_leave() => return MenuAction::Exit,
                InputEvent::KeyDown(Key::Enter) => return MenuAction::Play,
                InputEvent::PointerMoved { x, y } => self.pointer = Some((x, y)),
                InputEvent::PointerButton { pressed } => {
                    self.button_down = pressed;
                    clicked |= pressed && self.pointer_over_button();
                }
                InputEvent::KeyDown(_) => {}
            }
        }

        self.hovered = self.pointer_over_button();

        if clicked || (self.hovered && self.button_down) {
            MenuAction::Play
        } else {
            MenuAction::Stay
        }
    }

    /// Menu over the frozen frame of the last round.
    pub fn render(&self, background: &Scene) -> Scene {
        let mut scene = Scene::new();
        scene.blit(background);
        scene.text(
            "flappy bird",
            TITLE_CENTER,
            Anchor::Center,
            TextStyle::Heading,
            Color::White,
        );

        let (label, color) = if self.hovered {
            ("Play!", Color::Red)
        } else {
            ("play!", Color::White)
        };
        scene.text(
            label,
            PLAY_BUTTON_CENTER,
            Anchor::Center,
            TextStyle::Body,
            color,
        );

        scene.text(
            format!("highscore: {}", self.high_score),
            HIGHSCORE_BOTTOMLEFT,
            Anchor::BottomLeft,
            TextStyle::Body,
            Color::White,
        );
        scene.text(
            version_label(),
            (SCREEN_WIDTH - 10, SCREEN_HEIGHT - 10),
            Anchor::BottomRight,
            TextStyle::Body,
            Color::White,
        );
        scene
    }
}
