//! The screen state machine: `Menu -> Playing -> RoundOver -> Menu`.

use super::menu::{Menu, MenuAction};
use super::round::{Round, RoundEnd};
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::score_store::ScoreStore;
use rand::Rng;
use std::time::Duration;

/// Whether the runner should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A finished round waiting to be persisted.
#[derive(Debug, Clone)]
pub struct RoundOver {
    pub score: u32,
    pub reason: RoundEnd,
    /// Last frame of the round, becomes the menu background.
    pub frame: Scene,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Menu(Menu),
    Playing(Round),
    RoundOver(RoundOver),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    background: Scene,
}

impl GameState {
    /// Start on the menu with the stored high score.
    pub fn new(store: &dyn ScoreStore) -> Self {
        Self {
            screen: Screen::Menu(Menu::new(store.read())),
            background: Scene::new(),
        }
    }

    /// Frame drawn behind the menu. Only replaced when a round is over.
    pub fn background(&self) -> &Scene {
        &self.background
    }

    /// Advance the current screen by one tick.
    pub fn step<R: Rng>(
        &mut self,
        events: &[InputEvent],
        elapsed: Duration,
        rng: &mut R,
        store: &dyn ScoreStore,
    ) -> Flow {
        match &mut self.screen {
            Screen::Menu(menu) => match menu.tick(events) {
                MenuAction::Stay => Flow::Continue,
                MenuAction::Play => {
                    self.start_round(rng);
                    Flow::Continue
                }
                MenuAction::Exit => Flow::Exit,
            },
            Screen::Playing(round) => {
                if let Some(reason) = round.tick(events, elapsed, rng) {
                    self.end_round(reason);
                }
                Flow::Continue
            }
            Screen::RoundOver(_) => {
                let closed = events.contains(&InputEvent::Quit);
                match self.finish_round(store) {
                    Flow::Continue if closed => Flow::Exit,
                    flow => flow,
                }
            }
        }
    }

    /// What to draw for the current screen.
    pub fn scene(&self) -> Scene {
        match &self.screen {
            Screen::Menu(menu) => menu.render(&self.background),
            Screen::Playing(round) => round.render(),
            Screen::RoundOver(over) => over.frame.clone(),
        }
    }

    fn start_round<R: Rng>(&mut self, rng: &mut R) {
        log::info!("Round started");
        self.screen = Screen::Playing(Round::new(rng));
    }

    fn end_round(&mut self, reason: RoundEnd) {
        let Screen::Playing(round) = &self.screen else {
            return;
        };
        log::info!(
            "Round over after {} ticks: score {} ({:?})",
            round.tick_count,
            round.score.value(),
            reason
        );
        self.screen = Screen::RoundOver(RoundOver {
            score: round.score.value(),
            reason,
            frame: round.render(),
        });
    }

    /// Persist the result, freeze the frame behind the menu and go back to it.
    fn finish_round(&mut self, store: &dyn ScoreStore) -> Flow {
        let Screen::RoundOver(over) = &mut self.screen else {
            return Flow::Continue;
        };

        match store.write(over.score) {
            Ok(true) => log::info!("New high score: {}", over.score),
            Ok(false) => {}
            Err(e) => log::warn!("Failed to save high score {}: {}", over.score, e),
        }

        let reason = over.reason;
        self.background = std::mem::take(&mut over.frame);
        self.screen = Screen::Menu(Menu::new(store.read()));

        if reason == RoundEnd::WindowClosed {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }
}
