//! The fixed-rate loop: poll, step, draw, sleep.

use crate::clock::FrameClock;
use crate::core::{Flow, GameState};
use crate::input::InputSource;
use crate::score_store::ScoreStore;
use crate::ui;
use crate::viewport::Viewport;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Display and clock threaded through the loop.
pub struct FrameContext<B: Backend> {
    pub terminal: Terminal<B>,
    pub clock: FrameClock,
}

impl<B: Backend> FrameContext<B> {
    pub fn new(terminal: Terminal<B>, fps: u32) -> Self {
        Self {
            terminal,
            clock: FrameClock::new(fps),
        }
    }

    /// Viewport for mapping pointer positions, from the current terminal size.
    pub fn viewport(&self) -> io::Result<Viewport> {
        Ok(Viewport::new(ui::world_area(self.terminal.size()?)))
    }
}

/// Run until the game asks to exit.
///
/// Each tick applies input before advancing the simulation and draws after,
/// then sleeps out the rest of the frame.
pub fn run<B, I, R>(
    ctx: &mut FrameContext<B>,
    state: &mut GameState,
    input: &mut I,
    store: &dyn ScoreStore,
    rng: &mut R,
) -> io::Result<()>
where
    B: Backend,
    I: InputSource,
    R: Rng,
{
    let mut elapsed = ctx.clock.frame_duration();
    loop {
        let viewport = ctx.viewport()?;
        let events = input.poll(&viewport)?;

        if state.step(&events, elapsed, rng, store) == Flow::Exit {
            return Ok(());
        }

        ctx.terminal.draw(|frame| ui::draw_game(frame, state))?;
        elapsed = ctx.clock.tick();
    }
}
