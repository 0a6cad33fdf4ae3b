use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::constants::{FPS, LOG_FILE_NAME};
use flappy::core::GameState;
use flappy::input::CrosstermInput;
use flappy::runner::{self, FrameContext};
use flappy::score_store::{data_dir, FileScoreStore, MemoryScoreStore, ScoreStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;

/// Send log output to `~/.flappy/flappy.log`; the terminal belongs to the game.
fn init_logging() {
    let Ok(dir) = data_dir() else {
        return;
    };
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn main() -> io::Result<()> {
    init_logging();
    log::info!("flappy {} starting", flappy::build_info::version_label());

    let store: Box<dyn ScoreStore> = match FileScoreStore::new() {
        Ok(store) => {
            log::info!("High score file: {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("No score file available ({}), high score is kept in memory", e);
            Box::new(MemoryScoreStore::new())
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut ctx = FrameContext::new(Terminal::new(backend)?, FPS);
    ctx.terminal.hide_cursor()?;

    let mut state = GameState::new(store.as_ref());
    let mut rng = rand::thread_rng();
    let result = runner::run(
        &mut ctx,
        &mut state,
        &mut CrosstermInput,
        store.as_ref(),
        &mut rng,
    );

    // Cleanup terminal
    disable_raw_mode()?;
    ctx.terminal.backend_mut().execute(DisableMouseCapture)?;
    ctx.terminal.backend_mut().execute(LeaveAlternateScreen)?;
    ctx.terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    log::info!("Goodbye!");
    result
}
