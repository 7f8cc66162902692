//! Terminal 2048 runner (default binary).
//!
//! Reads crossterm key and mouse events, feeds them to the game session and
//! redraws through the framebuffer renderer after every change.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::app::App;
use tui_2048::config::Cli;
use tui_2048::core::GameSession;
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::logging::setup_logging;
use tui_2048::store::BestScore;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_dir())?;

    let best = BestScore::load(cli.best_score_store());
    let session = match cli.seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };
    info!(
        "starting: seed {:?}, best score {}",
        session.seed(),
        best.value()
    );
    let mut app = App::new(session, best);

    let mut term = TerminalRenderer::new();
    if cli.no_mouse {
        term = term.without_mouse();
    }
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "exiting: score {}, best {}",
        app.session().score(),
        app.best_score()
    );
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut swipe = SwipeTracker::new();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into_with_hud(&app.snapshot(), Some(&app.hud()), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // No timers: block until the next input.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty |= app.handle(action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(direction) = swipe.handle_mouse_event(mouse) {
                    dirty |= app.handle(GameAction::Move(direction));
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
