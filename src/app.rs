//! App: one game session plus the UI-level state around it.
//!
//! The core only knows a sticky `reached_goal` flag. Whether and how long the
//! congratulation banner shows is decided here: it appears on the move that
//! first produces 2048 and stays until a new game starts, so it is shown
//! once per session.

use log::{info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::{GameSession, GameSnapshot};
use crate::store::BestScore;
use crate::term::HudView;
use crate::types::GameAction;

pub const GOAL_MESSAGE: &str = "You've reached 2048! Keep going!";

pub struct App<R = ChaCha8Rng> {
    session: GameSession<R>,
    best: BestScore,
    goal_notice: bool,
}

impl<R: Rng> App<R> {
    pub fn new(session: GameSession<R>, best: BestScore) -> Self {
        let mut app = Self {
            session,
            best,
            goal_notice: false,
        };
        app.record_best();
        app
    }

    /// Apply one command. Returns true if anything visible changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let accepted = self.session.apply_action(action);
        if !accepted {
            return false;
        }

        match action {
            GameAction::NewGame => {
                self.goal_notice = false;
                info!("new game (session {})", self.session.session_id());
            }
            GameAction::Move(_) => {
                if self.session.last_event().is_some_and(|e| e.reached_goal_now) {
                    self.goal_notice = true;
                }
            }
        }

        self.record_best();
        true
    }

    fn record_best(&mut self) {
        if let Err(e) = self.best.record(self.session.score()) {
            warn!("could not save best score: {}", e);
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn best_score(&self) -> u64 {
        self.best.value()
    }

    /// Banner text for the renderer, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.goal_notice.then_some(GOAL_MESSAGE)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn hud(&self) -> HudView<'static> {
        HudView {
            best_score: self.best.value(),
            message: self.message(),
        }
    }
}
