//! Game session - the board state machine
//!
//! This module ties together the grid, move engine, spawner and terminal detector.
//! A session owns the current grid, score and status; every mutation goes through
//! [`GameSession::apply_move`] or [`GameSession::new_session`].
//!
//! States:
//! - `Active -> Active`: move accepted or rejected, grid still playable
//! - `Active -> Terminal`: move accepted and the post-spawn grid has no moves
//! - `Terminal` is absorbing until `new_session`
//!
//! `reached_goal` is a separate sticky flag; play continues after the goal.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::slide;
use crate::grid::Grid;
use crate::snapshot::GameSnapshot;
use crate::spawner::{spawn_tile, Spawned};
use crate::terminal::is_terminal;
use crate::types::{Direction, GameAction, INITIAL_TILES};

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Active,
    Terminal,
}

/// Event emitted after an accepted move (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    pub score_delta: u64,
    pub spawned: Option<Spawned>,
    /// True only on the move that first produced the goal tile
    pub reached_goal_now: bool,
    pub became_terminal: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<R = ChaCha8Rng> {
    grid: Grid,
    score: u64,
    reached_goal: bool,
    status: SessionStatus,
    rng: R,
    /// Seed of the default generator, when known.
    seed: Option<u64>,
    /// Monotonic session id (increments on `new_session`).
    session_id: u32,
    /// Accepted moves in the current session.
    moves: u32,
    last_event: Option<MoveEvent>,
}

impl GameSession<ChaCha8Rng> {
    /// Create a new seeded session with two spawned tiles.
    pub fn new(seed: u64) -> Self {
        let mut session = Self::blank(ChaCha8Rng::seed_from_u64(seed));
        session.seed = Some(seed);
        session.seed_grid();
        session
    }

    /// Create a session from a random seed.
    ///
    /// The seed is drawn from the OS generator and kept so a game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a new session drawing spawns from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut session = Self::blank(rng);
        session.seed_grid();
        session
    }

    /// Resume play from a known grid. Terminal status is evaluated immediately.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let mut session = Self::blank(rng);
        session.grid = grid;
        if is_terminal(&session.grid) {
            session.status = SessionStatus::Terminal;
        }
        session
    }

    fn blank(rng: R) -> Self {
        Self {
            grid: Grid::new(),
            score: 0,
            reached_goal: false,
            status: SessionStatus::Active,
            rng,
            seed: None,
            session_id: 0,
            moves: 0,
            last_event: None,
        }
    }

    fn seed_grid(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_one();
        }
    }

    fn spawn_one(&mut self) -> Option<Spawned> {
        let spawned = spawn_tile(&self.grid, &mut self.rng)?;
        let mut next = self.grid;
        next.set(spawned.pos, Some(spawned.tile));
        self.grid = next;
        Some(spawned)
    }

    /// Throw away all state and start over on an empty grid with two spawns.
    ///
    /// The generator keeps running, so consecutive sessions differ.
    pub fn new_session(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.reached_goal = false;
        self.status = SessionStatus::Active;
        self.moves = 0;
        self.last_event = None;
        self.session_id = self.session_id.wrapping_add(1);
        self.seed_grid();
        debug!("session {} started", self.session_id);
    }

    /// Slide the grid toward `direction`.
    ///
    /// Returns false without any state change if the session is terminal or the
    /// move would not change the grid. Otherwise commits the grid, adds the
    /// score delta, spawns one tile and re-evaluates terminal status.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.status == SessionStatus::Terminal {
            return false;
        }

        let outcome = slide(&self.grid, direction);
        if !outcome.changed {
            return false;
        }

        let reached_goal_now = outcome.reached_goal_this_move(self.reached_goal);

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        self.moves += 1;
        if reached_goal_now {
            self.reached_goal = true;
            info!("goal reached after {} moves, score {}", self.moves, self.score);
        }

        let spawned = self.spawn_one();

        let became_terminal = is_terminal(&self.grid);
        if became_terminal {
            self.status = SessionStatus::Terminal;
            info!(
                "session {} over: score {}, max tile {}",
                self.session_id,
                self.score,
                self.grid.max_tile().map_or(0, |t| t.value())
            );
        }

        debug!(
            "move {} {}: +{} (score {})",
            self.moves,
            direction.as_str(),
            outcome.score_delta,
            self.score
        );

        self.last_event = Some(MoveEvent {
            direction,
            score_delta: outcome.score_delta,
            spawned,
            reached_goal_now,
            became_terminal,
        });
        true
    }

    /// Apply a command from the input layer.
    ///
    /// `NewGame` always succeeds; moves follow [`GameSession::apply_move`].
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::NewGame => {
                self.new_session();
                true
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn reached_goal(&self) -> bool {
        self.reached_goal
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status == SessionStatus::Terminal
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_event(&self) -> Option<&MoveEvent> {
        self.last_event.as_ref()
    }

    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    /// Plain-data view of the session for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot in place.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.rows();
        out.score = self.score;
        out.reached_goal = self.reached_goal;
        out.terminal = self.is_terminal();
        out.session_id = self.session_id;
        out.moves = self.moves;
        out.last_spawn = self.last_event.and_then(|e| e.spawned).map(|s| s.pos);
    }
}
