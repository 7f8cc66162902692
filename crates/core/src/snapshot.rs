use crate::types::{Pos, GRID_SIZE};

/// Plain-data copy of a session, handed to renderers after every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Face values, 0 meaning empty
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u64,
    pub reached_goal: bool,
    pub terminal: bool,
    pub session_id: u32,
    pub moves: u32,
    /// Cell filled by the most recent spawn, for highlighting
    pub last_spawn: Option<Pos>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            reached_goal: false,
            terminal: false,
            session_id: 0,
            moves: 0,
            last_spawn: None,
        }
    }
}
