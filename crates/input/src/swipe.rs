//! Mouse drag ("swipe") recognition.
//!
//! A left-button press records the start cell; the matching release resolves a
//! direction from the dominant axis of the drag. Terminal cells are roughly twice
//! as tall as they are wide, so vertical distance is doubled before comparing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum drag length (in horizontal terminal columns) that counts as a swipe.
pub const DEFAULT_MIN_SWIPE: u16 = 2;

/// Resolve a drag from `start` to `end` (column, row) into a direction.
///
/// Returns `None` for drags shorter than `min_distance` along both axes.
/// |dx| > |dy| selects a horizontal move, otherwise vertical.
pub fn swipe_direction(start: (u16, u16), end: (u16, u16), min_distance: u16) -> Option<Direction> {
    let dx = end.0 as i32 - start.0 as i32;
    let dy = (end.1 as i32 - start.1 as i32) * 2;

    if dx.abs() < min_distance as i32 && dy.abs() < min_distance as i32 {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx < 0 {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        Some(Direction::Down)
    }
}

/// Tracks one in-flight drag.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    min_distance: u16,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_min_distance(DEFAULT_MIN_SWIPE)
    }

    pub fn with_min_distance(min_distance: u16) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    /// Feed a mouse event; returns a direction when a drag completes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start.take()?;
                swipe_direction(start, (event.column, event.row), self.min_distance)
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
