use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Top-level game phase; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to start
    NotStarted,
    /// Simulation is ticking
    Running,
    /// Frozen, resumable
    Paused,
    /// Terminal until a restart
    Over,
}

/// The snake in the game
///
/// Body segments with the head at index 0. The body is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Create a single-segment snake at the given cell
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        *self.body.first().expect("snake body is never empty")
    }

    /// All segments, head first
    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if any segment occupies the given cell
    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// Check if a cell collides with the body (excluding the head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body[1..].contains(&cell)
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Cell {
        self.body.pop().expect("snake body is never empty")
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "snake body is never empty");
        Self { body: cells }
    }
}

/// Read-only copy of the simulation state published to collaborators
///
/// Produced by `SnakeGame::snapshot` once per frame; the renderer must not
/// reach into the simulation itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub move_interval: Duration,
    pub columns: usize,
    pub rows: usize,
}
