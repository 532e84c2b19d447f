use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;

use super::config::GameConfig;
use super::direction::Direction;
use super::food;
use super::state::{Cell, GameSnapshot, Phase, Snake};

/// What a single simulation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the step ended the game
    pub died: bool,
}

/// The Snake simulation
///
/// Owns every piece of game state and funnels all mutation through five
/// operations: `set_direction`, `start`, `toggle_pause`, `restart` and
/// `advance`. Collaborators read the state through `snapshot`.
///
/// `advance` is gated internally on the move interval, so the caller can
/// invoke it every frame at whatever cadence it renders; a step fires only
/// when enough simulated time has passed. Out-of-phase operations are
/// silent no-ops: they are routine input races, not errors.
pub struct SnakeGame<R: Rng = ThreadRng> {
    config: GameConfig,
    rng: R,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Cell,
    score: u32,
    phase: Phase,
    move_interval: Duration,
    last_step: Duration,
}

impl SnakeGame<ThreadRng> {
    /// Create a game with the thread-local RNG
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Create a game with a caller-supplied RNG
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let snake = Snake::new(config.spawn);
        let food = food::place(&snake, config.columns, config.rows, &mut rng);
        let move_interval = config.base_interval;

        Self {
            config,
            rng,
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food,
            score: 0,
            phase: Phase::NotStarted,
            move_interval,
            last_step: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Begin the game; only meaningful before the first tick
    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
        }
    }

    /// Toggle between Running and Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Request a turn, applied at the next tick
    ///
    /// Same-axis input (the current heading or its reverse) is dropped, so
    /// the snake can never fold back onto its own neck. Repeated requests
    /// between ticks overwrite each other; only the latest valid one runs.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Running {
            return;
        }
        if direction == self.direction || direction.is_opposite(self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Reset to a fresh, not-yet-started game
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.config.spawn);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.food = food::place(&self.snake, self.config.columns, self.config.rows, &mut self.rng);
        self.score = 0;
        self.move_interval = self.config.base_interval;
        self.last_step = Duration::ZERO;
        self.phase = Phase::NotStarted;
    }

    /// Advance the simulation to `now`
    ///
    /// Performs at most one step per call, and only while Running with the
    /// move interval elapsed since the previous step. Returns what the step
    /// did, or `None` when the call was gated.
    pub fn advance(&mut self, now: Duration) -> Option<StepReport> {
        if self.phase != Phase::Running {
            return None;
        }
        if now.saturating_sub(self.last_step) < self.move_interval {
            return None;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.next_head();
        self.snake.push_head(new_head);

        let ate_food = new_head == self.food;
        if ate_food {
            self.score += 10;
            self.food = food::place(&self.snake, self.config.columns, self.config.rows, &mut self.rng);
            self.move_interval = self.interval_for_score();
        } else {
            // Pop before the collision check: sliding onto the cell the
            // tail vacates this same tick is legal.
            self.snake.pop_tail();
        }

        let died = self.snake.collides_with_body(new_head);
        if died {
            self.phase = Phase::Over;
        }

        self.last_step = now;
        Some(StepReport { ate_food, died })
    }

    /// Read-only copy of the current state for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.cells().to_vec(),
            food: self.food,
            score: self.score,
            phase: self.phase,
            move_interval: self.move_interval,
            columns: self.config.columns,
            rows: self.config.rows,
        }
    }

    fn next_head(&self) -> Cell {
        let (dx, dy) = self.direction.delta();
        let head = self.snake.head();
        Cell::new(
            wrap(head.x, dx, self.config.columns),
            wrap(head.y, dy, self.config.rows),
        )
    }

    fn interval_for_score(&self) -> Duration {
        let base = self.config.base_interval.as_millis() as u64;
        let min = self.config.min_interval.as_millis() as u64;
        Duration::from_millis(base.saturating_sub(2 * u64::from(self.score)).max(min))
    }
}

/// Step one coordinate, wrapping at the grid edge (toroidal topology)
fn wrap(coord: usize, delta: i32, len: usize) -> usize {
    (coord as i32 + delta).rem_euclid(len as i32) as usize
}
