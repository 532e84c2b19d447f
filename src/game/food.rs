use rand::Rng;

use super::state::{Cell, Snake};

/// Pick a food cell not occupied by the snake
///
/// Samples uniformly until a free cell turns up. The snake covering the
/// whole board is a caller bug, not a reachable game state.
pub fn place<R: Rng>(snake: &Snake, columns: usize, rows: usize, rng: &mut R) -> Cell {
    assert!(
        snake.len() < columns * rows,
        "no free cell left to place food on"
    );

    loop {
        let cell = Cell::new(rng.gen_range(0..columns), rng.gen_range(0..rows));
        if !snake.contains(&cell) {
            return cell;
        }
    }
}
