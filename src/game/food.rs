//! Food placement.
//!
//! Placement draws uniformly random cells and rejects any the snake occupies.
//! Draws are capped; once the cap is hit the free cells are enumerated and one
//! is picked uniformly, so a crowded board still terminates. A board with no
//! free cell reports [`Placement::GridFull`].

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Position, Snake};

/// Score awarded for a single food
pub const DEFAULT_NUTRITION: u32 = 10;

/// Outcome of a relocation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed(Position),
    /// Every cell is covered by the snake
    GridFull,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Position,
    active: bool,
    nutritional_value: u32,
}

impl Default for Food {
    fn default() -> Self {
        Self::new(DEFAULT_NUTRITION)
    }
}

impl Food {
    /// Create food at a placeholder position; call [`Food::relocate`] before use
    pub fn new(nutritional_value: u32) -> Self {
        Self {
            position: Position::new(0, 0),
            active: true,
            nutritional_value,
        }
    }

    /// Move to a random cell of the grid not covered by `snake`
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid_width: usize,
        grid_height: usize,
        snake: &Snake,
        max_attempts: usize,
        rng: &mut R,
    ) -> Placement {
        if grid_width == 0 || grid_height == 0 {
            return Placement::GridFull;
        }

        for _ in 0..max_attempts {
            let candidate = Position::new(
                rng.gen_range(0..grid_width) as i32,
                rng.gen_range(0..grid_height) as i32,
            );

            if !snake.occupies(candidate) {
                self.position = candidate;
                return Placement::Placed(candidate);
            }
        }

        let free: Vec<Position> = (0..grid_height as i32)
            .flat_map(|y| (0..grid_width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        match free.choose(rng) {
            Some(&pos) => {
                self.position = pos;
                Placement::Placed(pos)
            }
            None => Placement::GridFull,
        }
    }

    /// True when the snake's head sits exactly on the food
    pub fn is_eaten_by(&self, snake: &Snake) -> bool {
        self.position == snake.head()
    }

    /// Put the food on a specific cell
    pub fn place_at(&mut self, position: Position) {
        self.position = position;
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Hide or show the food; only renderers look at this flag
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn nutritional_value(&self) -> u32 {
        self.nutritional_value
    }
}
