use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    food::{Food, Placement},
    state::{CollisionType, GameState, Phase, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether eating left no free cell for the next food
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the round has ended
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Cell the head is seeded on
    pub fn start_position(&self) -> Position {
        Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        )
    }

    /// Build a fresh round waiting on the start screen
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.start_position(), self.config.initial_snake_length);
        let mut state = GameState::new(
            snake,
            Food::new(self.config.food_value),
            self.config.grid_width,
            self.config.grid_height,
        );
        self.place_food(&mut state);
        state
    }

    /// Reset an existing round in place: reseed the snake and move the food
    pub fn restart(&mut self, state: &mut GameState) {
        state.snake.reset(self.start_position(), self.config.initial_snake_length);
        state.score = 0;
        state.steps = 0;
        state.phase = Phase::Ready;
        self.place_food(state);
        info!("round reset");
    }

    /// Execute one tick of the game.
    ///
    /// Order matters: apply the turn, advance, check walls then the body, and
    /// only a surviving head may eat.
    pub fn step(&mut self, state: &mut GameState, turn: Option<Direction>) -> StepResult {
        if !state.is_playing() {
            return StepResult {
                terminated: state.phase.is_finished(),
                info: StepInfo::default(),
            };
        }

        if let Some(direction) = turn {
            state.snake.change_direction(direction);
        }

        state.snake.advance();
        state.steps += 1;

        let collision = if state.snake.check_wall_collision(state.grid_width, state.grid_height) {
            Some(CollisionType::Wall)
        } else if state.snake.check_self_collision() {
            Some(CollisionType::SelfCollision)
        } else {
            None
        };

        if let Some(collision_type) = collision {
            state.phase = Phase::Over(collision_type);
            info!(
                ?collision_type,
                score = state.score,
                steps = state.steps,
                "round over"
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..StepInfo::default()
                },
            };
        }

        if !state.food.is_eaten_by(&state.snake) {
            return StepResult {
                terminated: false,
                info: StepInfo::default(),
            };
        }

        state.snake.grow();
        state.score += state.food.nutritional_value();
        debug!(score = state.score, at = ?state.food.position(), "food eaten");

        let board_full = !self.place_food(state);
        if board_full {
            state.phase = Phase::Won;
            info!(score = state.score, "board filled, round won");
        }

        StepResult {
            terminated: board_full,
            info: StepInfo {
                ate_food: true,
                collision_type: None,
                board_full,
            },
        }
    }

    /// Relocate the food away from the snake; false when no cell is free
    fn place_food(&mut self, state: &mut GameState) -> bool {
        let placement = state.food.relocate(
            state.grid_width,
            state.grid_height,
            &state.snake,
            self.config.food_attempts(),
            &mut self.rng,
        );

        matches!(placement, Placement::Placed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn seeded_engine() -> GameEngine {
        let mut config = GameConfig::small();
        config.seed = Some(11);
        GameEngine::new(config)
    }

    fn playing(engine: &mut GameEngine) -> GameState {
        let mut state = engine.reset();
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert!(!state.snake.occupies(state.food.position()));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded_engine();
        let mut state = playing(&mut engine);
        state.food.place_at(Position::new(0, 0));
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, None);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.moved_in_direction(Direction::Right));
    }

    #[test]
    fn test_not_playing_does_not_tick() {
        let mut engine = seeded_engine();
        let mut state = engine.reset();
        let before = state.clone();

        let result = engine.step(&mut state, Some(Direction::Up));
        assert!(!result.terminated);
        assert_eq!(state, before);

        state.phase = Phase::Over(CollisionType::Wall);
        let result = engine.step(&mut state, None);
        assert!(result.terminated);
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_eat_grow_and_relocate() {
        let mut engine = seeded_engine();
        let mut state = playing(&mut engine);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        state.food.place_at(Position::new(6, 5));

        let result = engine.step(&mut state, None);
        assert!(result.info.ate_food);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert_eq!(state.score, 10);
        // Growth lands on the following tick
        assert_eq!(state.snake.len(), 3);
        assert!(state.snake.growth_pending());

        let eaten_at = Position::new(6, 5);
        let food = state.food.position();
        assert_ne!(food, eaten_at);
        assert!(!state.snake.occupies(food));

        state.food.place_at(Position::new(0, 0));
        engine.step(&mut state, None);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = seeded_engine();
        let mut state = playing(&mut engine);
        state.food.place_at(Position::new(0, 0));

        for _ in 0..4 {
            assert!(!engine.step(&mut state, None).terminated);
        }
        assert_eq!(state.snake.head(), Position::new(9, 5));

        let result = engine.step(&mut state, None);
        assert!(result.terminated);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(state.phase, Phase::Over(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = seeded_engine();

        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::new(Position::new(5, 5), 5);
        let mut state = GameState::new(snake, Food::default(), 10, 10);
        state.phase = Phase::Playing;
        state.food.place_at(Position::new(9, 9));

        engine.step(&mut state, Some(Direction::Down));
        engine.step(&mut state, Some(Direction::Left));
        let result = engine.step(&mut state, Some(Direction::Up));

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = seeded_engine();
        let mut state = playing(&mut engine);
        state.food.place_at(Position::new(0, 0));

        engine.step(&mut state, Some(Direction::Left));

        assert_eq!(state.snake.current_direction(), Direction::Right);
        assert_eq!(state.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_filling_the_board_wins() {
        let mut engine = seeded_engine();
        // 5x1 strip, snake covering x = 0..=3 heading right with growth due
        let mut snake = Snake::from_segments(
            (0..4).rev().map(|x| Position::new(x, 0)).collect(),
            Direction::Right,
        )
        .unwrap();
        snake.grow();
        let mut state = GameState::new(snake, Food::default(), 5, 1);
        state.phase = Phase::Playing;
        state.food.place_at(Position::new(4, 0));

        let result = engine.step(&mut state, None);
        assert_eq!(state.snake.len(), 5);
        assert!(result.info.ate_food);
        assert!(result.info.board_full);
        assert!(result.terminated);
        assert_eq!(state.phase, Phase::Won);
    }

    #[test]
    fn test_end_to_end_eat_scenario() {
        // An all-zero generator always draws (0, 0), keeping the outcome fixed
        let mut rng = StepRng::new(0, 0);
        let mut snake = Snake::new(Position::new(5, 5), 3);
        let mut food = Food::default();
        food.place_at(Position::new(6, 5));

        snake.advance();
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(food.is_eaten_by(&snake));

        snake.grow();
        let placement = food.relocate(10, 10, &snake, 400, &mut rng);
        snake.advance();
        assert_eq!(snake.len(), 4);

        let Placement::Placed(pos) = placement else {
            panic!("board has room");
        };
        let excluded = [
            Position::new(6, 5),
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ];
        assert!(!excluded.contains(&pos));
        assert!(!snake.occupies(pos));
    }

    #[test]
    fn test_restart_matches_fresh_state() {
        let mut engine = seeded_engine();
        let mut state = playing(&mut engine);
        state.food.place_at(Position::new(0, 0));
        while !engine.step(&mut state, Some(Direction::Up)).terminated {}
        assert_eq!(state.phase, Phase::Over(CollisionType::Wall));

        engine.restart(&mut state);

        let fresh = Snake::new(Position::new(5, 5), 3);
        assert_eq!(state.snake, fresh);
        assert_eq!(state.snake.current_direction(), Direction::Right);
        assert!(!state.snake.growth_pending());
        assert_eq!(state.snake.growth_frames(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Ready);
        assert!(!state.snake.occupies(state.food.position()));
    }
}
