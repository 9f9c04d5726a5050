use super::action::Direction;
use super::food::Food;

/// Length the snake is seeded with at the start of every round
pub const INITIAL_LENGTH: usize = 3;

/// Ticks the renderer keeps highlighting a freshly grown segment
pub const GROWTH_FRAMES: u8 = 3;

/// Heading of a freshly seeded snake
pub const DEFAULT_DIRECTION: Direction = Direction::Right;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies inside a `width` x `height` grid
    pub fn is_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.x < width as i32 && self.y >= 0 && self.y < height as i32
    }
}

/// The snake in the game
///
/// Growth is deferred: [`Snake::grow`] only raises a flag and the following
/// [`Snake::advance`] keeps the tail. `growth_frames` is a separate decaying
/// counter read by renderers and never consulted by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: Vec<Position>,
    current_direction: Direction,
    pending_direction: Direction,
    growth_pending: bool,
    growth_frames: u8,
}

impl Snake {
    /// Create a snake of `length` cells with its head at `head`, trailing left
    pub fn new(head: Position, length: usize) -> Self {
        let mut snake = Self {
            segments: Vec::new(),
            current_direction: DEFAULT_DIRECTION,
            pending_direction: DEFAULT_DIRECTION,
            growth_pending: false,
            growth_frames: 0,
        };
        snake.reset(head, length);
        snake
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            segments,
            current_direction: direction,
            pending_direction: direction,
            growth_pending: false,
            growth_frames: 0,
        })
    }

    /// Rebuild the body as a straight horizontal run ending at `head`
    pub fn reset(&mut self, head: Position, length: usize) {
        let length = length.max(1);
        self.segments.clear();
        self.segments
            .extend((0..length as i32).map(|i| head.moved_by(-i, 0)));

        self.current_direction = DEFAULT_DIRECTION;
        self.pending_direction = DEFAULT_DIRECTION;
        self.growth_pending = false;
        self.growth_frames = 0;
    }

    /// Queue a new heading for the next tick. Reversals are ignored.
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.current_direction.is_opposite(direction) {
            self.pending_direction = direction;
        }
    }

    /// Move one cell in the pending direction, keeping the tail if growth is due
    pub fn advance(&mut self) {
        self.current_direction = self.pending_direction;
        self.growth_frames = self.growth_frames.saturating_sub(1);

        let new_head = self.head().moved_in_direction(self.current_direction);
        self.segments.insert(0, new_head);

        if self.growth_pending {
            self.growth_pending = false;
            self.growth_frames = GROWTH_FRAMES;
        } else {
            self.segments.pop();
        }
    }

    /// Lengthen by one cell on the next advance
    pub fn grow(&mut self) {
        self.growth_pending = true;
    }

    pub fn check_wall_collision(&self, width: usize, height: usize) -> bool {
        !self.head().is_within(width, height)
    }

    pub fn check_self_collision(&self) -> bool {
        self.collides_with_body(self.head())
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.segments[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

    /// Remaining ticks of the growth highlight
    pub fn growth_frames(&self) -> u8 {
        self.growth_frames
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (never true, the body is seeded non-empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the start screen
    Ready,
    Playing,
    Paused,
    /// Ended by a collision
    Over(CollisionType),
    /// No free cell was left for the food
    Won,
}

impl Phase {
    /// True once the round can no longer tick
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Over(_) | Phase::Won)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            phase: Phase::Ready,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_width, self.grid_height)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Snake {
        Snake::new(Position::new(5, 5), INITIAL_LENGTH)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = seeded();
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.segments(),
            &[Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
        assert_eq!(snake.current_direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_from_segments_rejects_empty_body() {
        assert!(Snake::from_segments(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = seeded();
        let turns = [
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
            Direction::Right,
        ];

        for turn in turns {
            snake.change_direction(turn);
            snake.advance();
            assert_eq!(snake.len(), 3);
        }
        assert!(!snake.growth_pending());
    }

    #[test]
    fn test_growth_is_one_tick_delayed() {
        let mut snake = seeded();

        // Advancing before growing leaves the length alone
        snake.advance();
        assert_eq!(snake.len(), 3);

        snake.grow();
        assert_eq!(snake.len(), 3);
        assert!(snake.growth_pending());

        snake.advance();
        assert_eq!(snake.len(), 4);
        assert!(!snake.growth_pending());

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_growth_frames_decay_without_touching_length() {
        let mut snake = seeded();
        snake.grow();
        snake.advance();
        assert_eq!(snake.growth_frames(), GROWTH_FRAMES);

        for expected in [2, 1, 0, 0] {
            snake.advance();
            assert_eq!(snake.growth_frames(), expected);
            assert_eq!(snake.len(), 4);
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = seeded();
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Right);

        snake.change_direction(Direction::Up);
        assert_eq!(snake.pending_direction(), Direction::Up);

        snake.change_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_reversal_checked_against_current_not_pending() {
        let mut snake = seeded();
        // Up is queued but the snake still travels Right, so Left stays illegal
        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Up);

        snake.advance();
        assert_eq!(snake.head(), Position::new(5, 4));
        snake.change_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Left);
    }

    #[test]
    fn test_wall_collision_boundaries() {
        let at = |x, y| Snake::from_segments(vec![Position::new(x, y)], Direction::Right).unwrap();

        assert!(at(-1, 5).check_wall_collision(40, 20));
        assert!(at(40, 5).check_wall_collision(40, 20));
        assert!(at(5, -1).check_wall_collision(40, 20));
        assert!(at(5, 20).check_wall_collision(40, 20));

        assert!(!at(0, 0).check_wall_collision(40, 20));
        assert!(!at(39, 19).check_wall_collision(40, 20));
    }

    #[test]
    fn test_self_collision() {
        let wrapped = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
                Position::new(5, 5),
            ],
            Direction::Right,
        )
        .unwrap();
        assert!(wrapped.check_self_collision());

        assert!(!seeded().check_self_collision());
    }

    #[test]
    fn test_self_collision_by_turning_into_body() {
        let mut snake = Snake::new(Position::new(5, 5), 5);
        for turn in [Direction::Down, Direction::Left, Direction::Up] {
            snake.change_direction(turn);
            snake.advance();
        }
        assert_eq!(snake.head(), Position::new(4, 5));
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut snake = seeded();
        snake.change_direction(Direction::Up);
        snake.grow();
        snake.advance();
        snake.grow();

        snake.reset(Position::new(5, 5), INITIAL_LENGTH);
        assert_eq!(snake, seeded());
    }

    #[test]
    fn test_collision_detection() {
        let snake = seeded();
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(!snake.occupies(Position::new(9, 9)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(seeded(), Food::default(), 20, 20);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn test_phase_finished() {
        assert!(Phase::Over(CollisionType::Wall).is_finished());
        assert!(Phase::Won.is_finished());
        assert!(!Phase::Paused.is_finished());
        assert!(!Phase::Ready.is_finished());
    }
}
