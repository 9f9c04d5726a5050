use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Painter;
use crate::game::{GameState, Phase, Position};
use crate::metrics::GameMetrics;

const SNAKE: char = 'O';
const FOOD: char = '*';
const EMPTY: char = ' ';

/// Plain character board for the classic variant
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePainter;

impl ConsolePainter {
    pub fn new() -> Self {
        Self
    }

    /// The board as one string per row
    pub fn board_rows(&self, state: &GameState) -> Vec<String> {
        let mut rows = vec![vec![EMPTY; state.grid_width]; state.grid_height];

        let mut put = |pos: Position, glyph: char| {
            if state.is_in_bounds(pos) {
                rows[pos.y as usize][pos.x as usize] = glyph;
            }
        };

        for &segment in state.snake.segments() {
            put(segment, SNAKE);
        }
        if state.food.is_active() {
            put(state.food.position(), FOOD);
        }

        rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    fn status_line(&self, state: &GameState) -> String {
        match state.phase {
            Phase::Ready => "Press Space to start".to_string(),
            Phase::Playing => format!("Score: {}", state.score),
            Phase::Paused => format!("Score: {}  (paused)", state.score),
            Phase::Over(_) | Phase::Won => {
                format!("Game Over! Score: {}  R to restart, Q to quit", state.score)
            }
        }
    }
}

impl Painter for ConsolePainter {
    fn paint(&self, frame: &mut Frame, state: &GameState, _metrics: &GameMetrics) {
        let board_height = u16::try_from(state.grid_height)
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let board_width = u16::try_from(state.grid_width)
            .unwrap_or(u16::MAX)
            .saturating_add(2);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(board_width), Constraint::Min(0)])
            .split(rows[0]);

        let board: Vec<Line> = self.board_rows(state).into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(board).block(Block::default().borders(Borders::ALL)),
            columns[0],
        );
        frame.render_widget(Paragraph::new(self.status_line(state)), rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Food, Snake};
    use crate::render::{Renderable, TerminalSurface, test_support::screen_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn state() -> GameState {
        let mut food = Food::default();
        food.place_at(Position::new(1, 1));
        let mut state = GameState::new(Snake::new(Position::new(5, 2), 3), food, 8, 4);
        state.phase = Phase::Playing;
        state
    }

    #[test]
    fn test_board_rows() {
        let rows = ConsolePainter::new().board_rows(&state());
        assert_eq!(
            rows,
            vec![
                "        ".to_string(),
                " *      ".to_string(),
                "   OOO  ".to_string(),
                "        ".to_string(),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_head_is_skipped() {
        let mut state = state();
        let snake = Snake::from_segments(
            vec![Position::new(8, 2), Position::new(7, 2)],
            crate::game::Direction::Right,
        )
        .unwrap();
        state.snake = snake;

        let rows = ConsolePainter::new().board_rows(&state);
        assert_eq!(rows[2], "       O");
    }

    #[test]
    fn test_tall_board_is_clipped_not_fatal() {
        let terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        let mut surface = TerminalSurface::new(terminal, ConsolePainter::new());
        let state = GameState::new(
            Snake::new(Position::new(2, 0), 3),
            Food::default(),
            5,
            65_534,
        );

        surface.render(&state, &GameMetrics::new()).unwrap();
        assert!(screen_text(surface.backend()).contains("OOO"));
    }

    #[test]
    fn test_game_over_frame() {
        let terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut surface = TerminalSurface::new(terminal, ConsolePainter::new());
        let mut state = state();
        state.phase = Phase::Over(CollisionType::Wall);
        state.score = 20;

        surface.render(&state, &GameMetrics::new()).unwrap();

        let text = screen_text(surface.backend());
        assert!(text.contains("Game Over! Score: 20"));
        assert!(text.contains("OOO"));
    }
}
