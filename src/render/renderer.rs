use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Painter, Skin};
use crate::game::{CollisionType, GameState, Phase, Position};
use crate::metrics::GameMetrics;

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;
/// Narrowest game area, so the start screen text fits on small boards
const MIN_AREA_WIDTH: u16 = 32;

/// Full-screen painter for the arcade variant
pub struct ArcadePainter {
    skin: Skin,
}

impl ArcadePainter {
    pub fn new(skin: Skin) -> Self {
        Self { skin }
    }

    /// Columns and rows needed to show a `grid_width` x `grid_height` board in full
    pub fn required_size(grid_width: usize, grid_height: usize) -> (u16, u16) {
        let (width, height) = Self::board_size(grid_width, grid_height);
        (width, height.saturating_add(HEADER_ROWS + FOOTER_ROWS))
    }

    /// Bordered board, two columns per cell
    fn board_size(grid_width: usize, grid_height: usize) -> (u16, u16) {
        let edge = |cells: usize| u16::try_from(cells).unwrap_or(u16::MAX);
        (
            edge(grid_width).saturating_mul(2).saturating_add(2),
            edge(grid_height).saturating_add(2),
        )
    }

    fn render_too_small(&self, need: (u16, u16), have: Rect) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "need {}x{}, have {}x{}",
                need.0, need.1, have.width, have.height
            )),
            Line::from("Enlarge the window or pick a smaller --width/--height"),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let snake = &state.snake;
        // The cell kept by the last growth stays highlighted while the counter runs
        let fresh_tail = snake
            .segments()
            .last()
            .copied()
            .filter(|_| snake.growth_frames() > 0);
        let food = state.food.is_active().then(|| state.food.position());
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..state.grid_height {
            let mut spans = Vec::with_capacity(state.grid_width);

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == snake.head() {
                    Span::styled(
                        format!("{} ", self.skin.head_for(snake.current_direction())),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.collides_with_body(pos) {
                    if Some(pos) == fresh_tail {
                        Span::styled(
                            format!("{} ", self.skin.fresh_body),
                            Style::default().fg(Color::LightGreen),
                        )
                    } else {
                        Span::styled(
                            format!("{} ", self.skin.body),
                            Style::default().fg(Color::Green),
                        )
                    }
                } else if Some(pos) == food {
                    Span::styled(
                        format!("{} ", self.skin.food),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        format!("{} ", self.skin.empty),
                        Style::default().fg(Color::DarkGray),
                    )
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let (title, border) = match state.phase {
            Phase::Paused => (" Paused ", Color::Yellow),
            Phase::Over(_) => (" Game Over ", Color::Red),
            Phase::Won => (" Board Cleared ", Color::Green),
            _ => (" Snake ", Color::White),
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        if metrics.rounds_played > 0 {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Best score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_footer(&self, state: &GameState) -> Paragraph<'_> {
        let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color));

        let line = match state.phase {
            Phase::Ready => Line::from(vec![
                key("Space", Color::Green),
                Span::raw(" to start | "),
                key("Q", Color::Red),
                Span::raw(" to quit"),
            ]),
            Phase::Playing => Line::from(vec![
                key("↑↓←→", Color::Cyan),
                Span::raw(" or "),
                key("WASD", Color::Cyan),
                Span::raw(" to move | "),
                key("P", Color::Yellow),
                Span::raw(" to pause | "),
                key("Q", Color::Red),
                Span::raw(" to quit"),
            ]),
            Phase::Paused => Line::from(vec![
                key("P", Color::Yellow),
                Span::raw(" to resume | "),
                key("R", Color::Green),
                Span::raw(" to restart | "),
                key("M", Color::Magenta),
                Span::raw(" for sound"),
            ]),
            Phase::Over(_) | Phase::Won => {
                let reason = match state.phase {
                    Phase::Over(CollisionType::Wall) => "Hit the wall. ",
                    Phase::Over(CollisionType::SelfCollision) => "Bit your own tail. ",
                    _ => "No room left. ",
                };
                Line::from(vec![
                    Span::styled(reason, Style::default().fg(Color::Red)),
                    Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        state.score.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" | "),
                    key("Space", Color::Green),
                    Span::raw(" to play again | "),
                    key("Q", Color::Red),
                    Span::raw(" to quit"),
                ])
            }
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for ArcadePainter {
    fn default() -> Self {
        Self::new(Skin::default())
    }
}

impl Painter for ArcadePainter {
    fn paint(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let area = frame.area();
        let need = Self::required_size(state.grid_width, state.grid_height);
        if area.width < need.0 || area.height < need.1 {
            frame.render_widget(self.render_too_small(need, area), area);
            return;
        }

        let (board_width, board_height) = Self::board_size(state.grid_width, state.grid_height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),  // Header
                Constraint::Length(board_height), // Game area
                Constraint::Length(FOOTER_ROWS),  // Footer
            ])
            .split(area);

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Center the game grid horizontally, sized to the board
        let game_area: Rect = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(
                board_width.max(MIN_AREA_WIDTH).min(area.width),
            )])
            .flex(Flex::Center)
            .split(chunks[1])[0];

        // The terminal frame of a finished round still shows the board
        if state.phase == Phase::Ready {
            frame.render_widget(self.render_start_screen(metrics), game_area);
        } else {
            frame.render_widget(self.render_grid(state), game_area);
        }

        frame.render_widget(self.render_footer(state), chunks[2]);
    }
}
