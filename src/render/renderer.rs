use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, GameSnapshot, Phase};
use crate::metrics::GameMetrics;
use crate::settings::GameSettings;

use super::theme::Palette;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
        settings: &GameSettings,
    ) {
        let palette = settings.theme.palette();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics, palette);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.phase {
            Phase::NotStarted => {
                let banner = self.render_start_banner(palette);
                frame.render_widget(banner, game_area);
            }
            Phase::Over => {
                let game_over = self.render_game_over(snapshot, metrics, palette);
                frame.render_widget(game_over, game_area);
            }
            Phase::Running | Phase::Paused => {
                let grid = self.render_grid(snapshot, palette, settings.show_grid);
                frame.render_widget(grid, game_area);
            }
        }

        let controls = self.render_controls(palette);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(
        &self,
        snapshot: &GameSnapshot,
        palette: &Palette,
        show_grid: bool,
    ) -> Paragraph<'_> {
        let head = snapshot.snake[0];
        let mut lines = Vec::new();

        for y in 0..snapshot.rows {
            let mut spans = Vec::new();

            for x in 0..snapshot.columns {
                let pos = Cell::new(x, y);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(palette.snake_head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(palette.snake_body))
                } else if pos == snapshot.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(palette.food).add_modifier(Modifier::BOLD),
                    )
                } else if show_grid {
                    Span::styled(". ", Style::default().fg(palette.grid))
                } else {
                    Span::raw("  ")
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let (title, border_color) = if snapshot.phase == Phase::Paused {
            (" PAUSED - Space resumes ", palette.accent)
        } else {
            (" Snake ", palette.text)
        };

        Paragraph::new(lines)
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
        palette: &Palette,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(palette.accent)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(palette.accent)),
            Span::styled(
                metrics.stats.high_score.to_string(),
                Style::default().fg(palette.text),
            ),
            Span::raw("    "),
            Span::styled("Streak: ", Style::default().fg(palette.accent)),
            Span::styled(
                format!("{} (best {})", metrics.current_streak, metrics.stats.best_streak),
                Style::default().fg(palette.text),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(palette.accent)),
            Span::styled(metrics.format_time(), Style::default().fg(palette.text)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_banner(&self, palette: &Palette) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(palette.snake_head)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press SPACE to start",
                Style::default().fg(palette.text),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
    }

    fn render_game_over(
        &self,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
        palette: &Palette,
    ) -> Paragraph<'_> {
        // The counters were already folded in when the game ended, so a
        // final score that matches the stored high score is a new record.
        let high_line = if snapshot.score > 0 && snapshot.score == metrics.stats.high_score {
            Line::from(vec![Span::styled(
                "New high score!",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )])
        } else {
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(palette.accent)),
                Span::styled(
                    metrics.stats.high_score.to_string(),
                    Style::default().fg(palette.text),
                ),
            ])
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(palette.food).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(palette.accent)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            high_line,
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(palette.grid)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(palette.snake_head)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(palette.grid)),
                Span::styled(
                    "Q",
                    Style::default().fg(palette.food).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(palette.grid)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.food)),
        )
    }

    fn render_controls(&self, palette: &Palette) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(palette.accent)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(palette.accent)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(palette.accent)),
            Span::raw(" to start/pause | "),
            Span::styled("T", Style::default().fg(palette.accent)),
            Span::raw(" theme | "),
            Span::styled("G", Style::default().fg(palette.accent)),
            Span::raw(" grid | "),
            Span::styled("Q", Style::default().fg(palette.food)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
