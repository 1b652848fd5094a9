use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GamePhase, GameState, Position};
use crate::metrics::SessionMetrics;

/// Mode-specific bits of the frame: badges for the header and the key help
/// for the footer
pub struct Hud {
    pub mode: &'static str,
    pub speed: Option<&'static str>,
    pub paused: bool,
    pub controls: &'static str,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &SessionMetrics, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(state, metrics, hud), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase {
            GamePhase::Running => {
                frame.render_widget(self.render_grid(game_area, state), game_area);
            }
            GamePhase::GameOver {
                ended_at,
                final_score,
            } => {
                let panel = self.render_game_over(final_score, ended_at);
                frame.render_widget(panel, game_area);
            }
        }

        frame.render_widget(self.render_controls(hud), chunks[2]);
    }

    fn render_header(
        &self,
        state: &GameState,
        metrics: &SessionMetrics,
        hud: &Hud,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let stats = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.snake.score.to_string(), value),
            Span::raw("   "),
            Span::styled("Ticks: ", label),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_elapsed(), Style::default().fg(Color::White)),
            Span::raw("   "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("   "),
            Span::styled("Games: ", label),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ]);

        let mut badges = vec![Span::styled(
            hud.mode,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(speed) = hud.speed {
            badges.push(Span::raw("  "));
            badges.push(Span::styled(speed, Style::default().fg(Color::Magenta)));
        }
        if hud.paused {
            badges.push(Span::raw("  "));
            badges.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![stats, Line::from(badges)]).alignment(Alignment::Center)
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid.height);

        for y in 0..state.grid.height {
            let mut spans = Vec::with_capacity(state.grid.width);

            for x in 0..state.grid.width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        "█ ",
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.body.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_game_over(&self, final_score: u32, ended_at: SystemTime) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Ended at: ", Style::default().fg(Color::Yellow)),
                Span::styled(format_clock(ended_at), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, hud: &Hud) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            hud.controls,
            Style::default().fg(Color::Cyan),
        )))
        .alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock time of day as hh:mm:ss (UTC); enough for the game-over
/// screen without pulling in a calendar crate
fn format_clock(time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let in_day = secs % 86_400;
    format!(
        "{:02}:{:02}:{:02} UTC",
        in_day / 3_600,
        (in_day % 3_600) / 60,
        in_day % 60
    )
}
