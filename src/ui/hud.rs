use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{GameState, Mode};

/// Values shown by the HUD that do not live in [`GameState`].
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best score across sessions, including the current one.
    pub best_score: u32,
    /// Best score as it stood when the current game started.
    pub previous_best: u32,
    pub theme: &'a Theme,
}

/// Renders the score row above and the hint row below the board.
///
/// Returns the area left for the bordered board.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) -> Rect {
    let [score_area, board_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [_, score_cell, best_cell] = Layout::horizontal([Constraint::Fill(1); 3]).areas(score_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Score: {}", state.score),
            Style::new()
                .fg(info.theme.secondary)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        score_cell,
    );
    frame.render_widget(
        Paragraph::new(format!("Best: {}", info.best_score))
            .alignment(Alignment::Right)
            .style(Style::new().fg(info.theme.muted)),
        best_cell,
    );

    let [hint_cell, length_cell] = Layout::horizontal([Constraint::Min(0), Constraint::Length(12)])
        .areas(hint_area);
    frame.render_widget(
        Paragraph::new(controls_hint(state.mode)).style(Style::new().fg(info.theme.muted)),
        hint_cell,
    );
    frame.render_widget(
        Paragraph::new(format!("Length: {}", state.snake.len()))
            .alignment(Alignment::Right)
            .style(Style::new().fg(info.theme.muted)),
        length_cell,
    );

    board_area
}

fn controls_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Running => "Esc: Pause",
        Mode::Paused => "Esc: Resume",
        Mode::Menu | Mode::GameOver => "Space: Play  Esc: Exit",
    }
}
