use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, best_score: u32, theme: &Theme) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("S N A K E"))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(theme.primary)))
            .style(Style::new().fg(theme.primary).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let body = vec![
        Line::styled(
            "Press SPACE to Start",
            Style::new()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Controls:"),
        Line::from("Arrow Keys or WASD to move"),
        Line::from("ESC to pause"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text)),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(format!("Best score: {best_score}")))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.muted)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            "PAUSED",
            Style::new().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::styled("Press ESC to Resume", Style::new().fg(theme.secondary)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text))
            .block(Block::bordered().border_style(Style::new().fg(theme.primary))),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    previous_best: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let is_new_best = score > previous_best;
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::styled("Final Score", Style::new().fg(theme.secondary)),
        Line::styled(
            score.to_string(),
            Style::new().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Line::from(if is_new_best {
            "New best score!".to_owned()
        } else {
            format!("Best: {previous_best}")
        }),
        Line::from(""),
        Line::styled("Press SPACE to Restart", Style::new().fg(theme.secondary)),
        Line::from("Press ESC to Exit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.text))
            .block(Block::bordered().border_style(Style::new().fg(theme.primary))),
        popup,
    );
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "You hit the wall",
        Some(DeathReason::SelfCollision) => "You bit yourself",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_popup, death_cause};
    use crate::game::DeathReason;

    #[test]
    fn popup_is_centered_inside_area() {
        let area = Rect::new(0, 0, 100, 50);

        let popup = centered_popup(area, 60, 40);

        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn death_cause_names_the_collision() {
        assert_eq!(death_cause(Some(DeathReason::WallCollision)), "You hit the wall");
        assert_eq!(death_cause(Some(DeathReason::SelfCollision)), "You bit yourself");
        assert_eq!(death_cause(None), "");
    }
}
