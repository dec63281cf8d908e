use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{GLYPH_TILE, GridSize, TILE_WIDTH, Theme};
use crate::game::{GameState, Mode};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Rows taken by the HUD above and below the board.
const HUD_ROWS: u16 = 2;

/// Terminal columns and rows needed to draw `grid` with borders and HUD.
#[must_use]
pub fn required_size(grid: GridSize) -> (u16, u16) {
    let width = grid.width.saturating_mul(TILE_WIDTH).saturating_add(2);
    let height = grid.height.saturating_add(2 + HUD_ROWS);
    (width, height)
}

/// Renders the full frame from a read-only snapshot of the game.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let (width, height) = required_size(state.grid());
    if area.width < width || area.height < height {
        render_too_small(frame, area, (width, height), hud_info.theme);
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [screen] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let board = render_hud(frame, screen, state, hud_info);
    let theme = hud_info.theme;
    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_field(frame, inner, state.grid(), theme);
    render_apple(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.mode {
        Mode::Menu => render_start_menu(frame, board, hud_info.best_score, theme),
        Mode::Paused => render_pause_menu(frame, board, state.score, theme),
        Mode::GameOver => render_game_over_menu(
            frame,
            board,
            state.score,
            hud_info.previous_best,
            state.death_reason,
            theme,
        ),
        Mode::Running => {}
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed: (u16, u16), theme: &Theme) {
    let message = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        needed.0, needed.1, area.width, area.height
    );
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(theme.accent)),
        area,
    );
}

fn render_field(frame: &mut Frame<'_>, inner: Rect, grid: GridSize, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let Some((column, row)) = tile_to_terminal(inner, grid, Position { x, y }) else {
                continue;
            };

            let bg = if (x + y) % 2 == 0 {
                theme.field
            } else {
                theme.field_alt
            };
            buffer.set_string(column, row, "  ", Style::new().bg(bg));
        }
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = tile_to_terminal(inner, state.grid(), state.apple.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_TILE, Style::new().fg(theme.apple));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins on tiles shared while coiled.
    let segments: Vec<&Position> = state.snake.segments().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = tile_to_terminal(inner, state.grid(), **segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_TILE, style);
    }
}

/// Maps a tile to the terminal cell of its left half, if visible.
fn tile_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(TILE_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(TILE_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use super::{render, required_size, tile_to_terminal};
    use crate::config::{GameConfig, GridSize, THEME_MEADOW};
    use crate::game::GameState;
    use crate::input::Intent;
    use crate::snake::Position;
    use crate::ui::hud::HudInfo;

    const INFO: HudInfo<'static> = HudInfo {
        best_score: 7,
        previous_best: 7,
        theme: &THEME_MEADOW,
    };

    fn draw(state: &GameState, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend is infallible");
        terminal
            .draw(|frame| render(frame, state, &INFO))
            .expect("drawing to the test backend should succeed");
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn required_size_accounts_for_borders_and_hud() {
        assert_eq!(required_size(GridSize::default()), (50, 28));
    }

    #[test]
    fn tiles_map_to_two_column_cells() {
        let inner = Rect::new(1, 2, 48, 24);
        let grid = GridSize::default();

        assert_eq!(tile_to_terminal(inner, grid, Position::new(0, 0)), Some((1, 2)));
        assert_eq!(tile_to_terminal(inner, grid, Position::new(3, 1)), Some((7, 3)));
        assert_eq!(tile_to_terminal(inner, grid, Position::new(-1, 0)), None);
        assert_eq!(tile_to_terminal(inner, grid, Position::new(24, 0)), None);
    }

    #[test]
    fn menu_frame_shows_start_prompt_and_best_score() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);

        let text = draw(&state, 60, 30);

        assert!(text.contains("Press SPACE to Start"));
        assert!(text.contains("Best: 7"));
    }

    #[test]
    fn running_frame_shows_score_without_overlay() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 2);
        state.apply_input(Intent::Start);

        let text = draw(&state, 60, 30);

        assert!(text.contains("Score: 0"));
        assert!(text.contains("Esc: Pause"));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn paused_frame_shows_resume_prompt() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 3);
        state.apply_input(Intent::Start);
        state.apply_input(Intent::TogglePause);

        let text = draw(&state, 60, 30);

        assert!(text.contains("PAUSED"));
        assert!(text.contains("Press ESC to Resume"));
    }

    #[test]
    fn small_terminal_gets_a_notice() {
        let state = GameState::new_with_seed(GameConfig::default(), 4);

        let text = draw(&state, 40, 10);

        assert!(text.contains("Terminal too small"));
    }
}
