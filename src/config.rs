use ratatui::style::Color;

use crate::apple::SpawnPolicy;

/// Logical grid dimensions in tiles.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of tiles in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Rules that shape one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Segment count the snake has after every reset.
    pub initial_length: usize,
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            initial_length: INITIAL_BODY_PARTS,
            spawn_policy: SpawnPolicy::Anywhere,
        }
    }
}

/// Colour palette applied to the board, HUD and overlays.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Background of even tiles.
    pub field: Color,
    /// Background of odd tiles, drawn as the grid pattern.
    pub field_alt: Color,
    pub border: Color,
    pub apple: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    /// Titles and panel borders.
    pub primary: Color,
    /// Prompts and score values.
    pub secondary: Color,
    /// Game-over title.
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
}

/// Green meadow board with an orange snake.
pub const THEME_MEADOW: Theme = Theme {
    name: "Meadow",
    field: Color::Rgb(127, 194, 155),
    field_alt: Color::Rgb(90, 175, 125),
    border: Color::Rgb(122, 40, 203),
    apple: Color::Rgb(249, 57, 67),
    snake_head: Color::Rgb(255, 187, 51),
    snake_body: Color::Rgb(255, 200, 87),
    primary: Color::Rgb(122, 40, 203),
    secondary: Color::Rgb(255, 187, 51),
    accent: Color::Rgb(249, 57, 67),
    text: Color::White,
    muted: Color::DarkGray,
};

/// Default board width in tiles.
pub const DEFAULT_GRID_WIDTH: u16 = 24;

/// Default board height in tiles.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Smallest accepted board edge.
pub const MIN_GRID_EDGE: u16 = 8;

/// Largest accepted board edge.
pub const MAX_GRID_EDGE: u16 = 120;

/// Segment count of a freshly reset snake.
pub const INITIAL_BODY_PARTS: usize = 6;

/// Tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Maximum tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Terminal columns used to draw one tile so tiles look square.
pub const TILE_WIDTH: u16 = 2;

/// Glyph pair drawn for one snake or apple tile.
pub const GLYPH_TILE: &str = "██";
