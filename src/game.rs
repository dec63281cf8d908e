use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::{GameConfig, GridSize};
use crate::input::{Direction, Intent};
use crate::snake::{Position, Snake};

/// Tile every fresh snake starts on.
pub const START_POSITION: Position = Position { x: 0, y: 0 };

/// Heading every fresh snake starts with.
pub const START_DIRECTION: Direction = Direction::Right;

/// Coarse game phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Menu,
    Running,
    Paused,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one [`GameState::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// Not running; nothing changed.
    Idle,
    Moved,
    AteApple,
    Crashed(DeathReason),
}

/// Whether the process should keep going after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Exit,
}

/// Complete mutable game state for one process.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub mode: Mode,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state in [`Mode::Menu`] seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = fresh_snake(&config);
        let apple = Apple::spawn(&mut rng, config.grid, &snake, config.spawn_policy);

        Self {
            snake,
            apple,
            score: 0,
            mode: Mode::Menu,
            death_reason: None,
            tick_count: 0,
            config,
            rng,
        }
    }

    /// Reinitialises snake, score, heading and apple and starts running.
    pub fn reset(&mut self) {
        self.snake = fresh_snake(&self.config);
        self.apple = Apple::spawn(
            &mut self.rng,
            self.config.grid,
            &self.snake,
            self.config.spawn_policy,
        );
        self.score = 0;
        self.death_reason = None;
        self.tick_count = 0;
        self.mode = Mode::Running;
    }

    /// Advances the simulation by one tick.
    ///
    /// Only mutates state while [`Mode::Running`]. Order: move, eat, collide,
    /// so an apple on the fatal tile still counts toward the final score.
    pub fn advance(&mut self) -> TickEvent {
        if self.mode != Mode::Running {
            return TickEvent::Idle;
        }

        self.tick_count += 1;
        self.snake.advance();

        let head = self.snake.head();
        let mut event = TickEvent::Moved;
        if head == self.apple.position {
            self.snake.grow();
            self.score += 1;
            self.apple = Apple::spawn(
                &mut self.rng,
                self.config.grid,
                &self.snake,
                self.config.spawn_policy,
            );
            debug!(
                "apple eaten at ({}, {}), score {}, next apple at ({}, {})",
                head.x, head.y, self.score, self.apple.position.x, self.apple.position.y
            );
            event = TickEvent::AteApple;
        }

        let crash = if !head.is_within_bounds(self.config.grid) {
            Some(DeathReason::WallCollision)
        } else if self.snake.head_overlaps_body() {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = crash {
            self.mode = Mode::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {reason:?}, score {}",
                self.tick_count, self.score
            );
            return TickEvent::Crashed(reason);
        }

        event
    }

    /// Applies one input intent. Unsupported combinations are ignored.
    pub fn apply_input(&mut self, intent: Intent) -> Control {
        match (self.mode, intent) {
            (Mode::Menu | Mode::GameOver, Intent::Start) => {
                self.reset();
                info!("game started on a {}x{} grid", self.grid().width, self.grid().height);
            }
            (Mode::Menu | Mode::GameOver, Intent::Quit) => return Control::Exit,
            (Mode::Running, Intent::TogglePause) => {
                self.mode = Mode::Paused;
                debug!("paused at tick {}", self.tick_count);
            }
            (Mode::Paused, Intent::TogglePause) => {
                self.mode = Mode::Running;
                debug!("resumed at tick {}", self.tick_count);
            }
            (Mode::Running, Intent::Move(direction)) => {
                if !self.snake.turn(direction) {
                    debug!("rejected reversal {:?} -> {direction:?}", self.snake.direction());
                }
            }
            _ => {}
        }

        Control::Continue
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn fresh_snake(config: &GameConfig) -> Snake {
    Snake::coiled(START_POSITION, config.initial_length, START_DIRECTION)
}

#[cfg(test)]
mod tests {
    use crate::apple::Apple;
    use crate::config::{GameConfig, GridSize, INITIAL_BODY_PARTS};
    use crate::input::{Direction, Intent};
    use crate::snake::{Position, Snake};

    use super::{Control, DeathReason, GameState, Mode, TickEvent, START_DIRECTION};

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(GameConfig::default(), seed);
        state.apply_input(Intent::Start);
        state
    }

    fn small_config(width: u16, height: u16) -> GameConfig {
        GameConfig {
            grid: GridSize { width, height },
            ..GameConfig::default()
        }
    }

    #[test]
    fn new_state_waits_in_menu() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);

        assert_eq!(state.mode, Mode::Menu);
        assert_eq!(state.advance(), TickEvent::Idle);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn start_from_menu_resets_and_runs() {
        let state = running_state(2);

        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.snake.len(), INITIAL_BODY_PARTS);
        assert_eq!(state.snake.head(), Position::new(0, 0));
        assert_eq!(state.direction(), START_DIRECTION);
        assert_eq!(state.score, 0);
        assert!(state.apple.position.is_within_bounds(state.grid()));
    }

    #[test]
    fn three_ticks_move_head_three_tiles_right() {
        let mut state = running_state(3);
        state.apple = Apple::at(Position::new(10, 10));

        for _ in 0..3 {
            assert_eq!(state.advance(), TickEvent::Moved);
        }

        assert_eq!(state.snake.head(), Position::new(3, 0));
        assert_eq!(state.snake.len(), INITIAL_BODY_PARTS);
    }

    #[test]
    fn eating_apple_grows_by_one_and_scores() {
        let mut state = running_state(4);
        state.apple = Apple::at(Position::new(3, 0));

        state.advance();
        state.advance();
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 6);

        assert_eq!(state.advance(), TickEvent::AteApple);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 7);
        assert_eq!(state.snake.head(), Position::new(3, 0));
    }

    #[test]
    fn leaving_the_left_edge_ends_the_game() {
        let mut state = running_state(5);
        state.snake = Snake::coiled(Position::new(0, 0), 6, Direction::Left);
        state.apple = Apple::at(Position::new(10, 10));

        assert_eq!(
            state.advance(),
            TickEvent::Crashed(DeathReason::WallCollision)
        );
        assert_eq!(state.snake.head(), Position::new(-1, 0));
        assert_eq!(state.mode, Mode::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    }

    #[test]
    fn every_edge_is_a_wall() {
        let cases = [
            (Position::new(3, 0), Direction::Up),
            (Position::new(3, 7), Direction::Down),
            (Position::new(0, 3), Direction::Left),
            (Position::new(7, 3), Direction::Right),
        ];

        for (start, direction) in cases {
            let mut state = GameState::new_with_seed(small_config(8, 8), 6);
            state.apply_input(Intent::Start);
            state.snake = Snake::coiled(start, 1, direction);
            state.apple = Apple::at(Position::new(4, 4));

            state.advance();

            assert_eq!(state.mode, Mode::GameOver, "{direction:?} from {start:?}");
        }
    }

    #[test]
    fn running_into_body_ends_the_game() {
        let mut state = GameState::new_with_seed(small_config(8, 8), 7);
        state.apply_input(Intent::Start);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
            ],
            Direction::Left,
        );
        state.apple = Apple::at(Position::new(6, 6));

        assert_eq!(
            state.advance(),
            TickEvent::Crashed(DeathReason::SelfCollision)
        );
        assert_eq!(state.mode, Mode::GameOver);
    }

    #[test]
    fn head_may_follow_the_tail_into_its_vacated_tile() {
        let mut state = GameState::new_with_seed(small_config(8, 8), 8);
        state.apply_input(Intent::Start);
        state.snake = Snake::from_segments(
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
            ],
            Direction::Right,
        );
        state.apple = Apple::at(Position::new(6, 6));

        assert_eq!(state.advance(), TickEvent::Moved);
        assert_eq!(state.mode, Mode::Running);
    }

    #[test]
    fn game_over_freezes_state_until_reset() {
        let mut state = running_state(9);
        state.snake = Snake::coiled(Position::new(0, 0), 6, Direction::Up);
        state.advance();
        assert_eq!(state.mode, Mode::GameOver);

        let head = state.snake.head();
        let ticks = state.tick_count;
        for _ in 0..5 {
            assert_eq!(state.advance(), TickEvent::Idle);
        }
        state.apply_input(Intent::Move(Direction::Down));

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.tick_count, ticks);
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn opposite_inputs_are_rejected_for_every_pair() {
        let pairs = [
            (Direction::Right, Direction::Left),
            (Direction::Left, Direction::Right),
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
        ];

        for (current, reverse) in pairs {
            let mut state = running_state(10);
            state.snake = Snake::coiled(Position::new(5, 5), 6, current);

            state.apply_input(Intent::Move(reverse));

            assert_eq!(state.direction(), current);
        }
    }

    #[test]
    fn perpendicular_input_changes_direction_immediately() {
        let mut state = running_state(11);

        state.apply_input(Intent::Move(Direction::Down));

        assert_eq!(state.direction(), Direction::Down);
    }

    #[test]
    fn pause_toggles_and_blocks_ticks_and_moves() {
        let mut state = running_state(12);
        state.apple = Apple::at(Position::new(10, 10));

        state.apply_input(Intent::TogglePause);
        assert_eq!(state.mode, Mode::Paused);
        assert_eq!(state.advance(), TickEvent::Idle);
        state.apply_input(Intent::Move(Direction::Down));
        assert_eq!(state.direction(), Direction::Right);

        state.apply_input(Intent::TogglePause);
        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.advance(), TickEvent::Moved);
        assert_eq!(state.snake.head(), Position::new(1, 0));
    }

    #[test]
    fn pause_is_ignored_outside_a_game() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 13);

        state.apply_input(Intent::TogglePause);

        assert_eq!(state.mode, Mode::Menu);
    }

    #[test]
    fn quit_exits_only_from_menu_or_game_over() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 14);
        assert_eq!(state.apply_input(Intent::Quit), Control::Exit);

        state.apply_input(Intent::Start);
        assert_eq!(state.apply_input(Intent::Quit), Control::Continue);
        state.apply_input(Intent::TogglePause);
        assert_eq!(state.apply_input(Intent::Quit), Control::Continue);

        state.mode = Mode::GameOver;
        assert_eq!(state.apply_input(Intent::Quit), Control::Exit);
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut state = running_state(15);
        state.apple = Apple::at(Position::new(10, 10));
        state.advance();

        state.apply_input(Intent::Start);

        assert_eq!(state.snake.head(), Position::new(1, 0));
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn restart_after_game_over_restores_initial_state() {
        let mut state = running_state(16);
        state.apple = Apple::at(Position::new(1, 0));
        state.advance();
        state.apply_input(Intent::Move(Direction::Up));
        state.advance();
        assert_eq!(state.mode, Mode::GameOver);
        assert_eq!(state.score, 1);

        state.apply_input(Intent::Start);
        let first = (state.snake.len(), state.score, state.direction(), state.mode);
        state.reset();
        let second = (state.snake.len(), state.score, state.direction(), state.mode);

        assert_eq!(first, (INITIAL_BODY_PARTS, 0, START_DIRECTION, Mode::Running));
        assert_eq!(first, second);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn length_changes_only_when_an_apple_is_eaten() {
        let mut state = running_state(17);
        let turns = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];

        for tick in 0..400_usize {
            if tick % 5 == 0 {
                state.apply_input(Intent::Move(turns[(tick / 5) % turns.len()]));
            }

            let (length, score) = (state.snake.len(), state.score);
            match state.advance() {
                TickEvent::Moved => {
                    assert_eq!(state.snake.len(), length);
                    assert_eq!(state.score, score);
                }
                TickEvent::AteApple => {
                    assert_eq!(state.snake.len(), length + 1);
                    assert_eq!(state.score, score + 1);
                }
                TickEvent::Crashed(_) | TickEvent::Idle => break,
            }
        }
    }
}
