use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Board is a square grid of this many tiles per side.
pub const GRID_TILES: i32 = 20;
/// Points per food eaten.
pub const FOOD_POINTS: u32 = 10;
/// Tick interval bounds in milliseconds. Each food speeds the game up.
pub const START_SPEED_MS: u64 = 150;
pub const MIN_SPEED_MS: u64 = 80;
pub const SPEED_STEP_MS: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn is_reverse_of(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        let (ox, oy) = other.delta();
        dx == -ox && dy == -oy
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Ate,
    GameOver,
}

/// The snake game's state machine: one `step` per timer tick, direction
/// changes between ticks, terminal on wall or self collision.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    snake: VecDeque<Point>,
    direction: Option<Direction>,
    food: Point,
    score: u32,
    food_eaten: u32,
    speed_ms: u64,
    game_over: bool,
}

impl SnakeGame {
    pub fn new() -> Self {
        let mut game = Self::with_food(Point { x: 0, y: 0 });
        game.food = game.random_food();
        game
    }

    /// Deterministic constructor used by tests and replays: the first food
    /// tile is given instead of rolled.
    pub fn with_food(food: Point) -> Self {
        let mut snake = VecDeque::new();
        snake.push_back(Point { x: 10, y: 10 });
        Self {
            snake,
            direction: None,
            food,
            score: 0,
            food_eaten: 0,
            speed_ms: START_SPEED_MS,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("snake is never empty")
    }

    /// Steer the snake. Reversing into itself is ignored, as is any input
    /// after the game ended.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        if let Some(current) = self.direction {
            if direction.is_reverse_of(current) {
                return;
            }
        }
        self.direction = Some(direction);
    }

    /// Advance one tick. Without a direction yet (game just started) the
    /// snake heads right, like the start button does.
    pub fn step(&mut self) -> StepResult {
        if self.game_over {
            return StepResult::GameOver;
        }

        let direction = *self.direction.get_or_insert(Direction::Right);
        let (dx, dy) = direction.delta();
        let head = self.head();
        let next = Point {
            x: head.x + dx,
            y: head.y + dy,
        };

        if self.hits_wall(next) || self.hits_body(next) {
            self.game_over = true;
            debug!(score = self.score, length = self.snake.len(), "snake game over");
            return StepResult::GameOver;
        }

        self.snake.push_front(next);

        if next == self.food {
            self.score += FOOD_POINTS;
            self.food_eaten += 1;
            self.speed_ms = (self.speed_ms.saturating_sub(SPEED_STEP_MS)).max(MIN_SPEED_MS);
            self.food = self.random_food();
            StepResult::Ate
        } else {
            self.snake.pop_back();
            StepResult::Moved
        }
    }

    fn hits_wall(&self, point: Point) -> bool {
        point.x < 0 || point.x >= GRID_TILES || point.y < 0 || point.y >= GRID_TILES
    }

    fn hits_body(&self, point: Point) -> bool {
        self.snake.iter().any(|segment| *segment == point)
    }

    /// Roll a food tile that is not on the snake.
    fn random_food(&self) -> Point {
        let mut rng = rand::thread_rng();
        loop {
            let food = Point {
                x: rng.gen_range(0..GRID_TILES),
                y: rng.gen_range(0..GRID_TILES),
            };
            if !self.hits_body(food) {
                return food;
            }
        }
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}
