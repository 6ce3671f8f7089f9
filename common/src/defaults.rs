use crate::games::Cell;

/// Default chase maze, 19 wide and 21 tall. `#` wall, `.` path with a dot, `_` empty path.
pub const DEFAULT_CHASE_MAZE: [&str; 21] = [
    "###################",
    "#........#........#",
    "#.##.###.#.###.##.#",
    "#.................#",
    "#.##.#.#####.#.##.#",
    "#....#...#...#....#",
    "####.###_#_###.####",
    "___#.#_______#.#___",
    "####.#_##_##_#.####",
    "____.__#___#__.____",
    "####.#_#___#_#.####",
    "___#.#_______#.#___",
    "####.###_#_###.####",
    "#........#........#",
    "#.##.###.#.###.##.#",
    "#..#....._.....#..#",
    "##.#.#.#####.#.#.##",
    "#....#...#...#....#",
    "#.######.#.######.#",
    "#.................#",
    "###################",
];

pub const DEFAULT_CHASE_PLAYER_START: Cell = Cell::new(9, 15);
pub const DEFAULT_CHASE_PURSUER_START: Cell = Cell::new(9, 9);
pub const DEFAULT_CHASE_LIVES: u32 = 3;
pub const DEFAULT_DOT_REWARD: u32 = 10;
pub const DEFAULT_PURSUER_TICK_MS: u64 = 300;

pub const DEFAULT_SNAKE_FIELD_SIZE: usize = 20;
pub const DEFAULT_SNAKE_START_BODY: [Cell; 3] =
    [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];
pub const DEFAULT_SNAKE_BASE_INTERVAL_MS: u64 = 150;
pub const DEFAULT_SNAKE_MIN_INTERVAL_MS: u64 = 80;
pub const DEFAULT_SNAKE_INTERVAL_STEP_MS: u64 = 5;
pub const DEFAULT_SNAKE_SPEED_UP_EVERY: u32 = 3;
pub const DEFAULT_PIE_REWARD: u32 = 10;
