/// Direction the snake can travel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction.
    /// The origin is the top-left corner, so Up decreases y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Buffers directional input between simulation ticks.
///
/// Input may arrive arbitrarily often between ticks; only the committed
/// direction at the instant a tick fires affects motion. A turn is rejected
/// when it reverses either the committed direction or the direction the most
/// recent completed tick actually applied. Checking the committed value alone
/// would let two quick turns inside one tick interval fold the snake into its
/// own neck (e.g. Up applied, Right committed, Down committed: Down reverses
/// the still-unmoved Up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionController {
    committed: Direction,
    last_applied: Direction,
}

impl DirectionController {
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            last_applied: initial,
        }
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Attempt to commit a turn. Returns false if the turn was rejected.
    pub fn request_turn(&mut self, new_dir: Direction) -> bool {
        if new_dir.is_opposite(self.committed) || new_dir.is_opposite(self.last_applied) {
            return false;
        }
        self.committed = new_dir;
        true
    }

    /// Called by the engine at the start of a tick: records the committed
    /// direction as applied and returns it for the head computation.
    pub fn begin_tick(&mut self) -> Direction {
        self.last_applied = self.committed;
        self.committed
    }
}
