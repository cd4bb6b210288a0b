use crate::game::Direction;

/// Minimum drag distance, in terminal cells, before a swipe registers.
/// A touch screen would want something like 30 px; terminal cells are far
/// coarser.
pub const DEFAULT_SWIPE_CELLS: i32 = 2;

/// Resolve a drag delta to a direction: the axis with the larger magnitude
/// wins, and it must exceed the threshold. Returns None for a tap or a drag
/// too short to be intentional.
pub fn resolve_swipe(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() > threshold {
            return Some(if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            });
        }
    } else if dy.abs() > threshold {
        return Some(if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        });
    }
    None
}

/// Tracks a press/release pair from mouse (or touch) events and turns it
/// into a swipe direction.
#[derive(Debug)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Consumes the pending press. A release without a press yields None.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        resolve_swipe(x - sx, y - sy, self.threshold)
    }
}

impl Default for SwipeTracker {
    /// A zero threshold would turn on any one-cell drag, so the default is
    /// the tuned terminal threshold, not the zero a derive would pick.
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_CELLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(resolve_swipe(40, 5, 30), Some(Direction::Right));
        assert_eq!(resolve_swipe(-40, 5, 30), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        // Screen coordinates: y grows downward.
        assert_eq!(resolve_swipe(5, 40, 30), Some(Direction::Down));
        assert_eq!(resolve_swipe(5, -40, 30), Some(Direction::Up));
    }

    #[test]
    fn test_larger_axis_wins() {
        assert_eq!(resolve_swipe(50, 45, 30), Some(Direction::Right));
        assert_eq!(resolve_swipe(45, -50, 30), Some(Direction::Up));
    }

    #[test]
    fn test_below_threshold_is_no_turn() {
        assert_eq!(resolve_swipe(10, 3, 30), None);
        assert_eq!(resolve_swipe(0, 0, 30), None);
        assert_eq!(resolve_swipe(30, 0, 30), None); // must exceed, not meet
    }

    #[test]
    fn test_tracker_press_release() {
        let mut tracker = SwipeTracker::new(2);
        tracker.press(10, 10);
        assert_eq!(tracker.release(16, 11), Some(Direction::Right));
        // The press was consumed.
        assert_eq!(tracker.release(30, 10), None);
    }

    #[test]
    fn test_tracker_short_drag() {
        let mut tracker = SwipeTracker::new(2);
        tracker.press(10, 10);
        assert_eq!(tracker.release(11, 10), None);
    }

    #[test]
    fn test_default_tracker_rejects_one_cell_drags() {
        let mut tracker = SwipeTracker::default();
        tracker.press(10, 10);
        assert_eq!(tracker.release(11, 10), None);

        tracker.press(10, 10);
        assert_eq!(
            tracker.release(10 + DEFAULT_SWIPE_CELLS + 1, 10),
            Some(Direction::Right)
        );
    }
}
