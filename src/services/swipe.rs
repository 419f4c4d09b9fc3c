use crate::services::viewer::Action;

/// Horizontal travel, in CSS pixels, that always counts as a swipe.
pub const SWIPE_DISTANCE_PX: f64 = 50.0;
/// Release speed, in pixels per second, that counts as a flick.
pub const SWIPE_VELOCITY_PX_S: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    pub fn action(self) -> Action {
        match self {
            Swipe::Left => Action::SwipeLeft,
            Swipe::Right => Action::SwipeRight,
        }
    }
}

/// Pointer position and timestamp at the start of a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStart {
    pub x: f64,
    pub at_ms: f64,
}

impl DragStart {
    /// Classifies the drag ending at `x` after `at_ms`.
    pub fn finish(self, x: f64, at_ms: f64) -> Option<Swipe> {
        let offset = x - self.x;
        let elapsed_ms = at_ms - self.at_ms;
        let velocity = if elapsed_ms > 0.0 {
            offset / elapsed_ms * 1000.0
        } else {
            0.0
        };
        classify(offset, velocity)
    }
}

/// A drag is a swipe when it travelled far enough, or was released fast
/// enough. Distance decides the direction when both apply.
pub fn classify(offset_px: f64, velocity_px_s: f64) -> Option<Swipe> {
    let direction = if offset_px.abs() >= SWIPE_DISTANCE_PX {
        offset_px
    } else if velocity_px_s.abs() >= SWIPE_VELOCITY_PX_S {
        velocity_px_s
    } else {
        return None;
    };
    if direction < 0.0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_slow_drags_are_taps() {
        assert_eq!(classify(0.0, 0.0), None);
        assert_eq!(classify(-49.0, -100.0), None);
        assert_eq!(classify(30.0, 499.0), None);
    }

    #[test]
    fn long_drags_swipe_by_direction() {
        assert_eq!(classify(-50.0, 0.0), Some(Swipe::Left));
        assert_eq!(classify(120.0, 10.0), Some(Swipe::Right));
        // Distance wins over a contradicting flick.
        assert_eq!(classify(-80.0, 900.0), Some(Swipe::Left));
    }

    #[test]
    fn fast_flicks_swipe_even_when_short() {
        assert_eq!(classify(-20.0, -800.0), Some(Swipe::Left));
        assert_eq!(classify(15.0, 650.0), Some(Swipe::Right));
    }

    #[test]
    fn drag_start_measures_velocity() {
        let start = DragStart { x: 200.0, at_ms: 1000.0 };
        // 30px in 40ms is 750px/s.
        assert_eq!(start.finish(170.0, 1040.0), Some(Swipe::Left));
        // Same distance over a second is just a slow nudge.
        assert_eq!(start.finish(170.0, 2000.0), None);
        assert_eq!(start.finish(170.0, 1000.0), None);
        assert_eq!(Swipe::Right.action(), Action::SwipeRight);
    }
}
