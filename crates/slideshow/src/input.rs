//! Keyboard and touch input mapping onto [`NavRequest`] values.

use crate::navigation::NavRequest;

/// Horizontal travel (px) a touch must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Maps a `KeyboardEvent.key` value to a navigation request.
pub fn request_for_key(key: &str) -> Option<NavRequest> {
    match key {
        "ArrowRight" => Some(NavRequest::Next),
        "ArrowLeft" => Some(NavRequest::Prev),
        _ => None,
    }
}

/// Tracks one touch gesture. Only the start and end points matter; intermediate moves are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture and classifies it. A leftward swipe advances, a rightward swipe goes
    /// back. Mostly-vertical gestures are treated as scrolling and ignored.
    pub fn end(&mut self, x: f64, y: f64) -> Option<NavRequest> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() <= SWIPE_THRESHOLD_PX || dx.abs() < dy.abs() {
            return None;
        }
        if dx < 0.0 {
            Some(NavRequest::Next)
        } else {
            Some(NavRequest::Prev)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arrow_keys_map_to_prev_and_next() {
        assert_eq!(request_for_key("ArrowRight"), Some(NavRequest::Next));
        assert_eq!(request_for_key("ArrowLeft"), Some(NavRequest::Prev));
        assert_eq!(request_for_key("ArrowUp"), None);
        assert_eq!(request_for_key("Enter"), None);
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.end(160.0, 100.0), None);

        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(50.0, 100.0), None);
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(150.0, 100.0), None);

        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.end(120.0, 110.0), Some(NavRequest::Next));

        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(175.0, 90.0), Some(NavRequest::Prev));
    }

    #[test]
    fn vertical_gestures_and_orphan_ends_are_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0, 0.0), None);

        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(40.0, 300.0), None);
        assert!(!swipe.is_tracking());
    }
}
