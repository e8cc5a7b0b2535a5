//! Slide navigation state machine.
//!
//! The navigator is `Idle` at one index or `Transitioning` between two. A transition is driven
//! by two timer callbacks owned by the view: [`SlideNavigator::complete_fade_out`] commits the
//! target index after [`FADE_OUT_MS`], and [`SlideNavigator::complete_settle`] returns to `Idle`
//! after a further [`SETTLE_MS`]. Requests that arrive mid-transition are dropped, not queued.

use std::time::Duration;

/// Delay between a navigation request and the index commit.
pub const FADE_OUT_MS: u64 = 250;
/// Delay between the index commit and accepting the next request.
pub const SETTLE_MS: u64 = 250;

pub const fn fade_out_delay() -> Duration {
    Duration::from_millis(FADE_OUT_MS)
}

pub const fn settle_delay() -> Duration {
    Duration::from_millis(SETTLE_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    Idle {
        index: usize,
    },
    Transitioning {
        from: usize,
        to: usize,
        /// Set once the fade-out has elapsed and `to` is the visible slide.
        committed: bool,
    },
}

/// Navigation intent from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Next,
    Prev,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Started { from: usize, to: usize },
    /// A transition is already running; the request was discarded.
    Busy,
    /// Target is the current slide.
    Unchanged,
    /// Target lies outside `0..len`, including `Next` on the last slide and `Prev` on the first.
    OutOfRange,
}

impl NavOutcome {
    pub fn started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    len: usize,
    phase: NavPhase,
}

impl SlideNavigator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            phase: NavPhase::Idle { index: 0 },
        }
    }

    /// Starts at `index`, clamped into the deck.
    pub fn at(len: usize, index: usize) -> Self {
        Self {
            len,
            phase: NavPhase::Idle {
                index: index.min(len.saturating_sub(1)),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Index of the slide currently on screen.
    pub fn current_index(&self) -> usize {
        match self.phase {
            NavPhase::Idle { index } => index,
            NavPhase::Transitioning {
                from,
                to,
                committed,
            } => {
                if committed {
                    to
                } else {
                    from
                }
            }
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, NavPhase::Transitioning { .. })
    }

    /// True while the outgoing slide is fading out.
    pub fn is_fading_out(&self) -> bool {
        matches!(
            self.phase,
            NavPhase::Transitioning {
                committed: false,
                ..
            }
        )
    }

    pub fn has_prev(&self) -> bool {
        self.current_index() > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index() + 1 < self.len
    }

    pub fn request(&mut self, request: NavRequest) -> NavOutcome {
        let NavPhase::Idle { index } = self.phase else {
            return NavOutcome::Busy;
        };
        let target = match request {
            NavRequest::Next => index.checked_add(1),
            NavRequest::Prev => index.checked_sub(1),
            NavRequest::GoTo(target) => Some(target),
        };
        match target {
            Some(target) => self.go_to(target),
            None => NavOutcome::OutOfRange,
        }
    }

    pub fn go_next(&mut self) -> NavOutcome {
        self.request(NavRequest::Next)
    }

    pub fn go_prev(&mut self) -> NavOutcome {
        self.request(NavRequest::Prev)
    }

    pub fn go_to(&mut self, target: usize) -> NavOutcome {
        let NavPhase::Idle { index } = self.phase else {
            return NavOutcome::Busy;
        };
        if target >= self.len {
            return NavOutcome::OutOfRange;
        }
        if target == index {
            return NavOutcome::Unchanged;
        }
        self.phase = NavPhase::Transitioning {
            from: index,
            to: target,
            committed: false,
        };
        NavOutcome::Started {
            from: index,
            to: target,
        }
    }

    /// Commits the pending target. Returns `false` when there is nothing to commit.
    pub fn complete_fade_out(&mut self) -> bool {
        match &mut self.phase {
            NavPhase::Transitioning { committed, .. } if !*committed => {
                *committed = true;
                true
            }
            _ => false,
        }
    }

    /// Returns to `Idle` at the committed index. Returns `false` unless a committed transition
    /// was pending.
    pub fn complete_settle(&mut self) -> bool {
        match self.phase {
            NavPhase::Transitioning {
                to,
                committed: true,
                ..
            } => {
                self.phase = NavPhase::Idle { index: to };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn finish(nav: &mut SlideNavigator) {
        assert!(nav.complete_fade_out());
        assert!(nav.complete_settle());
    }

    #[test]
    fn next_from_last_and_prev_from_first_are_noops() {
        let mut nav = SlideNavigator::new(3);
        assert_eq!(nav.go_prev(), NavOutcome::OutOfRange);
        assert_eq!(nav.phase(), NavPhase::Idle { index: 0 });

        let mut nav = SlideNavigator::at(3, 2);
        assert_eq!(nav.go_next(), NavOutcome::OutOfRange);
        assert_eq!(nav.phase(), NavPhase::Idle { index: 2 });
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn requests_during_transition_are_dropped() {
        let mut nav = SlideNavigator::new(8);
        assert!(nav.go_to(2).started());
        assert_eq!(nav.go_to(5), NavOutcome::Busy);

        assert!(nav.complete_fade_out());
        assert_eq!(nav.go_next(), NavOutcome::Busy);
        assert!(nav.complete_settle());

        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn index_commits_after_fade_out_and_unlocks_after_settle() {
        let mut nav = SlideNavigator::new(4);
        nav.go_next();
        assert_eq!(nav.current_index(), 0);
        assert!(nav.is_fading_out());

        nav.complete_fade_out();
        assert_eq!(nav.current_index(), 1);
        assert!(nav.is_transitioning());
        assert!(!nav.is_fading_out());

        nav.complete_settle();
        assert_eq!(nav.phase(), NavPhase::Idle { index: 1 });
    }

    #[test]
    fn goto_supports_backward_jumps_and_rejects_current_or_out_of_range() {
        let mut nav = SlideNavigator::at(6, 4);
        assert_eq!(nav.go_to(4), NavOutcome::Unchanged);
        assert_eq!(nav.go_to(6), NavOutcome::OutOfRange);
        assert_eq!(nav.go_to(1), NavOutcome::Started { from: 4, to: 1 });
        finish(&mut nav);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn stray_timer_callbacks_do_not_change_idle_state() {
        let mut nav = SlideNavigator::at(3, 1);
        assert!(!nav.complete_fade_out());
        assert!(!nav.complete_settle());

        nav.go_next();
        assert!(!nav.complete_settle());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn empty_deck_rejects_every_request() {
        let mut nav = SlideNavigator::new(0);
        assert!(nav.is_empty());
        assert_eq!(nav.go_next(), NavOutcome::OutOfRange);
        assert_eq!(nav.go_to(0), NavOutcome::OutOfRange);
        assert!(!nav.has_next());
        assert!(!nav.has_prev());
    }
}
