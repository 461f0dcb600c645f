//! Chapter navigation state machine.
//!
//! Two phases: `Idle` and `Flipping`. A valid request while idle moves to
//! `Flipping`; completing the flip commits the target and returns to `Idle`.
//! Anything else is dropped without error. Requests are never queued.

use crate::chapters::ChapterIndex;
use tracing::{info, trace};

/// Navigation intent produced by every input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    GoTo(usize),
}

/// An accepted chapter change. `ticket` identifies it when completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ChapterIndex,
    pub to: ChapterIndex,
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Flipping(Transition),
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: ChapterIndex,
    phase: Phase,
    next_ticket: u64,
}

impl Navigator {
    pub fn new(initial: ChapterIndex) -> Self {
        Navigator {
            current: initial,
            phase: Phase::Idle,
            next_ticket: 1,
        }
    }

    pub fn current(&self) -> ChapterIndex {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Flipping(_))
    }

    pub fn in_flight(&self) -> Option<Transition> {
        match self.phase {
            Phase::Flipping(transition) => Some(transition),
            Phase::Idle => None,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Option<Transition> {
        match intent {
            Intent::Next => self.go_to_next(),
            Intent::Previous => self.go_to_previous(),
            Intent::GoTo(target) => self.go_to_chapter(target),
        }
    }

    pub fn go_to_next(&mut self) -> Option<Transition> {
        let target = self.current.next()?;
        self.request(target)
    }

    pub fn go_to_previous(&mut self) -> Option<Transition> {
        let target = self.current.previous()?;
        self.request(target)
    }

    /// Out-of-range targets and the current chapter are ignored.
    pub fn go_to_chapter(&mut self, target: usize) -> Option<Transition> {
        let Some(target) = ChapterIndex::new(target) else {
            trace!(target, "Ignoring out-of-range chapter request");
            return None;
        };
        self.request(target)
    }

    fn request(&mut self, target: ChapterIndex) -> Option<Transition> {
        if self.is_transitioning() {
            trace!(target = target.get(), "Dropping navigation request during flip");
            return None;
        }
        if target == self.current {
            return None;
        }
        Some(self.begin_transition(target))
    }

    fn begin_transition(&mut self, target: ChapterIndex) -> Transition {
        let transition = Transition {
            from: self.current,
            to: target,
            ticket: self.next_ticket,
        };
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.phase = Phase::Flipping(transition);
        info!(
            from = transition.from.get(),
            to = transition.to.get(),
            ticket = transition.ticket,
            "Began page flip"
        );
        transition
    }

    /// Commits the in-flight transition when `ticket` matches it.
    pub fn complete_transition(&mut self, ticket: u64) -> Option<ChapterIndex> {
        match self.phase {
            Phase::Flipping(transition) if transition.ticket == ticket => {
                self.current = transition.to;
                self.phase = Phase::Idle;
                info!(chapter = self.current.get(), "Settled on chapter");
                Some(self.current)
            }
            _ => {
                trace!(ticket, "Ignoring stale flip completion");
                None
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(ChapterIndex::FIRST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::CHAPTER_COUNT;

    fn at(raw: usize) -> Navigator {
        Navigator::new(ChapterIndex::new(raw).expect("valid index"))
    }

    #[test]
    fn every_other_chapter_is_reachable_from_idle() {
        for start in 0..CHAPTER_COUNT {
            for target in (0..CHAPTER_COUNT).filter(|t| *t != start) {
                let mut nav = at(start);
                let transition = nav.go_to_chapter(target).expect("accepted");
                assert!(nav.is_transitioning());
                assert_eq!(nav.current().get(), start);
                assert_eq!(
                    nav.complete_transition(transition.ticket).map(ChapterIndex::get),
                    Some(target)
                );
                assert!(!nav.is_transitioning());
                assert_eq!(nav.current().get(), target);
            }
        }
    }

    #[test]
    fn requests_while_flipping_leave_state_untouched() {
        let mut nav = at(3);
        let transition = nav.go_to_next().expect("accepted");
        for intent in [Intent::Next, Intent::Previous, Intent::GoTo(0), Intent::GoTo(7)] {
            assert_eq!(nav.apply(intent), None);
            assert_eq!(nav.current().get(), 3);
            assert_eq!(nav.in_flight(), Some(transition));
        }
    }

    #[test]
    fn covers_bound_next_and_previous() {
        let mut last = at(7);
        assert_eq!(last.go_to_next(), None);
        assert!(!last.is_transitioning());

        let mut first = at(0);
        assert_eq!(first.go_to_previous(), None);
        assert!(!first.is_transitioning());
    }

    #[test]
    fn invalid_targets_are_silently_ignored() {
        let mut nav = at(2);
        assert_eq!(nav.go_to_chapter(2), None);
        assert_eq!(nav.go_to_chapter(8), None);
        assert_eq!(nav.go_to_chapter(usize::MAX), None);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn stale_ticket_does_not_commit() {
        let mut nav = at(0);
        let first = nav.go_to_next().expect("accepted");
        nav.complete_transition(first.ticket);
        let second = nav.go_to_next().expect("accepted");

        assert_eq!(nav.complete_transition(first.ticket), None);
        assert_eq!(nav.current().get(), 1);
        assert!(nav.is_transitioning());
        assert_eq!(nav.complete_transition(second.ticket).map(ChapterIndex::get), Some(2));
    }
}
