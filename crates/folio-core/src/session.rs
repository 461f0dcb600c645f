//! Per-run navigation session.
//!
//! Owns the navigator, the input arbiter and the flip animator, and is the one
//! place that enforces "no input while a page is turning".

use crate::chapters::ChapterIndex;
use crate::flip::{FlipAnimator, FlipMode, FlipPlan, FlipProgress, FlipVisuals};
use crate::gesture::{Arbitration, InputArbiter, InputEvent, Surface};
use crate::navigator::{Intent, Navigator, Transition};
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub reduced_motion: bool,
    pub sound_enabled: bool,
}

/// A transition that was accepted, and how it will be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipStart {
    pub transition: Transition,
    pub plan: FlipPlan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No animated flip in flight.
    Idle,
    Progress(FlipProgress),
    Completed(ChapterIndex),
}

#[derive(Debug, Clone)]
pub struct Session {
    navigator: Navigator,
    arbiter: InputArbiter,
    animator: FlipAnimator,
    preferences: Preferences,
}

impl Session {
    pub fn new(initial: ChapterIndex, preferences: Preferences, surface: Surface) -> Self {
        debug!(
            chapter = initial.get(),
            reduced_motion = preferences.reduced_motion,
            sound_enabled = preferences.sound_enabled,
            "Created navigation session"
        );
        Session {
            navigator: Navigator::new(initial),
            arbiter: InputArbiter::new(surface),
            animator: FlipAnimator::new(),
            preferences,
        }
    }

    pub fn current(&self) -> ChapterIndex {
        self.navigator.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    pub fn in_flight(&self) -> Option<Transition> {
        self.navigator.in_flight()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn progress(&self) -> FlipProgress {
        self.animator.progress()
    }

    pub fn visuals(&self) -> FlipVisuals {
        FlipVisuals::at(self.animator.progress())
    }

    /// Chapter showing through the flipping leaf, once it has turned far enough.
    pub fn peek_target(&self) -> Option<ChapterIndex> {
        let transition = self.navigator.in_flight()?;
        (self.animator.is_cross_fading() || self.animator.progress().peeking())
            .then_some(transition.to)
    }

    pub fn is_sampling(&self) -> bool {
        self.animator.is_sampling()
    }

    pub fn is_cross_fading(&self) -> bool {
        self.animator.is_cross_fading()
    }

    pub fn samples_taken(&self) -> u64 {
        self.animator.samples_taken()
    }

    pub fn set_surface(&mut self, surface: Surface) {
        self.arbiter.set_surface(surface);
    }

    /// Returns whether the value changed.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        let changed = self.preferences.reduced_motion != reduced;
        self.preferences.reduced_motion = reduced;
        changed
    }

    /// Returns whether the value changed.
    pub fn set_sound_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.preferences.sound_enabled != enabled;
        self.preferences.sound_enabled = enabled;
        changed
    }

    /// Feeds one raw input event through arbitration.
    pub fn input(&mut self, event: InputEvent, now: Instant) -> (Arbitration, Option<FlipStart>) {
        if self.is_transitioning() {
            trace!(?event, "Input suppressed during flip");
            return (Arbitration::Ignored, None);
        }
        let arbitration = self.arbiter.handle(event);
        let start = match arbitration {
            Arbitration::Intent(intent) => self.request(intent, now),
            _ => None,
        };
        (arbitration, start)
    }

    /// Requests a chapter change directly (buttons, startup routing).
    pub fn request(&mut self, intent: Intent, now: Instant) -> Option<FlipStart> {
        let transition = self.navigator.apply(intent)?;
        let mode = if self.preferences.reduced_motion {
            FlipMode::CrossFade
        } else {
            FlipMode::Animated
        };
        let plan = self.animator.start(transition.ticket, mode, now);
        Some(FlipStart { transition, plan })
    }

    /// Samples the animated flip once per frame.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(sample) = self.animator.sample(now) else {
            return TickOutcome::Idle;
        };
        if !sample.progress.is_complete() {
            return TickOutcome::Progress(sample.progress);
        }
        self.finish(sample.ticket)
            .map(TickOutcome::Completed)
            .unwrap_or(TickOutcome::Idle)
    }

    /// Completes a cross-fade whose settle delay elapsed.
    pub fn settle(&mut self, ticket: u64) -> Option<ChapterIndex> {
        if !self.animator.is_cross_fading() || self.animator.ticket() != Some(ticket) {
            trace!(ticket, "Ignoring settle for a flip that is not cross-fading");
            return None;
        }
        self.finish(ticket)
    }

    fn finish(&mut self, ticket: u64) -> Option<ChapterIndex> {
        let settled = self.navigator.complete_transition(ticket)?;
        self.animator.reset();
        Some(settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::CHAPTER_COUNT;
    use crate::flip::{FLIP_DURATION, REDUCED_MOTION_DELAY};
    use crate::gesture::{NavKey, PointerSource};
    use std::time::Duration;

    fn session(raw: usize, reduced_motion: bool) -> Session {
        Session::new(
            ChapterIndex::new(raw).expect("valid index"),
            Preferences {
                reduced_motion,
                sound_enabled: false,
            },
            Surface {
                left: 0.0,
                width: 800.0,
            },
        )
    }

    fn run_to_completion(session: &mut Session, t0: Instant) -> TickOutcome {
        let mut now = t0;
        loop {
            now += Duration::from_millis(16);
            match session.tick(now) {
                TickOutcome::Progress(_) => continue,
                outcome => return outcome,
            }
        }
    }

    #[test]
    fn animated_flip_commits_target_after_duration() {
        for target in 1..CHAPTER_COUNT {
            let t0 = Instant::now();
            let mut session = session(0, false);
            let start = session.request(Intent::GoTo(target), t0).expect("accepted");
            assert_eq!(start.plan, FlipPlan::SampleFrames);
            assert!(session.is_transitioning());

            let outcome = run_to_completion(&mut session, t0);
            assert_eq!(outcome, TickOutcome::Completed(start.transition.to));
            assert_eq!(session.current().get(), target);
            assert!(!session.is_transitioning());
            assert_eq!(session.progress(), FlipProgress::START);
        }
    }

    #[test]
    fn progress_never_decreases_during_a_flip() {
        let t0 = Instant::now();
        let mut session = session(2, false);
        session.request(Intent::Next, t0).expect("accepted");
        let mut last = 0.0;
        for ms in [16u64, 40, 33, 200, 180, 450] {
            if let TickOutcome::Progress(progress) = session.tick(t0 + Duration::from_millis(ms)) {
                assert!(progress.get() >= last);
                last = progress.get();
            }
        }
        assert!(session.is_transitioning());
        assert_eq!(
            session.tick(t0 + FLIP_DURATION),
            TickOutcome::Completed(ChapterIndex::new(3).expect("valid index"))
        );
    }

    #[test]
    fn reduced_motion_settles_without_sampling() {
        let t0 = Instant::now();
        let mut session = session(4, true);
        let start = session.request(Intent::Previous, t0).expect("accepted");
        assert_eq!(start.plan, FlipPlan::SettleAfter(REDUCED_MOTION_DELAY));

        assert_eq!(session.tick(t0 + Duration::from_millis(16)), TickOutcome::Idle);
        assert_eq!(session.samples_taken(), 0);
        assert_eq!(
            session.settle(start.transition.ticket).map(ChapterIndex::get),
            Some(3)
        );
        assert_eq!(session.samples_taken(), 0);
        assert!(!session.is_transitioning());
    }

    #[test]
    fn settle_ignores_animated_flips_and_stale_tickets() {
        let t0 = Instant::now();
        let mut session = session(0, false);
        let start = session.request(Intent::Next, t0).expect("accepted");
        assert_eq!(session.settle(start.transition.ticket), None);
        assert_eq!(session.settle(start.transition.ticket + 1), None);
        assert!(session.is_transitioning());
    }

    #[test]
    fn every_input_is_dropped_while_flipping() {
        let t0 = Instant::now();
        let mut session = session(3, false);
        session.request(Intent::Next, t0).expect("accepted");
        let before = session.in_flight();

        let events = [
            InputEvent::Key(NavKey::Right),
            InputEvent::Key(NavKey::Home),
            InputEvent::Press {
                source: PointerSource::Mouse,
                x: 10.0,
                y: 10.0,
            },
            InputEvent::Release {
                source: PointerSource::Mouse,
                x: 10.0,
                y: 10.0,
            },
        ];
        for event in events {
            let (arbitration, start) = session.input(event, t0);
            assert_eq!(arbitration, Arbitration::Ignored);
            assert_eq!(start, None);
        }
        assert_eq!(session.in_flight(), before);
        assert_eq!(session.current().get(), 3);
        assert_eq!(session.request(Intent::GoTo(0), t0), None);
    }

    #[test]
    fn swipe_input_starts_exactly_one_flip() {
        let t0 = Instant::now();
        let mut session = session(3, false);
        let source = PointerSource::Touch(7);
        session.input(InputEvent::Press { source, x: 400.0, y: 300.0 }, t0);
        session.input(InputEvent::Move { source, x: 300.0, y: 305.0 }, t0);
        let (arbitration, start) =
            session.input(InputEvent::Release { source, x: 300.0, y: 305.0 }, t0);
        assert_eq!(arbitration, Arbitration::Intent(Intent::Next));
        let start = start.expect("flip started");
        assert_eq!(start.transition.to.get(), 4);
    }

    #[test]
    fn edge_click_at_last_chapter_does_nothing() {
        let t0 = Instant::now();
        let mut session = session(7, false);
        let source = PointerSource::Mouse;
        session.input(InputEvent::Press { source, x: 790.0, y: 10.0 }, t0);
        let (_, start) = session.input(InputEvent::Release { source, x: 790.0, y: 10.0 }, t0);
        assert_eq!(start, None);
        assert!(!session.is_transitioning());
    }

    #[test]
    fn peek_shows_the_real_target_past_threshold() {
        let t0 = Instant::now();
        let mut session = session(1, false);
        session.request(Intent::GoTo(6), t0).expect("accepted");
        session.tick(t0 + Duration::from_millis(120));
        assert_eq!(session.peek_target(), None);
        session.tick(t0 + Duration::from_millis(300));
        assert_eq!(session.peek_target().map(ChapterIndex::get), Some(6));
    }

    #[test]
    fn preference_setters_report_changes() {
        let mut session = session(0, false);
        assert!(session.set_reduced_motion(true));
        assert!(!session.set_reduced_motion(true));
        assert!(session.set_sound_enabled(true));
        assert!(session.preferences().sound_enabled);
    }
}
