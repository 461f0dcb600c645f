//! Page-flip animation clock.
//!
//! Progress is a pure function of elapsed time, computed each time the
//! scheduler samples it. Nothing here draws; the shell turns [`FlipVisuals`]
//! into geometry.

use std::time::{Duration, Instant};

pub const FLIP_DURATION: Duration = Duration::from_millis(600);
pub const REDUCED_MOTION_DELAY: Duration = Duration::from_millis(300);
/// Progress past which the target chapter starts to show through.
pub const PEEK_THRESHOLD: f32 = 0.3;

const ROTATION_DEG: f32 = -180.0;
const SHEAR_DEG: f32 = 5.0;
const DEPTH: f32 = 20.0;
const SCALE_X_MID: f32 = 0.8;
const SCALE_Y_MID: f32 = 0.95;

/// Flip completion in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FlipProgress(f32);

impl FlipProgress {
    pub const START: FlipProgress = FlipProgress(0.0);
    pub const END: FlipProgress = FlipProgress(1.0);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return FlipProgress::START;
        }
        FlipProgress(value.clamp(0.0, 1.0))
    }

    pub fn from_elapsed(elapsed: Duration, duration: Duration) -> Self {
        if duration.is_zero() {
            return FlipProgress::END;
        }
        FlipProgress::new(elapsed.as_secs_f32() / duration.as_secs_f32())
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }

    pub fn peeking(self) -> bool {
        self.0 > PEEK_THRESHOLD
    }
}

/// Transform parameters for the flipping leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipVisuals {
    pub rotation_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub shear_deg: f32,
    pub depth: f32,
}

impl FlipVisuals {
    pub fn at(progress: FlipProgress) -> Self {
        let p = progress.get();
        FlipVisuals {
            rotation_deg: ROTATION_DEG * p,
            scale_x: three_point(p, 1.0, SCALE_X_MID, 1.0),
            scale_y: three_point(p, 1.0, SCALE_Y_MID, 1.0),
            shear_deg: SHEAR_DEG * p,
            depth: DEPTH * p,
        }
    }

    pub fn rest() -> Self {
        FlipVisuals::at(FlipProgress::START)
    }
}

/// Linear interpolation through control points at 0, 0.5 and 1.
fn three_point(p: f32, start: f32, mid: f32, end: f32) -> f32 {
    if p <= 0.5 {
        lerp(start, mid, p / 0.5)
    } else {
        lerp(mid, end, (p - 0.5) / 0.5)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipMode {
    /// Full page turn driven by frame samples.
    Animated,
    /// Reduced motion: a plain cross-fade after a fixed delay.
    CrossFade,
}

/// What the scheduler has to do to drive a freshly started flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPlan {
    SampleFrames,
    SettleAfter(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FlipState {
    Idle,
    Animating {
        ticket: u64,
        started_at: Instant,
        progress: FlipProgress,
    },
    CrossFading {
        ticket: u64,
    },
}

/// Result of one frame sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipSample {
    pub ticket: u64,
    pub progress: FlipProgress,
}

#[derive(Debug, Clone)]
pub struct FlipAnimator {
    state: FlipState,
    duration: Duration,
    samples: u64,
}

impl FlipAnimator {
    pub fn new() -> Self {
        FlipAnimator::with_duration(FLIP_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        FlipAnimator {
            state: FlipState::Idle,
            duration,
            samples: 0,
        }
    }

    pub fn start(&mut self, ticket: u64, mode: FlipMode, now: Instant) -> FlipPlan {
        match mode {
            FlipMode::Animated => {
                self.state = FlipState::Animating {
                    ticket,
                    started_at: now,
                    progress: FlipProgress::START,
                };
                FlipPlan::SampleFrames
            }
            FlipMode::CrossFade => {
                self.state = FlipState::CrossFading { ticket };
                FlipPlan::SettleAfter(REDUCED_MOTION_DELAY)
            }
        }
    }

    /// Advances progress to `now`. Earlier instants never move it backwards.
    pub fn sample(&mut self, now: Instant) -> Option<FlipSample> {
        let FlipState::Animating {
            ticket,
            started_at,
            progress,
        } = &mut self.state
        else {
            return None;
        };
        self.samples += 1;
        let measured =
            FlipProgress::from_elapsed(now.saturating_duration_since(*started_at), self.duration);
        if measured > *progress {
            *progress = measured;
        }
        Some(FlipSample {
            ticket: *ticket,
            progress: *progress,
        })
    }

    pub fn reset(&mut self) {
        self.state = FlipState::Idle;
    }

    pub fn is_sampling(&self) -> bool {
        matches!(self.state, FlipState::Animating { .. })
    }

    pub fn is_cross_fading(&self) -> bool {
        matches!(self.state, FlipState::CrossFading { .. })
    }

    pub fn ticket(&self) -> Option<u64> {
        match self.state {
            FlipState::Idle => None,
            FlipState::Animating { ticket, .. } | FlipState::CrossFading { ticket } => Some(ticket),
        }
    }

    pub fn progress(&self) -> FlipProgress {
        match self.state {
            FlipState::Animating { progress, .. } => progress,
            _ => FlipProgress::START,
        }
    }

    pub fn samples_taken(&self) -> u64 {
        self.samples
    }
}

impl Default for FlipAnimator {
    fn default() -> Self {
        FlipAnimator::new()
    }
}
