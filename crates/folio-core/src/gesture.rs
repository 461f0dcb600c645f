//! Input arbitration: keyboard, touch, mouse and edge clicks to [`Intent`].
//!
//! The arbiter only classifies. Whether an intent may run at all is decided
//! once by [`crate::Session::input`].

use crate::chapters::ChapterIndex;
use crate::navigator::Intent;
use tracing::trace;

/// Horizontal travel after which a press becomes a page drag.
pub const DRAG_CLASSIFY_PX: f32 = 10.0;
/// Horizontal travel a drag needs on release to turn the page.
pub const SWIPE_COMMIT_PX: f32 = 50.0;
/// Fraction of the surface width that counts as a page edge.
pub const EDGE_FRACTION: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(NavKey),
    Press { source: PointerSource, x: f32, y: f32 },
    /// A press a widget already consumed. It may still become a page drag but
    /// never counts as an edge click.
    Grab { source: PointerSource, x: f32, y: f32 },
    Move { source: PointerSource, x: f32, y: f32 },
    Release { source: PointerSource, x: f32, y: f32 },
    /// Touch lost by the platform; the gesture is abandoned.
    Cancel { source: PointerSource },
}

/// What the arbiter made of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arbitration {
    Ignored,
    Tracking,
    /// The gesture is a horizontal drag; content should not scroll.
    Claimed,
    Intent(Intent),
}

/// Horizontal extent of the page surface that receives clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Track {
    source: PointerSource,
    start_x: f32,
    start_y: f32,
    dragging: bool,
    clickable: bool,
}

#[derive(Debug, Clone)]
pub struct InputArbiter {
    track: Option<Track>,
    surface: Surface,
}

impl InputArbiter {
    pub fn new(surface: Surface) -> Self {
        InputArbiter {
            track: None,
            surface,
        }
    }

    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn is_dragging(&self) -> bool {
        self.track.is_some_and(|track| track.dragging)
    }

    pub fn handle(&mut self, event: InputEvent) -> Arbitration {
        match event {
            InputEvent::Key(key) => Arbitration::Intent(key_intent(key)),
            InputEvent::Press { source, x, y } => self.press(source, x, y, true),
            InputEvent::Grab { source, x, y } => self.press(source, x, y, false),
            InputEvent::Move { source, x, y } => self.drag(source, x, y),
            InputEvent::Release { source, x, y } => self.release(source, x, y),
            InputEvent::Cancel { source } => {
                if self.track.is_some_and(|track| track.source == source) {
                    self.track = None;
                }
                Arbitration::Ignored
            }
        }
    }

    fn press(&mut self, source: PointerSource, x: f32, y: f32, clickable: bool) -> Arbitration {
        if !x.is_finite() || !y.is_finite() {
            return Arbitration::Ignored;
        }
        self.track = Some(Track {
            source,
            start_x: x,
            start_y: y,
            dragging: false,
            clickable,
        });
        Arbitration::Tracking
    }

    fn drag(&mut self, source: PointerSource, x: f32, y: f32) -> Arbitration {
        let Some(track) = self.track.as_mut().filter(|track| track.source == source) else {
            return Arbitration::Ignored;
        };
        if !x.is_finite() || !y.is_finite() {
            return Arbitration::Ignored;
        }
        let dx = x - track.start_x;
        let dy = y - track.start_y;
        if !track.dragging && dx.abs() > dy.abs() && dx.abs() > DRAG_CLASSIFY_PX {
            track.dragging = true;
            trace!(?source, dx, "Classified horizontal page drag");
        }
        if track.dragging {
            Arbitration::Claimed
        } else {
            Arbitration::Tracking
        }
    }

    fn release(&mut self, source: PointerSource, x: f32, y: f32) -> Arbitration {
        let Some(track) = self.track.filter(|track| track.source == source) else {
            return Arbitration::Ignored;
        };
        self.track = None;
        if !x.is_finite() || !y.is_finite() {
            return Arbitration::Ignored;
        }
        if track.dragging {
            return swipe_intent(x - track.start_x)
                .map(Arbitration::Intent)
                .unwrap_or(Arbitration::Ignored);
        }
        if !track.clickable {
            return Arbitration::Ignored;
        }
        edge_click_intent(self.surface, x)
            .map(Arbitration::Intent)
            .unwrap_or(Arbitration::Ignored)
    }
}

fn key_intent(key: NavKey) -> Intent {
    match key {
        NavKey::Left => Intent::Previous,
        NavKey::Right => Intent::Next,
        NavKey::Home => Intent::GoTo(ChapterIndex::FIRST.get()),
        NavKey::End => Intent::GoTo(ChapterIndex::LAST.get()),
    }
}

/// A rightward swipe turns back, a leftward one turns forward.
pub fn swipe_intent(dx: f32) -> Option<Intent> {
    if dx.abs() <= SWIPE_COMMIT_PX {
        return None;
    }
    if dx > 0.0 {
        Some(Intent::Previous)
    } else {
        Some(Intent::Next)
    }
}

pub fn edge_click_intent(surface: Surface, x: f32) -> Option<Intent> {
    if surface.width.is_nan() || surface.width <= 0.0 {
        return None;
    }
    let offset = x - surface.left;
    let edge = surface.width * EDGE_FRACTION;
    if offset < edge {
        Some(Intent::Previous)
    } else if offset > surface.width - edge {
        Some(Intent::Next)
    } else {
        None
    }
}
