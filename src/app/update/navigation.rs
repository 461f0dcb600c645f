use super::super::state::App;
use super::Effect;
use folio_core::{
    Arbitration, ChapterIndex, FlipPlan, FlipStart, InputEvent, Intent, PointerSource, Surface,
    TickOutcome,
};
use iced::Point;
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_intent(&mut self, intent: Intent, effects: &mut Vec<Effect>) {
        if let Some(start) = self.session.request(intent, Instant::now()) {
            self.begin_flip(start, effects);
        }
    }

    pub(super) fn handle_input(
        &mut self,
        event: InputEvent,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let (arbitration, start) = self.session.input(event, now);
        match (event, arbitration) {
            (InputEvent::Press { .. } | InputEvent::Grab { .. }, Arbitration::Tracking) => {
                self.scroll_hold = Some(self.page_offset);
            }
            (_, Arbitration::Claimed) => {
                trace!("Horizontal drag claimed");
                if let Some(offset) = self.scroll_hold {
                    effects.push(Effect::HoldPageScroll { offset });
                }
            }
            _ => {}
        }
        if matches!(event, InputEvent::Release { .. } | InputEvent::Cancel { .. }) {
            self.scroll_hold = None;
        }
        if let Some(start) = start {
            self.begin_flip(start, effects);
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        self.cursor = Some(Point::new(x, y));
        if self.mouse_down {
            let event = InputEvent::Move {
                source: PointerSource::Mouse,
                x,
                y,
            };
            self.handle_input(event, Instant::now(), effects);
        }
    }

    pub(super) fn handle_mouse_button(&mut self, pressed: bool, effects: &mut Vec<Effect>) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if pressed == self.mouse_down {
            return;
        }
        self.mouse_down = pressed;
        let source = PointerSource::Mouse;
        let event = if pressed {
            InputEvent::Press {
                source,
                x: cursor.x,
                y: cursor.y,
            }
        } else {
            InputEvent::Release {
                source,
                x: cursor.x,
                y: cursor.y,
            }
        };
        self.handle_input(event, Instant::now(), effects);
    }

    pub(super) fn handle_cursor_left(&mut self, effects: &mut Vec<Effect>) {
        self.cursor = None;
        if std::mem::take(&mut self.mouse_down) {
            let event = InputEvent::Cancel {
                source: PointerSource::Mouse,
            };
            self.handle_input(event, Instant::now(), effects);
        }
    }

    pub(super) fn handle_page_scrolled(&mut self, offset: AbsoluteOffset) {
        self.page_offset = offset;
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        debug!(width, height, "Window resized");
        self.config.window_width = width;
        self.config.window_height = height;
        self.session.set_surface(Surface { left: 0.0, width });
    }

    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        match self.session.tick(now) {
            TickOutcome::Completed(chapter) => self.on_settled(chapter, effects),
            TickOutcome::Progress(progress) => trace!(progress = progress.get(), "Flip frame"),
            TickOutcome::Idle => {}
        }
    }

    pub(super) fn handle_flip_settled(&mut self, ticket: u64, effects: &mut Vec<Effect>) {
        if let Some(chapter) = self.session.settle(ticket) {
            self.on_settled(chapter, effects);
        }
    }

    fn begin_flip(&mut self, start: FlipStart, effects: &mut Vec<Effect>) {
        if self.session.preferences().sound_enabled {
            effects.push(Effect::PlayPageTurn);
        }
        match start.plan {
            FlipPlan::SampleFrames => {}
            FlipPlan::SettleAfter(delay) => effects.push(Effect::ScheduleSettle {
                ticket: start.transition.ticket,
                delay,
            }),
        }
    }

    fn on_settled(&self, chapter: ChapterIndex, effects: &mut Vec<Effect>) {
        debug!(path = %folio_core::route::path_for(chapter), "Chapter on screen");
        effects.push(Effect::ScrollPageToTop);
    }
}
