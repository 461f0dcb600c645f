use folio_core::ContactRequest;
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Duration;

mod contact;
mod core;
mod navigation;
mod preferences;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    PlayPageTurn,
    /// Completes a reduced-motion flip once `delay` elapses.
    ScheduleSettle {
        ticket: u64,
        delay: Duration,
    },
    ScrollPageToTop,
    /// Pins the page while a horizontal drag owns the pointer.
    HoldPageScroll {
        offset: AbsoluteOffset,
    },
    SavePreferences,
    SubmitContact(ContactRequest),
    ScheduleStatusClear {
        generation: u64,
    },
    QuitSafely,
}
