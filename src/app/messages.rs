use crate::contact::ContactOutcome;
use folio_core::InputEvent;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::text_editor;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextChapter,
    PreviousChapter,
    GoToChapter(usize),
    /// Keyboard, touch and mouse gestures, already adapted.
    Input(InputEvent),
    CursorMoved {
        x: f32,
        y: f32,
    },
    MouseButton {
        pressed: bool,
    },
    CursorLeft,
    PageScrolled(AbsoluteOffset),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Frame(Instant),
    FlipSettled {
        ticket: u64,
    },
    ToggleSound,
    ReducedMotionChanged(bool),
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactMessageEdited(text_editor::Action),
    SubmitContact,
    ContactFinished(Result<ContactOutcome, String>),
    ContactStatusExpired {
        generation: u64,
    },
    PollSystemSignals,
    SafeQuit,
}
