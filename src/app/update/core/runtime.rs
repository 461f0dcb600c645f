use super::super::super::messages::Message;
use super::super::super::state::{App, CONTACT_STATUS_TTL, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::cache::save_preferences;
use crate::contact;
use folio_core::{InputEvent, PointerSource};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::widget::scrollable::{self, RelativeOffset};
use iced::window;
use std::time::Duration;
use tracing::debug;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PlayPageTurn => {
                crate::sound::play_page_turn();
                Task::none()
            }
            Effect::ScheduleSettle { ticket, delay } => Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |_| Message::FlipSettled { ticket },
            ),
            Effect::ScrollPageToTop => {
                scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::HoldPageScroll { offset } => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), offset)
            }
            Effect::SavePreferences => {
                save_preferences(&self.prefs_path, &self.stored_preferences());
                Task::none()
            }
            Effect::SubmitContact(request) => {
                let endpoint = self.config.contact_endpoint.clone();
                let timeout = Duration::from_secs_f32(self.config.contact_timeout_secs);
                debug!(%endpoint, "Submitting contact form");
                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || {
                            contact::submit(&endpoint, timeout, &request)
                        })
                        .await
                    },
                    |joined| {
                        let result = match joined {
                            Ok(Ok(outcome)) => Ok(outcome),
                            Ok(Err(err)) => Err(format!("{err:#}")),
                            Err(err) => Err(format!("contact task failed: {err}")),
                        };
                        Message::ContactFinished(result)
                    },
                )
            }
            Effect::ScheduleStatusClear { generation } => Task::perform(
                async { tokio::time::sleep(CONTACT_STATUS_TTL).await },
                move |_| Message::ContactStatusExpired { generation },
            ),
            Effect::QuitSafely => {
                save_preferences(&self.prefs_path, &self.stored_preferences());
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Resizes always matter for edge-click geometry, even if a widget saw them.
    if let Event::Window(window::Event::Resized(size)) = event {
        return Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        });
    }
    // The page scrollable captures touches it could scroll with, so captured
    // touches still reach the arbiter. A captured press is only a drag start.
    if let Event::Touch(touch) = event {
        return Some(Message::Input(touch_to_input(
            touch,
            status == event::Status::Captured,
        )));
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::MouseButton { pressed: true })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::MouseButton { pressed: false })
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorLeft),
        _ => None,
    }
}

fn touch_to_input(event: touch::Event, captured: bool) -> InputEvent {
    match event {
        touch::Event::FingerPressed { id, position } if captured => InputEvent::Grab {
            source: PointerSource::Touch(id.0),
            x: position.x,
            y: position.y,
        },
        touch::Event::FingerPressed { id, position } => InputEvent::Press {
            source: PointerSource::Touch(id.0),
            x: position.x,
            y: position.y,
        },
        touch::Event::FingerMoved { id, position } => InputEvent::Move {
            source: PointerSource::Touch(id.0),
            x: position.x,
            y: position.y,
        },
        touch::Event::FingerLifted { id, position } => InputEvent::Release {
            source: PointerSource::Touch(id.0),
            x: position.x,
            y: position.y,
        },
        touch::Event::FingerLost { id, .. } => InputEvent::Cancel {
            source: PointerSource::Touch(id.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn captured_pointer_events_are_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(
            runtime_event_to_message(event, event::Status::Captured, window::Id::unique())
                .is_none()
        );
    }

    #[test]
    fn captured_touch_press_only_starts_a_drag() {
        let finger = touch::Finger(1);
        let position = Point::new(1150.0, 30.0);
        let pressed = Event::Touch(touch::Event::FingerPressed { id: finger, position });
        assert!(matches!(
            runtime_event_to_message(pressed.clone(), event::Status::Captured, window::Id::unique()),
            Some(Message::Input(InputEvent::Grab {
                source: PointerSource::Touch(1),
                ..
            }))
        ));
        let moved = Event::Touch(touch::Event::FingerMoved { id: finger, position });
        assert!(matches!(
            runtime_event_to_message(moved, event::Status::Captured, window::Id::unique()),
            Some(Message::Input(InputEvent::Move { .. }))
        ));
        assert!(matches!(
            runtime_event_to_message(pressed, event::Status::Ignored, window::Id::unique()),
            Some(Message::Input(InputEvent::Press { .. }))
        ));
    }

    #[test]
    fn touch_lift_becomes_a_release() {
        let event = touch::Event::FingerLifted {
            id: touch::Finger(9),
            position: Point::new(12.0, 34.0),
        };
        assert_eq!(
            touch_to_input(event, true),
            InputEvent::Release {
                source: PointerSource::Touch(9),
                x: 12.0,
                y: 34.0,
            }
        );
    }
}
