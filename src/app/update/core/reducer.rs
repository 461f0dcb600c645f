use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::read_motion_preference;
use crate::motion;
use folio_core::Intent;
use std::time::Instant;
use tracing::info;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextChapter => self.handle_intent(Intent::Next, &mut effects),
            Message::PreviousChapter => self.handle_intent(Intent::Previous, &mut effects),
            Message::GoToChapter(target) => {
                self.handle_intent(Intent::GoTo(target), &mut effects)
            }
            Message::Input(event) => self.handle_input(event, Instant::now(), &mut effects),
            Message::CursorMoved { x, y } => self.handle_cursor_moved(x, y, &mut effects),
            Message::MouseButton { pressed } => self.handle_mouse_button(pressed, &mut effects),
            Message::CursorLeft => self.handle_cursor_left(&mut effects),
            Message::PageScrolled(offset) => self.handle_page_scrolled(offset),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::FlipSettled { ticket } => self.handle_flip_settled(ticket, &mut effects),
            Message::ToggleSound => self.handle_toggle_sound(&mut effects),
            Message::ReducedMotionChanged(reduced) => self.handle_reduced_motion_changed(reduced),
            Message::ContactNameChanged(name) => self.handle_contact_name_changed(name),
            Message::ContactEmailChanged(email) => self.handle_contact_email_changed(email),
            Message::ContactMessageEdited(action) => self.handle_contact_message_edited(action),
            Message::SubmitContact => self.handle_submit_contact(&mut effects),
            Message::ContactFinished(result) => {
                self.handle_contact_finished(result, &mut effects)
            }
            Message::ContactStatusExpired { generation } => {
                self.handle_contact_status_expired(generation)
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("SIGINT received; quitting safely");
            effects.push(Effect::QuitSafely);
            return;
        }
        if let Some(preference) = read_motion_preference(&self.config_path) {
            self.config.reduced_motion = preference;
        }
        let reduced = motion::probe(self.config.reduced_motion);
        if reduced != self.session.preferences().reduced_motion {
            effects.extend(self.reduce(Message::ReducedMotionChanged(reduced)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::ContactStatus;
    use super::super::runtime::runtime_event_to_message;
    use super::*;
    use crate::cache::{StoredPreferences, load_preferences};
    use crate::config::{AppConfig, MotionPreference};
    use crate::contact::ContactOutcome;
    use folio_core::{ChapterIndex, ContactReceipt, InputEvent, NavKey, PointerSource};
    use iced::keyboard::{Key, Modifiers, key};
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Event, Point, event, touch, window};
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-reducer-test-{}-{tag}", std::process::id()))
    }

    fn build_test_app(start: usize, motion: MotionPreference) -> App {
        let config = AppConfig {
            reduced_motion: motion,
            window_width: 1000.0,
            ..AppConfig::default()
        };
        let dir = scratch_dir(&format!("app-{start}"));
        let prefs_path = dir.join("preferences.toml");
        let config_path = dir.join("missing-config.toml");
        let stored = StoredPreferences {
            sound_enabled: false,
        };
        let (app, _task) = App::bootstrap(
            config,
            config_path,
            ChapterIndex::new(start).expect("valid index"),
            stored,
            prefs_path,
        );
        app
    }

    fn finish_animated_flip(app: &mut App) -> Vec<Effect> {
        let far_future = Instant::now() + Duration::from_secs(5);
        app.reduce(Message::Frame(far_future))
    }

    #[test]
    fn next_button_animates_then_settles() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let effects = app.reduce(Message::NextChapter);
        assert!(app.session.is_transitioning());
        assert!(app.session.is_sampling());
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleSettle { .. }))
        );

        let effects = finish_animated_flip(&mut app);
        assert_eq!(app.session.current().get(), 1);
        assert!(!app.session.is_transitioning());
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScrollPageToTop))
        );
    }

    #[test]
    fn reduced_motion_schedules_a_settle_instead_of_frames() {
        let mut app = build_test_app(3, MotionPreference::Reduce);
        let effects = app.reduce(Message::GoToChapter(6));
        let ticket = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleSettle { ticket, delay } => {
                    assert_eq!(*delay, Duration::from_millis(300));
                    Some(*ticket)
                }
                _ => None,
            })
            .expect("settle scheduled");
        assert!(!app.session.is_sampling());

        app.reduce(Message::FlipSettled { ticket });
        assert_eq!(app.session.current().get(), 6);
        assert_eq!(app.session.samples_taken(), 0);
    }

    #[test]
    fn requests_during_a_flip_are_dropped() {
        let mut app = build_test_app(2, MotionPreference::Full);
        app.reduce(Message::NextChapter);
        let in_flight = app.session.in_flight();

        for message in [
            Message::NextChapter,
            Message::PreviousChapter,
            Message::GoToChapter(7),
            Message::Input(InputEvent::Key(NavKey::End)),
        ] {
            let effects = app.reduce(message);
            assert!(effects.is_empty());
        }
        assert_eq!(app.session.in_flight(), in_flight);

        finish_animated_flip(&mut app);
        assert_eq!(app.session.current().get(), 3);
    }

    #[test]
    fn arrow_keys_route_through_shortcuts() {
        let mut app = build_test_app(4, MotionPreference::Full);
        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::ArrowLeft),
            modifiers: Modifiers::default(),
        });
        let target = app.session.in_flight().map(|transition| transition.to.get());
        assert_eq!(target, Some(3));
    }

    #[test]
    fn mouse_drag_uses_the_tracked_cursor() {
        let mut app = build_test_app(1, MotionPreference::Full);
        app.reduce(Message::CursorMoved { x: 600.0, y: 300.0 });
        app.reduce(Message::MouseButton { pressed: true });
        app.reduce(Message::CursorMoved { x: 520.0, y: 302.0 });
        app.reduce(Message::CursorMoved { x: 450.0, y: 304.0 });
        app.reduce(Message::MouseButton { pressed: false });

        let target = app.session.in_flight().map(|transition| transition.to.get());
        assert_eq!(target, Some(2));
    }

    #[test]
    fn edge_click_uses_the_window_width() {
        let mut app = build_test_app(5, MotionPreference::Full);
        app.reduce(Message::WindowResized {
            width: 500.0,
            height: 700.0,
        });
        app.reduce(Message::CursorMoved { x: 20.0, y: 300.0 });
        app.reduce(Message::MouseButton { pressed: true });
        app.reduce(Message::MouseButton { pressed: false });

        let target = app.session.in_flight().map(|transition| transition.to.get());
        assert_eq!(target, Some(4));
    }

    #[test]
    fn touch_swipe_turns_forward() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let source = PointerSource::Touch(3);
        app.reduce(Message::Input(InputEvent::Press {
            source,
            x: 700.0,
            y: 400.0,
        }));
        app.reduce(Message::Input(InputEvent::Move {
            source,
            x: 600.0,
            y: 402.0,
        }));
        app.reduce(Message::Input(InputEvent::Release {
            source,
            x: 600.0,
            y: 402.0,
        }));
        assert!(app.session.is_transitioning());
    }

    #[test]
    fn tap_on_a_widget_is_not_an_edge_click() {
        let mut app = build_test_app(2, MotionPreference::Full);
        let id = touch::Finger(1);
        let position = Point::new(990.0, 30.0);
        for touch_event in [
            touch::Event::FingerPressed { id, position },
            touch::Event::FingerLifted { id, position },
        ] {
            let message = runtime_event_to_message(
                Event::Touch(touch_event),
                event::Status::Captured,
                window::Id::unique(),
            )
            .expect("touches reach the arbiter");
            app.reduce(message);
        }
        app.reduce(Message::ToggleSound);
        assert_eq!(app.session.in_flight(), None);

        for touch_event in [
            touch::Event::FingerPressed { id, position },
            touch::Event::FingerLifted { id, position },
        ] {
            let message = runtime_event_to_message(
                Event::Touch(touch_event),
                event::Status::Ignored,
                window::Id::unique(),
            )
            .expect("touches reach the arbiter");
            app.reduce(message);
        }
        let target = app.session.in_flight().map(|transition| transition.to.get());
        assert_eq!(target, Some(3));
    }

    #[test]
    fn claimed_swipe_holds_the_page_scroll() {
        let mut app = build_test_app(2, MotionPreference::Full);
        let held = AbsoluteOffset { x: 0.0, y: 180.0 };
        app.reduce(Message::PageScrolled(held));

        let source = PointerSource::Touch(5);
        app.reduce(Message::Input(InputEvent::Grab {
            source,
            x: 600.0,
            y: 300.0,
        }));
        app.reduce(Message::PageScrolled(AbsoluteOffset { x: 0.0, y: 184.0 }));
        let effects = app.reduce(Message::Input(InputEvent::Move {
            source,
            x: 602.0,
            y: 296.0,
        }));
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::HoldPageScroll { .. }))
        );

        let effects = app.reduce(Message::Input(InputEvent::Move {
            source,
            x: 480.0,
            y: 304.0,
        }));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::HoldPageScroll { offset } if *offset == held))
        );

        app.reduce(Message::Input(InputEvent::Release {
            source,
            x: 480.0,
            y: 304.0,
        }));
        assert_eq!(app.scroll_hold, None);
    }

    #[test]
    fn quick_sound_toggles_persist_the_last_value() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let dir = scratch_dir("toggles");
        app.prefs_path = dir.join("preferences.toml");
        for _ in 0..3 {
            for effect in app.reduce(Message::ToggleSound) {
                let _ = app.run_effect(effect);
            }
        }
        assert!(app.session.preferences().sound_enabled);
        assert!(load_preferences(&app.prefs_path).sound_enabled);

        for effect in app.reduce(Message::ToggleSound) {
            let _ = app.run_effect(effect);
        }
        assert!(!load_preferences(&app.prefs_path).sound_enabled);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn motion_setting_edited_on_disk_applies_on_next_poll() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let dir = scratch_dir("motion-poll");
        fs::create_dir_all(&dir).expect("mkdir");
        app.config_path = dir.join("config.toml");

        fs::write(&app.config_path, "[accessibility]\nreduced_motion = \"full\"").expect("write");
        app.reduce(Message::PollSystemSignals);
        assert!(!app.session.preferences().reduced_motion);

        fs::write(&app.config_path, "[accessibility]\nreduced_motion = \"reduce\"").expect("write");
        app.reduce(Message::PollSystemSignals);
        assert!(app.session.preferences().reduced_motion);
        assert_eq!(app.config.reduced_motion, MotionPreference::Reduce);

        let effects = app.reduce(Message::NextChapter);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleSettle { .. }))
        );
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn sound_cue_follows_preference() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let effects = app.reduce(Message::NextChapter);
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::PlayPageTurn))
        );
        finish_animated_flip(&mut app);

        let effects = app.reduce(Message::ToggleSound);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::SavePreferences))
        );
        let effects = app.reduce(Message::NextChapter);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::PlayPageTurn))
        );
    }

    #[test]
    fn reduced_motion_change_applies_to_the_next_flip() {
        let mut app = build_test_app(0, MotionPreference::Full);
        app.reduce(Message::ReducedMotionChanged(true));
        let effects = app.reduce(Message::NextChapter);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleSettle { .. }))
        );
    }

    #[test]
    fn safe_quit_shortcut_quits() {
        let mut app = build_test_app(0, MotionPreference::Full);
        let effects = app.reduce(Message::KeyPressed {
            key: Key::Character("q".into()),
            modifiers: Modifiers::default(),
        });
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::QuitSafely))
        );
    }

    #[test]
    fn incomplete_contact_form_is_rejected_locally() {
        let mut app = build_test_app(7, MotionPreference::Full);
        app.reduce(Message::ContactNameChanged("Ada".into()));
        let effects = app.reduce(Message::SubmitContact);
        assert!(
            !effects
                .iter()
                .any(|effect| matches!(effect, Effect::SubmitContact(_)))
        );
        assert!(matches!(app.contact.status, ContactStatus::Failed(_)));
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::ScheduleStatusClear { .. }))
        );
    }

    #[test]
    fn successful_contact_clears_the_form_and_status_expires() {
        let mut app = build_test_app(7, MotionPreference::Full);
        app.contact.name = "Ada".into();
        app.contact.email = "ada@example.com".into();
        app.contact.message = iced::widget::text_editor::Content::with_text("Hello there");

        let effects = app.reduce(Message::SubmitContact);
        assert!(app.contact.is_sending());
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::SubmitContact(request) if request.name == "Ada"))
        );
        assert!(app.reduce(Message::SubmitContact).is_empty());

        let receipt = ContactReceipt {
            message: "Message sent successfully!".into(),
            timestamp: "2026-01-01T00:00:00.000Z".into(),
        };
        let effects = app.reduce(Message::ContactFinished(Ok(ContactOutcome::Sent(receipt))));
        assert_eq!(
            app.contact.status,
            ContactStatus::Sent("Message sent successfully!".into())
        );
        assert!(app.contact.name.is_empty());
        let generation = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleStatusClear { generation } => Some(*generation),
                _ => None,
            })
            .expect("clear scheduled");

        app.reduce(Message::ContactStatusExpired {
            generation: generation.wrapping_sub(1),
        });
        assert!(matches!(app.contact.status, ContactStatus::Sent(_)));
        app.reduce(Message::ContactStatusExpired { generation });
        assert_eq!(app.contact.status, ContactStatus::Idle);
    }

    #[test]
    fn rejected_contact_shows_server_error() {
        let mut app = build_test_app(7, MotionPreference::Full);
        app.contact.status = ContactStatus::Sending;
        app.reduce(Message::ContactFinished(Ok(ContactOutcome::Rejected {
            status: 429,
            error: "Too many requests. Please try again later.".into(),
        })));
        assert_eq!(
            app.contact.status,
            ContactStatus::Failed("Too many requests. Please try again later.".into())
        );
    }
}
