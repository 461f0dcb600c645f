mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::window;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals),
        ];

        // Frames are only requested while an animated flip needs sampling.
        if app.session.is_sampling() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
