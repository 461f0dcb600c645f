mod constants;
mod contact;

pub(crate) use constants::{
    CONTACT_STATUS_TTL, NAV_BAR_HEIGHT, PAGE_PADDING, PAGE_SCROLL_ID, SIGNAL_POLL_INTERVAL,
};
pub(crate) use contact::{ContactFormState, ContactStatus};

use super::messages::Message;
use crate::cache::StoredPreferences;
use crate::config::AppConfig;
use crate::motion;
use folio_core::{ChapterIndex, Preferences, Session, Surface};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Task};
use std::path::PathBuf;
use tracing::info;

/// Core application state.
pub struct App {
    pub(crate) session: Session,
    pub(crate) config: AppConfig,
    /// Re-read on every system poll for `[accessibility]` changes.
    pub(crate) config_path: PathBuf,
    pub(crate) prefs_path: PathBuf,
    /// Last cursor position; mouse button events carry none.
    pub(crate) cursor: Option<Point>,
    pub(crate) mouse_down: bool,
    pub(crate) page_offset: AbsoluteOffset,
    /// Page offset at the start of the current gesture.
    pub(crate) scroll_hold: Option<AbsoluteOffset>,
    pub(crate) contact: ContactFormState,
}

impl App {
    pub(crate) fn bootstrap(
        config: AppConfig,
        config_path: PathBuf,
        start: ChapterIndex,
        stored: StoredPreferences,
        prefs_path: PathBuf,
    ) -> (App, Task<Message>) {
        let preferences = Preferences {
            reduced_motion: motion::probe(config.reduced_motion),
            sound_enabled: stored.sound_enabled,
        };
        info!(
            chapter = start.get(),
            title = start.chapter().title,
            reduced_motion = preferences.reduced_motion,
            sound_enabled = preferences.sound_enabled,
            "Opening folio"
        );
        let surface = Surface {
            left: 0.0,
            width: config.window_width,
        };
        let app = App {
            session: Session::new(start, preferences, surface),
            config,
            config_path,
            prefs_path,
            cursor: None,
            mouse_down: false,
            page_offset: AbsoluteOffset::default(),
            scroll_hold: None,
            contact: ContactFormState::new(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let chapter = self.session.current().chapter();
        format!("{} - {}", chapter.title, crate::content::PERSONAL_INFO.name)
    }

    pub(crate) fn stored_preferences(&self) -> StoredPreferences {
        StoredPreferences {
            sound_enabled: self.session.preferences().sound_enabled,
        }
    }
}
