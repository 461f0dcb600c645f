mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::cache::StoredPreferences;
use crate::config::AppConfig;
use crate::theme::comic_theme;
use folio_core::ChapterIndex;
use iced::{Point, Size, window};
use std::path::PathBuf;

/// Launches the folio window on `start`.
pub fn run_app(
    config: AppConfig,
    config_path: PathBuf,
    start: ChapterIndex,
    stored: StoredPreferences,
    prefs_path: PathBuf,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| comic_theme())
        .run_with(move || App::bootstrap(config, config_path, start, stored, prefs_path))
}
