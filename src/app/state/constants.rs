use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

/// How long a contact status line stays visible.
pub(crate) const CONTACT_STATUS_TTL: Duration = Duration::from_secs(3);
/// Cadence for SIGINT and host preference polling.
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(500);
pub(crate) const NAV_BAR_HEIGHT: f32 = 64.0;
pub(crate) const PAGE_PADDING: f32 = 24.0;
