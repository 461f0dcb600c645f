pub(crate) fn default_window_width() -> f32 {
    1180.0
}

pub(crate) fn default_window_height() -> f32 {
    820.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_key_previous() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_first() -> String {
    "home".to_string()
}

pub(crate) fn default_key_last() -> String {
    "end".to_string()
}

pub(crate) fn default_key_toggle_sound() -> String {
    "m".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_contact_endpoint() -> String {
    "http://127.0.0.1:8787/api/contact".to_string()
}

pub(crate) fn default_contact_timeout_secs() -> f32 {
    10.0
}
