use super::super::super::messages::Message;
use super::super::super::state::App;
use folio_core::{InputEvent, NavKey};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::ArrowRight) => "arrowright".to_string(),
            Key::Named(key::Named::ArrowLeft) => "arrowleft".to_string(),
            Key::Named(key::Named::Home) => "home".to_string(),
            Key::Named(key::Named::End) => "end".to_string(),
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        let nav = |key| Some(Message::Input(InputEvent::Key(key)));
        if Self::shortcut_matches(&self.config.key_next, "arrowright", &pressed, modifiers) {
            nav(NavKey::Right)
        } else if Self::shortcut_matches(&self.config.key_previous, "arrowleft", &pressed, modifiers)
        {
            nav(NavKey::Left)
        } else if Self::shortcut_matches(&self.config.key_first, "home", &pressed, modifiers) {
            nav(NavKey::Home)
        } else if Self::shortcut_matches(&self.config.key_last, "end", &pressed, modifiers) {
            nav(NavKey::End)
        } else if Self::shortcut_matches(&self.config.key_toggle_sound, "m", &pressed, modifiers) {
            Some(Message::ToggleSound)
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    /// Lowercases and maps the common spellings of named keys.
    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return fallback.to_string();
        }
        normalized
            .split('+')
            .map(|token| match token.trim() {
                "spacebar" => "space",
                "right" | "arrow_right" => "arrowright",
                "left" | "arrow_left" => "arrowleft",
                other => other,
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_named_key_aliases() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
        assert_eq!(App::normalize_shortcut_token("Right", "x"), "arrowright");
        assert_eq!(App::normalize_shortcut_token("shift+Left", "x"), "shift+arrowleft");
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert!(App::shortcut_matches("  ", "home", "home", Modifiers::default()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "arrowright",
            "x",
            "arrowright",
            Modifiers::SHIFT,
        ));
        assert!(App::shortcut_matches("ctrl+m", "m", "m", Modifiers::CTRL));
    }
}
