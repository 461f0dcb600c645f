use super::super::state::App;
use super::Effect;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_sound(&mut self, effects: &mut Vec<Effect>) {
        let enabled = !self.session.preferences().sound_enabled;
        if self.session.set_sound_enabled(enabled) {
            info!(enabled, "Page-turn sound toggled");
            effects.push(Effect::SavePreferences);
        }
    }

    /// Applies from the next flip on; a flip in progress keeps its mode.
    pub(super) fn handle_reduced_motion_changed(&mut self, reduced: bool) {
        if self.session.set_reduced_motion(reduced) {
            info!(reduced, "Reduced-motion preference changed");
        }
    }
}
