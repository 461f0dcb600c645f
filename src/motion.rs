//! Host reduced-motion probe.
//!
//! There is no portable desktop API for the preference. The `[accessibility]`
//! table of the config is re-read on every system poll, and with `system` the
//! probe also consults `FOLIO_REDUCED_MOTION`.

use crate::config::MotionPreference;
use std::env;

pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

pub fn resolve(preference: MotionPreference, host_value: Option<&str>) -> bool {
    match preference {
        MotionPreference::Reduce => true,
        MotionPreference::Full => false,
        MotionPreference::System => host_value.is_some_and(host_value_reduces),
    }
}

pub fn probe(preference: MotionPreference) -> bool {
    let host_value = env::var(REDUCED_MOTION_ENV).ok();
    resolve(preference, host_value.as_deref())
}

fn host_value_reduces(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_settings_ignore_host() {
        assert!(resolve(MotionPreference::Reduce, Some("0")));
        assert!(!resolve(MotionPreference::Full, Some("reduce")));
    }

    #[test]
    fn system_follows_host_value() {
        assert!(resolve(MotionPreference::System, Some(" Reduce ")));
        assert!(resolve(MotionPreference::System, Some("1")));
        assert!(!resolve(MotionPreference::System, Some("no-preference")));
        assert!(!resolve(MotionPreference::System, None));
    }
}
