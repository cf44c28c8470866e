//! Runtime settings.
//!
//! There is no configuration file. Settings come from the process
//! environment (optionally seeded from a `.env`, see [`crate::paths`]) and
//! from the connection overrides on the command line.

use crate::constants;
use std::env;

/// Settings that shape how the tool reaches the store and the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Editor program launched on the temporary file.
    pub editor: String,
    /// Named AWS profile; `None` leaves it to the default chain.
    pub profile: Option<String>,
    /// AWS region; `None` leaves it to the default chain.
    pub region: Option<String>,
    /// Alternate Secrets Manager endpoint, for local emulators.
    pub endpoint_url: Option<String>,
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset, so `EDITOR=""` still falls back to
    /// the default editor.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            editor: non_blank(constants::editor::EDITOR_ENV)
                .unwrap_or_else(|| constants::editor::DEFAULT_EDITOR.to_string()),
            profile: None,
            region: None,
            endpoint_url: non_blank(constants::store::ENDPOINT_URL_ENV),
        }
    }

    /// Apply connection overrides given on the command line.
    pub fn with_overrides(mut self, profile: Option<String>, region: Option<String>) -> Self {
        if profile.is_some() {
            self.profile = profile;
        }
        if region.is_some() {
            self.region = region;
        }
        self
    }
}
