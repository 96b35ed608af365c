//! Persisted light/dark/system theme preference and its application to the
//! document root, including live tracking of the OS preference.

pub mod appearance;
pub mod document;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

pub use appearance::{AppearanceListener, SimulatedAppearance, Subscription, SystemAppearance};
pub use document::{DocumentRoot, ThemeTarget, DARK_CLASS};
pub use store::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};

pub const THEME_STORAGE_KEY: &str = "app-theme-preference";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::InvalidPreference(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}' (expected light, dark or system)")]
    InvalidPreference(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reads, persists and applies the theme preference. While `System` is
/// selected exactly one OS listener is installed.
pub struct ThemeManager<S, A, T> {
    store: Arc<S>,
    appearance: Arc<A>,
    target: Arc<T>,
    listener: Mutex<Option<Subscription>>,
}

impl<S, A, T> ThemeManager<S, A, T>
where
    S: PreferenceStore,
    A: SystemAppearance,
    T: ThemeTarget + 'static,
{
    pub fn new(store: Arc<S>, appearance: Arc<A>, target: Arc<T>) -> Self {
        Self {
            store,
            appearance,
            target,
            listener: Mutex::new(None),
        }
    }

    /// Stored preference; `Light` when absent, invalid or unreadable.
    pub fn current_theme(&self) -> ThemePreference {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: ThemeError| {
                tracing::warn!(%err, "ignoring stored theme preference");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                tracing::warn!(%err, "theme preference unavailable, using default");
                ThemePreference::default()
            }
        }
    }

    pub fn resolved_scheme(&self) -> ColorScheme {
        self.resolve(self.current_theme())
    }

    /// Applies the stored preference at startup.
    pub fn init_theme(&self) -> ThemePreference {
        let preference = self.current_theme();
        self.apply_preference(preference);
        preference
    }

    pub fn set_theme(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.store.set(THEME_STORAGE_KEY, preference.as_str())?;
        self.apply_preference(preference);
        tracing::info!(theme = preference.as_str(), "theme preference updated");
        Ok(())
    }

    fn resolve(&self, preference: ThemePreference) -> ColorScheme {
        match preference {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => self.appearance.current(),
        }
    }

    fn apply_preference(&self, preference: ThemePreference) {
        let mut listener = self
            .listener
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Tear down before re-installing so a repeated System never stacks listeners.
        listener.take();

        self.target.apply(self.resolve(preference));

        if preference == ThemePreference::System {
            let target = Arc::clone(&self.target);
            *listener = self
                .appearance
                .subscribe(Box::new(move |scheme| target.apply(scheme)));
            if listener.is_none() {
                tracing::debug!("system appearance changes not observable; applied once");
            }
        }
    }
}
