use std::collections::BTreeSet;
use std::sync::Mutex;

use super::ColorScheme;

pub const DARK_CLASS: &str = "dark";

/// Anything a resolved scheme can be applied to.
pub trait ThemeTarget: Send + Sync {
    fn apply(&self, scheme: ColorScheme);
}

#[derive(Debug, Default)]
struct RootState {
    classes: BTreeSet<String>,
    color_scheme: Option<ColorScheme>,
    applied: usize,
}

/// Root element state: the `dark` class toggle and the `color-scheme`
/// style property.
#[derive(Debug, Default)]
pub struct DocumentRoot {
    state: Mutex<RootState>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_state(|state| state.classes.contains(class))
    }

    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.with_state(|state| state.color_scheme)
    }

    /// How many times a scheme was applied.
    pub fn applied_count(&self) -> usize {
        self.with_state(|state| state.applied)
    }

    fn with_state<R>(&self, read: impl FnOnce(&mut RootState) -> R) -> R {
        let mut guard = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        read(&mut guard)
    }
}

impl ThemeTarget for DocumentRoot {
    fn apply(&self, scheme: ColorScheme) {
        self.with_state(|state| {
            match scheme {
                ColorScheme::Dark => {
                    state.classes.insert(DARK_CLASS.to_string());
                }
                ColorScheme::Light => {
                    state.classes.remove(DARK_CLASS);
                }
            }
            state.color_scheme = Some(scheme);
            state.applied += 1;
        });
        tracing::debug!(scheme = scheme.as_str(), "color scheme applied");
    }
}
