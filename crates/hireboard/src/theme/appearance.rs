use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::ColorScheme;

pub type AppearanceListener = Box<dyn Fn(ColorScheme) + Send + Sync>;

/// Source of the operating system's light/dark preference.
pub trait SystemAppearance: Send + Sync {
    fn current(&self) -> ColorScheme;

    /// Registers a change listener. `None` means the platform cannot report
    /// changes; callers fall back to the value read at apply time.
    fn subscribe(&self, listener: AppearanceListener) -> Option<Subscription>;
}

/// Listener registration; dropping it (or calling `cancel`) unregisters.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type SharedListener = Arc<dyn Fn(ColorScheme) + Send + Sync>;

struct SimulatedState {
    scheme: ColorScheme,
    listeners: BTreeMap<u64, SharedListener>,
    next_id: u64,
}

/// In-process appearance source whose preference is flipped by hand; used by
/// the console and in tests.
pub struct SimulatedAppearance {
    state: Arc<Mutex<SimulatedState>>,
    live_updates: bool,
}

impl SimulatedAppearance {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimulatedState {
                scheme: initial,
                listeners: BTreeMap::new(),
                next_id: 0,
            })),
            live_updates: true,
        }
    }

    /// A platform that reports the current value but no change events.
    pub fn without_live_updates(initial: ColorScheme) -> Self {
        Self {
            live_updates: false,
            ..Self::new(initial)
        }
    }

    /// Changes the OS preference and notifies every registered listener.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let listeners: Vec<SharedListener> = {
            let mut state = lock(&self.state);
            if state.scheme == scheme {
                return;
            }
            state.scheme = scheme;
            state.listeners.values().cloned().collect()
        };

        for listener in listeners {
            listener(scheme);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.state).listeners.len()
    }
}

impl SystemAppearance for SimulatedAppearance {
    fn current(&self) -> ColorScheme {
        lock(&self.state).scheme
    }

    fn subscribe(&self, listener: AppearanceListener) -> Option<Subscription> {
        if !self.live_updates {
            return None;
        }

        let id = {
            let mut state = lock(&self.state);
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, Arc::from(listener));
            id
        };

        let weak: Weak<Mutex<SimulatedState>> = Arc::downgrade(&self.state);
        Some(Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                lock(&state).listeners.remove(&id);
            }
        }))
    }
}

fn lock(state: &Mutex<SimulatedState>) -> MutexGuard<'_, SimulatedState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let appearance = SimulatedAppearance::new(ColorScheme::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let subscription = appearance
            .subscribe(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .expect("live updates supported");
        assert_eq!(appearance.listener_count(), 1);

        appearance.set_scheme(ColorScheme::Dark);
        appearance.set_scheme(ColorScheme::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(subscription);
        assert_eq!(appearance.listener_count(), 0);
        appearance.set_scheme(ColorScheme::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn legacy_platform_refuses_subscriptions() {
        let appearance = SimulatedAppearance::without_live_updates(ColorScheme::Dark);
        assert!(appearance.subscribe(Box::new(|_| {})).is_none());
        assert_eq!(appearance.current(), ColorScheme::Dark);
    }
}
