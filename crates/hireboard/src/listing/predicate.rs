/// Boxed record test used by every list page.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Sentinel meaning "no restriction" in select-style filters.
pub const ANY_SENTINEL: &str = "all";

/// Logical AND over `predicates`; an empty slice matches every record.
pub fn matches_all<T>(record: &T, predicates: &[Predicate<'_, T>]) -> bool {
    predicates.iter().all(|predicate| predicate(record))
}

/// Returns the trimmed filter value, or `None` for the empty / `all` sentinel.
pub fn active_value(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
        None
    } else {
        Some(trimmed)
    }
}

/// Leading integer of a label such as `"5+ years"`. Values past `u32::MAX`
/// saturate instead of failing.
pub fn leading_number(value: &str) -> Option<u32> {
    let mut digits = value
        .trim_start()
        .chars()
        .map_while(|ch| ch.to_digit(10))
        .peekable();
    digits.peek()?;
    Some(digits.fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(digit)
    }))
}

/// Case-insensitive substring test; `needle` must already be lowercase.
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Accumulates predicates for a list page, skipping inactive filter values.
pub struct FilterSet<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Default for FilterSet<'a, T> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'a, T> FilterSet<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn require_if<F>(self, enabled: bool, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        if enabled {
            self.require(predicate)
        } else {
            self
        }
    }

    /// Adds the predicate built by `make` only when `value` is an active
    /// filter value (non-empty, not `all`).
    pub fn when_text<F, P>(self, value: &str, make: F) -> Self
    where
        F: FnOnce(&str) -> P,
        P: Fn(&T) -> bool + 'a,
    {
        match active_value(value) {
            Some(active) => {
                let predicate = make(active);
                self.require(predicate)
            }
            None => self,
        }
    }

    pub fn when_some<V, F, P>(self, value: Option<V>, make: F) -> Self
    where
        F: FnOnce(V) -> P,
        P: Fn(&T) -> bool + 'a,
    {
        match value {
            Some(value) => {
                let predicate = make(value);
                self.require(predicate)
            }
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &T) -> bool {
        matches_all(record, &self.predicates)
    }

    pub fn apply<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
