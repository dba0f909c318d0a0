//! Selection state and shareable-location sync.
//!
//! The current selection is mirrored into the shareable location as an
//! `item` query parameter so any entry can be linked to directly. All
//! location writes are best-effort; a failing sync never blocks selection.

use log::debug;

/// Query parameter carrying the current selection key.
pub const ITEM_PARAM: &str = "item";

/// Best-effort bridge to the shareable location (a URL query string).
pub trait LocationSync {
    /// Current query string without the leading `?`, if one exists.
    fn read_query(&self) -> Option<String>;
    /// Replace the query string without reloading.
    fn write_query(&mut self, query: &str);
}

/// In-memory location for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    query: Option<String>,
}

impl MemoryLocation {
    /// A location with no query string.
    pub fn new() -> Self {
        Self::default()
    }

    /// A location seeded with a query string.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

impl LocationSync for MemoryLocation {
    fn read_query(&self) -> Option<String> {
        self.query.clone()
    }

    fn write_query(&mut self, query: &str) {
        self.query = Some(query.to_string());
    }
}

/// Extract the selection key from a query string like `item=hero&tab=code`.
pub fn read_item_param(query: &str) -> Option<&str> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(ITEM_PARAM)?.strip_prefix('='))
        .filter(|value| !value.is_empty())
}

/// Rewrite a query string so its `item` parameter is `key`, preserving any
/// other parameters.
pub fn write_item_param(query: &str, key: &str) -> String {
    let mut pairs: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.strip_prefix(ITEM_PARAM).and_then(|r| r.strip_prefix('=')).is_none())
        .collect();
    let item = format!("{ITEM_PARAM}={key}");
    pairs.push(&item);
    pairs.join("&")
}

/// Holds the current selection and mirrors it into the shareable location.
/// Last write wins; there is no history stack of its own.
pub struct SelectionController<S: LocationSync> {
    current: String,
    sync: S,
}

impl<S: LocationSync> SelectionController<S> {
    /// Start from the key already in the shareable location, falling back
    /// to `default_key` when none is present.
    pub fn new(default_key: impl Into<String>, sync: S) -> Self {
        let default_key = default_key.into();
        let query = sync.read_query();
        let current = query
            .as_deref()
            .and_then(read_item_param)
            .map(str::to_string)
            .unwrap_or(default_key);
        Self { current, sync }
    }

    /// The currently selected key.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Swap in a different location bridge and mirror the current
    /// selection into it.
    pub fn set_location_sync(&mut self, sync: S) {
        self.sync = sync;
        let query = self.sync.read_query().unwrap_or_default();
        let next = write_item_param(&query, &self.current);
        self.sync.write_query(&next);
    }

    /// Select a key and mirror it into the shareable location.
    pub fn select(&mut self, key: impl Into<String>) {
        self.current = key.into();
        let query = self.sync.read_query().unwrap_or_default();
        let next = write_item_param(&query, &self.current);
        self.sync.write_query(&next);
        debug!("selection changed to {}", self.current);
    }

    /// Re-read the shareable location after an external change (history
    /// back/forward). Returns the key now in effect.
    pub fn handle_external_change(&mut self, default_key: &str) -> &str {
        let query = self.sync.read_query();
        self.current = query
            .as_deref()
            .and_then(read_item_param)
            .unwrap_or(default_key)
            .to_string();
        debug!("selection re-synced to {}", self.current);
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_item_param_shapes() {
        assert_eq!(read_item_param("item=hero"), Some("hero"));
        assert_eq!(read_item_param("tab=code&item=cta"), Some("cta"));
        assert_eq!(read_item_param("item="), None);
        assert_eq!(read_item_param("items=hero"), None);
        assert_eq!(read_item_param(""), None);
    }

    #[test]
    fn write_item_param_preserves_other_pairs() {
        assert_eq!(write_item_param("", "hero"), "item=hero");
        assert_eq!(write_item_param("item=old", "hero"), "item=hero");
        assert_eq!(write_item_param("tab=code&item=old", "hero"), "tab=code&item=hero");
    }

    #[test]
    fn starts_from_location_when_present() {
        let controller =
            SelectionController::new("hero", MemoryLocation::with_query("item=pricing"));
        assert_eq!(controller.current(), "pricing");
    }

    #[test]
    fn falls_back_to_default_key() {
        let controller = SelectionController::new("hero", MemoryLocation::new());
        assert_eq!(controller.current(), "hero");
    }

    #[test]
    fn select_mirrors_into_location() {
        let mut controller = SelectionController::new("hero", MemoryLocation::new());
        controller.select("stats");
        assert_eq!(controller.current(), "stats");
        assert_eq!(controller.sync.read_query().as_deref(), Some("item=stats"));
    }

    #[test]
    fn swapping_the_location_bridge_mirrors_the_selection() {
        let mut controller = SelectionController::new("hero", MemoryLocation::new());
        controller.select("blog");
        controller.set_location_sync(MemoryLocation::with_query("tab=code"));
        assert_eq!(
            controller.sync.read_query().as_deref(),
            Some("tab=code&item=blog")
        );
    }

    #[test]
    fn external_change_is_resynced() {
        let mut controller =
            SelectionController::new("hero", MemoryLocation::with_query("item=cta"));
        controller.sync.write_query("item=faqs");
        assert_eq!(controller.handle_external_change("hero"), "faqs");
        controller.sync.write_query("tab=code");
        assert_eq!(controller.handle_external_change("hero"), "hero");
    }
}
