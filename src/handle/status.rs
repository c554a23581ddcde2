//! Handle enablement: per-linker base map and per-document views.

use rustc_hash::FxHashMap;

use super::{HtmlHandle, HtmlHandleRegistry};

/// Enabled flag per canonical handle id.
///
/// Keys are always canonical registered ids; aliases are resolved on the
/// way in and unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleStatus {
    map: FxHashMap<String, bool>,
}

impl HandleStatus {
    /// Seed from every registered handle's default.
    pub fn seeded(registry: &HtmlHandleRegistry) -> Self {
        let map = registry
            .entries()
            .map(|e| (e.id.clone(), e.default_enabled))
            .collect();
        Self { map }
    }

    /// Whether `key` (id or alias) is enabled. Unknown keys are disabled.
    pub fn get(&self, registry: &HtmlHandleRegistry, key: &str) -> bool {
        registry
            .resolve(key)
            .and_then(|id| self.map.get(id).copied())
            .unwrap_or(false)
    }

    /// Set `key` (id or alias). Returns false when the key is unknown.
    pub fn set(&mut self, registry: &HtmlHandleRegistry, key: &str, enabled: bool) -> bool {
        match registry.resolve(key) {
            Some(id) => {
                self.map.insert(id.to_string(), enabled);
                true
            }
            None => false,
        }
    }

    /// Apply a toggle token: `!key` disables, anything else enables.
    pub fn apply_toggle(&mut self, registry: &HtmlHandleRegistry, token: &str) -> bool {
        match token.strip_prefix('!') {
            Some(key) if !key.is_empty() => self.set(registry, key, false),
            _ => self.set(registry, token, true),
        }
    }

    /// Start a document-scoped view on top of this map.
    pub fn view<'a>(&'a self, registry: &'a HtmlHandleRegistry) -> StatusView<'a> {
        StatusView {
            registry,
            base: self,
            overrides: FxHashMap::default(),
        }
    }
}

/// Document-local overrides layered over a [`HandleStatus`].
///
/// Dropping the view discards the overrides; the base map is never touched.
#[derive(Debug)]
pub struct StatusView<'a> {
    registry: &'a HtmlHandleRegistry,
    base: &'a HandleStatus,
    overrides: FxHashMap<String, bool>,
}

impl<'a> StatusView<'a> {
    /// Override `key` (id or alias) for this document. Unknown keys are ignored.
    pub fn set_override(&mut self, key: &str, enabled: bool) -> bool {
        match self.registry.resolve(key) {
            Some(id) => {
                self.overrides.insert(id.to_string(), enabled);
                true
            }
            None => false,
        }
    }

    /// Whether `key` (id or alias) is enabled in this document.
    pub fn is_enabled(&self, key: &str) -> bool {
        let Some(id) = self.registry.resolve(key) else {
            return false;
        };
        match self.overrides.get(id) {
            Some(&enabled) => enabled,
            None => self.base.get(self.registry, id),
        }
    }

    /// Enabled handles in registration order.
    pub fn enabled_handles(&self) -> Vec<(&'a str, &'a HtmlHandle)> {
        self.registry
            .entries()
            .filter(|e| self.is_enabled(&e.id))
            .map(|e| (e.id.as_str(), &e.handle))
            .collect()
    }

    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{LINK_ASSETS, NO_COMMENT, ZIP};

    #[test]
    fn test_seeded_from_defaults() {
        let registry = HtmlHandleRegistry::builtin();
        let status = HandleStatus::seeded(&registry);
        assert!(status.get(&registry, ZIP));
        assert!(status.get(&registry, "allow-link-assets"));
        assert!(!status.get(&registry, "nope"));
    }

    #[test]
    fn test_toggles() {
        let registry = HtmlHandleRegistry::builtin();
        let mut status = HandleStatus::seeded(&registry);

        assert!(status.apply_toggle(&registry, "!allow-zip"));
        assert!(!status.get(&registry, ZIP));
        assert!(status.apply_toggle(&registry, "zip"));
        assert!(status.get(&registry, ZIP));
        assert!(!status.apply_toggle(&registry, "!bogus"));
        assert!(!status.apply_toggle(&registry, "!"));
    }

    #[test]
    fn test_unknown_keys_never_inserted() {
        let registry = HtmlHandleRegistry::builtin();
        let mut status = HandleStatus::seeded(&registry);
        let before = status.clone();
        assert!(!status.set(&registry, "bogus", true));
        assert_eq!(status, before);
    }

    #[test]
    fn test_view_overrides_are_local() {
        let registry = HtmlHandleRegistry::builtin();
        let status = HandleStatus::seeded(&registry);

        {
            let mut view = status.view(&registry);
            assert!(view.set_override("allow-zip", false));
            assert!(!view.set_override("bogus", false));
            assert!(!view.is_enabled(ZIP));
            let ids: Vec<_> = view.enabled_handles().into_iter().map(|(id, _)| id).collect();
            assert_eq!(ids, [NO_COMMENT, LINK_ASSETS]);
        }

        let view = status.view(&registry);
        assert!(view.is_enabled(ZIP));
        assert!(!view.has_overrides());
    }
}
