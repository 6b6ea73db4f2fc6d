//! Entity registry
//!
//! Maps `(domain, platform, unique_id)` onto stable entity ids of the form
//! `"{domain}.{slug}"`. Integrations register their entities at setup and
//! may deregister stale ids left behind by earlier versions.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    domain: String,
    platform: String,
    unique_id: String,
}

/// In-memory registry of entity ids
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entries: RwLock<HashMap<RegistryKey, String>>,
}

impl EntityRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity and return its entity id
    ///
    /// The id is derived from the display name (`"{domain}.{slug}"`) and
    /// de-duplicated with a numeric suffix if the slug is already taken by
    /// another entity. Registering the same `(domain, platform, unique_id)`
    /// again returns the existing id unchanged.
    pub fn register(
        &self,
        domain: &str,
        platform: &str,
        unique_id: &str,
        display_name: &str,
    ) -> String {
        let key = RegistryKey {
            domain: domain.to_owned(),
            platform: platform.to_owned(),
            unique_id: unique_id.to_owned(),
        };
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&key) {
            return existing.clone();
        }

        let base = format!("{domain}.{}", slugify(display_name));
        let mut entity_id = base.clone();
        let mut n = 2;
        while entries.values().any(|id| *id == entity_id) {
            entity_id = format!("{base}_{n}");
            n += 1;
        }
        debug!(%entity_id, unique_id, "entity registered");
        entries.insert(key, entity_id.clone());
        entity_id
    }

    /// Look up the entity id registered for a unique id
    #[must_use]
    pub fn entity_id_for(&self, domain: &str, platform: &str, unique_id: &str) -> Option<String> {
        let key = RegistryKey {
            domain: domain.to_owned(),
            platform: platform.to_owned(),
            unique_id: unique_id.to_owned(),
        };
        self.entries.read().get(&key).cloned()
    }

    /// Deregister an entity by entity id; returns whether it was present
    pub fn remove(&self, entity_id: &str) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, id| id != entity_id);
        before != entries.len()
    }

    /// Number of registered entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Lowercase, alphanumeric-and-underscore slug of a display name.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_separator = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("unnamed");
    }
    slug
}
