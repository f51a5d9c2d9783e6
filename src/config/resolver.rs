//! Resource configuration lookup.
//!
//! # Responsibilities
//! - Read-only lookup of per-resource settings by resource key
//! - Atomic snapshot replacement on hot reload
//!
//! # Design Decisions
//! - Backed by `arc_swap::ArcSwap`: concurrent lookups are lock-free and a
//!   lookup in progress always observes one consistent snapshot
//! - `lookup` clones the small per-resource struct so requests never hold
//!   the snapshot across an await point

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::{ProxyConfig, ResourceConfig};

/// Read-only view of the current configuration, shared by all requests.
pub struct ConfigResolver {
    current: ArcSwap<ProxyConfig>,
}

impl ConfigResolver {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// Look up the configuration for a resource key in the current snapshot.
    pub fn lookup(&self, resource_key: &str) -> Option<ResourceConfig> {
        self.current.load().resources.get(resource_key).cloned()
    }

    /// Atomically replace the configuration snapshot.
    pub fn swap(&self, config: ProxyConfig) {
        self.current.store(Arc::new(config));
    }
}
