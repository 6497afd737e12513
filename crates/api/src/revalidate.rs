//! Render-invalidation signal.
//!
//! The rendering layer caches page output keyed by path. After every
//! mutating operation the responsible handler bumps the epoch for the
//! affected paths; renderers compare their cached epoch against the
//! current one to decide whether to recompute.

use std::collections::HashMap;
use std::sync::RwLock;

/// Per-path staleness epochs. The only in-process shared mutable state.
#[derive(Debug, Default)]
pub struct Revalidator {
    epochs: RwLock<HashMap<String, u64>>,
}

impl Revalidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path stale by bumping its epoch.
    pub fn revalidate(&self, path: &str) {
        let mut epochs = self.epochs.write().expect("revalidator lock poisoned");
        let epoch = epochs.entry(path.to_string()).or_insert(0);
        *epoch += 1;
        tracing::debug!(path, epoch = *epoch, "Render cache invalidated");
    }

    /// Current epoch for a path. Paths never invalidated report `0`.
    pub fn epoch(&self, path: &str) -> u64 {
        let epochs = self.epochs.read().expect("revalidator lock poisoned");
        epochs.get(path).copied().unwrap_or(0)
    }

    /// Snapshot of all path epochs, for the render layer to poll.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        let epochs = self.epochs.read().expect("revalidator lock poisoned");
        epochs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epochs_start_at_zero_and_increment() {
        let revalidator = Revalidator::new();
        assert_eq!(revalidator.epoch("/"), 0);

        revalidator.revalidate("/");
        revalidator.revalidate("/");
        revalidator.revalidate("/admin");

        assert_eq!(revalidator.epoch("/"), 2);
        assert_eq!(revalidator.epoch("/admin"), 1);
        assert_eq!(revalidator.epoch("/unknown"), 0);
    }

    #[test]
    fn test_snapshot_contains_all_bumped_paths() {
        let revalidator = Revalidator::new();
        revalidator.revalidate("/");
        revalidator.revalidate("/admin");

        let snapshot = revalidator.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("/"), Some(&1));
    }
}
