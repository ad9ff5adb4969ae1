//! Chart instances and the slots that own them.
//!
//! A slot holds at most one live instance. Installing a new instance always
//! disposes the previous one first, and the [`ChartEngine`] counts live
//! instances so a leak shows up as a count that keeps growing.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use super::projection::{LanguageHistogram, StarSeries};

/// Which slot a chart belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Language distribution, drawn as proportions
    Languages,
    /// Top repositories by stars, drawn as bars
    TopStars,
}

/// Data a chart instance was configured with.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Doughnut(LanguageHistogram),
    Bar(StarSeries),
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Doughnut(_) => ChartKind::Languages,
            ChartSpec::Bar(_) => ChartKind::TopStars,
        }
    }
}

/// Factory for chart instances; tracks how many are alive.
#[derive(Debug, Clone, Default)]
pub struct ChartEngine {
    next_id: Arc<AtomicU64>,
    live: Arc<AtomicUsize>,
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a new chart instance.
    pub fn create(&self, spec: ChartSpec) -> ChartInstance {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.live.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(id, kind = ?spec.kind(), "Chart created");
        ChartInstance {
            id,
            spec,
            live: Arc::clone(&self.live),
            disposed: false,
        }
    }

    /// Number of instances created and not yet disposed.
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }
}

/// One configured chart.
///
/// Dropping an instance disposes it, so an instance can never outlive its
/// bookkeeping even on an unexpected path.
#[derive(Debug)]
pub struct ChartInstance {
    id: u64,
    spec: ChartSpec,
    live: Arc<AtomicUsize>,
    disposed: bool,
}

impl ChartInstance {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Release the instance's resources.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.live.fetch_sub(1, Ordering::Relaxed);
            tracing::trace!(id = self.id, kind = ?self.spec.kind(), "Chart disposed");
        }
    }
}

impl Drop for ChartInstance {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owning slot for one chart.
#[derive(Debug)]
pub struct ChartSlot {
    kind: ChartKind,
    instance: Option<ChartInstance>,
}

impl ChartSlot {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            instance: None,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Current instance, if any.
    pub fn get(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.instance.is_some()
    }

    /// Dispose the held instance, if any. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        match self.instance.take() {
            Some(instance) => {
                instance.dispose();
                true
            }
            None => false,
        }
    }

    /// Replace the held instance, disposing the old one first.
    pub fn install(&mut self, instance: ChartInstance) {
        debug_assert_eq!(instance.spec().kind(), self.kind);
        self.release();
        self.instance = Some(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_counts_live_instances() {
        let engine = ChartEngine::new();
        let a = engine.create(ChartSpec::Bar(StarSeries::default()));
        let b = engine.create(ChartSpec::Bar(StarSeries::default()));
        assert_eq!(engine.live_count(), 2);
        assert_ne!(a.id(), b.id());

        a.dispose();
        assert_eq!(engine.live_count(), 1);
        drop(b);
        assert_eq!(engine.live_count(), 0);
    }

    #[test]
    fn test_slot_install_disposes_previous() {
        let engine = ChartEngine::new();
        let mut slot = ChartSlot::new(ChartKind::TopStars);

        slot.install(engine.create(ChartSpec::Bar(StarSeries::default())));
        let first_id = slot.get().map(ChartInstance::id);
        slot.install(engine.create(ChartSpec::Bar(StarSeries::default())));

        assert_eq!(engine.live_count(), 1);
        assert_ne!(slot.get().map(ChartInstance::id), first_id);
    }

    #[test]
    fn test_slot_release() {
        let engine = ChartEngine::new();
        let mut slot = ChartSlot::new(ChartKind::Languages);
        assert!(!slot.release());

        slot.install(engine.create(ChartSpec::Doughnut(LanguageHistogram::default())));
        assert!(slot.is_occupied());
        assert!(slot.release());
        assert!(!slot.is_occupied());
        assert_eq!(engine.live_count(), 0);
    }
}
