#![forbid(unsafe_code)]

//! Scroll observation contract.
//!
//! Viewport-intersection detection is an external collaborator. The binder
//! registers a region declaratively; the host then feeds the observer's
//! enter/leave-back signals back into [`TriggerBinder::handle`] as plain
//! events rather than closures, which keeps the wiring testable and free of
//! shared-mutability knots.
//!
//! [`TriggerBinder::handle`]: crate::binder::TriggerBinder::handle

/// Identifier the observer hands back for a registered region.
pub type RegionId = u64;

/// One trigger-region registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    /// Fire at most one pass; leave-back is not observed.
    pub once: bool,
}

/// Signal reported for a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSignal {
    /// The region entered the trigger zone.
    Enter,
    /// The region left the trigger zone backwards (scrolled back above it).
    LeaveBack,
}

/// Registration surface of the scroll-observation collaborator.
pub trait ScrollObserver {
    /// Register a trigger region, returning its id.
    fn register(&mut self, region: ScrollRegion) -> RegionId;
}

/// Observer that records registrations, for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    regions: Vec<ScrollRegion>,
}

impl RecordingObserver {
    /// Create an empty observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Regions registered so far, in registration order.
    #[must_use]
    pub fn regions(&self) -> &[ScrollRegion] {
        &self.regions
    }
}

impl ScrollObserver for RecordingObserver {
    fn register(&mut self, region: ScrollRegion) -> RegionId {
        self.regions.push(region);
        self.regions.len() as RegionId - 1
    }
}
