use crate::models::{Action, DiscoveryAggregates, ObservedProfile, TripRoute};

use super::clock::IClock;

/// Everything a profiler reads: the ordered action log, the aggregate
/// counters, and the current trip route.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInputs<'a> {
    pub actions: &'a [Action],
    pub aggregates: &'a DiscoveryAggregates,
    pub route: &'a TripRoute,
}

/// Passive preference inference.
pub trait IProfiler: Send + Sync {
    /// Recompute a profile from scratch. Must be deterministic for a fixed
    /// clock and unchanged inputs.
    fn infer(&self, inputs: ProfileInputs<'_>, clock: &dyn IClock) -> ObservedProfile;
}
