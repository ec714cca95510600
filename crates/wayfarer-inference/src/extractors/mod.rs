//! Signal extractors, one per evidence source.
//!
//! Each extractor is a pure function over its inputs. Favorites and
//! content emit [`InterestSignal`]s for the merger; the avoidance extractor
//! applies its own evidence floor and emits finished avoidances.

pub mod avoidance;
pub mod content;
pub mod favorites;

use wayfarer_core::models::{Confidence, InterestSignal, SignalSource};
use wayfarer_core::taxonomy::InterestCategory;

/// Evidence gathered for one category during a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence<C> {
    pub category: C,
    pub units: u32,
    pub signals: Vec<String>,
}

/// Per-category evidence accumulator that preserves first-seen order.
#[derive(Debug, Clone)]
pub struct Tally<C> {
    entries: Vec<Evidence<C>>,
}

impl<C: Copy + PartialEq> Tally<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `units` of evidence for `category` with one provenance line.
    /// Zero units still records the provenance.
    pub fn add(&mut self, category: C, units: u32, signal: String) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                entry.units += units;
                entry.signals.push(signal);
            }
            None => self.entries.push(Evidence {
                category,
                units,
                signals: vec![signal],
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Evidence<C>> {
        self.entries
    }
}

impl<C: Copy + PartialEq> Default for Tally<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally<InterestCategory> {
    /// Convert to signals with confidence `min(1, units / saturation)`.
    pub fn into_signals(self, source: SignalSource, saturation: f64) -> Vec<InterestSignal> {
        self.entries
            .into_iter()
            .filter(|e| e.units > 0)
            .map(|e| InterestSignal {
                category: e.category,
                weight: Confidence::saturating(e.units, saturation),
                source,
                signals: e.signals,
            })
            .collect()
    }
}

/// Returns 1 the first time `category` is seen in `seen`, 0 afterwards.
/// Keeps a single city or removal from counting twice for one category.
pub(crate) fn first_unit<C: Copy + PartialEq>(seen: &mut Vec<C>, category: C) -> u32 {
    if seen.contains(&category) {
        0
    } else {
        seen.push(category);
        1
    }
}
