// Single source of truth for all default values.

// --- Favorite extractor ---
pub const DEFAULT_FAVORITE_SATURATION: f64 = 5.0;

// --- Content extractor ---
pub const DEFAULT_CONTENT_SATURATION: f64 = 3.0;

// --- Avoidance extractor ---
pub const DEFAULT_AVOIDANCE_SATURATION: f64 = 4.0;
pub const DEFAULT_MIN_AVOIDANCE_EVIDENCE: u32 = 2;
pub const DEFAULT_SELECTIVITY_REMOVAL_THRESHOLD: u32 = 3;

// --- Merger ---
pub const DEFAULT_CORROBORATION_FACTOR: f64 = 0.5;
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_TOP_INTEREST_COUNT: usize = 3;

// --- Travel style ---
pub const DEFAULT_SLOW_PACE_MIN_NIGHTS: f64 = 3.0;
pub const DEFAULT_MODERATE_PACE_MIN_NIGHTS: f64 = 2.0;
pub const DEFAULT_HIDDEN_GEM_MIN_SELECTIONS: u32 = 2;
pub const DEFAULT_HIDDEN_GEM_MIN_SHARE: f64 = 0.5;

// --- Behavior patterns ---
pub const DEFAULT_ACTIVE_WINDOW_SECS: i64 = 60;

// --- Summary ---
pub const DEFAULT_ENGAGED_FAVORITE_RATE: f64 = 0.3;
pub const DEFAULT_SELECTIVE_REMOVAL_RATE: f64 = 0.4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
