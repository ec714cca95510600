//! Span definitions per operation.

/// Create the span wrapping one profile recomputation.
#[macro_export]
macro_rules! profile_span {
    ($action_count:expr, $city_count:expr) => {
        tracing::info_span!(
            "wayfarer.profile",
            action_count = $action_count,
            city_count = $city_count
        )
    };
}

/// Create a span for one extractor pass.
#[macro_export]
macro_rules! extractor_span {
    ($extractor:expr) => {
        tracing::debug_span!("wayfarer.extractor", extractor = %$extractor)
    };
}
