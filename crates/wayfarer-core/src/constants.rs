/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "WAYFARER_LOG";

/// Prefix for environment-variable config overrides.
pub const ENV_PREFIX: &str = "WAYFARER_";

/// Separator between clauses of the generated profile summary.
pub const SUMMARY_CLAUSE_SEPARATOR: &str = ". ";
