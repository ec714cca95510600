//! # wayfarer-session
//!
//! The collaborator that feeds the inference engine: records discovery
//! actions into an append-only log, keeps the aggregate counters beside it,
//! and tracks per-place-type dwell time as an explicit state machine.

pub mod dwell;
pub mod log;
pub mod session;

pub use dwell::DwellState;
pub use log::ActionLog;
pub use session::DiscoverySession;
