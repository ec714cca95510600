pub mod clock;
pub mod profiler;

pub use clock::{FixedClock, IClock, SystemClock};
pub use profiler::{IProfiler, ProfileInputs};
