mod clock;
mod severity_policy;

pub use clock::{Clock, FixedClock, SystemClock};
pub use severity_policy::ISeverityPolicy;
