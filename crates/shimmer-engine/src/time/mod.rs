//! Time subsystem.
//!
//! The shimmer never reads the system clock directly. It asks a
//! [`TimeSource`], so hosts can drive it from their own frame clock and
//! tests can step time by hand.
//! - [`SystemClock`]: monotonic wall clock, the default
//! - [`ManualClock`]: advanced explicitly, shareable through clones

mod source;

pub use source::{ManualClock, SystemClock, TimeSource};
