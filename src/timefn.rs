// timefn - monotonic timer helpers for the benchmark loops.
//
// std::time::Instant is monotonic and MT-safe on all supported platforms;
// these helpers exist so the runner talks in nanosecond spans rather than
// Duration arithmetic scattered through the timing code.

use std::time::Instant;

/// Nanosecond duration type.
pub type DurationNs = u64;

/// Returns current monotonic timestamp.
pub fn get_time() -> Instant {
    Instant::now()
}

/// Nanoseconds elapsed since `clock_start`.
pub fn clock_span_ns(clock_start: Instant) -> DurationNs {
    clock_start.elapsed().as_nanos() as DurationNs
}

/// Busy-waits until the clock advances by at least 1 ns.
/// Used before a timed loop to synchronize with a clock tick.
pub fn wait_for_next_tick() {
    let clock_start = get_time();
    loop {
        if clock_span_ns(clock_start) > 0 {
            break;
        }
    }
}
