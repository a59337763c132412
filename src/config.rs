// config.rs — Compile-time configuration defaults.
//
// Every constant here used to be a hard-coded knob in the benchmark driver;
// each is now the default for a named field on `BenchConfig` or
// `SessionParams` so a run can be parameterized without recompilation.

/// Default compression level. Can be overridden with the `--level` flag.
pub const CLEVEL_DEFAULT: u32 = 6;

/// Default iteration count for each benchmark phase (warm-up and timed,
/// compression and decompression). Overridden with `--loops`.
pub const LOOP_COUNT_DEFAULT: u32 = 1000;

/// Default bound on retries of a transient attach error. `0` means a
/// transient error surfaces immediately. Overridden with `--retries`.
pub const RETRY_LIMIT_DEFAULT: u32 = 0;
