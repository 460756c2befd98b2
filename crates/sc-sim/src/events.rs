//! Stop conditions for a run.

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopReason {
    /// All `floor(duration / dt)` steps completed.
    DurationElapsed,
    /// Voltage fell below the threshold. `t_s` is the elapsed time before the
    /// failing step was taken; `volts` is the voltage that crossed.
    ThresholdBreached { t_s: f64, volts: f64 },
}

impl StopReason {
    pub fn is_breach(&self) -> bool {
        matches!(self, StopReason::ThresholdBreached { .. })
    }
}

/// Strictly-below comparison; sitting exactly on the threshold keeps running.
pub(crate) fn below_threshold(volts: f64, threshold: f64) -> bool {
    volts < threshold
}
