use thiserror::Error;

/// Contract violations by the driving loop. The model's state is never
/// mutated on the error path, so timing invariants survive whatever
/// failure policy the embedder picks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    #[error("period of {period_ps} ps halves to zero; the shortest representable period is 2 ps")]
    PeriodTooShort { period_ps: u64 },
    #[error("frequency of {freq_hz} Hz cannot be expressed at picosecond resolution")]
    FrequencyOutOfRange { freq_hz: u64 },
    #[error("advance of {delta} ps would step past a phase boundary (half-period is {half_period} ps)")]
    StepTooLarge { delta: u64, half_period: u64 },
}
