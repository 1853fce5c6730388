use crate::ClockError;

/// Phase of the clock signal at the model's current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    High,
    Low,
}

impl Phase {
    pub fn is_high(self) -> bool {
        matches!(self, Phase::High)
    }
}

const PS_PER_SEC: f64 = 1e12;

/// An idealized square-wave clock sampled at caller-chosen instants.
///
/// The driving loop asks [`time_to_next_edge`](Self::time_to_next_edge) how
/// far it may safely step global simulated time, advances by that (or a
/// smaller) amount, reports the step back through
/// [`advance`](Self::advance), and reads the returned [`Phase`] to decide
/// whether to toggle the clock line feeding the circuit model.
///
/// All times are absolute picosecond timestamps. Construction places the
/// model one tick past the first theoretical rising edge, so time 0 is the
/// reset instant, not a clock edge; the first advance call folds that
/// overdue edge ([`time_to_next_edge`](Self::time_to_next_edge) returns 0
/// until it does).
#[derive(Debug, Clone)]
pub struct ClockModel {
    half_period: u64,
    current_time: u64,
    last_rising_edge: u64,
    rising_edges: u64,
}

impl ClockModel {
    /// Creates a clock with a full-cycle period of `period_ps` picoseconds.
    ///
    /// Odd periods lose their least-significant bit to the half-period
    /// division. Periods shorter than 2 ps are rejected.
    pub fn with_period(period_ps: u64) -> Result<Self, ClockError> {
        let half_period = period_ps / 2;
        if half_period == 0 {
            return Err(ClockError::PeriodTooShort { period_ps });
        }
        Ok(Self {
            half_period,
            current_time: period_ps + 1,
            last_rising_edge: 0,
            rising_edges: 0,
        })
    }

    /// Creates a clock from a frequency in Hz.
    ///
    /// Frequencies that do not divide evenly into picoseconds are
    /// truncated; picosecond resolution caps usable frequencies at 500 GHz.
    pub fn with_frequency(freq_hz: u64) -> Result<Self, ClockError> {
        Self::with_period(period_from_frequency(freq_hz)?)
    }

    /// Reconfigures the period, leaving the current time and edge history
    /// untouched.
    ///
    /// Takes effect on the next edge-distance query and the next advance.
    /// No attempt is made to reconcile the new period with the current
    /// phase position: shrinking the period past the point already reached
    /// in the cycle makes the next [`advance`](Self::advance) fold forward
    /// to the nearer edge instead of the one a linear projection of the old
    /// period would predict.
    pub fn set_period(&mut self, period_ps: u64) -> Result<(), ClockError> {
        let half_period = period_ps / 2;
        if half_period == 0 {
            return Err(ClockError::PeriodTooShort { period_ps });
        }
        self.half_period = half_period;
        Ok(())
    }

    /// Reconfigures the period from a frequency in Hz, with the same
    /// truncation rules as [`with_frequency`](Self::with_frequency).
    pub fn set_frequency(&mut self, freq_hz: u64) -> Result<(), ClockError> {
        self.half_period = period_from_frequency(freq_hz)? / 2;
        Ok(())
    }

    /// Distance in picoseconds from the current instant to the nearest
    /// upcoming edge, rising or falling.
    ///
    /// Returns 0 when an edge is already overdue (the construction
    /// transient, or a mid-cycle period shrink); the driver should then
    /// service the clock with a zero-length advance before stepping time.
    pub fn time_to_next_edge(&self) -> u64 {
        let falling = self.last_rising_edge + self.half_period;
        if falling > self.current_time {
            falling - self.current_time
        } else {
            let rising = self.last_rising_edge + 2 * self.half_period;
            rising.saturating_sub(self.current_time)
        }
    }

    /// Moves the clock forward by `delta` picoseconds and reports the phase
    /// at the new instant.
    ///
    /// `delta` must not exceed the half-period: a single call may cross at
    /// most one phase boundary, which the driver guarantees by respecting
    /// [`time_to_next_edge`](Self::time_to_next_edge). A larger step fails
    /// with [`ClockError::StepTooLarge`] before any state changes.
    pub fn advance(&mut self, delta: u64) -> Result<Phase, ClockError> {
        if delta > self.half_period {
            return Err(ClockError::StepTooLarge {
                delta,
                half_period: self.half_period,
            });
        }
        self.current_time += delta;

        if self.current_time >= self.last_rising_edge + 2 * self.half_period {
            // Crossed into the next high phase.
            self.last_rising_edge += 2 * self.half_period;
            self.rising_edges += 1;
            Ok(Phase::High)
        } else if self.current_time >= self.last_rising_edge + self.half_period {
            // Low half of the cycle.
            Ok(Phase::Low)
        } else {
            // Still in the high half.
            Ok(Phase::High)
        }
    }

    /// Full-cycle period in picoseconds.
    pub fn period(&self) -> u64 {
        2 * self.half_period
    }

    pub fn half_period(&self) -> u64 {
        self.half_period
    }

    /// Absolute simulated time the model is at, in picoseconds.
    pub fn time(&self) -> u64 {
        self.current_time
    }

    /// Absolute time of the most recently crossed rising edge.
    pub fn last_rising_edge(&self) -> u64 {
        self.last_rising_edge
    }

    /// Number of rising edges crossed since construction.
    pub fn rising_edges(&self) -> u64 {
        self.rising_edges
    }

    /// True exactly at a rising transition instant.
    pub fn is_rising_edge(&self) -> bool {
        self.current_time == self.last_rising_edge
    }

    /// True exactly at a falling transition instant.
    pub fn is_falling_edge(&self) -> bool {
        self.current_time == self.last_rising_edge + self.half_period
    }

    /// True while the signal is in its high phase (post-rising,
    /// pre-falling).
    pub fn is_high(&self) -> bool {
        self.current_time - self.last_rising_edge < self.half_period
    }
}

fn period_from_frequency(freq_hz: u64) -> Result<u64, ClockError> {
    if freq_hz == 0 {
        return Err(ClockError::FrequencyOutOfRange { freq_hz });
    }
    let period_ps = (PS_PER_SEC / freq_hz as f64) as u64;
    if period_ps / 2 == 0 {
        return Err(ClockError::FrequencyOutOfRange { freq_hz });
    }
    Ok(period_ps)
}
