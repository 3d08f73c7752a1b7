use embassy_time::Duration;

use crate::{BURST_COOLDOWN, BURST_COUNT, BURST_COUNT_DIMMED, BURST_COUNT_ORIGINAL};

/// Compile-time tuning of the [`TransmitLoop`](crate::TransmitLoop).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmitConfig {
    /// How many times the pulse pattern is sent per button press.
    pub burst_count: u16,
    /// Quiet time after a burst before the button is sampled again.
    pub cooldown: Duration,
    /// Sleep between idle samples. `None` busy-polls for the lowest press latency.
    pub idle_poll: Option<Duration>,
}

impl TransmitConfig {
    #[must_use]
    pub const fn new(burst_count: u16) -> Self {
        Self {
            burst_count,
            cooldown: BURST_COOLDOWN,
            idle_poll: None,
        }
    }

    /// 100 repeats, as first shipped.
    pub const ORIGINAL: Self = Self::new(BURST_COUNT_ORIGINAL);
    /// 200 repeats, paired with the dimmed carrier.
    pub const DIMMED: Self = Self::new(BURST_COUNT_DIMMED);

    #[must_use]
    pub const fn with_cooldown(self, cooldown: Duration) -> Self {
        Self { cooldown, ..self }
    }

    #[must_use]
    pub const fn with_idle_poll(self, idle_poll: Duration) -> Self {
        Self {
            idle_poll: Some(idle_poll),
            ..self
        }
    }
}

/// Uses the `IR_BURST_COUNT` chosen at build time.
impl Default for TransmitConfig {
    fn default() -> Self {
        Self::new(BURST_COUNT)
    }
}
