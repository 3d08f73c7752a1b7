//! Mark/space timing for one IR transmission.

use embassy_time::Duration;

/// One interval of a [`PulsePattern`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pulse {
    /// Carrier on for this many microseconds.
    Mark(u16),
    /// Carrier off for this many microseconds.
    Space(u16),
}

impl Pulse {
    #[must_use]
    pub const fn duration_us(self) -> u16 {
        match self {
            Self::Mark(duration_us) | Self::Space(duration_us) => duration_us,
        }
    }

    #[must_use]
    pub const fn is_mark(self) -> bool {
        matches!(self, Self::Mark(_))
    }
}

/// Durations in microseconds, alternating mark and space, starting with a mark.
///
/// An empty pattern is allowed and transmits nothing. A pattern may end on either a mark or a
/// space; the carrier is always left off afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulsePattern<'a> {
    durations_us: &'a [u16],
}

impl<'a> PulsePattern<'a> {
    #[must_use]
    pub const fn new(durations_us: &'a [u16]) -> Self {
        Self { durations_us }
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'a [u16] {
        self.durations_us
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.durations_us.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.durations_us.is_empty()
    }

    /// The intervals in transmission order.
    pub fn pulses(&self) -> impl Iterator<Item = Pulse> + 'a {
        [true, false]
            .into_iter()
            .cycle()
            .zip(self.durations_us.iter().copied())
            .map(|(is_mark, duration_us)| {
                if is_mark {
                    Pulse::Mark(duration_us)
                } else {
                    Pulse::Space(duration_us)
                }
            })
    }

    /// Wall-clock time needed to play the whole pattern once.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let micros = self
            .durations_us
            .iter()
            .fold(0_u64, |total, &duration_us| {
                total.saturating_add(u64::from(duration_us))
            });
        Duration::from_micros(micros)
    }
}
