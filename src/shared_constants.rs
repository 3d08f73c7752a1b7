use embassy_time::Duration;

use crate::PulsePattern;

/// IR receivers look for a 38 kHz carrier during a mark.
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// Carrier duty cycle as a numerator over 2^16.
///
/// The usual default is 2^15 (50 %). 2^7 dims the IR LED so less light reflects off nearby walls.
pub const CARRIER_DUTY_CYCLE: u16 = 1 << 7;

/// Mark then space, in microseconds.
pub const BURST_PULSES: [u16; 2] = [1_000, 1_500];
pub const BURST_PATTERN: PulsePattern<'static> = PulsePattern::new(&BURST_PULSES);

/// Repeat count of the first firmware revision.
pub const BURST_COUNT_ORIGINAL: u16 = 100;
/// Repeat count of the revision that also dimmed the carrier.
pub const BURST_COUNT_DIMMED: u16 = 200;
/// Repeat count baked in at build time from `IR_BURST_COUNT` (see `build.rs`).
pub const BURST_COUNT: u16 = parse_u16(env!("IR_BURST_COUNT"));

/// Quiet time after every burst before the button is sampled again.
pub const BURST_COOLDOWN: Duration = Duration::from_millis(500);

#[expect(clippy::cast_lossless, reason = "`u16::from` is not const")]
const fn parse_u16(text: &str) -> u16 {
    let mut bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "IR_BURST_COUNT must not be empty");
    let mut value: u16 = 0;
    while let [digit, rest @ ..] = bytes {
        assert!(digit.is_ascii_digit(), "IR_BURST_COUNT must be a decimal number");
        let Some(shifted) = value.checked_mul(10) else {
            panic!("IR_BURST_COUNT does not fit in a u16");
        };
        let Some(sum) = shifted.checked_add(digit.wrapping_sub(b'0') as u16) else {
            panic!("IR_BURST_COUNT does not fit in a u16");
        };
        value = sum;
        bytes = rest;
    }
    value
}
