use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` tells `derive_more` that the payload is plain data, not a nested
    // error to chain.
    #[display("Carrier frequency of {_0} Hz cannot be generated from the system clock")]
    CarrierFrequencyUnreachable(#[error(not(source))] u32),

    #[display("PWM channel for the IR carrier is unavailable")]
    CarrierChannelUnavailable,

    #[display("Error reading input state")]
    CannotReadInputState,

    #[display("Error setting output state")]
    CannotSetOutputState,

    #[display("Error setting PWM duty cycle")]
    CannotSetDutyCycle,
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}
