/// Stable stand-in for Rust's unstable `!` type.
///
/// [`TransmitLoop::run`](crate::TransmitLoop::run) returns `Result<Never>`, so the only way out of
/// it is an error.
#[derive(Debug)]
pub enum Never {}
