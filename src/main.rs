//! IR blaster firmware.
//!
//! Hold the button to send bursts of 38 kHz IR; the on-board LED stays lit while a burst is
//! going out.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Delay;
use ir_blaster::{CarrierConfig, Hardware, Never, Result, TransmitConfig, TransmitLoop};
use panic_probe as _;

// The RP2350 boot ROM refuses images without a block describing them.
#[cfg(feature = "pico2")]
#[expect(unsafe_code, reason = "The boot ROM looks for this block at a fixed section")]
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main().unwrap_err();
    panic!("{err}");
}

// Transmission timing is microsecond sensitive, so the loop blocks inside this single task
// instead of awaiting.
fn inner_main() -> Result<Never> {
    let hardware = Hardware::new(CarrierConfig::IR_38KHZ)?;
    let config = TransmitConfig::default();
    info!("IR blaster ready: {}", config);

    let mut transmit_loop = TransmitLoop::new(
        hardware.button,
        hardware.status_led,
        hardware.ir_led,
        Delay,
        config,
    );
    transmit_loop.run()
}
