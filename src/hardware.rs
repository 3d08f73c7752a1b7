//! Pico peripherals for the IR blaster.
//!
//! | Function   | Pin  | Notes                                  |
//! |------------|------|----------------------------------------|
//! | Button     | GP15 | to 3V3, internal pull-down             |
//! | IR LED     | GP16 | PWM slice 0 channel A, via transistor  |
//! | Status LED | GP25 | on-board LED                           |

#[cfg(feature = "defmt")]
use defmt::info;
use embassy_rp::{
    clocks::clk_sys_freq,
    gpio::{Input, Level, Output, Pull},
    pwm::{Config, Pwm, PwmOutput},
};
use embassy_time::Delay;
use embedded_hal::digital::PinState;

use crate::{Button, CarrierConfig, CarrierPulseOut, Error, Result, StatusLed};

pub type IrLed = CarrierPulseOut<PwmOutput<'static>, Delay>;

pub struct Hardware {
    pub button: Button<Input<'static>>,
    pub status_led: StatusLed<Output<'static>>,
    pub ir_led: IrLed,
}

impl Hardware {
    /// Initialise Embassy and claim the pins. Call once.
    ///
    /// # Errors
    /// Fails if `carrier` cannot be generated from the system clock or the PWM channel cannot
    /// be claimed. Neither is recoverable.
    pub fn new(carrier: CarrierConfig) -> Result<Self> {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let button = Button::new(Input::new(peripherals.PIN_15, Pull::Down), PinState::High);

        let status_led = StatusLed::new(Output::new(peripherals.PIN_25, Level::Low), PinState::High)?;

        let clk_sys_hz = clk_sys_freq();
        let pwm_settings = carrier.pwm_settings(clk_sys_hz)?;
        let mut pwm_config = Config::default();
        pwm_config.top = pwm_settings.top;
        pwm_config.divider = pwm_settings.divider.into();
        pwm_config.phase_correct = false;
        pwm_config.compare_a = 0;
        pwm_config.enable = true;
        let pwm = Pwm::new_output_a(peripherals.PWM_SLICE0, peripherals.PIN_16, pwm_config);
        let (channel_a, _) = pwm.split();
        let channel_a = channel_a.ok_or(Error::CarrierChannelUnavailable)?;

        let ir_led = CarrierPulseOut::new(channel_a, Delay, carrier)?;

        #[cfg(feature = "defmt")]
        info!(
            "IR carrier: clk={}Hz div={} top={} -> {}Hz, mark duty={}",
            clk_sys_hz,
            pwm_settings.divider,
            pwm_settings.top,
            pwm_settings.frequency_hz(clk_sys_hz),
            ir_led.mark_duty()
        );

        Ok(Self {
            button,
            status_led,
            ir_led,
        })
    }
}
