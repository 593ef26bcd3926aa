//! Resistor meter core: averages a voltage divider on one ADC channel,
//! estimates the unknown resistance, snaps it to the nearest E24 value and
//! shows the color code on a monochrome panel and a 5x5 LED matrix.
//!
//! Drivers come in through `embedded-hal` (ADC, delays),
//! `embedded-graphics` (panel) and `smart-leds` (matrix).

#![cfg_attr(not(test), no_std)]

mod bands;
mod config;
pub mod display;
mod divider;
mod e24;
mod error;
pub mod matrix;
mod meter;
mod sampler;

#[cfg(test)]
mod mock;

pub use bands::{Bands, Color};
pub use config::Config;
pub use display::Panel;
pub use divider::resistance;
pub use e24::{commercial_value, E24};
pub use error::{Error, MeasureError};
pub use meter::{Ohmmeter, Reading};
pub use sampler::Sampler;
