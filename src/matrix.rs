use crate::bands::Bands;
use embedded_hal::blocking::delay::DelayUs;
use smart_leds::{SmartLedsWrite, RGB8};

/// Cells on the 5x5 matrix.
pub const LED_COUNT: usize = 25;

/// Cells lit for the first, second and multiplier band, in that order.
pub const BAND_CELLS: [usize; 3] = [13, 12, 11];

/// Low time the strip needs after a frame before it latches (µs).
pub const RESET_US: u32 = 100;

/// Builds the matrix frame for `bands`, with every other cell off.
pub fn frame(bands: &Bands) -> [RGB8; LED_COUNT] {
    let mut frame = [RGB8::default(); LED_COUNT];

    for (cell, color) in BAND_CELLS.into_iter().zip(bands.colors()) {
        frame[cell] = color.rgb();
    }

    frame
}

/// Writes the frame for `bands` to the strip and holds the line for the
/// reset time so the next write starts a new frame.
pub fn show<Strip, Delay>(
    strip: &mut Strip,
    delay: &mut Delay,
    bands: &Bands,
) -> Result<(), Strip::Error>
where
    Strip: SmartLedsWrite<Color = RGB8>,
    Delay: DelayUs<u32>,
{
    strip.write(frame(bands).into_iter())?;
    delay.delay_us(RESET_US);
    Ok(())
}
