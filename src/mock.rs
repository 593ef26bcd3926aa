//! Recording stand-ins for the display, LED strip and delay drivers.

use crate::display::{Panel, HEIGHT, WIDTH};
use core::convert::Infallible;
use core::ops::Range;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use smart_leds::{SmartLedsWrite, RGB8};

pub struct Frame {
    pub pixels: [[bool; WIDTH as usize]; HEIGHT as usize],
    pub flushes: usize,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            pixels: [[false; WIDTH as usize]; HEIGHT as usize],
            flushes: 0,
        }
    }

    pub fn on(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    pub fn lit(&self, xs: Range<usize>, ys: Range<usize>) -> usize {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .filter(|&(x, y)| self.on(x, y))
            .count()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < WIDTH as usize && y < HEIGHT as usize {
                    self.pixels[y][x] = color.is_on();
                }
            }
        }
        Ok(())
    }
}

impl Panel for Frame {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct Strip {
    pub frames: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for Strip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[derive(Default)]
pub struct Delay {
    pub waits_us: Vec<u32>,
    pub waits_ms: Vec<u32>,
}

impl DelayUs<u32> for Delay {
    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }
}

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
