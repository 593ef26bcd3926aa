use crate::meter::Reading;
use core::fmt::Write;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

const TITLE: &str = "Ohmmeter";
const BAND_ROWS: [i32; 3] = [15, 33, 50];

/// A monochrome draw target whose pixels only reach the glass on `flush`,
/// such as an SSD1306 in buffered graphics mode.
pub trait Panel: DrawTarget<Color = BinaryColor> {
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Draws `reading` over the whole of `target`.
///
/// The left column shows the averaged ADC code and the estimated resistance,
/// the right column the names of the three color bands.
pub fn render<D>(target: &mut D, reading: &Reading) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

    target.clear(BinaryColor::Off)?;

    Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT))
        .into_styled(stroke)
        .draw(target)?;
    draw_text(target, TITLE, Point::new(28, 2), text)?;
    Line::new(Point::new(0, 10), Point::new(WIDTH as i32 - 1, 10))
        .into_styled(stroke)
        .draw(target)?;

    draw_text(target, "ADC", Point::new(5, 15), text)?;
    draw_text(target, &decimal(reading.sample), Point::new(5, 25), text)?;
    Line::new(Point::new(0, 35), Point::new(64, 35))
        .into_styled(stroke)
        .draw(target)?;

    draw_text(target, "RES", Point::new(5, 40), text)?;
    draw_text(target, &ohms(reading.ohms), Point::new(5, 52), text)?;

    Line::new(Point::new(64, 10), Point::new(64, HEIGHT as i32 - 1))
        .into_styled(stroke)
        .draw(target)?;

    for (color, y) in reading.bands.colors().into_iter().zip(BAND_ROWS) {
        draw_text(target, color.name(), Point::new(67, y), text)?;
    }

    Ok(())
}

fn draw_text<D>(
    target: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, BinaryColor>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, position, style, Baseline::Top).draw(target)?;
    Ok(())
}

// Wide enough for any u32 and for f32::MAX printed without decimals.
type Label = String<40>;

fn decimal(value: u32) -> Label {
    let mut label = Label::new();
    // Label holds any u32, so the write cannot run out of room.
    write!(label, "{}", value).ok();
    label
}

fn ohms(value: f32) -> Label {
    let mut label = Label::new();
    // Label holds f32::MAX without decimals.
    write!(label, "{:.0}", value).ok();
    label
}
