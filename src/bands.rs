use crate::error::MeasureError;
use smart_leds::RGB8;

/// Resistor color code, indexed by the digit or decade it encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Grey = 8,
    White = 9,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
    ];

    /// Returns the color encoding `index`, or `None` past 9.
    pub fn from_index(index: u32) -> Option<Color> {
        Color::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::Brown => "BROWN",
            Color::Red => "RED",
            Color::Orange => "ORANGE",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Violet => "VIOLET",
            Color::Grey => "GREY",
            Color::White => "WHITE",
        }
    }

    /// The LED color used to show this band. Dimmed to what reads well on
    /// a WS2812 matrix at arm's length.
    pub fn rgb(self) -> RGB8 {
        let (r, g, b) = match self {
            Color::Black => (0, 0, 0),
            Color::Brown => (12, 8, 0),
            Color::Red => (40, 0, 0),
            Color::Orange => (4, 8, 0),
            Color::Yellow => (20, 20, 0),
            Color::Green => (0, 40, 0),
            Color::Blue => (0, 0, 40),
            Color::Violet => (20, 0, 40),
            Color::Grey => (20, 20, 20),
            Color::White => (1, 1, 1),
        };
        RGB8 { r, g, b }
    }
}

/// The three bands of a 5% resistor: two significant digits and a decade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bands {
    pub first: Color,
    pub second: Color,
    pub multiplier: Color,
}

impl Bands {
    /// Decodes a resistance in ohms into its color bands.
    ///
    /// Returns [`MeasureError::OutOfRange`] if the value needs more decades
    /// than the code has colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{Bands, Color};
    ///
    /// let bands = Bands::decode(470).unwrap();
    ///
    /// assert_eq!(bands.first, Color::Yellow);
    /// assert_eq!(bands.second, Color::Violet);
    /// assert_eq!(bands.multiplier, Color::Brown);
    /// ```
    pub fn decode(value: u32) -> Result<Bands, MeasureError> {
        let mut reduced = value;
        let mut decades = 0;

        while reduced >= 100 {
            reduced /= 10;
            decades += 1;
        }

        let color = |index| Color::from_index(index).ok_or(MeasureError::OutOfRange(value));

        Ok(Bands {
            first: color(reduced / 10)?,
            second: color(reduced % 10)?,
            multiplier: color(decades)?,
        })
    }

    /// The bands in the order they are read off the resistor body.
    pub fn colors(&self) -> [Color; 3] {
        [self.first, self.second, self.multiplier]
    }
}
