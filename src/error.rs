use core::{convert::Infallible, fmt};

/// Errors produced by the numeric pipeline, independent of any hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureError {
    /// The raw sample sits at the ADC's saturation code, so the divider
    /// formula has no finite solution (usually an open circuit).
    DivisionByZero,
    /// A sample past full scale, or a value too large to express as two
    /// digits and a decade.
    OutOfRange(u32),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::DivisionByZero => f.write_str("sample at ADC saturation"),
            MeasureError::OutOfRange(value) => write!(f, "value {} out of range", value),
        }
    }
}

/// Errors returned by [`Ohmmeter::tick`](crate::Ohmmeter::tick).
///
/// Hardware errors are passed through as-is; the loop has no recovery
/// beyond sampling again on the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<Adc, Display = Infallible, Leds = Infallible> {
    Adc(Adc),
    Measure(MeasureError),
    Display(Display),
    Leds(Leds),
}

impl<Adc, Display, Leds> From<MeasureError> for Error<Adc, Display, Leds> {
    fn from(error: MeasureError) -> Self {
        Error::Measure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            MeasureError::DivisionByZero.to_string(),
            "sample at ADC saturation"
        );
        assert_eq!(
            MeasureError::OutOfRange(42).to_string(),
            "value 42 out of range"
        );
    }

    #[test]
    fn from_measure_error() {
        let error: Error<()> = MeasureError::DivisionByZero.into();
        assert_eq!(error, Error::Measure(MeasureError::DivisionByZero));
    }
}
