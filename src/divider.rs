use crate::error::MeasureError;

/// Inverts the voltage divider: returns the unknown resistance (ohms) in
/// series with `reference_ohms`, given the averaged ADC `sample` and the
/// ADC's full-scale code `max_code`.
///
/// `R_x = R_ref * sample / (max_code - sample)`
///
/// Returns [`MeasureError::DivisionByZero`] at the saturation code and
/// [`MeasureError::OutOfRange`] for samples past it.
///
/// # Examples
///
/// ```
/// use ohmmeter::{resistance, MeasureError};
///
/// assert_eq!(resistance(0, 10_000, 4095), Ok(0.0));
/// assert_eq!(resistance(2730, 10_000, 4095), Ok(20_000.0));
/// assert_eq!(resistance(4095, 10_000, 4095), Err(MeasureError::DivisionByZero));
/// ```
pub fn resistance(sample: u32, reference_ohms: u32, max_code: u32) -> Result<f32, MeasureError> {
    if sample > max_code {
        return Err(MeasureError::OutOfRange(sample));
    }
    if sample == max_code {
        return Err(MeasureError::DivisionByZero);
    }

    Ok(reference_ohms as f32 * sample as f32 / (max_code - sample) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_CODE: u32 = 4095;
    const REFERENCE: u32 = 10_000;

    #[test]
    fn finite_below_saturation() {
        for sample in 0..MAX_CODE {
            let ohms = resistance(sample, REFERENCE, MAX_CODE).unwrap();
            assert!(ohms.is_finite() && ohms >= 0.0, "sample {sample}: {ohms}");
        }
    }

    #[test]
    fn saturation() {
        assert_eq!(
            resistance(MAX_CODE, REFERENCE, MAX_CODE),
            Err(MeasureError::DivisionByZero)
        );
    }

    #[test]
    fn past_saturation() {
        assert_eq!(
            resistance(MAX_CODE + 1, REFERENCE, MAX_CODE),
            Err(MeasureError::OutOfRange(4096))
        );
    }

    #[test]
    fn midscale() {
        let ohms = resistance(2048, REFERENCE, MAX_CODE).unwrap();
        assert!((ohms - 10_004.885).abs() < 0.01, "{ohms}");
    }

    #[test]
    fn largest() {
        assert_eq!(resistance(4094, REFERENCE, MAX_CODE), Ok(40_940_000.0));
    }
}
