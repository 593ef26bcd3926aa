use crate::error::MeasureError;

/// The E24 preferred values for one decade.
pub const E24: [u32; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, 22, 24, 27, 30, 33, 36, 39, 43, 47, 51, 56, 62, 68, 75, 82, 91,
];

/// Snaps a resistance to the nearest E24 value in the same decade.
///
/// The integer part of `ohms` is reduced to two digits while counting the
/// scale factor, matched against [`E24`], and scaled back up. When two
/// entries are equally close the lower one wins. Values under 10 ohms match
/// the bottom of the first decade.
///
/// # Examples
///
/// ```
/// use ohmmeter::commercial_value;
///
/// assert_eq!(commercial_value(4_612.0), Ok(4_700));
/// assert_eq!(commercial_value(47.0), Ok(47));
/// ```
pub fn commercial_value(ohms: f32) -> Result<u32, MeasureError> {
    let truncated = ohms as u32;
    let mut value = truncated;
    let mut multiplier: u32 = 1;

    while value >= 100 {
        value /= 10;
        multiplier *= 10;
    }

    let mut closest = E24[0];
    let mut min_diff = value.abs_diff(closest);

    for candidate in E24 {
        let diff = value.abs_diff(candidate);
        if diff < min_diff {
            min_diff = diff;
            closest = candidate;
        }
    }

    closest
        .checked_mul(multiplier)
        .ok_or(MeasureError::OutOfRange(truncated))
}
